//! Real-time smoothing of freehand pointer input into quadratic Bezier ink.
//!
//! Raw samples go into an [`engine::StrokeSmoother`], which filters jitter, keeps
//! the accumulated [`engine::Path`], and reports the region each new segment
//! dirties. [`input::InkSurface`] wires that to a [`render::Canvas`].

pub mod util;

pub mod engine;
pub mod geom;
pub mod input;
pub mod render;


pub use engine::{Path, QuadSegment, SegmentUpdate, StrokePhase, StrokeSmoother, StrokeState};
pub use geom::{Point, Rect};
pub use input::{InkSurface, PointerEvent};
pub use render::{render, stroke_style, Canvas, Invalidation, StrokeStyle};
