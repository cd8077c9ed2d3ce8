mod style;
pub use style::*;

mod recording;
pub use recording::*;

use crate::engine::Path;
use crate::geom::*;
use csscolorparser::Color;

/// A region a canvas must repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invalidation {
	Region(Rect),
	All,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
	Butt,
	#[default]
	Round,
	Square,
}

/// How an accumulated outline is stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
	pub width: f32,
	pub cap: LineCap,
	pub color: Color,
}

/// The drawing surface the smoothed path is painted onto.
///
/// Path commands accumulate into a pending outline until `stroke_path` paints and
/// resets it.
pub trait Canvas {
	fn fill_region(&mut self, region: Invalidation, color: &Color);
	fn move_to(&mut self, point: Point);
	fn quad_to(&mut self, control: Point, end: Point);
	fn stroke_path(&mut self, outline: &Outline);

	/// Asks for `region` to be repainted at the canvas' convenience.
	fn invalidate(&mut self, region: Invalidation);
}

/// Repaints `region` of `canvas`: clears it to the style's background, then strokes
/// the whole path as a single round-capped outline.
pub fn render(path: &Path, canvas: &mut impl Canvas, style: &StrokeStyle, region: Invalidation) {
	canvas.fill_region(region, &style.background);
	if path.is_empty() {
		return;
	}
	for segment in path {
		canvas.move_to(segment.start);
		canvas.quad_to(segment.control, segment.end);
	}
	canvas.stroke_path(&Outline {
		width: style.width,
		cap: LineCap::Round,
		color: style.color.clone(),
	});
}
