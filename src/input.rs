use crate::engine::*;
use crate::geom::*;
use crate::render::*;

/// A pointer event as delivered by the platform. `previous` is the platform's own
/// idea of where the pointer was before, which need not match the last sample the
/// smoother accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
	Began { location: Point, previous: Point },
	Moved { location: Point, previous: Point },
	Ended,
	Cancelled,
}

/// An ink view: routes pointer events into a [`StrokeSmoother`], tells the canvas
/// what to repaint, and paints on request.
#[derive(Debug, Default)]
pub struct InkSurface {
	smoother: StrokeSmoother,
	style: StrokeStyle,
}

impl InkSurface {
	pub fn new(style: StrokeStyle) -> Self {
		Self {
			smoother: StrokeSmoother::new(style.width),
			style,
		}
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn smoother(&self) -> &StrokeSmoother {
		&self.smoother
	}

	pub fn path(&self) -> &Path {
		self.smoother.path()
	}

	/// Restyling affects every segment already drawn, so the whole surface is
	/// invalidated.
	pub fn set_style(&mut self, style: StrokeStyle, canvas: &mut impl Canvas) {
		self.smoother.set_stroke_width(style.width);
		self.style = style;
		canvas.invalidate(Invalidation::All);
	}

	/// Returns whether the event produced a new segment.
	pub fn handle(&mut self, event: PointerEvent, canvas: &mut impl Canvas) -> bool {
		let update = match event {
			PointerEvent::Began { location, previous } => self.smoother.begin(location, previous),
			PointerEvent::Moved { location, previous } => self.smoother.move_to(location, previous),
			PointerEvent::Ended | PointerEvent::Cancelled => {
				self.smoother.end();
				None
			}
		};
		match update {
			Some(SegmentUpdate { redraw, .. }) => {
				canvas.invalidate(Invalidation::Region(redraw));
				true
			}
			None => false,
		}
	}

	pub fn clear(&mut self, canvas: &mut impl Canvas) {
		let invalidation = self.smoother.clear();
		canvas.invalidate(invalidation);
	}

	pub fn draw(&self, canvas: &mut impl Canvas, region: Invalidation) {
		render(self.smoother.path(), canvas, &self.style, region);
	}
}
