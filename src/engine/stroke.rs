use super::path::*;
use crate::geom::*;
use crate::render::{Invalidation, DEFAULT_STROKE_WIDTH};

/// Samples closer than this (squared) to the current point are dropped as jitter.
pub const MIN_DISTANCE_SQUARED: f32 = 16.0;

/// The last three accepted samples of the active stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StrokeState {
	pub previous_last_point: Point,
	pub last_point: Point,
	pub current_point: Point,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokePhase {
	#[default]
	Idle,
	StrokeActive,
}

/// What an accepted sample produced: the new segment and the region it dirtied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentUpdate {
	pub segment: QuadSegment,
	pub redraw: Rect,
}

/// Turns a stream of raw pointer samples into a C¹-smooth chain of quadratic
/// segments.
///
/// Each accepted sample becomes the control point of a segment that runs between
/// the midpoints of the neighbouring samples, so consecutive segments share a
/// tangent where they meet.
#[derive(Debug, Clone)]
pub struct StrokeSmoother {
	state: StrokeState,
	phase: StrokePhase,
	path: Path,
	stroke_width: f32,
}

impl Default for StrokeSmoother {
	fn default() -> Self {
		Self::new(DEFAULT_STROKE_WIDTH)
	}
}

impl StrokeSmoother {
	pub fn new(stroke_width: f32) -> Self {
		Self {
			state: Default::default(),
			phase: Default::default(),
			path: Path::new(),
			stroke_width,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn state(&self) -> &StrokeState {
		&self.state
	}

	pub fn phase(&self) -> StrokePhase {
		self.phase
	}

	pub fn is_active(&self) -> bool {
		self.phase == StrokePhase::StrokeActive
	}

	pub fn stroke_width(&self) -> f32 {
		self.stroke_width
	}

	/// Only affects the padding of redraw regions reported from now on.
	pub fn set_stroke_width(&mut self, stroke_width: f32) {
		self.stroke_width = stroke_width;
	}

	/// Starts a stroke at `location`, with `previous` being the location the input
	/// platform reports as preceding it.
	///
	/// The sample is immediately run through the move logic against the point the
	/// smoother held before this call. Whether that yields a segment depends on how
	/// far the new stroke starts from it; a tap is not guaranteed to leave a mark.
	/// Afterwards `current_point` is `location` either way.
	pub fn begin(&mut self, location: Point, previous: Point) -> Option<SegmentUpdate> {
		if self.is_active() {
			tracing::debug!("stroke restarted without end");
		}
		tracing::debug!(%location, %previous, "begin stroke");
		self.phase = StrokePhase::StrokeActive;
		self.state.previous_last_point = previous;
		self.state.last_point = previous;
		let update = self.accept(location, previous);
		if update.is_none() {
			self.state.current_point = location;
		}
		update
	}

	/// Feeds one pointer sample. Returns `None` when the sample is too close to the
	/// current point, in which case nothing changes.
	pub fn move_to(&mut self, location: Point, previous: Point) -> Option<SegmentUpdate> {
		if !self.is_active() {
			tracing::warn!(%location, "move without an active stroke");
			return None;
		}
		self.accept(location, previous)
	}

	pub fn end(&mut self) {
		if !self.is_active() {
			tracing::warn!("end without an active stroke");
			return;
		}
		tracing::debug!(segments = self.path.len(), "end stroke");
		self.phase = StrokePhase::Idle;
	}

	/// Drops the whole drawing. The stroke in progress, if any, carries on.
	pub fn clear(&mut self) -> Invalidation {
		tracing::debug!(segments = self.path.len(), "clear");
		self.path.clear();
		Invalidation::All
	}

	fn accept(&mut self, location: Point, previous: Point) -> Option<SegmentUpdate> {
		let distance_squared = location.distance_squared(self.state.current_point);
		if distance_squared < MIN_DISTANCE_SQUARED {
			tracing::trace!(%location, distance_squared, "sample rejected");
			return None;
		}

		// previous_last -> mid1 -> last -> mid2 -> current
		let state = &mut self.state;
		state.previous_last_point = state.last_point;
		state.last_point = previous;
		state.current_point = location;

		let mid1 = midpoint(state.last_point, state.previous_last_point);
		let mid2 = midpoint(state.current_point, state.last_point);
		let segment = QuadSegment::new(mid1, state.last_point, mid2);
		let redraw = segment.bounds().inflated(2.0 * self.stroke_width).to_rect();

		self.path.push(segment);
		tracing::debug!(%segment, %redraw, "segment appended");
		Some(SegmentUpdate { segment, redraw })
	}
}
