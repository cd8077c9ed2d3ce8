use crate::geom::*;
use itertools::Itertools;

/// One quadratic Bezier piece of a smoothed stroke.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
#[display("{start} ~{control}~ {end}")]
pub struct QuadSegment {
	pub start: Point,
	pub control: Point,
	pub end: Point,
}

impl QuadSegment {
	pub fn new(start: Point, control: Point, end: Point) -> Self {
		Self {
			start,
			control,
			end,
		}
	}

	pub fn evaluate(&self, t: f32) -> Point {
		debug_assert!((0.0..=1.0).contains(&t));
		let s = 1.0 - t;
		self.start * (s * s) + self.control * (2.0 * s * t) + self.end * (t * t)
	}

	/// The smallest box containing every point of the curve, which may be
	/// strictly smaller than the box around the control polygon.
	pub fn bounds(&self) -> AABox {
		let mut bounds = AABox::containing([self.start, self.end].into_iter());
		let denominator = self.start - 2.0 * self.control + self.end;
		for axis in 0..2 {
			if denominator[axis] == 0.0 {
				continue;
			}
			let t = (self.start[axis] - self.control[axis]) / denominator[axis];
			if t > 0.0 && t < 1.0 {
				bounds = bounds.expanded_to_contain(self.evaluate(t));
			}
		}
		bounds
	}

	pub fn control_bounds(&self) -> AABox {
		AABox::containing([self.start, self.control, self.end].into_iter())
	}
}

/// The accumulated drawing: every segment emitted since the last clear, in order.
///
/// Only the owning smoother can append or clear; everyone else gets `&Path`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Path {
	segments: Vec<QuadSegment>,
}

impl Path {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn segments(&self) -> &[QuadSegment] {
		&self.segments
	}

	pub fn iter(&self) -> std::slice::Iter<'_, QuadSegment> {
		self.segments.iter()
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn last(&self) -> Option<&QuadSegment> {
		self.segments.last()
	}

	pub fn bounds(&self) -> AABox {
		self
			.segments
			.iter()
			.fold(AABox::empty(), |b, s| b.union(s.bounds()))
	}

	pub(crate) fn push(&mut self, segment: QuadSegment) {
		self.segments.push(segment);
	}

	pub(crate) fn clear(&mut self) {
		self.segments.clear();
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a QuadSegment;
	type IntoIter = std::slice::Iter<'a, QuadSegment>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl std::fmt::Display for Path {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}]", self.segments.iter().format(", "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;

	#[test]
	fn evaluate_endpoints() {
		let segment = QuadSegment::new(vec2(0.0, 0.0), vec2(10.0, 10.0), vec2(20.0, 0.0));
		assert_eq!(segment.evaluate(0.0), segment.start);
		assert_eq!(segment.evaluate(1.0), segment.end);
		assert_eq!(segment.evaluate(0.5), vec2(10.0, 5.0));
	}

	#[test]
	fn bounds_are_tight() {
		let segment = QuadSegment::new(vec2(0.0, 0.0), vec2(10.0, 10.0), vec2(20.0, 0.0));
		let bounds = segment.bounds();
		assert_eq!(bounds.min(), vec2(0.0, 0.0));
		assert_abs_diff_eq!(bounds.max().x, 20.0);
		assert_abs_diff_eq!(bounds.max().y, 5.0);
		assert_eq!(segment.control_bounds().max(), vec2(20.0, 10.0));
	}

	#[test]
	fn bounds_include_overshoot_on_both_axes() {
		let segment = QuadSegment::new(vec2(0.0, 0.0), vec2(-8.0, 8.0), vec2(4.0, 4.0));
		let bounds = segment.bounds();
		// x extremum at t = 0.4: 2 * 0.6 * 0.4 * -8 + 0.16 * 4 = -3.2
		assert_abs_diff_eq!(bounds.min().x, -3.2, epsilon = 1e-5);
		// y extremum at t = 2/3: 2 * (1/3) * (2/3) * 8 + (4/9) * 4 = 5.333...
		assert_abs_diff_eq!(bounds.max().y, 16.0 / 3.0, epsilon = 1e-5);
		assert_abs_diff_eq!(bounds.max().x, 4.0);
		assert_abs_diff_eq!(bounds.min().y, 0.0);
	}

	#[test]
	fn bounds_of_degenerate_segment() {
		let p = vec2(10.0, 10.0);
		let bounds = QuadSegment::new(p, p, p).bounds();
		assert_eq!(bounds.min(), p);
		assert_eq!(bounds.max(), p);
	}

	#[test]
	fn path_accumulates_in_order() {
		let mut path = Path::new();
		assert!(path.is_empty());
		assert!(path.bounds().is_empty());

		let a = QuadSegment::new(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0));
		let b = QuadSegment::new(vec2(2.0, 0.0), vec2(3.0, 3.0), vec2(4.0, 4.0));
		path.push(a);
		path.push(b);
		assert_eq!(path.len(), 2);
		assert_eq!(path.segments(), &[a, b]);
		assert_eq!(path.last(), Some(&b));
		assert_eq!(path.bounds().min(), vec2(0.0, 0.0));
		assert_eq!(path.bounds().max(), vec2(4.0, 4.0));

		path.clear();
		assert!(path.is_empty());
	}

	#[test]
	fn display() {
		let mut path = Path::new();
		path.push(QuadSegment::new(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0)));
		path.push(QuadSegment::new(vec2(2.0, 0.0), vec2(3.0, 0.0), vec2(4.0, 0.0)));
		assert_eq!(path.to_string(), "[[0, 0] ~[1, 0]~ [2, 0], [2, 0] ~[3, 0]~ [4, 0]]");
	}
}
