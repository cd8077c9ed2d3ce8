use glam::Vec2;

/// A position in the surface's local coordinate space.
pub type Point = Vec2;

pub fn midpoint(a: Point, b: Point) -> Point {
	(a + b) * 0.5
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn union(self, other: Self) -> Self {
		if other.is_empty() {
			return self;
		}
		if self.is_empty() {
			return other;
		}
		Self::new(self.min.min(other.min), self.max.max(other.max))
	}

	/// Grows the box by `margin` on every side. Empty boxes stay empty.
	pub fn inflated(self, margin: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - Vec2::splat(margin), self.max + Vec2::splat(margin))
	}

	/// Inclusive on every edge, so degenerate boxes still contain their points.
	pub fn contains(&self, point: Vec2) -> bool {
		!(point.x < self.min.x)
			&& !(point.y < self.min.y)
			&& !(point.x > self.max.x)
			&& !(point.y > self.max.y)
	}

	pub fn to_rect(&self) -> Rect {
		if self.is_empty() {
			return Rect::default();
		}
		let size = self.max - self.min;
		Rect::new(self.min.x, self.min.y, size.x, size.y)
	}
}

/// An axis-aligned rectangle in the (x, y, width, height) form canvases expect for
/// invalidation.
#[derive(Debug, Default, Clone, Copy, PartialEq, derive_more::Display)]
#[display("({x}, {y}, {width}, {height})")]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32,
}

impl Rect {
	pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn origin(&self) -> Vec2 {
		Vec2::new(self.x, self.y)
	}

	pub fn size(&self) -> Vec2 {
		Vec2::new(self.width, self.height)
	}

	pub fn is_empty(&self) -> bool {
		!(self.width > 0.0 && self.height > 0.0)
	}

	pub fn to_aabox(&self) -> AABox {
		AABox::new(self.origin(), self.origin() + self.size())
	}
}

impl From<AABox> for Rect {
	fn from(value: AABox) -> Self {
		value.to_rect()
	}
}
