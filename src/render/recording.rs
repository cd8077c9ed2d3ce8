use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
	Fill(Invalidation, Color),
	MoveTo(Point),
	QuadTo(Point, Point),
	Stroke(Outline),
}

/// A headless canvas that remembers what it was asked to do.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
	commands: Vec<DrawCommand>,
	invalidations: Vec<Invalidation>,
}

impl RecordingCanvas {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	pub fn invalidations(&self) -> &[Invalidation] {
		&self.invalidations
	}

	/// Hands out the pending invalidations, leaving none behind.
	pub fn take_invalidations(&mut self) -> Vec<Invalidation> {
		std::mem::take(&mut self.invalidations)
	}

	/// The union of everything invalidated so far, or `None` if a full repaint was
	/// requested.
	pub fn dirty_bounds(&self) -> Option<AABox> {
		self
			.invalidations
			.iter()
			.try_fold(AABox::empty(), |bounds, invalidation| match invalidation {
				Invalidation::Region(rect) => Some(bounds.union(rect.to_aabox())),
				Invalidation::All => None,
			})
	}

	pub fn clear_commands(&mut self) {
		self.commands.clear();
	}
}

impl Canvas for RecordingCanvas {
	fn fill_region(&mut self, region: Invalidation, color: &Color) {
		self.commands.push(DrawCommand::Fill(region, color.clone()));
	}

	fn move_to(&mut self, point: Point) {
		self.commands.push(DrawCommand::MoveTo(point));
	}

	fn quad_to(&mut self, control: Point, end: Point) {
		self.commands.push(DrawCommand::QuadTo(control, end));
	}

	fn stroke_path(&mut self, outline: &Outline) {
		self.commands.push(DrawCommand::Stroke(outline.clone()));
	}

	fn invalidate(&mut self, region: Invalidation) {
		self.invalidations.push(region);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dirty_bounds_accumulate() {
		let mut canvas = RecordingCanvas::new();
		assert_eq!(canvas.dirty_bounds().map(|b| b.is_empty()), Some(true));

		canvas.invalidate(Invalidation::Region(Rect::new(0.0, 0.0, 2.0, 2.0)));
		canvas.invalidate(Invalidation::Region(Rect::new(5.0, -1.0, 1.0, 1.0)));
		assert_eq!(
			canvas.dirty_bounds().map(|b| b.to_rect()),
			Some(Rect::new(0.0, -1.0, 6.0, 3.0))
		);

		canvas.invalidate(Invalidation::All);
		assert_eq!(canvas.dirty_bounds(), None);

		assert_eq!(canvas.take_invalidations().len(), 3);
		assert!(canvas.invalidations().is_empty());
	}
}
