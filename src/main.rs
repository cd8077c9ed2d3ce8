use smooth_ink::render::RecordingCanvas;
use smooth_ink::util::ResultExt;
use smooth_ink::*;

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)
	.map_err(|_| NoTracingSubscriber)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`, for any dependency that logs through the former.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;
	Ok(())
}

/// A hand-drawn looking spiral: a few rounds with some jitter mixed in.
fn spiral(samples: usize) -> impl Iterator<Item = Point> {
	let center = Point::new(200.0, 200.0);
	(0..samples).map(move |i| {
		let t = i as f32 / samples as f32;
		let angle = t * 6.0 * std::f32::consts::PI;
		let radius = 20.0 + 150.0 * t;
		let jitter = if i % 3 == 0 { 1.5 } else { 0.0 };
		center + Point::from_angle(angle) * radius + Point::splat(jitter)
	})
}

fn main() {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	let style = match std::env::args().nth(1) {
		Some(color) => stroke_style()
			.color(&color)
			.build()
			.unwrap_or_log_default("stroke style"),
		None => StrokeStyle::default(),
	};

	let mut surface = InkSurface::new(style);
	let mut canvas = RecordingCanvas::new();

	let mut previous = None;
	for location in spiral(400) {
		let event = match previous {
			None => PointerEvent::Began {
				location,
				previous: location,
			},
			Some(previous) => PointerEvent::Moved { location, previous },
		};
		surface.handle(event, &mut canvas);
		previous = Some(location);
	}
	surface.handle(PointerEvent::Ended, &mut canvas);

	let invalidations = canvas.take_invalidations();
	for invalidation in &invalidations {
		surface.draw(&mut canvas, *invalidation);
	}

	let dirty = invalidations
		.iter()
		.filter_map(|i| match i {
			Invalidation::Region(rect) => Some(rect.to_aabox()),
			Invalidation::All => None,
		})
		.fold(geom::AABox::empty(), geom::AABox::union);
	tracing::info!(
		segments = surface.path().len(),
		redraws = invalidations.len(),
		dirty = %dirty.to_rect(),
		bounds = %surface.path().bounds().to_rect(),
		"replayed stroke"
	);
	tracing::debug!(path = %surface.path());

	surface.clear(&mut canvas);
	canvas
		.take_invalidations()
		.into_iter()
		.for_each(|i| surface.draw(&mut canvas, i));
	tracing::info!(commands = canvas.commands().len(), "done");
}
