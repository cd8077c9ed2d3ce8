use bon::builder;
use csscolorparser::Color;
use thiserror::Error;

pub const DEFAULT_STROKE_WIDTH: f32 = 7.0;

#[derive(Debug, Error)]
pub enum StyleError {
	#[error("stroke width must be positive and finite, got {0}")]
	InvalidWidth(f32),

	#[error("invalid color: {0}")]
	Color(#[from] csscolorparser::ParseColorError),
}

static_assertions::assert_impl_all!(StyleError: std::error::Error, Send, Sync);

/// Display attributes of the ink, owned by the embedding surface.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
	pub width: f32,
	pub color: Color,
	/// Painted over a dirty region before the path is stroked again.
	pub background: Color,
}

impl Default for StrokeStyle {
	fn default() -> Self {
		Self {
			width: DEFAULT_STROKE_WIDTH,
			color: Color::new(0.0, 0.0, 0.0, 1.0),
			background: Color::new(0.0, 0.0, 0.0, 0.0),
		}
	}
}

/// Builds a [`StrokeStyle`] from user-facing values, e.g.
/// `stroke_style().width(3.0).color("rebeccapurple").build()`.
#[builder(finish_fn = build)]
pub fn stroke_style(
	#[builder(default = DEFAULT_STROKE_WIDTH)] width: f32,
	#[builder(default = "black")] color: &str,
	#[builder(default = "transparent")] background: &str,
) -> Result<StrokeStyle, StyleError> {
	use StyleError::*;
	if !(width.is_finite() && width > 0.0) {
		Err(InvalidWidth(width))?;
	}
	Ok(StrokeStyle {
		width,
		color: csscolorparser::parse(color)?,
		background: csscolorparser::parse(background)?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_defaults_match_default() -> anyhow::Result<()> {
		let style = stroke_style().build()?;
		assert_eq!(style, StrokeStyle::default());
		assert_eq!(style.color.to_rgba8(), [0, 0, 0, 255]);
		assert_eq!(style.background.to_rgba8()[3], 0);
		Ok(())
	}

	#[test]
	fn builder_parses_css_colors() -> anyhow::Result<()> {
		let style = stroke_style()
			.width(2.5)
			.color("#ff8000")
			.background("white")
			.build()?;
		assert_eq!(style.width, 2.5);
		assert_eq!(style.color.to_rgba8(), [255, 128, 0, 255]);
		assert_eq!(style.background.to_rgba8(), [255, 255, 255, 255]);
		Ok(())
	}

	#[test]
	fn builder_rejects_bad_width() {
		for width in [0.0, -1.0, f32::NAN, f32::INFINITY] {
			assert!(matches!(
				stroke_style().width(width).build(),
				Err(StyleError::InvalidWidth(_))
			));
		}
	}

	#[test]
	fn builder_rejects_bad_color() {
		assert!(matches!(
			stroke_style().color("not a color").build(),
			Err(StyleError::Color(_))
		));
		assert!(matches!(
			stroke_style().background("#12").build(),
			Err(StyleError::Color(_))
		));
	}
}
