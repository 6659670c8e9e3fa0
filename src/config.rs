use crate::style::{Color, StrokeStyle, StrokeWidth, StyleError};
use bon::Builder;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Builder)]
pub struct CanvasConfig {
	/// Color token for strokes drawn before the color control is touched.
	#[builder(into, default = "#000000".to_owned())]
	pub initial_color: String,

	#[builder(default = 3.0)]
	pub initial_width: f32,

	/// How long a clear waits before strokes are actually removed.
	#[builder(default = Duration::from_millis(300))]
	pub clear_delay: Duration,

	/// Length of the fade-out transition requested from the render surface on clear.
	#[builder(default = Duration::from_millis(300))]
	pub fade_duration: Duration,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl CanvasConfig {
	pub fn initial_style(&self) -> Result<StrokeStyle, StyleError> {
		Ok(StrokeStyle {
			color: Color::parse(&self.initial_color)?,
			width: StrokeWidth::new(self.initial_width)?,
		})
	}
}
