use derive_more::Display;
use ordered_float::NotNan;

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
	#[error("invalid color {token:?}")]
	InvalidColor {
		token: String,
		#[source]
		source: csscolorparser::ParseColorError,
	},

	#[error("invalid stroke width {0}")]
	InvalidWidth(f32),
}

static_assertions::assert_impl_all!(StyleError: std::error::Error, Send, Sync);

/// A CSS color token, kept verbatim so it can be handed back to the render surface.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
	pub fn parse(token: &str) -> Result<Self, StyleError> {
		let token = token.trim();
		csscolorparser::parse(token).map_err(|source| StyleError::InvalidColor {
			token: token.to_owned(),
			source,
		})?;
		Ok(Self(token.to_owned()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// A finite, strictly positive stroke width. Displays as the control label, e.g. `5px`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{_0}px")]
pub struct StrokeWidth(NotNan<f32>);

impl StrokeWidth {
	pub fn new(width: f32) -> Result<Self, StyleError> {
		if !width.is_finite() || width <= 0.0 {
			return Err(StyleError::InvalidWidth(width));
		}
		let width = NotNan::new(width).map_err(|_| StyleError::InvalidWidth(width))?;
		Ok(Self(width))
	}

	pub fn get(self) -> f32 {
		self.0.into_inner()
	}
}

/// Style attributes locked into a stroke when it starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StrokeStyle {
	pub color: Color,
	pub width: StrokeWidth,
}
