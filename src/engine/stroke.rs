use crate::geom::{Point, Rect};
use crate::style::StrokeStyle;
use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("stroke-{_0}")]
pub struct StrokeId(u64);

impl StrokeId {
	pub const FIRST: StrokeId = StrokeId(1);

	pub fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

/// A finished stroke. Nothing can change it once it is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	id: StrokeId,
	style: StrokeStyle,
	points: Vec<Point>,
}

impl Stroke {
	pub fn id(&self) -> StrokeId {
		self.id
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	/// Points in drawing order. Never empty.
	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn bounds(&self) -> Rect {
		Rect::containing(self.points.iter().copied())
	}
}

/// A stroke still being drawn. Points can only be appended.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenStroke {
	stroke: Stroke,
}

impl OpenStroke {
	pub fn new(id: StrokeId, style: StrokeStyle, start: Point) -> Self {
		Self {
			stroke: Stroke {
				id,
				style,
				points: vec![start],
			},
		}
	}

	pub fn add_point(&mut self, point: Point) {
		self.stroke.points.push(point);
	}

	pub fn close(self) -> Stroke {
		self.stroke
	}
}

impl std::ops::Deref for OpenStroke {
	type Target = Stroke;

	fn deref(&self) -> &Stroke {
		&self.stroke
	}
}

static_assertions::assert_impl_all!(Stroke: Send, Sync);
