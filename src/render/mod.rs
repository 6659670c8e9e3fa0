mod svg;
pub use svg::*;

use crate::engine::{Stroke, StrokeId};
use crate::geom::{Point, Rect};
use crate::style::StrokeStyle;
use itertools::Itertools;
use std::time::Duration;

/// The visual side of a drawing surface.
pub trait RenderSurface {
	/// Current bounds in client space. Queried for every input event, so layout changes are picked up.
	fn bounds(&self) -> Rect;

	fn insert(&mut self, polyline: &Polyline);

	/// Replaces the points of the visual previously inserted with the same id with the full
	/// `points` text of `polyline`.
	fn update(&mut self, polyline: &Polyline);

	/// Starts fading out every visual currently on the surface.
	fn fade_out(&mut self, duration: Duration);

	fn remove_all(&mut self);
}

fn format_point(point: Point) -> String {
	format!("{},{}", point.x, point.y)
}

/// Renders points the way the `points` attribute of an SVG `<polyline>` expects them.
pub fn points_attribute(points: &[Point]) -> String {
	points.iter().copied().map(format_point).join(" ")
}

/// The live visual of an open stroke.
///
/// The `points` text is extended in place on every append and always equals `points_attribute` of
/// the full point list. Render surfaces receive the whole text on each update.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
	id: StrokeId,
	style: StrokeStyle,
	points: String,
	len: usize,
}

impl Polyline {
	pub fn new(stroke: &Stroke) -> Self {
		Self {
			id: stroke.id(),
			style: stroke.style().clone(),
			points: points_attribute(stroke.points()),
			len: stroke.points().len(),
		}
	}

	pub fn push(&mut self, point: Point) {
		if self.len > 0 {
			self.points.push(' ');
		}
		self.points.push_str(&format_point(point));
		self.len += 1;
	}

	pub fn id(&self) -> StrokeId {
		self.id
	}

	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	pub fn points(&self) -> &str {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.len
	}
}
