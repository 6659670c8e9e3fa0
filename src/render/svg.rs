use super::{Polyline, RenderSurface};
use crate::engine::StrokeId;
use crate::geom::Rect;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
struct Element {
	id: StrokeId,
	stroke: String,
	stroke_width: f32,
	points: String,
	fade: Option<Duration>,
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			r#"<polyline id="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" points="{}""#,
			self.id, self.stroke, self.stroke_width, self.points
		)?;
		if let Some(fade) = self.fade {
			write!(
				f,
				r#" style="transition: opacity {}s ease-out; opacity: 0""#,
				fade.as_secs_f32()
			)?;
		}
		write!(f, "/>")
	}
}

/// An in-memory SVG scene. `Display` writes it out as a standalone document.
#[derive(Debug, Clone)]
pub struct SvgSurface {
	bounds: Rect,
	elements: Vec<Element>,
}

impl SvgSurface {
	pub fn new(bounds: Rect) -> Self {
		Self {
			bounds,
			elements: Vec::new(),
		}
	}

	/// Moves or resizes the surface, e.g. after a layout change or scroll.
	pub fn set_bounds(&mut self, bounds: Rect) {
		self.bounds = bounds;
	}

	pub fn element_count(&self) -> usize {
		self.elements.len()
	}

	fn element(&self, id: StrokeId) -> Option<&Element> {
		self.elements.iter().rev().find(|e| e.id == id)
	}

	/// The rendered `points` attribute of a stroke's polyline.
	pub fn points(&self, id: StrokeId) -> Option<&str> {
		self.element(id).map(|e| e.points.as_str())
	}

	pub fn is_fading(&self, id: StrokeId) -> bool {
		self.element(id).is_some_and(|e| e.fade.is_some())
	}
}

impl RenderSurface for SvgSurface {
	fn bounds(&self) -> Rect {
		self.bounds
	}

	fn insert(&mut self, polyline: &Polyline) {
		self.elements.push(Element {
			id: polyline.id(),
			stroke: polyline.style().color.to_string(),
			stroke_width: polyline.style().width.get(),
			points: polyline.points().to_owned(),
			fade: None,
		});
	}

	fn update(&mut self, polyline: &Polyline) {
		// The live stroke is almost always the most recent element.
		let Some(element) = self.elements.iter_mut().rev().find(|e| e.id == polyline.id()) else {
			tracing::warn!(id = %polyline.id(), "update for unknown polyline");
			return;
		};
		element.points.clear();
		element.points.push_str(polyline.points());
	}

	fn fade_out(&mut self, duration: Duration) {
		for element in self.elements.iter_mut().filter(|e| e.fade.is_none()) {
			element.fade = Some(duration);
		}
	}

	fn remove_all(&mut self) {
		self.elements.clear();
	}
}

impl fmt::Display for SvgSurface {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let size = self.bounds.size();
		writeln!(
			f,
			r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
			size.x, size.y
		)?;
		for element in &self.elements {
			writeln!(f, "{element}")?;
		}
		write!(f, "</svg>")
	}
}
