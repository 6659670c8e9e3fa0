use glam::Vec2;

/// A point in surface-local space.
pub type Point = Vec2;

/// An axis-aligned rectangle, as reported by a drawing surface for its own bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
	min: Vec2,
	max: Vec2,
}

impl Rect {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
		Self::new(origin, origin + size)
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	/// The top-left corner.
	pub fn origin(&self) -> Vec2 {
		self.min
	}

	pub fn size(&self) -> Vec2 {
		if self.is_empty() {
			Vec2::ZERO
		} else {
			self.max - self.min
		}
	}

	/// Maps a client-space position into coordinates relative to the top-left corner.
	pub fn to_local(&self, client: Vec2) -> Point {
		client - self.min
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[test]
	fn to_local_subtracts_origin() {
		let rect = Rect::from_origin_size(vec2(100.0, 50.0), vec2(640.0, 480.0));
		assert_eq!(rect.to_local(vec2(110.0, 60.0)), vec2(10.0, 10.0));
		assert_eq!(rect.to_local(vec2(90.0, 40.0)), vec2(-10.0, -10.0));
	}

	#[test]
	fn containing() {
		assert!(Rect::containing(std::iter::empty()).is_empty());

		let rect = Rect::containing([vec2(10.0, 20.0), vec2(-5.0, 3.0), vec2(4.0, 40.0)].into_iter());
		assert_eq!(rect.origin(), vec2(-5.0, 3.0));
		assert_eq!(rect.size(), vec2(15.0, 37.0));
	}
}
