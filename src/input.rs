use crate::geom::{Point, Rect};
use glam::Vec2;

/// Where an input event sits in the lifetime of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
	Start,
	Move,
	End,
	Cancel,
	/// The pointer left the surface.
	Leave,
}

impl Phase {
	/// End, cancel and leave all finish a stroke the same way.
	pub fn is_terminal(self) -> bool {
		matches!(self, Phase::End | Phase::Cancel | Phase::Leave)
	}
}

/// The contact information carried by an input event, in client space.
#[derive(Debug, Clone, PartialEq)]
pub enum Contact {
	Pointer(Vec2),
	/// Active touch points, in the order reported by the platform.
	Touch(Vec<Vec2>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputEvent {
	pub phase: Phase,
	pub contact: Contact,
}

impl InputEvent {
	pub fn pointer(phase: Phase, x: f32, y: f32) -> Self {
		Self {
			phase,
			contact: Contact::Pointer(Vec2::new(x, y)),
		}
	}

	pub fn touch(phase: Phase, contacts: impl IntoIterator<Item = Vec2>) -> Self {
		Self {
			phase,
			contact: Contact::Touch(contacts.into_iter().collect()),
		}
	}
}

pub trait CoordinateSource {
	/// Client-space position of the tracked contact, if there is one.
	fn client_coordinates(&self) -> Option<Vec2>;

	fn local_coordinates(&self, bounds: &Rect) -> Option<Point> {
		self.client_coordinates().map(|c| bounds.to_local(c))
	}
}

impl CoordinateSource for Contact {
	fn client_coordinates(&self) -> Option<Vec2> {
		match self {
			Contact::Pointer(position) => Some(*position),
			// Multi-touch is not supported; only the first contact is tracked.
			Contact::Touch(contacts) => contacts.first().copied(),
		}
	}
}

impl CoordinateSource for InputEvent {
	fn client_coordinates(&self) -> Option<Vec2> {
		self.contact.client_coordinates()
	}
}
