use super::{OpenStroke, Stroke, StrokeId};
use crate::geom::{Point, Rect};
use crate::input::{CoordinateSource, InputEvent, Phase};
use crate::style::StrokeStyle;
use tracing::{debug, trace};

/// What the session needs from its owner to process one event.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
	/// Bounds of the drawing surface at the time of the event.
	pub bounds: Rect,
	/// Style for a stroke started by this event.
	pub style: &'a StrokeStyle,
	/// Id for a stroke started by this event.
	pub next_id: StrokeId,
}

/// Side effect of a transition, to be applied by the session's owner.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
	Started(StrokeId),
	Extended(StrokeId, Point),
	Finished(Stroke),
}

/// The in-progress stroke state machine. An active session exclusively owns the open stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Session {
	#[default]
	Idle,
	Active(OpenStroke),
}

impl Session {
	pub fn is_active(&self) -> bool {
		matches!(self, Session::Active(_))
	}

	pub fn open_stroke(&self) -> Option<&OpenStroke> {
		match self {
			Session::Idle => None,
			Session::Active(open) => Some(open),
		}
	}

	/// Pure transition function. Invalid and out-of-sequence events leave the session unchanged.
	pub fn handle(self, event: &InputEvent, context: &Context) -> (Session, Option<Effect>) {
		match (self, event.phase) {
			(Session::Idle, Phase::Start) => {
				let Some(point) = event.local_coordinates(&context.bounds) else {
					trace!("ignoring start without contact");
					return (Session::Idle, None);
				};
				let id = context.next_id;
				debug!(%id, ?point, "stroke started");
				let open = OpenStroke::new(id, context.style.clone(), point);
				(Session::Active(open), Some(Effect::Started(id)))
			}
			(Session::Active(mut open), Phase::Move) => {
				let Some(point) = event.local_coordinates(&context.bounds) else {
					trace!(id = %open.id(), "ignoring move without contact");
					return (Session::Active(open), None);
				};
				open.add_point(point);
				let id = open.id();
				(Session::Active(open), Some(Effect::Extended(id, point)))
			}
			(Session::Active(open), phase) if phase.is_terminal() => {
				let stroke = open.close();
				debug!(id = %stroke.id(), points = stroke.points().len(), ?phase, "stroke finished");
				(Session::Idle, Some(Effect::Finished(stroke)))
			}
			(session, phase) => {
				trace!(?phase, active = session.is_active(), "ignoring out-of-sequence event");
				(session, None)
			}
		}
	}
}
