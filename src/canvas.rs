use crate::config::CanvasConfig;
use crate::engine::*;
use crate::input::InputEvent;
use crate::render::{Polyline, RenderSurface};
use crate::style::{Color, StrokeStyle, StrokeWidth, StyleError};
use crate::util::{Clock, Deferred, SystemClock};
use tracing::{debug, info, trace};

/// Owns the strokes of one drawing surface, the input session, and the current style.
///
/// Everything runs on the caller's thread. The host forwards input with [`Canvas::handle`] and
/// calls [`Canvas::poll`] periodically so that a deferred clear completes even without input.
#[derive(Debug)]
pub struct Canvas<S, C = SystemClock> {
	surface: S,
	clock: C,
	config: CanvasConfig,
	style: StrokeStyle,
	session: Session,
	live: Option<Polyline>,
	strokes: Vec<Stroke>,
	next_id: StrokeId,
	pending_clear: Deferred,
}

impl<S: RenderSurface> Canvas<S> {
	pub fn new(surface: S, config: CanvasConfig) -> Result<Self, StyleError> {
		Self::with_clock(surface, config, SystemClock::default())
	}
}

impl<S: RenderSurface, C: Clock> Canvas<S, C> {
	pub fn with_clock(surface: S, config: CanvasConfig, clock: C) -> Result<Self, StyleError> {
		let style = config.initial_style()?;
		Ok(Self {
			surface,
			clock,
			config,
			style,
			session: Session::Idle,
			live: None,
			strokes: Vec::new(),
			next_id: StrokeId::FIRST,
			pending_clear: Deferred::default(),
		})
	}

	pub fn handle(&mut self, event: &InputEvent) {
		self.poll();

		let context = Context {
			bounds: self.surface.bounds(),
			style: &self.style,
			next_id: self.next_id,
		};
		let (session, effect) = std::mem::take(&mut self.session).handle(event, &context);
		self.session = session;

		match effect {
			None => {}
			Some(Effect::Started(id)) => {
				self.next_id = id.next();
				if let Some(open) = self.session.open_stroke() {
					let polyline = Polyline::new(open);
					self.surface.insert(&polyline);
					self.live = Some(polyline);
				}
			}
			Some(Effect::Extended(id, point)) => {
				if let Some(live) = &mut self.live {
					debug_assert_eq!(live.id(), id);
					live.push(point);
					self.surface.update(live);
				}
			}
			Some(Effect::Finished(stroke)) => {
				// The visual stays on the surface as it is.
				self.live = None;
				self.strokes.push(stroke);
			}
		}
	}

	/// Runs the deferred removal if it is due.
	pub fn poll(&mut self) {
		if !self.pending_clear.fire(self.clock.now()) {
			return;
		}
		self.cancel_stroke();
		let removed = self.strokes.len();
		self.strokes.clear();
		self.surface.remove_all();
		info!(removed, "strokes removed");
	}

	/// Fades out every stroke and removes them all after the configured delay.
	///
	/// Any open stroke is cancelled. Clearing again before the removal has run does not schedule
	/// another removal. Clearing an empty canvas does nothing.
	pub fn clear(&mut self) {
		self.poll();
		if self.strokes.is_empty() && !self.session.is_active() {
			trace!("nothing to clear");
			return;
		}

		self.cancel_stroke();
		self.surface.fade_out(self.config.fade_duration);
		let deadline = self.clock.now().saturating_add(self.config.clear_delay);
		if self.pending_clear.schedule(deadline) {
			info!(strokes = self.strokes.len(), ?deadline, "clear scheduled");
		} else {
			debug!(deadline = ?self.pending_clear.deadline(), "clear already pending");
		}
	}

	fn cancel_stroke(&mut self) {
		if let Session::Active(open) = std::mem::take(&mut self.session) {
			debug!(id = %open.id(), points = open.points().len(), "stroke cancelled");
		}
		self.live = None;
	}

	/// Sets the color of strokes started from now on.
	#[tracing::instrument(level = "debug", skip(self), err)]
	pub fn set_color(&mut self, token: &str) -> Result<(), StyleError> {
		self.style.color = Color::parse(token)?;
		Ok(())
	}

	/// Sets the width of strokes started from now on.
	#[tracing::instrument(level = "debug", skip(self), err)]
	pub fn set_width(&mut self, width: f32) -> Result<(), StyleError> {
		self.style.width = StrokeWidth::new(width)?;
		Ok(())
	}

	/// The style a new stroke would get.
	pub fn style(&self) -> &StrokeStyle {
		&self.style
	}

	/// Label for the width control, e.g. `5px`.
	pub fn width_label(&self) -> String {
		self.style.width.to_string()
	}

	/// Closed strokes, oldest first.
	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	pub fn open_stroke(&self) -> Option<&OpenStroke> {
		self.session.open_stroke()
	}

	/// Closed strokes plus the open one, if any.
	pub fn stroke_count(&self) -> usize {
		self.strokes.len() + usize::from(self.session.is_active())
	}

	pub fn is_drawing(&self) -> bool {
		self.session.is_active()
	}

	pub fn is_clear_pending(&self) -> bool {
		self.pending_clear.is_pending()
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geom::Rect;
	use crate::input::Phase;
	use crate::render::SvgSurface;
	use crate::util::ManualClock;
	use glam::{vec2, Vec2};
	use std::time::Duration;

	fn canvas() -> (Canvas<SvgSurface, ManualClock>, ManualClock) {
		let clock = ManualClock::new();
		let surface = SvgSurface::new(Rect::from_origin_size(Vec2::ZERO, vec2(640.0, 480.0)));
		let canvas = Canvas::with_clock(surface, CanvasConfig::default(), clock.clone()).unwrap();
		(canvas, clock)
	}

	fn stroke(canvas: &mut Canvas<SvgSurface, ManualClock>, points: &[(f32, f32)]) {
		let (first, rest) = points.split_first().unwrap();
		canvas.handle(&InputEvent::pointer(Phase::Start, first.0, first.1));
		for &(x, y) in rest {
			canvas.handle(&InputEvent::pointer(Phase::Move, x, y));
		}
		canvas.handle(&InputEvent::pointer(Phase::End, 0.0, 0.0));
	}

	#[test]
	fn live_polyline_tracks_open_stroke() {
		let (mut canvas, _) = canvas();
		canvas.handle(&InputEvent::pointer(Phase::Start, 1.0, 2.0));
		assert!(canvas.is_drawing());
		assert_eq!(canvas.stroke_count(), 1);
		assert_eq!(canvas.surface().points(StrokeId::FIRST), Some("1,2"));

		canvas.handle(&InputEvent::pointer(Phase::Move, 3.0, 4.0));
		assert_eq!(canvas.surface().points(StrokeId::FIRST), Some("1,2 3,4"));

		canvas.handle(&InputEvent::pointer(Phase::Leave, 3.0, 4.0));
		assert!(!canvas.is_drawing());
		assert_eq!(canvas.strokes().len(), 1);
		assert_eq!(canvas.surface().points(StrokeId::FIRST), Some("1,2 3,4"));
	}

	#[test]
	fn ids_increase() {
		let (mut canvas, _) = canvas();
		stroke(&mut canvas, &[(1.0, 1.0)]);
		stroke(&mut canvas, &[(2.0, 2.0)]);
		let ids: Vec<_> = canvas.strokes().iter().map(Stroke::id).collect();
		assert_eq!(ids, vec![StrokeId::FIRST, StrokeId::FIRST.next()]);
	}

	#[test]
	fn clear_cancels_open_stroke() {
		let (mut canvas, clock) = canvas();
		stroke(&mut canvas, &[(1.0, 1.0), (2.0, 2.0)]);
		canvas.handle(&InputEvent::pointer(Phase::Start, 5.0, 5.0));

		canvas.clear();
		assert!(!canvas.is_drawing());
		assert!(canvas.is_clear_pending());
		assert_eq!(canvas.strokes().len(), 1);
		assert!(canvas.surface().is_fading(StrokeId::FIRST));

		// The cancelled stroke no longer receives points.
		canvas.handle(&InputEvent::pointer(Phase::Move, 6.0, 6.0));
		assert_eq!(canvas.surface().points(StrokeId::FIRST.next()), Some("5,5"));

		clock.advance(Duration::from_millis(300));
		canvas.poll();
		assert_eq!(canvas.stroke_count(), 0);
		assert_eq!(canvas.surface().element_count(), 0);
		assert!(!canvas.is_clear_pending());
	}

	#[test]
	fn clear_with_only_open_stroke() {
		let (mut canvas, clock) = canvas();
		canvas.handle(&InputEvent::pointer(Phase::Start, 5.0, 5.0));
		canvas.clear();
		assert!(canvas.is_clear_pending());
		assert_eq!(canvas.stroke_count(), 0);

		clock.advance(Duration::from_millis(300));
		canvas.poll();
		assert_eq!(canvas.surface().element_count(), 0);
	}

	#[test]
	fn removal_runs_before_next_event() {
		let (mut canvas, clock) = canvas();
		stroke(&mut canvas, &[(1.0, 1.0)]);
		canvas.clear();
		clock.advance(Duration::from_millis(301));

		stroke(&mut canvas, &[(7.0, 7.0), (8.0, 8.0)]);
		assert_eq!(canvas.strokes().len(), 1);
		assert_eq!(canvas.strokes()[0].points(), &[vec2(7.0, 7.0), vec2(8.0, 8.0)]);
		assert_eq!(canvas.surface().element_count(), 1);
	}

	#[test]
	fn huge_clear_delay_saturates() {
		let clock = ManualClock::new();
		clock.advance(Duration::from_millis(5));
		let surface = SvgSurface::new(Rect::from_origin_size(Vec2::ZERO, vec2(640.0, 480.0)));
		let config = CanvasConfig::builder().clear_delay(Duration::MAX).build();
		let mut canvas = Canvas::with_clock(surface, config, clock.clone()).unwrap();
		stroke(&mut canvas, &[(1.0, 1.0)]);

		canvas.clear();
		assert!(canvas.is_clear_pending());
		clock.advance(Duration::from_secs(3600));
		canvas.poll();
		assert_eq!(canvas.stroke_count(), 1);
	}

	#[test]
	fn style_controls() {
		let (mut canvas, _) = canvas();
		assert_eq!(canvas.width_label(), "3px");

		canvas.set_width(12.0).unwrap();
		assert_eq!(canvas.width_label(), "12px");
		canvas.set_color("#00ff00").unwrap();

		assert!(canvas.set_width(-1.0).is_err());
		assert!(canvas.set_color("nope").is_err());
		assert_eq!(canvas.style().width.get(), 12.0);
		assert_eq!(canvas.style().color.as_str(), "#00ff00");
	}

	#[test]
	fn invalid_config_is_rejected() {
		let surface = SvgSurface::new(Rect::from_origin_size(Vec2::ZERO, vec2(1.0, 1.0)));
		let config = CanvasConfig::builder().initial_width(f32::NAN).build();
		assert!(Canvas::new(surface, config).is_err());
	}
}
