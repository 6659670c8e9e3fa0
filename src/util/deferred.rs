use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source, measured from an arbitrary epoch.
pub trait Clock {
	fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
	epoch: Instant,
}

impl Default for SystemClock {
	fn default() -> Self {
		Self {
			epoch: Instant::now(),
		}
	}
}

impl Clock for SystemClock {
	fn now(&self) -> Duration {
		self.epoch.elapsed()
	}
}

/// A logical clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
	now: Rc<Cell<Duration>>,
}

impl ManualClock {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get() + by);
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Duration {
		self.now.get()
	}
}

/// A single fire-and-forget task with a deadline.
///
/// At most one task is pending at a time: scheduling while pending keeps the original deadline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
	deadline: Option<Duration>,
}

impl Deferred {
	/// Returns `false` if a task was already pending.
	pub fn schedule(&mut self, deadline: Duration) -> bool {
		if self.deadline.is_some() {
			return false;
		}
		self.deadline = Some(deadline);
		true
	}

	pub fn deadline(&self) -> Option<Duration> {
		self.deadline
	}

	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}

	/// Returns `true` exactly once, on the first call at or after the deadline.
	pub fn fire(&mut self, now: Duration) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}
