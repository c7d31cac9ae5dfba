//! Time sources for the debounce timer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Supplies the current instant to the dispatcher.
pub trait Clock {
	fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

/// Hand-driven clock for deterministic tests and simulations.
///
/// Clones share the same reading, so a test can keep one handle while the
/// dispatcher owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
	now: Rc<Cell<Instant>>,
}

impl ManualClock {
	#[must_use]
	pub fn new() -> Self {
		Self {
			now: Rc::new(Cell::new(Instant::now())),
		}
	}

	/// Move the reading forward by `by`.
	pub fn advance(&self, by: Duration) {
		self.now.set(self.now.get() + by);
	}
}

impl Default for ManualClock {
	fn default() -> Self {
		Self::new()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> Instant {
		self.now.get()
	}
}
