//! Single-owner event loop that drives a [`Dispatcher`].
//!
//! Input events arrive over a channel from whichever thread owns the input
//! device. The loop applies them, fires the debounce timer and drains
//! transport results on a fixed tick until the feed closes.

mod input;

#[cfg(test)]
mod tests;

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};
use typeahead_api::{ResultSink, Transport};

use crate::dispatcher::{Clock, DispatchError, Dispatcher, TickOutcome};

pub use input::{InputFeed, spawn_input_feed};

/// Messages understood by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
	/// The input field now holds this text.
	Input(String),
	/// Drop pending and in-flight work.
	Cancel,
	/// Stop accepting input, settle, and dispose.
	Close,
}

/// Timing knobs for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
	/// Longest the loop waits for an event before polling the dispatcher.
	pub tick: Duration,
	/// How long to wait for the last query to resolve after the feed closes.
	pub settle_timeout: Duration,
}

impl Default for LoopOptions {
	fn default() -> Self {
		Self {
			tick: Duration::from_millis(10),
			settle_timeout: Duration::from_secs(5),
		}
	}
}

/// Totals reported once the loop exits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
	pub inputs: usize,
	pub issued: usize,
	pub delivered: usize,
	pub discarded: usize,
	/// Whether the dispatcher was still waiting on work when the settle
	/// timeout ran out.
	pub timed_out: bool,
}

impl LoopSummary {
	fn absorb(&mut self, outcome: TickOutcome) {
		if outcome.issued.is_some() {
			self.issued += 1;
		}
		self.delivered += outcome.delivered;
		self.discarded += outcome.discarded;
	}
}

/// Pump `events` into `dispatcher` until the feed closes, then settle and
/// dispose it.
pub fn run<P, E, T, S, C>(
	dispatcher: &mut Dispatcher<P, E, T, S, C>,
	events: &Receiver<LoopEvent>,
	options: LoopOptions,
) -> Result<LoopSummary, DispatchError>
where
	T: Transport<P, E>,
	S: ResultSink<P, E>,
	C: Clock,
{
	let mut summary = LoopSummary::default();

	loop {
		match events.recv_timeout(next_wait(dispatcher, options.tick)) {
			Ok(LoopEvent::Input(text)) => {
				summary.inputs += 1;
				dispatcher.on_input_changed(text)?;
			}
			Ok(LoopEvent::Cancel) => dispatcher.cancel()?,
			Ok(LoopEvent::Close) => {
				debug!("input feed closed");
				break;
			}
			Err(RecvTimeoutError::Disconnected) => {
				debug!("input feed disconnected");
				break;
			}
			Err(RecvTimeoutError::Timeout) => {}
		}
		summary.absorb(dispatcher.tick()?);
	}

	let deadline = Instant::now() + options.settle_timeout;
	while !dispatcher.is_settled() {
		if Instant::now() >= deadline {
			warn!(
				pending = dispatcher.pending_text().unwrap_or_default(),
				"settle timeout elapsed with work outstanding"
			);
			summary.timed_out = true;
			break;
		}
		thread::sleep(options.tick);
		summary.absorb(dispatcher.tick()?);
	}

	dispatcher.dispose()?;
	Ok(summary)
}

/// Sleep no longer than `tick`, and wake early for a due debounce deadline.
fn next_wait<P, E, T, S, C>(dispatcher: &Dispatcher<P, E, T, S, C>, tick: Duration) -> Duration {
	dispatcher.next_deadline().map_or(tick, |deadline| {
		deadline.saturating_duration_since(Instant::now()).min(tick)
	})
}
