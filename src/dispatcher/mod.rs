//! Debounced, sequence-checked query dispatch for search-as-you-type inputs.
//!
//! The [`Dispatcher`] sits between a UI layer that reports every edit of a
//! text field and a [`Transport`] that performs lookups. It waits for a quiet
//! period before issuing a query, tags every query with a strictly increasing
//! [`SequenceId`], and hands a result to the [`ResultSink`] only when it
//! answers the most recently issued query.
//!
//! The dispatcher never blocks and never spawns threads. Its owner drives it
//! from one sequential context: report input with
//! [`Dispatcher::on_input_changed`], then call [`Dispatcher::tick`] (or the
//! finer grained [`Dispatcher::fire_due`] and [`Dispatcher::pump_results`])
//! whenever the timer may have expired or a transport may have answered.

mod clock;
mod config;
mod error;
mod state;


use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use tracing::{debug, trace};
use typeahead_api::{Completion, Query, QueryResult, ResultSink, SequenceId, Transport};

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DEFAULT_DEBOUNCE, DEFAULT_MIN_LENGTH, DispatcherConfig};
pub use error::DispatchError;
pub use state::{DispatchCounters, DispatcherState};

/// Input waiting for its debounce deadline.
#[derive(Debug)]
struct PendingInput {
	text: String,
	deadline: Instant,
}

/// Everything released by [`Dispatcher::dispose`].
struct Live<P, E, T, S> {
	transport: T,
	sink: S,
	results_tx: Sender<QueryResult<P, E>>,
	results_rx: Receiver<QueryResult<P, E>>,
}

/// What a call to [`Dispatcher::tick`] did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
	/// Query issued because its debounce deadline passed.
	pub issued: Option<SequenceId>,
	/// Results handed to the sink.
	pub delivered: usize,
	/// Stale results dropped.
	pub discarded: usize,
}

/// Turns a stream of input edits into debounced, ordered lookups.
pub struct Dispatcher<P, E, T, S, C = SystemClock> {
	config: DispatcherConfig,
	clock: C,
	state: DispatcherState,
	pending: Option<PendingInput>,
	current: Arc<AtomicU64>,
	live: Option<Live<P, E, T, S>>,
	_payload: PhantomData<fn() -> (P, E)>,
}

impl<P, E, T, S> Dispatcher<P, E, T, S, SystemClock>
where
	T: Transport<P, E>,
	S: ResultSink<P, E>,
{
	/// Create a dispatcher driven by the wall clock.
	pub fn new(config: DispatcherConfig, transport: T, sink: S) -> Self {
		Self::with_clock(config, transport, sink, SystemClock)
	}
}

impl<P, E, T, S, C> Dispatcher<P, E, T, S, C>
where
	T: Transport<P, E>,
	S: ResultSink<P, E>,
	C: Clock,
{
	/// Create a dispatcher that reads time from `clock`.
	pub fn with_clock(config: DispatcherConfig, transport: T, sink: S, clock: C) -> Self {
		let (results_tx, results_rx) = mpsc::channel();
		Self {
			config,
			clock,
			state: DispatcherState::default(),
			pending: None,
			current: Arc::new(AtomicU64::new(SequenceId::NONE.get())),
			live: Some(Live {
				transport,
				sink,
				results_tx,
				results_rx,
			}),
			_payload: PhantomData,
		}
	}

	/// Report the current contents of the input field.
	///
	/// Text shorter than the configured minimum cancels any pending query.
	/// Longer text (re)arms the debounce timer, replacing whatever was
	/// pending before.
	pub fn on_input_changed(&mut self, text: impl Into<String>) -> Result<(), DispatchError> {
		self.ensure_live()?;
		let text = text.into();

		if !self.config.qualifies(&text) {
			if self.pending.take().is_some() {
				trace!(length = text.chars().count(), "input below minimum length, pending query dropped");
			}
			return Ok(());
		}

		let deadline = self.clock.now() + self.config.debounce;
		trace!(text = %text, "debounce timer armed");
		self.pending = Some(PendingInput { text, deadline });
		Ok(())
	}

	/// Issue the pending query if its debounce deadline has passed.
	pub fn fire_due(&mut self) -> Result<Option<SequenceId>, DispatchError> {
		let live = self.live.as_mut().ok_or(DispatchError::Disposed)?;
		let now = self.clock.now();
		let Some(pending) = self.pending.take_if(|pending| pending.deadline <= now) else {
			return Ok(None);
		};

		let sequence_id = self.state.issue();
		self.current
			.store(sequence_id.get(), AtomicOrdering::Release);
		let completion = Completion::new(
			sequence_id,
			self.state.epoch(),
			Arc::clone(&self.current),
			live.results_tx.clone(),
		);

		debug!(%sequence_id, text = %pending.text, "issuing query");
		live.transport
			.dispatch(Query::new(pending.text, sequence_id), completion);
		Ok(Some(sequence_id))
	}

	/// Apply every transport result received so far.
	///
	/// Current results reach the sink; stale ones are dropped. Returns the
	/// number of delivered and discarded results.
	pub fn pump_results(&mut self) -> Result<(usize, usize), DispatchError> {
		let live = self.live.as_mut().ok_or(DispatchError::Disposed)?;
		let mut delivered = 0;
		let mut discarded = 0;

		while let Ok(result) = live.results_rx.try_recv() {
			if !self.state.accepts(&result) {
				trace!(
					sequence_id = %result.sequence_id,
					latest = %self.state.latest_issued_id(),
					"discarding stale result"
				);
				self.state.record_discarded();
				discarded += 1;
				continue;
			}

			self.state.record_applied(result.sequence_id);
			delivered += 1;
			match result.outcome {
				Ok(payload) => {
					debug!(sequence_id = %result.sequence_id, "delivering result");
					live.sink.on_result(payload);
				}
				Err(error) => {
					debug!(sequence_id = %result.sequence_id, "delivering transport error");
					live.sink.on_error(error);
				}
			}
		}

		Ok((delivered, discarded))
	}

	/// Fire the timer if due, then apply pending results.
	pub fn tick(&mut self) -> Result<TickOutcome, DispatchError> {
		let issued = self.fire_due()?;
		let (delivered, discarded) = self.pump_results()?;
		Ok(TickOutcome {
			issued,
			delivered,
			discarded,
		})
	}

	/// Drop the pending query and make every in-flight result stale.
	///
	/// Calling this repeatedly has no further effect.
	pub fn cancel(&mut self) -> Result<(), DispatchError> {
		self.ensure_live()?;
		self.cancel_inner();
		Ok(())
	}

	/// Cancel and release the transport and sink.
	///
	/// Every later call, including another `dispose`, returns
	/// [`DispatchError::Disposed`].
	pub fn dispose(&mut self) -> Result<(), DispatchError> {
		self.ensure_live()?;
		self.cancel_inner();
		self.live = None;
		debug!("dispatcher disposed");
		Ok(())
	}

	fn cancel_inner(&mut self) {
		self.pending = None;
		self.state.bump_epoch();
		self.current
			.store(SequenceId::NONE.get(), AtomicOrdering::Release);
		trace!(epoch = self.state.epoch(), "dispatcher cancelled");
	}
}

impl<P, E, T, S, C> Dispatcher<P, E, T, S, C> {
	/// When the pending query becomes due, if one is scheduled.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Text waiting for its debounce deadline.
	#[must_use]
	pub fn pending_text(&self) -> Option<&str> {
		self.pending.as_ref().map(|pending| pending.text.as_str())
	}

	/// No query is scheduled and no current query is awaiting its result.
	#[must_use]
	pub fn is_settled(&self) -> bool {
		self.pending.is_none() && !self.state.awaiting_result()
	}

	#[must_use]
	pub fn is_disposed(&self) -> bool {
		self.live.is_none()
	}

	#[must_use]
	pub fn state(&self) -> &DispatcherState {
		&self.state
	}

	#[must_use]
	pub fn config(&self) -> &DispatcherConfig {
		&self.config
	}

	/// Shared marker holding the raw id of the query still allowed to deliver.
	///
	/// Completions read the same marker through
	/// [`Completion::is_superseded`]; it reads 0 after a cancellation.
	#[must_use]
	pub fn superseded_hint(&self) -> Arc<AtomicU64> {
		Arc::clone(&self.current)
	}

	fn ensure_live(&self) -> Result<(), DispatchError> {
		if self.live.is_some() {
			Ok(())
		} else {
			Err(DispatchError::Disposed)
		}
	}
}
