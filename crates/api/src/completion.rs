//! One-shot handle a transport uses to report the outcome of a query.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::Sender;

use crate::types::{QueryResult, SequenceId};

/// Resolves a single query exactly once.
///
/// Resolution consumes the handle, so a transport cannot report twice for the
/// same query. The handle is `Send` whenever the payload and error are, which
/// lets transports finish on a worker thread.
pub struct Completion<P, E> {
	sequence_id: SequenceId,
	epoch: u64,
	current: Arc<AtomicU64>,
	tx: Sender<QueryResult<P, E>>,
}

impl<P, E> Completion<P, E> {
	/// Create a completion that reports into `tx`.
	///
	/// `current` holds the raw id of the query that may still deliver; the
	/// dispatcher owning `tx` updates it as queries are issued or cancelled.
	#[must_use]
	pub fn new(
		sequence_id: SequenceId,
		epoch: u64,
		current: Arc<AtomicU64>,
		tx: Sender<QueryResult<P, E>>,
	) -> Self {
		Self {
			sequence_id,
			epoch,
			current,
			tx,
		}
	}

	/// Identifier of the query this handle resolves.
	#[must_use]
	pub fn sequence_id(&self) -> SequenceId {
		self.sequence_id
	}

	/// Whether a newer query or a cancellation has made this one irrelevant.
	///
	/// This is only a hint for skipping work. A superseded completion must
	/// still be resolved; the dispatcher discards the result.
	#[must_use]
	pub fn is_superseded(&self) -> bool {
		self.current.load(AtomicOrdering::Acquire) != self.sequence_id.get()
	}

	/// Report the outcome. Returns `false` when the dispatcher has gone away.
	pub fn resolve(self, outcome: Result<P, E>) -> bool {
		self.tx
			.send(QueryResult {
				sequence_id: self.sequence_id,
				epoch: self.epoch,
				outcome,
			})
			.is_ok()
	}

	/// Shorthand for `resolve(Ok(payload))`.
	pub fn succeed(self, payload: P) -> bool {
		self.resolve(Ok(payload))
	}

	/// Shorthand for `resolve(Err(error))`.
	pub fn fail(self, error: E) -> bool {
		self.resolve(Err(error))
	}
}

impl<P, E> fmt::Debug for Completion<P, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Completion")
			.field("sequence_id", &self.sequence_id)
			.field("epoch", &self.epoch)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;

	use super::*;

	#[test]
	fn resolve_tags_the_result_with_id_and_epoch() {
		let (tx, rx) = mpsc::channel::<QueryResult<u8, ()>>();
		let current = Arc::new(AtomicU64::new(4));
		let completion = Completion::new(SequenceId::new(4), 2, current, tx);

		assert!(completion.succeed(9));
		let result = rx.recv().unwrap();
		assert_eq!(result.sequence_id, SequenceId::new(4));
		assert_eq!(result.epoch, 2);
		assert_eq!(result.outcome, Ok(9));
	}

	#[test]
	fn superseded_follows_the_shared_marker() {
		let (tx, _rx) = mpsc::channel::<QueryResult<(), ()>>();
		let current = Arc::new(AtomicU64::new(1));
		let completion = Completion::new(SequenceId::new(1), 0, Arc::clone(&current), tx);
		assert!(!completion.is_superseded());

		current.store(2, AtomicOrdering::Release);
		assert!(completion.is_superseded());
	}

	#[test]
	fn resolve_reports_a_dropped_receiver() {
		let (tx, rx) = mpsc::channel::<QueryResult<(), &str>>();
		drop(rx);
		let completion = Completion::new(SequenceId::new(1), 0, Arc::new(AtomicU64::new(1)), tx);
		assert!(!completion.fail("gone"));
	}
}
