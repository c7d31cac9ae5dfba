use typeahead_api::{QueryResult, SequenceId};

/// Sequencing bookkeeping owned by a single dispatcher.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatcherState {
	latest_issued: SequenceId,
	latest_applied: SequenceId,
	epoch: u64,
	issued_epoch: u64,
	counters: DispatchCounters,
}

/// Running totals, mostly useful for diagnostics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchCounters {
	pub issued: u64,
	pub delivered: u64,
	pub discarded: u64,
}

impl DispatcherState {
	/// Identifier of the most recently issued query.
	#[must_use]
	pub fn latest_issued_id(&self) -> SequenceId {
		self.latest_issued
	}

	/// Highest identifier ever delivered to the sink.
	#[must_use]
	pub fn latest_applied_id(&self) -> SequenceId {
		self.latest_applied
	}

	/// Number of times the dispatcher has been cancelled.
	#[must_use]
	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	#[must_use]
	pub fn counters(&self) -> DispatchCounters {
		self.counters
	}

	/// Whether the latest issued query may still deliver and has not yet.
	#[must_use]
	pub fn awaiting_result(&self) -> bool {
		self.issued_epoch == self.epoch && self.latest_issued > self.latest_applied
	}

	pub(super) fn issue(&mut self) -> SequenceId {
		self.latest_issued = self.latest_issued.next();
		self.issued_epoch = self.epoch;
		self.counters.issued = self.counters.issued.saturating_add(1);
		self.latest_issued
	}

	pub(super) fn bump_epoch(&mut self) {
		self.epoch = self.epoch.wrapping_add(1);
	}

	/// Whether `result` answers the current query and has not been applied.
	pub(super) fn accepts<P, E>(&self, result: &QueryResult<P, E>) -> bool {
		result.sequence_id == self.latest_issued
			&& result.epoch == self.epoch
			&& result.sequence_id > self.latest_applied
	}

	pub(super) fn record_applied(&mut self, sequence_id: SequenceId) {
		self.latest_applied = self.latest_applied.max(sequence_id);
		self.counters.delivered = self.counters.delivered.saturating_add(1);
	}

	pub(super) fn record_discarded(&mut self) {
		self.counters.discarded = self.counters.discarded.saturating_add(1);
	}
}
