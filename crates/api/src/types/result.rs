use super::SequenceId;

/// Outcome of a transport call, tagged with the query it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<P, E> {
	/// Identifier of the query that produced this result.
	pub sequence_id: SequenceId,
	/// Dispatcher epoch at the time the query was issued.
	pub epoch: u64,
	/// Payload on success, transport error on failure.
	pub outcome: Result<P, E>,
}

impl<P, E> QueryResult<P, E> {
	/// Whether the transport reported success.
	#[must_use]
	pub fn is_success(&self) -> bool {
		self.outcome.is_ok()
	}
}
