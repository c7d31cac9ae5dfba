use thiserror::Error;

use crate::types::SequenceId;

/// Failures reported by the built-in transports.
///
/// The dispatcher never inspects these; it hands them to
/// [`ResultSink::on_error`](crate::ResultSink::on_error) unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
	/// The request could not be sent or the connection failed.
	#[error("lookup for '{query}' failed: {message}")]
	Request { query: String, message: String },

	/// The remote source answered with a non-success status.
	#[error("lookup for '{query}' returned HTTP {status}")]
	Status { query: String, status: u16 },

	/// The response body could not be decoded.
	#[error("failed to decode response for '{query}': {message}")]
	Decode { query: String, message: String },

	/// The transport stopped working on a query that was no longer current.
	#[error("query {sequence_id} was superseded before it completed")]
	Superseded { sequence_id: SequenceId },

	/// The background worker has shut down.
	#[error("transport worker is unavailable")]
	WorkerUnavailable,
}
