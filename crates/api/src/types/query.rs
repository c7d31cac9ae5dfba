use std::fmt;

use serde::Serialize;

/// Strictly increasing identifier assigned to each issued query.
///
/// Identifiers start at 1. [`SequenceId::NONE`] stands in for "nothing issued
/// yet" and never tags a real query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SequenceId(u64);

impl SequenceId {
	/// Placeholder for "no query issued".
	pub const NONE: Self = Self(0);

	/// Wrap a raw identifier.
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Raw numeric value.
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}

	/// The identifier that follows this one.
	#[must_use]
	pub const fn next(self) -> Self {
		Self(self.0.saturating_add(1))
	}

	/// Whether this is the [`SequenceId::NONE`] placeholder.
	#[must_use]
	pub const fn is_none(self) -> bool {
		self.0 == 0
	}
}

impl From<u64> for SequenceId {
	fn from(raw: u64) -> Self {
		Self(raw)
	}
}

impl fmt::Display for SequenceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Immutable lookup request handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	text: String,
	sequence_id: SequenceId,
}

impl Query {
	/// Create a query for `text` tagged with `sequence_id`.
	#[must_use]
	pub fn new(text: impl Into<String>, sequence_id: SequenceId) -> Self {
		Self {
			text: text.into(),
			sequence_id,
		}
	}

	/// Text the user had typed when the query was issued.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Identifier assigned at issuance.
	#[must_use]
	pub fn sequence_id(&self) -> SequenceId {
		self.sequence_id
	}

	/// Consume the query and return its text.
	#[must_use]
	pub fn into_text(self) -> String {
		self.text
	}
}
