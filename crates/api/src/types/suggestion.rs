use serde::{Deserialize, Serialize};

/// Ranked candidate returned by the built-in catalog transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
	pub label: String,
	pub score: u16,
}

impl Suggestion {
	#[must_use]
	pub fn new(label: impl Into<String>, score: u16) -> Self {
		Self {
			label: label.into(),
			score,
		}
	}
}
