use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Default number of characters required before a query is scheduled.
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default quiet period between the last input event and query issuance.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Tunables recognised by the [`Dispatcher`](super::Dispatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
	/// Minimum text length, in characters, before a query is scheduled.
	pub min_length: usize,
	/// Delay before issuing after the last qualifying input event.
	#[serde(rename = "debounce_ms", deserialize_with = "duration_from_millis")]
	pub debounce: Duration,
}

impl DispatcherConfig {
	#[must_use]
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = min_length;
		self
	}

	#[must_use]
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	/// Whether `text` is long enough to schedule a query.
	#[must_use]
	pub fn qualifies(&self, text: &str) -> bool {
		text.chars().count() >= self.min_length
	}
}

impl Default for DispatcherConfig {
	fn default() -> Self {
		Self {
			min_length: DEFAULT_MIN_LENGTH,
			debounce: DEFAULT_DEBOUNCE,
		}
	}
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	u64::deserialize(deserializer).map(Duration::from_millis)
}
