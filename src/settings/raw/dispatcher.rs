use std::time::Duration;

use serde::Deserialize;
use typeahead::DispatcherConfig;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DispatcherSection {
	pub(super) min_length: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
}

impl DispatcherSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(min_length) = cli.min_length {
			self.min_length = Some(min_length);
		}
		if let Some(debounce_ms) = cli.debounce_ms {
			self.debounce_ms = Some(debounce_ms);
		}
	}

	pub(super) fn resolve(self) -> DispatcherConfig {
		let mut config = DispatcherConfig::default();
		if let Some(min_length) = self.min_length {
			config = config.with_min_length(min_length);
		}
		if let Some(debounce_ms) = self.debounce_ms {
			config = config.with_debounce(Duration::from_millis(debounce_ms));
		}
		config
	}
}
