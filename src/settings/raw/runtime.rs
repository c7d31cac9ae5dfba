use std::time::Duration;

use serde::Deserialize;
use typeahead::LoopOptions;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RuntimeSection {
	pub(super) tick_ms: Option<u64>,
	pub(super) settle_timeout_ms: Option<u64>,
}

impl RuntimeSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(settle_timeout_ms) = cli.settle_timeout_ms {
			self.settle_timeout_ms = Some(settle_timeout_ms);
		}
	}

	pub(super) fn resolve(self) -> LoopOptions {
		let defaults = LoopOptions::default();
		LoopOptions {
			tick: self.tick_ms.map_or(defaults.tick, Duration::from_millis),
			settle_timeout: self
				.settle_timeout_ms
				.map_or(defaults.settle_timeout, Duration::from_millis),
		}
	}
}
