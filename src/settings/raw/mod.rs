use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod dispatcher;
mod logging;
mod runtime;
mod transport;

use dispatcher::DispatcherSection;
use logging::LoggingSection;
use runtime::RuntimeSection;
use transport::TransportSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	dispatcher: DispatcherSection,
	transport: TransportSection,
	runtime: RuntimeSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.dispatcher.apply_cli_overrides(cli);
		self.transport.apply_cli_overrides(cli);
		self.runtime.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.dispatcher.debounce_ms.is_some(),
				"TYPEAHEAD__DISPATCHER__DEBOUNCE_MS",
				"--debounce-ms",
				"dispatcher.debounce_ms",
			),
			transport_kind: detect_source(
				cli.transport.is_some(),
				self.transport.kind.is_some(),
				"TYPEAHEAD__TRANSPORT__KIND",
				"--transport",
				"transport.kind",
			),
			limit: detect_source(
				cli.limit.is_some(),
				self.transport.limit.is_some(),
				"TYPEAHEAD__TRANSPORT__LIMIT",
				"--limit",
				"transport.limit",
			),
			endpoint: detect_source(
				cli.endpoint.is_some(),
				self.transport.endpoint.is_some(),
				"TYPEAHEAD__TRANSPORT__ENDPOINT",
				"--endpoint",
				"transport.endpoint",
			),
			timeout_ms: detect_source(
				cli.timeout_ms.is_some(),
				self.transport.timeout_ms.is_some(),
				"TYPEAHEAD__TRANSPORT__TIMEOUT_MS",
				"--timeout-ms",
				"transport.timeout_ms",
			),
			tick_ms: detect_source(
				false,
				self.runtime.tick_ms.is_some(),
				"TYPEAHEAD__RUNTIME__TICK_MS",
				"",
				"runtime.tick_ms",
			),
			log_format: detect_source(
				cli.log_format.is_some(),
				self.logging.format.is_some(),
				"TYPEAHEAD__LOGGING__FORMAT",
				"--log-format",
				"logging.format",
			),
		};

		let config = ResolvedConfig {
			dispatcher: self.dispatcher.resolve(),
			transport: self.transport.resolve(&sources).map_err(Error::new)?,
			loop_options: self.runtime.resolve(),
			logging: self.logging.resolve(&sources).map_err(Error::new)?,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
