use serde::Deserialize;
use typeahead::logging::{DEFAULT_FILTER, LogFormat};

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources, LoggingSettings};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) filter: Option<String>,
	pub(super) format: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(filter) = &cli.log_filter {
			self.filter = Some(filter.clone());
		}
		if let Some(format) = cli.log_format {
			self.format = Some(format.as_str().to_string());
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LoggingSettings, ConfigError> {
		let format = match self.format.as_deref().map(str::trim) {
			None => LogFormat::default(),
			Some(value) if value.eq_ignore_ascii_case("compact") => LogFormat::Compact,
			Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
			Some(other) => {
				return Err(ConfigError::invalid(
					"logging.format",
					other,
					sources.source_for_log_format(),
					"expected `compact` or `json`",
				));
			}
		};

		let filter = self
			.filter
			.filter(|filter| !filter.trim().is_empty())
			.unwrap_or_else(|| DEFAULT_FILTER.to_string());

		Ok(LoggingSettings { filter, format })
	}
}
