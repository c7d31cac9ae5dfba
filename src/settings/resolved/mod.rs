mod errors;
mod sources;
mod summary;
mod validation;

use std::path::PathBuf;
use std::time::Duration;

use typeahead::logging::LogFormat;
use typeahead::transports::CatalogOptions;
use typeahead::{DispatcherConfig, LoopOptions};

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Backend that answers lookups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransportKind {
	#[default]
	Catalog,
	Http,
}

impl TransportKind {
	pub(crate) fn parse(value: &str) -> Option<Self> {
		match value.to_ascii_lowercase().as_str() {
			"catalog" => Some(Self::Catalog),
			"http" => Some(Self::Http),
			_ => None,
		}
	}

	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Catalog => "catalog",
			Self::Http => "http",
		}
	}
}

#[derive(Debug, Clone)]
pub(crate) struct TransportSettings {
	pub(crate) kind: TransportKind,
	/// Catalog file; the built-in list is used when unset.
	pub(crate) catalog: Option<PathBuf>,
	pub(crate) catalog_options: CatalogOptions,
	pub(crate) endpoint: Option<String>,
	pub(crate) parameter: String,
	pub(crate) timeout: Duration,
}

#[derive(Debug, Clone)]
pub(crate) struct LoggingSettings {
	pub(crate) filter: String,
	pub(crate) format: LogFormat,
}

/// Final configuration used to run the dispatcher loop.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) dispatcher: DispatcherConfig,
	pub(crate) transport: TransportSettings,
	pub(crate) loop_options: LoopOptions,
	pub(crate) logging: LoggingSettings,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}

	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}
}

#[cfg(test)]
pub(super) fn sample_config() -> ResolvedConfig {
	ResolvedConfig {
		dispatcher: DispatcherConfig::default(),
		transport: TransportSettings {
			kind: TransportKind::Catalog,
			catalog: None,
			catalog_options: CatalogOptions::default(),
			endpoint: None,
			parameter: "query".into(),
			timeout: Duration::from_secs(10),
		},
		loop_options: LoopOptions::default(),
		logging: LoggingSettings {
			filter: "warn".into(),
			format: LogFormat::Compact,
		},
	}
}
