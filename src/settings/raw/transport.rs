use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use typeahead::transports::{CatalogOptions, DEFAULT_HTTP_TIMEOUT, DEFAULT_QUERY_PARAMETER};

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources, TransportKind, TransportSettings};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TransportSection {
	pub(super) kind: Option<String>,
	pub(super) catalog: Option<PathBuf>,
	pub(super) endpoint: Option<String>,
	pub(super) parameter: Option<String>,
	pub(super) limit: Option<usize>,
	pub(super) latency_ms: Option<u64>,
	pub(super) timeout_ms: Option<u64>,
}

impl TransportSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(kind) = cli.transport {
			self.kind = Some(kind.as_str().to_string());
		}
		if let Some(path) = &cli.catalog {
			self.catalog = Some(path.clone());
		}
		if let Some(endpoint) = &cli.endpoint {
			self.endpoint = Some(endpoint.clone());
		}
		if let Some(parameter) = &cli.query_param {
			self.parameter = Some(parameter.clone());
		}
		if let Some(limit) = cli.limit {
			self.limit = Some(limit);
		}
		if let Some(latency_ms) = cli.latency_ms {
			self.latency_ms = Some(latency_ms);
		}
		if let Some(timeout_ms) = cli.timeout_ms {
			self.timeout_ms = Some(timeout_ms);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<TransportSettings, ConfigError> {
		let kind = match self.kind.as_deref().map(str::trim) {
			None => TransportKind::default(),
			Some(value) => TransportKind::parse(value).ok_or_else(|| {
				ConfigError::invalid(
					"transport.kind",
					value,
					sources.source_for_transport_kind(),
					"expected `catalog` or `http`",
				)
			})?,
		};

		let defaults = CatalogOptions::default();
		let catalog_options = CatalogOptions {
			limit: self.limit.unwrap_or(defaults.limit),
			latency: self.latency_ms.map_or(defaults.latency, Duration::from_millis),
		};

		let parameter = self
			.parameter
			.map(|parameter| parameter.trim().to_string())
			.filter(|parameter| !parameter.is_empty())
			.unwrap_or_else(|| DEFAULT_QUERY_PARAMETER.to_string());

		Ok(TransportSettings {
			kind,
			catalog: self.catalog,
			catalog_options,
			endpoint: self
				.endpoint
				.map(|endpoint| endpoint.trim().to_string())
				.filter(|endpoint| !endpoint.is_empty()),
			parameter,
			timeout: self
				.timeout_ms
				.map_or(DEFAULT_HTTP_TIMEOUT, Duration::from_millis),
		})
	}
}
