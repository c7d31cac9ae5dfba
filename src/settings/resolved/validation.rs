use super::{ConfigError, ConfigSources, ResolvedConfig, TransportKind};

/// Longest accepted debounce, in milliseconds.
const MAX_DEBOUNCE_MS: u128 = 60_000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let debounce_ms = config.dispatcher.debounce.as_millis();
	if debounce_ms > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"dispatcher.debounce_ms",
			debounce_ms.to_string(),
			sources.source_for_debounce(),
			format!("must be at most {MAX_DEBOUNCE_MS}"),
		));
	}

	let limit = config.transport.catalog_options.limit;
	if limit == 0 {
		return Err(ConfigError::invalid(
			"transport.limit",
			limit.to_string(),
			sources.source_for_limit(),
			"must be greater than zero",
		));
	}

	if config.transport.timeout.is_zero() {
		return Err(ConfigError::invalid(
			"transport.timeout_ms",
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.loop_options.tick.is_zero() {
		return Err(ConfigError::invalid(
			"runtime.tick_ms",
			"0",
			sources.source_for_tick(),
			"must be greater than zero",
		));
	}

	if config.transport.kind == TransportKind::Http {
		match config.transport.endpoint.as_deref() {
			None => {
				return Err(ConfigError::missing(
					"transport.endpoint",
					sources.source_for_endpoint(),
					"required when transport.kind is http",
				));
			}
			Some(endpoint) if !has_http_scheme(endpoint) => {
				return Err(ConfigError::invalid(
					"transport.endpoint",
					endpoint,
					sources.source_for_endpoint(),
					"must start with http:// or https://",
				));
			}
			Some(_) => {}
		}
	}

	Ok(())
}

fn has_http_scheme(endpoint: &str) -> bool {
	let lower = endpoint.to_ascii_lowercase();
	lower.starts_with("http://") || lower.starts_with("https://")
}
