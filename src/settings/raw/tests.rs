use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::TransportKind;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["typeahead", "--transport", "http", "--log-format", "json"]);
	cli.min_length = Some(2);
	cli.debounce_ms = Some(75);
	cli.catalog = Some(PathBuf::from("/tmp/places.txt"));
	cli.endpoint = Some("http://localhost:8000/trips/search/".into());
	cli.query_param = Some("q".into());
	cli.limit = Some(3);
	cli.latency_ms = Some(20);
	cli.timeout_ms = Some(1500);
	cli.settle_timeout_ms = Some(900);
	cli.log_filter = Some("typeahead=debug".into());

	let mut config = RawConfig::default();
	config.dispatcher.min_length = Some(9);
	config.transport.kind = Some("catalog".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.dispatcher.min_length, Some(2));
	assert_eq!(config.dispatcher.debounce_ms, Some(75));
	assert_eq!(config.transport.kind.as_deref(), Some("http"));
	assert_eq!(config.transport.catalog, cli.catalog);
	assert_eq!(config.transport.endpoint, cli.endpoint);
	assert_eq!(config.transport.parameter.as_deref(), Some("q"));
	assert_eq!(config.transport.limit, Some(3));
	assert_eq!(config.transport.latency_ms, Some(20));
	assert_eq!(config.transport.timeout_ms, Some(1500));
	assert_eq!(config.runtime.settle_timeout_ms, Some(900));
	assert_eq!(config.logging.filter, cli.log_filter);
	assert_eq!(config.logging.format.as_deref(), Some("json"));
}

#[test]
fn unset_values_fall_back_to_defaults() {
	let cli = CliArgs::parse_from(["typeahead"]);

	let config = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(config.dispatcher.min_length, 4);
	assert_eq!(config.dispatcher.debounce, Duration::from_millis(250));
	assert_eq!(config.transport.kind, TransportKind::Catalog);
	assert_eq!(config.transport.catalog_options.limit, 10);
	assert_eq!(config.transport.parameter, "query");
	assert_eq!(config.transport.timeout, Duration::from_secs(10));
	assert_eq!(config.loop_options.tick, Duration::from_millis(10));
	assert_eq!(config.loop_options.settle_timeout, Duration::from_secs(5));
	assert_eq!(config.logging.filter, "warn");
}

#[test]
fn http_without_endpoint_is_reported_against_the_flag() {
	let cli = CliArgs::parse_from(["typeahead", "--transport", "http"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();

	let message = err.to_string();
	assert!(message.contains("transport.endpoint"));
	assert!(message.contains("required"));
}

#[test]
fn unknown_log_format_names_the_key() {
	let cli = CliArgs::parse_from(["typeahead"]);
	let mut config = RawConfig::default();
	config.logging.format = Some("yaml".into());

	let err = config.resolve(&cli).unwrap_err();

	assert!(err.to_string().contains("logging.format"));
	assert!(err.to_string().contains("configuration key"));
}
