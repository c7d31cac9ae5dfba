//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events; binaries call [`initialize`] once
//! to print them on stderr.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt};

static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Filter applied when none is configured.
pub const DEFAULT_FILTER: &str = "warn";

/// Line format for log output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Compact,
	Json,
}

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
	#[error("invalid log filter '{filter}': {message}")]
	Filter { filter: String, message: String },
	#[error("failed to install log subscriber: {0}")]
	Subscriber(#[from] SetGlobalDefaultError),
}

/// Install the global subscriber. Later calls are no-ops.
pub fn initialize(filter: &str, format: LogFormat) -> Result<(), LoggingError> {
	SUBSCRIBER_INSTALLED
		.get_or_try_init(|| install_subscriber(filter, format))
		.map(|_| ())
}

fn install_subscriber(filter: &str, format: LogFormat) -> Result<(), LoggingError> {
	let env_filter = parse_filter(filter)?;

	let builder = fmt::Subscriber::builder()
		.with_env_filter(env_filter)
		.with_target(true)
		.with_writer(io::stderr)
		.with_ansi(io::stderr().is_terminal());

	let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
		LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
		LogFormat::Compact => Box::new(builder.compact().finish()),
	};

	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}

fn parse_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
	EnvFilter::try_new(filter).map_err(|err| LoggingError::Filter {
		filter: filter.to_string(),
		message: err.to_string(),
	})
}
