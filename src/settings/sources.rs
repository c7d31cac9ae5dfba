use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File, Map};
use typeahead::app_dirs;

use crate::cli::CliArgs;

/// Build a [`Config`] from default locations, `--config` files and the
/// process environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	build_config_with_env(cli, None)
}

/// Like [`build_config`], reading `TYPEAHEAD__*` variables from
/// `environment` when given instead of the process environment.
fn build_config_with_env(
	cli: &CliArgs,
	environment: Option<Map<String, String>>,
) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("typeahead")
			.separator("__")
			.try_parsing(true)
			.source(environment),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".typeahead.toml"));
		files.push(current_dir.join("typeahead.toml"));
	}

	files
}
