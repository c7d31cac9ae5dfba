use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) transport_kind: Option<SettingSource>,
	pub(crate) limit: Option<SettingSource>,
	pub(crate) endpoint: Option<SettingSource>,
	pub(crate) timeout_ms: Option<SettingSource>,
	pub(crate) tick_ms: Option<SettingSource>,
	pub(crate) log_format: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		or_key(&self.debounce_ms, "dispatcher.debounce_ms")
	}

	pub(crate) fn source_for_transport_kind(&self) -> SettingSource {
		or_key(&self.transport_kind, "transport.kind")
	}

	pub(crate) fn source_for_limit(&self) -> SettingSource {
		or_key(&self.limit, "transport.limit")
	}

	/// A missing endpoint is blamed on whatever selected the http transport.
	pub(crate) fn source_for_endpoint(&self) -> SettingSource {
		self.endpoint
			.clone()
			.or_else(|| self.transport_kind.clone())
			.unwrap_or(SettingSource::ConfigKey("transport.endpoint"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout_ms, "transport.timeout_ms")
	}

	pub(crate) fn source_for_tick(&self) -> SettingSource {
		or_key(&self.tick_ms, "runtime.tick_ms")
	}

	pub(crate) fn source_for_log_format(&self) -> SettingSource {
		or_key(&self.log_format, "logging.format")
	}
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}
