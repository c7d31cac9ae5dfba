use clap::ValueEnum;

/// Lookup backends selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TransportArg {
	Catalog,
	Http,
}

impl TransportArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			TransportArg::Catalog => "catalog",
			TransportArg::Http => "http",
		}
	}
}

/// Log line formats selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormatArg {
	Compact,
	Json,
}

impl LogFormatArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LogFormatArg::Compact => "compact",
			LogFormatArg::Json => "json",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
