use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogFormatArg, OutputFormat, TransportArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `typeahead` binary.
#[derive(Parser, Debug)]
#[command(
	name = "typeahead",
	version,
	long_version = long_version(),
	about = "Debounced lookup of suggestions for text typed on stdin",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TYPEAHEAD_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'm',
		long = "min-length",
		value_name = "CHARS",
		help = "Characters required before a lookup is scheduled (default: 4)"
	)]
	pub(crate) min_length: Option<usize>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MILLIS",
		help = "Quiet period after the last edit before a lookup is sent (default: 250)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 't',
		long = "transport",
		value_enum,
		help = "Where suggestions come from (default: catalog)"
	)]
	pub(crate) transport: Option<TransportArg>,
	#[arg(
		long = "catalog",
		value_name = "FILE",
		help = "Newline-separated destination list for the catalog transport (default: built-in list)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'e',
		long = "endpoint",
		value_name = "URL",
		help = "Lookup URL for the http transport (default: none)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		long = "query-param",
		value_name = "NAME",
		help = "Query string parameter carrying the text for the http transport (default: query)"
	)]
	pub(crate) query_param: Option<String>,
	#[arg(
		short = 'l',
		long = "limit",
		value_name = "NUM",
		help = "Maximum suggestions per catalog lookup (default: 10)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		long = "latency-ms",
		value_name = "MILLIS",
		help = "Artificial delay added to each catalog lookup (default: 0)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MILLIS",
		help = "Request timeout for the http transport (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long = "settle-timeout-ms",
		value_name = "MILLIS",
		help = "How long to wait for the last lookup once input ends (default: 5000)"
	)]
	pub(crate) settle_timeout_ms: Option<u64>,
	#[arg(
		short = 'k',
		long = "keystrokes",
		help = "Type each input line one character at a time (default: disabled)"
	)]
	pub(crate) keystrokes: bool,
	#[arg(
		long = "keystroke-interval-ms",
		value_name = "MILLIS",
		default_value_t = 40,
		help = "Delay between simulated keystrokes"
	)]
	pub(crate) keystroke_interval_ms: u64,
	#[arg(
		long = "log-filter",
		value_name = "FILTER",
		env = "TYPEAHEAD_LOG",
		help = "Diagnostic log filter directives (default: warn)"
	)]
	pub(crate) log_filter: Option<String>,
	#[arg(
		long = "log-format",
		value_enum,
		help = "Diagnostic log line format (default: compact)"
	)]
	pub(crate) log_format: Option<LogFormatArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print delivered suggestions"
	)]
	pub(crate) output: OutputFormat,
}
