use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::TransportArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["typeahead"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.transport.is_none());
	assert_eq!(parsed.keystroke_interval_ms, 40);
}

#[test]
fn transport_flags_parse() {
	let parsed = CliArgs::parse_from([
		"typeahead",
		"--transport",
		"http",
		"--endpoint",
		"http://localhost:8000/trips/search/",
		"-d",
		"100",
	]);
	assert_eq!(parsed.transport, Some(TransportArg::Http));
	assert_eq!(parsed.debounce_ms, Some(100));
	assert_eq!(
		parsed.endpoint.as_deref(),
		Some("http://localhost:8000/trips/search/")
	);
}
