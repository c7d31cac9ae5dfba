mod cli;
mod settings;
mod workflow;

use std::time::Duration;

use anyhow::Result;
use cli::{CliArgs, parse_cli};
use typeahead::{InputFeed, logging};
use workflow::LookupWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	logging::initialize(&resolved.logging.filter, resolved.logging.format)?;

	if cli.print_config {
		resolved.print_summary();
	}

	LookupWorkflow::new(resolved, input_feed(&cli), cli.output).run()?;
	Ok(())
}

/// How stdin lines become input events.
fn input_feed(cli: &CliArgs) -> InputFeed {
	if cli.keystrokes {
		InputFeed::Keystrokes {
			interval: Duration::from_millis(cli.keystroke_interval_ms),
		}
	} else {
		InputFeed::Lines
	}
}
