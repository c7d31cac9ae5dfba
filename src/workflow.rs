use std::io::{self, BufReader};
use std::sync::mpsc;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use typeahead::runtime::{self, spawn_input_feed};
use typeahead::transports::{Catalog, CatalogTransport};
use typeahead::{
	Callbacks, Dispatcher, DispatcherConfig, InputFeed, LoopOptions, LoopSummary, Suggestion,
	Transport, TransportError,
};

use crate::cli::{OutputFormat, Render, print_payload};
use crate::settings::{ResolvedConfig, TransportKind};

/// Wires stdin, the configured transport and stdout around a dispatcher.
pub(crate) struct LookupWorkflow {
	config: ResolvedConfig,
	feed: InputFeed,
	output: OutputFormat,
}

impl LookupWorkflow {
	pub(crate) fn new(config: ResolvedConfig, feed: InputFeed, output: OutputFormat) -> Self {
		Self {
			config,
			feed,
			output,
		}
	}

	pub(crate) fn run(self) -> Result<LoopSummary> {
		let session = Session {
			dispatcher: self.config.dispatcher,
			loop_options: self.config.loop_options,
			feed: self.feed,
			output: self.output,
		};

		match self.config.transport.kind {
			TransportKind::Catalog => {
				let catalog = match &self.config.transport.catalog {
					Some(path) => Catalog::load(path)?,
					None => Catalog::builtin(),
				};
				info!(entries = catalog.len(), "catalog loaded");
				let transport =
					CatalogTransport::spawn(catalog, self.config.transport.catalog_options);
				session.drive::<Vec<Suggestion>, _>(transport)
			}
			TransportKind::Http => run_http(&self.config, session),
		}
	}
}

#[cfg(feature = "http")]
fn run_http(config: &ResolvedConfig, session: Session) -> Result<LoopSummary> {
	use typeahead::transports::{HttpOptions, HttpTransport};

	let endpoint = config
		.transport
		.endpoint
		.as_deref()
		.context("transport.endpoint is required for the http transport")?;
	let endpoint = url::Url::parse(endpoint)
		.with_context(|| format!("invalid transport.endpoint '{endpoint}'"))?;

	let mut options = HttpOptions::new(endpoint);
	options.parameter = config.transport.parameter.clone();
	options.timeout = config.transport.timeout;
	let transport = HttpTransport::new(options)?;
	session.drive::<serde_json::Value, _>(transport)
}

#[cfg(not(feature = "http"))]
fn run_http(_config: &ResolvedConfig, _session: Session) -> Result<LoopSummary> {
	bail!("typeahead was built without the `http` feature")
}

/// Settings shared by every transport.
struct Session {
	dispatcher: DispatcherConfig,
	loop_options: LoopOptions,
	feed: InputFeed,
	output: OutputFormat,
}

impl Session {
	fn drive<P, T>(self, transport: T) -> Result<LoopSummary>
	where
		P: Render,
		T: Transport<P, TransportError>,
	{
		let output = self.output;
		let sink = Callbacks::new(
			move |payload: P| {
				if let Err(err) = print_payload(output, &payload) {
					warn!(error = %err, "failed to print suggestions");
				}
			},
			|error: TransportError| eprintln!("lookup failed: {error}"),
		);
		let mut dispatcher = Dispatcher::new(self.dispatcher, transport, sink);

		let (tx, rx) = mpsc::channel();
		let reader = spawn_input_feed(BufReader::new(io::stdin()), self.feed, tx);
		let summary = runtime::run(&mut dispatcher, &rx, self.loop_options)?;

		match reader.join() {
			Ok(result) => result.context("failed to read input")?,
			Err(_) => bail!("input reader thread panicked"),
		}

		info!(
			inputs = summary.inputs,
			issued = summary.issued,
			delivered = summary.delivered,
			discarded = summary.discarded,
			timed_out = summary.timed_out,
			"input finished"
		);
		Ok(summary)
	}
}
