use std::sync::mpsc::{self, Receiver, SendError, Sender};
use std::thread::{self, JoinHandle};

use tracing::{trace, warn};
use typeahead_api::{Completion, Query, Suggestion, Transport, TransportError};

use super::matcher::rank;
use super::{Catalog, CatalogOptions};

type CatalogCompletion = Completion<Vec<Suggestion>, TransportError>;

/// Commands understood by the catalog worker.
enum CatalogCommand {
	Lookup {
		query: Query,
		completion: CatalogCompletion,
	},
	Shutdown,
}

/// Resolves queries against a [`Catalog`] on a dedicated worker thread.
///
/// Lookups run one at a time in issue order. A lookup whose query has been
/// superseded by the time the worker reaches it is abandoned and resolved
/// with [`TransportError::Superseded`].
pub struct CatalogTransport {
	tx: Sender<CatalogCommand>,
	worker: Option<JoinHandle<()>>,
}

impl CatalogTransport {
	/// Start the worker thread.
	#[must_use]
	pub fn spawn(catalog: Catalog, options: CatalogOptions) -> Self {
		let (tx, rx) = mpsc::channel();
		let worker = thread::spawn(move || worker_loop(&catalog, options, &rx));
		Self {
			tx,
			worker: Some(worker),
		}
	}
}

impl Transport<Vec<Suggestion>, TransportError> for CatalogTransport {
	fn dispatch(&mut self, query: Query, completion: CatalogCompletion) {
		let command = CatalogCommand::Lookup { query, completion };
		if let Err(SendError(CatalogCommand::Lookup { completion, .. })) = self.tx.send(command) {
			warn!("catalog worker is gone; failing lookup");
			completion.fail(TransportError::WorkerUnavailable);
		}
	}
}

impl Drop for CatalogTransport {
	fn drop(&mut self) {
		let _ = self.tx.send(CatalogCommand::Shutdown);
		if let Some(worker) = self.worker.take()
			&& worker.join().is_err()
		{
			warn!("catalog worker panicked");
		}
	}
}

fn worker_loop(catalog: &Catalog, options: CatalogOptions, rx: &Receiver<CatalogCommand>) {
	while let Ok(command) = rx.recv() {
		match command {
			CatalogCommand::Lookup { query, completion } => {
				lookup(catalog, options, &query, completion);
			}
			CatalogCommand::Shutdown => break,
		}
	}
}

fn lookup(catalog: &Catalog, options: CatalogOptions, query: &Query, completion: CatalogCompletion) {
	if completion.is_superseded() {
		trace!(sequence_id = %query.sequence_id(), "catalog lookup skipped");
		completion.fail(TransportError::Superseded {
			sequence_id: query.sequence_id(),
		});
		return;
	}
	if !options.latency.is_zero() {
		thread::sleep(options.latency);
	}

	let ranked = rank(catalog.entries(), query.text(), options.limit, || {
		completion.is_superseded()
	});
	match ranked {
		Some(suggestions) => {
			trace!(sequence_id = %query.sequence_id(), matches = suggestions.len(), "catalog lookup finished");
			completion.succeed(suggestions);
		}
		None => {
			trace!(sequence_id = %query.sequence_id(), "catalog lookup abandoned");
			completion.fail(TransportError::Superseded {
				sequence_id: query.sequence_id(),
			});
		}
	}
}
