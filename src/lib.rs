//! Debounced, sequence-checked query dispatch for search-as-you-type inputs.
//!
//! The [`Dispatcher`] is the core: it turns raw edits of a text field into
//! debounced lookups and guarantees that only the newest lookup's answer
//! reaches the UI. [`runtime`] drives a dispatcher from a channel of input
//! events, and [`transports`] provides a fuzzy catalog and an HTTP backend.

pub mod app_dirs;
pub mod dispatcher;
pub mod logging;
pub mod runtime;
pub mod transports;

pub use dispatcher::{
	Clock, DispatchError, Dispatcher, DispatcherConfig, DispatcherState, ManualClock, SystemClock,
	TickOutcome,
};
pub use runtime::{InputFeed, LoopEvent, LoopOptions, LoopSummary};
pub use typeahead_api::{
	Callbacks, Completion, Query, QueryResult, ResultSink, SequenceId, Suggestion, Transport,
	TransportError,
};
