//! Vocabulary shared between the typeahead dispatcher and the transports it
//! drives.
//!
//! A transport receives a [`Query`] together with a one-shot [`Completion`]
//! and resolves it whenever the lookup finishes, from any thread. The
//! dispatcher turns resolved completions into calls on a [`ResultSink`].

pub mod completion;
pub mod error;
pub mod sink;
pub mod transport;
pub mod types;

pub use completion::Completion;
pub use error::TransportError;
pub use sink::{Callbacks, ResultSink};
pub use transport::Transport;
pub use types::{Query, QueryResult, SequenceId, Suggestion};
