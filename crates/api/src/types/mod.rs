mod query;
mod result;
mod suggestion;

pub use query::{Query, SequenceId};
pub use result::QueryResult;
pub use suggestion::Suggestion;
