use crate::completion::Completion;
use crate::types::Query;

/// Performs the lookup for a query.
///
/// Implementations must resolve `completion` exactly once, eventually, and
/// may do so from any thread and in any order relative to other queries.
/// They must not block the caller for the duration of the lookup.
pub trait Transport<P, E> {
	fn dispatch(&mut self, query: Query, completion: Completion<P, E>);
}

impl<P, E, F> Transport<P, E> for F
where
	F: FnMut(Query, Completion<P, E>),
{
	fn dispatch(&mut self, query: Query, completion: Completion<P, E>) {
		self(query, completion);
	}
}
