/// Receives the results the dispatcher accepts.
///
/// At most one of the two methods fires per accepted query, and only for the
/// most recently issued one.
pub trait ResultSink<P, E> {
	fn on_result(&mut self, payload: P);
	fn on_error(&mut self, error: E);
}

/// Adapts a pair of closures into a [`ResultSink`].
pub struct Callbacks<R, F> {
	on_result: R,
	on_error: F,
}

impl<R, F> Callbacks<R, F> {
	#[must_use]
	pub fn new(on_result: R, on_error: F) -> Self {
		Self {
			on_result,
			on_error,
		}
	}
}

impl<P, E, R, F> ResultSink<P, E> for Callbacks<R, F>
where
	R: FnMut(P),
	F: FnMut(E),
{
	fn on_result(&mut self, payload: P) {
		(self.on_result)(payload);
	}

	fn on_error(&mut self, error: E) {
		(self.on_error)(error);
	}
}
