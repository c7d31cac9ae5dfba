use thiserror::Error;

/// Errors returned synchronously by the dispatcher.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DispatchError {
	/// The dispatcher was disposed and can no longer be used.
	#[error("dispatcher has been disposed")]
	Disposed,
}
