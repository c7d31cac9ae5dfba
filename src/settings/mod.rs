//! Configuration loading and resolution.
//!
//! `load` layers config files, environment variables and CLI flags, then
//! validates the result into a [`ResolvedConfig`] the workflow runs from.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::{ResolvedConfig, TransportKind};
