//! Transports shipped with the crate.
//!
//! Both resolve their completions off the caller's thread, so the dispatcher
//! loop never waits on a lookup.

use std::time::Duration;

pub mod catalog;
#[cfg(feature = "http")]
pub mod http;

pub use catalog::{Catalog, CatalogOptions, CatalogTransport};
#[cfg(feature = "http")]
pub use http::{HttpOptions, HttpTransport};

/// Query parameter the text is sent under unless configured otherwise.
pub const DEFAULT_QUERY_PARAMETER: &str = "query";

/// Request timeout for remote lookups unless configured otherwise.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
