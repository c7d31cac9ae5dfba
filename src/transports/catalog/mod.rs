//! In-memory destination catalog searched with fuzzy matching.

mod matcher;
mod worker;

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

pub use worker::CatalogTransport;

/// Destinations used when no catalog file is configured.
const BUILTIN_DESTINATIONS: &[&str] = &[
	"Amsterdam",
	"Athens",
	"Auckland",
	"Bangkok",
	"Barcelona",
	"Berlin",
	"Bogotá",
	"Budapest",
	"Buenos Aires",
	"Cairo",
	"Cape Town",
	"Copenhagen",
	"Delhi",
	"Denver",
	"Destin",
	"Dubai",
	"Dublin",
	"Edinburgh",
	"Florence",
	"Hanoi",
	"Havana",
	"Helsinki",
	"Hong Kong",
	"Istanbul",
	"Kyoto",
	"Lisbon",
	"London",
	"Marrakesh",
	"Melbourne",
	"Mexico City",
	"Montreal",
	"Nairobi",
	"New York",
	"Oslo",
	"Paris",
	"Parma",
	"Prague",
	"Reykjavík",
	"Rome",
	"San Francisco",
	"Santiago",
	"Seoul",
	"Singapore",
	"Stockholm",
	"Sydney",
	"Tokyo",
	"Toronto",
	"Vancouver",
	"Vienna",
	"Zürich",
];

/// Searchable list of destination names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	entries: Vec<String>,
}

impl Catalog {
	/// Build a catalog from arbitrary names, dropping blanks.
	#[must_use]
	pub fn new<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let entries = entries
			.into_iter()
			.map(Into::into)
			.map(|entry| entry.trim().to_string())
			.filter(|entry| !entry.is_empty())
			.collect();
		Self { entries }
	}

	/// The catalog used when nothing else is configured.
	#[must_use]
	pub fn builtin() -> Self {
		Self::new(BUILTIN_DESTINATIONS.iter().copied())
	}

	/// Parse one destination per line; blank lines and `#` comments are skipped.
	#[must_use]
	pub fn parse(text: &str) -> Self {
		Self::new(
			text.lines()
				.map(str::trim)
				.filter(|line| !line.starts_with('#')),
		)
	}

	/// Read and parse a catalog file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path)
			.with_context(|| format!("failed to read catalog {}", path.display()))?;
		Ok(Self::parse(&text))
	}

	#[must_use]
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Behaviour of the [`CatalogTransport`] worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOptions {
	/// Maximum number of suggestions per lookup.
	pub limit: usize,
	/// Artificial delay before each lookup, for demos and tests.
	pub latency: Duration,
}

impl Default for CatalogOptions {
	fn default() -> Self {
		Self {
			limit: 10,
			latency: Duration::ZERO,
		}
	}
}
