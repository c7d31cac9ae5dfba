use std::cmp::{Ordering as CmpOrdering, Reverse};
use std::collections::BinaryHeap;

use frizbee::{Config, match_list};
use typeahead_api::Suggestion;

/// Catalogs at least this large are prefiltered before scoring.
pub(super) const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Number of entries scored between abort checks.
pub(super) const MATCH_CHUNK_SIZE: usize = 512;

/// Fuzzy matching options for the given query and catalog size.
pub(super) fn config_for_query(query: &str, catalog_len: usize) -> Config {
	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0..=1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	let prefilter = catalog_len >= PREFILTER_ENABLE_THRESHOLD;
	Config {
		prefilter,
		max_typos: prefilter.then_some(allowed_typos),
		sort: false,
		..Config::default()
	}
}

#[derive(Clone, Eq, PartialEq)]
struct RankedMatch {
	index: usize,
	score: u16,
}

impl Ord for RankedMatch {
	fn cmp(&self, other: &Self) -> CmpOrdering {
		self.score
			.cmp(&other.score)
			.then_with(|| other.index.cmp(&self.index))
	}
}

impl PartialOrd for RankedMatch {
	fn partial_cmp(&self, other: &Self) -> Option<CmpOrdering> {
		Some(self.cmp(other))
	}
}

/// Keeps the `limit` best matches seen so far.
pub(super) struct TopMatches {
	limit: usize,
	heap: BinaryHeap<Reverse<RankedMatch>>,
}

impl TopMatches {
	pub(super) fn new(limit: usize) -> Self {
		Self {
			limit,
			heap: BinaryHeap::new(),
		}
	}

	pub(super) fn push(&mut self, index: usize, score: u16) {
		let entry = RankedMatch { index, score };
		if self.heap.len() < self.limit {
			self.heap.push(Reverse(entry));
		} else if let Some(mut current_min) = self.heap.peek_mut()
			&& entry > current_min.0
		{
			*current_min = Reverse(entry);
		}
	}

	/// Best first; ties keep catalog order.
	pub(super) fn into_suggestions(self, entries: &[String]) -> Vec<Suggestion> {
		let mut ranked: Vec<RankedMatch> = self.heap.into_iter().map(|entry| entry.0).collect();
		ranked.sort_unstable_by(|a, b| b.cmp(a));
		ranked
			.into_iter()
			.map(|entry| Suggestion::new(entries[entry.index].clone(), entry.score))
			.collect()
	}
}

/// Score `entries` against `query` in chunks, bailing out with `None` as soon
/// as `should_abort` reports the work is no longer wanted.
pub(super) fn rank(
	entries: &[String],
	query: &str,
	limit: usize,
	should_abort: impl Fn() -> bool,
) -> Option<Vec<Suggestion>> {
	let trimmed = query.trim();
	let config = config_for_query(trimmed, entries.len());
	let mut top = TopMatches::new(limit);

	for (chunk_index, chunk) in entries.chunks(MATCH_CHUNK_SIZE).enumerate() {
		if should_abort() {
			return None;
		}
		let offset = chunk_index * MATCH_CHUNK_SIZE;
		let haystacks: Vec<&str> = chunk.iter().map(String::as_str).collect();
		for entry in match_list(trimmed, &haystacks, &config) {
			if entry.score == 0 {
				continue;
			}
			top.push(offset + entry.index as usize, entry.score);
		}
	}

	if should_abort() {
		return None;
	}
	Some(top.into_suggestions(entries))
}
