//! Incremental page accumulation.
//!
//! Remote collections are larger than one fetch, so consumers page through
//! them locally while the accumulator pulls remote pages on demand and
//! merges them into one deduplicated, monotonically growing set.

use crate::pages::{FetchError, PageSource};
use crate::record::Record;
use std::collections::HashSet;

/// Accumulator lifecycle. `Fetching` doubles as the mutual-exclusion gate:
/// it is only ever observed from within a fetch, and `&mut self` keeps a
/// second fetch from starting against the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccumulatorState {
    #[default]
    Idle,
    Fetching,
    Exhausted,
}

/// Pulls fixed-size pages from a [`PageSource`] and merges them by record
/// identifier into an exclusively owned set. Consumers only ever see
/// read-only slices; the set never shrinks except through [`reset`].
///
/// [`reset`]: Accumulator::reset
pub struct Accumulator<S> {
    source: S,
    fetch_page_size: usize,
    next_page: u32,
    state: AccumulatorState,
    records: Vec<Record>,
    seen: HashSet<String>,
}

impl<S: PageSource> Accumulator<S> {
    pub fn new(source: S, fetch_page_size: usize) -> Self {
        assert!(fetch_page_size > 0, "fetch page size must be positive");
        Accumulator {
            source,
            fetch_page_size,
            next_page: 1,
            state: AccumulatorState::Idle,
            records: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn state(&self) -> AccumulatorState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == AccumulatorState::Exhausted
    }

    /// The accumulated set, in first-seen order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consume the accumulator, keeping the accumulated set.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Full reload: drop everything and start again from page 1. The only
    /// operation that shrinks the set.
    pub fn reset(&mut self) {
        self.records.clear();
        self.seen.clear();
        self.next_page = 1;
        self.state = AccumulatorState::Idle;
    }

    /// Fetch and merge the next remote page, returning how many records
    /// were new. A short page exhausts the accumulator; further calls are
    /// no-ops. A fetch error restores `Idle` with the set untouched and is
    /// surfaced without retry.
    pub fn fetch_next(&mut self) -> Result<usize, FetchError> {
        if self.state == AccumulatorState::Exhausted {
            return Ok(0);
        }

        self.state = AccumulatorState::Fetching;
        let page = match self.source.fetch_page(self.next_page, self.fetch_page_size) {
            Ok(page) => page,
            Err(err) => {
                self.state = AccumulatorState::Idle;
                return Err(err);
            }
        };

        let fetched = page.records.len();
        let added = self.merge(page.records);
        let exhausted = fetched < self.fetch_page_size || !page.has_more;

        log::info!(
            "page {}: {} fetched, {} new, {} accumulated",
            self.next_page,
            fetched,
            added,
            self.records.len()
        );

        self.next_page += 1;
        self.state = if exhausted {
            AccumulatorState::Exhausted
        } else {
            AccumulatorState::Idle
        };
        Ok(added)
    }

    /// Drain the source completely.
    pub fn fetch_all(&mut self) -> Result<(), FetchError> {
        while !self.is_exhausted() {
            self.fetch_next()?;
        }
        Ok(())
    }

    fn merge(&mut self, records: Vec<Record>) -> usize {
        let mut added = 0;
        for record in records {
            match record.id() {
                // No identifier to collide on; always kept.
                None => {
                    self.records.push(record);
                    added += 1;
                }
                Some(id) => {
                    if self.seen.insert(id) {
                        self.records.push(record);
                        added += 1;
                    }
                }
            }
        }
        added
    }

    /// Number of consumer-facing pages at the given local page size.
    pub fn local_page_count(&self, local_page_size: usize) -> usize {
        assert!(local_page_size > 0, "local page size must be positive");
        self.records.len().div_ceil(local_page_size)
    }

    /// Serve one consumer-facing page (1-based), fetching further remote
    /// pages while the requested upper bound exceeds what has been
    /// accumulated and the source is not exhausted.
    pub fn local_page(
        &mut self,
        page: usize,
        local_page_size: usize,
    ) -> Result<&[Record], FetchError> {
        assert!(local_page_size > 0, "local page size must be positive");
        if page == 0 {
            return Ok(&[]);
        }

        let end = page * local_page_size;
        while self.records.len() < end && !self.is_exhausted() {
            self.fetch_next()?;
        }

        let start = (page - 1) * local_page_size;
        if start >= self.records.len() {
            return Ok(&[]);
        }
        Ok(&self.records[start..end.min(self.records.len())])
    }
}
