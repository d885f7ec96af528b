//! Paginated collection contract shared by the accumulator and its sources.

use crate::record::Record;

/// One fetched batch of records.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub records: Vec<Record>,
    /// Whether the source expects further pages. Sources without explicit
    /// metadata report `records.len() == page_size`.
    pub has_more: bool,
}

/// Error taxonomy for page retrieval.
///
/// `Transport` and `Status` are recoverable fetch failures: the caller may
/// retry manually and accumulated state is left intact. `Shape` marks a
/// response whose content path does not hold a record array; consumers
/// degrade to an empty dataset.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned HTTP {status}")]
    Status { status: u16 },
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no record array at response path '{path}'")]
    Shape { path: String },
}

/// A paginated collection endpoint. Page indices are 1-based, matching the
/// backend's `page` query parameter.
pub trait PageSource {
    fn fetch_page(&self, page: u32, page_size: usize) -> Result<Page, FetchError>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch_page(&self, page: u32, page_size: usize) -> Result<Page, FetchError> {
        (**self).fetch_page(page, page_size)
    }
}
