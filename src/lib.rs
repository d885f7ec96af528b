//! Client-side aggregation for the ChickTrack farm backend: totals,
//! filtering, date sorting, and incremental accumulation of paginated
//! record collections, plus the REST collaborator the pages talk through.

pub mod accumulator;
pub mod catalog;
pub mod client;
pub mod cmd;
pub mod entities;
pub mod filter;
pub mod pages;
pub mod record;
pub mod sort;
pub mod totals;

pub use accumulator::{Accumulator, AccumulatorState};
pub use client::{Client, ClientConfig};
pub use filter::{apply_filters, derive_filter_fields, ColumnSpec, FilterSet, FilterValue};
pub use pages::{FetchError, Page, PageSource};
pub use record::Record;
pub use sort::{sort_by_date, SortOrder};
pub use totals::sum_field;
