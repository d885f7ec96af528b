//! Date ordering for record collections.

use crate::record::{Record, DATE_FIELD};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Sort direction for [`sort_by_date`]. Newest-first is the canonical
/// default across all consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Return a new sequence ordered by each record's `date` field.
///
/// The sort is stable (ties keep their input order) and never mutates the
/// input. Records whose date is missing or unparseable order after every
/// dated record in both directions, so broken rows stay visible at the end
/// instead of interleaving.
pub fn sort_by_date(records: &[Record], order: SortOrder) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_dates(a.date(DATE_FIELD), b.date(DATE_FIELD), order));
    sorted
}

fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Asc => a.cmp(&b),
            SortOrder::Desc => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
