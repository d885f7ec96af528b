//! Filter field derivation and predicate application.
//!
//! Filter metadata is derived from the dataset itself: a column whose key
//! names a date becomes a range filter, a column with a small set of
//! distinct values becomes a dropdown, everything else is free text.

use crate::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A column becomes a dropdown when its distinct value count is in
/// `1..=MAX_DROPDOWN_OPTIONS`.
pub const MAX_DROPDOWN_OPTIONS: usize = 10;

/// Candidate column for filter derivation: a dot-path key plus a display
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnSpec {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// One selectable dropdown entry. Derived options use the stringified field
/// value for both parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "options")]
pub enum FieldKind {
    Text,
    Dropdown(Vec<SelectOption>),
    DateRange,
}

/// Filter metadata for one column, as presented to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Derive filter fields for the given columns from the dataset.
///
/// Rules, in order: specs with an empty key are dropped; a key containing
/// "date" (case-insensitive) is a date range; a column with 1 to
/// [`MAX_DROPDOWN_OPTIONS`] distinct non-null values is a dropdown offering
/// exactly those values (sorted, so derivation is deterministic); anything
/// else is free text. Pure: re-run whenever the dataset or columns change.
pub fn derive_filter_fields(records: &[Record], specs: &[ColumnSpec]) -> Vec<FilterField> {
    specs
        .iter()
        .filter(|spec| !spec.key.is_empty())
        .map(|spec| FilterField {
            key: spec.key.clone(),
            label: spec.label.clone(),
            kind: derive_kind(records, &spec.key),
        })
        .collect()
}

fn derive_kind(records: &[Record], key: &str) -> FieldKind {
    if key.to_ascii_lowercase().contains("date") {
        return FieldKind::DateRange;
    }

    let distinct: BTreeSet<String> = records.iter().filter_map(|r| r.text(key)).collect();
    if (1..=MAX_DROPDOWN_OPTIONS).contains(&distinct.len()) {
        let options = distinct
            .into_iter()
            .map(|value| SelectOption {
                label: value.clone(),
                value,
            })
            .collect();
        FieldKind::Dropdown(options)
    } else {
        FieldKind::Text
    }
}

/// A single user-supplied constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Free-text constraint: case-insensitive substring match.
    Text(String),
    /// Dropdown selection: exact match against the stringified field.
    Selected(String),
    /// Inclusive date range; a missing bound is unbounded on that side.
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Empty constraints impose nothing and are skipped during matching.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) | FilterValue::Selected(s) => s.is_empty(),
            FilterValue::DateRange { start, end } => start.is_none() && end.is_none(),
        }
    }
}

/// The set of active constraints, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(BTreeMap<String, FilterValue>);

impl FilterSet {
    pub fn new() -> Self {
        FilterSet::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FilterValue) {
        self.0.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: FilterValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the record satisfies every non-empty constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.0
            .iter()
            .all(|(key, value)| value.is_empty() || field_matches(record, key, value))
    }
}

fn field_matches(record: &Record, key: &str, constraint: &FilterValue) -> bool {
    match constraint {
        FilterValue::Text(needle) => record
            .text(key)
            .is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase())),
        FilterValue::Selected(choice) => record.text(key).is_some_and(|v| v == *choice),
        FilterValue::DateRange { start, end } => record.date(key).is_some_and(|d| {
            start.is_none_or(|s| d >= s) && end.is_none_or(|e| d <= e)
        }),
    }
}

/// Apply the filter set, returning the surviving records in input order.
/// An empty set is the identity. Never mutates the input.
pub fn apply_filters(records: &[Record], filters: &FilterSet) -> Vec<Record> {
    records
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect()
}
