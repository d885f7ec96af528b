use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Field holding a record's business date.
pub const DATE_FIELD: &str = "date";
/// Field holding a record's backend identifier.
pub const ID_FIELD: &str = "id";

/// One business entity instance (sale, inventory line, feed log line,
/// investment, expense) as returned by a collection endpoint.
///
/// Records keep the backend's dynamic shape; typed access goes through the
/// accessors below or the per-entity views in [`crate::entities`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record(fields)
    }

    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Record(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Resolve a dot-path into the record (e.g. `feedSalesUnit.unitName`).
    ///
    /// Missing keys, missing intermediate objects and explicit nulls all
    /// resolve to `None`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current: Option<&Value> = None;
        for segment in path.split('.') {
            current = match current {
                None => self.0.get(segment),
                Some(Value::Object(fields)) => fields.get(segment),
                Some(_) => return None,
            };
            current?;
        }
        current.filter(|value| !value.is_null())
    }

    /// Stringified field value, the form used for dropdown options and
    /// filter matching. Objects and arrays have no stringified form.
    pub fn text(&self, path: &str) -> Option<String> {
        match self.lookup(path)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Numeric field value, `None` when missing or not a number.
    pub fn decimal(&self, path: &str) -> Option<Decimal> {
        self.lookup(path).and_then(decimal_value)
    }

    /// Date field value, `None` when missing or unparseable.
    pub fn date(&self, path: &str) -> Option<NaiveDate> {
        match self.lookup(path)? {
            Value::String(s) => parse_date(s),
            _ => None,
        }
    }

    /// Stringified identifier used for deduplication across pages.
    pub fn id(&self) -> Option<String> {
        self.text(ID_FIELD)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record(fields)
    }
}

/// Convert a JSON number to a `Decimal`. Non-numbers yield `None`; the
/// caller decides whether that is degenerate input (see [`crate::totals`]).
pub fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let s = n.to_string();
            Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .ok()
        }
        _ => None,
    }
}

/// Resolve a dot-path into an arbitrary JSON value. Used where the record
/// array itself must first be located inside a response body.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Parse a record date: plain `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::from_value(value).unwrap()
    }

    #[test]
    fn lookup_resolves_nested_paths() {
        let r = record(json!({"feedSalesUnit": {"unitName": "Bag"}}));
        assert_eq!(r.text("feedSalesUnit.unitName").as_deref(), Some("Bag"));
    }

    #[test]
    fn lookup_missing_intermediate_is_none() {
        let r = record(json!({"buyerName": "Ada"}));
        assert_eq!(r.lookup("feedSalesUnit.unitName"), None);
        assert_eq!(r.lookup("buyerName.nested"), None);
    }

    #[test]
    fn lookup_null_is_none() {
        let r = record(json!({"feedBrandName": null}));
        assert_eq!(r.lookup("feedBrandName"), None);
    }

    #[test]
    fn decimal_reads_integers_and_fractions() {
        let r = record(json!({"amount": 150, "price": 12.5}));
        assert_eq!(r.decimal("amount"), Some(dec!(150)));
        assert_eq!(r.decimal("price"), Some(dec!(12.5)));
    }

    #[test]
    fn decimal_rejects_non_numbers() {
        let r = record(json!({"amount": "150"}));
        assert_eq!(r.decimal("amount"), None);
    }

    #[test]
    fn date_accepts_plain_and_rfc3339() {
        let r = record(json!({"date": "2024-01-10"}));
        assert_eq!(
            r.date(DATE_FIELD),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );

        let r = record(json!({"date": "2024-02-05T08:30:00+01:00"}));
        assert_eq!(
            r.date(DATE_FIELD),
            NaiveDate::from_ymd_opt(2024, 2, 5)
        );
    }

    #[test]
    fn date_unparseable_is_none() {
        let r = record(json!({"date": "next tuesday"}));
        assert_eq!(r.date(DATE_FIELD), None);
    }

    #[test]
    fn id_stringifies_numbers() {
        assert_eq!(record(json!({"id": 7})).id().as_deref(), Some("7"));
        assert_eq!(record(json!({"id": "u-7"})).id().as_deref(), Some("u-7"));
        assert_eq!(record(json!({})).id(), None);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("x")).is_none());
    }
}
