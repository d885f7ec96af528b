//! Field sums over record collections.

use crate::record::{self, Record};
use rust_decimal::Decimal;

/// Sum a numeric field across records.
///
/// Missing fields count as zero, so partial datasets still total. A field
/// that is present but not a number is degenerate input: debug builds fail
/// loudly, release builds log and count zero. Decimal arithmetic keeps the
/// result independent of record order.
pub fn sum_field(records: &[Record], field: &str) -> Decimal {
    records.iter().fold(Decimal::ZERO, |total, rec| {
        let Some(value) = rec.lookup(field) else {
            return total;
        };
        match record::decimal_value(value) {
            Some(amount) => total + amount,
            None => {
                debug_assert!(false, "non-numeric value for field '{field}': {value}");
                log::warn!("ignoring non-numeric value for field '{field}': {value}");
                total
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn records(values: serde_json::Value) -> Vec<Record> {
        values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| Record::from_value(v.clone()).unwrap())
            .collect()
    }

    #[test]
    fn sums_the_named_field() {
        let rs = records(json!([
            {"id": 1, "date": "2024-01-10", "amount": 100, "profit": 20},
            {"id": 2, "date": "2024-02-05", "amount": 50, "profit": -5},
        ]));
        assert_eq!(sum_field(&rs, "amount"), dec!(150));
        assert_eq!(sum_field(&rs, "profit"), dec!(15));
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(sum_field(&[], "amount"), Decimal::ZERO);
    }

    #[test]
    fn order_independent() {
        let mut rs = records(json!([
            {"amount": 0.1}, {"amount": 0.2}, {"amount": 300}, {"amount": -0.25},
        ]));
        let forward = sum_field(&rs, "amount");
        rs.reverse();
        assert_eq!(sum_field(&rs, "amount"), forward);
        assert_eq!(forward, dec!(300.05));
    }

    #[test]
    fn missing_fields_count_as_zero() {
        let rs = records(json!([{"amount": 40}, {"bagsBought": 3}]));
        assert_eq!(sum_field(&rs, "amount"), dec!(40));
    }

    #[test]
    fn negative_values_sum_as_is() {
        let rs = records(json!([{"profit": -10}, {"profit": 4}]));
        assert_eq!(sum_field(&rs, "profit"), dec!(-6));
    }

    #[test]
    fn input_is_not_mutated() {
        let rs = records(json!([{"amount": 1}, {"amount": 2}]));
        let before = rs.clone();
        sum_field(&rs, "amount");
        assert_eq!(rs, before);
    }

    #[test]
    #[should_panic(expected = "non-numeric")]
    fn non_numeric_values_fail_loudly_in_debug() {
        let rs = records(json!([{"amount": "a lot"}]));
        sum_field(&rs, "amount");
    }
}
