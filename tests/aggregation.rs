//! End-to-end aggregation over an in-memory page source: accumulate,
//! filter, sort, total, slice.

use chicktrack::accumulator::Accumulator;
use chicktrack::filter::{
    apply_filters, derive_filter_fields, ColumnSpec, FieldKind, FilterSet, FilterValue,
};
use chicktrack::pages::{FetchError, Page, PageSource};
use chicktrack::record::Record;
use chicktrack::sort::{sort_by_date, SortOrder};
use chicktrack::totals::sum_field;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde_json::json;

/// Serves a fixed dataset in pages, the way the backend's collection
/// endpoints do.
struct StubEndpoint {
    records: Vec<Record>,
}

impl StubEndpoint {
    fn new(values: serde_json::Value) -> Self {
        let records = values
            .as_array()
            .unwrap()
            .iter()
            .map(|v| Record::from_value(v.clone()).unwrap())
            .collect();
        StubEndpoint { records }
    }
}

impl PageSource for StubEndpoint {
    fn fetch_page(&self, page: u32, page_size: usize) -> Result<Page, FetchError> {
        let start = (page as usize - 1) * page_size;
        let records: Vec<Record> = self
            .records
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();
        let has_more = records.len() == page_size;
        Ok(Page { records, has_more })
    }
}

fn sales_dataset() -> StubEndpoint {
    StubEndpoint::new(json!([
        {"id": 1, "date": "2024-01-10", "amount": 100, "profit": 20, "brand": "A", "buyerName": "Adaeze Obi"},
        {"id": 2, "date": "2024-02-05", "amount": 50, "profit": -5, "brand": "B", "buyerName": "Chidi Okafor"},
        {"id": 3, "date": "2024-01-22", "amount": 75, "profit": 10, "brand": "A", "buyerName": "Ngozi Eze"},
        {"id": 4, "date": "2024-03-14", "amount": 120, "profit": 30, "brand": "C", "buyerName": "Adaeze Obi"},
        {"id": 5, "date": "2024-02-28", "amount": 60, "profit": 5, "brand": "A", "buyerName": "Bola Ade"},
    ]))
}

#[test]
fn accumulate_filter_sort_total() {
    let source = sales_dataset();
    let mut acc = Accumulator::new(&source, 2);
    acc.fetch_all().unwrap();
    assert!(acc.is_exhausted());
    assert_eq!(acc.len(), 5);

    // Brand dropdown narrows to three records.
    let filters = FilterSet::new().with("brand", FilterValue::Selected("A".into()));
    let filtered = apply_filters(acc.records(), &filters);
    assert_eq!(filtered.len(), 3);

    // Newest first, then summary figures over the filtered set.
    let sorted = sort_by_date(&filtered, SortOrder::Desc);
    let ids: Vec<_> = sorted.iter().map(|r| r.id().unwrap()).collect();
    assert_eq!(ids, ["5", "3", "1"]);

    assert_eq!(sum_field(&sorted, "amount"), dec!(235));
    assert_eq!(sum_field(&sorted, "profit"), dec!(35));
}

#[test]
fn worked_example_totals_and_ordering() {
    let source = StubEndpoint::new(json!([
        {"id": 1, "date": "2024-01-10", "amount": 100, "profit": 20},
        {"id": 2, "date": "2024-02-05", "amount": 50, "profit": -5},
    ]));
    let mut acc = Accumulator::new(&source, 10);
    acc.fetch_all().unwrap();

    let records = acc.records();
    assert_eq!(sum_field(records, "amount"), dec!(150));
    assert_eq!(sum_field(records, "profit"), dec!(15));

    let asc: Vec<_> = sort_by_date(records, SortOrder::Asc)
        .iter()
        .map(|r| r.id().unwrap())
        .collect();
    let desc: Vec<_> = sort_by_date(records, SortOrder::Desc)
        .iter()
        .map(|r| r.id().unwrap())
        .collect();
    assert_eq!(asc, ["1", "2"]);
    assert_eq!(desc, ["2", "1"]);
}

#[test]
fn derived_fields_feed_the_filter_set() {
    let source = sales_dataset();
    let mut acc = Accumulator::new(&source, 100);
    acc.fetch_all().unwrap();

    let fields = derive_filter_fields(
        acc.records(),
        &[
            ColumnSpec::new("brand", "Brand"),
            ColumnSpec::new("buyerName", "Buyer"),
            ColumnSpec::new("date", "Date"),
        ],
    );

    // Three distinct brands make a dropdown; pick an option from it and
    // filter with an inclusive date window.
    let brand_options = match &fields[0].kind {
        FieldKind::Dropdown(options) => options,
        other => panic!("expected dropdown, got {other:?}"),
    };
    assert_eq!(brand_options.len(), 3);
    assert_eq!(fields[2].kind, FieldKind::DateRange);

    let filters = FilterSet::new()
        .with("brand", FilterValue::Selected(brand_options[0].value.clone()))
        .with(
            "date",
            FilterValue::DateRange {
                start: NaiveDate::from_ymd_opt(2024, 1, 20),
                end: NaiveDate::from_ymd_opt(2024, 12, 31),
            },
        );
    let filtered = apply_filters(acc.records(), &filters);
    let ids: Vec<_> = filtered.iter().map(|r| r.id().unwrap()).collect();
    assert_eq!(ids, ["3", "5"]);
}

#[test]
fn local_paging_over_a_sorted_copy_leaves_the_set_intact() {
    let source = sales_dataset();
    let mut acc = Accumulator::new(&source, 2);

    // Local page 2 at size 2 forces two remote fetches.
    let page = acc.local_page(2, 2).unwrap().to_vec();
    assert_eq!(page.len(), 2);
    assert_eq!(acc.len(), 4);

    // Sorting a slice is non-destructive; the accumulated order stays
    // first-seen.
    let sorted = sort_by_date(&page, SortOrder::Desc);
    let sorted_ids: Vec<_> = sorted.iter().map(|r| r.id().unwrap()).collect();
    assert_eq!(sorted_ids, ["4", "3"]);
    let ids: Vec<_> = acc.records().iter().map(|r| r.id().unwrap()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}
