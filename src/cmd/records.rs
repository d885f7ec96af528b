//! Records command - list a collection with filtering, sorting and paging

use super::{
    fetch_records, format_naira, format_quantity, parse_key_value, ClientArgs, EntityArg, OrderArg,
};
use crate::catalog::{FeedBrand, FeedUnit};
use crate::entities::{self, Entity, SaleRecord};
use crate::filter::{apply_filters, FilterSet, FilterValue};
use crate::record::Record;
use crate::sort::sort_by_date;
use crate::totals::sum_field;
use anyhow::bail;
use chrono::NaiveDate;
use clap::Args;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

#[derive(Args, Debug)]
pub struct RecordsCommand {
    #[command(flatten)]
    client: ClientArgs,

    /// Collection to list
    #[arg(short, long, value_enum, default_value_t = EntityArg::SaleRecord)]
    entity: EntityArg,

    /// Filter by feed brand label (e.g. "TopFeed Layer")
    #[arg(long)]
    brand: Option<String>,

    /// Filter by sales unit label (e.g. "Bag")
    #[arg(long)]
    unit: Option<String>,

    /// Filter by buyer name (case-insensitive substring)
    #[arg(long)]
    buyer: Option<String>,

    /// Only records on or after this date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Only records on or before this date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Sort order by record date
    #[arg(short, long, value_enum, default_value_t = OrderArg::Desc)]
    order: OrderArg,

    /// Page to display (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 25)]
    page_size: usize,

    /// Server-side filter as key=value, repeatable
    #[arg(long = "remote-filter", value_parser = parse_key_value)]
    remote_filter: Vec<(String, String)>,
}

impl RecordsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let entity: Entity = self.entity.into();
        let filters = self.filters()?;

        let client = self.client.client();
        let records = fetch_records(&client, entity, self.remote_filter.clone())?;
        let filtered = apply_filters(&records, &filters);
        let sorted = sort_by_date(&filtered, self.order.into());

        let page_count = sorted.len().div_ceil(self.page_size.max(1)).max(1);
        let slice = page_slice(&sorted, self.page, self.page_size);

        if slice.is_empty() {
            println!("No records found ({}, page {})", entity.label(), self.page);
            return Ok(());
        }

        self.print_table(entity, slice);
        print_totals(entity, &filtered);
        println!(
            "page {}/{} ({} of {} records shown)",
            self.page,
            page_count,
            slice.len(),
            filtered.len()
        );
        Ok(())
    }

    /// Client-side constraints from the convenience flags. Brand and unit
    /// labels are validated against the catalogs before they silently
    /// match nothing.
    fn filters(&self) -> anyhow::Result<FilterSet> {
        let mut filters = FilterSet::new();

        if let Some(brand) = &self.brand {
            if FeedBrand::from_label(brand).is_none() {
                bail!("unknown feed brand '{brand}' (try e.g. \"TopFeed Layer\")");
            }
            filters.insert(entities::sale::BRAND, FilterValue::Selected(brand.clone()));
        }
        if let Some(unit) = &self.unit {
            if FeedUnit::from_label(unit).is_none() {
                bail!("unknown feed unit '{unit}' (try e.g. \"Bag\")");
            }
            filters.insert(entities::sale::UNIT, FilterValue::Selected(unit.clone()));
        }
        if let Some(buyer) = &self.buyer {
            filters.insert(entities::sale::BUYER, FilterValue::Text(buyer.clone()));
        }
        if self.from.is_some() || self.to.is_some() {
            filters.insert(
                crate::record::DATE_FIELD,
                FilterValue::DateRange {
                    start: self.from,
                    end: self.to,
                },
            );
        }
        Ok(filters)
    }

    fn print_table(&self, entity: Entity, slice: &[Record]) {
        let columns = entity.columns();
        let mut builder = Builder::default();

        let mut header: Vec<String> = columns.iter().map(|c| c.label.clone()).collect();
        if entity == Entity::SaleRecord {
            header.push("Amount".to_string());
        }
        builder.push_record(header);

        for record in slice {
            let mut row: Vec<String> = columns
                .iter()
                .map(|c| record.text(&c.key).unwrap_or_else(|| "N/A".to_string()))
                .collect();
            if entity == Entity::SaleRecord {
                row.push(format_naira(SaleRecord::new(record).amount()));
            }
            builder.push_record(row);
        }

        let table = builder
            .build()
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{table}");
    }
}

fn page_slice(records: &[Record], page: usize, page_size: usize) -> &[Record] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= records.len() {
        return &[];
    }
    &records[start..(start + page_size).min(records.len())]
}

/// The totals footer each listing page showed, over the filtered set.
fn print_totals(entity: Entity, records: &[Record]) {
    match entity {
        Entity::SaleRecord => {
            let amount = records
                .iter()
                .map(|r| SaleRecord::new(r).amount())
                .sum::<rust_decimal::Decimal>();
            println!("Total: {}", format_naira(amount));
        }
        Entity::FeedInventory => {
            println!(
                "Total bags: {}  Total: {}",
                format_quantity(sum_field(records, entities::inventory::BAGS_BOUGHT)),
                format_naira(sum_field(records, entities::inventory::AMOUNT)),
            );
        }
        Entity::FeedLog => {
            println!(
                "Total bags bought: {}  sold: {}",
                format_quantity(sum_field(records, entities::feed_log::BAGS_BOUGHT)),
                format_quantity(sum_field(records, entities::feed_log::BAGS_SOLD)),
            );
        }
        Entity::TotalSales => {
            println!(
                "Total: {}  Profit: {}",
                format_naira(sum_field(records, entities::total_sales::AMOUNT)),
                format_naira(sum_field(records, entities::total_sales::PROFIT)),
            );
        }
        Entity::Investment | Entity::Expenses => {
            println!(
                "Total: {}",
                format_naira(sum_field(records, entities::financial::AMOUNT))
            );
        }
        Entity::User => {}
    }
}
