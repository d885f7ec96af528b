pub mod fields;
pub mod records;
pub mod summary;

use crate::accumulator::Accumulator;
use crate::client::{Client, ClientConfig, DEFAULT_BASE_URL};
use crate::entities::Entity;
use crate::record::Record;
use crate::sort::SortOrder;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::time::Duration;

/// Connection flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct ClientArgs {
    /// API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Remote fetch page size
    #[arg(long, default_value_t = 100)]
    fetch_page_size: usize,
}

impl ClientArgs {
    pub fn client(&self) -> Client {
        Client::new(ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            page_size: self.fetch_page_size,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum EntityArg {
    #[default]
    SaleRecord,
    FeedInventory,
    FeedLog,
    TotalSales,
    Investment,
    Expenses,
    User,
}

impl From<EntityArg> for Entity {
    fn from(arg: EntityArg) -> Self {
        match arg {
            EntityArg::SaleRecord => Entity::SaleRecord,
            EntityArg::FeedInventory => Entity::FeedInventory,
            EntityArg::FeedLog => Entity::FeedLog,
            EntityArg::TotalSales => Entity::TotalSales,
            EntityArg::Investment => Entity::Investment,
            EntityArg::Expenses => Entity::Expenses,
            EntityArg::User => Entity::User,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OrderArg {
    Asc,
    #[default]
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

/// Drain an entity's collection into memory.
pub fn fetch_records(
    client: &Client,
    entity: Entity,
    query: Vec<(String, String)>,
) -> anyhow::Result<Vec<Record>> {
    let source = client.collection_with_query(entity, query);
    let mut acc = Accumulator::new(source, client.config().page_size);
    acc.fetch_all()?;
    Ok(acc.into_records())
}

/// `key=value` parser for repeatable filter flags.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

pub fn format_naira(amount: Decimal) -> String {
    format!("₦{:.2}", amount)
}

pub fn format_quantity(qty: Decimal) -> String {
    let s = format!("{:.4}", qty);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn key_value_pairs_parse() {
        assert_eq!(
            parse_key_value("feedBrandName=TopFeed Layer").unwrap(),
            ("feedBrandName".to_string(), "TopFeed Layer".to_string())
        );
        assert!(parse_key_value("no-equals").is_err());
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn quantities_trim_trailing_zeros() {
        assert_eq!(format_quantity(dec!(12.0000)), "12");
        assert_eq!(format_quantity(dec!(2.5000)), "2.5");
    }
}
