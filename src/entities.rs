//! Collection endpoints and typed views over their records.
//!
//! Each entity carries its endpoint path, where the record array lives in
//! the response body, and the columns its listing offers for filtering.
//! The views resolve the optional fields the backend actually sends, with
//! defined defaults instead of ad hoc null chasing.

use crate::filter::ColumnSpec;
use crate::record::{Record, DATE_FIELD};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A ChickTrack collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    SaleRecord,
    FeedInventory,
    FeedLog,
    TotalSales,
    Investment,
    Expenses,
    User,
}

impl Entity {
    pub const ALL: [Entity; 7] = [
        Entity::SaleRecord,
        Entity::FeedInventory,
        Entity::FeedLog,
        Entity::TotalSales,
        Entity::Investment,
        Entity::Expenses,
        Entity::User,
    ];

    /// Path segment under the API base.
    pub fn path(self) -> &'static str {
        match self {
            Entity::SaleRecord => "SaleRecord",
            Entity::FeedInventory => "FeedInventory",
            Entity::FeedLog => "FeedLog",
            Entity::TotalSales => "TotalSales",
            Entity::Investment => "Investment",
            Entity::Expenses => "Expenses",
            Entity::User => "BaseUser",
        }
    }

    /// Dot-path to the record array in the response body. The user list
    /// nests one level deeper than every other collection.
    pub fn content_path(self) -> &'static str {
        match self {
            Entity::User => "content.data",
            _ => "content",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Entity::SaleRecord => "Sales records",
            Entity::FeedInventory => "Feed inventory",
            Entity::FeedLog => "Feed log",
            Entity::TotalSales => "Total sales",
            Entity::Investment => "Investments",
            Entity::Expenses => "Expenses",
            Entity::User => "Users",
        }
    }

    /// Columns the entity's listing exposes to the filter engine.
    pub fn columns(self) -> Vec<ColumnSpec> {
        match self {
            Entity::SaleRecord => vec![
                ColumnSpec::new(sale::BRAND, "Brand"),
                ColumnSpec::new(sale::UNIT, "Unit"),
                ColumnSpec::new(sale::QUANTITY, "Quantity"),
                ColumnSpec::new(sale::BUYER, "Buyer"),
                ColumnSpec::new(DATE_FIELD, "Date"),
            ],
            Entity::FeedInventory => vec![
                ColumnSpec::new(inventory::BRAND, "Brand"),
                ColumnSpec::new(inventory::BAGS_BOUGHT, "Bags Bought"),
                ColumnSpec::new(inventory::AMOUNT, "Amount"),
                ColumnSpec::new(DATE_FIELD, "Date"),
            ],
            Entity::FeedLog => vec![
                ColumnSpec::new(feed_log::BRAND, "Brand"),
                ColumnSpec::new(feed_log::BAGS_BOUGHT, "Bags Bought"),
                ColumnSpec::new(feed_log::BAGS_SOLD, "Bags Sold"),
                ColumnSpec::new(feed_log::AVAILABLE_BAGS, "Available Bags"),
            ],
            Entity::TotalSales => vec![
                ColumnSpec::new(total_sales::AMOUNT, "Amount"),
                ColumnSpec::new(total_sales::PROFIT, "Profit"),
                ColumnSpec::new(DATE_FIELD, "Date"),
            ],
            Entity::Investment => vec![
                ColumnSpec::new(financial::DESCRIPTION, "Description"),
                ColumnSpec::new(financial::AMOUNT, "Amount"),
                ColumnSpec::new(DATE_FIELD, "Date"),
            ],
            Entity::Expenses => vec![
                ColumnSpec::new(financial::DESCRIPTION, "Description"),
                ColumnSpec::new(financial::AMOUNT, "Amount"),
                ColumnSpec::new(DATE_FIELD, "Date"),
            ],
            Entity::User => vec![
                ColumnSpec::new(user::FULL_NAME, "Full Name"),
                ColumnSpec::new(user::EMAIL, "Email"),
                ColumnSpec::new(user::USER_NAME, "Username"),
            ],
        }
    }
}

/// Field keys for sale records.
pub mod sale {
    pub const PRICE: &str = "price";
    pub const QUANTITY: &str = "quantity";
    pub const PROFIT: &str = "profit";
    pub const BUYER: &str = "buyerName";
    pub const BRAND: &str = "feedBrandName";
    pub const UNIT: &str = "feedSalesUnit.unitName";
}

/// Field keys for feed inventory lines.
pub mod inventory {
    pub const BRAND: &str = "feedBrandName";
    pub const BAGS_BOUGHT: &str = "bagsBought";
    pub const AMOUNT: &str = "amount";
}

/// Field keys for feed log lines.
pub mod feed_log {
    pub const BRAND: &str = "feedBrandName";
    pub const BAGS_BOUGHT: &str = "bagsBought";
    pub const BAGS_SOLD: &str = "bagsSold";
    pub const AVAILABLE_BAGS: &str = "availableBags";
}

/// Field keys for the total sales ledger.
pub mod total_sales {
    pub const AMOUNT: &str = "amount";
    pub const PROFIT: &str = "profit";
}

/// Field keys shared by investments and expenses.
pub mod financial {
    pub const DESCRIPTION: &str = "description";
    pub const AMOUNT: &str = "amount";
}

/// Field keys for users.
pub mod user {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const USER_NAME: &str = "userName";
}

/// Typed view over one sale record.
#[derive(Debug, Clone, Copy)]
pub struct SaleRecord<'a>(&'a Record);

impl<'a> SaleRecord<'a> {
    pub fn new(record: &'a Record) -> Self {
        SaleRecord(record)
    }

    pub fn price(&self) -> Decimal {
        self.0.decimal(sale::PRICE).unwrap_or(Decimal::ZERO)
    }

    pub fn quantity(&self) -> Decimal {
        self.0.decimal(sale::QUANTITY).unwrap_or(Decimal::ZERO)
    }

    /// Sale amount is price times quantity; the backend does not send it.
    pub fn amount(&self) -> Decimal {
        self.price() * self.quantity()
    }

    pub fn buyer_name(&self) -> Option<String> {
        self.0.text(sale::BUYER)
    }

    pub fn brand_name(&self) -> Option<String> {
        self.0.text(sale::BRAND)
    }

    pub fn unit_name(&self) -> Option<String> {
        self.0.text(sale::UNIT)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0.date(DATE_FIELD)
    }
}

/// Typed view over one feed inventory line.
#[derive(Debug, Clone, Copy)]
pub struct InventoryLine<'a>(&'a Record);

impl<'a> InventoryLine<'a> {
    pub fn new(record: &'a Record) -> Self {
        InventoryLine(record)
    }

    pub fn brand_name(&self) -> Option<String> {
        self.0.text(inventory::BRAND)
    }

    pub fn bags_bought(&self) -> Decimal {
        self.0.decimal(inventory::BAGS_BOUGHT).unwrap_or(Decimal::ZERO)
    }

    pub fn amount(&self) -> Decimal {
        self.0.decimal(inventory::AMOUNT).unwrap_or(Decimal::ZERO)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0.date(DATE_FIELD)
    }
}

/// Typed view over one feed log line.
#[derive(Debug, Clone, Copy)]
pub struct FeedLogLine<'a>(&'a Record);

impl<'a> FeedLogLine<'a> {
    pub fn new(record: &'a Record) -> Self {
        FeedLogLine(record)
    }

    pub fn brand_name(&self) -> Option<String> {
        self.0.text(feed_log::BRAND)
    }

    pub fn bags_bought(&self) -> Decimal {
        self.0.decimal(feed_log::BAGS_BOUGHT).unwrap_or(Decimal::ZERO)
    }

    pub fn bags_sold(&self) -> Decimal {
        self.0.decimal(feed_log::BAGS_SOLD).unwrap_or(Decimal::ZERO)
    }

    pub fn available_bags(&self) -> Decimal {
        self.0
            .decimal(feed_log::AVAILABLE_BAGS)
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn sale_amount_is_price_times_quantity() {
        let record = Record::from_value(json!({
            "id": 1,
            "price": 2500,
            "quantity": 4,
            "buyerName": "Adaeze",
            "feedBrandName": "TopFeed Layer",
            "feedSalesUnit": {"unitName": "Bag"},
            "date": "2024-01-10"
        }))
        .unwrap();
        let sale = SaleRecord::new(&record);

        assert_eq!(sale.amount(), dec!(10000));
        assert_eq!(sale.unit_name().as_deref(), Some("Bag"));
        assert_eq!(sale.brand_name().as_deref(), Some("TopFeed Layer"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let record = Record::from_value(json!({"id": 2})).unwrap();
        let sale = SaleRecord::new(&record);

        assert_eq!(sale.amount(), Decimal::ZERO);
        assert_eq!(sale.buyer_name(), None);
        assert_eq!(sale.date(), None);
    }

    #[test]
    fn inventory_line_reads_bags_and_amount() {
        let record = Record::from_value(json!({
            "feedBrandName": "NewHope Grower",
            "bagsBought": 12,
            "amount": 84000,
            "date": "2024-02-01"
        }))
        .unwrap();
        let line = InventoryLine::new(&record);

        assert_eq!(line.bags_bought(), dec!(12));
        assert_eq!(line.amount(), dec!(84000));
    }

    #[test]
    fn user_content_nests_one_level_deeper() {
        assert_eq!(Entity::User.content_path(), "content.data");
        assert_eq!(Entity::SaleRecord.content_path(), "content");
    }

    #[test]
    fn every_entity_column_has_a_key() {
        for entity in Entity::ALL {
            assert!(entity.columns().iter().all(|c| !c.key.is_empty()));
        }
    }
}
