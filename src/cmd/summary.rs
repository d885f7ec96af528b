//! Summary command - farm-wide totals across collections

use super::{fetch_records, format_naira, format_quantity, ClientArgs};
use crate::entities::{self, Entity, SaleRecord};
use crate::totals::sum_field;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    client: ClientArgs,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    sales_amount: Decimal,
    total_sales_amount: Decimal,
    total_sales_profit: Decimal,
    inventory_bags: Decimal,
    inventory_amount: Decimal,
    investments: Decimal,
    expenses: Decimal,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Section")]
    section: &'static str,
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let client = self.client.client();

        let sales = fetch_records(&client, Entity::SaleRecord, Vec::new())?;
        let total_sales = fetch_records(&client, Entity::TotalSales, Vec::new())?;
        let inventory = fetch_records(&client, Entity::FeedInventory, Vec::new())?;
        let investments = fetch_records(&client, Entity::Investment, Vec::new())?;
        let expenses = fetch_records(&client, Entity::Expenses, Vec::new())?;

        let data = SummaryData {
            sales_amount: sales.iter().map(|r| SaleRecord::new(r).amount()).sum(),
            total_sales_amount: sum_field(&total_sales, entities::total_sales::AMOUNT),
            total_sales_profit: sum_field(&total_sales, entities::total_sales::PROFIT),
            inventory_bags: sum_field(&inventory, entities::inventory::BAGS_BOUGHT),
            inventory_amount: sum_field(&inventory, entities::inventory::AMOUNT),
            investments: sum_field(&investments, entities::financial::AMOUNT),
            expenses: sum_field(&expenses, entities::financial::AMOUNT),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_summary(&data);
        }
        Ok(())
    }
}

fn print_summary(data: &SummaryData) {
    let rows = vec![
        SummaryRow {
            section: "Sales records",
            metric: "Amount",
            value: format_naira(data.sales_amount),
        },
        SummaryRow {
            section: "Total sales",
            metric: "Amount",
            value: format_naira(data.total_sales_amount),
        },
        SummaryRow {
            section: "Total sales",
            metric: "Profit",
            value: format_naira(data.total_sales_profit),
        },
        SummaryRow {
            section: "Feed inventory",
            metric: "Bags bought",
            value: format_quantity(data.inventory_bags),
        },
        SummaryRow {
            section: "Feed inventory",
            metric: "Amount",
            value: format_naira(data.inventory_amount),
        },
        SummaryRow {
            section: "Investments",
            metric: "Amount",
            value: format_naira(data.investments),
        },
        SummaryRow {
            section: "Expenses",
            metric: "Amount",
            value: format_naira(data.expenses),
        },
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!();
    println!("FARM SUMMARY");
    println!();
    println!("{table}");
}
