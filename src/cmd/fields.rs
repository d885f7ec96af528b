//! Fields command - show the filter metadata derived from a dataset

use super::{fetch_records, ClientArgs, EntityArg};
use crate::entities::Entity;
use crate::filter::{derive_filter_fields, FieldKind};
use clap::Args;
use tabled::{
    settings::Style,
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct FieldsCommand {
    #[command(flatten)]
    client: ClientArgs,

    /// Collection to derive filter fields for
    #[arg(short, long, value_enum, default_value_t = EntityArg::SaleRecord)]
    entity: EntityArg,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Options")]
    options: String,
}

impl FieldsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let entity: Entity = self.entity.into();
        let client = self.client.client();

        // A shape error means no usable dataset; filters degrade to none.
        let records = match fetch_records(&client, entity, Vec::new()) {
            Ok(records) => records,
            Err(err) => {
                log::error!("cannot derive filter fields for {}: {err}", entity.label());
                Vec::new()
            }
        };
        let fields = derive_filter_fields(&records, &entity.columns());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&fields)?);
            return Ok(());
        }

        let rows: Vec<FieldRow> = fields
            .iter()
            .map(|f| FieldRow {
                key: f.key.clone(),
                label: f.label.clone(),
                kind: match f.kind {
                    FieldKind::Text => "text",
                    FieldKind::Dropdown(_) => "dropdown",
                    FieldKind::DateRange => "date-range",
                },
                options: match &f.kind {
                    FieldKind::Dropdown(options) => options
                        .iter()
                        .map(|o| o.label.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => String::new(),
                },
            })
            .collect();

        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
        Ok(())
    }
}
