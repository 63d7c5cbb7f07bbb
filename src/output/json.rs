use crate::table::Table;
use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

/// Render as an array of objects whose keys follow column order
pub fn render_json(table: &Table) -> Result<String> {
    let names: Vec<&str> = table.schema().column_names().collect();

    let mut records = Vec::with_capacity(table.num_rows());
    for row in table.rows() {
        let mut record = Map::new();
        for (name, value) in names.iter().zip(&row.values) {
            let json = serde_json::to_value(value)
                .with_context(|| format!("Failed to encode column '{}'", name))?;
            record.insert(name.to_string(), json);
        }
        records.push(JsonValue::Object(record));
    }

    serde_json::to_string(&records).context("Failed to encode rows as JSON")
}
