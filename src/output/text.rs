use crate::catalog::ColumnLookup;
use crate::table::Table;
use tabled::{builder::Builder, settings::Style};

/// Render a bordered table preceded by its shape.
///
/// Each header cell stacks the column name over its type.
pub fn render_text(table: &Table) -> String {
    let mut builder = Builder::new();

    builder.push_record(
        table
            .schema()
            .columns()
            .iter()
            .map(|column| format!("{}\n---\n{}", column.name, column.data_type)),
    );
    for row in table.rows() {
        builder.push_record(row.values.iter().map(|value| value.to_string()));
    }

    let rendered = builder.build().with(Style::rounded()).to_string();
    format!(
        "shape: ({}, {})\n{}",
        table.num_rows(),
        table.num_columns(),
        rendered
    )
}
