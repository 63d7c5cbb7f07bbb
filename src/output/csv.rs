use crate::access::Value;
use crate::table::Table;

/// Quote a field when it holds a separator, a quote or a line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn value_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => escape_field(&other.to_string()),
    }
}

/// Render as CSV with a header line. Nulls are empty fields.
pub fn render_csv(table: &Table) -> String {
    let mut out = String::new();

    let header: Vec<String> = table
        .schema()
        .column_names()
        .map(escape_field)
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in table.rows() {
        let fields: Vec<String> = row.values.iter().map(value_field).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}
