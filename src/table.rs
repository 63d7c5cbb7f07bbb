//! Materialised table: a schema plus its rows.

use crate::access::Row;
use crate::catalog::Schema;
use crate::executor::{
    collect, FilterExecutor, LimitExecutor, MemoryScanExecutor, ProjectionExecutor,
};
use crate::predicate::CompiledFilter;
use anyhow::{bail, Result};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table, checking every row has one value per column
    pub fn new(schema: Schema, rows: Vec<Row>) -> Result<Self> {
        if let Some((pos, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != schema.len())
        {
            bail!(
                "Row {} has {} values but the schema has {} columns",
                pos,
                row.len(),
                schema.len()
            );
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.len()
    }

    pub fn into_parts(self) -> (Schema, Vec<Row>) {
        (self.schema, self.rows)
    }

    /// Keep only `columns`, in the given order
    pub fn select<S: AsRef<str>>(self, columns: &[S]) -> Result<Table> {
        let indices = self.schema.indices_of(columns)?;
        let scan = Box::new(MemoryScanExecutor::new(self));
        collect(Box::new(ProjectionExecutor::new(scan, indices)))
    }

    /// Keep the rows matching `filter`.
    ///
    /// The identity filter returns the table untouched without visiting rows.
    pub fn filter(self, filter: &CompiledFilter) -> Result<Table> {
        if filter.is_match_all() {
            return Ok(self);
        }

        let before = self.num_rows();
        let scan = Box::new(MemoryScanExecutor::new(self));
        let table = collect(Box::new(FilterExecutor::new(scan, filter.clone())))?;
        log::debug!("filter kept {} of {} rows", table.num_rows(), before);
        Ok(table)
    }

    /// First `n` rows
    pub fn head(self, n: usize) -> Result<Table> {
        let scan = Box::new(MemoryScanExecutor::new(self));
        collect(Box::new(LimitExecutor::new(scan, n)))
    }

    /// Last `n` rows
    pub fn tail(self, n: usize) -> Result<Table> {
        let offset = self.num_rows().saturating_sub(n);
        let scan = Box::new(MemoryScanExecutor::new(self));
        collect(Box::new(LimitExecutor::with_offset(scan, n, offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{DataType, Value};
    use crate::predicate::{build_filter, combine};

    fn people() -> Table {
        Table::new(
            Schema::from_pairs([("name", DataType::Utf8), ("age", DataType::Int64)]),
            vec![
                Row::new(vec![Value::String("Alice".to_string()), Value::Int64(30)]),
                Row::new(vec![Value::String("Bob".to_string()), Value::Int64(25)]),
                Row::new(vec![Value::String("carol".to_string()), Value::Int64(25)]),
            ],
        )
        .unwrap()
    }

    fn names(table: &Table) -> Vec<String> {
        table.rows().iter().map(|row| row.values[0].to_string()).collect()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Table::new(
            Schema::from_pairs([("a", DataType::Int64)]),
            vec![Row::new(vec![Value::Int64(1), Value::Int64(2)])],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Row 0 has 2 values but the schema has 1 columns"
        );
    }

    #[test]
    fn test_identity_filter_returns_table_unchanged() -> Result<()> {
        let table = people();
        let filtered = table.clone().filter(&combine(vec![]))?;
        assert_eq!(filtered, table);
        Ok(())
    }

    #[test]
    fn test_filter() -> Result<()> {
        let table = people();
        let filter = build_filter(&["age==25", "name startswith c"], table.schema())?;
        let filtered = table.filter(&filter)?;
        assert_eq!(names(&filtered), vec!["carol"]);
        assert_eq!(filtered.num_columns(), 2);
        Ok(())
    }

    #[test]
    fn test_select_reorders() -> Result<()> {
        let selected = people().select(&["age", "name"])?;
        assert_eq!(
            selected.schema().column_names().collect::<Vec<_>>(),
            vec!["age", "name"]
        );
        assert_eq!(
            selected.rows()[0],
            Row::new(vec![Value::Int64(30), Value::String("Alice".to_string())])
        );
        assert!(people().select(&["height"]).is_err());
        Ok(())
    }

    #[test]
    fn test_head_and_tail() -> Result<()> {
        assert_eq!(names(&people().head(2)?), vec!["Alice", "Bob"]);
        assert_eq!(names(&people().tail(2)?), vec!["Bob", "carol"]);
        assert_eq!(people().tail(10)?.num_rows(), 3);
        assert_eq!(people().head(0)?.num_rows(), 0);
        assert_eq!(people().tail(0)?.num_rows(), 0);
        Ok(())
    }
}
