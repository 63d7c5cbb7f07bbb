//! Scan executor over a materialised table.

use crate::access::Row;
use crate::catalog::ColumnInfo;
use crate::executor::Executor;
use crate::table::Table;
use anyhow::{bail, Result};
use std::vec::IntoIter;

/// Executor that yields the rows of an in-memory table in order
pub struct MemoryScanExecutor {
    output_schema: Vec<ColumnInfo>,
    /// Rows not yet handed to `init()`
    pending: Option<Vec<Row>>,
    rows: Option<IntoIter<Row>>,
    initialized: bool,
}

impl MemoryScanExecutor {
    /// Create a new scan that takes ownership of `table`'s rows
    pub fn new(table: Table) -> Self {
        let (schema, rows) = table.into_parts();
        Self {
            output_schema: schema.into_columns(),
            pending: Some(rows),
            rows: None,
            initialized: false,
        }
    }
}

impl Executor for MemoryScanExecutor {
    fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let rows = self.pending.take().unwrap_or_default();
        log::debug!("scanning {} in-memory rows", rows.len());
        self.rows = Some(rows.into_iter());

        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<Row>> {
        if !self.initialized {
            bail!("Executor not initialized. Call init() first.");
        }

        let rows = self
            .rows
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Scan rows not available"))?;
        Ok(rows.next())
    }

    fn output_schema(&self) -> &[ColumnInfo] {
        &self.output_schema
    }
}
