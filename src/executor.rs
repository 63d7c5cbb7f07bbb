//! Executor layer for row selection.
//!
//! This module implements the Volcano-style iterator model over materialised
//! rows. Each executor produces rows one at a time via the `next()` method,
//! so scans, filters, projections and limits compose freely.

use crate::access::Row;
use crate::catalog::{ColumnInfo, Schema};
use crate::table::Table;
use anyhow::Result;

pub mod filter;
pub mod limit;
pub mod projection;
pub mod scan;

// Re-export executors
pub use filter::FilterExecutor;
pub use limit::LimitExecutor;
pub use projection::ProjectionExecutor;
pub use scan::MemoryScanExecutor;

/// Trait for all row executors
pub trait Executor: Send {
    /// Initialize the executor. This must be called before `next()`.
    fn init(&mut self) -> Result<()>;

    /// Get the next row from the executor.
    /// Returns None when there are no more rows.
    fn next(&mut self) -> Result<Option<Row>>;

    /// Get the output schema of this executor
    fn output_schema(&self) -> &[ColumnInfo];
}

/// Initialize `root` and drain it into a materialised table
pub fn collect(mut root: Box<dyn Executor>) -> Result<Table> {
    root.init()?;

    let mut rows = Vec::new();
    while let Some(row) = root.next()? {
        rows.push(row);
    }

    Table::new(Schema::new(root.output_schema().to_vec()), rows)
}
