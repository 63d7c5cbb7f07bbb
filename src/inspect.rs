//! One inspection request: read, narrow, filter, window.

use crate::predicate::{build_filter, EvalError, FilterError};
use crate::reader::{read_table, ReadOptions};
use crate::table::Table;
use anyhow::Result;
use std::path::PathBuf;

/// Which matching rows to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowWindow {
    All,
    Head(usize),
    Tail(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectRequest {
    pub path: PathBuf,
    /// Columns to keep in order; empty keeps all of them
    pub columns: Vec<String>,
    /// Filter conditions, AND-ed together
    pub conditions: Vec<String>,
    pub window: RowWindow,
}

impl InspectRequest {
    pub fn new(path: impl Into<PathBuf>, window: RowWindow) -> Self {
        Self {
            path: path.into(),
            columns: Vec::new(),
            conditions: Vec::new(),
            window,
        }
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<String>) -> Self {
        self.conditions = conditions;
        self
    }

    fn read_options(&self) -> ReadOptions {
        let mut options = ReadOptions::default();
        if !self.columns.is_empty() {
            options = options.with_columns(self.columns.clone());
        }
        // Filters only see the first N rows of the file
        if let RowWindow::Head(n) = self.window {
            options = options.with_limit(n);
        }
        options
    }
}

/// Split a comma-separated column list.
///
/// Entries are trimmed; empty entries and repeats of an earlier name are dropped.
pub fn parse_columns(list: &str) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for name in list.split(',').map(str::trim) {
        if !name.is_empty() && !columns.iter().any(|seen| seen == name) {
            columns.push(name.to_string());
        }
    }
    columns
}

/// Run `request` and return the resulting table.
///
/// Conditions are resolved against the projected columns. A head window
/// limits the read, so its filters only see the first N rows. Any filter
/// failure comes back as a [`FilterError`] inside the `anyhow` chain.
pub fn inspect(request: &InspectRequest) -> Result<Table> {
    let table = read_table(&request.path, &request.read_options())?;
    log::debug!(
        "read {} row(s) x {} column(s) from {}",
        table.num_rows(),
        table.num_columns(),
        request.path.display()
    );

    let filter = build_filter(&request.conditions, table.schema())?;
    let table = table.filter(&filter).map_err(|err| {
        match err.downcast::<EvalError>() {
            Ok(eval) => anyhow::Error::from(FilterError::from(eval)),
            Err(other) => other,
        }
    })?;

    match request.window {
        RowWindow::All => Ok(table),
        RowWindow::Head(n) => table.head(n),
        RowWindow::Tail(n) => table.tail(n),
    }
}
