//! Schema of a loaded table.

pub mod column_info;

pub use column_info::{ColumnInfo, ColumnLookup};

use crate::access::DataType;
use anyhow::{anyhow, Result};

/// Ordered set of columns of a table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    columns: Vec<ColumnInfo>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnInfo>) -> Self {
        Self { columns }
    }

    /// Build a schema from `(name, type)` pairs
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, DataType)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, data_type)| ColumnInfo::new(name, data_type))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|col| col.name.as_str())
    }

    /// Resolve names to positions, failing on the first unknown name
    pub fn indices_of<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of(name)
                    .ok_or_else(|| anyhow!("Column '{}' not found in schema", name))
            })
            .collect()
    }

    pub fn into_columns(self) -> Vec<ColumnInfo> {
        self.columns
    }
}

impl ColumnLookup for Schema {
    fn columns(&self) -> &[ColumnInfo] {
        &self.columns
    }
}

impl From<Vec<ColumnInfo>> for Schema {
    fn from(columns: Vec<ColumnInfo>) -> Self {
        Self::new(columns)
    }
}
