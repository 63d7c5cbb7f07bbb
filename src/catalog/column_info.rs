//! Column information and metadata structures.

use crate::access::DataType;
use std::fmt;

/// Name and declared type of one column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: DataType,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.data_type)
    }
}

/// Column lookups the filter engine needs from whatever holds a schema
pub trait ColumnLookup {
    fn columns(&self) -> &[ColumnInfo];

    /// Position of the first column called `name`
    fn index_of(&self, name: &str) -> Option<usize> {
        self.columns().iter().position(|col| col.name == name)
    }

    fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    fn column_type(&self, index: usize) -> Option<DataType> {
        self.columns().get(index).map(|col| col.data_type)
    }
}

impl ColumnLookup for [ColumnInfo] {
    fn columns(&self) -> &[ColumnInfo] {
        self
    }
}

impl ColumnLookup for Vec<ColumnInfo> {
    fn columns(&self) -> &[ColumnInfo] {
        self
    }
}
