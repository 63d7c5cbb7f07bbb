use crate::access::Value;
use anyhow::{bail, Result};

/// One row of a materialised table, positionally aligned with its schema
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Build a new row holding the values at `indices`, in that order
    pub fn project(&self, indices: &[usize]) -> Result<Row> {
        let mut values = Vec::with_capacity(indices.len());
        for &idx in indices {
            match self.values.get(idx) {
                Some(value) => values.push(value.clone()),
                None => bail!(
                    "Column index {} out of bounds for row with {} columns",
                    idx,
                    self.values.len()
                ),
            }
        }
        Ok(Row::new(values))
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}
