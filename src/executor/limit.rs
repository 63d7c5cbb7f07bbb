//! Limit executor implementation.
//!
//! This executor limits the number of rows returned from a child executor.
//! An offset skips rows first, which is how `tail` windows are taken.

use crate::access::Row;
use crate::catalog::ColumnInfo;
use crate::executor::Executor;
use anyhow::{bail, Result};

/// Executor that limits the number of rows returned
pub struct LimitExecutor {
    /// Child executor that produces rows
    child: Box<dyn Executor>,
    /// Maximum number of rows to return
    limit: usize,
    /// Number of rows to skip before returning
    offset: usize,
    /// Number of rows skipped so far
    skipped: usize,
    /// Number of rows returned so far
    returned: usize,
    /// Output schema (same as child's schema)
    output_schema: Vec<ColumnInfo>,
    /// Whether the executor has been initialized
    initialized: bool,
}

impl LimitExecutor {
    /// Create a new limit executor with only limit
    ///
    /// # Arguments
    /// * `child` - The child executor that produces rows
    /// * `limit` - The maximum number of rows to return
    pub fn new(child: Box<dyn Executor>, limit: usize) -> Self {
        Self::with_offset(child, limit, 0)
    }

    /// Create a new limit executor with limit and offset
    ///
    /// # Arguments
    /// * `child` - The child executor that produces rows
    /// * `limit` - The maximum number of rows to return
    /// * `offset` - The number of rows to skip before returning
    pub fn with_offset(child: Box<dyn Executor>, limit: usize, offset: usize) -> Self {
        Self {
            child,
            limit,
            offset,
            skipped: 0,
            returned: 0,
            output_schema: Vec::new(),
            initialized: false,
        }
    }
}

impl Executor for LimitExecutor {
    fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        self.child.init()?;
        self.output_schema = self.child.output_schema().to_vec();

        self.skipped = 0;
        self.returned = 0;

        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<Row>> {
        if !self.initialized {
            bail!("Executor not initialized. Call init() first.");
        }

        if self.returned >= self.limit {
            return Ok(None);
        }

        while self.skipped < self.offset {
            match self.child.next()? {
                Some(_) => self.skipped += 1,
                None => return Ok(None),
            }
        }

        match self.child.next()? {
            Some(row) => {
                self.returned += 1;
                Ok(Some(row))
            }
            None => Ok(None),
        }
    }

    fn output_schema(&self) -> &[ColumnInfo] {
        &self.output_schema
    }
}
