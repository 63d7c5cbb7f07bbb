//! Filter executor implementation.
//!
//! This executor passes through the rows of a child executor that satisfy a
//! compiled filter, one row at a time.

use crate::access::Row;
use crate::catalog::ColumnInfo;
use crate::executor::Executor;
use crate::predicate::CompiledFilter;
use anyhow::{bail, Result};

/// Executor that filters rows with a compiled filter
pub struct FilterExecutor {
    /// Child executor that produces rows
    child: Box<dyn Executor>,
    filter: CompiledFilter,
    /// Output schema (same as child's schema)
    output_schema: Vec<ColumnInfo>,
    /// Whether the executor has been initialized
    initialized: bool,
}

impl FilterExecutor {
    /// Create a new filter executor
    ///
    /// # Arguments
    /// * `child` - The child executor that produces rows
    /// * `filter` - Filter compiled against the child's output schema
    pub fn new(child: Box<dyn Executor>, filter: CompiledFilter) -> Self {
        Self {
            child,
            filter,
            output_schema: Vec::new(),
            initialized: false,
        }
    }
}

impl Executor for FilterExecutor {
    fn init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        self.child.init()?;
        self.output_schema = self.child.output_schema().to_vec();

        // Literal/column type mismatches surface here, before any row is read
        self.filter.check_schema(self.output_schema.as_slice())?;
        log::debug!(
            "filtering with {} predicate(s)",
            self.filter.predicates().len()
        );

        self.initialized = true;
        Ok(())
    }

    fn next(&mut self) -> Result<Option<Row>> {
        if !self.initialized {
            bail!("Executor not initialized. Call init() first.");
        }

        // Keep pulling from the child until a row matches
        while let Some(row) = self.child.next()? {
            if self.filter.evaluate(&row)? {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    fn output_schema(&self) -> &[ColumnInfo] {
        &self.output_schema
    }
}
