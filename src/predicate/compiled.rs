//! Conjunction of compiled predicates.

use crate::access::Row;
use crate::catalog::ColumnLookup;
use crate::predicate::{EvalError, Predicate};

/// The filter applied to a table: every predicate must hold
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CompiledFilter {
    /// No conditions were given; every row is selected
    #[default]
    MatchAll,
    /// Non-empty conjunction, in the order the conditions were given
    All(Vec<Predicate>),
}

/// Fold predicates into one filter. An empty list is the identity filter.
pub fn combine(predicates: Vec<Predicate>) -> CompiledFilter {
    if predicates.is_empty() {
        CompiledFilter::MatchAll
    } else {
        CompiledFilter::All(predicates)
    }
}

impl CompiledFilter {
    pub fn is_match_all(&self) -> bool {
        matches!(self, CompiledFilter::MatchAll)
    }

    pub fn predicates(&self) -> &[Predicate] {
        match self {
            CompiledFilter::MatchAll => &[],
            CompiledFilter::All(predicates) => predicates,
        }
    }

    /// Test one row.
    ///
    /// Every predicate is evaluated even once the row is known to fail, so
    /// the first error in condition order is always the one reported.
    pub fn evaluate(&self, row: &Row) -> Result<bool, EvalError> {
        match self {
            CompiledFilter::MatchAll => Ok(true),
            CompiledFilter::All(predicates) => {
                predicates.iter().try_fold(true, |matched, predicate| {
                    let holds = predicate.evaluate(row)?;
                    Ok(matched && holds)
                })
            }
        }
    }

    /// Type-check every predicate against the schema rows come from
    pub fn check_schema<L: ColumnLookup + ?Sized>(&self, schema: &L) -> Result<(), EvalError> {
        self.predicates()
            .iter()
            .try_for_each(|predicate| predicate.check_schema(schema))
    }
}
