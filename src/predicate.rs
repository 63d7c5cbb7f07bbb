//! Filter predicate engine.
//!
//! Turns condition strings such as `age>25`, `name==John` or
//! `city startswith Sa` into a [`CompiledFilter`]:
//!
//! - [`parse_condition`] splits a condition into column, operator and literal
//! - [`coerce_literal`] infers the literal's type from its spelling alone
//! - [`compile_condition`] binds the condition to a schema column
//! - [`combine`] folds the predicates into one conjunction
//!
//! Multiple conditions are always AND-ed together.

pub mod compiled;
pub mod compiler;
pub mod condition;
pub mod error;
pub mod literal;
pub mod operator;

pub use compiled::{combine, CompiledFilter};
pub use compiler::{compile_condition, Predicate};
pub use condition::{parse_condition, ParsedCondition};
pub use error::{CompileError, EvalError, FilterError, FilterResult, ParseError};
pub use literal::{coerce_literal, TypedLiteral};
pub use operator::OperatorKind;

use crate::catalog::ColumnLookup;

/// Parse and compile every condition against `schema`, then combine them.
///
/// Stops at the first condition that fails to parse or names an unknown
/// column; no partial filter is returned.
pub fn build_filter<S, L>(conditions: &[S], schema: &L) -> FilterResult<CompiledFilter>
where
    S: AsRef<str>,
    L: ColumnLookup + ?Sized,
{
    let mut predicates = Vec::with_capacity(conditions.len());
    for condition in conditions {
        let parsed = parse_condition(condition.as_ref())?;
        let predicate = compile_condition(parsed, schema)?;
        log::debug!("compiled filter condition: {}", predicate);
        predicates.push(predicate);
    }
    Ok(combine(predicates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::DataType;
    use crate::catalog::Schema;

    fn schema() -> Schema {
        Schema::from_pairs([("a", DataType::Int64), ("b", DataType::Utf8)])
    }

    #[test]
    fn test_build_empty_filter() -> FilterResult<()> {
        let conditions: Vec<String> = Vec::new();
        assert!(build_filter(&conditions, &schema())?.is_match_all());
        Ok(())
    }

    #[test]
    fn test_build_filter_keeps_order() -> FilterResult<()> {
        let filter = build_filter(&["b==x", "a>1"], &schema())?;
        let columns: Vec<&str> = filter.predicates().iter().map(|p| p.column()).collect();
        assert_eq!(columns, vec!["b", "a"]);
        Ok(())
    }

    #[test]
    fn test_unknown_column_fails_fast() {
        let result = build_filter(&["a>1", "c==2", "b==x"], &schema());
        assert_eq!(
            result,
            Err(FilterError::Compile(CompileError::UnknownColumn(
                "c".to_string()
            )))
        );
    }

    #[test]
    fn test_first_invalid_condition_wins() {
        let result = build_filter(&["a>1", "nonsense", "c==2"], &schema());
        assert_eq!(
            result,
            Err(FilterError::Parse(ParseError::InvalidCondition(
                "nonsense".to_string()
            )))
        );
    }
}
