//! Splitting a raw condition string into column, operator and literal.

use crate::predicate::{OperatorKind, ParseError};
use std::str::FromStr;

/// A condition split into its three parts.
///
/// `column` and `literal` are trimmed; `literal` may still carry quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCondition {
    pub column: String,
    pub operator: OperatorKind,
    pub literal: String,
}

impl ParsedCondition {
    pub fn new(
        column: impl Into<String>,
        operator: OperatorKind,
        literal: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            literal: literal.into(),
        }
    }
}

/// Parse a condition such as `age>=30` or `city startswith Sa`.
///
/// Operators are probed in [`OperatorKind::PRIORITY`] order and the first
/// one found anywhere in the text wins; the text is split on its first
/// occurrence. Word operators are plain substrings, so a column or literal
/// that contains `contains`, `>` and the like splits in the wrong place.
pub fn parse_condition(condition: &str) -> Result<ParsedCondition, ParseError> {
    for operator in OperatorKind::PRIORITY {
        if let Some((left, right)) = condition.split_once(operator.as_str()) {
            return Ok(ParsedCondition::new(left.trim(), operator, right.trim()));
        }
    }

    Err(ParseError::InvalidCondition(condition.to_string()))
}

impl FromStr for ParsedCondition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_condition(s)
    }
}
