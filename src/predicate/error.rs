//! Error types for the filter engine.

use crate::access::DataType;
use crate::predicate::{OperatorKind, TypedLiteral};
use thiserror::Error;

/// A condition string could not be split into column, operator and literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid filter condition: {0}")]
    InvalidCondition(String),
}

/// A parsed condition could not be bound to the table's schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("Column '{0}' not found in dataframe")]
    UnknownColumn(String),
}

/// A compiled predicate could not be applied to the table's data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error(
        "cannot apply '{operator}' to column '{column}' of type {column_type} with literal {literal:?}"
    )]
    TypeMismatch {
        column: String,
        operator: OperatorKind,
        column_type: DataType,
        literal: TypedLiteral,
    },

    #[error("Column index {index} out of bounds for row with {row_width} columns")]
    ColumnIndexOutOfBounds { index: usize, row_width: usize },
}

/// Any error raised while building or applying a filter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
