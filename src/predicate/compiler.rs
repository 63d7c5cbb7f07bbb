//! Binding parsed conditions to a schema.

use crate::access::{compare_with_literal, Comparison, DataType, Row, Value};
use crate::catalog::ColumnLookup;
use crate::predicate::{
    coerce_literal, CompileError, EvalError, OperatorKind, ParsedCondition, TypedLiteral,
};
use std::fmt;

/// A boolean test over a single column of a row
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    column: String,
    /// Position of `column` in the schema the predicate was compiled against
    index: usize,
    operator: OperatorKind,
    literal: TypedLiteral,
    /// Canonical text of `literal`, used by the substring operators
    needle: String,
}

impl Predicate {
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn column_index(&self) -> usize {
        self.index
    }

    pub fn operator(&self) -> OperatorKind {
        self.operator
    }

    pub fn literal(&self) -> &TypedLiteral {
        &self.literal
    }

    fn mismatch(&self, column_type: DataType) -> EvalError {
        EvalError::TypeMismatch {
            column: self.column.clone(),
            operator: self.operator,
            column_type,
            literal: self.literal.clone(),
        }
    }

    /// Test one row. A NULL cell never matches.
    pub fn evaluate(&self, row: &Row) -> Result<bool, EvalError> {
        let cell = row
            .get(self.index)
            .ok_or(EvalError::ColumnIndexOutOfBounds {
                index: self.index,
                row_width: row.len(),
            })?;

        if self.operator.is_text_operator() {
            return match cell {
                Value::Null => Ok(false),
                Value::String(s) => Ok(self.operator.matches_text(s, &self.needle)),
                other => Err(self.mismatch(other.data_type().unwrap_or(DataType::Null))),
            };
        }

        match compare_with_literal(cell, &self.literal) {
            Comparison::Null => Ok(false),
            Comparison::Ordered(ord) => Ok(self.operator.matches_ordering(ord)),
            Comparison::Incompatible => {
                Err(self.mismatch(cell.data_type().unwrap_or(DataType::Null)))
            }
        }
    }

    /// Check the literal against the column's declared type.
    ///
    /// Text operators need a string column. Comparisons accept numbers
    /// against numeric columns, booleans against boolean columns and strings
    /// against string-held columns. An all-null column accepts anything.
    pub fn check_type(&self, column_type: DataType) -> Result<(), EvalError> {
        let compatible = match (self.operator.is_text_operator(), column_type, &self.literal) {
            (_, DataType::Null, _) => true,
            (true, DataType::Utf8, _) => true,
            (true, _, _) => false,
            (false, dt, lit) if dt.is_numeric() => lit.is_numeric(),
            (false, DataType::Boolean, TypedLiteral::Bool(_)) => true,
            (false, dt, TypedLiteral::String(_)) => dt.is_textual(),
            (false, _, _) => false,
        };

        if compatible {
            Ok(())
        } else {
            Err(self.mismatch(column_type))
        }
    }

    /// Type-check against the schema rows will be evaluated under
    pub fn check_schema<L: ColumnLookup + ?Sized>(&self, schema: &L) -> Result<(), EvalError> {
        let column_type =
            schema
                .column_type(self.index)
                .ok_or(EvalError::ColumnIndexOutOfBounds {
                    index: self.index,
                    row_width: schema.columns().len(),
                })?;
        self.check_type(column_type)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.column, self.operator, self.literal)
    }
}

/// Resolve a parsed condition against `schema` and build its predicate.
///
/// Only column existence is checked here; type compatibility is left to
/// evaluation.
pub fn compile_condition<L: ColumnLookup + ?Sized>(
    parsed: ParsedCondition,
    schema: &L,
) -> Result<Predicate, CompileError> {
    let index = schema
        .index_of(&parsed.column)
        .ok_or_else(|| CompileError::UnknownColumn(parsed.column.clone()))?;

    let literal = coerce_literal(&parsed.literal);
    let needle = literal.to_text();

    Ok(Predicate {
        column: parsed.column,
        index,
        operator: parsed.operator,
        literal,
        needle,
    })
}
