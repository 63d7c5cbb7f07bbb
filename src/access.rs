//! Access layer for row-oriented table data.
//!
//! - **Value**: Type-safe representation of a single cell
//! - **DataType**: Declared column types of a loaded table
//! - **Row**: Positional list of values aligned with a schema
//!
//! Also owns the comparison policy between cells and filter literals.

pub mod row;
pub mod value;

pub use row::Row;
pub use value::{compare_with_literal, format_float, Comparison, DataType, Value};
