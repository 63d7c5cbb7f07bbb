//! Loading Parquet files into materialised tables.
//!
//! Arrow arrays are normalised into the crate's value model: every integer
//! width becomes `Int64` (or `UInt64`), floats become `Float64`, the string
//! encodings become `Utf8`, and temporal or exotic types are rendered to
//! text through Arrow's display formatter.

use crate::access::{DataType, Row, Value};
use crate::catalog::{ColumnInfo, ColumnLookup, Schema};
use crate::table::Table;
use anyhow::{Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType as ArrowType, Float64Type, Int64Type, UInt64Type};
use arrow::error::ArrowError;
use arrow::record_batch::{RecordBatch, RecordBatchReader};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ProjectionMask;
use parquet::errors::ParquetError;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Column '{0}' not found in file")]
    ColumnNotFound(String),
}

/// What to load from a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Columns to keep, in output order. `None` or empty keeps every column;
    /// repeated names are kept once.
    pub columns: Option<Vec<String>>,
    /// Stop after this many rows
    pub limit: Option<usize>,
}

impl ReadOptions {
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Requested names in order of first appearance
    fn requested_columns(&self) -> Option<Vec<&str>> {
        let columns = self.columns.as_deref().filter(|columns| !columns.is_empty())?;

        let mut names: Vec<&str> = Vec::with_capacity(columns.len());
        for name in columns {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        Some(names)
    }
}

/// Map an Arrow type onto the declared type of a loaded column
pub fn column_type(arrow_type: &ArrowType) -> DataType {
    match arrow_type {
        ArrowType::Null => DataType::Null,
        ArrowType::Boolean => DataType::Boolean,
        ArrowType::Int8
        | ArrowType::Int16
        | ArrowType::Int32
        | ArrowType::Int64
        | ArrowType::UInt8
        | ArrowType::UInt16
        | ArrowType::UInt32 => DataType::Int64,
        ArrowType::UInt64 => DataType::UInt64,
        ArrowType::Float16 | ArrowType::Float32 | ArrowType::Float64 => DataType::Float64,
        ArrowType::Utf8 | ArrowType::LargeUtf8 | ArrowType::Utf8View => DataType::Utf8,
        ArrowType::Date32
        | ArrowType::Date64
        | ArrowType::Time32(_)
        | ArrowType::Time64(_)
        | ArrowType::Timestamp(_, _)
        | ArrowType::Duration(_)
        | ArrowType::Interval(_) => DataType::Temporal,
        ArrowType::Dictionary(_, value_type) => column_type(value_type),
        _ => DataType::Other,
    }
}

/// Convert one Arrow column into cell values
fn column_values(array: &ArrayRef, data_type: DataType) -> Result<Vec<Value>> {
    let len = array.len();

    let values = match data_type {
        DataType::Null => vec![Value::Null; len],
        DataType::Boolean => {
            let casted = cast(array, &ArrowType::Boolean)?;
            casted
                .as_boolean()
                .iter()
                .map(|v| v.map_or(Value::Null, Value::Boolean))
                .collect()
        }
        DataType::Int64 => {
            let casted = cast(array, &ArrowType::Int64)?;
            casted
                .as_primitive::<Int64Type>()
                .iter()
                .map(|v| v.map_or(Value::Null, Value::Int64))
                .collect()
        }
        DataType::UInt64 => {
            let casted = cast(array, &ArrowType::UInt64)?;
            casted
                .as_primitive::<UInt64Type>()
                .iter()
                .map(|v| v.map_or(Value::Null, Value::UInt64))
                .collect()
        }
        DataType::Float64 => {
            let casted = cast(array, &ArrowType::Float64)?;
            casted
                .as_primitive::<Float64Type>()
                .iter()
                .map(|v| v.map_or(Value::Null, Value::Float64))
                .collect()
        }
        DataType::Utf8 => {
            let casted = cast(array, &ArrowType::Utf8)?;
            casted
                .as_string::<i32>()
                .iter()
                .map(|v| v.map_or(Value::Null, |s| Value::String(s.to_string())))
                .collect()
        }
        DataType::Temporal | DataType::Other => {
            let options = FormatOptions::default();
            let formatter = ArrayFormatter::try_new(array.as_ref(), &options)?;
            (0..len)
                .map(|i| {
                    if array.is_null(i) {
                        Value::Null
                    } else {
                        Value::String(formatter.value(i).to_string())
                    }
                })
                .collect()
        }
    };

    Ok(values)
}

/// Convert a record batch into rows laid out by `schema`
fn batch_rows(batch: &RecordBatch, schema: &Schema) -> Result<Vec<Row>> {
    let mut columns = Vec::with_capacity(batch.num_columns());
    for (array, info) in batch.columns().iter().zip(schema.columns()) {
        let values = column_values(array, info.data_type)
            .with_context(|| format!("Failed to decode column '{}'", info.name))?;
        columns.push(values.into_iter());
    }

    let rows = (0..batch.num_rows())
        .map(|_| {
            Row::new(
                columns
                    .iter_mut()
                    .map(|column| column.next().unwrap_or(Value::Null))
                    .collect(),
            )
        })
        .collect();
    Ok(rows)
}

/// Read a Parquet file into memory.
///
/// Only the requested columns are decoded, and they come back in the order
/// they were requested. Asking for a column the file does not have is an
/// error.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let file = File::open(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(ReadError::from)
        .with_context(|| format!("Failed to read Parquet metadata from {}", path.display()))?;

    log::debug!(
        "opened {}: {} row group(s), {} row(s)",
        path.display(),
        builder.metadata().num_row_groups(),
        builder.metadata().file_metadata().num_rows()
    );

    let requested = options.requested_columns();
    if let Some(columns) = &requested {
        let file_schema = builder.schema().clone();
        let mut indices = Vec::with_capacity(columns.len());
        for &name in columns {
            let idx = file_schema
                .index_of(name)
                .map_err(|_| ReadError::ColumnNotFound(name.to_string()))?;
            indices.push(idx);
        }
        indices.sort_unstable();
        indices.dedup();

        let mask = ProjectionMask::roots(builder.parquet_schema(), indices);
        builder = builder.with_projection(mask);
    }

    if let Some(limit) = options.limit {
        builder = builder.with_limit(limit);
    }

    let reader = builder
        .build()
        .map_err(ReadError::from)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let schema = Schema::new(
        reader
            .schema()
            .fields()
            .iter()
            .map(|field| ColumnInfo::new(field.name().as_str(), column_type(field.data_type())))
            .collect(),
    );

    let mut rows = Vec::new();
    for batch in reader {
        let batch = batch
            .map_err(ReadError::from)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        rows.extend(batch_rows(&batch, &schema)?);
    }
    log::debug!("loaded {} row(s) from {}", rows.len(), path.display());

    let table = Table::new(schema, rows)?;
    match requested {
        Some(columns) => table.select(&columns),
        None => Ok(table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{
        BooleanArray, Date32Array, Float32Array, Int32Array, StringArray, UInt64Array,
    };
    use arrow::datatypes::{Field, Schema as ArrowSchema};
    use std::sync::Arc;

    #[test]
    fn test_column_type_mapping() {
        assert_eq!(column_type(&ArrowType::Int8), DataType::Int64);
        assert_eq!(column_type(&ArrowType::UInt32), DataType::Int64);
        assert_eq!(column_type(&ArrowType::UInt64), DataType::UInt64);
        assert_eq!(column_type(&ArrowType::Float32), DataType::Float64);
        assert_eq!(column_type(&ArrowType::LargeUtf8), DataType::Utf8);
        assert_eq!(column_type(&ArrowType::Date32), DataType::Temporal);
        assert_eq!(
            column_type(&ArrowType::Dictionary(
                Box::new(ArrowType::Int32),
                Box::new(ArrowType::Utf8)
            )),
            DataType::Utf8
        );
        assert_eq!(column_type(&ArrowType::Binary), DataType::Other);
    }

    #[test]
    fn test_batch_rows() -> Result<()> {
        let arrow_schema = Arc::new(ArrowSchema::new(vec![
            Field::new("id", ArrowType::Int32, false),
            Field::new("name", ArrowType::Utf8, true),
            Field::new("ratio", ArrowType::Float32, true),
            Field::new("ok", ArrowType::Boolean, true),
            Field::new("big", ArrowType::UInt64, true),
            Field::new("day", ArrowType::Date32, true),
        ]));
        let batch = RecordBatch::try_new(
            arrow_schema.clone(),
            vec![
                Arc::new(Int32Array::from(vec![1, 2])),
                Arc::new(StringArray::from(vec![Some("a"), None])),
                Arc::new(Float32Array::from(vec![Some(0.5), None])),
                Arc::new(BooleanArray::from(vec![Some(true), None])),
                Arc::new(UInt64Array::from(vec![Some(u64::MAX), None])),
                // 19737 days after the epoch is 2024-01-15
                Arc::new(Date32Array::from(vec![Some(19737), None])),
            ],
        )?;

        let schema = Schema::new(
            arrow_schema
                .fields()
                .iter()
                .map(|f| ColumnInfo::new(f.name().as_str(), column_type(f.data_type())))
                .collect(),
        );

        let rows = batch_rows(&batch, &schema)?;
        assert_eq!(
            rows[0].values,
            vec![
                Value::Int64(1),
                Value::String("a".to_string()),
                Value::Float64(0.5),
                Value::Boolean(true),
                Value::UInt64(u64::MAX),
                Value::String("2024-01-15".to_string()),
            ]
        );
        assert_eq!(
            rows[1].values,
            vec![
                Value::Int64(2),
                Value::Null,
                Value::Null,
                Value::Null,
                Value::Null,
                Value::Null,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = read_table(Path::new("/nonexistent/file.parquet"), &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReadError>(),
            Some(ReadError::Io { .. })
        ));
    }

    #[test]
    fn test_requested_columns() {
        assert_eq!(ReadOptions::default().requested_columns(), None);
        assert_eq!(
            ReadOptions::default()
                .with_columns(vec![])
                .requested_columns(),
            None
        );
        let options = ReadOptions::default()
            .with_columns(vec!["a".to_string()])
            .with_limit(3);
        assert_eq!(options.requested_columns(), Some(vec!["a"]));
        assert_eq!(options.limit, Some(3));

        let repeated = ReadOptions::default().with_columns(
            ["b", "a", "b", "a"].iter().map(|s| s.to_string()).collect(),
        );
        assert_eq!(repeated.requested_columns(), Some(vec!["b", "a"]));
    }
}
