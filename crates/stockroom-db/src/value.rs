//! # Statement Values
//!
//! The loosely-typed values that flow through [`Database::execute`]:
//! parameters going in, row tuples coming out.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  execute("SELECT * FROM products WHERE name LIKE ?", [Text("%Wid%")])  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Execution::Rows([                                                      │
//! │      SqlRow([Integer(1), Text("Widget"), Integer(999), Integer(5)]),    │
//! │  ])                                                                     │
//! │                                                                         │
//! │  execute("DELETE FROM products WHERE id = ?", [Integer(2)])            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Execution::Written { rows_affected: 1, last_insert_id: .. }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Database::execute`]: crate::pool::Database::execute

use std::fmt;

use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::{Row, TypeInfo, ValueRef};
use stockroom_core::Money;

use crate::error::{DbError, DbResult};

// =============================================================================
// SqlValue
// =============================================================================

/// One column value or statement parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Binds this value as the next positional parameter of `query`.
    pub(crate) fn bind_to<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            SqlValue::Null => query.bind(None::<i64>),
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Real(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Blob(v) => query.bind(v.clone()),
        }
    }

    /// Reads column `index` of a SQLite row using the value's runtime type.
    fn decode(row: &SqliteRow, index: usize) -> DbResult<Self> {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(SqlValue::Null);
        }
        let type_name = raw.type_info().name().to_string();

        let value = match type_name.as_str() {
            "INTEGER" | "BOOLEAN" => SqlValue::Integer(row.try_get(index)?),
            "REAL" | "NUMERIC" => SqlValue::Real(row.try_get(index)?),
            "BLOB" => SqlValue::Blob(row.try_get(index)?),
            _ => SqlValue::Text(row.try_get(index)?),
        };
        Ok(value)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(v) => write!(f, "{}", v),
            SqlValue::Real(v) => write!(f, "{}", v),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

/// Prices travel as integer cents.
impl From<Money> for SqlValue {
    fn from(v: Money) -> Self {
        SqlValue::Integer(v.cents())
    }
}

// =============================================================================
// SqlRow
// =============================================================================

/// One result row: column values in table column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlRow(Vec<SqlValue>);

impl SqlRow {
    pub fn new(values: Vec<SqlValue>) -> Self {
        SqlRow(values)
    }

    pub(crate) fn decode(row: &SqliteRow) -> DbResult<Self> {
        (0..row.len())
            .map(|index| SqlValue::decode(row, index))
            .collect::<DbResult<Vec<_>>>()
            .map(SqlRow)
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column `index` as an integer, or a decode error naming `column`.
    pub fn integer(&self, index: usize, column: &str) -> DbResult<i64> {
        self.0
            .get(index)
            .and_then(SqlValue::as_integer)
            .ok_or_else(|| DbError::decode(column, "expected INTEGER"))
    }

    /// Column `index` as text, or a decode error naming `column`.
    pub fn text(&self, index: usize, column: &str) -> DbResult<String> {
        self.0
            .get(index)
            .and_then(SqlValue::as_text)
            .map(str::to_string)
            .ok_or_else(|| DbError::decode(column, "expected TEXT"))
    }
}

// =============================================================================
// Execution
// =============================================================================

/// What a statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Execution {
    /// A read: the full result set, in order.
    Rows(Vec<SqlRow>),

    /// A committed write.
    Written {
        rows_affected: u64,
        last_insert_id: i64,
    },
}

impl Execution {
    /// The rows of a read; a write yields an empty set.
    pub fn into_rows(self) -> Vec<SqlRow> {
        match self {
            Execution::Rows(rows) => rows,
            Execution::Written { .. } => Vec::new(),
        }
    }

    /// Rows changed by a write; zero for a read.
    pub fn rows_affected(&self) -> u64 {
        match self {
            Execution::Rows(_) => 0,
            Execution::Written { rows_affected, .. } => *rows_affected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_accessors() {
        let row = SqlRow::new(vec![
            SqlValue::from(1_i64),
            SqlValue::from("Widget"),
            SqlValue::from(Money::from_cents(999)),
            SqlValue::Null,
        ]);

        assert_eq!(row.len(), 4);
        assert_eq!(row.integer(0, "id").unwrap(), 1);
        assert_eq!(row.text(1, "name").unwrap(), "Widget");
        assert_eq!(row.integer(2, "price_cents").unwrap(), 999);
        assert!(matches!(row.integer(3, "stock"), Err(DbError::Decode { .. })));
        assert!(matches!(row.text(9, "missing"), Err(DbError::Decode { .. })));
    }

    #[test]
    fn test_write_has_no_rows() {
        let written = Execution::Written {
            rows_affected: 3,
            last_insert_id: 7,
        };
        assert_eq!(written.rows_affected(), 3);
        assert!(written.into_rows().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Real(9.5).to_string(), "9.5");
        assert_eq!(SqlValue::Blob(vec![1, 2]).to_string(), "<2 bytes>");
    }
}
