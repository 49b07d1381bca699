//! Cell values read out of rows by column accessors.
//!
//! `CellValue` is the common currency between a caller's row type and the
//! derivation pipeline: sorting compares cell values, filtering matches
//! against their text form, and the view falls back to that same text form
//! when a column has no render override.

use std::cmp::Ordering;
use std::fmt;

// ===== CellValue =====

/// A single cell value produced by a column accessor.
///
/// `Empty` models a missing field. It displays as the empty string, so it
/// never matches a non-empty search term, and it orders before every other
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Missing or empty cell.
    Empty,
}

impl CellValue {
    /// Compare two cell values for the sort stage.
    ///
    /// Same-variant values use their natural ordering (`f64::total_cmp` for
    /// numbers, lexicographic for text, `false < true` for booleans).
    /// Mixed-variant comparisons order by variant rank, which keeps the sort
    /// total and non-panicking; the resulting cross-type order is otherwise
    /// not meaningful.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }

    /// Whether this cell is the `Empty` variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    // Variant rank for cross-type comparisons. Empty sorts first.
    fn rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Number(_) => 2,
            CellValue::Text(_) => 3,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(CellValue::Empty)
    }
}
