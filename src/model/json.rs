//! Dynamic rows backed by `serde_json::Value`.
//!
//! For callers whose rows arrive as untyped JSON objects (API responses,
//! config dumps), `json_column` builds a column whose accessor does field
//! lookup by key. Missing fields yield [`CellValue::Empty`], so they never
//! match a search and sort before present values.

use crate::model::{CellValue, Column};
use serde_json::Value;

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => CellValue::Number(f),
                // u64 values beyond f64 range fall back to their text form
                None => CellValue::Text(n.to_string()),
            },
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
        }
    }
}

/// Build a column over `serde_json::Value` rows reading the given field.
pub fn json_column(key: impl Into<String>, header: impl Into<String>) -> Column<Value> {
    let key = key.into();
    let field = key.clone();
    Column::new(key, header, move |row: &Value| {
        row.get(&field).map(CellValue::from).unwrap_or(CellValue::Empty)
    })
}
