//! Pure domain types: cell values, columns, sort specs, actions, errors.

pub mod action;
pub mod cell;
pub mod column;
pub mod error;
pub mod json;
pub mod sort;

pub use action::GridAction;
pub use cell::CellValue;
pub use column::{column_by_key, Accessor, CellRenderer, Column};
pub use error::GridError;
pub use json::json_column;
pub use sort::{SortDirection, SortSpec};
