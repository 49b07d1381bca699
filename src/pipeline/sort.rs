//! Sort stage.

use crate::model::{column_by_key, Column, SortDirection, SortSpec};
use tracing::trace;

/// Sort borrowed rows by the sort column's accessor value.
///
/// The sort is stable, so rows with equal keys keep their original
/// relative order. A spec naming an unknown column leaves the order
/// untouched; that can only happen if the host bypasses the header
/// handler, which validates keys.
pub fn sort_rows<'a, R>(
    mut rows: Vec<&'a R>,
    columns: &[Column<R>],
    spec: &SortSpec,
) -> Vec<&'a R> {
    let Some(column) = column_by_key(columns, &spec.key) else {
        trace!(key = %spec.key, "sort spec names unknown column, order unchanged");
        return rows;
    };
    rows.sort_by(|a, b| {
        let ordering = column.value(a).compare(&column.value(b));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    rows
}
