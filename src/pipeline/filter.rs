//! Filter stage.

use crate::model::Column;

/// Keep rows where any column's accessor value matches the search term.
///
/// Matching is a case-insensitive substring test on the value's text form.
/// Render overrides do not participate; the filter sees what the accessor
/// returns. `Empty` cells render as the empty string and so never match a
/// non-empty term. An empty term keeps everything. Order is preserved.
pub fn filter_rows<'a, R>(rows: Vec<&'a R>, columns: &[Column<R>], term: &str) -> Vec<&'a R> {
    if term.is_empty() {
        return rows;
    }
    let needle = term.to_lowercase();
    rows.into_iter()
        .filter(|row| {
            columns
                .iter()
                .any(|col| col.value(row).to_string().to_lowercase().contains(&needle))
        })
        .collect()
}
