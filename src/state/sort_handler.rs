//! Column-header activation (pure state transitions).
//!
//! Two-state toggle: a new key sorts ascending, re-activating the same key
//! flips direction. Once a column has been sorted there is no path back to
//! the unsorted state; hosts that want one can clear `state.sort` directly.

use crate::config::GridOptions;
use crate::model::{column_by_key, Column, SortSpec};
use crate::state::GridState;
use tracing::{debug, trace};

/// Activate a column header by key.
///
/// No-op unless sorting is enabled and the key names a sortable column.
/// The current page is kept; only search and page-size changes reset it.
pub fn activate_header<R>(
    mut state: GridState,
    columns: &[Column<R>],
    key: &str,
    options: &GridOptions,
) -> GridState {
    if !options.sorting {
        return state;
    }
    match column_by_key(columns, key) {
        Some(column) if column.is_sortable() => {}
        Some(_) => {
            trace!(key, "header activation on non-sortable column ignored");
            return state;
        }
        None => {
            debug!(key, "header activation on unknown column ignored");
            return state;
        }
    }

    state.sort = Some(match state.sort.take() {
        Some(spec) if spec.key == key => SortSpec {
            key: spec.key,
            direction: spec.direction.toggled(),
        },
        _ => SortSpec::ascending(key),
    });
    state
}

/// Activate a column header by 0-based index.
///
/// Out-of-range indices are ignored. Used by the keyboard bindings, where
/// digit keys address columns positionally.
pub fn activate_header_index<R>(
    state: GridState,
    columns: &[Column<R>],
    index: usize,
    options: &GridOptions,
) -> GridState {
    match columns.get(index) {
        Some(column) => {
            let key = column.key().to_string();
            activate_header(state, columns, &key, options)
        }
        None => state,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "sort_handler_tests.rs"]
mod tests;
