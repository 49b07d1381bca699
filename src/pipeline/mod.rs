//! The derivation pipeline: Sort → Filter → Paginate.
//!
//! A pure function from `(rows, columns, state, options)` to the visible
//! row slice plus paging facts. Rows are borrowed, never cloned or
//! mutated; the sort works on a vector of references. Everything is
//! recomputed from scratch per call: target data volumes are small
//! client-rendered tables, so there is no incremental update.

pub mod filter;
pub mod paginate;
pub mod sort;

pub use filter::filter_rows;
pub use paginate::{clamp_page, paginate, total_pages};
pub use sort::sort_rows;

use crate::config::GridOptions;
use crate::model::Column;
use crate::state::GridState;
use tracing::trace;

// ===== GridFrame =====

/// One derived frame: the visible rows plus the paging facts the view and
/// the paging handlers need.
#[derive(Debug)]
pub struct GridFrame<'a, R> {
    /// Rows visible on the current page, in display order.
    pub rows: Vec<&'a R>,
    /// Effective page after clamping, 1-based.
    pub page: usize,
    /// Total pages, always at least 1.
    pub total_pages: usize,
    /// Row count after filtering, before pagination.
    pub filtered_count: usize,
    /// Row count of the raw input.
    pub total_count: usize,
}

impl<R> GridFrame<'_, R> {
    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Derive the visible frame for the current state.
///
/// Stages run in a fixed order: sort (when enabled and a spec is set), then
/// filter (when enabled and the term is non-empty), then paginate. The
/// requested page is clamped against the post-filter page count, so a
/// state left pointing past the end (say, after the filter shrank the row
/// set) degrades to the last page instead of an empty view.
pub fn derive_frame<'a, R>(
    rows: &'a [R],
    columns: &[Column<R>],
    state: &GridState,
    options: &GridOptions,
) -> GridFrame<'a, R> {
    let mut working: Vec<&R> = rows.iter().collect();

    if options.sorting {
        if let Some(spec) = &state.sort {
            working = sort_rows(working, columns, spec);
        }
    }

    if options.filtering {
        working = filter_rows(working, columns, state.search_term());
    }

    let filtered_count = working.len();
    let total_pages = total_pages(filtered_count, state.page_size);
    let page = clamp_page(state.current_page, total_pages);
    let visible = paginate(working, page, state.page_size);

    trace!(
        total = rows.len(),
        filtered = filtered_count,
        page,
        total_pages,
        visible = visible.len(),
        "derived grid frame"
    );

    GridFrame {
        rows: visible,
        page,
        total_pages,
        filtered_count,
        total_count: rows.len(),
    }
}
