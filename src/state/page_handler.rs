//! Pagination and page-size handling (pure state transitions).
//!
//! Page moves clamp to `[1, total_pages]`, so every handler is idempotent
//! at the edges. `total_pages` comes from the most recent derived frame;
//! the pipeline applies the same clamp when deriving, so a stale value can
//! never push the view out of range.

use crate::config::GridOptions;
use crate::state::GridState;
use tracing::debug;

/// Advance one page, stopping at the last page.
pub fn next_page(mut state: GridState, total_pages: usize) -> GridState {
    let last = total_pages.max(1);
    state.current_page = (state.current_page + 1).min(last);
    state
}

/// Go back one page, stopping at page 1.
pub fn prev_page(mut state: GridState) -> GridState {
    state.current_page = state.current_page.saturating_sub(1).max(1);
    state
}

/// Set the page size to one of the allowed choices.
///
/// A size outside `options.page_size_choices` (zero included, since
/// validated choices never contain zero) leaves the state unchanged.
/// A valid size resets the page to 1, even when the size is unchanged.
pub fn set_page_size(mut state: GridState, size: usize, options: &GridOptions) -> GridState {
    if !options.page_size_choices.contains(&size) {
        debug!(size, choices = ?options.page_size_choices, "rejected page size");
        return state;
    }
    state.page_size = size;
    state.current_page = 1;
    state
}

/// Step to the next allowed page size, wrapping around.
///
/// If the current size is somehow not in the choices, restarts at the
/// first choice.
pub fn cycle_page_size(state: GridState, options: &GridOptions) -> GridState {
    let choices = &options.page_size_choices;
    let Some(first) = choices.first().copied() else {
        return state;
    };
    let next = match choices.iter().position(|&s| s == state.page_size) {
        Some(idx) => choices[(idx + 1) % choices.len()],
        None => first,
    };
    set_page_size(state, next, options)
}

// ===== Tests =====

#[cfg(test)]
#[path = "page_handler_tests.rs"]
mod tests;
