//! Search input handling (pure state transitions).
//!
//! Every edit to the term resets the current page to 1, even if it is
//! already 1: a changed filter invalidates the old page position. There is
//! no debouncing; each edit takes effect on the next frame derivation.

use crate::state::GridState;
use tracing::trace;

/// Replace the search term wholesale.
///
/// For hosts with their own text input. Moves the cursor to the end and
/// resets the page to 1.
pub fn set_search_term(mut state: GridState, term: impl Into<String>) -> GridState {
    let term = term.into();
    trace!(term = %term, "search term replaced");
    state.search.cursor = term.chars().count();
    state.search.term = term;
    state.current_page = 1;
    state
}

/// Open the search bar and start editing.
///
/// The existing term is kept so reopening the bar edits the active filter.
pub fn open_search(mut state: GridState) -> GridState {
    state.search.editing = true;
    state.search.cursor = state.search.term.chars().count();
    state
}

/// Close the search bar.
///
/// The term stays active as a filter; closing only releases the keyboard.
pub fn close_search(mut state: GridState) -> GridState {
    state.search.editing = false;
    state
}

/// Insert a character at the cursor. No-op unless the bar is being edited.
pub fn handle_search_char(mut state: GridState, ch: char) -> GridState {
    if !state.search.editing {
        return state;
    }
    let at = state.search.byte_cursor();
    state.search.term.insert(at, ch);
    state.search.cursor += 1;
    state.current_page = 1;
    state
}

/// Delete the character before the cursor. No-op unless the bar is being
/// edited or the cursor is at the start.
pub fn handle_search_backspace(mut state: GridState) -> GridState {
    if !state.search.editing || state.search.cursor == 0 {
        return state;
    }
    state.search.cursor -= 1;
    let at = state.search.byte_cursor();
    state.search.term.remove(at);
    state.current_page = 1;
    state
}

/// Clear the term entirely, keeping the bar open if it was open.
pub fn clear_search(mut state: GridState) -> GridState {
    state.search.term.clear();
    state.search.cursor = 0;
    state.current_page = 1;
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_handler_tests.rs"]
mod tests;
