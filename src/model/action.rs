//! Domain-level grid actions independent of key bindings.

/// User intents the grid state machine reacts to.
///
/// These represent intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `GridAction` is handled by
/// [`crate::config::KeyBindings`]; hosts with their own input layer can
/// feed actions directly to [`crate::state::apply_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAction {
    // Search
    /// Open the search bar and start editing the term. Default: /
    OpenSearch,
    /// Close the search bar, keeping the current term active. Default: Esc/Enter
    CloseSearch,
    /// Insert a character into the search term at the cursor.
    SearchChar(char),
    /// Delete the character before the search cursor.
    SearchBackspace,
    /// Clear the search term entirely. Default: Ctrl+u while editing
    ClearSearch,

    // Pagination
    /// Advance one page, stopping at the last page. Default: n/→
    NextPage,
    /// Go back one page, stopping at page 1. Default: p/←
    PrevPage,
    /// Step to the next allowed page size, wrapping around. Default: +
    CyclePageSize,

    // Sorting
    /// Activate the header of the column at this 0-based index. Default: 1-9
    SortColumn(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_column_carries_its_index() {
        match GridAction::SortColumn(2) {
            GridAction::SortColumn(idx) => assert_eq!(idx, 2),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
