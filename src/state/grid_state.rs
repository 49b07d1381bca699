//! Grid interaction state.
//!
//! One `GridState` per widget instance, created at mount and discarded at
//! unmount. It is mutated only through the handler functions in this
//! module's siblings; the derivation pipeline and the view read it.

use crate::config::GridOptions;
use crate::model::SortSpec;

// ===== SearchInput =====

/// The search term plus its editing cursor.
///
/// The term is always the active filter input, whether or not the bar is
/// being edited; `editing` only controls keyboard routing and the cursor
/// display. The cursor is a char index into the term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchInput {
    /// Current search term. Empty means no filter.
    pub term: String,
    /// Cursor position as a char index, `0..=term.chars().count()`.
    pub cursor: usize,
    /// Whether the search bar currently owns keyboard input.
    pub editing: bool,
}

impl SearchInput {
    /// Byte offset of the cursor into the term.
    pub(crate) fn byte_cursor(&self) -> usize {
        self.term
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.term.len())
    }
}

// ===== GridState =====

/// Presentation state for one grid instance.
///
/// Holds the current page, page size, search input, and the optional sort
/// spec. The derived row slice is recomputed from this state by
/// [`crate::pipeline::derive_frame`]; nothing here is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    /// Current page, 1-based. The pipeline clamps it to the valid range.
    pub current_page: usize,
    /// Rows per page. Always one of the configured choices.
    pub page_size: usize,
    /// Search term and editing cursor.
    pub search: SearchInput,
    /// Active sort, or `None` when unsorted.
    pub sort: Option<SortSpec>,
}

impl GridState {
    /// Initial state for the given options: page 1, the configured page
    /// size, no search, no sort.
    pub fn new(options: &GridOptions) -> Self {
        Self {
            current_page: 1,
            page_size: options.page_size,
            search: SearchInput::default(),
            sort: None,
        }
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        &self.search.term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_on_page_one_unsorted() {
        let state = GridState::new(&GridOptions::default());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, 10);
        assert_eq!(state.search_term(), "");
        assert!(!state.search.editing);
        assert!(state.sort.is_none());
    }

    #[test]
    fn page_size_comes_from_options() {
        let options = GridOptions::default().with_page_size(25);
        assert_eq!(GridState::new(&options).page_size, 25);
    }

    #[test]
    fn byte_cursor_handles_multibyte_terms() {
        let input = SearchInput {
            term: "héllo".to_string(),
            cursor: 2,
            editing: true,
        };
        // 'h' is 1 byte, 'é' is 2 bytes.
        assert_eq!(input.byte_cursor(), 3);
    }

    #[test]
    fn byte_cursor_at_end_is_term_length() {
        let input = SearchInput {
            term: "abc".to_string(),
            cursor: 3,
            editing: true,
        };
        assert_eq!(input.byte_cursor(), 3);
    }
}
