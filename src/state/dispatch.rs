//! Action dispatch: routes [`GridAction`]s to the handler functions.

use crate::config::GridOptions;
use crate::model::{Column, GridAction};
use crate::state::{page_handler, search_handler, sort_handler, GridState};
use tracing::trace;

/// Apply one action to the state, returning the new state.
///
/// `total_pages` should come from the most recently derived frame; it only
/// matters for [`GridAction::NextPage`]. Actions gated off by options
/// (search actions with filtering disabled, sort actions with sorting
/// disabled) are no-ops.
pub fn apply_action<R>(
    state: GridState,
    action: GridAction,
    columns: &[Column<R>],
    options: &GridOptions,
    total_pages: usize,
) -> GridState {
    trace!(?action, "applying grid action");
    match action {
        GridAction::OpenSearch if options.filtering => search_handler::open_search(state),
        GridAction::CloseSearch => search_handler::close_search(state),
        GridAction::SearchChar(ch) => search_handler::handle_search_char(state, ch),
        GridAction::SearchBackspace => search_handler::handle_search_backspace(state),
        GridAction::ClearSearch => search_handler::clear_search(state),
        GridAction::NextPage => page_handler::next_page(state, total_pages),
        GridAction::PrevPage => page_handler::prev_page(state),
        GridAction::CyclePageSize => page_handler::cycle_page_size(state, options),
        GridAction::SortColumn(index) => {
            sort_handler::activate_header_index(state, columns, index, options)
        }
        // OpenSearch with filtering disabled falls through here.
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, SortSpec};

    fn columns() -> Vec<Column<&'static str>> {
        vec![Column::new("value", "Value", |s: &&str| CellValue::from(*s)).sortable()]
    }

    fn full_options() -> GridOptions {
        GridOptions::default().with_sorting(true).with_filtering(true)
    }

    #[test]
    fn open_search_requires_filtering() {
        let options = GridOptions::default();
        let state = GridState::new(&options);
        let state = apply_action(state, GridAction::OpenSearch, &columns(), &options, 1);
        assert!(!state.search.editing);
    }

    #[test]
    fn search_chars_flow_through_to_term() {
        let options = full_options();
        let cols = columns();
        let mut state = GridState::new(&options);
        for action in [
            GridAction::OpenSearch,
            GridAction::SearchChar('a'),
            GridAction::SearchChar('b'),
            GridAction::SearchBackspace,
            GridAction::CloseSearch,
        ] {
            state = apply_action(state, action, &cols, &options, 1);
        }
        assert_eq!(state.search_term(), "a");
        assert!(!state.search.editing);
    }

    #[test]
    fn paging_actions_use_total_pages() {
        let options = full_options();
        let cols = columns();
        let state = GridState::new(&options);
        let state = apply_action(state, GridAction::NextPage, &cols, &options, 3);
        assert_eq!(state.current_page, 2);
        let state = apply_action(state, GridAction::PrevPage, &cols, &options, 3);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn sort_action_toggles_named_column() {
        let options = full_options();
        let cols = columns();
        let state = GridState::new(&options);
        let state = apply_action(state, GridAction::SortColumn(0), &cols, &options, 1);
        assert_eq!(state.sort, Some(SortSpec::ascending("value")));
        let state = apply_action(state, GridAction::SortColumn(0), &cols, &options, 1);
        assert_eq!(state.sort, Some(SortSpec::descending("value")));
    }

    #[test]
    fn cycle_page_size_resets_page() {
        let options = full_options();
        let cols = columns();
        let mut state = GridState::new(&options);
        state.current_page = 2;
        let state = apply_action(state, GridAction::CyclePageSize, &cols, &options, 5);
        assert_eq!(state.page_size, 25);
        assert_eq!(state.current_page, 1);
    }
}
