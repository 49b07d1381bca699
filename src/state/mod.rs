//! Grid state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.
//! Handlers take the state by value and return the successor state; the
//! only entry points that mutate anything are the ones a host calls.

pub mod dispatch;
pub mod grid_state;
pub mod page_handler;
pub mod search_handler;
pub mod sort_handler;

// Re-export for convenience
pub use dispatch::apply_action;
pub use grid_state::{GridState, SearchInput};
pub use page_handler::{cycle_page_size, next_page, prev_page, set_page_size};
pub use search_handler::{
    clear_search, close_search, handle_search_backspace, handle_search_char, open_search,
    set_search_term,
};
pub use sort_handler::{activate_header, activate_header_index};
