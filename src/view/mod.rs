//! Grid rendering (impure shell).
//!
//! The presentation surface over the pure core: draws the search bar,
//! table body, and pager footer into a ratatui frame. Nothing here mutates
//! state; hosts route input through [`crate::state::apply_action`] and
//! redraw.

mod pager;
mod search_bar;
mod styles;
mod table;

pub use pager::{pager_line, render_pager};
pub use search_bar::SearchBar;
pub use styles::GridTheme;
pub use table::render_grid;
