//! Grid styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Style set for the grid's visual parts.
///
/// This is the opaque theme token a host passes through to the rendering
/// surface; the state machine never looks at it. Construct with
/// [`GridTheme::default`] and override fields as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTheme {
    /// Header cells of unsorted columns.
    pub header: Style,
    /// Header cell of the column the grid is sorted on.
    pub header_sorted: Style,
    /// Body rows.
    pub row: Style,
    /// Every other body row, for striping.
    pub row_alt: Style,
    /// Search bar text and border.
    pub search: Style,
    /// The block cursor inside the search bar while editing.
    pub search_cursor: Style,
    /// Pager footer text.
    pub pager: Style,
    /// Pager prev/next hints when the move is available.
    pub pager_active: Style,
    /// Pager prev/next hints at the edges.
    pub pager_disabled: Style,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            header_sorted: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            row: Style::default(),
            row_alt: Style::default().add_modifier(Modifier::DIM),
            search: Style::default().fg(Color::Cyan),
            search_cursor: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            pager: Style::default(),
            pager_active: Style::default().fg(Color::Green),
            pager_disabled: Style::default().add_modifier(Modifier::DIM),
        }
    }
}
