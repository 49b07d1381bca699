//! Search bar widget.

use crate::state::SearchInput;
use crate::view::GridTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the search term, with a block cursor while editing.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    theme: &'a GridTheme,
}

impl<'a> SearchBar<'a> {
    /// Create a search bar over the given input state.
    pub fn new(input: &'a SearchInput, theme: &'a GridTheme) -> Self {
        Self { input, theme }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if self.input.editing {
            // Split the term around the cursor so the cursor cell can be
            // styled as a block.
            let before: String = self.input.term.chars().take(self.input.cursor).collect();
            let mut rest = self.input.term.chars().skip(self.input.cursor);
            let cursor_char = rest.next().map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
            let after: String = rest.collect();
            Line::from(vec![
                Span::raw(before),
                Span::styled(cursor_char, self.theme.search_cursor),
                Span::raw(after),
            ])
        } else if self.input.term.is_empty() {
            Line::from(Span::styled("press / to search", self.theme.pager_disabled))
        } else {
            Line::from(Span::raw(self.input.term.clone()))
        };

        let title = if self.input.editing {
            "Search"
        } else if self.input.term.is_empty() {
            "Search"
        } else {
            "Search (filtering)"
        };

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(if self.input.editing {
                    self.theme.search
                } else {
                    Style::default()
                }),
        );
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn draw(input: &SearchInput) -> Terminal<TestBackend> {
        let theme = GridTheme::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(SearchBar::new(input, &theme), frame.area());
            })
            .unwrap();
        terminal
    }

    #[test]
    fn editing_bar_shows_term() {
        let input = SearchInput {
            term: "amy".to_string(),
            cursor: 3,
            editing: true,
        };
        let text = buffer_text(&draw(&input));
        assert!(text.contains("amy"));
        assert!(text.contains("Search"));
    }

    #[test]
    fn idle_empty_bar_shows_hint() {
        let input = SearchInput::default();
        let text = buffer_text(&draw(&input));
        assert!(text.contains("press / to search"));
    }

    #[test]
    fn idle_filtering_bar_marks_active_filter() {
        let input = SearchInput {
            term: "bob".to_string(),
            cursor: 3,
            editing: false,
        };
        let text = buffer_text(&draw(&input));
        assert!(text.contains("Search (filtering)"));
        assert!(text.contains("bob"));
    }
}
