//! Pager footer widget.

use crate::pipeline::GridFrame;
use crate::view::GridTheme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the one-line pager footer for a derived frame.
///
/// Shows the page position, filtered row count, and page size, with
/// prev/next hints that dim when the move is unavailable.
pub fn pager_line<R>(grid: &GridFrame<'_, R>, page_size: usize, theme: &GridTheme) -> Line<'static> {
    let prev_style = if grid.has_prev() {
        theme.pager_active
    } else {
        theme.pager_disabled
    };
    let next_style = if grid.has_next() {
        theme.pager_active
    } else {
        theme.pager_disabled
    };

    Line::from(vec![
        Span::styled("◀ Prev", prev_style),
        Span::styled(
            format!(
                "  Page {}/{} · {} rows · {}/page  ",
                grid.page, grid.total_pages, grid.filtered_count, page_size
            ),
            theme.pager,
        ),
        Span::styled("Next ▶", next_style),
    ])
}

/// Render the pager footer into the given area.
pub fn render_pager<R>(
    frame: &mut Frame,
    area: Rect,
    grid: &GridFrame<'_, R>,
    page_size: usize,
    theme: &GridTheme,
) {
    frame.render_widget(Paragraph::new(pager_line(grid, page_size, theme)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_at(page: usize, total_pages: usize) -> GridFrame<'static, u32> {
        GridFrame {
            rows: vec![],
            page,
            total_pages,
            filtered_count: 42,
            total_count: 50,
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn pager_shows_position_and_counts() {
        let theme = GridTheme::default();
        let line = pager_line(&frame_at(2, 3), 10, &theme);
        let text = line_text(&line);
        assert!(text.contains("Page 2/3"));
        assert!(text.contains("42 rows"));
        assert!(text.contains("10/page"));
    }

    #[test]
    fn prev_dims_on_first_page() {
        let theme = GridTheme::default();
        let line = pager_line(&frame_at(1, 3), 10, &theme);
        assert_eq!(line.spans[0].style, theme.pager_disabled);
        assert_eq!(line.spans[2].style, theme.pager_active);
    }

    #[test]
    fn next_dims_on_last_page() {
        let theme = GridTheme::default();
        let line = pager_line(&frame_at(3, 3), 10, &theme);
        assert_eq!(line.spans[0].style, theme.pager_active);
        assert_eq!(line.spans[2].style, theme.pager_disabled);
    }

    #[test]
    fn single_page_dims_both_hints() {
        let theme = GridTheme::default();
        let line = pager_line(&frame_at(1, 1), 10, &theme);
        assert_eq!(line.spans[0].style, theme.pager_disabled);
        assert_eq!(line.spans[2].style, theme.pager_disabled);
    }
}
