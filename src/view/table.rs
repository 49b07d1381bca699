//! Grid rendering: layout, header, and body.

use crate::config::GridOptions;
use crate::model::{Column, SortDirection};
use crate::pipeline::{derive_frame, GridFrame};
use crate::state::GridState;
use crate::view::{render_pager, GridTheme, SearchBar};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

// Widths are content-driven but kept inside sane bounds so one long cell
// cannot starve the other columns.
const MIN_COLUMN_WIDTH: usize = 3;
const MAX_COLUMN_WIDTH: usize = 40;

/// Render the full grid: search bar (when filtering is enabled), table
/// body, and pager footer.
///
/// Derives the visible frame from the current state on every call and
/// returns it, so the host can feed `total_pages` back into
/// [`crate::state::apply_action`] on the next input event.
pub fn render_grid<'a, R>(
    frame: &mut Frame,
    area: Rect,
    rows: &'a [R],
    columns: &[Column<R>],
    state: &GridState,
    options: &GridOptions,
    theme: &GridTheme,
) -> GridFrame<'a, R> {
    let grid = derive_frame(rows, columns, state, options);

    let (search_area, body_area, footer_area) = if options.filtering {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);
        (Some(chunks[0]), chunks[1], chunks[2])
    } else {
        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
        (None, chunks[0], chunks[1])
    };

    if let Some(search_area) = search_area {
        frame.render_widget(SearchBar::new(&state.search, theme), search_area);
    }

    render_body(frame, body_area, &grid, columns, state, theme);
    render_pager(frame, footer_area, &grid, state.page_size, theme);

    grid
}

fn render_body<R>(
    frame: &mut Frame,
    area: Rect,
    grid: &GridFrame<'_, R>,
    columns: &[Column<R>],
    state: &GridState,
    theme: &GridTheme,
) {
    let header = Row::new(
        columns
            .iter()
            .map(|col| {
                let style = if sorted_on(col.key(), state) {
                    theme.header_sorted
                } else {
                    theme.header
                };
                Cell::from(header_text(col.key(), col.header(), state)).style(style)
            })
            .collect::<Vec<_>>(),
    );

    let body = grid.rows.iter().enumerate().map(|(idx, row)| {
        let style = if idx % 2 == 1 { theme.row_alt } else { theme.row };
        Row::new(
            columns
                .iter()
                .map(|col| Cell::from(col.display(row)))
                .collect::<Vec<_>>(),
        )
        .style(style)
    });

    let widths = column_widths(grid, columns, state);
    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(table, area);
}

fn sorted_on(key: &str, state: &GridState) -> bool {
    matches!(&state.sort, Some(spec) if spec.key == key)
}

// Header label with the sort marker for the active sort column.
fn header_text(key: &str, header: &str, state: &GridState) -> String {
    match &state.sort {
        Some(spec) if spec.key == key => {
            let marker = match spec.direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            };
            format!("{header} {marker}")
        }
        _ => header.to_string(),
    }
}

/// Content-driven column widths over the visible rows.
fn column_widths<R>(
    grid: &GridFrame<'_, R>,
    columns: &[Column<R>],
    state: &GridState,
) -> Vec<Constraint> {
    columns
        .iter()
        .map(|col| {
            let mut width = header_text(col.key(), col.header(), state).width();
            for row in &grid.rows {
                width = width.max(col.display(row).width());
            }
            Constraint::Length(width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH) as u16)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use crate::state::{activate_header, set_search_term};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    struct Person {
        name: &'static str,
        age: i64,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Bob", age: 40 },
            Person { name: "Amy", age: 31 },
            Person { name: "Cid", age: 25 },
        ]
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", "Name", |p: &Person| CellValue::from(p.name)).sortable(),
            Column::new("age", "Age", |p: &Person| CellValue::from(p.age)),
        ]
    }

    fn draw(
        rows: &[Person],
        cols: &[Column<Person>],
        state: &GridState,
        options: &GridOptions,
    ) -> String {
        let theme = GridTheme::default();
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_grid(frame, frame.area(), rows, cols, state, options, &theme);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_headers_and_visible_rows() {
        let options = GridOptions::default();
        let state = GridState::new(&options);
        let text = draw(&people(), &columns(), &state, &options);
        assert!(text.contains("Name"));
        assert!(text.contains("Age"));
        assert!(text.contains("Amy"));
        assert!(text.contains("Bob"));
    }

    #[test]
    fn footer_shows_page_position() {
        let options = GridOptions::default();
        let state = GridState::new(&options);
        let text = draw(&people(), &columns(), &state, &options);
        assert!(text.contains("Page 1/1"));
        assert!(text.contains("3 rows"));
    }

    #[test]
    fn sorted_header_carries_marker() {
        let options = GridOptions::default().with_sorting(true);
        let cols = columns();
        let state = activate_header(GridState::new(&options), &cols, "name", &options);
        let text = draw(&people(), &cols, &state, &options);
        assert!(text.contains("Name ▲"));

        let state = activate_header(state, &cols, "name", &options);
        let text = draw(&people(), &cols, &state, &options);
        assert!(text.contains("Name ▼"));
    }

    #[test]
    fn search_bar_appears_only_with_filtering() {
        let plain = GridOptions::default();
        let state = GridState::new(&plain);
        let text = draw(&people(), &columns(), &state, &plain);
        assert!(!text.contains("press / to search"));

        let filtering = GridOptions::default().with_filtering(true);
        let state = GridState::new(&filtering);
        let text = draw(&people(), &columns(), &state, &filtering);
        assert!(text.contains("press / to search"));
    }

    #[test]
    fn filtered_rows_disappear_from_body() {
        let options = GridOptions::default().with_filtering(true);
        let state = set_search_term(GridState::new(&options), "amy");
        let text = draw(&people(), &columns(), &state, &options);
        assert!(text.contains("Amy"));
        assert!(!text.contains("Bob"));
    }

    #[test]
    fn render_returns_the_derived_frame() {
        let options = GridOptions::default()
            .with_page_size_choices(vec![2])
            .with_page_size(2);
        let state = GridState::new(&options);
        let data = people();
        let cols = columns();
        let theme = GridTheme::default();
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        let mut total_pages = 0;
        terminal
            .draw(|frame| {
                let grid =
                    render_grid(frame, frame.area(), &data, &cols, &state, &options, &theme);
                total_pages = grid.total_pages;
            })
            .unwrap();
        assert_eq!(total_pages, 2);
    }
}
