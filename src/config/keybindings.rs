//! Keyboard bindings for the grid.
//!
//! Maps crossterm key events to [`GridAction`]s. While the search bar is
//! being edited, printable characters and editing keys are routed to the
//! search term instead of the binding table, so a bound key like `n` can
//! still be typed into a query.

use crate::model::GridAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to grid actions.
///
/// Provides defaults via [`Default`]; hosts can override individual keys
/// with [`KeyBindings::bind`] or start empty with [`KeyBindings::empty`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, GridAction>,
}

impl KeyBindings {
    /// An empty binding table.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a key event to an action, replacing any existing binding.
    pub fn bind(&mut self, key: KeyEvent, action: GridAction) {
        self.bindings.insert(key, action);
    }

    /// Look up the bound action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<GridAction> {
        self.bindings.get(&key).copied()
    }

    /// Resolve a key event to an action, honoring search-edit mode.
    ///
    /// When `editing` is true the search bar owns the keyboard: printable
    /// characters become [`GridAction::SearchChar`], backspace deletes,
    /// Ctrl+U clears, and Esc/Enter close the bar. Otherwise the binding
    /// table decides.
    pub fn resolve(&self, key: KeyEvent, editing: bool) -> Option<GridAction> {
        if editing {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => Some(GridAction::CloseSearch),
                KeyCode::Backspace => Some(GridAction::SearchBackspace),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(GridAction::ClearSearch)
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(GridAction::SearchChar(c))
                }
                _ => None,
            };
        }
        self.get(key)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut table = Self::empty();

        // Search
        table.bind(
            KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE),
            GridAction::OpenSearch,
        );

        // Page navigation
        table.bind(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            GridAction::NextPage,
        );
        table.bind(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            GridAction::PrevPage,
        );
        table.bind(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            GridAction::NextPage,
        );
        table.bind(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            GridAction::PrevPage,
        );

        // Page size
        table.bind(
            KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE),
            GridAction::CyclePageSize,
        );

        // Column header activation (1-9 -> columns 0-8)
        for (offset, ch) in ('1'..='9').enumerate() {
            table.bind(
                KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
                GridAction::SortColumn(offset),
            );
        }

        table
    }
}
