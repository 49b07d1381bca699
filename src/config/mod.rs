//! Grid configuration.

pub mod keybindings;

pub use keybindings::KeyBindings;

use crate::model::GridError;
use serde::{Deserialize, Serialize};

/// Page size used when the host does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default allowed page sizes for the page-size selector.
pub const DEFAULT_PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 25, 50];

// ===== GridOptions =====

/// Construction-time grid configuration.
///
/// Sorting and filtering are opt-in; a grid with both disabled is a plain
/// paginated table. Options are immutable for the life of a widget; the
/// mutable interaction state lives in [`crate::state::GridState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridOptions {
    /// Initial page size. Must be one of `page_size_choices`.
    pub page_size: usize,
    /// Allowed page sizes for the selector, in cycling order.
    pub page_size_choices: Vec<usize>,
    /// Whether column-header sorting is enabled.
    pub sorting: bool,
    /// Whether the search filter is enabled.
    pub filtering: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_choices: DEFAULT_PAGE_SIZE_CHOICES.to_vec(),
            sorting: false,
            filtering: false,
        }
    }
}

impl GridOptions {
    /// Set the initial page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Replace the allowed page-size set.
    #[must_use]
    pub fn with_page_size_choices(mut self, choices: impl Into<Vec<usize>>) -> Self {
        self.page_size_choices = choices.into();
        self
    }

    /// Enable or disable column-header sorting.
    #[must_use]
    pub fn with_sorting(mut self, sorting: bool) -> Self {
        self.sorting = sorting;
        self
    }

    /// Enable or disable the search filter.
    #[must_use]
    pub fn with_filtering(mut self, filtering: bool) -> Self {
        self.filtering = filtering;
        self
    }

    /// Validate the configuration.
    ///
    /// Rejects an empty or zero-containing page-size set, and an initial
    /// page size outside the allowed choices. Interaction handlers assume
    /// validated options and degrade bad runtime input to no-ops instead.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.page_size_choices.is_empty() {
            return Err(GridError::NoPageSizeChoices);
        }
        if self.page_size_choices.contains(&0) {
            return Err(GridError::ZeroPageSize);
        }
        if !self.page_size_choices.contains(&self.page_size) {
            return Err(GridError::PageSizeNotAllowed {
                given: self.page_size,
                choices: self.page_size_choices.clone(),
            });
        }
        Ok(())
    }
}
