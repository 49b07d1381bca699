//! Error types for grid construction.
//!
//! The grid is deliberately total at runtime: interaction handlers degrade
//! invalid input to a no-op rather than failing. The only fallible surface
//! is construction-time validation of [`crate::config::GridOptions`], which
//! catches configuration mistakes before a widget ever renders.

use thiserror::Error;

/// Configuration errors reported when validating grid options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The allowed page-size set is empty.
    ///
    /// Page-size cycling and validation both need at least one choice.
    #[error("page size choices must not be empty")]
    NoPageSizeChoices,

    /// A page size of zero appears in the allowed set.
    ///
    /// A zero page size would make `total_pages` undefined.
    #[error("page size choices must be non-zero")]
    ZeroPageSize,

    /// The initial page size is not one of the allowed choices.
    #[error("initial page size {given} is not one of the allowed choices {choices:?}")]
    PageSizeNotAllowed {
        /// The initial page size that was configured.
        given: usize,
        /// The allowed page-size set it was checked against.
        choices: Vec<usize>,
    },
}
