//! Sort specification driving the sort stage.

use serde::{Deserialize, Serialize};

// ===== SortDirection =====

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Natural accessor-value order.
    Ascending,
    /// Inverted accessor-value order.
    Descending,
}

impl SortDirection {
    /// Flip between ascending and descending.
    ///
    /// Header activation is a two-state toggle: there is no third
    /// "unsorted" state once a column has been sorted.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// ===== SortSpec =====

/// The active sort: a column key plus a direction.
///
/// Absence of a spec (`Option::None` at the state level) means no sort
/// stage runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Key of the column being sorted on.
    pub key: String,
    /// Current direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on the given column key.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on the given column key.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }
}
