//! Column descriptors.
//!
//! A `Column<R>` couples a display header with a typed accessor closure
//! reading a `CellValue` out of a row. This replaces dynamic field lookup:
//! the caller decides how a field is extracted, the grid only sees cell
//! values. Columns are built once and treated as immutable for the life of
//! the widget.

use crate::model::CellValue;
use std::fmt;

/// Accessor closure reading a cell value out of a row.
pub type Accessor<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;

/// Optional display override for a column.
pub type CellRenderer<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

// ===== Column =====

/// Descriptor for one grid column.
///
/// `key` identifies the column for sort specs, `header` is the display
/// label, and `accessor` reads the cell value used for sorting, filtering,
/// and (absent a render override) display.
pub struct Column<R> {
    key: String,
    header: String,
    accessor: Accessor<R>,
    render: Option<CellRenderer<R>>,
    sortable: bool,
}

impl<R> Column<R> {
    /// Create a column with the given key, header, and accessor.
    ///
    /// Columns are not sortable by default; chain [`Column::sortable`] to
    /// opt in.
    pub fn new(
        key: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            accessor: Box::new(accessor),
            render: None,
            sortable: false,
        }
    }

    /// Mark this column as sortable.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Install a display override.
    ///
    /// The override affects presentation only: sorting and filtering keep
    /// using the accessor value.
    #[must_use]
    pub fn with_render(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Column key, as referenced by sort specs.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display header label.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Whether header activation may sort on this column.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Read this column's cell value from a row.
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// Display text for this column's cell in a row.
    ///
    /// Uses the render override when present, otherwise the accessor
    /// value's text form.
    pub fn display(&self, row: &R) -> String {
        match &self.render {
            Some(render) => render(row),
            None => self.value(row).to_string(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Look up a column by key.
pub fn column_by_key<'a, R>(columns: &'a [Column<R>], key: &str) -> Option<&'a Column<R>> {
    columns.iter().find(|c| c.key() == key)
}
