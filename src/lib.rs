//! ratagrid
//!
//! A sortable, filterable, paginated data grid widget for ratatui,
//! following a Pure Core / Impure Shell architecture: the state machine
//! and the Sort → Filter → Paginate derivation pipeline are pure functions
//! over borrowed rows, and the rendering shell draws the derived frame
//! into a ratatui `Frame`.
//!
//! The grid is generic over the row type. Each [`Column`] carries an
//! accessor closure reading a [`CellValue`] out of a row; sorting,
//! filtering, and default display all go through that accessor. Rows are
//! never cloned or mutated.
//!
//! # Example
//!
//! ```
//! use ratagrid::state::activate_header;
//! use ratagrid::{derive_frame, CellValue, Column, GridOptions, GridState};
//!
//! struct Person {
//!     name: &'static str,
//! }
//!
//! let people = vec![
//!     Person { name: "Bob" },
//!     Person { name: "Amy" },
//!     Person { name: "Cid" },
//! ];
//! let columns = vec![
//!     Column::new("name", "Name", |p: &Person| CellValue::from(p.name)).sortable(),
//! ];
//!
//! let options = GridOptions::default().with_sorting(true);
//! options.validate().unwrap();
//!
//! // Click the Name header once: ascending sort.
//! let state = activate_header(GridState::new(&options), &columns, "name", &options);
//! let frame = derive_frame(&people, &columns, &state, &options);
//! let names: Vec<_> = frame.rows.iter().map(|p| p.name).collect();
//! assert_eq!(names, vec!["Amy", "Bob", "Cid"]);
//! ```
//!
//! In a TUI host, feed key events through
//! [`KeyBindings::resolve`](config::KeyBindings::resolve) and
//! [`state::apply_action`], then call [`view::render_grid`] on every draw.

pub mod config;
pub mod model;
pub mod pipeline;
pub mod state;
pub mod view;

pub use config::{GridOptions, KeyBindings};
pub use model::{json_column, CellValue, Column, GridAction, GridError, SortDirection, SortSpec};
pub use pipeline::{derive_frame, GridFrame};
pub use state::GridState;
pub use view::{render_grid, GridTheme};
