#![forbid(unsafe_code)]

//! Column-set grid layout.
//!
//! This crate positions elements into rows and columns:
//!
//! - [`ColumnSet`] - an ordered list of fixed, padding and weighted columns,
//!   shared by any number of rows
//! - [`GridLayout`] - owns column sets, rows and elements; sizes columns from
//!   the container width and rows from their content, then writes frames
//! - [`RowBuilder`] - places elements into the currently open row
//! - [`GridView`] - what the layout needs from a managed element
//!
//! # Sizing
//!
//! Columns: fixed and padding widths are subtracted from the container width
//! and the slack is split across weighted columns in proportion to their
//! weights. The last weighted column takes the rounding remainder, so the
//! column widths add up to the container width. If fixed widths alone exceed
//! it, weighted columns collapse to zero.
//!
//! Rows: padding rows and rows with a fixed height keep it; other rows are as
//! tall as their tallest element at its column width.
//!
//! # Example
//!
//! ```
//! use cellgrid_layout::{GridLayout, GridView, Rect, Size};
//!
//! struct Label {
//!     height: f32,
//!     frame: Rect,
//! }
//!
//! impl GridView for Label {
//!     fn preferred_size(&self, width: f32) -> Size {
//!         Size::new(width, self.height)
//!     }
//!
//!     fn set_frame(&mut self, frame: Rect) {
//!         self.frame = frame;
//!     }
//! }
//!
//! let mut grid = GridLayout::new();
//! grid.add_column_set(0)
//!     .unwrap()
//!     .add_padding_column(20.0)
//!     .add_column(1.0)
//!     .add_column(1.0);
//!
//! let mut row = grid.start_row(0.0, 0).unwrap();
//! let name = row.add_view(Label { height: 18.0, frame: Rect::default() }).unwrap();
//! let value = row.add_view(Label { height: 24.0, frame: Rect::default() }).unwrap();
//!
//! grid.layout(Rect::from_size(220.0, 100.0));
//! assert_eq!(grid.view(name).frame, Rect::new(20.0, 0.0, 100.0, 24.0));
//! assert_eq!(grid.view(value).frame, Rect::new(120.0, 0.0, 100.0, 24.0));
//! ```

pub mod column;
pub mod column_set;
mod distribute;
pub mod error;
pub mod grid;
pub mod options;
pub mod row;
pub mod snapshot;
pub mod view_state;

pub use cellgrid_core::geometry::{Rect, Size};
pub use column::Column;
pub use column_set::{ColumnSet, ColumnSetId};
pub use error::GridError;
pub use grid::{GridLayout, RowBuilder};
pub use options::{AUTO_COLUMN_SET_ID_BASE, LayoutOptions};
pub use row::Row;
pub use snapshot::{ColumnSetSnapshot, GridSnapshot, RowSnapshot, ViewSnapshot};
pub use view_state::{GridView, ViewId, ViewState};
