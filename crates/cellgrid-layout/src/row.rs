//! Row definitions.

use crate::column_set::ColumnSetId;
use crate::view_state::ViewId;

/// One row of the grid.
///
/// A row is either bound to a [`ColumnSet`](crate::ColumnSet) and holds
/// elements, or is a padding row: a fixed-height vertical spacer with no
/// column set and no content.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    resize_weight: f32,
    fixed_height: f32,
    column_set: Option<ColumnSetId>,
    /// One slot per column the row cursor has passed; `None` marks a skipped
    /// or padding column.
    cells: Vec<Option<ViewId>>,
    height: f32,
    location: f32,
}

impl Row {
    pub(crate) fn new(resize_weight: f32, column_set: ColumnSetId) -> Self {
        Self {
            resize_weight: resize_weight.max(0.0),
            fixed_height: 0.0,
            column_set: Some(column_set),
            cells: Vec::new(),
            height: 0.0,
            location: 0.0,
        }
    }

    pub(crate) fn padding(height: f32) -> Self {
        Self {
            resize_weight: 0.0,
            fixed_height: height.max(0.0),
            column_set: None,
            cells: Vec::new(),
            height: 0.0,
            location: 0.0,
        }
    }

    /// Weight used when the layout distributes vertical slack.
    #[must_use]
    pub fn resize_weight(&self) -> f32 {
        self.resize_weight
    }

    /// Declared height; `0.0` means the height comes from content.
    #[must_use]
    pub fn fixed_height(&self) -> f32 {
        self.fixed_height
    }

    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.column_set.is_none()
    }

    /// Column set this row lays its elements out on. `None` for padding rows.
    #[must_use]
    pub fn column_set(&self) -> Option<ColumnSetId> {
        self.column_set
    }

    /// Per-column slots in column order, including skip markers.
    #[must_use]
    pub fn cells(&self) -> &[Option<ViewId>] {
        &self.cells
    }

    /// Elements placed in this row, in column order.
    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Height resolved by the last sizing pass.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Top offset resolved by the last sizing pass.
    #[must_use]
    pub fn location(&self) -> f32 {
        self.location
    }

    pub(crate) fn has_fixed_height(&self) -> bool {
        self.is_padding() || self.fixed_height > 0.0
    }

    pub(crate) fn set_fixed_height(&mut self, height: f32) {
        self.fixed_height = height.max(0.0);
    }

    pub(crate) fn push_cell(&mut self, cell: Option<ViewId>) {
        self.cells.push(cell);
    }

    pub(crate) fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub(crate) fn set_location(&mut self, location: f32) {
        self.location = location;
    }
}
