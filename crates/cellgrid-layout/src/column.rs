//! A single column definition.

use cellgrid_core::geometry::clamp_non_negative;

use crate::distribute::is_positive;

/// One column of a [`ColumnSet`](crate::ColumnSet).
///
/// A column is either resizable (positive `resize_weight`, takes a share of the
/// slack) or fixed (weight 0, takes `fixed_width`). Padding columns are fixed
/// columns that never receive an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    resize_weight: f32,
    fixed_width: f32,
    is_padding: bool,
    width: f32,
    location: f32,
}

impl Column {
    pub(crate) fn new(resize_weight: f32, fixed_width: f32, is_padding: bool) -> Self {
        Self {
            resize_weight: clamp_non_negative(resize_weight),
            fixed_width: clamp_non_negative(fixed_width),
            is_padding,
            width: 0.0,
            location: 0.0,
        }
    }

    /// Weight used when distributing slack. `0.0` for fixed columns.
    #[must_use]
    pub fn resize_weight(&self) -> f32 {
        self.resize_weight
    }

    /// Declared width for fixed and padding columns.
    #[must_use]
    pub fn fixed_width(&self) -> f32 {
        self.fixed_width
    }

    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.is_padding
    }

    /// Whether this column takes part in slack distribution.
    #[must_use]
    pub fn is_resizable(&self) -> bool {
        is_positive(self.resize_weight)
    }

    /// Width computed by the last sizing pass.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Left offset computed by the last sizing pass.
    #[must_use]
    pub fn location(&self) -> f32 {
        self.location
    }

    pub(crate) fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub(crate) fn set_location(&mut self, location: f32) {
        self.location = location;
    }
}
