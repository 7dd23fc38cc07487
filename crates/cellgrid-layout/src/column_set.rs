//! Column sets: reusable column templates shared by rows.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cellgrid_core::geometry::clamp_non_negative;

use crate::column::Column;
use crate::distribute::distribute_slack;

/// Identifier of a [`ColumnSet`] within one [`GridLayout`](crate::GridLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ColumnSetId(u32);

impl ColumnSetId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ColumnSetId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// An ordered sequence of columns.
///
/// Column order is left-to-right order and never changes once a column is
/// appended. Any number of rows may share one set; the layout sizes each
/// referenced set once per pass.
#[derive(Debug, Clone)]
pub struct ColumnSet {
    id: ColumnSetId,
    columns: Vec<Column>,
    /// Width passed to the last `calculate_size`, `None` until first sized.
    sized_for: Option<f32>,
    calculations: u64,
    /// Pass number of the last layout pass that sized this set.
    sized_in_pass: Option<u64>,
}

impl ColumnSet {
    pub fn new(id: ColumnSetId) -> Self {
        Self {
            id,
            columns: Vec::new(),
            sized_for: None,
            calculations: 0,
            sized_in_pass: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ColumnSetId {
        self.id
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Append a fixed-width spacer column. Elements are never placed in it.
    pub fn add_padding_column(&mut self, fixed_width: f32) -> &mut Self {
        self.columns.push(Column::new(0.0, fixed_width, true));
        self
    }

    /// Append a column that takes `resize_weight / sum(weights)` of the slack.
    ///
    /// A weight of `0.0` yields a zero-width fixed column.
    pub fn add_column(&mut self, resize_weight: f32) -> &mut Self {
        self.columns.push(Column::new(resize_weight, 0.0, false));
        self
    }

    /// Append a fixed-width column that can hold an element.
    pub fn add_fixed_column(&mut self, width: f32) -> &mut Self {
        self.columns.push(Column::new(0.0, width, false));
        self
    }

    /// Get a column by index.
    ///
    /// # Panics
    ///
    /// Panics if `column_index` is out of range.
    #[must_use]
    pub fn column(&self, column_index: usize) -> &Column {
        debug_assert!(
            column_index < self.num_columns(),
            "column {column_index} out of range for column set {} ({} columns)",
            self.id.0,
            self.num_columns()
        );
        &self.columns[column_index]
    }

    /// Size every column for a total of `width`.
    ///
    /// Fixed and padding columns keep their declared width. The rest of
    /// `width` is split across resizable columns by weight in whole points,
    /// with the last resizable column taking the remainder so the widths add
    /// up to `width` exactly. If the fixed widths
    /// alone exceed `width`, resizable columns get `0.0` and the set
    /// overflows instead of going negative.
    pub fn calculate_size(&mut self, width: f32) {
        let width = clamp_non_negative(width);
        let remaining = self.calculate_remaining_width(width);
        self.distribute_remaining_width(remaining);
        if remaining > 0.0 {
            self.settle_last_resizable(width);
        }
        self.sized_for = Some(width);
        self.calculations += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            column_set = self.id.0,
            width,
            slack = remaining,
            "column set sized"
        );
    }

    /// Recompute each column's left offset as the running sum of prior widths.
    pub fn reset_column_x_coordinates(&mut self) {
        let mut x = 0.0;
        for column in &mut self.columns {
            column.set_location(x);
            x += column.width();
        }
    }

    /// Width of a column after sizing.
    ///
    /// # Panics
    ///
    /// Panics if `column_index` is out of range.
    #[must_use]
    pub fn column_width(&self, column_index: usize) -> f32 {
        debug_assert!(
            self.sized_for.is_some(),
            "column set {} queried before calculate_size",
            self.id.0
        );
        self.column(column_index).width()
    }

    /// Left offset of a column after sizing.
    ///
    /// # Panics
    ///
    /// Panics if `column_index` is out of range.
    #[must_use]
    pub fn column_location(&self, column_index: usize) -> f32 {
        debug_assert!(
            self.sized_for.is_some(),
            "column set {} queried before calculate_size",
            self.id.0
        );
        self.column(column_index).location()
    }

    /// Total width of all columns as of the last sizing.
    #[must_use]
    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(Column::width).sum()
    }

    /// Width passed to the last [`calculate_size`](Self::calculate_size).
    #[must_use]
    pub fn sized_for(&self) -> Option<f32> {
        self.sized_for
    }

    /// How many times [`calculate_size`](Self::calculate_size) has run.
    #[must_use]
    pub fn calculation_count(&self) -> u64 {
        self.calculations
    }

    /// Whether the layout already sized this set during `pass`.
    pub(crate) fn is_sized_in_pass(&self, pass: u64) -> bool {
        self.sized_in_pass == Some(pass)
    }

    pub(crate) fn mark_sized_in_pass(&mut self, pass: u64) {
        self.sized_in_pass = Some(pass);
    }

    /// First index at or after `from` that is not a padding column.
    pub(crate) fn next_non_padding(&self, from: usize) -> usize {
        let mut column = from;
        while column < self.columns.len() && self.columns[column].is_padding() {
            column += 1;
        }
        column
    }

    fn calculate_remaining_width(&mut self, width: f32) -> f32 {
        let mut fixed = 0.0;
        for column in self.columns.iter_mut().filter(|c| !c.is_resizable()) {
            column.set_width(column.fixed_width());
            fixed += column.fixed_width();
        }

        if fixed > width {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                column_set = self.id.0,
                width,
                fixed,
                "fixed columns exceed available width; resizable columns collapse to zero"
            );
            return 0.0;
        }
        width - fixed
    }

    fn distribute_remaining_width(&mut self, remaining: f32) {
        let weights: Vec<f32> = self.columns.iter().map(Column::resize_weight).collect();
        let shares = distribute_slack(&weights, remaining);
        for (column, share) in self.columns.iter_mut().zip(shares) {
            if column.is_resizable() {
                column.set_width(share);
            }
        }
    }

    /// Give the last resizable column `width` minus every other column,
    /// summed left to right like [`total_width`](Self::total_width).
    fn settle_last_resizable(&mut self, width: f32) {
        let Some(last) = self.columns.iter().rposition(Column::is_resizable) else {
            return;
        };
        let others: f32 = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != last)
            .map(|(_, column)| column.width())
            .sum();
        let mut settled = clamp_non_negative(width - others);
        self.columns[last].set_width(settled);

        // One correction when the in-order sum rounds differently.
        let drift = width - self.total_width();
        if drift != 0.0 {
            settled = clamp_non_negative(settled + drift);
            self.columns[last].set_width(settled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(set: &ColumnSet) -> Vec<f32> {
        set.columns().iter().map(Column::width).collect()
    }

    fn locations(set: &ColumnSet) -> Vec<f32> {
        set.columns().iter().map(Column::location).collect()
    }

    #[test]
    fn padding_then_two_equal_columns() {
        let mut set = ColumnSet::new(ColumnSetId::new(0));
        set.add_padding_column(20.0).add_column(1.0).add_column(1.0);
        set.calculate_size(220.0);
        set.reset_column_x_coordinates();

        assert_eq!(widths(&set), vec![20.0, 100.0, 100.0]);
        assert_eq!(locations(&set), vec![0.0, 20.0, 120.0]);
        assert_eq!(set.column_width(2), 100.0);
        assert_eq!(set.column_location(2), 120.0);
    }

    #[test]
    fn weights_are_relative() {
        let mut set = ColumnSet::new(ColumnSetId::new(1));
        set.add_column(1.0).add_column(3.0);
        set.calculate_size(400.0);
        assert_eq!(widths(&set), vec![100.0, 300.0]);
    }

    #[test]
    fn zero_weight_column_is_zero_width() {
        let mut set = ColumnSet::new(ColumnSetId::new(2));
        set.add_column(0.0).add_column(1.0);
        set.calculate_size(50.0);
        assert_eq!(widths(&set), vec![0.0, 50.0]);
    }

    #[test]
    fn fixed_column_keeps_its_width() {
        let mut set = ColumnSet::new(ColumnSetId::new(3));
        set.add_fixed_column(30.0).add_column(1.0);
        set.calculate_size(100.0);
        assert_eq!(widths(&set), vec![30.0, 70.0]);
    }

    #[test]
    fn sum_matches_width_with_thirds() {
        let mut set = ColumnSet::new(ColumnSetId::new(4));
        set.add_padding_column(7.0)
            .add_column(1.0)
            .add_column(1.0)
            .add_column(1.0);
        set.calculate_size(107.0);
        assert_eq!(widths(&set), vec![7.0, 33.0, 33.0, 34.0]);
        assert_eq!(set.total_width(), 107.0);
    }

    #[test]
    fn whole_point_widths_sum_exactly() {
        for padding in [0.0, 3.0, 7.0, 13.0, 20.0] {
            for count in 2..=7usize {
                let mut set = ColumnSet::new(ColumnSetId::new(10));
                set.add_padding_column(padding);
                for i in 0..count {
                    set.add_column((i % 3 + 1) as f32);
                }
                for width in 20..420u16 {
                    let width = f32::from(width);
                    set.calculate_size(width);
                    assert_eq!(
                        set.total_width(),
                        width,
                        "padding {padding}, {count} columns"
                    );
                }
            }
        }
    }

    #[test]
    fn last_resizable_settles_before_trailing_fixed_columns() {
        let mut set = ColumnSet::new(ColumnSetId::new(11));
        set.add_padding_column(3.0)
            .add_column(1.0)
            .add_column(2.0)
            .add_fixed_column(13.0);
        set.calculate_size(61.0);
        assert_eq!(widths(&set), vec![3.0, 15.0, 30.0, 13.0]);
        assert_eq!(set.total_width(), 61.0);
    }

    #[test]
    fn squeezed_set_collapses_resizable_columns() {
        let mut set = ColumnSet::new(ColumnSetId::new(5));
        set.add_padding_column(40.0)
            .add_column(1.0)
            .add_padding_column(40.0);
        set.calculate_size(50.0);
        assert_eq!(widths(&set), vec![40.0, 0.0, 40.0]);
        assert!(widths(&set).iter().all(|w| *w >= 0.0));
    }

    #[test]
    fn negative_width_is_treated_as_zero() {
        let mut set = ColumnSet::new(ColumnSetId::new(6));
        set.add_column(1.0);
        set.calculate_size(-10.0);
        assert_eq!(set.sized_for(), Some(0.0));
        assert_eq!(widths(&set), vec![0.0]);
    }

    #[test]
    fn resizing_overwrites_previous_widths() {
        let mut set = ColumnSet::new(ColumnSetId::new(7));
        set.add_column(1.0).add_column(1.0);
        set.calculate_size(100.0);
        set.calculate_size(40.0);
        set.reset_column_x_coordinates();
        assert_eq!(widths(&set), vec![20.0, 20.0]);
        assert_eq!(locations(&set), vec![0.0, 20.0]);
        assert_eq!(set.calculation_count(), 2);
    }

    #[test]
    fn pass_marker_tracks_the_last_pass() {
        let mut set = ColumnSet::new(ColumnSetId::new(12));
        assert!(!set.is_sized_in_pass(1));
        set.mark_sized_in_pass(1);
        assert!(set.is_sized_in_pass(1));
        assert!(!set.is_sized_in_pass(2));
    }

    #[test]
    fn next_non_padding_skips_spacers() {
        let mut set = ColumnSet::new(ColumnSetId::new(8));
        set.add_padding_column(5.0)
            .add_padding_column(5.0)
            .add_column(1.0)
            .add_padding_column(5.0);
        assert_eq!(set.next_non_padding(0), 2);
        assert_eq!(set.next_non_padding(2), 2);
        assert_eq!(set.next_non_padding(3), 4);
    }

    #[test]
    #[should_panic]
    fn column_index_out_of_range_panics() {
        let mut set = ColumnSet::new(ColumnSetId::new(9));
        set.add_column(1.0);
        set.calculate_size(10.0);
        let _ = set.column_width(1);
    }
}
