//! The grid orchestrator: column sets, rows and placed elements.
//!
//! Building is forward-only. Register column sets, then open rows one at a
//! time through [`RowBuilder`] and place elements left to right. Sizing runs
//! in two passes (columns from width, rows from content height) and
//! [`GridLayout::layout`] writes the resulting frames back to the elements.

use std::collections::HashMap;

use cellgrid_core::geometry::Rect;

use crate::column_set::{ColumnSet, ColumnSetId};
use crate::distribute::{distribute_slack, is_positive};
use crate::error::GridError;
use crate::options::LayoutOptions;
use crate::row::Row;
use crate::view_state::{GridView, ViewId, ViewState};

/// A grid of rows laid out on shared column sets.
///
/// Owns every column set, row and element placed in it; dropping the layout
/// drops all of them.
#[derive(Debug)]
pub struct GridLayout<V> {
    options: LayoutOptions,
    column_sets: Vec<ColumnSet>,
    set_indices: HashMap<ColumnSetId, usize>,
    rows: Vec<Row>,
    view_states: Vec<ViewState<V>>,
    next_auto_id: u32,
    pass: u64,
}

impl<V> Default for GridLayout<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GridLayout<V> {
    /// Create an empty layout with default options.
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default())
    }

    /// Create an empty layout with the given options.
    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            options,
            column_sets: Vec::new(),
            set_indices: HashMap::new(),
            rows: Vec::new(),
            view_states: Vec::new(),
            next_auto_id: options.first_auto_id(),
            pass: 0,
        }
    }

    #[must_use]
    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Register a new, empty column set under `id` and return it for
    /// adding columns.
    pub fn add_column_set(
        &mut self,
        id: impl Into<ColumnSetId>,
    ) -> Result<&mut ColumnSet, GridError> {
        let id = id.into();
        if self.set_indices.contains_key(&id) {
            return Err(GridError::DuplicateColumnSet { id });
        }
        let index = self.register(ColumnSet::new(id));
        Ok(&mut self.column_sets[index])
    }

    /// Look up a column set. Returns `None` for unknown ids.
    #[must_use]
    pub fn column_set(&self, id: impl Into<ColumnSetId>) -> Option<&ColumnSet> {
        let id: ColumnSetId = id.into();
        let index = *self.set_indices.get(&id)?;
        Some(&self.column_sets[index])
    }

    /// Mutable lookup of a column set. Returns `None` for unknown ids.
    pub fn column_set_mut(&mut self, id: impl Into<ColumnSetId>) -> Option<&mut ColumnSet> {
        let id: ColumnSetId = id.into();
        let index = *self.set_indices.get(&id)?;
        Some(&mut self.column_sets[index])
    }

    /// All column sets in registration order.
    pub fn column_sets(&self) -> impl Iterator<Item = &ColumnSet> + '_ {
        self.column_sets.iter()
    }

    /// Append a fixed-height spacer row and return its index.
    pub fn add_padding_row(&mut self, size: f32) -> usize {
        self.rows.push(Row::padding(size));
        self.rows.len() - 1
    }

    /// Open a new row on the column set registered as `column_set_id`.
    ///
    /// The row is appended immediately; the returned builder places elements
    /// into it. The cursor starts at the first non-padding column.
    pub fn start_row(
        &mut self,
        vertical_resize: f32,
        column_set_id: impl Into<ColumnSetId>,
    ) -> Result<RowBuilder<'_, V>, GridError> {
        let id = column_set_id.into();
        let Some(&set_index) = self.set_indices.get(&id) else {
            return Err(GridError::UnknownColumnSet { id });
        };
        self.rows.push(Row::new(vertical_resize, id));
        let row = self.rows.len() - 1;
        Ok(RowBuilder::open(self, row, set_index))
    }

    /// Open a row on a fresh single-column set (weight 1.0).
    ///
    /// The row has content-derived height and a vertical resize weight of
    /// 1.0. The anonymous set's id is available from
    /// [`RowBuilder::column_set_id`].
    pub fn add_row(&mut self) -> RowBuilder<'_, V> {
        let id = self.next_auto_column_set_id();
        let set_index = self.register(ColumnSet::new(id));
        self.column_sets[set_index].add_column(1.0);
        self.rows.push(Row::new(1.0, id));
        let row = self.rows.len() - 1;
        RowBuilder::open(self, row, set_index)
    }

    /// Column set of the most recent non-padding row.
    #[must_use]
    pub fn last_valid_column_set(&self) -> Option<&ColumnSet> {
        let id = self.rows.iter().rev().find_map(Row::column_set)?;
        self.column_set(id)
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn num_views(&self) -> usize {
        self.view_states.len()
    }

    /// # Panics
    ///
    /// Panics if `row_index` is out of range.
    #[must_use]
    pub fn row(&self, row_index: usize) -> &Row {
        debug_assert!(
            row_index < self.rows.len(),
            "row {row_index} out of range ({} rows)",
            self.rows.len()
        );
        &self.rows[row_index]
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    /// Height of a row after the last sizing pass.
    ///
    /// # Panics
    ///
    /// Panics if `row_index` is out of range.
    #[must_use]
    pub fn row_height(&self, row_index: usize) -> f32 {
        self.row(row_index).height()
    }

    /// Top offset of a row after the last sizing pass.
    ///
    /// # Panics
    ///
    /// Panics if `row_index` is out of range.
    #[must_use]
    pub fn row_location(&self, row_index: usize) -> f32 {
        self.row(row_index).location()
    }

    /// Bottom of the last row after the last sizing pass.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.rows
            .last()
            .map_or(0.0, |row| row.location() + row.height())
    }

    /// Number of sizing passes run so far.
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.pass
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this layout.
    #[must_use]
    pub fn view_state(&self, id: ViewId) -> &ViewState<V> {
        debug_assert!(
            id.index() < self.view_states.len(),
            "view {} out of range ({} views)",
            id.index(),
            self.view_states.len()
        );
        &self.view_states[id.index()]
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this layout.
    #[must_use]
    pub fn view(&self, id: ViewId) -> &V {
        self.view_state(id).view()
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this layout.
    pub fn view_mut(&mut self, id: ViewId) -> &mut V {
        self.view_states[id.index()].view_mut()
    }

    /// All view states in placement order.
    pub fn view_states(&self) -> impl Iterator<Item = (ViewId, &ViewState<V>)> + '_ {
        self.view_states
            .iter()
            .enumerate()
            .map(|(i, state)| (ViewId::new(i), state))
    }

    /// All elements in placement order.
    pub fn views(&self) -> impl Iterator<Item = (ViewId, &V)> + '_ {
        self.view_states().map(|(id, state)| (id, state.view()))
    }

    /// Consume the layout and hand the elements back in placement order.
    pub fn into_views(self) -> Vec<V> {
        self.view_states
            .into_iter()
            .map(ViewState::into_view)
            .collect()
    }

    fn register(&mut self, set: ColumnSet) -> usize {
        let index = self.column_sets.len();
        self.set_indices.insert(set.id(), index);
        self.column_sets.push(set);
        index
    }

    fn next_auto_column_set_id(&mut self) -> ColumnSetId {
        loop {
            let id = ColumnSetId::new(self.next_auto_id);
            self.next_auto_id = self.next_auto_id.wrapping_add(1);
            if !self.set_indices.contains_key(&id) {
                return id;
            }
        }
    }
}

impl<V: GridView> GridLayout<V> {
    /// Size columns for `width`, then rows from their content.
    ///
    /// Every column set referenced by a row is sized exactly once per call.
    /// Rows with a fixed height (and padding rows) take that height without
    /// measuring their elements; other rows take the tallest preferred height
    /// of their elements at their column widths. Elements are never mutated.
    pub fn size_rows_and_columns(&mut self, width: f32) {
        self.pass = self.pass.wrapping_add(1);
        let pass = self.pass;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_size_pass",
            width,
            pass,
            rows = self.rows.len()
        )
        .entered();

        for row in &self.rows {
            let Some(id) = row.column_set() else {
                continue;
            };
            let set = &mut self.column_sets[self.set_indices[&id]];
            if !set.is_sized_in_pass(pass) {
                set.calculate_size(width);
                set.reset_column_x_coordinates();
                set.mark_sized_in_pass(pass);
            }
        }

        let mut y = 0.0;
        for (_index, row) in self.rows.iter_mut().enumerate() {
            let height = if row.has_fixed_height() {
                for id in row.views() {
                    self.view_states[id.index()].set_preferred_height(None);
                }
                row.fixed_height()
            } else {
                let mut tallest = 0.0f32;
                for id in row.views() {
                    let state = &mut self.view_states[id.index()];
                    let column_width =
                        self.column_sets[state.set_index()].column_width(state.column());
                    let preferred = state.measure(column_width);
                    state.set_preferred_height(Some(preferred));
                    tallest = tallest.max(preferred);
                }

                #[cfg(feature = "tracing")]
                tracing::trace!(row = _index, height = tallest, "content row height");

                tallest
            };
            row.set_height(height);
            row.set_location(y);
            y += height;
        }
    }

    /// Total height the grid needs at `width`.
    ///
    /// Runs the sizing passes but writes no frames, so it is safe to call for
    /// measurement before committing to a [`layout`](Self::layout).
    pub fn preferred_height_for_width(&mut self, width: f32) -> f32 {
        self.size_rows_and_columns(width);
        self.total_height()
    }

    /// Size the grid for `container` and set every element's frame.
    ///
    /// Frames are offset by the container origin: an element in column `c`
    /// of row `r` gets `(x + column_location(c), y + row_location(r),
    /// column_width(c), row_height(r))`.
    pub fn layout(&mut self, container: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "grid_layout",
            x = container.x,
            y = container.y,
            w = container.width,
            h = container.height,
            rows = self.rows.len(),
            views = self.view_states.len()
        )
        .entered();

        self.size_rows_and_columns(container.width);
        if self.options.fills_height() {
            self.distribute_vertical_slack(container.height);
        }

        for state in &mut self.view_states {
            let set = &self.column_sets[state.set_index()];
            let row = &self.rows[state.row()];
            let column = state.column();
            let frame = Rect::new(
                container.x + set.column_location(column),
                container.y + row.location(),
                set.column_width(column),
                row.height(),
            );
            state.apply_frame(frame);
        }
    }

    fn distribute_vertical_slack(&mut self, height: f32) {
        let slack = height - self.total_height();
        if !is_positive(slack) {
            return;
        }

        let weights: Vec<f32> = self
            .rows
            .iter()
            .map(|row| if row.is_padding() { 0.0 } else { row.resize_weight() })
            .collect();
        let shares = distribute_slack(&weights, slack);

        let mut y = 0.0;
        for (row, share) in self.rows.iter_mut().zip(shares) {
            row.set_height(row.height() + share);
            row.set_location(y);
            y += row.height();
        }
    }
}

/// Places elements into the row most recently opened on a [`GridLayout`].
///
/// Holding the builder borrows the layout mutably, so exactly one row is open
/// at a time. The cursor ([`next_column`](Self::next_column)) only moves
/// forward and steps over padding columns automatically.
#[derive(Debug)]
pub struct RowBuilder<'a, V> {
    layout: &'a mut GridLayout<V>,
    row: usize,
    set_index: usize,
    next_column: usize,
}

impl<'a, V> RowBuilder<'a, V> {
    fn open(layout: &'a mut GridLayout<V>, row: usize, set_index: usize) -> Self {
        let mut builder = Self {
            layout,
            row,
            set_index,
            next_column: 0,
        };
        builder.skip_padding_columns();
        builder
    }

    /// Index of the row being built.
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn column_set_id(&self) -> ColumnSetId {
        self.column_set().id()
    }

    #[must_use]
    pub fn column_set(&self) -> &ColumnSet {
        &self.layout.column_sets[self.set_index]
    }

    /// Column the next element will be placed in.
    #[must_use]
    pub fn next_column(&self) -> usize {
        self.next_column
    }

    /// Give this row a fixed height instead of deriving it from content.
    pub fn fixed_height(&mut self, height: f32) -> &mut Self {
        self.layout.rows[self.row].set_fixed_height(height);
        self
    }

    /// Leave `count` columns empty, then step over any padding columns.
    pub fn skip_columns(&mut self, count: usize) -> Result<&mut Self, GridError> {
        let target = self.checked_target(count)?;
        self.advance_to(target);
        self.skip_padding_columns();
        Ok(self)
    }

    /// Move the cursor one column forward without skipping padding.
    pub fn advance_column(&mut self) -> Result<&mut Self, GridError> {
        let target = self.checked_target(1)?;
        self.advance_to(target);
        Ok(self)
    }

    /// Step the cursor over padding columns.
    pub fn skip_padding_columns(&mut self) -> &mut Self {
        let target = self.column_set().next_non_padding(self.next_column);
        self.advance_to(target);
        self
    }

    /// Place `view` in the next free non-padding column.
    pub fn add_view(&mut self, view: V) -> Result<ViewId, GridError> {
        self.skip_padding_columns();
        let num_columns = self.column_set().num_columns();
        if self.next_column >= num_columns {
            return Err(GridError::ColumnOutOfRange {
                row: self.row,
                column: self.next_column,
                num_columns,
            });
        }

        let id = ViewId::new(self.layout.view_states.len());
        self.layout.view_states.push(ViewState::new(
            view,
            self.row,
            self.next_column,
            self.set_index,
        ));
        self.layout.rows[self.row].push_cell(Some(id));
        self.next_column += 1;
        self.skip_padding_columns();
        Ok(id)
    }

    fn checked_target(&self, count: usize) -> Result<usize, GridError> {
        let num_columns = self.column_set().num_columns();
        let target = self.next_column.saturating_add(count);
        if target > num_columns {
            return Err(GridError::ColumnOutOfRange {
                row: self.row,
                column: target,
                num_columns,
            });
        }
        Ok(target)
    }

    fn advance_to(&mut self, target: usize) {
        let row = &mut self.layout.rows[self.row];
        while self.next_column < target {
            row.push_cell(None);
            self.next_column += 1;
        }
    }
}
