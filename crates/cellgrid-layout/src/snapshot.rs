//! Plain-data snapshots of computed grid geometry.
//!
//! A snapshot copies the transient sizing state out of a [`GridLayout`] so it
//! can be diffed, logged or (with the `serde` feature) serialized.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cellgrid_core::geometry::Rect;

use crate::column::Column;
use crate::column_set::ColumnSetId;
use crate::grid::GridLayout;
use crate::view_state::ViewId;

/// Geometry of every column set, row and element as of the last pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSnapshot {
    /// Sizing pass the snapshot was taken after (`0` if none ran).
    pub pass: u64,
    pub column_sets: Vec<ColumnSetSnapshot>,
    pub rows: Vec<RowSnapshot>,
    pub views: Vec<ViewSnapshot>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnSetSnapshot {
    pub id: ColumnSetId,
    /// Width the set was last sized for; `None` if never sized.
    pub sized_for: Option<f32>,
    pub widths: Vec<f32>,
    pub locations: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowSnapshot {
    /// `None` for padding rows.
    pub column_set: Option<ColumnSetId>,
    pub location: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewSnapshot {
    pub id: ViewId,
    pub row: usize,
    pub column: usize,
    pub preferred_height: Option<f32>,
    pub frame: Option<Rect>,
}

impl<V> GridLayout<V> {
    /// Copy out the geometry computed by the last sizing or layout pass.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        let column_sets = self
            .column_sets()
            .map(|set| ColumnSetSnapshot {
                id: set.id(),
                sized_for: set.sized_for(),
                widths: set.columns().iter().map(Column::width).collect(),
                locations: set.columns().iter().map(Column::location).collect(),
            })
            .collect();

        let rows = self
            .rows()
            .map(|row| RowSnapshot {
                column_set: row.column_set(),
                location: row.location(),
                height: row.height(),
            })
            .collect();

        let views = self
            .view_states()
            .map(|(id, state)| ViewSnapshot {
                id,
                row: state.row(),
                column: state.column(),
                preferred_height: state.preferred_height(),
                frame: state.frame(),
            })
            .collect();

        GridSnapshot {
            pass: self.pass_count(),
            column_sets,
            rows,
            views,
        }
    }
}
