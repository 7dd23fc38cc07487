//! Errors raised while building a grid.

use std::fmt;

use crate::column_set::ColumnSetId;

/// Contract violations detected while building a [`GridLayout`](crate::GridLayout).
///
/// Sizing and placement never fail; only the forward-construction API does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A row was started against a column set id that was never registered.
    UnknownColumnSet { id: ColumnSetId },
    /// A column set id was registered twice.
    DuplicateColumnSet { id: ColumnSetId },
    /// The row cursor would move past the last column of the row's column set.
    ColumnOutOfRange {
        row: usize,
        column: usize,
        num_columns: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColumnSet { id } => {
                write!(f, "column set {} is not registered", id.get())
            }
            Self::DuplicateColumnSet { id } => {
                write!(f, "column set {} is already registered", id.get())
            }
            Self::ColumnOutOfRange {
                row,
                column,
                num_columns,
            } => write!(
                f,
                "row {row}: column {column} is out of range (column set has {num_columns} columns)"
            ),
        }
    }
}

impl std::error::Error for GridError {}
