// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons precomputation can reject a system outright.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Infeasibility detected while closing a system, before any search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
pub enum BuildFailure {
    /// The summed minimum row products already exceed the column mass.
    MinimaExceedColumns { required: i32, available: i32 },

    /// Even the summed maximum row products cannot reach the column mass.
    MaximaBelowColumns { possible: i32, required: i32 },

    /// A column value is insoluble over the full set of rows.
    InsolubleColumn { column: usize, value: i32 },
}

impl BuildFailure {
    /// Position of this failure kind within the statistics array.
    pub(crate) fn slot(&self) -> usize {
        match self {
            BuildFailure::MinimaExceedColumns { .. } => 0,
            BuildFailure::MaximaBelowColumns { .. } => 1,
            BuildFailure::InsolubleColumn { .. } => 2,
        }
    }
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildFailure::MinimaExceedColumns { required, available } => {
                write!(
                    f,
                    "row minimums need {} units but columns only supply {}",
                    required, available
                )
            }
            BuildFailure::MaximaBelowColumns { possible, required } => {
                write!(
                    f,
                    "row maximums supply at most {} units but columns need {}",
                    possible, required
                )
            }
            BuildFailure::InsolubleColumn { column, value } => {
                write!(f, "column {} (value {}) is insoluble", column, value)
            }
        }
    }
}
