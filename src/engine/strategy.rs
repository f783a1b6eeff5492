// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The per-row search capability.
//!
//! The driver walks rows forwards and backwards; what it asks of each row is
//! the same in both directions, so the simple and complex enumerations sit
//! behind one trait, selected once when the system closes.

use std::fmt::Debug;

use crate::memo::Memo;
use crate::state::statistics::Statistics;
use crate::state::SearchState;

/// One row-solving discipline.
///
/// # Lifecycle
///
/// 1. The driver calls `solve_row(row, find_first = true)` on first arriving
///    at a row; the strategy computes the row's feasible size window and
///    emits the first selection, deducting it from the column bag.
/// 2. On returning to the row after a failure below, the driver calls
///    `solve_row(row, find_first = false)`; the strategy advances to the next
///    selection in canonical order, growing the selection size when the
///    current size is exhausted.
/// 3. `solve_row` returning `false` means the row's activation is over and
///    the bag has been restored to its state on arrival.
/// 4. Once every non-final row holds a selection, `fill_last_row` writes the
///    forced share of the final row.
pub trait RowStrategy: Debug {
    /// Produce the first or next selection for `row`.
    fn solve_row(
        &self,
        memo: &Memo,
        state: &mut SearchState,
        stats: &mut Statistics,
        row: usize,
        find_first: bool,
    ) -> bool;

    /// Write the closed-form share of the final sorted row.
    fn fill_last_row(&self, memo: &Memo, state: &mut SearchState);
}
