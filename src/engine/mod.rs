// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The backtracking driver.
//!
//! Solutions are found by walking the sorted rows with an explicit loop:
//! forwards after a row produces a selection, backwards after a row runs
//! out. The walk never recurses, so search depth costs no stack. Only rows
//! `0..n-2` are enumerated; the final row's share is forced and is filled in
//! closed form once the walk reaches the end.

mod complex;
mod simple;
mod strategy;

pub use complex::ComplexRows;
pub use simple::SimpleRows;
pub use strategy::RowStrategy;

use crate::memo::Memo;
use crate::state::statistics::{Counters, Statistics};
use crate::state::SearchState;

/// Run one pass of the walk, producing the first (`find_first`) or next
/// solution. Returns false when the search space is exhausted.
pub fn find_next(
    memo: &Memo,
    state: &mut SearchState,
    stats: &mut Statistics,
    strategy: &dyn RowStrategy,
    mut find_first: bool,
) -> bool {
    let nr_rows = memo.rows.len();
    if nr_rows > 1 {
        let penultimate = nr_rows - 2;
        let mut row = if find_first { 0 } else { penultimate };
        loop {
            find_first = strategy.solve_row(memo, state, stats, row, find_first);
            if find_first {
                if row == penultimate {
                    break;
                }
                row += 1;
            } else {
                if row == 0 {
                    break;
                }
                stats.increment(Counters::Backtracks);
                row -= 1;
            }
        }
    }
    if find_first {
        strategy.fill_last_row(memo, state);
        stats.increment(Counters::Solutions);
        log::trace!("solution {} emitted", stats.get(Counters::Solutions));
    }
    find_first
}

/// Check that enough large column values remain to satisfy the minimum
/// products of every unsolved row prefix.
///
/// For each initial segment of the unsolved rows (the final row excepted),
/// the columns at least as large as the segment's smallest coefficient must
/// sum to the segment's accumulated minimum products; a partial solution
/// that fails this cannot be completed.
pub fn viable(memo: &Memo, state: &SearchState, from_row: usize) -> bool {
    let nr_rows = memo.rows.len();
    let mut needed = 0;
    for spec in &memo.rows[from_row..nr_rows - 1] {
        if spec.min_product <= 0 {
            continue;
        }
        needed += spec.min_product;
        let floor = spec.coeff;
        let mut supplied = 0;
        let mut satisfied = false;
        for &value in &state.columns {
            if value >= floor {
                supplied += value;
                if supplied >= needed {
                    satisfied = true;
                    break;
                }
            }
        }
        if !satisfied {
            return false;
        }
    }
    true
}

/// `dividend / divisor` rounded towards positive infinity; `divisor > 0`.
#[inline]
pub fn ceil_div(dividend: i32, divisor: i32) -> i32 {
    debug_assert!(divisor > 0);
    if dividend >= 0 {
        (dividend + divisor - 1) / divisor
    } else {
        -(-dividend / divisor)
    }
}

/// `dividend / divisor` rounded towards negative infinity; `divisor > 0`.
#[inline]
pub fn floor_div(dividend: i32, divisor: i32) -> i32 {
    debug_assert!(divisor > 0);
    if dividend >= 0 {
        dividend / divisor
    } else {
        -((-dividend + divisor - 1) / divisor)
    }
}
