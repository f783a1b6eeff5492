// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row enumeration for simple systems.
//!
//! With a roomy unit-coefficient row at the bottom of the sort order, any
//! residual the earlier rows leave behind is expressible, so selections need
//! no solubility checks: a row's candidates are exactly the size-bounded
//! multiset selections from the column bag.

use crate::engine::strategy::RowStrategy;
use crate::engine::{ceil_div, floor_div, viable};
use crate::memo::{Memo, RowSpec};
use crate::state::statistics::{Counters, Statistics};
use crate::state::{RowState, SearchState};

/// Strategy for simple systems.
#[derive(Debug)]
pub struct SimpleRows;

impl RowStrategy for SimpleRows {
    fn solve_row(
        &self,
        memo: &Memo,
        state: &mut SearchState,
        stats: &mut Statistics,
        row: usize,
        find_first: bool,
    ) -> bool {
        let spec = &memo.rows[row];
        if find_first && !viable(memo, state, row) {
            stats.increment(Counters::ViabilityRejections);
            return false;
        }

        let SearchState { columns, rows } = state;
        let row_state = &mut rows[row];

        if find_first {
            let mut column_total = 0;
            let mut max_sum = 0;
            for (select, &value) in row_state.selection.iter_mut().zip(columns.iter()) {
                select.extra = 0;
                select.max_extra = if value >= spec.coeff { value / spec.coeff } else { 0 };
                column_total += value;
                max_sum += select.max_extra;
            }

            let min_size = spec
                .min_size
                .max(ceil_div(column_total - spec.max_leave, spec.coeff));
            let max_size = max_sum
                .min(spec.max_size)
                .min(floor_div(column_total - spec.min_leave, spec.coeff));
            if min_size > max_size {
                stats.increment(Counters::WindowRejections);
                return false;
            }
            row_state.current_size = min_size;
            row_state.current_max_size = max_size;
        } else {
            if multiset_select(spec, row_state, columns, false) {
                return true;
            }
            if row_state.current_size == row_state.current_max_size {
                return false;
            }
            row_state.current_size += 1;
        }

        // Emitting the first selection of a size inside the window cannot
        // fail: max_sum bounds the window from above.
        let emitted = multiset_select(spec, row_state, columns, true);
        debug_assert!(emitted, "first selection failed inside the size window");
        emitted
    }

    fn fill_last_row(&self, memo: &Memo, state: &mut SearchState) {
        let SearchState { columns, rows } = state;
        let last = &mut rows[memo.rows.len() - 1];
        for (select, &value) in last.selection.iter_mut().zip(columns.iter()) {
            select.extra = value;
        }
    }
}

/// Find a selection of `current_size` units from the bag.
///
/// With `find_first` the smallest selection in canonical order is emitted:
/// units are placed greedily on the earliest columns with capacity. Otherwise
/// the previous selection is undone from the left until some column can take
/// one more unit, and the released remainder is re-placed greedily from the
/// left. Returns false when the previous selection was the last of this size;
/// the bag is then exactly as it was before the first emission.
fn multiset_select(
    spec: &RowSpec,
    row_state: &mut RowState,
    bag: &mut [i32],
    find_first: bool,
) -> bool {
    let mut undone;
    if find_first {
        undone = row_state.current_size;
    } else {
        if row_state.current_size == 0 {
            return false;
        }
        undone = 0;
        let mut lifted = false;
        for j in 0..bag.len() {
            debug_assert!(row_state.selection[j].extra <= row_state.selection[j].max_extra);
            let placed = row_state.selection[j].extra;
            if undone > 0 && placed < row_state.selection[j].max_extra {
                row_state.selection[j].extra = placed + 1;
                undone -= 1;
                bag[j] -= spec.coeff;
                lifted = true;
                break;
            }
            if placed > 0 {
                row_state.selection[j].extra = 0;
                undone += placed;
                bag[j] += placed * spec.coeff;
            }
        }
        if !lifted {
            return false;
        }
    }

    let mut j = 0;
    while undone > 0 {
        debug_assert!(j < bag.len(), "selection overran the column bag");
        let take = undone.min(row_state.selection[j].max_extra);
        if take > 0 {
            row_state.selection[j].extra = take;
            undone -= take;
            bag[j] -= take * spec.coeff;
        }
        j += 1;
    }
    true
}
