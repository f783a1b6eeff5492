// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row enumeration for complex systems.
//!
//! Without a roomy unit-coefficient row to absorb arbitrary residuals, a
//! selection is only worth descending from if every column it leaves behind
//! is still expressible over the remaining rows. The solubility tables make
//! that an O(1) question: this row's own table seeds a mandatory base share
//! per column, and the next row's table vets every partial placement the
//! emitter and the advance try.

use crate::engine::strategy::RowStrategy;
use crate::engine::{ceil_div, floor_div, viable};
use crate::memo::solubility::SolubilityTable;
use crate::memo::{Memo, RowSpec};
use crate::state::statistics::{Counters, Statistics};
use crate::state::{RowState, SearchState};

/// Strategy for complex systems.
#[derive(Debug)]
pub struct ComplexRows;

impl RowStrategy for ComplexRows {
    fn solve_row(
        &self,
        memo: &Memo,
        state: &mut SearchState,
        stats: &mut Statistics,
        row: usize,
        find_first: bool,
    ) -> bool {
        let spec = &memo.rows[row];
        let below = &memo.solubility[row + 1];
        if find_first && !viable(memo, state, row) {
            stats.increment(Counters::ViabilityRejections);
            return false;
        }

        let SearchState { columns, rows } = state;
        let row_state = &mut rows[row];

        if find_first {
            let table = &memo.solubility[row];
            let mut column_total = 0;
            let mut min_sum = 0;
            let mut max_sum = 0;
            for (select, &value) in row_state.selection.iter_mut().zip(columns.iter()) {
                let range = table
                    .range(value)
                    .expect("column insoluble on row activation");
                select.base = range.min;
                select.extra = 0;
                select.max_extra = range.max - range.min;
                column_total += value;
                min_sum += range.min;
                max_sum += range.max;
            }

            let min_size = min_sum
                .max(spec.min_size)
                .max(ceil_div(column_total - spec.max_leave, spec.coeff));
            let max_size = max_sum
                .min(spec.max_size)
                .min(floor_div(column_total - spec.min_leave, spec.coeff));
            if min_size > max_size {
                stats.increment(Counters::WindowRejections);
                return false;
            }
            // The search below runs over the discretionary units above the
            // mandatory bases, which come out of the bag now and go back only
            // when this activation finally fails.
            row_state.current_size = min_size - min_sum;
            row_state.current_max_size = max_size - min_sum;
            for (select, value) in row_state.selection.iter().zip(columns.iter_mut()) {
                if select.base > 0 {
                    *value -= select.base * spec.coeff;
                    debug_assert!(*value >= 0, "base share exceeded column value");
                }
            }
        } else {
            if multiset_complex(spec, row_state, columns, below, false) {
                return true;
            }
            row_state.current_size += 1;
        }

        while row_state.current_size <= row_state.current_max_size {
            if multiset_complex(spec, row_state, columns, below, true) {
                return true;
            }
            row_state.current_size += 1;
        }

        for (select, value) in row_state.selection.iter().zip(columns.iter_mut()) {
            if select.base > 0 {
                *value += select.base * spec.coeff;
                debug_assert!(
                    *value <= memo.max_column_value,
                    "restored column exceeds its original value"
                );
            }
        }
        false
    }

    fn fill_last_row(&self, memo: &Memo, state: &mut SearchState) {
        let last = memo.rows.len() - 1;
        let table = &memo.solubility[last];
        let SearchState { columns, rows } = state;
        let row_state = &mut rows[last];
        for (select, &value) in row_state.selection.iter_mut().zip(columns.iter()) {
            let range = table.range(value).expect("insoluble residual at last row");
            select.extra = range.min;
        }
    }
}

/// Find a selection of `current_size` discretionary units whose every
/// partial column placement leaves a residual the next row can absorb.
///
/// The forward phase places units greedily from the left; taking a column's
/// full capacity needs no check (the capacity came from this row's own
/// table), but a partial placement is only kept if the residual is soluble
/// one row down. When a partial placement is insoluble, or when advancing
/// past the previous selection, the backward phase releases placements from
/// the left and looks for a column that can be lifted by the smallest
/// increment with a soluble residual; distribution then resumes forwards.
/// Returns false once every placement has been released, with the bag
/// restored to its state on entry.
fn multiset_complex(
    spec: &RowSpec,
    row_state: &mut RowState,
    bag: &mut [i32],
    below: &SolubilityTable,
    find_first: bool,
) -> bool {
    let mut undone;
    let mut distribute = find_first;
    if find_first {
        undone = row_state.current_size;
    } else {
        if row_state.current_size == 0 {
            return false;
        }
        undone = 0;
    }

    loop {
        if distribute {
            let mut blocked = false;
            let mut j = 0;
            while undone > 0 {
                debug_assert!(j < bag.len(), "selection overran the column bag");
                let capacity = row_state.selection[j].max_extra;
                if capacity <= undone {
                    if capacity > 0 {
                        row_state.selection[j].extra = capacity;
                        undone -= capacity;
                        bag[j] -= capacity * spec.coeff;
                    }
                } else {
                    row_state.selection[j].extra = undone;
                    bag[j] -= undone * spec.coeff;
                    undone = 0;
                    if below.range(bag[j]).is_none() {
                        blocked = true;
                    }
                }
                j += 1;
            }
            if !blocked {
                return true;
            }
        }
        distribute = true;

        let mut lifted = false;
        for j in 0..bag.len() {
            debug_assert!(row_state.selection[j].extra <= row_state.selection[j].max_extra);
            let placed = row_state.selection[j].extra;
            if undone > 0 && placed < row_state.selection[j].max_extra {
                let headroom = undone.min(row_state.selection[j].max_extra - placed);
                let mut residual = bag[j];
                for lift in 1..=headroom {
                    residual -= spec.coeff;
                    if below.range(residual).is_some() {
                        row_state.selection[j].extra = placed + lift;
                        bag[j] = residual;
                        undone -= lift;
                        lifted = true;
                        break;
                    }
                }
                if lifted {
                    break;
                }
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
}
