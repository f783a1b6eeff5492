// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).
//!
//! Everything here changes in place while solutions are enumerated. The
//! column bag is reduced as rows take their share and restored arithmetically
//! as selections are released, so the state after a failed pass is identical
//! to the state before it.

pub mod statistics;

/// One row's share of one column.
#[derive(Debug, Clone, Copy, Default)]
pub struct Select {
    /// Mandatory share forced by solubility; always 0 in simple systems.
    pub base: i32,
    /// Discretionary share added by the current selection.
    pub extra: i32,
    /// Largest `extra` that column capacity and the size bound allow.
    pub max_extra: i32,
}

/// Per-row selection state.
#[derive(Debug, Default)]
pub struct RowState {
    /// Size of the selection currently being enumerated.
    ///
    /// For complex rows this counts only the discretionary units above the
    /// mandatory bases.
    pub current_size: i32,
    /// Largest selection size worth trying for this activation.
    pub current_max_size: i32,
    /// One entry per column, parallel to the bag.
    pub selection: Vec<Select>,
}

/// The mutable half of a system: the live column bag plus one [`RowState`]
/// per sorted row.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Column values in insertion order, reduced in place during search.
    pub columns: Vec<i32>,
    /// Selection state per sorted row; sized when the system closes.
    pub rows: Vec<RowState>,
}

impl SearchState {
    /// Allocate the per-row selection state, all fields zeroed.
    pub fn size_rows(&mut self, nr_rows: usize) {
        let nr_columns = self.columns.len();
        self.rows = (0..nr_rows)
            .map(|_| RowState {
                current_size: 0,
                current_max_size: 0,
                selection: vec![Select::default(); nr_columns],
            })
            .collect();
    }
}
