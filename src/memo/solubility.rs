// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solubility tables for complex systems.
//!
//! For each row `i` (in sorted order) and each possible column magnitude `v`,
//! the table stores the minimum and maximum number of copies of that row's
//! coefficient that a feasible completion of rows `i..n` can place at a
//! column of residual magnitude `v`. Feasibility respects the maximum
//! allowable row sums but not the minimums, since another column may make up
//! a minimum. `None` means no completion exists at all.
//!
//! The tables are built bottom-up with dynamic programming and consulted in
//! O(1) during the search, both to seed mandatory base selections and to
//! reject partial selections whose residual the remaining rows cannot
//! absorb.

use crate::memo::RowSpec;

/// The feasible per-column count window for one (row, magnitude) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    /// Minimum number of coefficient copies a feasible completion places here.
    pub min: i32,
    /// Maximum such number.
    pub max: i32,
}

/// One row's solubility table, indexed by residual column magnitude
/// `0..=max_column_value`. `None` marks an insoluble magnitude.
#[derive(Debug, Clone)]
pub struct SolubilityTable {
    entries: Vec<Option<CountRange>>,
}

impl SolubilityTable {
    pub fn new(entries: Vec<Option<CountRange>>) -> Self {
        Self { entries }
    }

    /// Look up the count window for a residual magnitude.
    #[inline]
    pub fn range(&self, magnitude: i32) -> Option<CountRange> {
        self.entries[magnitude as usize]
    }
}

/// Build one solubility table per sorted row, last row first.
///
/// The last row's table is closed form: magnitude `k * coeff` is soluble
/// with exactly `k` copies, for `k` up to the row's maximum size. Each
/// earlier row is then derived from its own partial table and the table
/// below it: at magnitude `v`, the row either places no copy (feasible iff
/// `v` is soluble one row down) or at least one copy (feasible iff
/// `v - coeff` is soluble for this row with a count below the size bound).
pub fn build_tables(rows: &[RowSpec], max_column_value: i32) -> Vec<SolubilityTable> {
    let nr_rows = rows.len();
    let width = max_column_value as usize + 1;
    let mut tables = vec![SolubilityTable::new(vec![None; width]); nr_rows];

    {
        let last = &rows[nr_rows - 1];
        let entries = &mut tables[nr_rows - 1].entries;
        let mut count = 0;
        let mut magnitude = 0;
        while magnitude <= max_column_value && count <= last.max_size {
            entries[magnitude as usize] = Some(CountRange { min: count, max: count });
            count += 1;
            magnitude += last.coeff;
        }
    }

    for i in (0..nr_rows - 1).rev() {
        let coeff = rows[i].coeff;
        let max_size = rows[i].max_size;
        let mut entries: Vec<Option<CountRange>> = vec![None; width];
        let below = &tables[i + 1].entries;

        for v in 0..=max_column_value {
            let zero_copies_ok = below[v as usize].is_some();
            let one_or_more = if v >= coeff {
                entries[(v - coeff) as usize].filter(|lower| lower.min < max_size)
            } else {
                None
            };
            entries[v as usize] = match one_or_more {
                Some(lower) => {
                    let min = if zero_copies_ok { 0 } else { lower.min + 1 };
                    let max = if lower.max < max_size {
                        lower.max + 1
                    } else {
                        // The size bound caps the count here. Walk up from the
                        // largest-count attempt until the rows below can absorb
                        // what remains.
                        let mut capped = max_size;
                        let mut k = v - max_size * coeff;
                        while below[k as usize].is_none() {
                            capped -= 1;
                            k += coeff;
                        }
                        debug_assert!(capped >= lower.min + 1, "capped maximum fell below minimum");
                        capped
                    };
                    Some(CountRange { min, max })
                }
                None => {
                    if zero_copies_ok {
                        Some(CountRange { min: 0, max: 0 })
                    } else {
                        None
                    }
                }
            };
        }
        tables[i] = SolubilityTable::new(entries);
    }

    tables
}
