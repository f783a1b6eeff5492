// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The public solver object.
//!
//! A [`DiophantineSystem`] moves through three phases: open (rows and
//! columns are being declared), closed (the first [`solve`] call froze the
//! inputs and ran precomputation), and enumerating (successive [`solve`]
//! calls yield the next solution until the space is exhausted). Phase
//! violations are programmer errors and fail assertions; infeasibility and
//! exhaustion are reported by [`solve`] returning false, after which the
//! system is permanently failed.
//!
//! [`solve`]: DiophantineSystem::solve

use crate::engine::{self, ComplexRows, RowStrategy, SimpleRows};
use crate::memo::{Memo, SearchMode};
use crate::state::statistics::{Counters, Statistics};
use crate::state::SearchState;

/// Upper bound on a row's sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLimit {
    /// The row sum may not exceed this value.
    AtMost(i32),
    /// No declared upper bound; the column sum stands in for infinity.
    Unbounded,
}

/// A row as declared by the caller, before precomputation resolves it.
#[derive(Debug, Clone)]
pub struct RowDecl {
    pub coeff: i32,
    pub min_size: i32,
    pub max_size: SizeLimit,
}

/// Everything the first `solve` call prepares: the memo plus the row
/// discipline the memo's classification selected.
#[derive(Debug)]
struct Prepared {
    memo: Memo,
    strategy: Box<dyn RowStrategy>,
}

/// A system of linear Diophantine equations with row-sum bounds, solved for
/// its matrix of nonnegative integer solutions one at a time.
///
/// # Example
///
/// ```
/// use dio_search::{DiophantineSystem, SizeLimit};
///
/// let mut system = DiophantineSystem::new();
/// system.insert_row(1, 3, SizeLimit::AtMost(3));
/// system.insert_column(1);
/// system.insert_column(1);
/// system.insert_column(1);
///
/// assert!(system.solve());
/// assert_eq!(system.solution(0, 0), 1);
/// assert!(!system.solve());
/// ```
#[derive(Debug, Default)]
pub struct DiophantineSystem {
    decls: Vec<RowDecl>,
    prepared: Option<Prepared>,
    state: SearchState,
    statistics: Statistics,
    column_sum: i32,
    max_column_value: i32,
    closed: bool,
    failed: bool,
}

impl DiophantineSystem {
    pub fn new() -> Self {
        DiophantineSystem::default()
    }

    /// Create a system with capacity reserved for the expected shape.
    pub fn with_capacity(nr_rows: usize, nr_columns: usize) -> Self {
        let mut system = DiophantineSystem::new();
        system.decls.reserve(nr_rows);
        system.state.columns.reserve(nr_columns);
        system
    }

    /// Append a row with coefficient `coeff` and row-sum bounds
    /// `min_size ..= max_size`.
    ///
    /// # Panics
    ///
    /// Panics if the system is closed, `coeff < 1`, `min_size < 0`, or the
    /// bounds are contradictory.
    pub fn insert_row(&mut self, coeff: i32, min_size: i32, max_size: SizeLimit) {
        assert!(!self.closed, "system is closed");
        assert!(coeff > 0, "bad row coefficient {}", coeff);
        assert!(min_size >= 0, "negative minimum size {}", min_size);
        if let SizeLimit::AtMost(limit) = max_size {
            assert!(
                min_size <= limit,
                "minimum size {} exceeds maximum size {}",
                min_size,
                limit
            );
        }
        self.decls.push(RowDecl {
            coeff,
            min_size,
            max_size,
        });
    }

    /// Append a column with value `value`.
    ///
    /// # Panics
    ///
    /// Panics if the system is closed or `value < 1`.
    pub fn insert_column(&mut self, value: i32) {
        assert!(!self.closed, "system is closed");
        assert!(value > 0, "bad column value {}", value);
        self.state.columns.push(value);
        self.column_sum += value;
        self.max_column_value = self.max_column_value.max(value);
    }

    /// Produce the first or next solution.
    ///
    /// The first call closes the system and runs precomputation. Returns
    /// true when a solution is available through [`solution`]; returns false
    /// when the system is infeasible or the solutions are exhausted, after
    /// which the system is permanently failed.
    ///
    /// # Panics
    ///
    /// Panics if called again after returning false.
    ///
    /// [`solution`]: DiophantineSystem::solution
    pub fn solve(&mut self) -> bool {
        let find_first = !self.closed;
        if find_first && !self.close() {
            return false;
        }
        assert!(!self.failed, "solve called on a failed system");

        let prepared = self.prepared.as_ref().expect("closed system lost its memo");
        let found = engine::find_next(
            &prepared.memo,
            &mut self.state,
            &mut self.statistics,
            prepared.strategy.as_ref(),
            find_first,
        );
        if !found {
            self.failed = true;
            log::debug!(
                "search exhausted after {} solutions",
                self.statistics.get(Counters::Solutions)
            );
        }
        found
    }

    /// Freeze the inputs and precompute. Returns false on trivial
    /// infeasibility, leaving the system failed.
    fn close(&mut self) -> bool {
        self.closed = true;
        match Memo::build(
            &self.decls,
            &self.state.columns,
            self.column_sum,
            self.max_column_value,
        ) {
            Ok(memo) => {
                self.state.size_rows(memo.rows.len());
                let strategy: Box<dyn RowStrategy> = match memo.mode {
                    SearchMode::Simple => Box::new(SimpleRows),
                    SearchMode::Complex => Box::new(ComplexRows),
                };
                self.prepared = Some(Prepared { memo, strategy });
                true
            }
            Err(failure) => {
                log::debug!("precomputation rejected the system: {}", failure);
                self.statistics.record_failure(&failure);
                self.failed = true;
                false
            }
        }
    }

    /// Read entry `M[row][column]` of the current solution, with `row` in
    /// the caller's insertion order.
    ///
    /// # Panics
    ///
    /// Panics if no current solution exists, or on an out-of-range index.
    pub fn solution(&self, row: usize, column: usize) -> i32 {
        assert!(self.closed, "solve has not been called");
        assert!(!self.failed, "no solution exists");
        let prepared = self.prepared.as_ref().expect("closed system lost its memo");
        let position = prepared.memo.row_permute[row];
        let select = &self.state.rows[position].selection[column];
        select.base + select.extra
    }

    pub fn row_count(&self) -> usize {
        self.decls.len()
    }

    pub fn column_count(&self) -> usize {
        self.state.columns.len()
    }

    /// Search statistics accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
