// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use dio_search::{DiophantineSystem, SizeLimit};
use std::collections::BTreeSet;

/// A declared row: (coefficient, minimum size, maximum size).
pub type Row = (i32, i32, SizeLimit);

/// Build a system from row triples and column values.
pub fn system_of(rows: &[Row], columns: &[i32]) -> DiophantineSystem {
    let mut system = DiophantineSystem::with_capacity(rows.len(), columns.len());
    for &(coeff, min_size, max_size) in rows {
        system.insert_row(coeff, min_size, max_size);
    }
    for &value in columns {
        system.insert_column(value);
    }
    system
}

/// Read the current solution as a matrix in insertion order.
pub fn current_matrix(system: &DiophantineSystem) -> Vec<Vec<i32>> {
    (0..system.row_count())
        .map(|row| {
            (0..system.column_count())
                .map(|col| system.solution(row, col))
                .collect()
        })
        .collect()
}

/// Drain the system, collecting every solution in enumeration order.
///
/// Panics if more than `cap` solutions appear, to catch non-termination.
pub fn collect_solutions(system: &mut DiophantineSystem, cap: usize) -> Vec<Vec<Vec<i32>>> {
    let mut solutions = Vec::new();
    while system.solve() {
        solutions.push(current_matrix(system));
        assert!(solutions.len() <= cap, "more than {} solutions", cap);
    }
    solutions
}

/// Assert the quantified solution invariants: column balance, row-size
/// bounds, and nonnegativity.
pub fn assert_invariants(rows: &[Row], columns: &[i32], matrix: &[Vec<i32>]) {
    let column_sum: i32 = columns.iter().sum();
    for (j, &value) in columns.iter().enumerate() {
        let weighted: i32 = rows
            .iter()
            .zip(matrix.iter())
            .map(|(&(coeff, _, _), row)| coeff * row[j])
            .sum();
        assert_eq!(weighted, value, "column {} does not balance", j);
    }
    for (i, (&(_, min_size, max_size), row)) in rows.iter().zip(matrix.iter()).enumerate() {
        assert!(row.iter().all(|&entry| entry >= 0), "negative entry in row {}", i);
        let size: i32 = row.iter().sum();
        assert!(size >= min_size, "row {} sum {} below minimum {}", i, size, min_size);
        let limit = match max_size {
            SizeLimit::AtMost(limit) => limit,
            SizeLimit::Unbounded => column_sum,
        };
        assert!(size <= limit, "row {} sum {} above maximum {}", i, size, limit);
    }
}

/// All nonnegative vectors `x` with `sum(coeffs[i] * x[i]) == value`.
fn column_fills(coeffs: &[i32], value: i32) -> Vec<Vec<i32>> {
    fn descend(coeffs: &[i32], idx: usize, remaining: i32, cur: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if idx == coeffs.len() {
            if remaining == 0 {
                out.push(cur.clone());
            }
            return;
        }
        let mut count = 0;
        while count * coeffs[idx] <= remaining {
            cur[idx] = count;
            descend(coeffs, idx + 1, remaining - count * coeffs[idx], cur, out);
            count += 1;
        }
        cur[idx] = 0;
    }
    let mut out = Vec::new();
    let mut cur = vec![0; coeffs.len()];
    descend(coeffs, 0, value, &mut cur, &mut out);
    out
}

/// Every solution matrix, found the slow way: the cartesian product of
/// per-column balances, filtered by the row-size bounds. Only usable on
/// small systems.
pub fn brute_force(rows: &[Row], columns: &[i32]) -> BTreeSet<Vec<Vec<i32>>> {
    let coeffs: Vec<i32> = rows.iter().map(|&(coeff, _, _)| coeff).collect();
    let column_sum: i32 = columns.iter().sum();
    let per_column: Vec<Vec<Vec<i32>>> = columns
        .iter()
        .map(|&value| column_fills(&coeffs, value))
        .collect();

    let mut solutions = BTreeSet::new();
    if per_column.iter().any(|fills| fills.is_empty()) {
        return solutions;
    }
    let mut choice = vec![0usize; columns.len()];
    'odometer: loop {
        let matrix: Vec<Vec<i32>> = (0..rows.len())
            .map(|i| (0..columns.len()).map(|j| per_column[j][choice[j]][i]).collect())
            .collect();
        let in_bounds = rows.iter().zip(matrix.iter()).all(|(&(_, min_size, max_size), row)| {
            let size: i32 = row.iter().sum();
            let limit = match max_size {
                SizeLimit::AtMost(limit) => limit,
                SizeLimit::Unbounded => column_sum,
            };
            size >= min_size && size <= limit
        });
        if in_bounds {
            solutions.insert(matrix);
        }

        for j in 0..columns.len() {
            choice[j] += 1;
            if choice[j] < per_column[j].len() {
                continue 'odometer;
            }
            choice[j] = 0;
        }
        return solutions;
    }
}
