// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The canonical 6x6 AC-matching system: six rows with exact sums against
//! six columns. This instance is complex (the unit-coefficient rows cannot
//! absorb the largest column) and has a large solution space; the shipped
//! driver asks for eight solutions in sequence.

mod common;

use common::{assert_invariants, current_matrix, system_of, Row};
use dio_search::{Counters, SizeLimit};

fn matching_rows() -> Vec<Row> {
    [(1, 14), (2, 15), (2, 17), (2, 18), (1, 34), (2, 15)]
        .iter()
        .map(|&(coeff, size)| (coeff, size, SizeLimit::AtMost(size)))
        .collect()
}

const MATCHING_COLUMNS: [i32; 6] = [26, 28, 32, 25, 41, 26];

#[test]
fn test_eight_successive_solutions() {
    let rows = matching_rows();
    let mut system = system_of(&rows, &MATCHING_COLUMNS);

    let mut seen = Vec::new();
    for round in 0..8 {
        assert!(system.solve(), "solution {} missing", round + 1);
        let matrix = current_matrix(&system);
        assert_invariants(&rows, &MATCHING_COLUMNS, &matrix);
        assert!(!seen.contains(&matrix), "solution {} repeated", round + 1);
        seen.push(matrix);
    }
    assert_eq!(system.statistics().get(Counters::Solutions), 8);
}

#[test]
fn test_exact_row_sums() {
    // Every declared row has min == max, so each solution's row sums are
    // exactly the declared sizes.
    let rows = matching_rows();
    let mut system = system_of(&rows, &MATCHING_COLUMNS);

    assert!(system.solve());
    let matrix = current_matrix(&system);
    let sums: Vec<i32> = matrix.iter().map(|row| row.iter().sum()).collect();
    assert_eq!(sums, vec![14, 15, 17, 18, 34, 15]);
}

#[test]
fn test_restart_reproduces_the_same_prefix() {
    // Precomputation and enumeration are pure functions of the input: two
    // fresh systems must agree solution by solution.
    let rows = matching_rows();
    let mut first = system_of(&rows, &MATCHING_COLUMNS);
    let mut second = system_of(&rows, &MATCHING_COLUMNS);

    for _ in 0..4 {
        assert!(first.solve());
        assert!(second.solve());
        assert_eq!(current_matrix(&first), current_matrix(&second));
    }
}
