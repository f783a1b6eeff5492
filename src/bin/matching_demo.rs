// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prints the first eight solutions of the canonical 6x6 matching system.
//!
//! The row coefficients and column values come from a single elementary
//! AC matching problem whose six variables have known multiplicand sums;
//! each solution is one way of distributing the six constants.

use dio_search::{DiophantineSystem, SizeLimit};

const ROWS: [(i32, i32); 6] = [(1, 14), (2, 15), (2, 17), (2, 18), (1, 34), (2, 15)];
const COLUMNS: [i32; 6] = [26, 28, 32, 25, 41, 26];

fn main() {
    env_logger::init();

    let mut system = DiophantineSystem::with_capacity(ROWS.len(), COLUMNS.len());
    for (coeff, size) in ROWS {
        system.insert_row(coeff, size, SizeLimit::AtMost(size));
    }
    for value in COLUMNS {
        system.insert_column(value);
    }

    for _ in 0..8 {
        if !system.solve() {
            println!("no more solutions");
            return;
        }
        println!("\nSolution:");
        for row in 0..system.row_count() {
            for col in 0..system.column_count() {
                print!("{}  ", system.solution(row, col));
            }
            println!();
        }
    }
    println!("\nDone!");
}
