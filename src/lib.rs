// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of nonnegative integer solutions to the linear Diophantine
//! systems that arise in associative-commutative (AC/ACU) matching.
//!
//! Given an `n`-component vector `R` of positive row coefficients, each with
//! bounds on its row sum, and an `m`-component vector `C` of positive column
//! values, the solver generates, one at a time, every `n x m` matrix `M` of
//! natural numbers such that the coefficient-weighted column sums equal `C`
//! and every row sum lies within its declared bounds. The intuition is that
//! `M[i][j]` is the multiplicity of the `j`-th constant assigned to the
//! `i`-th variable in a single elementary AC or ACU matching problem.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO data (immutable)
//!
//! Precomputed when the first [`DiophantineSystem::solve`] call closes the
//! system, and never changed afterwards:
//! - row specifications sorted into descending coefficient order, together
//!   with the inverse permutation back to insertion order;
//! - the minimum and maximum column mass the rows after each row must still
//!   absorb;
//! - for complex systems, per-row solubility tables answering in O(1) how
//!   many copies of a row's coefficient a feasible completion of the
//!   remaining rows can place at a column of a given residual magnitude.
//!
//! ## Tier 2: DYNAMIC data (mutable)
//!
//! Search state that changes while enumerating:
//! - the live column bag, reduced in place as rows take their share;
//! - per-row selections (`base` + `extra` per column) and the active
//!   selection-size window;
//! - search statistics.
//!
//! # Search algorithm
//!
//! Rows are solved one at a time in sorted order by an explicit
//! forward/backward walk over row indices; the walk never recurses. Each
//! non-final row enumerates size-bounded multiset selections from the column
//! bag in a canonical order, and the final row absorbs whatever remains in
//! closed form. A system is *simple* when some row has coefficient 1 and
//! enough headroom to absorb the largest column value, so that any residual
//! is expressible over the remaining rows; otherwise it is *complex*, and
//! every trial selection is additionally pruned against the solubility table
//! of the next row.
//!
//! # Example
//!
//! ```
//! use dio_search::{DiophantineSystem, SizeLimit};
//!
//! let mut system = DiophantineSystem::new();
//! system.insert_row(2, 1, SizeLimit::AtMost(2));
//! system.insert_row(1, 0, SizeLimit::AtMost(5));
//! system.insert_column(3);
//! system.insert_column(2);
//!
//! while system.solve() {
//!     for row in 0..system.row_count() {
//!         for col in 0..system.column_count() {
//!             print!("{}  ", system.solution(row, col));
//!         }
//!         println!();
//!     }
//!     println!();
//! }
//! ```
//!
//! # References
//!
//! - Steven Eker, "Single Elementary Associative-Commutative Matching",
//!   _Journal of Automated Reasoning_, pp 35-51, 28(1), 2002.

mod engine;
mod memo;
mod state;
mod system;

pub use state::statistics::{Counters, Statistics};
pub use system::{DiophantineSystem, SizeLimit};
