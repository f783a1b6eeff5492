// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data (Tier 1: MEMO).
//!
//! [`Memo::build`] runs once, when the first `solve` call closes the system.
//! It validates the declared rows against the column totals, sorts the rows,
//! computes the leave totals each row must respect, classifies the system as
//! simple or complex, and for complex systems builds the solubility tables.
//! Everything in this module is read-only for the rest of the search.

pub mod failure;
pub mod solubility;

use crate::system::{RowDecl, SizeLimit};
use failure::BuildFailure;
use solubility::SolubilityTable;

/// One row of the system, fully resolved and sorted into search order.
#[derive(Debug, Clone)]
pub struct RowSpec {
    /// Insertion index, used to restore the caller-visible row order.
    pub name: usize,
    /// The row's coefficient in `R`.
    pub coeff: i32,
    /// Minimum acceptable row sum.
    pub min_size: i32,
    /// Maximum acceptable row sum; unbounded declarations are resolved to the
    /// column sum, a safe finite substitute.
    pub max_size: i32,
    /// `coeff * min_size`.
    pub min_product: i32,
    /// `coeff * max_size`.
    pub max_product: i32,
    /// Minimum column mass the rows after this one must still absorb.
    pub min_leave: i32,
    /// Maximum column mass the rows after this one may still absorb.
    pub max_leave: i32,
}

/// Which per-row enumeration the system needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Some row has coefficient 1 and room to absorb the largest column;
    /// any residual is expressible over the final rows.
    Simple,
    /// Selections must be pruned against the solubility tables.
    Complex,
}

/// All precomputed data for one closed system.
#[derive(Debug)]
pub struct Memo {
    /// Rows in search order: descending coefficient, ties broken by
    /// ascending maximum size.
    pub rows: Vec<RowSpec>,
    /// Maps an insertion index to its position in `rows`.
    pub row_permute: Vec<usize>,
    /// One table per row, empty for simple systems.
    pub solubility: Vec<SolubilityTable>,
    pub mode: SearchMode,
    pub max_column_value: i32,
}

impl Memo {
    /// Validate and precompute a declared system.
    ///
    /// # Panics
    ///
    /// Panics if no rows or no columns have been declared.
    pub fn build(
        decls: &[RowDecl],
        columns: &[i32],
        column_sum: i32,
        max_column_value: i32,
    ) -> Result<Memo, BuildFailure> {
        assert!(!decls.is_empty(), "no rows declared");
        assert!(!columns.is_empty(), "no columns declared");

        let mut rows: Vec<RowSpec> = decls
            .iter()
            .enumerate()
            .map(|(name, decl)| {
                let max_size = match decl.max_size {
                    SizeLimit::AtMost(limit) => limit,
                    SizeLimit::Unbounded => column_sum,
                };
                RowSpec {
                    name,
                    coeff: decl.coeff,
                    min_size: decl.min_size,
                    max_size,
                    min_product: decl.min_size * decl.coeff,
                    max_product: max_size * decl.coeff,
                    min_leave: 0,
                    max_leave: 0,
                }
            })
            .collect();

        let sum_of_min_products: i32 = rows.iter().map(|r| r.min_product).sum();
        let sum_of_max_products: i32 = rows.iter().map(|r| r.max_product).sum();
        if sum_of_min_products > column_sum {
            return Err(BuildFailure::MinimaExceedColumns {
                required: sum_of_min_products,
                available: column_sum,
            });
        }
        if sum_of_max_products < column_sum {
            return Err(BuildFailure::MaximaBelowColumns {
                possible: sum_of_max_products,
                required: column_sum,
            });
        }

        // Largest coefficients are solved first. Among equal coefficients the
        // tightest size bound goes first, so the roomiest row ends up last.
        rows.sort_by(|a, b| b.coeff.cmp(&a.coeff).then(a.max_size.cmp(&b.max_size)));

        let mut row_permute = vec![0; rows.len()];
        let mut min_total = 0;
        let mut max_total = 0;
        for (position, row) in rows.iter_mut().enumerate().rev() {
            row_permute[row.name] = position;
            row.min_leave = min_total;
            row.max_leave = max_total;
            min_total += row.min_product;
            max_total += row.max_product;
        }

        let last = &rows[rows.len() - 1];
        if last.coeff == 1 && last.max_size >= max_column_value {
            log::debug!(
                "closed simple system: {} rows, {} columns",
                rows.len(),
                columns.len()
            );
            return Ok(Memo {
                rows,
                row_permute,
                solubility: Vec::new(),
                mode: SearchMode::Simple,
                max_column_value,
            });
        }

        let solubility = solubility::build_tables(&rows, max_column_value);
        for (column, &value) in columns.iter().enumerate() {
            if solubility[0].range(value).is_none() {
                return Err(BuildFailure::InsolubleColumn { column, value });
            }
        }
        log::debug!(
            "closed complex system: {} rows, {} columns, tables to magnitude {}",
            rows.len(),
            columns.len(),
            max_column_value
        );
        Ok(Memo {
            rows,
            row_permute,
            solubility,
            mode: SearchMode::Complex,
            max_column_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(coeff: i32, min_size: i32, max_size: SizeLimit) -> RowDecl {
        RowDecl {
            coeff,
            min_size,
            max_size,
        }
    }

    fn build(decls: &[RowDecl], columns: &[i32]) -> Result<Memo, BuildFailure> {
        let column_sum = columns.iter().sum();
        let max_column_value = columns.iter().copied().max().unwrap_or(0);
        Memo::build(decls, columns, column_sum, max_column_value)
    }

    #[test]
    fn test_sort_and_permutation() {
        let decls = [
            decl(1, 0, SizeLimit::AtMost(9)),
            decl(3, 0, SizeLimit::AtMost(2)),
            decl(1, 0, SizeLimit::AtMost(1)),
        ];
        let memo = build(&decls, &[9]).unwrap();

        let order: Vec<(i32, i32)> = memo.rows.iter().map(|r| (r.coeff, r.max_size)).collect();
        assert_eq!(order, vec![(3, 2), (1, 1), (1, 9)]);
        // row_permute maps insertion order back onto the sorted positions.
        assert_eq!(memo.row_permute, vec![2, 0, 1]);
        for (position, row) in memo.rows.iter().enumerate() {
            assert_eq!(memo.row_permute[row.name], position);
        }
    }

    #[test]
    fn test_leave_totals_cover_suffix() {
        let decls = [
            decl(2, 1, SizeLimit::AtMost(3)),
            decl(1, 2, SizeLimit::AtMost(4)),
        ];
        let memo = build(&decls, &[5, 5]).unwrap();

        // Sorted order keeps the coefficient-2 row first.
        assert_eq!(memo.rows[0].min_leave, 2);
        assert_eq!(memo.rows[0].max_leave, 4);
        assert_eq!(memo.rows[1].min_leave, 0);
        assert_eq!(memo.rows[1].max_leave, 0);
    }

    #[test]
    fn test_unbounded_resolves_to_column_sum() {
        let decls = [decl(1, 0, SizeLimit::Unbounded)];
        let memo = build(&decls, &[4, 6]).unwrap();
        assert_eq!(memo.rows[0].max_size, 10);
        assert_eq!(memo.rows[0].max_product, 10);
    }

    #[test]
    fn test_trivial_infeasibility() {
        let too_big = build(&[decl(2, 4, SizeLimit::AtMost(4))], &[6]);
        assert!(matches!(
            too_big,
            Err(BuildFailure::MinimaExceedColumns { required: 8, available: 6 })
        ));

        let too_small = build(&[decl(2, 0, SizeLimit::AtMost(2))], &[6]);
        assert!(matches!(
            too_small,
            Err(BuildFailure::MaximaBelowColumns { possible: 4, required: 6 })
        ));
    }

    #[test]
    fn test_classification() {
        // A unit-coefficient row big enough for the largest column: simple.
        let simple = build(
            &[
                decl(2, 1, SizeLimit::AtMost(2)),
                decl(1, 0, SizeLimit::AtMost(5)),
            ],
            &[3, 2],
        )
        .unwrap();
        assert_eq!(simple.mode, SearchMode::Simple);
        assert!(simple.solubility.is_empty());

        // No unit coefficient at all: complex.
        let complex = build(&[decl(2, 0, SizeLimit::AtMost(3))], &[6]).unwrap();
        assert_eq!(complex.mode, SearchMode::Complex);
        assert_eq!(complex.solubility.len(), 1);

        // A unit coefficient whose size bound cannot cover the largest
        // column is not enough for the simple path.
        let cramped = build(
            &[
                decl(1, 0, SizeLimit::AtMost(2)),
                decl(2, 0, SizeLimit::AtMost(3)),
            ],
            &[6],
        )
        .unwrap();
        assert_eq!(cramped.mode, SearchMode::Complex);
    }

    #[test]
    fn test_insoluble_column_rejected() {
        // 5 is not expressible over a single row of coefficient 2.
        let result = build(&[decl(2, 1, SizeLimit::AtMost(10))], &[5]);
        assert!(matches!(
            result,
            Err(BuildFailure::InsolubleColumn { column: 0, value: 5 })
        ));
    }
}
