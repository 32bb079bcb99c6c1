//! Sparse-sparse matrix multiplication
//!
//! B's entries are grouped into per-row buckets once, so each nonzero
//! `A[i, k]` only visits the entries of row `k` of B. Work is proportional to
//! the number of matching (A entry, B row entry) pairs rather than to
//! `rows × cols`. Output rows are independent, which lets the row loop run on
//! a rayon pool for large left operands.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::matrix::{Config, Element, SparseMatrix};
use crate::ops::assembly::assemble_rows;

/// Rows of B keyed by row index, each holding `(col, value)` pairs
type RowBuckets<T> = HashMap<usize, Vec<(usize, T)>>;

/// Computes `a × b` with the default configuration
pub fn multiply<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    multiply_with_config(a, b, &Config::default())
}

/// Computes `a × b`
///
/// Requires `a.n_cols() == b.n_rows()`; the result has shape
/// `(a.n_rows(), b.n_cols())`. Entries whose contributions cancel are not
/// stored.
///
/// # Examples
///
/// ```
/// use sparsemat::{multiply, SparseMatrix};
///
/// let a = SparseMatrix::from_triplets(1, 2, vec![(0, 0, 2i64), (0, 1, 3)]);
/// let b = SparseMatrix::from_triplets(2, 1, vec![(0, 0, 4i64), (1, 0, 5)]);
///
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.shape(), (1, 1));
/// assert_eq!(c.get(0, 0), 23);
/// ```
pub fn multiply_with_config<T: Element>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &Config,
) -> Result<SparseMatrix<T>> {
    if a.n_cols() != b.n_rows() {
        return Err(Error::ShapeMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let shape = (a.n_rows(), b.n_cols());
    let b_rows: RowBuckets<T> = b.row_buckets().into_iter().collect();
    let a_rows = a.row_buckets();

    let rows = if config.use_parallel(a_rows.len()) {
        let par_rows = || {
            a_rows
                .par_iter()
                .map(|(i, a_row)| multiply_row(*i, a_row, &b_rows).map(|row| (*i, row)))
                .collect::<Result<Vec<_>>>()
        };

        // A dedicated pool only when the global one has a different size
        if config.n_threads == rayon::current_num_threads() {
            par_rows()?
        } else {
            rayon::ThreadPoolBuilder::new()
                .num_threads(config.n_threads)
                .build()?
                .install(par_rows)?
        }
    } else {
        a_rows
            .iter()
            .map(|(i, a_row)| multiply_row(*i, a_row, &b_rows).map(|row| (*i, row)))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(assemble_rows(shape, rows))
}

/// Computes row `i` of the product from row `i` of A
///
/// Returns the nonzero `(col, value)` pairs sorted by column.
fn multiply_row<T: Element>(
    i: usize,
    a_row: &[(usize, T)],
    b_rows: &RowBuckets<T>,
) -> Result<Vec<(usize, T)>> {
    // Use a hashmap as an accumulator for this row
    let mut accum: HashMap<usize, T> = HashMap::new();

    for &(k, a_val) in a_row {
        let Some(b_row) = b_rows.get(&k) else {
            continue;
        };

        for &(j, b_val) in b_row {
            let overflow = || Error::Overflow {
                op: "multiply",
                row: i,
                col: j,
            };

            let product = a_val.checked_mul(&b_val).ok_or_else(overflow)?;
            let slot = accum.entry(j).or_insert_with(T::zero);
            *slot = slot.checked_add(&product).ok_or_else(overflow)?;
        }
    }

    // Cancellation can leave exact zeros behind
    let mut row: Vec<_> = accum.into_iter().filter(|(_, v)| !v.is_zero()).collect();
    row.sort_by_key(|&(col, _)| col);

    Ok(row)
}
