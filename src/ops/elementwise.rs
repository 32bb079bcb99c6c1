//! Entry-wise addition and subtraction

use crate::error::{Error, Result};
use crate::matrix::{Element, SparseMatrix};
use crate::ops::assembly::assemble;

/// Computes `a + b`
///
/// Both operands must have the same shape. Only coordinates stored in either
/// operand are visited, and entries that cancel to zero are dropped.
pub fn add<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine("add", a, b, T::checked_add)
}

/// Computes `a - b`
///
/// Same shape rule and sparsity behavior as [`add`].
pub fn subtract<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    combine("subtract", a, b, T::checked_sub)
}

fn combine<T, F>(
    op: &'static str,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    apply: F,
) -> Result<SparseMatrix<T>>
where
    T: Element,
    F: Fn(&T, &T) -> Option<T>,
{
    if a.shape() != b.shape() {
        return Err(Error::ShapeMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    // Coordinates only in `a` keep their value since x ± 0 == x
    let mut entries = a.entries().clone();

    for (row, col, b_val) in b.iter() {
        let a_val = entries.get(&(row, col)).copied().unwrap_or_else(T::zero);
        let value = apply(&a_val, b_val).ok_or_else(|| Error::Overflow { op, row, col })?;

        if value.is_zero() {
            entries.remove(&(row, col));
        } else {
            entries.insert((row, col), value);
        }
    }

    Ok(assemble(a.shape(), entries))
}
