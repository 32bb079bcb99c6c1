//! Packages engine output back into a [`SparseMatrix`]

use std::collections::BTreeMap;

use num_traits::Num;

use crate::matrix::SparseMatrix;

/// Builds a result matrix of `shape` from a coordinate-keyed entry map
pub fn assemble<T>(shape: (usize, usize), entries: BTreeMap<(usize, usize), T>) -> SparseMatrix<T>
where
    T: Copy + Num,
{
    SparseMatrix::from_entries(shape.0, shape.1, entries)
}

/// Builds a result matrix of `shape` from per-row `(col, value)` lists
pub fn assemble_rows<T>(shape: (usize, usize), rows: Vec<(usize, Vec<(usize, T)>)>) -> SparseMatrix<T>
where
    T: Copy + Num,
{
    let entries = rows
        .into_iter()
        .flat_map(|(row, cols)| cols.into_iter().map(move |(col, value)| ((row, col), value)))
        .collect();

    assemble(shape, entries)
}
