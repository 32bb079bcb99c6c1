//! Conversions between [`SparseMatrix`] and `sprs` matrices

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::SparseMatrix;
use crate::utils::exclusive_scan;

/// Converts to an `sprs` CSR matrix
///
/// Returns `None` when the matrix holds entries outside its declared shape,
/// which CSR storage cannot represent.
pub fn to_sprs<T>(matrix: &SparseMatrix<T>) -> Option<CsMat<T>>
where
    T: Copy + Num + Default,
{
    if matrix.out_of_bounds().next().is_some() {
        return None;
    }

    let mut row_counts = vec![0; matrix.n_rows()];
    for (row, _, _) in matrix.iter() {
        row_counts[row] += 1;
    }

    // Iteration is row-major, so columns come out sorted within each row
    let indptr = exclusive_scan(&row_counts);
    let indices = matrix.iter().map(|(_, col, _)| col).collect();
    let data = matrix.iter().map(|(_, _, &value)| value).collect();

    Some(CsMat::new(
        (matrix.n_rows(), matrix.n_cols()),
        indptr,
        indices,
        data,
    ))
}

/// Converts an `sprs` matrix (CSR or CSC) into a [`SparseMatrix`]
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> SparseMatrix<T>
where
    T: Copy + Num,
{
    let (n_rows, n_cols) = matrix.shape();
    SparseMatrix::from_triplets(
        n_rows,
        n_cols,
        matrix.iter().map(|(&value, (row, col))| (row, col, value)),
    )
}
