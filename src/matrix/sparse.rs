//! Coordinate-keyed sparse matrix implementation

use std::collections::BTreeMap;
use std::fmt;

use num_traits::{Num, Zero};

/// A sparse matrix stored as a map from `(row, col)` to nonzero value
///
/// The map is ordered lexicographically on `(row, col)`, so iteration is
/// row-major and every row's entries are contiguous. Zero values are never
/// stored: anything that would write a zero removes the coordinate instead.
///
/// Coordinates are not required to lie inside `n_rows × n_cols`; the decoder
/// accepts out-of-range entries unless configured with
/// [`BoundsPolicy::Strict`](crate::BoundsPolicy::Strict).
#[derive(Clone, PartialEq, Eq)]
pub struct SparseMatrix<T = i64> {
    n_rows: usize,
    n_cols: usize,
    entries: BTreeMap<(usize, usize), T>,
}

impl<T> SparseMatrix<T>
where
    T: Copy + Num,
{
    /// Creates an empty matrix with the given dimensions
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            entries: BTreeMap::new(),
        }
    }

    /// Creates a matrix from `(row, col, value)` triplets
    ///
    /// Later triplets overwrite earlier ones at the same coordinate; a zero
    /// value removes whatever was stored there.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value);
        }
        matrix
    }

    /// Wraps an already-built entry map, dropping any zero values
    pub fn from_entries(
        n_rows: usize,
        n_cols: usize,
        mut entries: BTreeMap<(usize, usize), T>,
    ) -> Self {
        entries.retain(|_, value| !value.is_zero());
        Self {
            n_rows,
            n_cols,
            entries,
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self::from_triplets(n, n, (0..n).map(|i| (i, i, T::one())))
    }

    /// Stores `value` at `(row, col)`, or removes the entry if `value` is zero
    pub(crate) fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Returns the value at `(row, col)`, zero if no entry is stored
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Checks whether a nonzero entry is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }
}

impl<T> SparseMatrix<T> {
    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// The `(rows, cols)` dimension pair
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over stored entries as `(row, col, &value)` in ascending
    /// `(row, col)` order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.entries.iter().map(|(&(row, col), value)| (row, col, value))
    }

    /// Returns an iterator over the non-zero elements in row i
    ///
    /// Each item is a tuple (col, value), in ascending column order
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.entries
            .range((i, 0)..=(i, usize::MAX))
            .map(|(&(_, col), value)| (col, value))
    }

    /// Groups entries by row: one `(row, [(col, value)])` bucket per nonempty row
    pub fn row_buckets(&self) -> Vec<(usize, Vec<(usize, T)>)>
    where
        T: Copy,
    {
        let mut buckets: Vec<(usize, Vec<(usize, T)>)> = Vec::new();
        for (&(row, col), &value) in &self.entries {
            match buckets.last_mut() {
                Some((current, bucket)) if *current == row => bucket.push((col, value)),
                _ => buckets.push((row, vec![(col, value)])),
            }
        }
        buckets
    }

    /// Entries whose coordinates fall outside the declared shape
    pub fn out_of_bounds(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.iter()
            .filter(move |&(row, col, _)| row >= self.n_rows || col >= self.n_cols)
    }

    /// Borrow the underlying entry map
    pub fn entries(&self) -> &BTreeMap<(usize, usize), T> {
        &self.entries
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let mut rows = self.entries.keys().map(|&(row, _)| row).collect::<Vec<_>>();
        rows.dedup();

        // Print a sample of the matrix content
        let max_rows_to_print = 5.min(rows.len());

        if max_rows_to_print > 0 {
            writeln!(f, "  content sample:")?;

            for &row in &rows[..max_rows_to_print] {
                write!(f, "    row {}: ", row)?;
                let in_row = self.row_iter(row).count();
                let max_elements = 5.min(in_row);

                for (col, value) in self.row_iter(row).take(max_elements) {
                    write!(f, "({}, {:?}) ", col, value)?;
                }

                if in_row > max_elements {
                    write!(f, "... ({} more)", in_row - max_elements)?;
                }

                writeln!(f)?;
            }

            if rows.len() > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", rows.len() - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}

impl<T: fmt::Display + Zero> fmt::Display for SparseMatrix<T> {
    /// Renders the matrix in the text file format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::write_matrix(f, self)
    }
}
