//! Text format codec
//!
//! The format is line oriented:
//!
//! ```text
//! rows=<rows>
//! cols=<cols>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Decoding drops zero-valued entries and lets the last nonzero occurrence of
//! a coordinate win. Encoding emits entries in ascending `(row, col)` order so
//! output is byte-for-byte reproducible.

mod file;
mod parse;

use std::fmt;

use num_traits::Zero;

use crate::error::Result;
use crate::matrix::{Config, Element, SparseMatrix};

pub use file::{load, load_with_config, save};

/// Decodes a matrix from text using the default configuration
pub fn decode<T: Element>(text: &str) -> Result<SparseMatrix<T>> {
    decode_with_config(text, &Config::default())
}

/// Decodes a matrix from text
///
/// Fails with [`Error::Format`](crate::Error::Format) on a missing or malformed
/// header, on any non-blank line that is not a three-integer tuple, and, under
/// [`BoundsPolicy::Strict`](crate::BoundsPolicy::Strict), on coordinates
/// outside the declared shape.
pub fn decode_with_config<T: Element>(text: &str, config: &Config) -> Result<SparseMatrix<T>> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let n_rows = parse::header(lines.next(), 1, "rows")?;
    let n_cols = parse::header(lines.next(), 2, "cols")?;

    let mut matrix = SparseMatrix::new(n_rows, n_cols);

    for (line_no, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let (row, col, value) = parse::entry::<T>(line_no, line)?;

        if config.bounds.is_strict() && (row >= n_rows || col >= n_cols) {
            return Err(crate::Error::format(
                line_no,
                line,
                format!("coordinate ({}, {}) outside {}x{} matrix", row, col, n_rows, n_cols),
            ));
        }

        // Zero lines are dropped before they can touch the map
        if !value.is_zero() {
            matrix.set(row, col, value);
        }
    }

    Ok(matrix)
}

/// Encodes a matrix into its text form
pub fn encode<T: fmt::Display + Zero>(matrix: &SparseMatrix<T>) -> String {
    let mut out = String::with_capacity(16 + matrix.nnz() * 16);
    // Writing into a String cannot fail
    let _ = write_matrix(&mut out, matrix);
    out
}

/// Writes the text form of `matrix` into any formatter sink
pub fn write_matrix<W, T>(out: &mut W, matrix: &SparseMatrix<T>) -> fmt::Result
where
    W: fmt::Write,
    T: fmt::Display + Zero,
{
    writeln!(out, "rows={}", matrix.n_rows())?;
    writeln!(out, "cols={}", matrix.n_cols())?;

    for (row, col, value) in matrix.iter() {
        if value.is_zero() {
            continue;
        }
        writeln!(out, "({}, {}, {})", row, col, value)?;
    }

    Ok(())
}
