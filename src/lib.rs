//! # sparsemat: sparse integer matrices with a plain-text file format
//!
//! A matrix is a shape `(rows, cols)` plus a map from `(row, col)` to nonzero
//! value. Zero entries are never stored, so every operation keeps results
//! as sparse as its inputs allow.
//!
//! ## Components
//!
//! 1. **Model**: [`SparseMatrix`], ordered on `(row, col)` so iteration and
//!    output are deterministic.
//!
//! 2. **Codec**: [`codec::decode`] / [`codec::encode`] between the text format
//!    and the model, plus the file boundary [`load`] / [`save`].
//!
//! 3. **Arithmetic engine**:
//!    - **Add / Subtract**: equal shapes, visits only stored coordinates
//!    - **Multiply**: `A.cols == B.rows`, B grouped into row buckets,
//!      row-parallel for large operands
//!
//! ## Usage
//!
//! ```
//! use sparsemat::{codec, compute, Operation, SparseMatrix};
//!
//! let a: SparseMatrix = codec::decode("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
//! let b: SparseMatrix = codec::decode("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, -2)\n").unwrap();
//!
//! let c = compute(Operation::Add, &a, &b).unwrap();
//! assert_eq!(codec::encode(&c), "rows=2\ncols=2\n(0, 0, 2)\n");
//! ```
//!
//! Files are handled with [`load`] and [`save`]:
//!
//! ```no_run
//! use sparsemat::{compute, load, save, Operation, SparseMatrix};
//!
//! # fn main() -> sparsemat::Result<()> {
//! let a: SparseMatrix = load("a.txt")?;
//! let b: SparseMatrix = load("b.txt")?;
//! save(&compute(Operation::Multiply, &a, &b)?, "matrix_multiply.txt")?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod utils;

// Re-export primary components
pub use codec::{load, load_with_config, save};
pub use error::{Error, Result};
pub use matrix::{BoundsPolicy, Config, Element, SparseMatrix};
pub use ops::{add, compute, compute_with_config, multiply, multiply_with_config, subtract, Operation};
pub use utils::{from_sprs, to_sprs};

/// Version information for the sparsemat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
