//! Arithmetic engine
//!
//! Every operation takes two borrowed operands and returns a freshly
//! assembled matrix. Shape checks run before any work is done, so a failed
//! call never produces a partial result.

pub mod assembly;
pub mod elementwise;
pub mod multiply;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::matrix::{Config, Element, SparseMatrix};

pub use assembly::{assemble, assemble_rows};
pub use elementwise::{add, subtract};
pub use multiply::{multiply, multiply_with_config};

/// Binary matrix operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Entry-wise sum of equal-shape operands
    Add,
    /// Entry-wise difference of equal-shape operands
    Subtract,
    /// Matrix product, `A.cols == B.rows`
    Multiply,
}

impl Operation {
    /// All supported operations
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "*" => Ok(Operation::Multiply),
            other => Err(Error::UnknownOperation(other.to_string())),
        }
    }
}

/// Applies `op` to `a` and `b` with the default configuration
pub fn compute<T: Element>(
    op: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    compute_with_config(op, a, b, &Config::default())
}

/// Applies `op` to `a` and `b`
pub fn compute_with_config<T: Element>(
    op: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    config: &Config,
) -> Result<SparseMatrix<T>> {
    match op {
        Operation::Add => add(a, b),
        Operation::Subtract => subtract(a, b),
        Operation::Multiply => multiply_with_config(a, b, config),
    }
}
