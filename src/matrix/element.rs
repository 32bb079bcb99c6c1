//! Element trait for matrix values

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Value type storable in a [`SparseMatrix`](crate::SparseMatrix)
///
/// Arithmetic goes through the checked operations so fixed-width overflow
/// surfaces as an error instead of wrapping. Implemented for every type that
/// satisfies the bounds, in practice the primitive integers.
pub trait Element:
    Copy + Num + CheckedAdd + CheckedSub + CheckedMul + FromStr + Display + Debug + Send + Sync
{
}

impl<T> Element for T where
    T: Copy
        + Num
        + CheckedAdd
        + CheckedSub
        + CheckedMul
        + FromStr
        + Display
        + Debug
        + Send
        + Sync
{
}
