//! One-dimensional interpolation: linear, step (nearest, previous, next)
//! and interpolating B-splines of degree 0 through 3.
//!
//! The building blocks ([`LinearInterp`], [`StepInterp`], [`BSpline`]) are
//! constructed from strictly increasing knots and evaluate anywhere,
//! extrapolating from the boundary segment. [`Interp1d`] sits on top: it
//! accepts nodes in any order, picks the algorithm from a [`Kind`] once at
//! construction, and applies a [`Bounds`] policy to queries outside the node
//! range (by default it refuses them).
//!
//! # Examples
//!
//! ```
//! use interp_inverse::interp::{Bounds, Interp1d, InterpError, Kind};
//!
//! let interp = Interp1d::new(&[0.0_f64, 1.0, 2.0], &[0.0, 10.0, 20.0], Kind::Linear, Bounds::Error)
//!     .unwrap();
//! assert!((interp.eval(0.5).unwrap() - 5.0).abs() < 1e-14);
//! assert_eq!(interp.eval(3.0).unwrap_err(), InterpError::AboveRange);
//! ```

mod bspline;
mod kind;
mod linear;
mod step;
mod table;

#[cfg(test)]
mod tests;

pub use bspline::{BSpline, MAX_DEGREE};
pub use kind::{Kind, ParseKindError};
pub use linear::LinearInterp;
pub use step::{StepInterp, StepRule};
pub use table::{Bounds, Interp1d};

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::linalg::LinalgError;
use crate::traits::FloatScalar;

/// Errors from interpolant construction and bounded evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Not enough data points for the interpolation method.
    TooFewPoints,
    /// The knots are not strictly increasing (repeated or `NaN` knots).
    NotSorted,
    /// Knots and values have different lengths.
    LengthMismatch,
    /// B-spline degree above [`MAX_DEGREE`].
    UnsupportedDegree,
    /// The collocation system could not be solved.
    Singular,
    /// Query lies below the interpolation range.
    BelowRange,
    /// Query lies above the interpolation range.
    AboveRange,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::NotSorted => write!(f, "x values must be strictly increasing"),
            InterpError::LengthMismatch => write!(f, "xs and ys must have the same length"),
            InterpError::UnsupportedDegree => {
                write!(f, "spline degree must be at most {MAX_DEGREE}")
            }
            InterpError::Singular => write!(f, "spline collocation matrix is singular"),
            InterpError::BelowRange => write!(f, "a query value is below the interpolation range"),
            InterpError::AboveRange => write!(f, "a query value is above the interpolation range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

impl From<LinalgError> for InterpError {
    fn from(err: LinalgError) -> Self {
        match err {
            LinalgError::Singular => InterpError::Singular,
        }
    }
}

/// Validate that a slice is strictly increasing. `NaN` fails.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate_sorted<T: FloatScalar>(xs: &[T]) -> Result<(), InterpError> {
    for i in 1..xs.len() {
        if !(xs[i] > xs[i - 1]) {
            return Err(InterpError::NotSorted);
        }
    }
    if xs.iter().any(|x| x.is_nan()) {
        return Err(InterpError::NotSorted);
    }
    Ok(())
}

/// Binary search for the interval containing `x` in a sorted slice.
///
/// Returns index `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, xs.len() - 2]` for extrapolation beyond boundaries.
fn find_interval<T: FloatScalar>(xs: &[T], x: T) -> usize {
    debug_assert!(xs.len() >= 2);
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if x < xs[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo
}

/// Reorder `(nodes, values)` pairs so the nodes ascend.
///
/// The sort is stable. Ties keep their relative order and, like `NaN`
/// nodes (which leave the input untouched), are left for
/// [`validate_sorted`] to reject.
fn sort_pairs<T: FloatScalar>(nodes: &[T], values: &[T]) -> (Vec<T>, Vec<T>) {
    debug_assert_eq!(nodes.len(), values.len());
    if nodes.iter().any(|x| x.is_nan()) || nodes.windows(2).all(|w| w[0] <= w[1]) {
        return (nodes.to_vec(), values.to_vec());
    }
    if nodes.windows(2).all(|w| w[0] > w[1]) {
        return (
            nodes.iter().rev().copied().collect(),
            values.iter().rev().copied().collect(),
        );
    }
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| nodes[a].partial_cmp(&nodes[b]).unwrap_or(Ordering::Equal));
    (
        order.iter().map(|&i| nodes[i]).collect(),
        order.iter().map(|&i| values[i]).collect(),
    )
}
