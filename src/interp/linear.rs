use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{find_interval, validate_sorted, InterpError};

/// Piecewise linear interpolant.
///
/// Requires at least 2 points. Evaluations outside the knot range extrapolate
/// linearly from the nearest boundary segment.
///
/// # Example
///
/// ```
/// use interp_inverse::interp::LinearInterp;
///
/// let interp = LinearInterp::new(vec![0.0_f64, 1.0, 2.0], vec![0.0, 2.0, 1.0]).unwrap();
/// assert!((interp.eval(0.5) - 1.0).abs() < 1e-14);
/// assert!((interp.eval(3.0) - 0.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterp<T> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: FloatScalar> LinearInterp<T> {
    /// Construct a linear interpolant from sorted knots.
    ///
    /// Returns `InterpError::LengthMismatch` if the lengths differ,
    /// `InterpError::TooFewPoints` for fewer than 2 knots,
    /// `InterpError::NotSorted` if `xs` is not strictly increasing.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&xs)?;
        Ok(Self { xs, ys })
    }

    /// Evaluate the interpolant at `x`.
    pub fn eval(&self, x: T) -> T {
        let i = find_interval(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        // Exact at both knots: t is 0 or 1 there.
        (T::one() - t) * self.ys[i] + t * self.ys[i + 1]
    }

    /// The knot x-values.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The knot y-values.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }
}
