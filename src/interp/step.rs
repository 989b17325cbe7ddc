use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{find_interval, validate_sorted, InterpError};

/// Which node a [`StepInterp`] reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRule {
    /// Nearest knot. A query exactly halfway between two knots takes the
    /// lower one.
    Nearest,
    /// Largest knot `<= x`.
    Previous,
    /// Smallest knot `>= x`.
    Next,
}

/// Piecewise constant interpolant.
///
/// Requires at least 1 point. Outside the knot range the boundary value is
/// held. A `NaN` query returns `NaN`.
///
/// # Example
///
/// ```
/// use interp_inverse::interp::{StepInterp, StepRule};
///
/// let xs = vec![0.0_f64, 1.0, 2.0];
/// let ys = vec![10.0, 20.0, 30.0];
/// let prev = StepInterp::new(xs.clone(), ys.clone(), StepRule::Previous).unwrap();
/// let next = StepInterp::new(xs.clone(), ys.clone(), StepRule::Next).unwrap();
/// let near = StepInterp::new(xs, ys, StepRule::Nearest).unwrap();
/// assert_eq!(prev.eval(1.7), 20.0);
/// assert_eq!(next.eval(1.2), 30.0);
/// assert_eq!(near.eval(1.5), 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct StepInterp<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    rule: StepRule,
}

impl<T: FloatScalar> StepInterp<T> {
    /// Construct a step interpolant from sorted knots.
    pub fn new(xs: Vec<T>, ys: Vec<T>, rule: StepRule) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if xs.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(&xs)?;
        Ok(Self { xs, ys, rule })
    }

    /// Evaluate the interpolant at `x`.
    pub fn eval(&self, x: T) -> T {
        if x.is_nan() {
            return T::nan();
        }
        self.ys[self.index(x)]
    }

    fn index(&self, x: T) -> usize {
        let n = self.xs.len();
        match self.rule {
            StepRule::Previous => {
                // Count of knots <= x, minus one; held at 0 below the range.
                self.xs.partition_point(|&k| k <= x).saturating_sub(1)
            }
            StepRule::Next => self.xs.partition_point(|&k| k < x).min(n - 1),
            StepRule::Nearest => {
                if n == 1 {
                    return 0;
                }
                let i = find_interval(&self.xs, x);
                if x - self.xs[i] <= self.xs[i + 1] - x {
                    i
                } else {
                    i + 1
                }
            }
        }
    }

    /// The rule this interpolant applies.
    pub fn rule(&self) -> StepRule {
        self.rule
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
