use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::{
    sort_pairs, validate_sorted, BSpline, InterpError, Kind, LinearInterp, StepInterp, StepRule,
};

/// What an [`Interp1d`] does with a query outside its node range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bounds {
    /// Refuse with [`InterpError::BelowRange`] or [`InterpError::AboveRange`].
    #[default]
    Error,
    /// Continue the boundary piece: linear and B-spline kinds extend their
    /// end polynomials, step kinds hold the boundary value.
    Extrapolate,
}

#[derive(Debug, Clone)]
enum Table<T> {
    Linear(LinearInterp<T>),
    Step(StepInterp<T>),
    Spline(BSpline<T>),
}

/// Table-based 1-D interpolator over `(node, value)` pairs.
///
/// Nodes may arrive in any order; they are sorted (values permuted
/// alongside) and must then be distinct. The algorithm is chosen once from
/// [`Kind`]; `Kind::Spline` builds the same cubic as `Kind::Cubic`, the
/// difference being only that this table applies its [`Bounds`] policy.
///
/// # Example
///
/// ```
/// use interp_inverse::interp::{Bounds, Interp1d, InterpError, Kind};
///
/// // Decreasing nodes are fine.
/// let nodes = [4.0_f64, 2.0, 0.0];
/// let values = [0.0, 1.0, 2.0];
///
/// let strict = Interp1d::new(&nodes, &values, Kind::Linear, Bounds::Error).unwrap();
/// assert!((strict.eval(3.0).unwrap() - 0.5).abs() < 1e-14);
/// assert_eq!(strict.eval(-1.0).unwrap_err(), InterpError::BelowRange);
///
/// let loose = Interp1d::new(&nodes, &values, Kind::Linear, Bounds::Extrapolate).unwrap();
/// assert!((loose.eval(-1.0).unwrap() - 2.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct Interp1d<T> {
    table: Table<T>,
    kind: Kind,
    bounds: Bounds,
    lo: T,
    hi: T,
}

impl<T: FloatScalar> Interp1d<T> {
    /// Build the interpolator.
    ///
    /// # Errors
    ///
    /// - [`InterpError::LengthMismatch`] if the slices differ in length
    /// - [`InterpError::TooFewPoints`] below [`Kind::min_points`]
    /// - [`InterpError::NotSorted`] if nodes repeat or contain `NaN`
    /// - [`InterpError::Singular`] if a spline collocation solve breaks down
    pub fn new(nodes: &[T], values: &[T], kind: Kind, bounds: Bounds) -> Result<Self, InterpError> {
        if nodes.len() != values.len() {
            return Err(InterpError::LengthMismatch);
        }
        if nodes.len() < kind.min_points() {
            return Err(InterpError::TooFewPoints);
        }
        let (xs, ys) = sort_pairs(nodes, values);
        validate_sorted(&xs)?;
        let lo = xs[0];
        let hi = xs[xs.len() - 1];

        let table = match kind {
            Kind::Linear => Table::Linear(LinearInterp::new(xs, ys)?),
            Kind::Nearest => Table::Step(StepInterp::new(xs, ys, StepRule::Nearest)?),
            Kind::Previous => Table::Step(StepInterp::new(xs, ys, StepRule::Previous)?),
            Kind::Next => Table::Step(StepInterp::new(xs, ys, StepRule::Next)?),
            Kind::Zero => Table::Spline(BSpline::interpolate(&xs, &ys, 0)?),
            Kind::Slinear => Table::Spline(BSpline::interpolate(&xs, &ys, 1)?),
            Kind::Quadratic => Table::Spline(BSpline::interpolate(&xs, &ys, 2)?),
            Kind::Cubic | Kind::Spline => Table::Spline(BSpline::interpolate(&xs, &ys, 3)?),
        };

        Ok(Self {
            table,
            kind,
            bounds,
            lo,
            hi,
        })
    }

    /// Evaluate at `x`, applying the bounds policy.
    pub fn eval(&self, x: T) -> Result<T, InterpError> {
        if x < self.lo || x > self.hi {
            match self.bounds {
                Bounds::Error if x < self.lo => return Err(InterpError::BelowRange),
                Bounds::Error => return Err(InterpError::AboveRange),
                Bounds::Extrapolate => {
                    log::trace!(
                        "extrapolating {} table: query {:?} outside [{:?}, {:?}]",
                        self.kind,
                        x,
                        self.lo,
                        self.hi
                    );
                }
            }
        }
        Ok(self.eval_unchecked(x))
    }

    /// Evaluate at every point of `xs`; fails on the first out-of-range
    /// query under [`Bounds::Error`].
    pub fn eval_many(&self, xs: &[T]) -> Result<Vec<T>, InterpError> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    fn eval_unchecked(&self, x: T) -> T {
        match &self.table {
            Table::Linear(t) => t.eval(x),
            Table::Step(t) => t.eval(x),
            Table::Spline(t) => t.eval(x),
        }
    }

    /// The algorithm this table was built with.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The out-of-range policy.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Smallest and largest node.
    pub fn domain(&self) -> (T, T) {
        (self.lo, self.hi)
    }
}
