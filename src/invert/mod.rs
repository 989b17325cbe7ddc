//! Numerical inversion of a sampled monotonic function.
//!
//! [`invert`] samples `f` on a domain `x`, checks that the samples
//! `y = f(x)` are distinct and strictly monotonic in the order of `x`, and
//! builds an interpolant over the swapped pairs `(y, x)`. The returned
//! [`Inverse`] maps a range value back to a domain value and carries the
//! sampled range `[x_min, x_max]` on which it is valid.
//!
//! # Example
//!
//! ```
//! use interp_inverse::invert::{invert_fn, Kind};
//!
//! let xs: Vec<f64> = (0..=20).map(|i| i as f64 * 0.1).collect();
//! let exp_inv = invert_fn(|x: f64| x.exp(), &xs, Kind::Spline).unwrap();
//!
//! assert!((exp_inv.eval(1.0).unwrap() - 0.0).abs() < 1e-12);
//! assert!((exp_inv.eval(3.0).unwrap() - 3.0_f64.ln()).abs() < 1e-4);
//! assert_eq!(exp_inv.x_min(), 1.0);
//! assert!((exp_inv.x_max() - 2.0_f64.exp()).abs() < 1e-12);
//! ```
//!
//! # Calling conventions
//!
//! The forward function is evaluated either once per domain point
//! ([`Elementwise`], the default used by [`invert_fn`]) or once on the
//! whole domain ([`Vectorized`]).
//!
//! # Out-of-range queries
//!
//! Table kinds follow [`Bounds`]: by default a query outside
//! `[x_min, x_max]` fails with [`InterpError::BelowRange`] or
//! [`InterpError::AboveRange`]. [`Kind::Spline`] always extrapolates with
//! its boundary polynomials and never fails on evaluation.

mod forward;


pub use forward::{Elementwise, Forward, Vectorized};

pub use crate::interp::{Bounds, InterpError, Kind};

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::interp::{BSpline, Interp1d};
use crate::sample::{coerce_all, Sample};
use crate::traits::FloatScalar;

/// Why sampled data does not describe an invertible function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Two domain points map to the same range value.
    Duplicate,
    /// Range values are not strictly monotonic in domain order.
    NotMonotonic,
}

/// Errors from [`invert`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvertError {
    /// Domain element at `index` is not numeric.
    DomainType { index: usize },
    /// Forward function output at `index` is not numeric.
    RangeType { index: usize },
    /// A vectorized forward function returned the wrong number of samples.
    LengthMismatch { expected: usize, actual: usize },
    /// The sampled function has no well-defined inverse.
    NonInvertible(Violation),
    /// The interpolant could not be built over the samples.
    Interp(InterpError),
}

impl core::fmt::Display for InvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvertError::DomainType { index } => {
                write!(f, "input domain is not numeric (element {index})")
            }
            InvertError::RangeType { index } => {
                write!(f, "input function is not numeric (output {index})")
            }
            InvertError::LengthMismatch { expected, actual } => write!(
                f,
                "vectorized function returned {actual} samples for {expected} inputs"
            ),
            InvertError::NonInvertible(Violation::Duplicate) => {
                write!(f, "non-invertible function: repeated range values")
            }
            InvertError::NonInvertible(Violation::NotMonotonic) => {
                write!(f, "non-invertible function: range values are not monotonic")
            }
            InvertError::Interp(e) => write!(f, "cannot build inverse: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvertError::Interp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InterpError> for InvertError {
    fn from(err: InterpError) -> Self {
        InvertError::Interp(err)
    }
}

/// Settings for [`invert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvertSettings {
    /// Interpolation algorithm for the inverse.
    pub kind: Kind,
    /// Out-of-range policy for table kinds. Ignored by [`Kind::Spline`],
    /// which always extrapolates.
    pub bounds: Bounds,
}

impl InvertSettings {
    /// Settings with the given kind and the default bounds policy.
    pub fn with_kind(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// The interpolant behind an [`Inverse`].
#[derive(Debug, Clone)]
pub enum Interpolant<T> {
    /// Table interpolator with a bounds policy.
    Table(Interp1d<T>),
    /// Fitted cubic spline, evaluated with extrapolation.
    Spline(BSpline<T>),
}

impl<T: FloatScalar> Interpolant<T> {
    /// Evaluate at `y`.
    pub fn eval(&self, y: T) -> Result<T, InterpError> {
        match self {
            Interpolant::Table(t) => t.eval(y),
            Interpolant::Spline(s) => Ok(s.eval(y)),
        }
    }
}

/// Approximate inverse of a sampled function.
///
/// Immutable once built; `eval` takes `&self`, so one inverse can serve any
/// number of callers.
#[derive(Debug, Clone)]
pub struct Inverse<T> {
    interpolant: Interpolant<T>,
    kind: Kind,
    x_min: T,
    x_max: T,
}

impl<T: FloatScalar> Inverse<T> {
    /// Domain value whose image is `y`.
    pub fn eval(&self, y: T) -> Result<T, InterpError> {
        self.interpolant.eval(y)
    }

    /// [`eval`](Self::eval) at every point of `ys`; stops at the first
    /// failure.
    pub fn eval_many(&self, ys: &[T]) -> Result<Vec<T>, InterpError> {
        ys.iter().map(|&y| self.eval(y)).collect()
    }

    /// Smallest sampled range value, the lower bound of valid input.
    pub fn x_min(&self) -> T {
        self.x_min
    }

    /// Largest sampled range value, the upper bound of valid input.
    pub fn x_max(&self) -> T {
        self.x_max
    }

    /// `(x_min, x_max)`.
    pub fn domain(&self) -> (T, T) {
        (self.x_min, self.x_max)
    }

    /// Whether `y` lies in `[x_min, x_max]`.
    pub fn contains(&self, y: T) -> bool {
        y >= self.x_min && y <= self.x_max
    }

    /// Interpolation algorithm in use.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The underlying interpolant.
    pub fn interpolant(&self) -> &Interpolant<T> {
        &self.interpolant
    }
}

/// Numerically invert `f` over the domain `x`.
///
/// # Errors
///
/// Checked in this order:
///
/// - [`InvertError::DomainType`] if an element of `x` is not numeric
/// - [`InvertError::LengthMismatch`] if a vectorized `f` returns the wrong
///   number of samples
/// - [`InvertError::RangeType`] if an output of `f` is not numeric
/// - [`InvertError::NonInvertible`] with [`Violation::Duplicate`] if two
///   outputs coincide, then with [`Violation::NotMonotonic`] if the outputs
///   are not strictly monotonic in the order of `x`
/// - [`InvertError::Interp`] if there are too few points for the kind
///
/// # Example
///
/// ```
/// use interp_inverse::invert::{invert, InvertSettings, Kind, Vectorized};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let neg = Vectorized(|xs: &[f64]| xs.iter().map(|x| -x).collect::<Vec<_>>());
/// let inv = invert(neg, &xs, &InvertSettings::with_kind(Kind::Linear)).unwrap();
/// assert!((inv.eval(-2.0).unwrap() - 2.0).abs() < 1e-14);
/// assert_eq!(inv.domain(), (-3.0, 0.0));
/// ```
pub fn invert<T, V, F>(mut f: F, x: &[V], settings: &InvertSettings) -> Result<Inverse<T>, InvertError>
where
    T: FloatScalar,
    V: Sample,
    F: Forward<T>,
{
    let xs: Vec<T> = coerce_all(x).map_err(|index| {
        log::debug!("rejecting domain: element {index} is not numeric");
        InvertError::DomainType { index }
    })?;

    let raw = f.sample(&xs);
    if raw.len() != xs.len() {
        log::debug!(
            "rejecting range: {} samples for {} domain points",
            raw.len(),
            xs.len()
        );
        return Err(InvertError::LengthMismatch {
            expected: xs.len(),
            actual: raw.len(),
        });
    }
    let ys: Vec<T> = coerce_all(&raw).map_err(|index| {
        log::debug!("rejecting range: output {index} is not numeric");
        InvertError::RangeType { index }
    })?;

    check_invertible(&ys).map_err(|violation| {
        log::debug!("rejecting range: {violation:?}");
        InvertError::NonInvertible(violation)
    })?;

    let interpolant = match settings.kind {
        Kind::Spline => {
            let (nodes, values) = ascending(&ys, &xs);
            Interpolant::Spline(BSpline::fit(&nodes, &values)?)
        }
        kind => Interpolant::Table(Interp1d::new(&ys, &xs, kind, settings.bounds)?),
    };

    // Monotone, so the extremes sit at the two ends.
    let (x_min, x_max) = if ys[0] <= ys[ys.len() - 1] {
        (ys[0], ys[ys.len() - 1])
    } else {
        (ys[ys.len() - 1], ys[0])
    };

    log::debug!(
        "inverted {} samples with {} interpolation over [{:?}, {:?}]",
        xs.len(),
        settings.kind,
        x_min,
        x_max
    );

    Ok(Inverse {
        interpolant,
        kind: settings.kind,
        x_min,
        x_max,
    })
}

/// [`invert`] with an elementwise `f`, the given kind and default bounds.
///
/// ```
/// use interp_inverse::invert::{invert_fn, InterpError, Kind};
///
/// let cube_inv = invert_fn(|x: f64| x * x * x, &[-2, -1, 0, 1, 2], Kind::Linear).unwrap();
/// assert!((cube_inv.eval(1.0).unwrap() - 1.0).abs() < 1e-14);
/// assert_eq!(cube_inv.eval(9.0).unwrap_err(), InterpError::AboveRange);
/// ```
pub fn invert_fn<T, V, R, F>(f: F, x: &[V], kind: Kind) -> Result<Inverse<T>, InvertError>
where
    T: FloatScalar,
    V: Sample,
    R: Sample,
    F: FnMut(T) -> R,
{
    invert(Elementwise(f), x, &InvertSettings::with_kind(kind))
}

/// Distinct values, then strict monotonicity in the given order.
///
/// `NaN` is unordered and fails the monotonicity test outright. Otherwise
/// distinctness is decided on a sorted copy so it is reported first even
/// when the sequence is also out of order. Equality with the ascending or
/// descending sort of distinct values is the same as every consecutive pair
/// rising, or every pair falling.
fn check_invertible<T: FloatScalar>(ys: &[T]) -> Result<(), Violation> {
    if ys.iter().any(|y| y.is_nan()) {
        return Err(Violation::NotMonotonic);
    }
    let mut sorted = ys.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(Violation::Duplicate);
    }

    let increasing = ys.windows(2).all(|w| w[0] < w[1]);
    let decreasing = ys.windows(2).all(|w| w[0] > w[1]);
    if !(increasing || decreasing) {
        return Err(Violation::NotMonotonic);
    }
    Ok(())
}

/// `(nodes, values)` with the nodes ascending. Expects monotone nodes.
fn ascending<T: FloatScalar>(nodes: &[T], values: &[T]) -> (Vec<T>, Vec<T>) {
    if nodes.len() > 1 && nodes[0] > nodes[nodes.len() - 1] {
        (
            nodes.iter().rev().copied().collect(),
            values.iter().rev().copied().collect(),
        )
    } else {
        (nodes.to_vec(), values.to_vec())
    }
}
