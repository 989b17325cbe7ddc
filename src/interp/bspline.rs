use alloc::vec::Vec;

use crate::linalg::BandedMatrix;
use crate::traits::FloatScalar;

use super::{validate_sorted, InterpError};

/// Highest supported B-spline degree.
pub const MAX_DEGREE: usize = 3;

/// B-spline curve in knot/coefficient/degree form.
///
/// `S(x) = Σ_j c_j · B_{j,k}(x)` over the knot vector `t`, with
/// `t.len() == c.len() + k + 1`. Evaluation uses de Boor's algorithm on the
/// knot span containing `x`; outside the base interval `[t_k, t_n]` the
/// boundary polynomial pieces are continued, so [`eval`](Self::eval) never
/// fails.
///
/// Interpolating splines are built by [`interpolate`](Self::interpolate)
/// (degree 0 to 3) or [`fit`](Self::fit) (cubic). The knot placement
/// follows the usual conventions:
///
/// - degree 0: knots at the data, value held on `[x_i, x_{i+1})`
/// - degree 1: knots at the data, piecewise linear
/// - degree 2: knots at the midpoints between data, omitting the first and
///   last midpoint
/// - degree 3: not-a-knot, interior knots at `x_2 … x_{n-3}`
///
/// # Example
///
/// ```
/// use interp_inverse::interp::BSpline;
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
/// let ys = xs.map(|x| x * x * x);
/// let spline = BSpline::fit(&xs, &ys).unwrap();
///
/// // Not-a-knot cubic reproduces cubic data exactly, including outside
/// // the knots.
/// assert!((spline.eval(2.5) - 15.625).abs() < 1e-10);
/// assert!((spline.eval(5.0) - 125.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BSpline<T> {
    knots: Vec<T>,
    coeffs: Vec<T>,
    degree: usize,
}

impl<T: FloatScalar> BSpline<T> {
    /// Assemble a B-spline from an existing representation.
    ///
    /// Requires `knots.len() == coeffs.len() + degree + 1`, non-decreasing
    /// knots with a non-empty base interval, and `degree <= MAX_DEGREE`.
    pub fn new(knots: Vec<T>, coeffs: Vec<T>, degree: usize) -> Result<Self, InterpError> {
        if degree > MAX_DEGREE {
            return Err(InterpError::UnsupportedDegree);
        }
        if coeffs.len() <= degree {
            return Err(InterpError::TooFewPoints);
        }
        if knots.len() != coeffs.len() + degree + 1 {
            return Err(InterpError::LengthMismatch);
        }
        if knots.iter().any(|t| t.is_nan()) || knots.windows(2).any(|w| w[1] < w[0]) {
            return Err(InterpError::NotSorted);
        }
        if knots[degree] >= knots[coeffs.len()] {
            return Err(InterpError::NotSorted);
        }
        Ok(Self {
            knots,
            coeffs,
            degree,
        })
    }

    /// Interpolating B-spline of the given degree through `(xs[i], ys[i])`.
    ///
    /// `xs` must be strictly increasing and contain at least `degree + 1`
    /// points. Degrees 0 and 1 use the data as coefficients directly; higher
    /// degrees solve the banded collocation system.
    pub fn interpolate(xs: &[T], ys: &[T], degree: usize) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        if degree > MAX_DEGREE {
            return Err(InterpError::UnsupportedDegree);
        }
        if xs.len() <= degree {
            return Err(InterpError::TooFewPoints);
        }
        validate_sorted(xs)?;

        let knots = interpolation_knots(xs, degree);
        if degree <= 1 {
            return Ok(Self {
                knots,
                coeffs: ys.to_vec(),
                degree,
            });
        }

        // Collocation: row i holds B_{l-k..=l}(x_i). The Schoenberg-Whitney
        // placement keeps every row inside bandwidth k on both sides.
        let n = xs.len();
        let mut a = BandedMatrix::zeros(n, degree, degree);
        let mut basis = [T::zero(); MAX_DEGREE + 1];
        for (i, &x) in xs.iter().enumerate() {
            let l = span(&knots, degree, n, x);
            basis_funs(&knots, degree, l, x, &mut basis);
            for r in 0..=degree {
                a.set(i, l - degree + r, basis[r]);
            }
        }
        let mut coeffs = ys.to_vec();
        a.solve_in_place(&mut coeffs)?;

        Ok(Self {
            knots,
            coeffs,
            degree,
        })
    }

    /// Interpolating cubic spline through `(xs[i], ys[i])`.
    ///
    /// Equivalent to `interpolate(xs, ys, 3)`: zero smoothing, not-a-knot
    /// end conditions. Requires at least 4 points.
    pub fn fit(xs: &[T], ys: &[T]) -> Result<Self, InterpError> {
        Self::interpolate(xs, ys, 3)
    }

    /// Evaluate the spline at `x`, extrapolating outside the base interval.
    pub fn eval(&self, x: T) -> T {
        let k = self.degree;
        let n = self.coeffs.len();
        let t = &self.knots;
        let l = span(t, k, n, x);

        // de Boor: d_j = c_{j+l-k}, then k rounds of convex combination.
        let mut d = [T::zero(); MAX_DEGREE + 1];
        d[..=k].copy_from_slice(&self.coeffs[l - k..=l]);
        for r in 1..=k {
            for j in (r..=k).rev() {
                let i = j + l - k;
                let alpha = (x - t[i]) / (t[i + k + 1 - r] - t[i]);
                d[j] = (T::one() - alpha) * d[j - 1] + alpha * d[j];
            }
        }
        d[k]
    }

    /// The base interval `[t_k, t_n]` on which the spline is defined
    /// without extrapolation.
    pub fn domain(&self) -> (T, T) {
        (self.knots[self.degree], self.knots[self.coeffs.len()])
    }

    /// The knot vector.
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// The B-spline coefficients.
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// The polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }
}

/// Knot vector for interpolation of strictly increasing `xs`.
fn interpolation_knots<T: FloatScalar>(xs: &[T], degree: usize) -> Vec<T> {
    let n = xs.len();
    let first = xs[0];
    let last = xs[n - 1];
    let mut t = Vec::with_capacity(n + degree + 1);
    match degree {
        0 => {
            t.extend_from_slice(xs);
            t.push(last);
        }
        1 => {
            t.push(first);
            t.extend_from_slice(xs);
            t.push(last);
        }
        2 => {
            t.extend_from_slice(&[first; 3]);
            let half = T::half();
            for j in 1..n - 2 {
                t.push((xs[j] + xs[j + 1]) * half);
            }
            t.extend_from_slice(&[last; 3]);
        }
        _ => {
            t.extend(core::iter::repeat(first).take(degree + 1));
            let m = (degree - 1) / 2;
            t.extend_from_slice(&xs[m + 1..n - m - 1]);
            t.extend(core::iter::repeat(last).take(degree + 1));
        }
    }
    debug_assert_eq!(t.len(), n + degree + 1);
    t
}

/// Knot span `l` in `[k, n-1]` with `t[l] <= x < t[l+1]`, clamped to the
/// first and last span outside the base interval.
fn span<T: FloatScalar>(t: &[T], k: usize, n: usize, x: T) -> usize {
    k + t[k + 1..n].partition_point(|&ti| ti <= x)
}

/// Non-zero basis functions `B_{l-k..=l}(x)` into `out[..=k]`
/// (Cox-de Boor, triangular form).
fn basis_funs<T: FloatScalar>(t: &[T], k: usize, l: usize, x: T, out: &mut [T; MAX_DEGREE + 1]) {
    let mut left = [T::zero(); MAX_DEGREE + 1];
    let mut right = [T::zero(); MAX_DEGREE + 1];
    out[0] = T::one();
    for j in 1..=k {
        left[j] = x - t[l + 1 - j];
        right[j] = t[l + j] - x;
        let mut saved = T::zero();
        for r in 0..j {
            let temp = out[r] / (right[r + 1] + left[j - r]);
            out[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        out[j] = saved;
    }
}
