use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::LinalgError;

/// Square banded matrix in row-major band storage.
///
/// Only the diagonals `-lower..=upper` are stored; entry `(i, j)` lives at
/// `data[i * width + (j + lower - i)]` where `width = lower + upper + 1`.
/// Entries outside the band read as zero and may not be written.
///
/// # Example
///
/// ```
/// use interp_inverse::linalg::BandedMatrix;
///
/// // Tridiagonal [2 1 0; 1 2 1; 0 1 2]
/// let mut a = BandedMatrix::<f64>::zeros(3, 1, 1);
/// for i in 0..3 {
///     a.set(i, i, 2.0);
///     if i + 1 < 3 {
///         a.set(i, i + 1, 1.0);
///         a.set(i + 1, i, 1.0);
///     }
/// }
/// let mut b = [3.0, 4.0, 3.0];
/// a.solve_in_place(&mut b).unwrap();
/// assert!((b[0] - 1.0).abs() < 1e-14);
/// assert!((b[1] - 1.0).abs() < 1e-14);
/// assert!((b[2] - 1.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct BandedMatrix<T> {
    n: usize,
    lower: usize,
    upper: usize,
    data: Vec<T>,
}

impl<T: FloatScalar> BandedMatrix<T> {
    /// An `n × n` zero matrix with the given lower and upper bandwidths.
    pub fn zeros(n: usize, lower: usize, upper: usize) -> Self {
        let width = lower + upper + 1;
        Self {
            n,
            lower,
            upper,
            data: vec![T::zero(); n * width],
        }
    }

    /// Matrix dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    fn in_band(&self, i: usize, j: usize) -> bool {
        j + self.lower >= i && j <= i + self.upper
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        i * (self.lower + self.upper + 1) + (j + self.lower - i)
    }

    /// Entry `(i, j)`; zero outside the band.
    pub fn get(&self, i: usize, j: usize) -> T {
        if self.in_band(i, j) {
            self.data[self.offset(i, j)]
        } else {
            T::zero()
        }
    }

    /// Set entry `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` lies outside the band.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(
            self.in_band(i, j),
            "entry ({i}, {j}) is outside the band (lower {}, upper {})",
            self.lower,
            self.upper
        );
        let k = self.offset(i, j);
        self.data[k] = value;
    }

    /// Solve `A x = b` in place, overwriting `self` with its LU factors and
    /// `rhs` with the solution.
    ///
    /// Gaussian elimination without pivoting, so fill-in stays inside the
    /// band. Stable for diagonally dominant and totally positive matrices,
    /// which covers B-spline collocation matrices.
    ///
    /// Returns [`LinalgError::Singular`] on a zero or non-finite pivot.
    pub fn solve_in_place(&mut self, rhs: &mut [T]) -> Result<(), LinalgError> {
        let n = self.n;
        assert_eq!(rhs.len(), n, "right-hand side length must match matrix size");

        // Forward elimination
        for p in 0..n {
            let pivot = self.get(p, p);
            if pivot == T::zero() || !pivot.is_finite() {
                return Err(LinalgError::Singular);
            }
            let row_end = (p + self.lower).min(n - 1);
            let col_end = (p + self.upper).min(n - 1);
            for i in (p + 1)..=row_end {
                let factor = self.get(i, p) / pivot;
                if factor == T::zero() {
                    continue;
                }
                for j in p..=col_end {
                    let v = self.get(i, j) - factor * self.get(p, j);
                    self.set(i, j, v);
                }
                rhs[i] = rhs[i] - factor * rhs[p];
            }
        }

        // Back substitution
        for i in (0..n).rev() {
            let col_end = (i + self.upper).min(n - 1);
            let mut s = rhs[i];
            for j in (i + 1)..=col_end {
                s = s - self.get(i, j) * rhs[j];
            }
            rhs[i] = s / self.get(i, i);
        }

        Ok(())
    }
}
