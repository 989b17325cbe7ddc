//! Banded linear systems, as produced by B-spline collocation.

mod banded;


pub use banded::BandedMatrix;

/// Errors from linear algebra operations.
///
/// ```
/// use interp_inverse::linalg::{BandedMatrix, LinalgError};
///
/// let mut a = BandedMatrix::<f64>::zeros(2, 1, 1);
/// a.set(0, 1, 1.0);
/// a.set(1, 0, 1.0);
/// let mut b = [1.0, 1.0];
/// assert_eq!(a.solve_in_place(&mut b).unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// A zero or non-finite pivot was encountered.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
