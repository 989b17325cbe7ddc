use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as sample and knot values.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by every interpolant and by the inverter: interpolation needs
/// division, ordering and `NaN` detection. Implemented for `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {
    /// `0.5` in this type.
    #[inline]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl<T: Scalar + Float> FloatScalar for T {}
