use alloc::vec::Vec;

use crate::sample::Sample;

/// A forward function sampled over the whole domain.
///
/// Implemented by [`Elementwise`] (one call per domain point) and
/// [`Vectorized`] (one call on the entire domain). The output element type
/// is any [`Sample`], so a function may report non-numeric results.
pub trait Forward<T> {
    /// Element type produced by the function.
    type Output: Sample;

    /// Evaluate the function at every point of `xs`, in order.
    fn sample(&mut self, xs: &[T]) -> Vec<Self::Output>;
}

/// Calls the wrapped function once per domain point.
///
/// ```
/// use interp_inverse::invert::{Elementwise, Forward};
///
/// let mut f = Elementwise(|x: f64| 2.0 * x);
/// assert_eq!(f.sample(&[1.0, 2.0]), vec![2.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Elementwise<F>(pub F);

impl<T, R, F> Forward<T> for Elementwise<F>
where
    T: Copy,
    R: Sample,
    F: FnMut(T) -> R,
{
    type Output = R;

    fn sample(&mut self, xs: &[T]) -> Vec<R> {
        xs.iter().map(|&x| (self.0)(x)).collect()
    }
}

/// Calls the wrapped function once with the entire domain; it must return
/// one output per input.
///
/// ```
/// use interp_inverse::invert::{Forward, Vectorized};
///
/// let mut f = Vectorized(|xs: &[f64]| xs.iter().map(|x| x + 1.0).collect::<Vec<_>>());
/// assert_eq!(f.sample(&[1.0, 2.0]), vec![2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vectorized<F>(pub F);

impl<T, R, F> Forward<T> for Vectorized<F>
where
    R: Sample,
    F: FnMut(&[T]) -> Vec<R>,
{
    type Output = R;

    fn sample(&mut self, xs: &[T]) -> Vec<R> {
        (self.0)(xs)
    }
}
