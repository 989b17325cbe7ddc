//! # interp-inverse
//!
//! Numerical inversion of sampled monotonic functions, no-std compatible
//! (with `alloc`). Sample `f` on a domain, check that the samples are
//! distinct and monotonic, and get back an interpolant of `f⁻¹` over the
//! sampled range.
//!
//! ## Quick start
//!
//! ```
//! use interp_inverse::{invert_fn, Kind};
//!
//! // Invert a cubic sampled on integers.
//! let inv = invert_fn(|x: f64| x * x * x, &[-3, -2, -1, 0, 1, 2, 3], Kind::Linear).unwrap();
//! assert!((inv.eval(8.0).unwrap() - 2.0).abs() < 1e-14);
//! assert_eq!(inv.domain(), (-27.0, 27.0));
//!
//! // Out-of-range queries are refused rather than silently extrapolated.
//! assert!(inv.eval(30.0).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`invert`](mod@invert): [`invert`](fn@invert) / [`invert_fn`] and the
//!   resulting [`Inverse`]. Forward functions are called per element
//!   ([`Elementwise`]) or once on the whole domain ([`Vectorized`]).
//!   Rejections are reported through [`InvertError`].
//!
//! - [`interp`]: 1-D interpolation backend. [`Interp1d`] selects an
//!   algorithm by [`Kind`] (`linear`, `nearest`, `zero`, `slinear`,
//!   `quadratic`, `cubic`, `previous`, `next`) and enforces a [`Bounds`]
//!   policy. [`interp::BSpline`] fits interpolating B-splines of degree 0
//!   to 3 with not-a-knot end conditions and evaluates them anywhere.
//!
//! - [`linalg`]: Band matrix storage and elimination used by the spline
//!   collocation solve.
//!
//! - [`sample`]: Numeric coercion. Primitive integers and floats are
//!   numbers; [`Value`] carries heterogeneous data that may not be.
//!
//! - [`traits`]: Element traits:
//!   - [`Scalar`]: `Copy + PartialEq + Debug + Zero + One + Num`
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), used everywhere
//!     interpolation happens
//!
//! ## Logging
//!
//! Rejections and successful inversions are reported at `debug` level and
//! extrapolated table lookups at `trace` level through the [`log`] facade.
//! Install any logger to see them.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | no       | Pure-Rust software float fallback for `no_std` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod interp;
pub mod invert;
pub mod linalg;
pub mod sample;
pub mod traits;

pub use interp::{Bounds, Interp1d, InterpError, Kind};
pub use invert::{
    invert, invert_fn, Elementwise, Forward, Inverse, InvertError, InvertSettings, Vectorized,
    Violation,
};
pub use sample::{Sample, Value};
pub use traits::{FloatScalar, Scalar};
