//! Numeric coercion of domain and range samples.
//!
//! The inverter accepts loosely typed input: anything implementing
//! [`Sample`] either is a number or is not. All primitive integer and float
//! types are numbers; [`Value`] covers heterogeneous data where some
//! elements may not be.

use alloc::string::String;
use num_traits::NumCast;

use crate::traits::FloatScalar;

/// An element that may or may not be numeric.
pub trait Sample {
    /// The element as a float of type `T`, or `None` if it is not numeric
    /// or cannot be represented in `T`.
    fn to_scalar<T: FloatScalar>(&self) -> Option<T>;
}

macro_rules! impl_sample_primitive {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_scalar<T: FloatScalar>(&self) -> Option<T> {
                    <T as NumCast>::from(*self)
                }
            }
        )*
    };
}

impl_sample_primitive!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<S: Sample + ?Sized> Sample for &S {
    #[inline]
    fn to_scalar<T: FloatScalar>(&self) -> Option<T> {
        (**self).to_scalar::<T>()
    }
}

/// A dynamically typed sample.
///
/// Only [`Value::Int`] and [`Value::Float`] are numeric. Booleans are not
/// numbers here, matching the usual numeric-array convention.
///
/// ```
/// use interp_inverse::sample::{Sample, Value};
///
/// assert_eq!(Value::Int(3).to_scalar::<f64>(), Some(3.0));
/// assert_eq!(Value::Float(0.5).to_scalar::<f32>(), Some(0.5));
/// assert_eq!(Value::Bool(true).to_scalar::<f64>(), None);
/// assert_eq!(Value::from("a").to_scalar::<f64>(), None);
/// assert_eq!(Value::Missing.to_scalar::<f64>(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer, numeric.
    Int(i64),
    /// Float, numeric (`NaN` included).
    Float(f64),
    /// Boolean, not numeric.
    Bool(bool),
    /// Text, not numeric.
    Text(String),
    /// Absent value, not numeric.
    Missing,
}

impl Value {
    /// Whether this value is a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl Sample for Value {
    fn to_scalar<T: FloatScalar>(&self) -> Option<T> {
        match self {
            Value::Int(v) => v.to_scalar(),
            Value::Float(v) => v.to_scalar(),
            Value::Bool(_) | Value::Text(_) | Value::Missing => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(v: Option<V>) -> Self {
        v.map_or(Value::Missing, Into::into)
    }
}

/// Coerce every element to `T`, reporting the index of the first element
/// that is not numeric.
pub(crate) fn coerce_all<T: FloatScalar, S: Sample>(
    items: &[S],
) -> Result<alloc::vec::Vec<T>, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, s)| s.to_scalar::<T>().ok_or(i))
        .collect()
}
