use core::fmt;
use core::str::FromStr;

/// Interpolation algorithm, selected by name.
///
/// | kind        | algorithm                                          |
/// |-------------|----------------------------------------------------|
/// | `linear`    | piecewise linear                                   |
/// | `spline`    | cubic interpolating B-spline, extrapolating        |
/// | `nearest`   | value of the nearest node (midpoints round down)   |
/// | `zero`      | degree-0 B-spline: piecewise constant, left-closed |
/// | `slinear`   | degree-1 B-spline                                  |
/// | `quadratic` | degree-2 interpolating B-spline                    |
/// | `cubic`     | degree-3 interpolating B-spline (not-a-knot)       |
/// | `previous`  | value of the largest node `<= q`                   |
/// | `next`      | value of the smallest node `>= q`                  |
///
/// ```
/// use interp_inverse::interp::Kind;
///
/// let kind: Kind = "quadratic".parse().unwrap();
/// assert_eq!(kind, Kind::Quadratic);
/// assert_eq!(kind.to_string(), "quadratic");
/// assert_eq!(Kind::default(), Kind::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    #[default]
    Linear,
    Spline,
    Nearest,
    Zero,
    Slinear,
    Quadratic,
    Cubic,
    Previous,
    Next,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 9] = [
        Kind::Linear,
        Kind::Spline,
        Kind::Nearest,
        Kind::Zero,
        Kind::Slinear,
        Kind::Quadratic,
        Kind::Cubic,
        Kind::Previous,
        Kind::Next,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Kind::Linear => "linear",
            Kind::Spline => "spline",
            Kind::Nearest => "nearest",
            Kind::Zero => "zero",
            Kind::Slinear => "slinear",
            Kind::Quadratic => "quadratic",
            Kind::Cubic => "cubic",
            Kind::Previous => "previous",
            Kind::Next => "next",
        }
    }

    /// Smallest number of nodes the algorithm can be built from.
    pub fn min_points(self) -> usize {
        match self {
            Kind::Nearest | Kind::Previous | Kind::Next | Kind::Zero => 1,
            Kind::Linear | Kind::Slinear => 2,
            Kind::Quadratic => 3,
            Kind::Cubic | Kind::Spline => 4,
        }
    }

    /// Whether evaluating at a node returns that node's value bit for bit.
    ///
    /// True for the step kinds and the piecewise linear kinds, whose blend
    /// weight at a node is exactly 0 or 1. The quadratic and cubic kinds go
    /// through a collocation solve and reproduce nodes only to rounding.
    pub fn is_exact_at_nodes(self) -> bool {
        matches!(
            self,
            Kind::Linear | Kind::Nearest | Kind::Zero | Kind::Slinear | Kind::Previous | Kind::Next
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`Kind`] name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseKindError;

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown interpolation kind (expected one of linear, spline, nearest, zero, \
             slinear, quadratic, cubic, previous, next)"
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseKindError {}

impl FromStr for Kind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or(ParseKindError)
    }
}
