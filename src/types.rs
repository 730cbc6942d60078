//! Geometric primitives: coordinates, scale signs and bounding rectangles.
//!
//! Positions and scale multipliers share the [`Coords`] type. Bounding
//! rectangles are always stored normalized (`x1 <= x2`, `y1 <= y2`), so a
//! mirrored component reports where its box lands rather than a negative size.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Validate a user-provided number (rejects NaN/infinite)
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Validate a user-provided size (rejects NaN/infinite/negative)
#[inline]
pub fn non_negative(val: f64) -> Result<f64, NumericError> {
    let val = finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// An `(x, y)` pair: a position offset, or a per-axis ±1 scale multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Coords {
    pub const ZERO: Coords = Coords { x: 0.0, y: 0.0 };
    /// Identity scale.
    pub const ONE: Coords = Coords { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Coords { x, y }
    }

    /// Create coords with validation (rejects NaN/infinite)
    pub fn try_new(x: f64, y: f64) -> Result<Self, NumericError> {
        Ok(Coords {
            x: finite(x)?,
            y: finite(y)?,
        })
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn abs(self) -> Self {
        Coords::new(self.x.abs(), self.y.abs())
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Split a signed pair into its magnitude and a ±1 scale.
///
/// A negative component yields a scale of `-1` on that axis; zero and
/// positive components yield `+1`. Zero never maps to a zero scale, which
/// would collapse all descendant geometry onto a point.
pub fn extract_scale(pair: Coords) -> (Coords, Coords) {
    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    (pair.abs(), Coords::new(sign(pair.x), sign(pair.y)))
}

impl From<(f64, f64)> for Coords {
    fn from((x, y): (f64, f64)) -> Self {
        Coords { x, y }
    }
}

impl From<DVec2> for Coords {
    fn from(v: DVec2) -> Self {
        Coords { x: v.x, y: v.y }
    }
}

impl Add for Coords {
    type Output = Coords;
    fn add(self, rhs: Coords) -> Coords {
        Coords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Coords;
    fn sub(self, rhs: Coords) -> Coords {
        Coords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Componentwise product; for scales this is sign multiplication.
impl Mul for Coords {
    type Output = Coords;
    fn mul(self, rhs: Coords) -> Coords {
        Coords::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<f64> for Coords {
    type Output = Coords;
    fn mul(self, rhs: f64) -> Coords {
        Coords::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Coords {
    type Output = Coords;
    fn neg(self) -> Coords {
        Coords::new(-self.x, -self.y)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in a component's parent-relative space.
///
/// Construction always normalizes the corners.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingCoords {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl BoundingCoords {
    /// The degenerate box reported by an empty group.
    pub const ZERO: BoundingCoords = BoundingCoords {
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: 0.0,
    };

    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        BoundingCoords {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// Box spanning two corner points, in any order.
    pub fn from_corners(a: Coords, b: Coords) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Coords {
        Coords::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &BoundingCoords) -> BoundingCoords {
        BoundingCoords {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Map this box through `p -> offset + scale * p`, re-normalizing so a
    /// negative scale moves the box instead of inverting it.
    pub fn transform(&self, offset: Coords, scale: Coords) -> BoundingCoords {
        BoundingCoords::new(
            offset.x + self.x1 * scale.x,
            offset.y + self.y1 * scale.y,
            offset.x + self.x2 * scale.x,
            offset.y + self.y2 * scale.y,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.y1.is_finite() && self.x2.is_finite() && self.y2.is_finite()
    }

    pub fn rect(&self) -> BoundingRect {
        BoundingRect {
            x: self.x1,
            y: self.y1,
            width: self.width(),
            height: self.height(),
        }
    }
}

impl fmt::Display for BoundingCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// `(x, y, width, height)` view of a [`BoundingCoords`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        BoundingRect { x, y, width, height }
    }

    pub fn coords(&self) -> BoundingCoords {
        BoundingCoords::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl From<BoundingCoords> for BoundingRect {
    fn from(bc: BoundingCoords) -> Self {
        bc.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_rejects_nan_and_infinity() {
        assert_eq!(finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(finite(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(finite(-3.0), Ok(-3.0));
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert_eq!(non_negative(-0.5), Err(NumericError::Negative));
        assert_eq!(non_negative(0.0), Ok(0.0));
    }

    #[test]
    fn coords_try_new() {
        assert!(Coords::try_new(1.0, 2.0).is_ok());
        assert_eq!(Coords::try_new(1.0, f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn extract_scale_negative_components() {
        let (offset, scale) = extract_scale(Coords::new(-60.0, 10.0));
        assert_eq!(offset, Coords::new(60.0, 10.0));
        assert_eq!(scale, Coords::new(-1.0, 1.0));

        let (offset, scale) = extract_scale(Coords::new(-3.0, -4.0));
        assert_eq!(offset, Coords::new(3.0, 4.0));
        assert_eq!(scale, Coords::new(-1.0, -1.0));
    }

    #[test]
    fn extract_scale_zero_maps_to_positive() {
        let (offset, scale) = extract_scale(Coords::new(0.0, -0.0));
        assert_eq!(offset, Coords::new(0.0, 0.0));
        assert_eq!(scale, Coords::ONE);
    }

    #[test]
    fn coords_arithmetic() {
        let a = Coords::new(3.0, -2.0);
        let b = Coords::new(-1.0, -1.0);
        assert_eq!(a + b, Coords::new(2.0, -3.0));
        assert_eq!(a - b, Coords::new(4.0, -1.0));
        assert_eq!(a * b, Coords::new(-3.0, 2.0));
        assert_eq!(a * 2.0, Coords::new(6.0, -4.0));
        assert_eq!(-a, Coords::new(-3.0, 2.0));
    }

    #[test]
    fn bounding_coords_normalizes() {
        let bc = BoundingCoords::new(10.0, 8.0, 2.0, -4.0);
        assert_eq!(bc.x1(), 2.0);
        assert_eq!(bc.y1(), -4.0);
        assert_eq!(bc.x2(), 10.0);
        assert_eq!(bc.y2(), 8.0);
        assert_eq!(bc.width(), 8.0);
        assert_eq!(bc.height(), 12.0);
    }

    #[test]
    fn bounding_coords_transform_mirrors_position() {
        let bc = BoundingCoords::new(0.0, 0.0, 20.0, 10.0);
        let flipped = bc.transform(Coords::new(100.0, 0.0), Coords::new(-1.0, 1.0));
        assert_eq!(flipped, BoundingCoords::new(80.0, 0.0, 100.0, 10.0));
        assert_eq!(flipped.width(), 20.0);
    }

    #[test]
    fn bounding_coords_union_and_center() {
        let a = BoundingCoords::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingCoords::new(-5.0, 4.0, 3.0, 20.0);
        let u = a.union(&b);
        assert_eq!(u, BoundingCoords::new(-5.0, 0.0, 10.0, 20.0));
        assert_eq!(u.center(), Coords::new(2.5, 10.0));
    }

    #[test]
    fn bounding_rect_round_trip() {
        let bc = BoundingCoords::new(1.0, 2.0, 5.0, 8.0);
        let rect = bc.rect();
        assert_eq!(rect, BoundingRect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(rect.coords(), bc);
    }
}
