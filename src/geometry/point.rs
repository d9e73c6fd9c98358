//! Exact and floating 2D points.
//!
//! Two point types cover the whole crate:
//!
//! - [`Pt2`] is the *exact* point: `i32` coordinates with every product
//!   (dot, cross, squared norm/distance) accumulated in `i64`, so predicates
//!   built on it never round. Inputs to the triangulation layer must stay
//!   within [`MAX_COORD`]; the widening chain `i32 → i64 → i128` is sized
//!   for that bound (see [`crate::geometry::predicates`]).
//! - [`Pd2`] is the *derived-data* point: plain `f64` coordinates used for
//!   circumcenters, bisector rays, and bounding-box clipping, where exact
//!   arithmetic is neither possible nor required.
//!
//! `Pt2` orders lexicographically (x, then y) — the total order that drives
//! the divide-and-conquer split and merge sweep in the triangulation builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Largest admissible coordinate magnitude for exact points fed to the
/// triangulation layer: `2^29`.
///
/// Within this bound coordinate differences fit `i32`, dot/cross products fit
/// `i64`, and the lifted in-circle determinant stays below `2^123`, well
/// inside `i128`. The bound is enforced by
/// [`triangulate`](crate::delaunay::triangulate), not by `Pt2` itself.
pub const MAX_COORD: i32 = 1 << 29;

// =============================================================================
// EXACT POINT
// =============================================================================

/// An exact 2D point (or vector) over `i32` coordinates.
///
/// Comparison is lexicographic on `(x, y)`. Arithmetic stays in `i32`;
/// products widen to `i64` so they cannot overflow for coordinates within
/// [`MAX_COORD`].
///
/// # Examples
///
/// ```rust
/// use wedge::geometry::point::Pt2;
///
/// let u = Pt2::new(3, 4);
/// let v = Pt2::new(-4, 3);
/// assert_eq!(u.dot(v), 0);
/// assert_eq!(u.cross(v), 25);
/// assert_eq!(u.perp_ccw(), v);
/// assert!(Pt2::new(1, 9) < Pt2::new(2, 0));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pt2 {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Pt2 {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Dot product, widened to `i64`.
    #[inline]
    #[must_use]
    pub const fn dot(self, other: Self) -> i64 {
        self.x as i64 * other.x as i64 + self.y as i64 * other.y as i64
    }

    /// Cross product (z-component of the 3D cross), widened to `i64`.
    #[inline]
    #[must_use]
    pub const fn cross(self, other: Self) -> i64 {
        self.x as i64 * other.y as i64 - self.y as i64 * other.x as i64
    }

    /// Squared Euclidean norm as `i64`.
    #[inline]
    #[must_use]
    pub const fn norm2(self) -> i64 {
        self.dot(self)
    }

    /// Euclidean norm as `f64`.
    #[inline]
    #[must_use]
    pub fn norm(self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n2 = self.norm2() as f64;
        n2.sqrt()
    }

    /// Counterclockwise quarter-turn rotation.
    #[inline]
    #[must_use]
    pub const fn perp_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Clockwise quarter-turn rotation.
    #[inline]
    #[must_use]
    pub const fn perp_cw(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Componentwise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Whether both coordinates are within [`MAX_COORD`] in magnitude.
    #[inline]
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.x.abs() <= MAX_COORD && self.y.abs() <= MAX_COORD
    }
}

/// Exact squared distance between two points.
///
/// The differences are widened straight from the coordinates, so the result
/// is exact for any pair of points within [`MAX_COORD`].
#[inline]
#[must_use]
pub const fn dist2(a: Pt2, b: Pt2) -> i64 {
    let dx = a.x as i64 - b.x as i64;
    let dy = a.y as i64 - b.y as i64;
    dx * dx + dy * dy
}

/// Euclidean distance between two exact points, as `f64`.
#[inline]
#[must_use]
pub fn dist(a: Pt2, b: Pt2) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let d2 = dist2(a, b) as f64;
    d2.sqrt()
}

impl Add for Pt2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pt2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Pt2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Pt2 {
    type Output = Self;
    #[inline]
    fn mul(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl AddAssign for Pt2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Pt2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl fmt::Display for Pt2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pt2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// =============================================================================
// FLOATING POINT
// =============================================================================

/// A 2D point over `f64`, for derived data (circumcenters, box corners,
/// bisector hit points).
///
/// Carries the same vector vocabulary as [`Pt2`] but makes no exactness
/// claims; it is never used inside a predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pd2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Pd2 {
    /// Placeholder for the unbounded Voronoi face center.
    pub const INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of the 3D cross).
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared Euclidean norm.
    #[inline]
    #[must_use]
    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm.
    #[inline]
    #[must_use]
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Counterclockwise quarter-turn rotation.
    #[inline]
    #[must_use]
    pub fn perp_ccw(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Componentwise minimum.
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Whether both coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between two floating points.
#[inline]
#[must_use]
pub fn fdist(a: Pd2, b: Pd2) -> f64 {
    (a - b).norm()
}

impl Add for Pd2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pd2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Pd2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Pd2 {
    type Output = Self;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl Mul<Pd2> for f64 {
    type Output = Pd2;
    #[inline]
    fn mul(self, p: Pd2) -> Pd2 {
        p * self
    }
}

impl std::ops::Div<f64> for Pd2 {
    type Output = Self;
    #[inline]
    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

impl From<Pt2> for Pd2 {
    #[inline]
    fn from(p: Pt2) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl fmt::Display for Pd2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lexicographic_order() {
        assert!(Pt2::new(0, 5) < Pt2::new(1, -5));
        assert!(Pt2::new(1, -5) < Pt2::new(1, 0));
        assert_eq!(Pt2::new(2, 3), Pt2::new(2, 3));

        let mut pts = vec![Pt2::new(1, 1), Pt2::new(0, 2), Pt2::new(1, 0)];
        pts.sort_unstable();
        assert_eq!(pts, vec![Pt2::new(0, 2), Pt2::new(1, 0), Pt2::new(1, 1)]);
    }

    #[test]
    fn exact_products_do_not_overflow_at_bound() {
        let a = Pt2::new(MAX_COORD, MAX_COORD);
        let b = Pt2::new(-MAX_COORD, -MAX_COORD);
        // 4 * 2^58 = 2^60, well inside i64.
        assert_eq!(a.dot(b), -(1_i64 << 60));
        assert_eq!(a.cross(b), 0);
        assert_eq!(dist2(a, b), 1_i64 << 62);
        // The difference of two in-range points still fits i32.
        assert_eq!(a - b, Pt2::new(MAX_COORD * 2, MAX_COORD * 2));
    }

    #[test]
    fn vector_identities() {
        let u = Pt2::new(7, -3);
        assert_eq!(u.perp_ccw().perp_ccw(), -u);
        assert_eq!(u.perp_cw().perp_ccw(), u);
        assert_eq!(u.dot(u.perp_ccw()), 0);
        assert_eq!(u.cross(u), 0);
        assert_eq!(u + u - u, u);
        assert_eq!(u * 3, Pt2::new(21, -9));
    }

    #[test]
    fn float_point_basics() {
        let u = Pd2::new(3.0, 4.0);
        assert_relative_eq!(u.norm(), 5.0);
        assert_relative_eq!(u.perp_ccw().dot(u), 0.0);
        assert_relative_eq!(fdist(u, Pd2::new(0.0, 0.0)), 5.0);
        assert_eq!(Pd2::from(Pt2::new(3, 4)), u);
        assert!(!Pd2::INFINITY.is_finite());
    }

    #[test]
    fn serde_roundtrip() {
        let p = Pt2::new(-12, 99);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Pt2>(&json).unwrap(), p);
    }

    #[test]
    fn min_max_are_componentwise() {
        let a = Pt2::new(1, 9);
        let b = Pt2::new(5, -2);
        assert_eq!(a.min(b), Pt2::new(1, -2));
        assert_eq!(a.max(b), Pt2::new(5, 9));
    }
}
