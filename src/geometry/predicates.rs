//! Exact geometric predicates over integer points.
//!
//! Both predicates return three-valued signs computed from widened integer
//! determinants, never from floating point, so ties are decided exactly:
//!
//! - [`orientation`]: sign of the doubled signed area of a triangle,
//!   accumulated in `i64`.
//! - [`in_circle`]: sign of the degree-4 lifted determinant, accumulated in
//!   `i128`.
//!
//! Exactness holds for any coordinates within
//! [`MAX_COORD`](crate::geometry::point::MAX_COORD); see that constant for
//! the width budget.

use crate::geometry::point::Pt2;
use std::fmt;

/// Position of a triangle's third point relative to the directed base edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise turn (negative doubled area).
    NEGATIVE,
    /// Collinear points (zero doubled area).
    DEGENERATE,
    /// Counterclockwise turn (positive doubled area).
    POSITIVE,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Position of a query point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// Strictly outside the circle.
    OUTSIDE,
    /// Exactly on the circle (the co-circular tie).
    BOUNDARY,
    /// Strictly inside the circle.
    INSIDE,
}

impl fmt::Display for InCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Doubled signed area of the triangle `abc` as an exact `i64`.
#[inline]
#[must_use]
pub const fn signed_area2(a: Pt2, b: Pt2, c: Pt2) -> i64 {
    let abx = b.x as i64 - a.x as i64;
    let aby = b.y as i64 - a.y as i64;
    let acx = c.x as i64 - a.x as i64;
    let acy = c.y as i64 - a.y as i64;
    abx * acy - aby * acx
}

/// Exact orientation of the point triple `(a, b, c)`.
///
/// `POSITIVE` means `c` lies strictly to the left of the directed line
/// `a → b`; `DEGENERATE` means the three points are collinear.
///
/// # Examples
///
/// ```rust
/// use wedge::geometry::point::Pt2;
/// use wedge::geometry::predicates::{orientation, Orientation};
///
/// let a = Pt2::new(0, 0);
/// let b = Pt2::new(1, 0);
/// assert_eq!(orientation(a, b, Pt2::new(0, 1)), Orientation::POSITIVE);
/// assert_eq!(orientation(a, b, Pt2::new(0, -1)), Orientation::NEGATIVE);
/// assert_eq!(orientation(a, b, Pt2::new(2, 0)), Orientation::DEGENERATE);
/// ```
#[inline]
#[must_use]
pub const fn orientation(a: Pt2, b: Pt2, c: Pt2) -> Orientation {
    let area2 = signed_area2(a, b, c);
    if area2 > 0 {
        Orientation::POSITIVE
    } else if area2 < 0 {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// Whether `a`, `b`, `c` lie on one line.
#[inline]
#[must_use]
pub const fn collinear(a: Pt2, b: Pt2, c: Pt2) -> bool {
    signed_area2(a, b, c) == 0
}

/// Lifted 3×3 determinant deciding the in-circle test, as an exact `i128`.
///
/// Each row is `(q.x - p.x, q.y - p.y, |q|² - |p|²)` for `q` in `{a, b, c}`.
/// Positive iff `p` is inside the circle through `a`, `b`, `c` when those
/// three are counterclockwise.
#[must_use]
pub const fn lifted_determinant(p: Pt2, a: Pt2, b: Pt2, c: Pt2) -> i128 {
    let pn = p.norm2();
    let a1 = (a.x as i64 - p.x as i64) as i128;
    let a2 = (a.y as i64 - p.y as i64) as i128;
    let a3 = (a.norm2() - pn) as i128;
    let b1 = (b.x as i64 - p.x as i64) as i128;
    let b2 = (b.y as i64 - p.y as i64) as i128;
    let b3 = (b.norm2() - pn) as i128;
    let c1 = (c.x as i64 - p.x as i64) as i128;
    let c2 = (c.y as i64 - p.y as i64) as i128;
    let c3 = (c.norm2() - pn) as i128;
    a1 * (b2 * c3 - c2 * b3) - a2 * (b1 * c3 - c1 * b3) + a3 * (b1 * c2 - c1 * b2)
}

/// Exact position of `p` relative to the circle through `a`, `b`, `c`.
///
/// The triple `(a, b, c)` must be counterclockwise; with a clockwise triple
/// the `INSIDE`/`OUTSIDE` answers flip. A degenerate (collinear) triple has
/// no circumcircle and the result is meaningless — callers in this crate
/// only reach the predicate with oriented triangles.
///
/// # Examples
///
/// ```rust
/// use wedge::geometry::point::Pt2;
/// use wedge::geometry::predicates::{in_circle, InCircle};
///
/// let a = Pt2::new(0, 0);
/// let b = Pt2::new(4, 0);
/// let c = Pt2::new(0, 4);
/// assert_eq!(in_circle(Pt2::new(1, 1), a, b, c), InCircle::INSIDE);
/// assert_eq!(in_circle(Pt2::new(9, 9), a, b, c), InCircle::OUTSIDE);
/// // (4,4) is the fourth corner of the square: exactly co-circular.
/// assert_eq!(in_circle(Pt2::new(4, 4), a, b, c), InCircle::BOUNDARY);
/// ```
#[inline]
#[must_use]
pub const fn in_circle(p: Pt2, a: Pt2, b: Pt2, c: Pt2) -> InCircle {
    let det = lifted_determinant(p, a, b, c);
    if det > 0 {
        InCircle::INSIDE
    } else if det < 0 {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}
