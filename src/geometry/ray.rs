//! Parametric float rays for the Voronoi clipper.
//!
//! A [`Ray`] is the line `p + t·d`. The clipper only needs construction,
//! the parametric coordinate of a point, and an *unchecked* line-line
//! intersection (parallel input gives a non-finite result; the caller
//! filters with the parametric tests).

use crate::geometry::point::Pd2;

/// A parametric ray/line `p + t·d` over `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    /// Anchor point (`t = 0`).
    pub p: Pd2,
    /// Direction vector (`t = 1` lands at `p + d`).
    pub d: Pd2,
}

impl Ray {
    /// Ray from an anchor point and a direction.
    #[inline]
    #[must_use]
    pub const fn ray(p: Pd2, d: Pd2) -> Self {
        Self { p, d }
    }

    /// Ray through two points, anchored at `u` with `v` at `t = 1`.
    #[inline]
    #[must_use]
    pub fn through(u: Pd2, v: Pd2) -> Self {
        Self { p: u, d: v - u }
    }

    /// The point at `t = 1`.
    #[inline]
    #[must_use]
    pub fn q(self) -> Pd2 {
        self.p + self.d
    }

    /// Parametric coordinate of the projection of `u` onto the ray's line:
    /// the `t` with `p + t·d` closest to `u`.
    #[inline]
    #[must_use]
    pub fn coef(self, u: Pd2) -> f64 {
        (u - self.p).dot(self.d) / self.d.norm2()
    }

    /// Intersection point of the two carrier lines.
    ///
    /// No parallelism check: parallel directions divide by a vanishing cross
    /// product and yield non-finite coordinates, which the caller's
    /// parametric acceptance tests reject.
    #[inline]
    #[must_use]
    pub fn intersect_unchecked(self, other: Self) -> Pd2 {
        let t = (other.p - self.p).cross(other.d) / self.d.cross(other.d);
        self.p + t * self.d
    }
}
