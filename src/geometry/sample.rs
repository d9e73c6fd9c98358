//! Seeded point-set generators for tests and benchmarks.
//!
//! Each [`Distribution`] stresses a different part of the triangulator:
//! uniform squares are the generic case, circles and parabolas force long
//! runs of co-circular and near-degenerate merges, star lines and square
//! edges pile up exactly collinear points.
//!
//! All randomness comes from the caller's generator, so a seeded
//! [`StdRng`](rand::rngs::StdRng) reproduces a point set exactly.

use crate::geometry::point::Pt2;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Shape of a generated point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Distribution {
    /// Uniform over the interior of the square `[-r, r]²`.
    Square,
    /// Uniform over the four edges of the square `[-r, r]²`.
    SquareEdges,
    /// Uniform over the disk of radius `r`.
    Disk,
    /// On the circle of radius `r`, rounded to the grid; many co-circular
    /// quadruples.
    Circle,
    /// On the parabola `y = x²/r`; adversarial for the in-circle test.
    Parabola,
    /// On the two axes and the two diagonals through the origin; many
    /// exactly collinear triples.
    StarLines,
}

impl Distribution {
    /// All distributions, for parameterized tests.
    pub const ALL: [Self; 6] = [
        Self::Square,
        Self::SquareEdges,
        Self::Disk,
        Self::Circle,
        Self::Parabola,
        Self::StarLines,
    ];
}

fn raw_point(shape: Distribution, r: i32, rng: &mut impl Rng) -> Pt2 {
    match shape {
        Distribution::Square => Pt2::new(rng.random_range(-r..=r), rng.random_range(-r..=r)),
        Distribution::SquareEdges => {
            let fixed = if rng.random::<bool>() { r } else { -r };
            let free = rng.random_range(-r..=r);
            if rng.random::<bool>() {
                Pt2::new(fixed, free)
            } else {
                Pt2::new(free, fixed)
            }
        }
        Distribution::Disk => loop {
            let p = Pt2::new(rng.random_range(-r..=r), rng.random_range(-r..=r));
            if p.norm2() <= i64::from(r) * i64::from(r) {
                break p;
            }
        },
        Distribution::Circle => {
            let theta = rng.random_range(0.0..std::f64::consts::TAU);
            let scale = f64::from(r);
            #[allow(clippy::cast_possible_truncation)]
            Pt2::new(
                (scale * theta.cos()).round() as i32,
                (scale * theta.sin()).round() as i32,
            )
        }
        Distribution::Parabola => {
            let x = rng.random_range(-r..=r);
            #[allow(clippy::cast_possible_truncation)]
            let y = (i64::from(x) * i64::from(x) / i64::from(r)) as i32;
            Pt2::new(x, y)
        }
        Distribution::StarLines => {
            let x = rng.random_range(-r..=r);
            let (a, b) = loop {
                let a = rng.random_range(-1..=1);
                let b = rng.random_range(-1..=1);
                if (a, b) != (0, 0) {
                    break (a, b);
                }
            };
            Pt2::new(a * x, b * x)
        }
    }
}

/// Generates `n` distinct points from `shape` with scale parameter `r`.
///
/// # Panics
///
/// Panics when the distribution's support cannot yield `n` distinct points
/// in a reasonable number of draws (for example `n` far beyond `8r` on a
/// circle). Pick `r` comfortably larger than `n` to avoid this.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use wedge::geometry::sample::{sample, Distribution};
///
/// let mut rng = StdRng::seed_from_u64(11);
/// let pts = sample(Distribution::Disk, 40, 1000, &mut rng);
/// assert_eq!(pts.len(), 40);
/// ```
#[must_use]
pub fn sample(shape: Distribution, n: usize, r: i32, rng: &mut impl Rng) -> Vec<Pt2> {
    assert!(r > 0, "scale parameter must be positive");
    let mut seen = FxHashSet::default();
    let mut pts = Vec::with_capacity(n);
    let mut budget = 200 * n + 1000;
    while pts.len() < n {
        assert!(budget > 0, "distribution support exhausted; increase r");
        budget -= 1;
        let p = raw_point(shape, r, rng);
        if seen.insert(p) {
            pts.push(p);
        }
    }
    pts
}
