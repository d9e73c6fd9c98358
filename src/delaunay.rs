//! Divide-and-conquer Delaunay triangulation.
//!
//! [`triangulate`] builds a Delaunay triangulation of a point set as a
//! half-edge mesh, Guibas–Stolfi style:
//!
//! 1. sort the points lexicographically (the same order [`Pt2`] compares
//!    in), splitting ties is impossible because duplicates are rejected;
//! 2. triangulate halves recursively: two points make a lone edge, three
//!    make an oriented triangle or, when exactly collinear, a degenerate
//!    path;
//! 3. merge along the lower common tangent, repeatedly connecting the next
//!    cross edge and cutting edges whose circumcircle the advancing front
//!    invalidates (the in-circle "zipper").
//!
//! Each recursive call returns its leftmost-bottom and rightmost-bottom
//! boundary wedges so the parent can locate the merge seam in O(1). The
//! merge is linear in the seam length, giving O(N log N) overall.
//!
//! Ties in both predicates are decided exactly (see
//! [`crate::geometry::predicates`]); there is no epsilon anywhere. For
//! co-circular quadruples either diagonal may be produced; both are valid
//! Delaunay triangulations.
//!
//! [`detriangulate`] then strips every edge the Delaunay condition does not
//! require, which makes the mesh's dual well-defined per face. The Voronoi
//! layer calls it before dualizing.

use crate::geometry::point::{Pt2, MAX_COORD};
use crate::geometry::predicates::{in_circle, orientation, InCircle, Orientation};
use crate::mesh::traversal::FaceLoop;
use crate::mesh::wedge::{WedgeKey, WedgeMesh};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Why a triangulation could not be built.
///
/// All variants are caller errors: the input violated a documented
/// precondition. The mesh arena is not returned in any partial state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriangulationError {
    /// Fewer than two input points.
    #[error("triangulation requires at least 2 points, got {actual}")]
    InsufficientPoints {
        /// How many points were supplied.
        actual: usize,
    },
    /// A coordinate exceeded [`MAX_COORD`], so exactness cannot be
    /// guaranteed.
    #[error("point {point} at index {index} exceeds the ±{MAX_COORD} coordinate bound")]
    CoordinateOutOfRange {
        /// Index of the offending point in the input slice.
        index: usize,
        /// The offending point.
        point: Pt2,
    },
    /// Two input points coincide.
    #[error("coincident points at indices {first} and {second}")]
    DuplicatePoint {
        /// Index of one occurrence.
        first: usize,
        /// Index of the other occurrence.
        second: usize,
    },
}

/// A Delaunay triangulation: the half-edge mesh plus one wedge on the
/// convex hull.
///
/// The hull wedge's face loop is the unbounded face (traversed with the
/// interior on the right); every bounded face is counterclockwise. The
/// whole mesh is reachable from `hull`, and vertex labels are indices into
/// the point slice the triangulation was built from.
///
/// # Examples
///
/// ```rust
/// use wedge::delaunay::triangulate;
/// use wedge::geometry::point::Pt2;
///
/// let pts = vec![
///     Pt2::new(0, 0),
///     Pt2::new(10, 0),
///     Pt2::new(0, 10),
///     Pt2::new(7, 7),
/// ];
/// let tri = triangulate(&pts).unwrap();
/// // One unbounded face plus the bounded triangles.
/// assert_eq!(tri.faces(false).len(), 1 + 2);
/// assert!(tri.is_consistent());
/// ```
#[derive(Clone, Debug)]
pub struct Triangulation {
    /// The half-edge mesh holding the triangulation.
    pub mesh: WedgeMesh,
    /// A wedge on the convex hull, sufficient to reach the whole mesh.
    pub hull: WedgeKey,
}

impl Triangulation {
    /// All undirected Delaunay edges as `[point index, point index]` pairs.
    #[must_use]
    pub fn edges(&self, canonical: bool) -> Vec<[usize; 2]> {
        self.mesh.extract_edges(self.hull, canonical)
    }

    /// All face loops; the unbounded face comes first when `canonical` is
    /// off.
    #[must_use]
    pub fn faces(&self, canonical: bool) -> Vec<FaceLoop> {
        self.mesh.extract_faces(self.hull, canonical)
    }

    /// The convex hull as point indices, in unbounded-face order.
    #[must_use]
    pub fn hull_loop(&self) -> Vec<usize> {
        let mut hull = Vec::new();
        let mut e = self.hull;
        loop {
            hull.push(self.mesh.vertex(e));
            e = self.mesh.next(e);
            if e == self.hull {
                break;
            }
        }
        hull
    }

    /// Structural mesh self-check (see
    /// [`WedgeMesh::is_consistent`](crate::mesh::wedge::WedgeMesh::is_consistent)).
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mesh.is_consistent(self.hull)
    }
}

/// Builds the Delaunay triangulation of `points`.
///
/// Runs in O(N log N). The returned vertex labels are indices into
/// `points`.
///
/// # Errors
///
/// - [`TriangulationError::InsufficientPoints`] for fewer than two points;
/// - [`TriangulationError::CoordinateOutOfRange`] when a coordinate exceeds
///   [`MAX_COORD`];
/// - [`TriangulationError::DuplicatePoint`] when two points coincide.
pub fn triangulate(points: &[Pt2]) -> Result<Triangulation, TriangulationError> {
    let n = points.len();
    if n < 2 {
        return Err(TriangulationError::InsufficientPoints { actual: n });
    }
    for (index, &point) in points.iter().enumerate() {
        if !point.in_range() {
            return Err(TriangulationError::CoordinateOutOfRange { index, point });
        }
    }

    let mut index: Vec<usize> = (0..n).collect();
    index.sort_unstable_by_key(|&i| points[i]);
    for pair in index.windows(2) {
        if points[pair[0]] == points[pair[1]] {
            return Err(TriangulationError::DuplicatePoint {
                first: pair[0],
                second: pair[1],
            });
        }
    }

    // A triangulation on n points has at most 3n - 6 undirected edges.
    let mut mesh = WedgeMesh::with_capacity(6 * n);
    let [_, hull] = build(&mut mesh, points, &index, 0, n);
    Ok(Triangulation { mesh, hull })
}

/// Triangulates `index[l..r]` (sorted by point), returning the
/// leftmost-bottom and rightmost-bottom boundary wedges of the sub-mesh.
fn build(mesh: &mut WedgeMesh, pts: &[Pt2], index: &[usize], l: usize, r: usize) -> [WedgeKey; 2] {
    if r - l == 2 {
        let e = mesh.lone_edge(index[l], index[l + 1]);
        return [e, mesh.mate(e)];
    }
    if r - l == 3 {
        let (a, b, c) = (index[l], index[l + 1], index[l + 2]);
        return match orientation(pts[a], pts[b], pts[c]) {
            Orientation::POSITIVE => {
                let e = mesh.triangle(a, b, c);
                [e, mesh.mate(mesh.next(e))]
            }
            Orientation::NEGATIVE => {
                let e = mesh.triangle(a, c, b);
                [e, mesh.mate(e)]
            }
            Orientation::DEGENERATE => {
                let e = mesh.line(a, b, c);
                [e, mesh.mate(mesh.next(e))]
            }
        };
    }

    let m = (l + r) / 2;
    let [mut b, mut a] = build(mesh, pts, index, l, m);
    let [mut d, mut c] = build(mesh, pts, index, m, r);

    // Walk a forward and d backward until [a.origin, d.origin] is the lower
    // common tangent of the two sub-hulls.
    loop {
        if orientation(
            pts[mesh.vertex(a)],
            pts[mesh.target(d)],
            pts[mesh.vertex(d)],
        ) == Orientation::POSITIVE
        {
            d = mesh.rnext(d);
        } else if orientation(
            pts[mesh.vertex(d)],
            pts[mesh.vertex(a)],
            pts[mesh.target(a)],
        ) == Orientation::POSITIVE
        {
            a = mesh.next(a);
        } else {
            break;
        }
    }

    // Point both candidates up and away from the base edge, then zip.
    a = mesh.rot_ccw(a);
    d = mesh.rot_cw(d);
    let mut e = mesh.connect(mesh.mate(a), d);
    if mesh.vertex(b) == mesh.vertex(a) {
        b = e;
    }
    if mesh.vertex(c) == mesh.vertex(d) {
        c = mesh.mate(e);
    }

    loop {
        // Cut left-side edges whose circumcircle swallows the base target,
        // and right-side edges whose circumcircle swallows the base origin.
        while candidate_valid(mesh, pts, a, e)
            && !mesh.straight_prev(a)
            && circle_violated(mesh, pts, mesh.target(e), a)
        {
            a = mesh.cut_ccw(a);
        }
        while candidate_valid(mesh, pts, d, e)
            && !mesh.straight_prev(d)
            && circle_violated(mesh, pts, mesh.vertex(e), mesh.mate(d))
        {
            d = mesh.cut_cw(d);
        }

        let left = candidate_valid(mesh, pts, a, e);
        let right = candidate_valid(mesh, pts, d, e);
        if !left && !right {
            break;
        } else if !left {
            d = mesh.next(d);
        } else if !right {
            a = mesh.rnext(a);
        } else if circle_violated(mesh, pts, mesh.target(d), mesh.mate(a)) {
            // The right candidate's apex invalidates the left triangle:
            // advance the right side.
            d = mesh.next(d);
        } else {
            a = mesh.rnext(a);
        }
        e = mesh.connect(mesh.mate(a), d);
    }

    [b, c]
}

/// Whether `edge` still offers a cross-connection candidate above the base
/// edge `e`: it must not have wrapped onto `e` and its apex must lie
/// strictly above the base.
fn candidate_valid(mesh: &WedgeMesh, pts: &[Pt2], edge: WedgeKey, e: WedgeKey) -> bool {
    let n = mesh.next(edge);
    n != e
        && n != mesh.mate(e)
        && orientation(
            pts[mesh.vertex(e)],
            pts[mesh.target(e)],
            pts[mesh.target(edge)],
        ) == Orientation::POSITIVE
}

/// Whether `p` lies strictly inside the circumcircle of the triangle to the
/// left of `edge` (its origin, target, and the target of its successor).
fn circle_violated(mesh: &WedgeMesh, pts: &[Pt2], p: usize, edge: WedgeKey) -> bool {
    let a = mesh.vertex(edge);
    let b = mesh.target(edge);
    let c = mesh.target(mesh.next(edge));
    in_circle(pts[p], pts[a], pts[b], pts[c]) == InCircle::INSIDE
}

/// Removes every interior edge the Delaunay condition does not strictly
/// require.
///
/// For each non-hull edge `a - b` with opposite apexes `c` (left) and `d`
/// (right), the edge survives only if `b` lies strictly inside the circle
/// through `c, a, d`, that is, only if flipping to the other diagonal
/// would violate the empty-circle property. Co-circular quadruples keep
/// neither diagonal, which collapses them into maximal convex faces and
/// makes the dual mesh well-defined; the Voronoi layer relies on this.
pub fn detriangulate(tri: &mut Triangulation, points: &[Pt2]) {
    let order = tri.mesh.linearize(tri.hull);
    let index: FxHashMap<WedgeKey, usize> =
        order.iter().enumerate().map(|(i, &e)| (e, i)).collect();

    let mut hull_set = FxHashSet::default();
    let mut walk = tri.hull;
    while hull_set.insert(walk) {
        walk = tri.mesh.next(walk);
    }

    let mut doomed = Vec::new();
    for (i, &e) in order.iter().enumerate() {
        let mate = tri.mesh.mate(e);
        if hull_set.contains(&e) || hull_set.contains(&mate) || index[&mate] < i {
            continue;
        }
        let a = tri.mesh.vertex(e);
        let b = tri.mesh.target(e);
        let c = tri.mesh.target(tri.mesh.next(e));
        let d = tri.mesh.vertex(tri.mesh.prev(mate));
        if in_circle(points[b], points[c], points[a], points[d]) != InCircle::INSIDE {
            doomed.push(e);
        }
    }
    for e in doomed {
        tri.mesh.cut(e);
    }
}
