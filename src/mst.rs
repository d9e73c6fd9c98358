//! Euclidean minimum spanning tree.
//!
//! The EMST of a planar point set is a subgraph of its Delaunay
//! triangulation, so [`euclidean_mst`] runs Kruskal's algorithm over the
//! O(N) Delaunay edges instead of all N² pairs. Candidate edges are ordered
//! by exact squared length (an `i64`, free of rounding), with the vertex
//! pair as a deterministic tie-break; only the reported total weight goes
//! through `f64`.

use crate::delaunay::Triangulation;
use crate::geometry::point::{dist, dist2, Pt2};

/// Union-find over `0..len` with path compression and union by size.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Representative of the set containing `x`, compressing the path.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let up = self.parent[cur];
            self.parent[cur] = root;
            cur = up;
        }
        root
    }

    /// Merges the sets containing `x` and `y`. Returns `false` if they were
    /// already one set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (mut a, mut b) = (self.find(x), self.find(y));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        true
    }

    /// Whether `x` and `y` share a set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

/// A Euclidean minimum spanning tree over a point set.
#[derive(Clone, Debug, PartialEq)]
pub struct EuclideanMst {
    /// Tree edges as `[point index, point index]` pairs, in the order
    /// Kruskal accepted them (nondecreasing length).
    pub edges: Vec<[usize; 2]>,
    /// Total Euclidean length of the tree edges.
    pub weight: f64,
}

/// Computes the EMST of the points underlying a Delaunay triangulation.
///
/// `points` must be the same slice the triangulation was built from. The
/// result has exactly `points.len() - 1` edges and is unique whenever all
/// inter-point distances are distinct; ties are broken by vertex pair, so
/// equal inputs always produce equal trees.
///
/// # Examples
///
/// ```rust
/// use wedge::delaunay::triangulate;
/// use wedge::geometry::point::Pt2;
/// use wedge::mst::euclidean_mst;
///
/// let pts = vec![
///     Pt2::new(0, 0),
///     Pt2::new(1, 0),
///     Pt2::new(1, 1),
///     Pt2::new(0, 1),
/// ];
/// let tri = triangulate(&pts).unwrap();
/// let mst = euclidean_mst(&tri, &pts);
/// assert_eq!(mst.edges.len(), 3);
/// assert!((mst.weight - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn euclidean_mst(tri: &Triangulation, points: &[Pt2]) -> EuclideanMst {
    let mut candidates: Vec<(i64, usize, usize)> = tri
        .edges(true)
        .into_iter()
        .map(|[a, b]| (dist2(points[a], points[b]), a, b))
        .collect();
    candidates.sort_unstable();

    let mut sets = DisjointSet::new(points.len());
    let mut edges = Vec::with_capacity(points.len().saturating_sub(1));
    let mut weight = 0.0;
    for (_, a, b) in candidates {
        if sets.union(a, b) {
            edges.push([a, b]);
            weight += dist(points[a], points[b]);
        }
    }
    EuclideanMst { edges, weight }
}
