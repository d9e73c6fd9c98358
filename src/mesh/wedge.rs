//! The half-edge arena.
//!
//! A [`WedgeMesh`] stores a planar straight-line embedding as a pool of
//! half-edges ("wedges"). Every undirected edge is a mated pair of wedges;
//! each wedge knows its origin vertex label, its successor and predecessor
//! along the face to its left (`next`/`prev`), and its mate. Everything else
//! is derived:
//!
//! - `target(e) = vertex(mate(e))`
//! - `rot_ccw(e) = mate(prev(e))`, the next wedge counterclockwise around
//!   the origin of `e`
//! - `rot_cw(e) = next(mate(e))`
//! - `rnext(e) = mate(prev(mate(e)))`, the mate rotated counterclockwise
//!   around the *target* of `e`
//!
//! Wedges are addressed by [`WedgeKey`]s into a slotmap arena, so "pointers"
//! are indices, a cut frees the mated pair back to the pool, and dropping
//! (or [`clear`](WedgeMesh::clear)ing) the mesh releases everything at once.
//! One mesh is owned by one computation; there is no sharing.
//!
//! # Invariants
//!
//! After every public mutation:
//!
//! - `mate(mate(e)) == e` and `mate(e) != e`;
//! - `prev(next(e)) == e` and `next(prev(e)) == e`;
//! - following `next` from any wedge returns to it (face loops are closed),
//!   and following `rot_ccw` returns to it (rotation orders are closed).
//!
//! Violating a precondition of a mutator (for example cutting an edge whose
//! links are already inconsistent) is a programming error and fails fast by
//! assertion; the mesh has no recoverable "partially corrupt" state.

use slotmap::{new_key_type, Key, SlotMap};

new_key_type! {
    /// Arena key addressing one half-edge of a [`WedgeMesh`].
    pub struct WedgeKey;
}

/// One half-edge record.
///
/// `vertex` is the origin label (application-defined, typically an index
/// into the caller's point slice). `face` is a transient tag written by
/// [`face_groups`](WedgeMesh::face_groups), [`tag_face`](WedgeMesh::tag_face)
/// and the dualizer; `-1` conventionally marks the outer face.
#[derive(Clone, Copy, Debug)]
pub struct Wedge {
    pub(crate) vertex: usize,
    pub(crate) face: isize,
    pub(crate) next: WedgeKey,
    pub(crate) prev: WedgeKey,
    pub(crate) mate: WedgeKey,
}

/// A planar half-edge mesh backed by a slotmap arena.
///
/// # Examples
///
/// ```rust
/// use wedge::mesh::wedge::WedgeMesh;
///
/// let mut mesh = WedgeMesh::new();
/// let ab = mesh.triangle(0, 1, 2);
/// assert_eq!(mesh.vertex(ab), 0);
/// assert_eq!(mesh.target(ab), 1);
/// assert_eq!(mesh.face_len(ab), 3);
/// assert_eq!(mesh.mate(mesh.mate(ab)), ab);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WedgeMesh {
    edges: SlotMap<WedgeKey, Wedge>,
}

impl WedgeMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `edges` half-edges.
    #[must_use]
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            edges: SlotMap::with_capacity_and_key(edges),
        }
    }

    /// Number of live half-edges (twice the number of undirected edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the arena holds no half-edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Releases every half-edge back to the pool.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Whether `e` addresses a live half-edge.
    #[must_use]
    pub fn contains(&self, e: WedgeKey) -> bool {
        self.edges.contains_key(e)
    }

    /// Iterates over all live half-edge keys in arena order.
    pub fn keys(&self) -> impl Iterator<Item = WedgeKey> + '_ {
        self.edges.keys()
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Origin vertex label of `e`.
    #[inline]
    #[must_use]
    pub fn vertex(&self, e: WedgeKey) -> usize {
        self.edges[e].vertex
    }

    /// Target vertex label of `e` (origin of its mate).
    #[inline]
    #[must_use]
    pub fn target(&self, e: WedgeKey) -> usize {
        self.vertex(self.mate(e))
    }

    /// Face tag of `e`.
    #[inline]
    #[must_use]
    pub fn face(&self, e: WedgeKey) -> isize {
        self.edges[e].face
    }

    /// Successor of `e` along its face loop.
    #[inline]
    #[must_use]
    pub fn next(&self, e: WedgeKey) -> WedgeKey {
        self.edges[e].next
    }

    /// Predecessor of `e` along its face loop.
    #[inline]
    #[must_use]
    pub fn prev(&self, e: WedgeKey) -> WedgeKey {
        self.edges[e].prev
    }

    /// The oppositely directed half of the same undirected edge.
    #[inline]
    #[must_use]
    pub fn mate(&self, e: WedgeKey) -> WedgeKey {
        self.edges[e].mate
    }

    /// Next wedge counterclockwise around the origin of `e`.
    #[inline]
    #[must_use]
    pub fn rot_ccw(&self, e: WedgeKey) -> WedgeKey {
        self.mate(self.prev(e))
    }

    /// Next wedge clockwise around the origin of `e`.
    #[inline]
    #[must_use]
    pub fn rot_cw(&self, e: WedgeKey) -> WedgeKey {
        self.next(self.mate(e))
    }

    /// The mate rotated counterclockwise around the *target* of `e`; the
    /// result originates at that target. Equivalent to
    /// `rot_ccw(mate(e))`.
    #[inline]
    #[must_use]
    pub fn rnext(&self, e: WedgeKey) -> WedgeKey {
        self.mate(self.prev(self.mate(e)))
    }

    /// The mate rotated clockwise around the target of `e`. Equivalent to
    /// `rot_cw(mate(e))`.
    #[inline]
    #[must_use]
    pub fn rprev(&self, e: WedgeKey) -> WedgeKey {
        self.mate(self.next(self.mate(e)))
    }

    /// Whether the origin of `e` has degree one.
    #[inline]
    #[must_use]
    pub fn hanging_source(&self, e: WedgeKey) -> bool {
        self.prev(e) == self.mate(e)
    }

    /// Whether the target of `e` has degree one.
    #[inline]
    #[must_use]
    pub fn hanging_target(&self, e: WedgeKey) -> bool {
        self.next(e) == self.mate(e)
    }

    /// Whether the target of `e` has degree two (the face loop passes
    /// straight through it).
    #[inline]
    #[must_use]
    pub fn straight_next(&self, e: WedgeKey) -> bool {
        self.next(self.mate(self.next(e))) == self.mate(e)
    }

    /// Whether the origin of `e` has degree two.
    #[inline]
    #[must_use]
    pub fn straight_prev(&self, e: WedgeKey) -> bool {
        self.prev(self.mate(self.prev(e))) == self.mate(e)
    }

    /// Relabels the origin vertex of `e` alone; its siblings around the
    /// vertex are untouched. The Voronoi clipper uses this when a detached
    /// ray gets its own hit-point vertex.
    #[inline]
    pub fn set_vertex(&mut self, e: WedgeKey, vertex: usize) {
        self.edges[e].vertex = vertex;
    }

    // =========================================================================
    // LOW-LEVEL SPLICING
    // =========================================================================

    #[inline]
    fn link(&mut self, a: WedgeKey, b: WedgeKey) {
        self.edges[a].next = b;
        self.edges[b].prev = a;
    }

    /// Face-links `a → b` and, on the mate side, `mate(b) → mate(a)`.
    #[inline]
    fn bilink(&mut self, a: WedgeKey, b: WedgeKey) {
        let (ma, mb) = (self.mate(a), self.mate(b));
        self.link(mb, ma);
        self.link(a, b);
    }

    fn alloc(&mut self, vertex: usize) -> WedgeKey {
        self.edges.insert(Wedge {
            vertex,
            face: 0,
            next: WedgeKey::null(),
            prev: WedgeKey::null(),
            mate: WedgeKey::null(),
        })
    }

    /// Allocates a mated pair `u → v` with no face links yet.
    ///
    /// The pair is not a valid mesh on its own; every public constructor and
    /// connector immediately links it into face loops.
    fn couple(&mut self, u: usize, v: usize) -> WedgeKey {
        let a = self.alloc(u);
        let b = self.alloc(v);
        self.edges[a].mate = b;
        self.edges[b].mate = a;
        a
    }

    /// Allocates a bare wedge with explicit vertex and face tags and no
    /// links; the dualizer wires mates and face loops afterwards.
    pub(crate) fn alloc_tagged(&mut self, vertex: usize, face: isize) -> WedgeKey {
        let e = self.alloc(vertex);
        self.edges[e].face = face;
        e
    }

    pub(crate) fn set_mate(&mut self, a: WedgeKey, b: WedgeKey) {
        self.edges[a].mate = b;
    }

    pub(crate) fn link_pair(&mut self, a: WedgeKey, b: WedgeKey) {
        self.link(a, b);
    }

    fn free_pair(&mut self, e: WedgeKey) {
        let m = self.mate(e);
        self.edges.remove(e);
        self.edges.remove(m);
    }

    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Bootstraps a two-vertex mesh holding the single edge `u - v`; returns
    /// the half-edge `u → v`.
    ///
    /// Both wedges form one two-sided face loop.
    pub fn lone_edge(&mut self, u: usize, v: usize) -> WedgeKey {
        let a = self.couple(u, v);
        let m = self.mate(a);
        self.link(a, m);
        self.link(m, a);
        a
    }

    /// Bootstraps the degenerate three-collinear-vertex path `u - v - w`;
    /// returns the half-edge `u → v`.
    pub fn line(&mut self, u: usize, v: usize, w: usize) -> WedgeKey {
        let a = self.couple(u, v);
        let b = self.couple(v, w);
        self.bilink(a, b);
        let (ma, mb) = (self.mate(a), self.mate(b));
        self.link(ma, a);
        self.link(b, mb);
        a
    }

    /// Bootstraps the triangle `u, v, w` (interior face on the left of
    /// `u → v` when the vertices are counterclockwise); returns `u → v`.
    pub fn triangle(&mut self, u: usize, v: usize, w: usize) -> WedgeKey {
        let a = self.couple(u, v);
        let b = self.couple(v, w);
        let c = self.couple(w, u);
        self.bilink(a, b);
        self.bilink(b, c);
        self.bilink(c, a);
        a
    }

    /// Bootstraps a simple polygon over the vertex labels `vs` (one bounded
    /// face traced in the given order, one unbounded face); returns the
    /// half-edge `vs[0] → vs[1]`.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two labels are supplied.
    pub fn polygon(&mut self, vs: &[usize]) -> WedgeKey {
        let n = vs.len();
        assert!(n >= 2, "a polygon needs at least two vertices");
        if n == 2 {
            return self.lone_edge(vs[0], vs[1]);
        }
        let first = self.couple(vs[n - 1], vs[0]);
        let mut last = first;
        for w in vs.windows(2) {
            let edge = self.couple(w[0], w[1]);
            self.bilink(last, edge);
            last = edge;
        }
        self.bilink(last, first);
        self.next(first)
    }

    // =========================================================================
    // CONNECTORS
    // =========================================================================

    /// Splices a new edge from the target of `a` to the origin of `b`,
    /// which must bound a common face; returns the new half-edge.
    ///
    /// This is the fundamental growth primitive: the new edge is inserted
    /// after `a` and before `b` in their face loops, splitting the common
    /// face in two.
    pub fn connect(&mut self, a: WedgeKey, b: WedgeKey) -> WedgeKey {
        let e = self.couple(self.target(a), self.vertex(b));
        let m = self.mate(e);
        let an = self.next(a);
        let bp = self.prev(b);
        self.link(m, an);
        self.link(a, e);
        self.link(bp, m);
        self.link(e, b);
        e
    }

    /// Splices a new edge from the target of `a` to the fresh (or detached)
    /// vertex `v`, leaving the far endpoint hanging; returns the new
    /// half-edge.
    pub fn connect_to(&mut self, a: WedgeKey, v: usize) -> WedgeKey {
        let e = self.couple(self.target(a), v);
        let m = self.mate(e);
        let an = self.next(a);
        self.link(m, an);
        self.link(a, e);
        self.link(e, m);
        e
    }

    /// Splices a new edge from the fresh vertex `v` to the origin of `b`,
    /// leaving the near endpoint hanging; returns the new half-edge.
    pub fn connect_from(&mut self, v: usize, b: WedgeKey) -> WedgeKey {
        let e = self.couple(v, self.vertex(b));
        let m = self.mate(e);
        let bp = self.prev(b);
        self.link(bp, m);
        self.link(e, b);
        self.link(m, e);
        e
    }

    // =========================================================================
    // CUTTERS
    // =========================================================================

    /// Removes the undirected edge of `e` from the mesh, re-splicing the
    /// rotation lists at both endpoints, and frees the mated pair.
    ///
    /// Inverse of [`connect`](Self::connect).
    ///
    /// # Panics
    ///
    /// Panics if the face links around `e` are inconsistent (mesh
    /// corruption, always a bug).
    pub fn cut(&mut self, e: WedgeKey) {
        assert!(
            self.prev(self.next(e)) == e && self.next(self.prev(e)) == e,
            "cut on an edge with corrupt face links"
        );
        let m = self.mate(e);
        let (mp, en) = (self.prev(m), self.next(e));
        self.link(mp, en);
        let (ep, mn) = (self.prev(e), self.next(m));
        self.link(ep, mn);
        self.free_pair(e);
    }

    /// Cuts `e` and returns its counterclockwise sibling around the origin,
    /// which must exist.
    pub fn cut_ccw(&mut self, e: WedgeKey) -> WedgeKey {
        let f = self.rot_ccw(e);
        assert!(f != e, "cut_ccw on the last edge at its origin");
        self.cut(e);
        f
    }

    /// Cuts `e` and returns its clockwise sibling around the origin, which
    /// must exist.
    pub fn cut_cw(&mut self, e: WedgeKey) -> WedgeKey {
        let f = self.rot_cw(e);
        assert!(f != e, "cut_cw on the last edge at its origin");
        self.cut(e);
        f
    }

    /// Detaches the origin of `e` from its rotation list, leaving `e`
    /// hanging by its source. The edge stays allocated.
    pub fn hang_source(&mut self, e: WedgeKey) {
        let m = self.mate(e);
        let (ep, mn) = (self.prev(e), self.next(m));
        self.link(ep, mn);
        self.link(m, e);
    }

    /// Detaches the target of `e` from its rotation list, leaving `e`
    /// hanging by its target. The edge stays allocated.
    pub fn hang_target(&mut self, e: WedgeKey) {
        let m = self.mate(e);
        let (mp, en) = (self.prev(m), self.next(e));
        self.link(mp, en);
        self.link(e, m);
    }

    // =========================================================================
    // FACE HELPERS
    // =========================================================================

    /// Number of half-edges on the face loop of `e`.
    #[must_use]
    pub fn face_len(&self, e: WedgeKey) -> usize {
        let mut count = 1;
        let mut walk = self.next(e);
        while walk != e {
            count += 1;
            walk = self.next(walk);
        }
        count
    }

    /// Writes `face` into every wedge on the face loop of `e`.
    pub fn tag_face(&mut self, e: WedgeKey, face: isize) {
        let mut walk = e;
        loop {
            self.edges[walk].face = face;
            walk = self.next(walk);
            if walk == e {
                break;
            }
        }
    }

    /// Structural self-check over everything reachable from `start`:
    /// mate involution, `next`/`prev` inversion, and closed face loops.
    ///
    /// Intended for tests and debug assertions; cost is linear in the number
    /// of reachable half-edges.
    #[must_use]
    pub fn is_consistent(&self, start: WedgeKey) -> bool {
        let order = self.linearize(start);
        for &e in &order {
            let m = self.mate(e);
            if m == e || self.mate(m) != e {
                return false;
            }
            if self.prev(self.next(e)) != e || self.next(self.prev(e)) != e {
                return false;
            }
            if self.vertex(self.next(e)) != self.target(e) {
                return false;
            }
        }
        // Every reachable wedge must close its face loop within the arena.
        let bound = self.len() + 1;
        for &e in &order {
            let mut walk = self.next(e);
            let mut steps = 1;
            while walk != e {
                walk = self.next(walk);
                steps += 1;
                if steps > bound {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation_degree(mesh: &WedgeMesh, e: WedgeKey) -> usize {
        let mut count = 1;
        let mut walk = mesh.rot_ccw(e);
        while walk != e {
            assert_eq!(mesh.vertex(walk), mesh.vertex(e));
            count += 1;
            walk = mesh.rot_ccw(walk);
        }
        count
    }

    #[test]
    fn lone_edge_is_a_two_sided_loop() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.lone_edge(4, 7);
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.vertex(e), 4);
        assert_eq!(mesh.target(e), 7);
        assert_eq!(mesh.next(e), mesh.mate(e));
        assert_eq!(mesh.face_len(e), 2);
        assert!(mesh.hanging_source(e));
        assert!(mesh.hanging_target(e));
        assert!(mesh.is_consistent(e));
    }

    #[test]
    fn triangle_invariants() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        assert_eq!(mesh.len(), 6);
        assert_eq!(mesh.face_len(e), 3);
        assert_eq!(mesh.face_len(mesh.mate(e)), 3);
        assert!(mesh.is_consistent(e));

        // Face loop visits 0 -> 1 -> 2.
        let f = mesh.next(e);
        let g = mesh.next(f);
        assert_eq!(mesh.vertex(f), 1);
        assert_eq!(mesh.vertex(g), 2);
        assert_eq!(mesh.next(g), e);

        // Each corner has rotation degree 2.
        assert_eq!(rotation_degree(&mesh, e), 2);
        assert_eq!(rotation_degree(&mesh, f), 2);
    }

    #[test]
    fn line_is_degenerate_path() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.line(0, 1, 2);
        assert_eq!(mesh.len(), 4);
        // One face wrapping the whole path: 0 -> 1 -> 2 -> 1 -> back.
        assert_eq!(mesh.face_len(e), 4);
        assert!(mesh.is_consistent(e));
        assert!(mesh.hanging_source(e));
        let mid = mesh.next(e);
        assert_eq!(mesh.vertex(mid), 1);
        assert!(mesh.straight_prev(mid));
    }

    #[test]
    fn polygon_faces() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3, 4]);
        assert_eq!(mesh.vertex(e), 0);
        assert_eq!(mesh.target(e), 1);
        assert_eq!(mesh.len(), 10);
        assert_eq!(mesh.face_len(e), 5);
        assert_eq!(mesh.face_len(mesh.mate(e)), 5);
        assert!(mesh.is_consistent(e));
    }

    #[test]
    fn connect_then_cut_roundtrips() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        // Split the square along the diagonal 1 -> 3.
        let diag = mesh.connect(e, mesh.prev(e));
        assert_eq!(mesh.vertex(diag), 1);
        assert_eq!(mesh.target(diag), 3);
        assert_eq!(mesh.len(), 10);
        assert_eq!(mesh.face_len(diag), 3);
        assert_eq!(mesh.face_len(mesh.mate(diag)), 3);
        assert!(mesh.is_consistent(e));

        mesh.cut(diag);
        assert_eq!(mesh.len(), 8);
        assert_eq!(mesh.face_len(e), 4);
        assert!(mesh.is_consistent(e));
    }

    #[test]
    fn connect_to_leaves_hanging_target() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        let spike = mesh.connect_to(e, 9);
        assert_eq!(mesh.vertex(spike), 1);
        assert_eq!(mesh.target(spike), 9);
        assert!(mesh.hanging_target(spike));
        assert!(mesh.is_consistent(e));
    }

    #[test]
    fn connect_from_leaves_hanging_source() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        let spike = mesh.connect_from(9, e);
        assert_eq!(mesh.vertex(spike), 9);
        assert_eq!(mesh.target(spike), 0);
        assert!(mesh.hanging_source(spike));
        assert!(mesh.is_consistent(e));
    }

    #[test]
    fn hang_source_detaches_rotation() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e));
        mesh.hang_source(diag);
        assert!(mesh.hanging_source(diag));
        // One merged loop: the four square sides plus both halves of the
        // hanging diagonal.
        assert_eq!(mesh.face_len(e), 6);
    }

    #[test]
    fn hang_target_detaches_rotation() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e));
        mesh.hang_target(diag);
        assert!(mesh.hanging_target(diag));
        assert!(!mesh.hanging_source(diag));
        // One merged loop, as in the source-hanging case.
        assert_eq!(mesh.face_len(e), 6);
        assert!(mesh.is_consistent(e));
    }

    #[test]
    fn reverse_rotations_step_around_the_target() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e)); // 1 -> 3
        // Both reverse rotations originate at the target of e.
        assert_eq!(mesh.vertex(mesh.rnext(e)), mesh.target(e));
        assert_eq!(mesh.vertex(mesh.rprev(e)), mesh.target(e));
        // They are the mate's rotations, so the opposite rotation undoes
        // them.
        assert_eq!(mesh.rot_cw(mesh.rnext(e)), mesh.mate(e));
        assert_eq!(mesh.rot_ccw(mesh.rprev(e)), mesh.mate(e));
        // Vertex 1 has degree three; two ccw steps from the mate reach the
        // diagonal.
        assert_eq!(mesh.rot_ccw(mesh.rot_ccw(mesh.mate(e))), diag);
    }

    #[test]
    fn straight_walkers_detect_degree_two_targets() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.line(0, 1, 2);
        let mid = mesh.next(e); // 1 -> 2
        // The path passes straight through the middle vertex.
        assert!(mesh.straight_next(e));
        assert!(mesh.straight_prev(mid));

        // A branching vertex is not straight.
        let mut branched = WedgeMesh::new();
        let f = branched.polygon(&[0, 1, 2, 3]);
        let _diag = branched.connect(f, branched.prev(f));
        assert!(!branched.straight_next(f));
    }

    #[test]
    fn keys_tracks_live_half_edges() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e));
        assert_eq!(mesh.keys().count(), mesh.len());
        assert!(mesh.keys().any(|k| k == diag));

        mesh.cut(diag);
        assert_eq!(mesh.keys().count(), 8);
        assert!(mesh.keys().all(|k| k != diag));
    }

    #[test]
    fn cut_ccw_steps_around_origin() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e)); // 1 -> 3
        let side = mesh.cut_ccw(diag);
        assert_eq!(mesh.vertex(side), 1);
        assert_eq!(mesh.len(), 8);
        assert!(mesh.is_consistent(side));
    }

    #[test]
    fn tag_face_marks_one_loop_only() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        mesh.tag_face(e, 5);
        mesh.tag_face(mesh.mate(e), -1);
        assert_eq!(mesh.face(e), 5);
        assert_eq!(mesh.face(mesh.next(e)), 5);
        assert_eq!(mesh.face(mesh.mate(e)), -1);
    }

    #[test]
    fn clear_releases_the_pool() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        assert!(mesh.contains(e));
        mesh.clear();
        assert!(mesh.is_empty());
        assert!(!mesh.contains(e));
    }
}
