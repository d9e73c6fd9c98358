//! Whole-mesh traversal, extraction, and dualization.
//!
//! Every routine here reaches the full connected component of a starting
//! wedge by the same breadth-first discipline: visit a face loop, then the
//! face loops of every visited wedge's mate. Each half-edge is visited
//! exactly once; the traversal owns its visited set, so the mesh itself
//! needs no transient mark field (the original design's `mark` counter
//! becomes external state).

use crate::mesh::wedge::{WedgeKey, WedgeMesh};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// One face boundary loop as origin vertex labels, in face order.
///
/// Triangulation faces are triangles, so the inline capacity covers the
/// common case; hull and dual faces may spill.
pub type FaceLoop = SmallVec<[usize; 4]>;

impl WedgeMesh {
    /// Every half-edge reachable from `start`, in breadth-first face order:
    /// the face loop of `start` first, then face loops discovered through
    /// mates. Each half-edge appears exactly once.
    #[must_use]
    pub fn linearize(&self, start: WedgeKey) -> Vec<WedgeKey> {
        let mut order = Vec::new();
        let mut seen = FxHashSet::default();
        self.push_face(start, &mut order, &mut seen);
        let mut i = 0;
        while i < order.len() {
            let mate = self.mate(order[i]);
            self.push_face(mate, &mut order, &mut seen);
            i += 1;
        }
        order
    }

    fn push_face(&self, start: WedgeKey, order: &mut Vec<WedgeKey>, seen: &mut FxHashSet<WedgeKey>) {
        let mut e = start;
        while seen.insert(e) {
            order.push(e);
            e = self.next(e);
        }
    }

    /// One representative wedge per reachable face, and the full
    /// breadth-first order; tags every wedge's `face` field with its face's
    /// index into the returned representatives.
    ///
    /// Face 0 is the face of `start` itself (for a triangulation hull edge,
    /// the unbounded face).
    pub fn face_groups(&mut self, start: WedgeKey) -> (Vec<WedgeKey>, Vec<WedgeKey>) {
        let mut reps = Vec::new();
        let mut order = Vec::new();
        let mut seen = FxHashSet::default();

        let mut add_face = |mesh: &WedgeMesh,
                            e: WedgeKey,
                            reps: &mut Vec<WedgeKey>,
                            order: &mut Vec<WedgeKey>,
                            seen: &mut FxHashSet<WedgeKey>| {
            if !seen.contains(&e) {
                reps.push(e);
                mesh.push_face(e, order, seen);
            }
        };

        add_face(self, start, &mut reps, &mut order, &mut seen);
        let mut i = 0;
        while i < order.len() {
            let mate = self.mate(order[i]);
            add_face(self, mate, &mut reps, &mut order, &mut seen);
            i += 1;
        }

        for (f, &rep) in reps.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            self.tag_face(rep, f as isize);
        }
        (reps, order)
    }

    /// All undirected edges reachable from `start` as `[origin, target]`
    /// label pairs, each undirected edge reported once.
    ///
    /// With `canonical`, pairs are ordered `min ≤ max` and the list is
    /// sorted; otherwise the order is traversal order.
    #[must_use]
    pub fn extract_edges(&self, start: WedgeKey, canonical: bool) -> Vec<[usize; 2]> {
        let mut edges = Vec::new();
        let mut seen: FxHashSet<WedgeKey> = FxHashSet::default();
        let order = self.linearize(start);
        for &e in &order {
            // Report the pair when its second half comes up.
            if seen.contains(&self.mate(e)) {
                edges.push([self.vertex(e), self.target(e)]);
            }
            seen.insert(e);
        }
        if canonical {
            for edge in &mut edges {
                edge.sort_unstable();
            }
            edges.sort_unstable();
        }
        edges
    }

    /// All face boundary loops reachable from `start`, as vertex labels.
    ///
    /// The face of `start` comes first (the unbounded face when `start` is
    /// a triangulation hull edge). With `canonical`, each loop is rotated so
    /// its smallest label leads and the loops are sorted.
    #[must_use]
    pub fn extract_faces(&self, start: WedgeKey, canonical: bool) -> Vec<FaceLoop> {
        let mut faces = Vec::new();
        let mut order = Vec::new();
        let mut seen = FxHashSet::default();

        let mut add_face = |mesh: &WedgeMesh,
                            e: WedgeKey,
                            faces: &mut Vec<FaceLoop>,
                            order: &mut Vec<WedgeKey>,
                            seen: &mut FxHashSet<WedgeKey>| {
            if !seen.contains(&e) {
                let before = order.len();
                mesh.push_face(e, order, seen);
                let mut face: FaceLoop = order[before..].iter().map(|&w| mesh.vertex(w)).collect();
                if canonical {
                    let lead = face
                        .iter()
                        .enumerate()
                        .min_by_key(|&(_, v)| v)
                        .map_or(0, |(i, _)| i);
                    face.rotate_left(lead);
                }
                faces.push(face);
            }
        };

        add_face(self, start, &mut faces, &mut order, &mut seen);
        let mut i = 0;
        while i < order.len() {
            let mate = self.mate(order[i]);
            add_face(self, mate, &mut faces, &mut order, &mut seen);
            i += 1;
        }

        if canonical {
            faces.sort_unstable();
        }
        faces
    }

    /// Builds the planar dual of everything reachable from `start`, in one
    /// pass, inside the same arena.
    ///
    /// One dual wedge is allocated per primal wedge. A dual wedge's
    /// `vertex` is its primal face's id (faces numbered in discovery order,
    /// so face 0 is the face of `start`); its `face` tag carries the primal
    /// *target* vertex label, which identifies the primal cell the dual
    /// face surrounds.
    ///
    /// Returns the number of primal faces and the dual wedges in primal
    /// traversal order — grouped by source face id, so consecutive runs of
    /// equal `vertex` delimit dual vertices.
    pub fn dual_all(&mut self, start: WedgeKey) -> (usize, Vec<WedgeKey>) {
        // Discover all primal wedges, numbering faces as they appear.
        let mut order: Vec<WedgeKey> = Vec::new();
        let mut face_of: Vec<usize> = Vec::new();
        let mut seen = FxHashSet::default();
        let mut faces = 0;

        let mut add_face = |mesh: &WedgeMesh,
                            e: WedgeKey,
                            order: &mut Vec<WedgeKey>,
                            face_of: &mut Vec<usize>,
                            seen: &mut FxHashSet<WedgeKey>,
                            faces: &mut usize| {
            if !seen.contains(&e) {
                let before = order.len();
                mesh.push_face(e, order, seen);
                face_of.resize(order.len(), *faces);
                debug_assert!(order.len() > before);
                *faces += 1;
            }
        };

        add_face(self, start, &mut order, &mut face_of, &mut seen, &mut faces);
        let mut i = 0;
        while i < order.len() {
            let mate = self.mate(order[i]);
            add_face(self, mate, &mut order, &mut face_of, &mut seen, &mut faces);
            i += 1;
        }

        let index: FxHashMap<WedgeKey, usize> =
            order.iter().enumerate().map(|(i, &e)| (e, i)).collect();

        // Row per primal wedge: dual mate is the primal mate's dual; dual
        // face-successor is the dual of prev(mate), which turns around the
        // primal target vertex.
        let rows: Vec<(usize, usize, usize, usize)> = order
            .iter()
            .enumerate()
            .map(|(i, &e)| {
                let mate = self.mate(e);
                (
                    face_of[i],
                    self.target(e),
                    index[&mate],
                    index[&self.prev(mate)],
                )
            })
            .collect();

        let dual: Vec<WedgeKey> = rows
            .iter()
            .map(|&(f, v, _, _)| {
                #[allow(clippy::cast_possible_wrap)]
                let tag = v as isize;
                self.alloc_tagged(f, tag)
            })
            .collect();

        for (i, &(_, _, mate_idx, next_idx)) in rows.iter().enumerate() {
            self.set_mate(dual[i], dual[mate_idx]);
            self.link_pair(dual[i], dual[next_idx]);
        }

        (faces, dual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linearize_visits_each_half_edge_once() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let order = mesh.linearize(e);
        assert_eq!(order.len(), mesh.len());
        let distinct: FxHashSet<WedgeKey> = order.iter().copied().collect();
        assert_eq!(distinct.len(), order.len());
    }

    #[test]
    fn extract_edges_of_triangle() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        let edges = mesh.extract_edges(e, true);
        assert_eq!(edges, vec![[0, 1], [0, 2], [1, 2]]);
    }

    #[test]
    fn extract_faces_of_square_with_diagonal() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e)); // 1 -> 3
        let _ = diag;
        let faces = mesh.extract_faces(e, true);
        // Outer square plus the two triangles.
        assert_eq!(faces.len(), 3);
        assert!(faces.contains(&FaceLoop::from_slice(&[0, 1, 3])));
        assert!(faces.contains(&FaceLoop::from_slice(&[1, 2, 3])));
        assert!(faces.contains(&FaceLoop::from_slice(&[0, 3, 2, 1])));
    }

    #[test]
    fn face_groups_tags_every_wedge() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let diag = mesh.connect(e, mesh.prev(e));
        let (reps, order) = mesh.face_groups(mesh.mate(e));
        assert_eq!(reps.len(), 3);
        assert_eq!(order.len(), mesh.len());
        // Face 0 is the face of the starting wedge.
        assert_eq!(mesh.face(mesh.mate(e)), 0);
        // Mates of an interior edge carry two different face tags.
        assert_ne!(mesh.face(diag), mesh.face(mesh.mate(diag)));
    }

    #[test]
    fn dual_of_triangle_is_a_lone_dual_edge() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.triangle(0, 1, 2);
        let primal_len = mesh.len();
        let (faces, dual) = mesh.dual_all(mesh.mate(e));
        // Two primal faces (outer, inner) joined by three dual edges.
        assert_eq!(faces, 2);
        assert_eq!(dual.len(), primal_len);
        assert_eq!(mesh.len(), 2 * primal_len);
        // Starting from the outer face, the first dual wedge originates at
        // dual vertex 0.
        assert_eq!(mesh.vertex(dual[0]), 0);
        assert!(mesh.is_consistent(dual[0]));
        // Every dual wedge connects the two faces.
        for &d in &dual {
            let (u, v) = (mesh.vertex(d), mesh.target(d));
            assert!(u < 2 && v < 2 && u != v);
        }
        // Dual faces wrap primal vertices: each dual face has length 2
        // (each primal corner meets two edges).
        assert_eq!(mesh.face_len(dual[0]), 2);
    }

    #[test]
    fn dual_wedges_are_grouped_by_source_face() {
        let mut mesh = WedgeMesh::new();
        let e = mesh.polygon(&[0, 1, 2, 3]);
        let _diag = mesh.connect(e, mesh.prev(e));
        let (faces, dual) = mesh.dual_all(mesh.mate(e));
        assert_eq!(faces, 3);
        let ids: Vec<usize> = dual.iter().map(|&d| mesh.vertex(d)).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "dual edges must be grouped by face id");
    }
}
