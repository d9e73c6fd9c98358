//! Voronoi diagrams by Delaunay dualization.
//!
//! [`voronoi`] triangulates the sites, strips non-essential edges
//! ([`detriangulate`]), dualizes the mesh in place, and computes one
//! circumcenter per bounded face. Dual vertex 0 is the unbounded face and
//! stands for the point at infinity; every hull cell owns edges incident to
//! it.
//!
//! [`clip_to_box`] then replaces the point at infinity with real geometry:
//! it intersects each infinite bisector ray with an inflated bounding box
//! and stitches a closed boundary through the hit points and box corners,
//! leaving a finite planar subdivision whose cells are the clipped Voronoi
//! regions.

use crate::delaunay::{detriangulate, triangulate, Triangulation, TriangulationError};
use crate::geometry::point::{Pd2, Pt2};
use crate::geometry::ray::Ray;
use crate::mesh::wedge::{WedgeKey, WedgeMesh};
use rand::Rng;
use thiserror::Error;

/// Why a Voronoi diagram could not be built or clipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VoronoiError {
    /// The underlying triangulation failed.
    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
    /// All sites are collinear (or there are only two), so the diagram has
    /// no Voronoi vertex to clip around.
    #[error("degenerate sites: no bounded Delaunay face to dualize")]
    DegenerateSites,
    /// A bisector ray missed the bounding box on all four sides. Fatal
    /// precision failure; the box inflation and perturbation are sized to
    /// make this unreachable.
    #[error("bisector of sites {u} and {v} found no bounding box intersection")]
    RayEscapedBox {
        /// One site of the hull edge whose bisector failed.
        u: usize,
        /// The other site.
        v: usize,
    },
}

/// Circumcenter of the triangle `abc` in `f64`.
///
/// The triple must not be collinear; a collinear triple divides by zero and
/// yields non-finite coordinates.
#[must_use]
pub fn circumcenter(a: Pt2, b: Pt2, c: Pt2) -> Pd2 {
    #[allow(clippy::cast_precision_loss)]
    let (na, nb, nc) = (a.norm2() as f64, b.norm2() as f64, c.norm2() as f64);
    let (a, b, c) = (Pd2::from(a), Pd2::from(b), Pd2::from(c));
    let det = a.cross(b) + b.cross(c) + c.cross(a);
    let x = (na * (b.y - c.y) + nb * (c.y - a.y) + nc * (a.y - b.y)) / (2.0 * det);
    let y = (na * (c.x - b.x) + nb * (a.x - c.x) + nc * (b.x - a.x)) / (2.0 * det);
    Pd2::new(x, y)
}

/// A Voronoi diagram as a dual half-edge mesh plus indexed circumcenters.
///
/// The mesh holds both the primal (Delaunay-essential) subdivision and its
/// dual; `dual` lists the dual wedges grouped by source face. Dual vertex
/// labels index `centers`: label 0 is the unbounded face (center at
/// infinity until [`clip_to_box`] replaces it), labels `1..faces` are
/// bounded faces, and clipping appends four box corners plus one hit point
/// per remaining infinite ray.
///
/// Dual wedge face tags carry the *site* (input point index) whose region
/// the dual face surrounds.
///
/// # Examples
///
/// ```rust
/// use wedge::geometry::point::Pt2;
/// use wedge::voronoi::voronoi;
///
/// let sites = vec![
///     Pt2::new(0, 0),
///     Pt2::new(4, 0),
///     Pt2::new(4, 4),
///     Pt2::new(0, 4),
/// ];
/// let v = voronoi(&sites).unwrap();
/// // The four co-circular sites leave one bounded face; its Voronoi
/// // vertex is the square's center.
/// assert_eq!(v.faces, 2);
/// assert_eq!(v.centers[1], wedge::geometry::point::Pd2::new(2.0, 2.0));
/// ```
#[derive(Clone, Debug)]
pub struct VoronoiDiagram {
    /// Arena holding the primal subdivision and its dual.
    pub mesh: WedgeMesh,
    /// A primal wedge on the convex hull.
    pub hull: WedgeKey,
    /// Number of primal faces (face 0 is unbounded).
    pub faces: usize,
    /// Dual wedges in primal traversal order, grouped by source face id.
    pub dual: Vec<WedgeKey>,
    /// One center per dual vertex label.
    pub centers: Vec<Pd2>,
}

/// Dual face tags are primal vertex labels, nonnegative by construction.
#[allow(clippy::cast_sign_loss)]
fn tag_site(tag: isize) -> usize {
    debug_assert!(tag >= 0);
    tag as usize
}

/// Builds the Voronoi diagram of `sites`.
///
/// Runs in O(N log N). The result is unclipped: cells of hull sites are
/// unbounded and share dual vertex 0, whose center is at infinity.
///
/// # Errors
///
/// Propagates [`TriangulationError`] from the Delaunay stage.
pub fn voronoi(sites: &[Pt2]) -> Result<VoronoiDiagram, VoronoiError> {
    let mut tri = triangulate(sites)?;
    detriangulate(&mut tri, sites);
    let Triangulation { mut mesh, hull } = tri;
    let (faces, dual) = mesh.dual_all(hull);

    let mut centers = vec![Pd2::INFINITY; faces];
    for i in 1..dual.len() {
        let f = mesh.vertex(dual[i]);
        if f > mesh.vertex(dual[i - 1]) {
            // First dual wedge of bounded face f: its own face tag and those
            // of its rotation neighbors are three corners of the face, which
            // share one circumcircle even when the face is not a triangle.
            let u = tag_site(mesh.face(dual[i]));
            let v = tag_site(mesh.face(mesh.rot_ccw(dual[i])));
            let w = tag_site(mesh.face(mesh.rot_cw(dual[i])));
            centers[f] = circumcenter(sites[u], sites[v], sites[w]);
        }
    }

    Ok(VoronoiDiagram {
        mesh,
        hull,
        faces,
        dual,
        centers,
    })
}

/// First intersection of the hull-edge bisector behind `edge` with the box,
/// testing sides in clockwise order starting from `side`.
fn hit_box(
    mesh: &WedgeMesh,
    sites: &[Pt2],
    box_sides: &[Ray; 4],
    edge: WedgeKey,
    side: usize,
) -> Result<(usize, Pd2), VoronoiError> {
    let u = tag_site(mesh.face(mesh.mate(edge)));
    let v = tag_site(mesh.face(edge));
    let midpoint = (Pd2::from(sites[u]) + Pd2::from(sites[v])) * 0.5;
    let bisector = Ray::ray(midpoint, Pd2::from((sites[v] - sites[u]).perp_ccw()));

    for i in 0..4 {
        let j = (side + i) % 4;
        let hit = box_sides[j].intersect_unchecked(bisector);
        // Forward along the bisector and within the side's finite segment.
        if bisector.coef(hit) > 0.0 && (0.0..1.0).contains(&box_sides[j].coef(hit)) {
            return Ok((j, hit));
        }
    }
    Err(VoronoiError::RayEscapedBox { u, v })
}

/// Clips the unbounded cells of `diagram` to a finite bounding box, in
/// place; returns a wedge on the new outside face.
///
/// The box contains every site and finite center, inflated by 1.5× its own
/// diagonal and then widened per axis by a random fraction in
/// `[0.007, 0.073)` drawn from `rng`. The perturbation makes a bisector ray
/// hitting a box corner exactly vanishingly unlikely; a corner hit has no
/// single well-defined clipped edge. Pass a seeded generator for
/// reproducible output.
///
/// On return, dual vertex 0 holds the first ray's hit point, four box
/// corners and one hit point per further ray are appended to `centers`, and
/// the outside face is tagged `-1` while every cell keeps its site tag.
///
/// # Errors
///
/// - [`VoronoiError::DegenerateSites`] when the diagram has no bounded
///   face (all sites collinear);
/// - [`VoronoiError::RayEscapedBox`] on bounding-box intersection failure,
///   which indicates precision exhaustion and leaves the mesh in an
///   unspecified state.
pub fn clip_to_box(
    diagram: &mut VoronoiDiagram,
    sites: &[Pt2],
    rng: &mut impl Rng,
) -> Result<WedgeKey, VoronoiError> {
    if diagram.faces < 2 {
        return Err(VoronoiError::DegenerateSites);
    }
    let v_count = diagram.centers.len();
    let mesh = &mut diagram.mesh;
    let centers = &mut diagram.centers;
    let mut t = diagram.dual[0];
    debug_assert_eq!(mesh.vertex(t), 0);

    // Minimal box over all sites and finite centers.
    let mut lo = Pd2::from(sites[0]);
    let mut hi = lo;
    for &p in &sites[1..] {
        lo = lo.min(Pd2::from(p));
        hi = hi.max(Pd2::from(p));
    }
    for &c in &centers[1..] {
        lo = lo.min(c);
        hi = hi.max(c);
    }

    // Inflate by the diagonal, then perturb each axis so no bisector ray
    // meets a corner exactly.
    let spacing = 1.5 * (hi - lo).norm();
    lo = lo - Pd2::new(spacing, spacing);
    hi = hi + Pd2::new(spacing, spacing);
    let width = hi - lo;
    let dx = rng.random_range(0.007..0.073);
    let dy = rng.random_range(0.007..0.073);
    lo.x -= dx * width.x;
    hi.x += dx * width.x;
    lo.y -= dy * width.y;
    hi.y += dy * width.y;

    let a = Pd2::new(lo.x, lo.y);
    let b = Pd2::new(lo.x, hi.y);
    let c = Pd2::new(hi.x, hi.y);
    let d = Pd2::new(hi.x, lo.y);
    centers.extend([a, b, c, d]);

    // Box side lines, clockwise; side i starts at corner label v_count + i.
    let box_sides = [
        Ray::through(a, b),
        Ray::through(b, c),
        Ray::through(c, d),
        Ray::through(d, a),
    ];

    // The infinite edges spiking out of the point at infinity, in
    // counterclockwise rotation order.
    let mut rays = vec![t];
    loop {
        t = mesh.rot_ccw(t);
        if t == rays[0] {
            break;
        }
        rays.push(t);
    }
    for &ray in &rays {
        mesh.hang_source(ray);
    }

    let (first_side, first_hit) = hit_box(mesh, sites, &box_sides, t, 0)?;
    let mut side = first_side;
    let mut label = v_count + 4;
    let mut around = mesh.mate(t);
    // Dual vertex 0 becomes the first ray's hit point.
    centers[0] = first_hit;

    // Stitch the boundary clockwise ray by ray, turning at each corner the
    // walk passes.
    for &ray in &rays[1..] {
        let (next_side, hit) = hit_box(mesh, sites, &box_sides, ray, side)?;
        while next_side != side {
            side = (side + 1) % 4;
            around = mesh.connect_to(around, v_count + side);
        }
        mesh.set_vertex(ray, label);
        label += 1;
        centers.push(hit);
        around = mesh.connect(around, ray);
    }

    // Wrap past any remaining corners and close the loop at the first ray.
    while side != first_side {
        side = (side + 1) % 4;
        around = mesh.connect_to(around, v_count + side);
    }
    let around = mesh.connect(around, mesh.rot_cw(rays[0]));

    // The stitched edges carry stale face tags: flood the outside, then
    // re-flood each cell from its ray.
    mesh.tag_face(around, -1);
    for &ray in &rays {
        let site = mesh.face(ray);
        mesh.tag_face(ray, site);
    }
    Ok(around)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::fdist;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cross_sites() -> Vec<Pt2> {
        vec![
            Pt2::new(0, 0),
            Pt2::new(4, 0),
            Pt2::new(4, 4),
            Pt2::new(0, 4),
            Pt2::new(2, 2),
        ]
    }

    #[test]
    fn circumcenter_of_right_triangle() {
        let center = circumcenter(Pt2::new(0, 0), Pt2::new(2, 0), Pt2::new(0, 2));
        assert_relative_eq!(center.x, 1.0);
        assert_relative_eq!(center.y, 1.0);
    }

    #[test]
    fn circumcenter_orientation_independent() {
        let (a, b, c) = (Pt2::new(1, 1), Pt2::new(7, 2), Pt2::new(3, 8));
        let ccw = circumcenter(a, b, c);
        let cw = circumcenter(a, c, b);
        assert_relative_eq!(ccw.x, cw.x);
        assert_relative_eq!(ccw.y, cw.y);
        // Equidistant from all three corners.
        let r = fdist(ccw, a.into());
        assert_relative_eq!(fdist(ccw, b.into()), r, max_relative = 1e-12);
        assert_relative_eq!(fdist(ccw, c.into()), r, max_relative = 1e-12);
    }

    #[test]
    fn collinear_circumcenter_is_non_finite() {
        let center = circumcenter(Pt2::new(0, 0), Pt2::new(1, 1), Pt2::new(2, 2));
        assert!(!center.is_finite());
    }

    #[test]
    fn cocircular_square_collapses_to_one_center() {
        let sites = vec![
            Pt2::new(0, 0),
            Pt2::new(4, 0),
            Pt2::new(4, 4),
            Pt2::new(0, 4),
        ];
        let v = voronoi(&sites).unwrap();
        assert_eq!(v.faces, 2);
        assert!(!v.centers[0].is_finite());
        assert_relative_eq!(v.centers[1].x, 2.0);
        assert_relative_eq!(v.centers[1].y, 2.0);
    }

    #[test]
    fn cross_has_four_cell_corners() {
        let sites = cross_sites();
        let v = voronoi(&sites).unwrap();
        // Four triangles around the middle site plus the unbounded face.
        assert_eq!(v.faces, 5);
        assert!(!v.centers[0].is_finite());
        let mut finite: Vec<(f64, f64)> =
            v.centers[1..].iter().map(|c| (c.x, c.y)).collect();
        finite.sort_unstable_by(f64_pair_cmp);
        assert_eq!(finite, vec![(0.0, 2.0), (2.0, 0.0), (2.0, 4.0), (4.0, 2.0)]);
    }

    fn f64_pair_cmp(a: &(f64, f64), b: &(f64, f64)) -> std::cmp::Ordering {
        a.partial_cmp(b).unwrap()
    }

    #[test]
    fn collinear_sites_cannot_be_clipped() {
        let sites = vec![Pt2::new(0, 0), Pt2::new(5, 0), Pt2::new(10, 0)];
        let mut v = voronoi(&sites).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            clip_to_box(&mut v, &sites, &mut rng),
            Err(VoronoiError::DegenerateSites)
        );
    }

    #[test]
    fn clipping_closes_the_diagram() {
        let sites = cross_sites();
        let mut v = voronoi(&sites).unwrap();
        let finite_before = v.centers[1..].to_vec();
        let mut rng = StdRng::seed_from_u64(7);
        let outside = clip_to_box(&mut v, &sites, &mut rng).unwrap();

        assert!(v.mesh.is_consistent(outside));
        assert_eq!(v.mesh.face(outside), -1);

        // Four hull rays: one reuses vertex 0, three get fresh labels, and
        // the four corners sit in between.
        assert_eq!(v.centers.len(), 5 + 4 + 3);
        // Finite centers survive clipping untouched.
        assert_eq!(&v.centers[1..5], &finite_before[..]);
        // Everything is finite now, including the recycled vertex 0.
        for center in &v.centers {
            assert!(center.is_finite());
        }

        // Hit points lie on the box boundary spanned by the corners.
        let (lo, hi) = (v.centers[5], v.centers[7]);
        for hit in std::iter::once(v.centers[0]).chain(v.centers[9..].iter().copied()) {
            let on_x = (hit.x - lo.x).abs() < 1e-9 || (hit.x - hi.x).abs() < 1e-9;
            let on_y = (hit.y - lo.y).abs() < 1e-9 || (hit.y - hi.y).abs() < 1e-9;
            assert!(on_x || on_y, "hit point {hit} off the box boundary");
        }
    }

    #[test]
    fn clipping_is_deterministic_for_a_fixed_seed() {
        let sites = cross_sites();
        let mut first = voronoi(&sites).unwrap();
        let mut second = voronoi(&sites).unwrap();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        clip_to_box(&mut first, &sites, &mut rng1).unwrap();
        clip_to_box(&mut second, &sites, &mut rng2).unwrap();
        assert_eq!(first.centers, second.centers);
    }

    #[test]
    fn cells_keep_their_site_tags() {
        let sites = cross_sites();
        let mut v = voronoi(&sites).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let outside = clip_to_box(&mut v, &sites, &mut rng).unwrap();

        let mut seen = vec![false; sites.len()];
        for e in v.mesh.linearize(outside) {
            let tag = v.mesh.face(e);
            assert!(tag >= -1 && tag < sites.len() as isize);
            if tag >= 0 {
                seen[tag_site(tag)] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "every site keeps a cell");
    }
}
