//! Duality properties of the Voronoi construction.
//!
//! - Every finite Voronoi vertex is equidistant from all sites whose cells
//!   meet it
//! - Finite Voronoi edges are perpendicular to their Delaunay edges
//! - Bounding-box clipping preserves finite vertices and closes the mesh

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wedge::geometry::sample::{sample, Distribution};
use wedge::prelude::*;

fn voronoi_sites() -> impl Strategy<Value = Vec<Pt2>> {
    let shapes = [
        Distribution::Square,
        Distribution::Disk,
        Distribution::Circle,
    ];
    (prop::sample::select(shapes.to_vec()), 4_usize..=300, any::<u64>()).prop_map(
        |(shape, n, seed)| {
            let mut rng = StdRng::seed_from_u64(seed);
            sample(shape, n, 1200, &mut rng)
        },
    )
}

/// Site label stored in a dual wedge's face tag.
fn site_of(diagram: &VoronoiDiagram, e: WedgeKey) -> usize {
    usize::try_from(diagram.mesh.face(e)).expect("cell tags are site indices")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the center of every bounded dual face is equidistant from
    /// each site around that face.
    #[test]
    fn prop_centers_are_equidistant(sites in voronoi_sites()) {
        let v = voronoi(&sites).unwrap();
        prop_assume!(v.faces >= 2);

        for &e in &v.dual {
            let f = v.mesh.vertex(e);
            if f == 0 {
                continue;
            }
            let center = v.centers[f];
            prop_assert!(center.is_finite());
            let r = fdist(center, sites[site_of(&v, e)].into());
            let r2 = fdist(center, sites[site_of(&v, v.mesh.mate(e))].into());
            let tolerance = 1e-9 * r.max(1.0);
            prop_assert!((r - r2).abs() <= tolerance, "radii {r} vs {r2}");
        }
    }

    /// Property: a finite Voronoi edge between two cells is perpendicular
    /// to the Delaunay edge joining the two sites.
    #[test]
    fn prop_edges_bisect_perpendicularly(sites in voronoi_sites()) {
        let v = voronoi(&sites).unwrap();
        prop_assume!(v.faces >= 2);

        for &e in &v.dual {
            let (f, g) = (v.mesh.vertex(e), v.mesh.target(e));
            if f == 0 || g == 0 || f == g {
                continue;
            }
            let along = v.centers[g] - v.centers[f];
            let u = sites[site_of(&v, v.mesh.mate(e))];
            let w = sites[site_of(&v, e)];
            let across = Pd2::from(w) - Pd2::from(u);
            let scale = along.norm() * across.norm();
            if scale > 0.0 {
                prop_assert!(
                    along.dot(across).abs() <= 1e-9 * scale.max(1.0),
                    "dual edge {f}->{g} not perpendicular to sites {u}->{w}"
                );
            }
        }
    }

    /// Property: clipping keeps every finite center, closes the mesh, and
    /// leaves exactly one outside face plus one cell per site.
    #[test]
    fn prop_clipping_closes_the_mesh(sites in voronoi_sites(), clip_seed in any::<u64>()) {
        let mut v = voronoi(&sites).unwrap();
        prop_assume!(v.faces >= 2);

        let finite_before = v.centers[1..v.faces].to_vec();
        let mut rng = StdRng::seed_from_u64(clip_seed);
        let outside = clip_to_box(&mut v, &sites, &mut rng).unwrap();

        prop_assert!(v.mesh.is_consistent(outside));
        prop_assert_eq!(v.mesh.face(outside), -1);
        prop_assert_eq!(&v.centers[1..v.faces], &finite_before[..]);
        for center in &v.centers {
            prop_assert!(center.is_finite());
        }

        let mut cell_seen = vec![false; sites.len()];
        for e in v.mesh.linearize(outside) {
            let tag = v.mesh.face(e);
            prop_assert!(tag >= -1);
            if tag >= 0 {
                cell_seen[usize::try_from(tag).unwrap()] = true;
            }
        }
        prop_assert!(cell_seen.iter().all(|&s| s), "a site lost its cell");
    }
}
