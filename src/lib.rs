//! # wedge
//!
//! Planar computational geometry on a half-edge ("wedge") mesh: Delaunay
//! triangulation, Euclidean minimum spanning trees, and clipped Voronoi
//! diagrams, all over exact integer coordinates.
//!
//! # Features
//!
//! - Half-edge mesh arena ([`mesh::wedge::WedgeMesh`]) with O(1) splice,
//!   cut, and rotation operations, keyed by a [slotmap](https://docs.rs/slotmap)
//! - Divide-and-conquer Delaunay triangulation
//!   ([`delaunay::triangulate`]), O(N log N), exact for `i32` coordinates
//!   within [`geometry::point::MAX_COORD`]
//! - Euclidean MST over the Delaunay edges ([`mst::euclidean_mst`])
//! - Voronoi diagrams by in-arena dualization ([`voronoi::voronoi`]),
//!   optionally clipped to a finite bounding box
//!   ([`voronoi::clip_to_box`])
//! - Serialization of the point types with [serde](https://serde.rs)
//!
//! # Basic usage
//!
//! ```rust
//! use wedge::prelude::*;
//!
//! let points = vec![
//!     Pt2::new(0, 0),
//!     Pt2::new(10, 0),
//!     Pt2::new(10, 10),
//!     Pt2::new(0, 10),
//!     Pt2::new(4, 5),
//! ];
//!
//! let tri = triangulate(&points)?;
//! assert!(tri.is_consistent());
//! assert_eq!(tri.hull_loop().len(), 4); // the interior point is off the hull
//!
//! let mst = euclidean_mst(&tri, &points);
//! assert_eq!(mst.edges.len(), points.len() - 1);
//! # Ok::<(), wedge::delaunay::TriangulationError>(())
//! ```
//!
//! # Exactness
//!
//! Input points are `i32` pairs bounded by [`geometry::point::MAX_COORD`]
//! (`2^29`). Within that bound the orientation predicate is an exact `i64`
//! determinant and the in-circle predicate an exact `i128` one, so the
//! triangulation never misclassifies a tie: co-circular and collinear
//! inputs are handled by case analysis, not by epsilon. Floating point
//! appears only in *derived* data: circumcenters, MST weights, and the
//! Voronoi bounding box.
//!
//! # Layering
//!
//! Each layer consumes only the public surface of the one below:
//!
//! 1. [`geometry`]: exact points, predicates, float rays;
//! 2. [`mesh`]: the wedge arena and whole-mesh traversal/dualization;
//! 3. [`delaunay`]: triangulation and detriangulation;
//! 4. [`mst`], [`voronoi`]: consumers of a finished triangulation.
//!
//! A mesh is owned by one computation at a time; nothing in the crate
//! spawns threads or shares state. Run independent computations on
//! independent meshes for parallelism.

#![forbid(unsafe_code)]

pub mod geometry {
    //! Exact integer primitives and the few floating pieces derived from
    //! them.
    pub mod point;
    pub mod predicates;
    pub mod ray;
    pub mod sample;

    pub use point::*;
    pub use predicates::*;
    pub use ray::*;
}

pub mod mesh {
    //! The half-edge arena and whole-mesh traversal.
    pub mod traversal;
    pub mod wedge;

    pub use traversal::*;
    pub use wedge::*;
}

pub mod delaunay;
pub mod mst;
pub mod voronoi;

/// Commonly used items, glob-importable.
pub mod prelude {
    pub use crate::delaunay::{detriangulate, triangulate, Triangulation, TriangulationError};
    pub use crate::geometry::point::{dist, dist2, fdist, Pd2, Pt2, MAX_COORD};
    pub use crate::geometry::predicates::{
        collinear, in_circle, orientation, signed_area2, InCircle, Orientation,
    };
    pub use crate::geometry::ray::Ray;
    pub use crate::mesh::traversal::FaceLoop;
    pub use crate::mesh::wedge::{WedgeKey, WedgeMesh};
    pub use crate::mst::{euclidean_mst, DisjointSet, EuclideanMst};
    pub use crate::voronoi::{circumcenter, clip_to_box, voronoi, VoronoiDiagram, VoronoiError};
}
