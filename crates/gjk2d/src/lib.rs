//! Convex polygon intersection in 2D.
//!
//! - `geom2`: validated convex polygons, vector utilities, tolerances, and a
//!   reproducible random polygon sampler.
//! - `gjk`: the boolean intersection test (GJK on a triangle simplex in the
//!   Minkowski difference), with a distinct `Indeterminate` outcome when the
//!   iteration cap runs out.
//!
//! The library is pure and synchronous: no logging, no shared state. Callers
//! that want diagnostics log the returned `GjkReport`.

pub mod api;
pub mod geom2;
pub mod gjk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{ConvexPolygon, GeomCfg, Vec2};
pub use gjk::{intersect, test_intersection, GjkCfg, GjkReport, Intersection};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_pair_radial, draw_polygon_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{
        approx_eq, cross, distance, dot, normalize, perp, rotate_deg, ConvexPolygon, GeomCfg,
        PolygonError, Vec2, Winding,
    };
    pub use crate::gjk::{
        intersect, minkowski_tip, support, test_intersection, GjkCfg, GjkError, GjkReport,
        Intersection, Simplex, SupportMap, DEFAULT_MAX_ITERATIONS,
    };
}
