//! Curated API surface for callers outside this crate.
//!
//! - Intersection entry points and the types they consume.
//! - The random pair sampler, with its replay token renamed for callers that
//!   log and re-run individual sweep rows.

pub use crate::geom2::rand::{
    draw_pair_radial, draw_polygon_radial, RadialCfg, ReplayToken as PolygonReplay, VertexCount,
};
pub use crate::geom2::{ConvexPolygon, GeomCfg, PolygonError, Vec2, Winding};
pub use crate::gjk::{
    contains_origin, intersect, minkowski_tip, test_intersection, GjkCfg, GjkError, GjkReport,
    Intersection, Operand, Simplex, SupportMap, DEFAULT_MAX_ITERATIONS,
};
