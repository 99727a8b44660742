//! 2D geometry plumbing for the intersection test.
//!
//! Purpose
//! - Provide the validated convex polygon (`ConvexPolygon`), the vector
//!   utilities the intersection test consumes, and shared tolerances.
//! - Keep the API minimal and numerically explicit (eps-aware).
//!
//! References
//! - Code cross-refs: `ConvexPolygon`, `GeomCfg`, `crate::gjk`

pub mod polygon;
pub mod rand;
mod types;
pub mod util;

pub use polygon::{ConvexPolygon, PolygonError};
pub use types::{GeomCfg, Vec2, Winding};
pub use util::{approx_eq, cross, distance, dot, normalize, perp, rotate_deg};
