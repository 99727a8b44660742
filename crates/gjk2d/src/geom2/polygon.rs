//! Validated convex polygon (ordered V-representation).
//!
//! Purpose
//! - Store the vertex loop the intersection test reads from, and reject
//!   inputs the test cannot answer for (too few vertices, NaN, zero area,
//!   reflex or self-intersecting boundaries) before any query runs.
//!
//! Invariants
//! - At least 3 vertices, all finite.
//! - Non-zero signed area; every turn agrees with the winding (collinear
//!   turns allowed); the boundary turns exactly once.
//! - Immutable after construction; transforms return new polygons.
//!
//! References
//! - Code cross-refs: `util::{convex_hull, turn}`, `crate::gjk::SupportMap`

use std::f64::consts::TAU;
use std::fmt;

use super::types::{GeomCfg, Vec2, Winding};
use super::util::{convex_hull, cross, rotate_deg, turn};

/// Reasons a vertex list is not a usable convex polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    TooFewVertices { got: usize },
    NonFinite { index: usize },
    Degenerate,
    NonConvex { index: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { got } => {
                write!(f, "polygon needs at least 3 vertices, got {got}")
            }
            Self::NonFinite { index } => write!(f, "vertex {index} has a non-finite coordinate"),
            Self::Degenerate => write!(f, "polygon has zero area (collinear vertices)"),
            Self::NonConvex { index } => write!(f, "polygon is not convex at vertex {index}"),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Convex polygon as an ordered vertex loop (either winding).
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    vertices: Vec<Vec2>,
    winding: Winding,
}

impl ConvexPolygon {
    /// Validate `vertices` with default tolerances.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, PolygonError> {
        Self::with_cfg(vertices, &GeomCfg::default())
    }

    /// Validate `vertices`; `cfg.eps_area` decides what counts as zero area and
    /// as a straight turn, relative to the squared perimeter and edge lengths.
    pub fn with_cfg(vertices: Vec<Vec2>, cfg: &GeomCfg) -> Result<Self, PolygonError> {
        let n = vertices.len();
        if n < 3 {
            return Err(PolygonError::TooFewVertices { got: n });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            return Err(PolygonError::NonFinite { index });
        }
        // Tolerances follow the polygon's own size, not its distance from the origin.
        let perimeter: f64 = (0..n)
            .map(|i| (vertices[(i + 1) % n] - vertices[i]).norm())
            .sum();
        let area = signed_area(&vertices);
        if area.abs() <= cfg.area_tol(perimeter) {
            return Err(PolygonError::Degenerate);
        }
        let sign = area.signum();
        let mut turning = 0.0;
        for i in 0..n {
            let prev = vertices[(i + n - 1) % n];
            let cur = vertices[i];
            let next = vertices[(i + 1) % n];
            let e0 = cur - prev;
            let e1 = next - cur;
            if sign * turn(prev, cur, next) < -cfg.eps_area * e0.norm() * e1.norm() {
                return Err(PolygonError::NonConvex { index: i });
            }
            turning += cross(e0, e1).atan2(e0.dot(&e1));
        }
        // Same-sign turns that wind more than once trace a star.
        if turning.abs() > TAU + 1e-6 {
            return Err(PolygonError::NonConvex { index: 0 });
        }
        let winding = Winding::of_signed_area(area).ok_or(PolygonError::Degenerate)?;
        Ok(Self { vertices, winding })
    }

    /// Convex hull of an arbitrary point cloud (CCW, collinear points dropped).
    pub fn from_points_hull(points: &[Vec2]) -> Result<Self, PolygonError> {
        let hull = convex_hull(points);
        if hull.len() < 3 {
            return Err(if points.len() < 3 {
                PolygonError::TooFewVertices { got: points.len() }
            } else {
                PolygonError::Degenerate
            });
        }
        Self::new(hull)
    }

    /// Axis-aligned rectangle with lower-left corner `min`, CCW.
    pub fn rectangle(min: Vec2, width: f64, height: f64) -> Result<Self, PolygonError> {
        Self::new(vec![
            min,
            min + Vec2::new(width, 0.0),
            min + Vec2::new(width, height),
            min + Vec2::new(0.0, height),
        ])
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Directed boundary edges `(v[i], v[i+1])`, closing back to `v[0]`.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area (positive for CCW).
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Area centroid.
    pub fn centroid(&self) -> Vec2 {
        let mut a = 0.0;
        let mut c = Vec2::zeros();
        for (p, q) in self.edges() {
            let w = cross(p, q);
            a += w;
            c += (p + q) * w;
        }
        c / (3.0 * a)
    }

    pub fn translated(&self, t: Vec2) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v + t).collect(),
            winding: self.winding,
        }
    }

    /// Rotation about the origin by `degrees` (counterclockwise).
    pub fn rotated_deg(&self, degrees: f64) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| rotate_deg(*v, degrees)).collect(),
            winding: self.winding,
        }
    }

    /// Same polygon with the vertex order reversed (flips the winding).
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        let winding = match self.winding {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        };
        Self { vertices, winding }
    }
}

/// Shoelace sum taken relative to `verts[0]`, so far-off polygons keep their precision.
fn signed_area(verts: &[Vec2]) -> f64 {
    let o = verts[0];
    0.5 * verts
        .windows(2)
        .map(|w| cross(w[0] - o, w[1] - o))
        .sum::<f64>()
}
