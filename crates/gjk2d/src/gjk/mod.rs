//! Boolean intersection test for convex polygons (2D GJK on a triangle simplex).
//!
//! Purpose
//! - Decide whether two convex shapes overlap by searching for the origin in
//!   their Minkowski difference `A ⊖ B`, using only support queries.
//! - Answer `Colliding`, `NotColliding`, or `Indeterminate` when the iteration
//!   cap runs out. The third outcome is never folded into either of the others.
//!
//! Algorithm
//! - Initialize a triangle from tips along 0°, 120°, 240°. A tip whose
//!   projection on its own direction is negative proves separation.
//! - Refine: take the simplex edge nearest the origin, query a tip along the
//!   edge's normal toward the origin, stop on a separating direction, else
//!   replace the vertex opposite that edge and re-test containment.
//! - The search direction is the vector from the edge's closest point to the
//!   origin. It equals the edge normal whenever the origin projects inside the
//!   edge, and points at the nearer endpoint otherwise; the distance from the
//!   origin to the simplex then strictly decreases each step.
//!
//! Boundary policy
//! - Touching shapes collide: containment counts the triangle boundary, and a
//!   tip that makes no progress past an edge within `eps_dist` of the origin
//!   means the origin lies on the difference's boundary. Gaps narrower than
//!   `eps_dist` therefore also report `Colliding`.
//!
//! References
//! - Code cross-refs: `support::{SupportMap, minkowski_tip}`, `simplex::{Simplex, contains_origin}`

pub mod simplex;
pub mod support;

use std::fmt;

use crate::geom2::{rotate_deg, ConvexPolygon, GeomCfg, PolygonError, Vec2};

pub use simplex::{contains_origin, NearestEdge, Simplex};
pub use support::{minkowski_tip, support, SupportMap};

/// Default refinement cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Initial search directions, pairwise non-parallel, spanning the plane.
const INITIAL_ANGLES_DEG: [f64; 3] = [0.0, 120.0, 240.0];

/// Intersection test configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GjkCfg {
    pub max_iterations: usize,
    pub geom: GeomCfg,
}

impl Default for GjkCfg {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            geom: GeomCfg::default(),
        }
    }
}

impl GjkCfg {
    #[inline]
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }
}

/// Outcome of one intersection test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intersection {
    Colliding,
    NotColliding,
    /// The iteration cap ran out before either answer was proven.
    Indeterminate,
}

impl Intersection {
    #[inline]
    pub fn is_definite(self) -> bool {
        !matches!(self, Self::Indeterminate)
    }

    /// `Some(colliding)` for definite outcomes, `None` for `Indeterminate`.
    #[inline]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Colliding => Some(true),
            Self::NotColliding => Some(false),
            Self::Indeterminate => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Colliding => "colliding",
            Self::NotColliding => "not_colliding",
            Self::Indeterminate => "indeterminate",
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome plus the final search state, for callers that want to log it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GjkReport {
    pub outcome: Intersection,
    /// Refinement iterations run (0 when initialization decided).
    pub iterations: usize,
    /// Final simplex; `None` if a separating direction was found before all
    /// three initial tips existed.
    pub simplex: Option<Simplex>,
    /// Last unit search direction.
    pub direction: Vec2,
}

impl GjkReport {
    fn settled(
        outcome: Intersection,
        iterations: usize,
        simplex: Simplex,
        direction: Vec2,
    ) -> Self {
        Self {
            outcome,
            iterations,
            simplex: Some(simplex),
            direction,
        }
    }

    /// Angle of the last search direction in degrees, in (-180, 180].
    pub fn search_angle_deg(&self) -> f64 {
        self.direction.y.atan2(self.direction.x).to_degrees()
    }
}

/// Which operand of a test an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// Invalid input to `test_intersection`. Never used for "not colliding".
#[derive(Clone, Debug, PartialEq)]
pub enum GjkError {
    InvalidPolygon {
        operand: Operand,
        source: PolygonError,
    },
}

impl fmt::Display for GjkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { operand, source } => {
                write!(f, "invalid polygon {operand}: {source}")
            }
        }
    }
}

impl std::error::Error for GjkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPolygon { source, .. } => Some(source),
        }
    }
}

/// Validate two vertex lists as convex polygons and test them for intersection.
///
/// Fails fast on malformed input (fewer than 3 vertices, non-finite, zero
/// area, non-convex) instead of returning a meaningless outcome.
pub fn test_intersection(
    a: &[Vec2],
    b: &[Vec2],
    max_iterations: usize,
) -> Result<Intersection, GjkError> {
    let cfg = GjkCfg::with_max_iterations(max_iterations);
    let pa = ConvexPolygon::with_cfg(a.to_vec(), &cfg.geom).map_err(|source| {
        GjkError::InvalidPolygon {
            operand: Operand::A,
            source,
        }
    })?;
    let pb = ConvexPolygon::with_cfg(b.to_vec(), &cfg.geom).map_err(|source| {
        GjkError::InvalidPolygon {
            operand: Operand::B,
            source,
        }
    })?;
    Ok(intersect(&pa, &pb, &cfg).outcome)
}

/// Test two convex shapes for intersection.
///
/// Pure: reads both shapes through their support functions only, keeps all
/// state in a local simplex, and returns the same report for the same input.
pub fn intersect<A, B>(a: &A, b: &B, cfg: &GjkCfg) -> GjkReport
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let eps = cfg.geom.eps_dist;
    let mut tips = [Vec2::zeros(); 3];
    let mut dir = Vec2::x();
    for (slot, angle) in INITIAL_ANGLES_DEG.iter().enumerate() {
        dir = rotate_deg(Vec2::x(), *angle);
        let tip = minkowski_tip(a, b, dir);
        tips[slot] = tip;
        if tip.dot(&dir) < -eps {
            return GjkReport {
                outcome: Intersection::NotColliding,
                iterations: 0,
                simplex: (slot == 2).then_some(Simplex::new(tips)),
                direction: dir,
            };
        }
    }

    let mut simplex = Simplex::new(tips);
    if simplex.contains_origin(&cfg.geom) {
        return GjkReport::settled(Intersection::Colliding, 0, simplex, dir);
    }

    for iteration in 1..=cfg.max_iterations {
        let edge = simplex.nearest_edge();
        if edge.distance <= eps {
            return GjkReport::settled(Intersection::Colliding, iteration, simplex, dir);
        }
        // Points away from the simplex, toward the origin.
        dir = -edge.closest / edge.distance;
        let tip = minkowski_tip(a, b, dir);
        let reach = tip.dot(&dir);
        if reach < -eps {
            return GjkReport::settled(Intersection::NotColliding, iteration, simplex, dir);
        }
        // No progress past the edge: it lies on the boundary of A ⊖ B and the
        // origin is within 2·eps of it.
        if reach + edge.distance <= eps {
            return GjkReport::settled(Intersection::Colliding, iteration, simplex, dir);
        }
        simplex.replace_opposite(edge.index, tip);
        if simplex.contains_origin(&cfg.geom) {
            return GjkReport::settled(Intersection::Colliding, iteration, simplex, dir);
        }
    }

    GjkReport::settled(Intersection::Indeterminate, cfg.max_iterations, simplex, dir)
}

#[cfg(test)]
mod tests;
