//! Triangle simplex in Minkowski-difference space.
//!
//! The simplex is always exactly three tips. Slot order matters: edge `i`
//! runs from slot `i` to slot `(i + 1) % 3`, and its opposite vertex is slot
//! `(i + 2) % 3`. Winding is not tracked; it may flip as slots are replaced,
//! so containment accepts both orientations.

use crate::geom2::util::closest_on_segment_to_origin;
use crate::geom2::{cross, GeomCfg, Vec2, Winding};

/// Three Minkowski-difference tips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Simplex {
    pub points: [Vec2; 3],
}

/// Edge of a simplex closest to the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestEdge {
    /// Edge runs from slot `index` to slot `(index + 1) % 3`.
    pub index: usize,
    /// Closest point on the edge segment to the origin.
    pub closest: Vec2,
    pub distance: f64,
}

impl Simplex {
    #[inline]
    pub fn new(points: [Vec2; 3]) -> Self {
        Self { points }
    }

    /// Signed areas of the origin against each directed edge `p_i → p_{i+1}`.
    ///
    /// `cross(p_{i+1} - p_i, 0 - p_i)` simplifies to `cross(p_i, p_{i+1})`.
    #[inline]
    pub fn signed_areas(&self) -> [f64; 3] {
        let p = &self.points;
        [cross(p[0], p[1]), cross(p[1], p[2]), cross(p[2], p[0])]
    }

    /// Orientation of the slot order; `None` when the three tips are collinear.
    pub fn winding(&self) -> Option<Winding> {
        let p = &self.points;
        Winding::of_signed_area(cross(p[1] - p[0], p[2] - p[0]))
    }

    #[inline]
    pub fn contains_origin(&self, cfg: &GeomCfg) -> bool {
        contains_origin(self.points[0], self.points[1], self.points[2], cfg)
    }

    /// Edge with the smallest distance to the origin. Ties keep the lower index.
    pub fn nearest_edge(&self) -> NearestEdge {
        let mut best = NearestEdge {
            index: 0,
            closest: Vec2::zeros(),
            distance: f64::INFINITY,
        };
        for i in 0..3 {
            let closest = closest_on_segment_to_origin(self.points[i], self.points[(i + 1) % 3]);
            let distance = closest.norm();
            if distance < best.distance {
                best = NearestEdge {
                    index: i,
                    closest,
                    distance,
                };
            }
        }
        best
    }

    /// Overwrite the vertex opposite edge `edge` with `tip`; the edge itself is kept.
    #[inline]
    pub fn replace_opposite(&mut self, edge: usize, tip: Vec2) {
        self.points[(edge + 2) % 3] = tip;
    }
}

/// Whether the origin lies in the closed triangle `(p0, p1, p2)`.
///
/// Inside iff the three edge signed areas agree in sign, for either winding.
/// Boundary policy: areas within `eps_area · scale²` (scale = largest tip
/// norm) count as zero, so an origin on an edge or at a vertex is contained.
/// This is what makes shapes that only touch report as colliding. A collinear
/// triangle contains the origin only if the origin lies on its line (within
/// `eps_dist`) and inside the span of its points.
pub fn contains_origin(p0: Vec2, p1: Vec2, p2: Vec2, cfg: &GeomCfg) -> bool {
    let areas = [cross(p0, p1), cross(p1, p2), cross(p2, p0)];
    let scale = p0.norm().max(p1.norm()).max(p2.norm());
    let tol = cfg.area_tol(scale);

    let all_non_negative = areas.iter().all(|&s| s >= -tol);
    let all_non_positive = areas.iter().all(|&s| s <= tol);
    if !(all_non_negative || all_non_positive) {
        return false;
    }
    if areas.iter().any(|s| s.abs() > tol) {
        return true;
    }
    // Every area vanishes: the tips are (nearly) collinear.
    collinear_span_contains_origin(&[p0, p1, p2], cfg.eps_dist)
}

fn collinear_span_contains_origin(points: &[Vec2; 3], eps: f64) -> bool {
    let (mut base, mut axis) = (points[0], Vec2::zeros());
    for i in 0..3 {
        let e = points[(i + 1) % 3] - points[i];
        if e.norm_squared() > axis.norm_squared() {
            base = points[i];
            axis = e;
        }
    }
    let len = axis.norm();
    if len <= eps {
        return points[0].norm() <= eps;
    }
    let axis = axis / len;
    // Perpendicular offset of the origin from the line.
    if cross(axis, base).abs() > eps {
        return false;
    }
    let (lo, hi) = points
        .iter()
        .map(|p| p.dot(&axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t), hi.max(t))
        });
    lo <= eps && hi >= -eps
}
