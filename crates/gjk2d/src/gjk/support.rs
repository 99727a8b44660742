//! Support mappings and Minkowski-difference tips.
//!
//! - `SupportMap`: the one query the intersection test asks of a shape.
//! - `minkowski_tip`: extreme point of `A ⊖ B` along a direction.

use crate::geom2::{ConvexPolygon, Vec2};

/// Convex shapes representable by a support function.
///
/// `support_point(dir)` returns the point of the shape maximizing `p · dir`.
/// `dir` must be non-zero; the result is unspecified otherwise.
pub trait SupportMap {
    fn support_point(&self, dir: Vec2) -> Vec2;
}

/// Vertex loop: the vertex with the largest projection. Ties keep the first
/// vertex in iteration order, so repeated queries along a direction
/// perpendicular to a flat edge always return the same point.
impl SupportMap for [Vec2] {
    fn support_point(&self, dir: Vec2) -> Vec2 {
        debug_assert!(!self.is_empty(), "support of an empty vertex list");
        let mut best = match self.first() {
            Some(v) => *v,
            None => return Vec2::zeros(),
        };
        let mut best_dot = best.dot(&dir);
        for v in &self[1..] {
            let d = v.dot(&dir);
            if d > best_dot {
                best_dot = d;
                best = *v;
            }
        }
        best
    }
}

impl SupportMap for ConvexPolygon {
    #[inline]
    fn support_point(&self, dir: Vec2) -> Vec2 {
        self.vertices().support_point(dir)
    }
}

impl<T: SupportMap + ?Sized> SupportMap for &T {
    #[inline]
    fn support_point(&self, dir: Vec2) -> Vec2 {
        (**self).support_point(dir)
    }
}

/// Support point of `shape` along `dir`.
#[inline]
pub fn support<S: SupportMap + ?Sized>(shape: &S, dir: Vec2) -> Vec2 {
    shape.support_point(dir)
}

/// Tip of the Minkowski difference `A ⊖ B` along `dir`:
/// `support(A, dir) - support(B, -dir)`.
///
/// If `tip · dir < 0` then every point of `A ⊖ B` has a negative projection on
/// `dir`, so the origin is outside and `dir` separates the shapes.
#[inline]
pub fn minkowski_tip<A, B>(a: &A, b: &B, dir: Vec2) -> Vec2
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    a.support_point(dir) - b.support_point(-dir)
}
