//! Vector utilities consumed by polygons and the intersection test.
//!
//! Thin helpers over `nalgebra::Vector2<f64>`; plus Andrew's monotone chain hull.

use super::types::Vec2;

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.dot(&b)
}

/// 2D cross product `a.x b.y - a.y b.x`: signed area of the parallelogram (a,b).
/// Positive for a→b counterclockwise.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Quarter turn counterclockwise: `(x, y) ↦ (-y, x)`.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit vector along `v`; `None` for zero or non-finite input.
#[inline]
pub fn normalize(v: Vec2) -> Option<Vec2> {
    let norm = v.norm();
    if !(norm.is_finite()) || norm <= 0.0 {
        return None;
    }
    Some(v / norm)
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f64 {
    (a - b).norm()
}

/// Rotate `v` counterclockwise by `degrees` about the origin.
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f64) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

#[inline]
pub fn approx_eq(x: f64, y: f64, eps: f64) -> bool {
    (x - y).abs() <= eps
}

/// Orientation of the turn `a → b → c` (twice the signed triangle area).
#[inline]
pub(crate) fn turn(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    cross(b - a, c - a)
}

/// Closest point to the origin on the segment `[p, q]`.
pub(crate) fn closest_on_segment_to_origin(p: Vec2, q: Vec2) -> Vec2 {
    let e = q - p;
    let len2 = e.norm_squared();
    if len2 <= 0.0 {
        return p;
    }
    let t = (-p.dot(&e) / len2).clamp(0.0, 1.0);
    p + e * t
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order, no collinear points).
pub(crate) fn convex_hull(points: &[Vec2]) -> Vec<Vec2> {
    let mut pts: Vec<_> = points
        .iter()
        .copied()
        .filter(|p| p.iter().all(|c| c.is_finite()))
        .collect();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}
