//! Basic 2D types and tolerances shared by polygons and the intersection test.
//!
//! - `GeomCfg`: centralizes epsilons for signed-area and distance checks.
//! - `Winding`: boundary orientation of a polygon (or of a simplex).
//!
//! References
//! - Code cross-refs: `polygon::ConvexPolygon`, `crate::gjk::simplex::contains_origin`

use nalgebra::Vector2;

/// Point or displacement in the plane. Used interchangeably for both.
pub type Vec2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// - `eps_area`: signed areas (2D cross products) with magnitude at or below
///   this value, relative to the squared scale of the operands, count as zero.
/// - `eps_dist`: distances at or below this value count as touching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_area: f64,
    pub eps_dist: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_area: 1e-12,
            eps_dist: 1e-9,
        }
    }
}

impl GeomCfg {
    /// Area tolerance for operands of magnitude `scale`: `eps_area · scale²`.
    ///
    /// Purely relative, so a tiny simplex is judged at its own scale.
    #[inline]
    pub fn area_tol(&self, scale: f64) -> f64 {
        self.eps_area * scale * scale
    }
}

/// Orientation of a closed vertex loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

impl Winding {
    #[inline]
    pub fn of_signed_area(area: f64) -> Option<Self> {
        if area > 0.0 {
            Some(Self::CounterClockwise)
        } else if area < 0.0 {
            Some(Self::Clockwise)
        } else {
            None
        }
    }
}
