//! JSON shapes read and written by the CLI.

use anyhow::{Context, Result};
use gjk2d::geom2::{ConvexPolygon, GeomCfg, Vec2};
use gjk2d::GjkReport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A polygon pair: `{"a": [[x, y], ...], "b": [[x, y], ...]}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PairInput {
    pub a: Vec<[f64; 2]>,
    pub b: Vec<[f64; 2]>,
}

impl PairInput {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Validate both vertex lists as convex polygons.
    pub fn polygons(&self, cfg: &GeomCfg) -> Result<(ConvexPolygon, ConvexPolygon)> {
        let a = ConvexPolygon::with_cfg(to_points(&self.a), cfg).context("polygon a")?;
        let b = ConvexPolygon::with_cfg(to_points(&self.b), cfg).context("polygon b")?;
        Ok((a, b))
    }
}

fn to_points(raw: &[[f64; 2]]) -> Vec<Vec2> {
    raw.iter().map(|[x, y]| Vec2::new(*x, *y)).collect()
}

/// Serializable view of a `GjkReport`.
#[derive(Clone, Debug, Serialize)]
pub struct ReportOut {
    pub outcome: String,
    pub iterations: usize,
    pub search_angle_deg: f64,
    pub direction: [f64; 2],
    pub simplex: Option<[[f64; 2]; 3]>,
}

impl From<&GjkReport> for ReportOut {
    fn from(r: &GjkReport) -> Self {
        Self {
            outcome: r.outcome.as_str().to_string(),
            iterations: r.iterations,
            search_angle_deg: r.search_angle_deg(),
            direction: [r.direction.x, r.direction.y],
            simplex: r.simplex.map(|s| s.points.map(|p| [p.x, p.y])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gjk2d::{intersect, GjkCfg};

    #[test]
    fn parses_pair_and_runs() {
        let raw = r#"{"a": [[0,0],[1,0],[1,1],[0,1]], "b": [[1,0],[2,0],[2,1],[1,1]]}"#;
        let pair: PairInput = serde_json::from_str(raw).unwrap();
        let (a, b) = pair.polygons(&GeomCfg::default()).unwrap();
        let report = intersect(&a, &b, &GjkCfg::default());
        let out = ReportOut::from(&report);
        assert_eq!(out.outcome, "colliding");
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["outcome"], "colliding");
        assert!(json["simplex"].is_array());
    }

    #[test]
    fn invalid_polygon_names_operand() {
        let pair = PairInput {
            a: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
            b: vec![[0.0, 0.0], [1.0, 1.0]],
        };
        let err = pair.polygons(&GeomCfg::default()).unwrap_err();
        assert_eq!(err.to_string(), "polygon b");
        assert!(format!("{err:#}").contains("at least 3 vertices"));
    }
}
