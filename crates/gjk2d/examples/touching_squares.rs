//! Walk a unit square past another one and print the outcome at each offset.
//!
//! Usage:
//!   cargo run -p gjk2d --example touching_squares
//!
//! Offsets 0.0..=1.0 overlap or touch (edge contact at 1.0); beyond that the
//! squares are separated.

use gjk2d::{intersect, ConvexPolygon, GjkCfg, Vec2};

fn main() {
    let a = ConvexPolygon::rectangle(Vec2::zeros(), 1.0, 1.0).expect("unit square");
    let cfg = GjkCfg::default();
    for step in 0..=6 {
        let dx = 0.25 * step as f64;
        let b = a.translated(Vec2::new(dx, 0.0));
        let report = intersect(&a, &b, &cfg);
        println!(
            "dx={dx:.2}: {} (iterations={}, search angle={:.1}°)",
            report.outcome,
            report.iterations,
            report.search_angle_deg()
        );
    }
}
