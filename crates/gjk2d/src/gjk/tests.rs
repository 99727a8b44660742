use super::*;
use crate::geom2::PolygonError;
use nalgebra::vector;

fn unit_square_at(x: f64, y: f64) -> ConvexPolygon {
    ConvexPolygon::rectangle(vector![x, y], 1.0, 1.0).unwrap()
}

fn hexagon(center: Vec2, phase_deg: f64) -> ConvexPolygon {
    let pts = (0..6)
        .map(|k| center + rotate_deg(vector![1.0, 0.0], phase_deg + 60.0 * k as f64))
        .collect();
    ConvexPolygon::new(pts).unwrap()
}

fn outcome(a: &ConvexPolygon, b: &ConvexPolygon) -> Intersection {
    intersect(a, b, &GjkCfg::default()).outcome
}

fn both_orders(a: &ConvexPolygon, b: &ConvexPolygon) -> Intersection {
    let ab = outcome(a, b);
    assert_eq!(ab, outcome(b, a), "outcome depends on operand order");
    ab
}

#[test]
fn separated_squares() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(2.0, 0.0);
    assert_eq!(both_orders(&a, &b), Intersection::NotColliding);
    assert_eq!(both_orders(&a, &unit_square_at(-0.5, 3.0)), Intersection::NotColliding);
}

#[test]
fn half_overlapping_squares() {
    let a = unit_square_at(0.0, 0.0);
    assert_eq!(both_orders(&a, &unit_square_at(0.5, 0.0)), Intersection::Colliding);
    assert_eq!(both_orders(&a, &unit_square_at(0.0, -0.5)), Intersection::Colliding);
}

#[test]
fn edge_touch_collides() {
    let a = unit_square_at(0.0, 0.0);
    assert_eq!(both_orders(&a, &unit_square_at(1.0, 0.0)), Intersection::Colliding);
    assert_eq!(both_orders(&a, &unit_square_at(0.0, 1.0)), Intersection::Colliding);
    assert_eq!(both_orders(&a, &unit_square_at(-1.0, 0.25)), Intersection::Colliding);
}

#[test]
fn outcomes_hold_far_from_unit_scale() {
    for side in [1e-6, 2e-6, 1e-3, 1e3, 1e6] {
        let square = |x: f64, y: f64| {
            ConvexPolygon::rectangle(vector![x * side, y * side], side, side).unwrap()
        };
        let a = square(0.0, 0.0);
        for (b, expected) in [
            (square(2.0, 0.0), Intersection::NotColliding),
            (square(0.0, 1.05), Intersection::NotColliding),
            (square(0.5, 0.0), Intersection::Colliding),
            (square(1.0, 0.0), Intersection::Colliding),
            (square(-1.0, 0.25), Intersection::Colliding),
            (square(1.0, 1.0), Intersection::Colliding),
            (square(-1.0, -1.0), Intersection::Colliding),
        ] {
            assert_eq!(both_orders(&a, &b), expected, "side={side} b={:?}", b.vertices()[0]);
        }
    }
}

#[test]
fn micro_gap_is_not_a_touch() {
    // Gap of 1e-7 between squares of side 2e-6: 100x eps_dist.
    let a = ConvexPolygon::rectangle(Vec2::zeros(), 2e-6, 2e-6).unwrap();
    let b = ConvexPolygon::rectangle(vector![0.0, 2e-6 + 1e-7], 2e-6, 2e-6).unwrap();
    assert_eq!(both_orders(&a, &b), Intersection::NotColliding);
    let tiny = [
        vector![-1e-7, -1e-7],
        vector![1e-7, -1e-7],
        vector![1e-7, 1e-7],
        vector![-1e-7, 1e-7],
    ];
    assert_eq!(
        test_intersection(&tiny, &tiny, DEFAULT_MAX_ITERATIONS),
        Ok(Intersection::Colliding)
    );
}

#[test]
fn corner_touch_collides() {
    let a = unit_square_at(0.0, 0.0);
    assert_eq!(both_orders(&a, &unit_square_at(1.0, 1.0)), Intersection::Colliding);
    assert_eq!(both_orders(&a, &unit_square_at(-1.0, -1.0)), Intersection::Colliding);
    assert_eq!(both_orders(&a, &unit_square_at(1.0, -1.0)), Intersection::Colliding);
}

#[test]
fn containment_and_identity() {
    let big = ConvexPolygon::rectangle(vector![-5.0, -5.0], 10.0, 10.0).unwrap();
    let small = unit_square_at(1.0, 2.0);
    assert_eq!(both_orders(&big, &small), Intersection::Colliding);
    assert_eq!(both_orders(&small, &small), Intersection::Colliding);
}

#[test]
fn triangles_across_a_diagonal() {
    let a = ConvexPolygon::new(vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ])
    .unwrap();
    assert_eq!(both_orders(&a, &a.translated(vector![0.6, 0.6])), Intersection::NotColliding);
    assert_eq!(both_orders(&a, &a.translated(vector![0.4, 0.4])), Intersection::Colliding);
    // Vertex (0.5, 0.5) of the copy sits on the hypotenuse.
    assert_eq!(both_orders(&a, &a.translated(vector![0.5, 0.5])), Intersection::Colliding);
}

#[test]
fn rotated_hexagons() {
    let a = hexagon(Vec2::zeros(), 0.0);
    assert_eq!(
        both_orders(&a, &hexagon(vector![2.0, 0.0], 30.0)),
        Intersection::NotColliding
    );
    assert_eq!(
        both_orders(&a, &hexagon(vector![1.8, 0.0], 30.0)),
        Intersection::Colliding
    );
    assert_eq!(
        both_orders(&a, &hexagon(vector![0.3, -1.7], 30.0)),
        Intersection::Colliding
    );
}

#[test]
fn mixed_windings_agree() {
    let a = hexagon(Vec2::zeros(), 10.0);
    for (offset, expected) in [
        (vector![1.5, 0.5], Intersection::Colliding),
        (vector![0.0, 2.5], Intersection::NotColliding),
    ] {
        let b = hexagon(offset, 0.0);
        assert_eq!(outcome(&a, &b), expected);
        assert_eq!(outcome(&a.reversed(), &b), expected);
        assert_eq!(outcome(&a, &b.reversed()), expected);
        assert_eq!(outcome(&a.reversed(), &b.reversed()), expected);
    }
}

#[test]
fn initial_direction_short_circuits() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(2.0, 0.0);
    let report = intersect(&a, &b, &GjkCfg::default());
    assert_eq!(report.outcome, Intersection::NotColliding);
    assert_eq!(report.iterations, 0);
    // The very first direction (+x) separates, before a full simplex exists.
    assert!(report.simplex.is_none());
    assert_eq!(report.direction, vector![1.0, 0.0]);
}

#[test]
fn refinement_reports_final_state() {
    // Reversed order: +x no longer separates, the refinement loop finds -x.
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(2.0, 0.0);
    let report = intersect(&b, &a, &GjkCfg::default());
    assert_eq!(report.outcome, Intersection::NotColliding);
    assert_eq!(report.iterations, 1);
    let simplex = report.simplex.expect("simplex after initialization");
    assert!(!simplex.contains_origin(&GeomCfg::default()));
    assert!((report.direction - vector![-1.0, 0.0]).norm() < 1e-12);
    assert!((report.search_angle_deg().abs() - 180.0).abs() < 1e-9);
}

#[test]
fn iteration_cap_yields_indeterminate() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(2.0, 0.0);
    let report = intersect(&b, &a, &GjkCfg::with_max_iterations(0));
    assert_eq!(report.outcome, Intersection::Indeterminate);
    assert_eq!(report.iterations, 0);
    assert!(!report.outcome.is_definite());
    assert_eq!(report.outcome.as_bool(), None);
    assert_eq!(report.outcome.to_string(), "indeterminate");
    // Cap does not matter when initialization already decides.
    let sep = intersect(&a, &b, &GjkCfg::with_max_iterations(0));
    assert_eq!(sep.outcome, Intersection::NotColliding);
}

#[test]
fn repeated_calls_are_identical() {
    let a = hexagon(vector![0.1, 0.2], 17.0);
    let b = hexagon(vector![1.7, -0.4], 41.0);
    let cfg = GjkCfg::default();
    let first = intersect(&a, &b, &cfg);
    for _ in 0..5 {
        assert_eq!(intersect(&a, &b, &cfg), first);
    }
}

#[test]
fn vertex_list_entry_point() {
    let a = [vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]];
    let b: Vec<Vec2> = a.iter().map(|v| v + vector![0.5, 0.0]).collect();
    assert_eq!(
        test_intersection(&a, &b, DEFAULT_MAX_ITERATIONS),
        Ok(Intersection::Colliding)
    );
    let far: Vec<Vec2> = a.iter().map(|v| v + vector![2.0, 0.0]).collect();
    assert_eq!(
        test_intersection(&a, &far, DEFAULT_MAX_ITERATIONS).map(Intersection::as_bool),
        Ok(Some(false))
    );
    // Slices work with the generic core too.
    assert_eq!(
        intersect(&a[..], &b[..], &GjkCfg::default()).outcome,
        Intersection::Colliding
    );
}

#[test]
fn malformed_input_fails_fast() {
    let tri = [vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    let err = test_intersection(&tri[..2], &tri, DEFAULT_MAX_ITERATIONS).unwrap_err();
    assert_eq!(
        err,
        GjkError::InvalidPolygon {
            operand: Operand::A,
            source: PolygonError::TooFewVertices { got: 2 },
        }
    );
    assert_eq!(err.to_string(), "invalid polygon A: polygon needs at least 3 vertices, got 2");
    assert!(std::error::Error::source(&err).is_some());

    let dart = [
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.5],
        vector![1.0, 2.0],
    ];
    assert!(matches!(
        test_intersection(&tri, &dart, DEFAULT_MAX_ITERATIONS),
        Err(GjkError::InvalidPolygon {
            operand: Operand::B,
            source: PolygonError::NonConvex { .. },
        })
    ));
    let flat = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    assert!(matches!(
        test_intersection(&tri, &flat, DEFAULT_MAX_ITERATIONS),
        Err(GjkError::InvalidPolygon {
            source: PolygonError::Degenerate,
            ..
        })
    ));
}
