use super::rand::{
    draw_cloud_f64, draw_cloud_i32, draw_on_circle, CloudCfg, PointCount, ReplayToken,
};
use super::*;
use ::rand::{rngs::StdRng, Rng, SeedableRng};
use nalgebra::Vector2;
use proptest::prelude::*;

fn pts(raw: &[(i32, i32)]) -> Vec<Point<i32>> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn all_hulls<T: Coord>(points: &[Point<T>]) -> Vec<Hull<T>> {
    HullAlgorithm::ALL
        .iter()
        .map(|&algorithm| convex_hull_with(points, HullCfg { algorithm }))
        .collect()
}

#[test]
fn seven_point_example_keeps_corners_only() {
    let input = pts(&[(0, 3), (2, 2), (1, 1), (2, 1), (3, 0), (0, 0), (3, 3)]);
    let expected = pts(&[(0, 0), (3, 0), (3, 3), (0, 3)]);
    for hull in all_hulls(&input) {
        assert_eq!(hull.points(), expected.as_slice());
    }
    assert_eq!(convex_hull(&input).twice_signed_area(), 18);
}

#[test]
fn fewer_than_three_points_is_empty() {
    for input in [pts(&[]), pts(&[(1, 1)]), pts(&[(1, 1), (4, 2)])] {
        for hull in all_hulls(&input) {
            assert!(hull.is_empty());
        }
    }
}

#[test]
fn identical_points_collapse_to_one() {
    let input = pts(&[(2, 5), (2, 5), (2, 5), (2, 5)]);
    for hull in all_hulls(&input) {
        assert_eq!(hull.points(), pts(&[(2, 5)]).as_slice());
        assert!(hull.contains(Point::new(2, 5)));
        assert!(!hull.contains(Point::new(2, 6)));
    }
}

#[test]
fn collinear_points_give_two_extremes() {
    // Diagonal, vertical and horizontal lines, with duplicates and shuffled order.
    let cases = [
        pts(&[(2, -2), (0, 0), (1, -1), (3, -3), (1, -1)]),
        pts(&[(0, 4), (0, 1), (0, 3), (0, 2)]),
        pts(&[(5, 0), (-1, 0), (2, 0), (5, 0)]),
    ];
    let expected = [
        pts(&[(0, 0), (3, -3)]),
        pts(&[(0, 1), (0, 4)]),
        pts(&[(-1, 0), (5, 0)]),
    ];
    for (input, want) in cases.iter().zip(expected.iter()) {
        for hull in all_hulls(input) {
            assert_eq!(hull.points(), want.as_slice());
            for p in input {
                assert!(hull.contains(*p));
            }
        }
    }
}

#[test]
fn collinear_boundary_points_are_dropped() {
    // Square with edge midpoints and a point on the first and last Graham rays.
    let input = pts(&[
        (0, 0),
        (2, 0),
        (4, 0),
        (4, 2),
        (4, 4),
        (2, 4),
        (0, 4),
        (0, 2),
        (1, 1),
    ]);
    let expected = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    for hull in all_hulls(&input) {
        assert_eq!(hull.points(), expected.as_slice());
    }
}

#[test]
fn extreme_i32_coordinates_do_not_overflow() {
    let (lo, hi) = (i32::MIN, i32::MAX);
    let input: Vec<Point<i32>> = vec![
        Point::new(0, 0),
        Point::new(hi, hi),
        Point::new(lo, hi),
        Point::new(hi, lo),
        Point::new(lo, lo),
        Point::new(0, hi),
    ];
    let expected = vec![
        Point::new(lo, lo),
        Point::new(hi, lo),
        Point::new(hi, hi),
        Point::new(lo, hi),
    ];
    for hull in all_hulls(&input) {
        assert_eq!(hull.points(), expected.as_slice());
        let side = hi as i128 - lo as i128;
        assert_eq!(hull.twice_signed_area(), 2 * side * side);
    }
}

#[test]
fn extreme_i16_coordinates_do_not_overflow() {
    let (lo, hi) = (i16::MIN, i16::MAX);
    let input: Vec<Point<i16>> = vec![
        Point::new(lo, lo),
        Point::new(hi, lo),
        Point::new(hi, hi),
        Point::new(lo, hi),
        Point::new(0, 0),
        Point::new(hi, 0),
    ];
    for hull in all_hulls(&input) {
        assert_eq!(hull.points(), &input[..4]);
        let side = hi as i64 - lo as i64;
        assert_eq!(hull.twice_signed_area(), 2 * side * side);
        assert!(input.iter().all(|p| hull.contains(*p)));
    }
}

#[test]
fn f32_coordinates_widen_to_f64() {
    let seven: Vec<Point<f32>> = [(0.0, 3.0), (2.0, 2.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0)]
        .into_iter()
        .chain([(0.0, 0.0), (3.0, 3.0)])
        .map(Point::from)
        .collect();
    for hull in all_hulls(&seven) {
        assert_eq!(hull.len(), 4);
        assert_eq!(hull.area(), 9.0);
    }

    let m = f32::MAX;
    let corners = vec![
        Point::new(-m, -m),
        Point::new(m, -m),
        Point::new(m, m),
        Point::new(-m, m),
    ];
    let mut input = seven.clone();
    input.extend(corners.iter().rev());
    for hull in all_hulls(&input) {
        assert_eq!(hull.points(), corners.as_slice());
        assert!(input.iter().all(|p| hull.contains(*p)));
        // 4·m² is exact in f64.
        assert_eq!(hull.area(), 4.0 * f64::from(m) * f64::from(m));
    }
}

#[test]
fn huge_float_coordinates_keep_a_convex_hull() {
    for c in [1e200, f64::MAX] {
        let corners = vec![
            Point::new(-c, -c),
            Point::new(c, -c),
            Point::new(c, c),
            Point::new(-c, c),
        ];
        let mut input = corners.clone();
        input.extend([Point::new(0.0, 0.0), Point::new(c / 4.0, 0.0), Point::new(0.0, -c)]);
        for hull in all_hulls(&input) {
            assert_eq!(hull.points(), corners.as_slice(), "extent {c:e}");
            for p in &input {
                assert!(hull.contains(*p), "{p:?} outside at extent {c:e}");
            }
        }
    }
}

#[test]
fn near_collinear_float_clouds_stay_well_formed() {
    let mut rng = StdRng::seed_from_u64(165);
    for draw in 0..1000 {
        let n = rng.gen_range(3..=200);
        let slope: f64 = rng.gen_range(-4.0..4.0);
        let noise = if draw % 2 == 0 { 1e-12 } else { 0.0 };
        let input: Vec<Point<f64>> = (0..n)
            .map(|_| {
                let t: f64 = rng.gen_range(-1e3..1e3);
                Point::new(t, slope * t + rng.gen_range(-1.0..=1.0) * noise)
            })
            .collect();
        let lex_min = input.iter().min_by(|a, b| a.lex_cmp(b)).copied();
        let lex_max = input.iter().max_by(|a, b| a.lex_cmp(b)).copied();
        for hull in all_hulls(&input) {
            let h = hull.points();
            assert!(!h.is_empty() && h.len() <= n, "draw {draw}");
            assert!(h.iter().all(|p| input.contains(p)), "draw {draw}");
            assert!(h.iter().all(|p| h[0].lex_cmp(p).is_le()), "draw {draw}");
        }
        let mono = monotone_chain(&input);
        assert_eq!(mono.points().first().copied(), lex_min);
        assert!(lex_max.is_some_and(|p| mono.points().contains(&p)));
    }
}

#[test]
fn float_hull_area_and_signed_zero() {
    let input = vec![
        Point::new(-0.0, 0.0),
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
        Point::new(0.25, 0.75),
    ];
    for hull in all_hulls(&input) {
        assert_eq!(hull.len(), 4);
        assert!((hull.area() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn non_finite_points_are_ignored() {
    let input = vec![
        Point::new(0.0, 0.0),
        Point::new(f64::NAN, 1.0),
        Point::new(2.0, 0.0),
        Point::new(f64::INFINITY, 0.0),
        Point::new(0.0, 2.0),
    ];
    for hull in all_hulls(&input) {
        assert_eq!(hull.len(), 3);
        assert!(hull.points().iter().all(Point::is_finite));
    }
}

#[test]
fn hull_points_convert_to_vectors() {
    let input: Vec<Point<f64>> = [
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(0.0, 2.0),
    ]
    .into_iter()
    .map(Point::from)
    .collect();
    let hull = convex_hull(&input);
    let verts: Vec<Vector2<f64>> = hull.points().iter().map(|&p| p.into()).collect();
    assert_eq!(verts[1], Vector2::new(2.0, 0.0));
    let e1 = verts[1] - verts[0];
    let e2 = verts[2] - verts[0];
    assert!((e1.x * e2.y - e1.y * e2.x - 2.0 * hull.area()).abs() < 1e-12);
}

#[test]
fn orientation_sign_convention() {
    let o = Point::new(0i32, 0);
    assert_eq!(orientation(o, Point::new(1, 0), Point::new(0, 1)), Orientation::CounterClockwise);
    assert_eq!(orientation(o, Point::new(0, 1), Point::new(1, 0)), Orientation::Clockwise);
    assert_eq!(orientation(o, Point::new(1, 1), Point::new(3, 3)), Orientation::Collinear);
    assert_eq!(cross(o, Point::new(1, 0), Point::new(0, 1)), 1);
    assert_eq!(dist2(o, Point::new(3, 4)), 25);
}

#[test]
fn points_on_circle_are_all_corners() {
    for (n, index) in [(3usize, 0u64), (50, 1), (400, 2)] {
        let input = draw_on_circle(n, 10.0, ReplayToken { seed: 9, index });
        let mono = monotone_chain(&input);
        assert_eq!(mono.len(), n);
        assert_eq!(jarvis_march(&input), mono);
        assert_eq!(graham_scan(&input), mono);
    }
}

#[test]
fn seeded_grid_clouds_agree() {
    let cfg = CloudCfg {
        count: PointCount::Uniform { min: 3, max: 120 },
        half_extent: 6.0,
    };
    for index in 0..64 {
        let input = draw_cloud_i32(cfg, ReplayToken { seed: 2024, index });
        let hulls = all_hulls(&input);
        assert_eq!(hulls[0], hulls[1], "jarvis disagrees on draw {index}");
        assert_eq!(hulls[0], hulls[2], "graham disagrees on draw {index}");
    }
}

fn arb_points() -> impl Strategy<Value = Vec<Point<i32>>> {
    prop::collection::vec((-40i32..=40, -40i32..=40).prop_map(|(x, y)| Point::new(x, y)), 0..48)
}

fn arb_cloud() -> impl Strategy<Value = Vec<Point<f64>>> {
    (any::<u64>(), 0u64..1024, 3usize..=96, prop_oneof![Just(1.0), Just(1e3), Just(1e150)])
        .prop_map(|(seed, index, n, half_extent)| {
            let cfg = CloudCfg {
                count: PointCount::Fixed(n),
                half_extent,
            };
            draw_cloud_f64(cfg, ReplayToken { seed, index })
        })
}

proptest! {
    #[test]
    fn float_clouds_agree_and_contain_input(points in arb_cloud()) {
        let hulls = all_hulls(&points);
        prop_assert_eq!(&hulls[0], &hulls[1]);
        prop_assert_eq!(&hulls[0], &hulls[2]);
        let h = hulls[0].points();
        for p in &points {
            prop_assert!(hulls[0].contains(*p), "{:?} outside {:?}", p, h);
        }
        if h.len() >= 3 {
            for k in 0..h.len() {
                prop_assert!(cross(h[k], h[(k + 1) % h.len()], h[(k + 2) % h.len()]) > 0.0);
            }
        }
    }

    #[test]
    fn every_input_point_is_inside_or_on(points in arb_points()) {
        let hull = convex_hull(&points);
        if points.len() >= 3 {
            for p in &points {
                prop_assert!(hull.contains(*p), "{:?} outside {:?}", p, hull.points());
            }
        } else {
            prop_assert!(hull.is_empty());
        }
    }

    #[test]
    fn hull_is_strictly_convex_subsequence(points in arb_points()) {
        let hull = convex_hull(&points);
        let h = hull.points();
        for p in h {
            prop_assert!(points.contains(p));
        }
        if h.len() >= 3 {
            for k in 0..h.len() {
                let turn = cross(h[k], h[(k + 1) % h.len()], h[(k + 2) % h.len()]);
                prop_assert!(turn > 0);
            }
        }
    }

    #[test]
    fn strategies_agree(points in arb_points()) {
        let hulls = all_hulls(&points);
        prop_assert_eq!(&hulls[0], &hulls[1]);
        prop_assert_eq!(&hulls[0], &hulls[2]);
    }

    #[test]
    fn hull_is_idempotent(points in arb_points()) {
        for algorithm in HullAlgorithm::ALL {
            let cfg = HullCfg { algorithm };
            let once = convex_hull_with(&points, cfg);
            prop_assert_eq!(&once, &convex_hull_with(&points, cfg));
            if once.len() >= 3 {
                prop_assert_eq!(&once, &convex_hull_with(once.points(), cfg));
            }
        }
    }

    #[test]
    fn input_order_does_not_matter(mut points in arb_points()) {
        let before = convex_hull(&points);
        points.reverse();
        prop_assert_eq!(before, jarvis_march(&points));
    }
}
