use super::*;
use alloc::vec;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ======================== Helpers ========================

#[test]
fn sorted_validation() {
    assert!(validate_sorted(&[0.0_f64, 1.0, 2.0]).is_ok());
    assert_eq!(validate_sorted(&[0.0_f64, 1.0, 1.0]), Err(InterpError::NotSorted));
    assert_eq!(validate_sorted(&[1.0_f64, 0.0]), Err(InterpError::NotSorted));
    assert_eq!(validate_sorted(&[0.0_f64, f64::NAN, 2.0]), Err(InterpError::NotSorted));
    assert_eq!(validate_sorted(&[f64::NAN]), Err(InterpError::NotSorted));
    assert!(validate_sorted::<f64>(&[]).is_ok());
}

#[test]
fn interval_search_clamps() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0];
    assert_eq!(find_interval(&xs, -5.0), 0);
    assert_eq!(find_interval(&xs, 0.0), 0);
    assert_eq!(find_interval(&xs, 1.5), 1);
    assert_eq!(find_interval(&xs, 2.0), 2);
    assert_eq!(find_interval(&xs, 3.0), 2);
    assert_eq!(find_interval(&xs, 9.0), 2);
}

#[test]
fn pairs_sorted_by_node() {
    let (xs, ys) = sort_pairs(&[3.0_f64, 1.0, 2.0], &[30.0, 10.0, 20.0]);
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(ys, vec![10.0, 20.0, 30.0]);

    let (xs, ys) = sort_pairs(&[3.0_f64, 2.0, 1.0], &[0.0, 1.0, 2.0]);
    assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    assert_eq!(ys, vec![2.0, 1.0, 0.0]);

    let (xs, ys) = sort_pairs(&[1.0_f64, 2.0], &[5.0, 6.0]);
    assert_eq!(xs, vec![1.0, 2.0]);
    assert_eq!(ys, vec![5.0, 6.0]);
}

// ======================== Kind ========================

#[test]
fn kind_names_round_trip() {
    for kind in Kind::ALL {
        assert_eq!(kind.name().parse::<Kind>(), Ok(kind));
    }
    assert_eq!("Linear".parse::<Kind>(), Err(ParseKindError));
    assert_eq!("cubic-spline".parse::<Kind>(), Err(ParseKindError));
}

#[test]
fn kind_min_points() {
    assert_eq!(Kind::Nearest.min_points(), 1);
    assert_eq!(Kind::Zero.min_points(), 1);
    assert_eq!(Kind::Linear.min_points(), 2);
    assert_eq!(Kind::Quadratic.min_points(), 3);
    assert_eq!(Kind::Cubic.min_points(), 4);
    assert_eq!(Kind::Spline.min_points(), 4);
}

// ======================== Linear ========================

#[test]
fn linear_basic() {
    let interp =
        LinearInterp::new(vec![0.0_f64, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).unwrap();
    assert_near(interp.eval(0.0), 0.0, 1e-14, "knot 0");
    assert_near(interp.eval(1.0), 1.0, 1e-14, "knot 1");
    assert_near(interp.eval(3.0), 1.0, 1e-14, "knot 3");
    assert_near(interp.eval(0.5), 0.5, 1e-14, "mid 0");
    assert_near(interp.eval(2.5), 0.5, 1e-14, "mid 2");
}

#[test]
fn linear_extrapolation() {
    let interp = LinearInterp::new(vec![1.0_f64, 2.0, 3.0], vec![1.0, 3.0, 2.0]).unwrap();
    // Below left boundary: extrapolates segment 0 (slope = 2)
    assert_near(interp.eval(0.0), -1.0, 1e-14, "left");
    // Above right boundary: extrapolates last segment (slope = -1)
    assert_near(interp.eval(4.0), 1.0, 1e-14, "right");
}

#[test]
fn linear_errors() {
    assert_eq!(
        LinearInterp::new(vec![1.0_f64], vec![2.0]).unwrap_err(),
        InterpError::TooFewPoints
    );
    assert_eq!(
        LinearInterp::new(vec![0.0_f64, 1.0, 1.0], vec![0.0, 1.0, 2.0]).unwrap_err(),
        InterpError::NotSorted
    );
    assert_eq!(
        LinearInterp::new(vec![0.0_f64, 1.0], vec![0.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
}

#[test]
fn linear_f32() {
    let interp = LinearInterp::new(vec![0.0_f32, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
    assert!((interp.eval(0.5) - 0.5).abs() < 1e-6);
    assert!((interp.eval(1.5) - 2.5).abs() < 1e-6);
}

// ======================== Step ========================

#[test]
fn step_previous() {
    let s = StepInterp::new(vec![0.0_f64, 1.0, 2.0], vec![5.0, 6.0, 7.0], StepRule::Previous)
        .unwrap();
    assert_eq!(s.eval(0.0), 5.0);
    assert_eq!(s.eval(0.999), 5.0);
    assert_eq!(s.eval(1.0), 6.0);
    assert_eq!(s.eval(2.0), 7.0);
    // held outside
    assert_eq!(s.eval(-1.0), 5.0);
    assert_eq!(s.eval(3.0), 7.0);
}

#[test]
fn step_next() {
    let s = StepInterp::new(vec![0.0_f64, 1.0, 2.0], vec![5.0, 6.0, 7.0], StepRule::Next).unwrap();
    assert_eq!(s.eval(0.0), 5.0);
    assert_eq!(s.eval(0.001), 6.0);
    assert_eq!(s.eval(1.0), 6.0);
    assert_eq!(s.eval(2.0), 7.0);
    assert_eq!(s.eval(-1.0), 5.0);
    assert_eq!(s.eval(3.0), 7.0);
}

#[test]
fn step_nearest_rounds_down_at_midpoint() {
    let s = StepInterp::new(vec![0.0_f64, 2.0, 4.0], vec![1.0, 2.0, 3.0], StepRule::Nearest)
        .unwrap();
    assert_eq!(s.eval(0.9), 1.0);
    assert_eq!(s.eval(1.0), 1.0);
    assert_eq!(s.eval(1.1), 2.0);
    assert_eq!(s.eval(3.0), 2.0);
    assert_eq!(s.eval(3.5), 3.0);
    assert_eq!(s.eval(-10.0), 1.0);
    assert_eq!(s.eval(10.0), 3.0);
}

#[test]
fn step_single_point() {
    for rule in [StepRule::Nearest, StepRule::Previous, StepRule::Next] {
        let s = StepInterp::new(vec![1.0_f64], vec![42.0], rule).unwrap();
        assert_eq!(s.eval(1.0), 42.0);
        assert_eq!(s.eval(0.0), 42.0);
        assert_eq!(s.eval(2.0), 42.0);
    }
}

#[test]
fn step_nan_query() {
    let s = StepInterp::new(vec![0.0_f64, 1.0], vec![0.0, 1.0], StepRule::Previous).unwrap();
    assert!(s.eval(f64::NAN).is_nan());
}

#[test]
fn step_empty() {
    let r = StepInterp::<f64>::new(vec![], vec![], StepRule::Next);
    assert_eq!(r.unwrap_err(), InterpError::TooFewPoints);
}

// ======================== B-spline ========================

#[test]
fn bspline_knot_vectors() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [0.0_f64; 6];

    let s0 = BSpline::interpolate(&xs, &ys, 0).unwrap();
    assert_eq!(s0.knots(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0]);

    let s1 = BSpline::interpolate(&xs, &ys, 1).unwrap();
    assert_eq!(s1.knots(), &[0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 5.0]);

    let s2 = BSpline::interpolate(&xs, &ys, 2).unwrap();
    assert_eq!(s2.knots(), &[0.0, 0.0, 0.0, 1.5, 2.5, 3.5, 5.0, 5.0, 5.0]);

    let s3 = BSpline::interpolate(&xs, &ys, 3).unwrap();
    assert_eq!(s3.knots(), &[0.0, 0.0, 0.0, 0.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0]);
    assert_eq!(s3.coeffs().len(), 6);
    assert_eq!(s3.degree(), 3);
    assert_eq!(s3.domain(), (0.0, 5.0));
}

#[test]
fn bspline_passes_through_data() {
    let xs = [0.0_f64, 0.5, 1.3, 2.0, 3.7, 4.1, 5.0];
    let ys = xs.map(|x| (x * 0.7).sin() + x);
    for degree in 0..=MAX_DEGREE {
        let s = BSpline::interpolate(&xs, &ys, degree).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_near(s.eval(*x), *y, 1e-12, "node value");
        }
    }
}

#[test]
fn bspline_zero_degree_is_left_closed() {
    let s = BSpline::interpolate(&[0.0_f64, 1.0, 2.0], &[10.0, 20.0, 30.0], 0).unwrap();
    assert_eq!(s.eval(0.5), 10.0);
    assert_eq!(s.eval(1.0), 20.0);
    assert_eq!(s.eval(1.999), 20.0);
    assert_eq!(s.eval(2.0), 30.0);
    assert_eq!(s.eval(-1.0), 10.0);
    assert_eq!(s.eval(3.0), 30.0);
}

#[test]
fn bspline_linear_matches_linear_interp() {
    let xs = [0.0_f64, 1.0, 3.0, 4.0];
    let ys = [1.0, -1.0, 2.0, 0.0];
    let s = BSpline::interpolate(&xs, &ys, 1).unwrap();
    let l = LinearInterp::new(xs.to_vec(), ys.to_vec()).unwrap();
    for &x in &[-1.0, 0.0, 0.25, 1.0, 2.0, 3.5, 4.0, 5.0] {
        assert_near(s.eval(x), l.eval(x), 1e-14, "slinear vs linear");
    }
}

#[test]
fn bspline_quadratic_reproduces_parabola() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
    let ys = xs.map(|x| 2.0 * x * x - x + 1.0);
    let s = BSpline::interpolate(&xs, &ys, 2).unwrap();
    for &x in &[0.3, 1.5, 2.7, 3.9, -0.5, 4.5] {
        assert_near(s.eval(x), 2.0 * x * x - x + 1.0, 1e-10, "parabola");
    }
}

#[test]
fn bspline_cubic_reproduces_cubic() {
    let f = |x: f64| x * x * x - 2.0 * x * x + 0.5;
    let xs = [-1.0_f64, -0.2, 0.5, 1.1, 2.0, 2.4, 3.0];
    let ys = xs.map(f);
    let s = BSpline::fit(&xs, &ys).unwrap();
    for &x in &[-1.0, -0.5, 0.0, 0.8, 1.7, 2.2, 3.0, -2.0, 4.0] {
        assert_near(s.eval(x), f(x), 1e-9, "cubic");
    }
}

#[test]
fn bspline_cubic_minimum_points() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0];
    let ys = [0.0, 1.0, 8.0, 27.0];
    let s = BSpline::fit(&xs, &ys).unwrap();
    // Four points and no interior knots: the single cubic through them.
    assert_near(s.eval(1.5), 3.375, 1e-12, "x^3 at 1.5");
    assert_eq!(
        BSpline::fit(&xs[..3], &ys[..3]).unwrap_err(),
        InterpError::TooFewPoints
    );
}

#[test]
fn bspline_sin_accuracy() {
    let xs: [f64; 12] = core::array::from_fn(|i| i as f64 * 0.3);
    let ys = xs.map(|x| x.sin());
    let s = BSpline::fit(&xs, &ys).unwrap();
    for i in 0..32 {
        let x = i as f64 * 0.1;
        assert_near(s.eval(x), x.sin(), 1e-3, "sin");
    }
}

#[test]
fn bspline_errors() {
    assert_eq!(
        BSpline::interpolate(&[0.0_f64, 1.0, 2.0, 3.0, 4.0], &[0.0; 5], 4).unwrap_err(),
        InterpError::UnsupportedDegree
    );
    assert_eq!(
        BSpline::interpolate(&[0.0_f64, 1.0], &[0.0], 1).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        BSpline::interpolate(&[0.0_f64, 2.0, 1.0], &[0.0; 3], 2).unwrap_err(),
        InterpError::NotSorted
    );
}

#[test]
fn bspline_from_parts() {
    // Linear B-spline on [0, 1] with coefficients 0, 1.
    let s = BSpline::new(vec![0.0_f64, 0.0, 1.0, 1.0], vec![0.0, 1.0], 1).unwrap();
    assert_near(s.eval(0.25), 0.25, 1e-15, "from parts");
    assert_eq!(
        BSpline::new(vec![0.0_f64, 1.0, 1.0], vec![0.0, 1.0], 1).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        BSpline::new(vec![0.0_f64, 1.0, 0.5, 1.0], vec![0.0, 1.0], 1).unwrap_err(),
        InterpError::NotSorted
    );
    assert_eq!(
        BSpline::new(vec![0.0_f64, 0.0, 0.0, 0.0], vec![0.0, 1.0], 1).unwrap_err(),
        InterpError::NotSorted
    );
}

#[test]
fn bspline_f32() {
    let xs = [0.0_f32, 1.0, 2.0, 3.0, 4.0];
    let ys = xs.map(|x| x * x);
    let s = BSpline::interpolate(&xs, &ys, 2).unwrap();
    assert!((s.eval(2.5) - 6.25).abs() < 1e-4);
}

// ======================== Interp1d ========================

#[test]
fn table_every_kind_hits_nodes() {
    let nodes = [0.0_f64, 1.0, 2.5, 3.0, 4.5, 6.0];
    let values = nodes.map(|x| x.exp());
    for kind in Kind::ALL {
        let t = Interp1d::new(&nodes, &values, kind, Bounds::Error).unwrap();
        for (x, y) in nodes.iter().zip(values.iter()) {
            let v = t.eval(*x).unwrap();
            assert!((v - y).abs() < 1e-9 * y.abs().max(1.0), "{kind} at {x}: {v} vs {y}");
        }
    }
}

#[test]
fn table_bounds_error() {
    let t = Interp1d::new(&[1.0_f64, 2.0, 3.0, 4.0], &[0.0; 4], Kind::Cubic, Bounds::Error)
        .unwrap();
    assert_eq!(t.eval(0.5).unwrap_err(), InterpError::BelowRange);
    assert_eq!(t.eval(4.5).unwrap_err(), InterpError::AboveRange);
    assert!(t.eval(1.0).is_ok());
    assert!(t.eval(4.0).is_ok());
    assert_eq!(t.domain(), (1.0, 4.0));
    assert_eq!(t.kind(), Kind::Cubic);
    assert_eq!(t.bounds(), Bounds::Error);
}

#[test]
fn table_bounds_extrapolate() {
    let nodes = [0.0_f64, 1.0, 2.0];
    let values = [0.0, 10.0, 20.0];
    let lin = Interp1d::new(&nodes, &values, Kind::Linear, Bounds::Extrapolate).unwrap();
    assert_near(lin.eval(3.0).unwrap(), 30.0, 1e-12, "linear extrapolate");
    let prev = Interp1d::new(&nodes, &values, Kind::Previous, Bounds::Extrapolate).unwrap();
    assert_eq!(prev.eval(-5.0).unwrap(), 0.0);
    assert_eq!(prev.eval(5.0).unwrap(), 20.0);
}

#[test]
fn table_nan_query_passes_bounds() {
    let t = Interp1d::new(&[0.0_f64, 1.0], &[0.0, 1.0], Kind::Linear, Bounds::Error).unwrap();
    assert!(t.eval(f64::NAN).unwrap().is_nan());
}

#[test]
fn table_eval_many() {
    let t = Interp1d::new(&[0.0_f64, 1.0], &[0.0, 2.0], Kind::Linear, Bounds::Error).unwrap();
    let v = t.eval_many(&[0.0, 0.25, 1.0]).unwrap();
    assert_eq!(v.len(), 3);
    assert_near(v[1], 0.5, 1e-15, "eval_many");
    assert_eq!(t.eval_many(&[0.5, 2.0]).unwrap_err(), InterpError::AboveRange);
}

#[test]
fn table_construction_errors() {
    assert_eq!(
        Interp1d::new(&[0.0_f64], &[1.0], Kind::Linear, Bounds::Error).unwrap_err(),
        InterpError::TooFewPoints
    );
    assert_eq!(
        Interp1d::new(&[0.0_f64, 1.0, 2.0], &[1.0, 2.0, 3.0], Kind::Cubic, Bounds::Error)
            .unwrap_err(),
        InterpError::TooFewPoints
    );
    assert_eq!(
        Interp1d::new(&[0.0_f64, 1.0, 0.0], &[1.0, 2.0, 3.0], Kind::Nearest, Bounds::Error)
            .unwrap_err(),
        InterpError::NotSorted
    );
    assert_eq!(
        Interp1d::new(&[0.0_f64, 1.0], &[1.0], Kind::Nearest, Bounds::Error).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert!(Interp1d::new(&[0.0_f64], &[1.0], Kind::Nearest, Bounds::Error).is_ok());
}

#[test]
fn error_display() {
    assert_eq!(
        alloc::format!("{}", InterpError::AboveRange),
        "a query value is above the interpolation range"
    );
    assert_eq!(
        alloc::format!("{}", InterpError::UnsupportedDegree),
        "spline degree must be at most 3"
    );
}
