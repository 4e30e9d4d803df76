use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn natural_spline_reproduces_lines() {
    let spline = CubicSpline::natural(vec![0.0, 1.0, 3.0, 4.0], vec![1.0, 3.0, 7.0, 9.0]).unwrap();
    for step in 0..=40 {
        let x = f64::from(step) / 10.0;
        assert!(approx_eq(spline.interpolate(x), 1.0 + 2.0 * x));
    }
}

#[test]
fn passes_through_every_knot() {
    let xs = vec![0.0, 1.0, 2.5, 4.0];
    let ys = vec![3.0, -1.0, 2.0, 8.0];
    let spline = CubicSpline::natural(xs.clone(), ys.clone()).unwrap();
    for (x, y) in xs.iter().zip(&ys) {
        assert!(approx_eq(spline.interpolate(*x), *y));
    }
}

#[test]
fn natural_ends_have_zero_curvature() {
    let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 2.0, 1.0, 4.0]).unwrap();
    let second = spline.derivative().derivative();
    assert!(approx_eq(second.interpolate(0.0), 0.0));
    assert!(approx_eq(second.interpolate(3.0), 0.0));
}

#[test]
fn clamped_spline_reproduces_quadratics() {
    let xs = vec![0.0, 1.0, 2.0, 3.0];
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    let spline = CubicSpline::clamped(xs, ys, 0.0, 6.0).unwrap();
    assert!(approx_eq(spline.interpolate(1.5), 2.25));
    assert!(approx_eq(spline.interpolate(2.2), 4.84));

    let slope = spline.derivative();
    assert!(approx_eq(slope.interpolate(0.0), 0.0));
    assert!(approx_eq(slope.interpolate(1.5), 3.0));
    assert!(approx_eq(slope.interpolate(3.0), 6.0));
}

#[test]
fn natural_spline_overshoots_steps() {
    let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 0.0, 1.0, 1.0]).unwrap();
    assert!(approx_eq(spline.interpolate(0.5), -0.125));
}

#[test]
fn derivative_coefficients_shift_down() {
    let spline = CubicSpline::natural(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
    let d = spline.derivative();
    for ((_, b, c, dd), (da, db, dc, ddd)) in spline.coefficients().zip(d.coefficients()) {
        assert_eq!(da, b);
        assert_eq!(db, 2.0 * c);
        assert_eq!(dc, 3.0 * dd);
        assert_eq!(ddd, 0.0);
    }
}

#[test]
fn boundary_from_derivatives_needs_both() {
    assert_eq!(Boundary::from_derivatives(Some(1.0), None), Boundary::Natural);
    assert_eq!(
        Boundary::from_derivatives(Some(1.0), Some(2.0)),
        Boundary::Clamped { start: 1.0, end: 2.0 }
    );
}

#[test]
fn clamped_slopes_must_be_finite() {
    let err = CubicSpline::clamped(vec![0.0, 1.0], vec![0.0, 1.0], f64::NAN, 0.0).unwrap_err();
    assert!(matches!(err, DuskrError::Spline(_)));
}
