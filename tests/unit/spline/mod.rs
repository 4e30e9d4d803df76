use super::*;

#[test]
fn knots_must_match_in_length() {
    let err = validate_knots(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert!(matches!(err, DuskrError::Spline(_)));
}

#[test]
fn a_single_knot_is_rejected() {
    assert!(validate_knots(&[1.0], &[1.0]).is_err());
    assert!(validate_knots(&[], &[]).is_err());
}

#[test]
fn knots_must_increase_strictly() {
    assert!(validate_knots(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
    assert!(validate_knots(&[2.0, 1.0], &[0.0, 1.0]).is_err());
}

#[test]
fn knots_must_be_finite() {
    assert!(validate_knots(&[0.0, 1.0], &[0.0, f64::NAN]).is_err());
    assert!(validate_knots(&[0.0, f64::INFINITY], &[0.0, 1.0]).is_err());
}

#[test]
fn segment_lookup_takes_rightmost_knot_at_or_below() {
    let xs = [0.0, 1.0, 2.0, 3.0];
    assert_eq!(segment_index(&xs, 0.0), 0);
    assert_eq!(segment_index(&xs, 1.0), 1);
    assert_eq!(segment_index(&xs, 2.5), 2);
    // last knot and beyond stay in the last segment
    assert_eq!(segment_index(&xs, 3.0), 2);
    assert_eq!(segment_index(&xs, 9.0), 2);
    assert_eq!(segment_index(&xs, -1.0), 0);
}

#[test]
fn kinds_build_matching_interpolators() {
    for kind in [SplineKind::Monotonic, SplineKind::Natural] {
        let spline = kind.build(vec![0.0, 10.0], vec![0.0, 100.0]).unwrap();
        assert!((spline.interpolate(5.0) - 50.0).abs() < 1e-9);
    }
    assert!(SplineKind::Monotonic.build(vec![0.0], vec![0.0]).is_err());
}

#[test]
fn kind_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&SplineKind::Natural).unwrap(),
        "\"natural\""
    );
    assert_eq!(SplineKind::default(), SplineKind::Monotonic);
}
