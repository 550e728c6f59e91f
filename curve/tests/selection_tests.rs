use spline_curve::*;

#[test]
fn new_selection_is_empty() {
    let selection = SelectionState::new();

    assert!(selection.mode() == SelectionMode::Empty);
    assert!(selection.control_points().is_empty());
    assert!(selection.curve().is_empty());
    assert!(selection.pointer_position() == None);
}

#[test]
fn modes_advance_as_points_are_added() {
    let mut selection = SelectionState::new();

    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    assert!(selection.mode() == SelectionMode::Insufficient);
    assert!(selection.curve().is_empty(), "one point must not define a curve");

    selection.add_point(Point2D::new(1.0, 0.0)).unwrap();
    assert!(selection.mode() == SelectionMode::Curving);
    assert!(!selection.curve().is_empty());
}

#[test]
fn growth_is_monotonic_and_one_at_a_time() {
    let mut selection = SelectionState::new();

    for i in 0..MAX_CONTROL_POINTS {
        let before = selection.control_points().len();
        selection.add_point(Point2D::new(i as f64, 0.0)).unwrap();

        assert!(selection.control_points().len() == before + 1);
    }
}

#[test]
fn capacity_is_enforced() {
    let mut selection = SelectionState::new();

    for i in 0..MAX_CONTROL_POINTS {
        selection.add_point(Point2D::new((i as f64) * 0.01, 0.0)).unwrap();
    }
    assert!(selection.mode() == SelectionMode::Full);

    let curve_before = selection.curve().to_vec();
    let result = selection.add_point(Point2D::new(0.5, 0.5));

    assert!(result == Err(SelectionError::CapacityExceeded));
    assert!(selection.control_points().len() == MAX_CONTROL_POINTS, "rejected point must not be stored");
    assert!(selection.curve() == curve_before.as_slice(), "rejected point must not disturb the curve");
}

#[test]
fn curve_always_matches_the_control_points() {
    // After every transition, the published curve must be identical to resampling
    // the published control points: no partial or deferred updates
    let mut selection = SelectionState::new();

    let script = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(0.3, 0.8),
        Point2D::new(-0.5, 0.1),
        Point2D::new(0.9, -0.7),
    ];

    for point in script {
        selection.add_point(point).unwrap();

        let expected = sample_curve(selection.control_points());
        assert!(selection.curve() == expected.as_slice(), "curve out of sync after adding {:?}", point);
    }
}

#[test]
fn pointer_motion_does_not_resample() {
    let mut selection = SelectionState::new();

    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 1.0)).unwrap();
    let curve_before = selection.curve().to_vec();

    selection.update_pointer_position(Point2D::new(0.4, -0.2));

    assert!(selection.pointer_position() == Some(Point2D::new(0.4, -0.2)));
    assert!(selection.control_points().len() == 2, "pointer motion must not add points");
    assert!(selection.curve() == curve_before.as_slice(), "pointer motion must not change the curve");
}

#[test]
fn reset_is_idempotent() {
    let mut selection = SelectionState::new();

    selection.add_point(Point2D::new(0.1, 0.2)).unwrap();
    selection.add_point(Point2D::new(0.3, 0.4)).unwrap();

    selection.reset();
    assert!(selection.mode() == SelectionMode::Empty);
    assert!(selection.control_points().is_empty());
    assert!(selection.curve().is_empty());

    // A second reset is a no-op with the same outcome
    selection.reset();
    assert!(selection.mode() == SelectionMode::Empty);
    assert!(selection.control_points().is_empty());
    assert!(selection.curve().is_empty());
}

#[test]
fn reset_allows_building_a_new_curve() {
    let mut selection = SelectionState::new();

    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 0.0)).unwrap();
    selection.reset();

    selection.add_point(Point2D::new(-1.0, -1.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 1.0)).unwrap();

    assert!(selection.mode() == SelectionMode::Curving);
    assert!(selection.curve()[0] == Point2D::new(-1.0, -1.0));
}

#[test]
fn three_point_quadratic_end_to_end() {
    let mut selection = SelectionState::new();

    selection.add_point(Point2D::new(0.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 0.0)).unwrap();
    selection.add_point(Point2D::new(1.0, 1.0)).unwrap();

    let curve = selection.curve();
    assert!(curve.len() == 30, "expected 10 × 3 samples, got {}", curve.len());
    assert!(curve[0] == Point2D::new(0.0, 0.0));
    assert!(curve[29] == Point2D::new(1.0, 1.0));

    let mid = bezier_point(0.5, selection.control_points());
    assert!((mid.x - 0.75).abs() < 1e-12 && (mid.y - 0.25).abs() < 1e-12, "quadratic midpoint was {:?}", mid);
}
