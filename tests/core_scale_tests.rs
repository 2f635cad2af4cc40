use approx::assert_abs_diff_eq;
use horizon_rs::ChartError;
use horizon_rs::core::{ContinuousScale, DegeneratePlacement, ScaleKind};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = ContinuousScale::linear((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let px = scale.apply(42.5);
    assert_abs_diff_eq!(px, 325.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.invert(px), 42.5, epsilon = 1e-9);
}

#[test]
fn y_range_runs_upward_from_row_bottom() {
    // bands = 3, size = 25, padding = 1
    let scale = ContinuousScale::linear((0.0, 8.0), (25.0, -47.0)).expect("valid scale");

    assert_eq!(scale.apply(0.0), 25.0);
    assert_eq!(scale.apply(8.0), -47.0);
    assert_eq!(scale.apply(5.0), -20.0);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = ContinuousScale::linear((0.0, 0.0), (25.0, -47.0)).expect("valid scale");

    assert!(scale.is_degenerate());
    assert_eq!(scale.apply(0.0), 25.0);
    assert_eq!(scale.apply(123.0), 25.0);
    assert_eq!(scale.invert(-10.0), 0.0);
}

#[test]
fn degenerate_domain_can_center_in_the_range() {
    let scale = ContinuousScale::linear((5.0, 5.0), (0.0, 300.0))
        .expect("valid scale")
        .with_degenerate_placement(DegeneratePlacement::Midpoint);

    assert_eq!(scale.degenerate_placement(), DegeneratePlacement::Midpoint);
    assert_eq!(scale.apply(5.0), 150.0);
    assert_eq!(scale.apply(-1.0), 150.0);
    assert_eq!(scale.invert(150.0), 5.0);
}

#[test]
fn degenerate_range_inverts_to_domain_start() {
    let scale = ContinuousScale::linear((3.0, 9.0), (50.0, 50.0)).expect("valid scale");
    assert_eq!(scale.invert(50.0), 3.0);
}

#[test]
fn sqrt_scale_preserves_sign() {
    let scale =
        ContinuousScale::new(ScaleKind::Sqrt, (0.0, 16.0), (0.0, 4.0)).expect("valid scale");

    assert_abs_diff_eq!(scale.apply(4.0), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.apply(-4.0), -2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.invert(2.0), 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(scale.invert(-2.0), -4.0, epsilon = 1e-12);
}

#[test]
fn time_scale_maps_unix_seconds_linearly() {
    let scale =
        ContinuousScale::time((1_700_000_000.0, 1_700_000_600.0), (0.0, 600.0)).expect("scale");

    assert_eq!(scale.kind(), ScaleKind::Time);
    assert_abs_diff_eq!(scale.apply(1_700_000_123.0), 123.0, epsilon = 1e-6);
    assert_abs_diff_eq!(scale.invert(123.0), 1_700_000_123.0, epsilon = 1e-6);
}

#[test]
fn non_finite_bounds_are_rejected() {
    let domain = ContinuousScale::linear((f64::NAN, 1.0), (0.0, 1.0));
    assert!(matches!(domain, Err(ChartError::InvalidConfig(_))));

    let range = ContinuousScale::linear((0.0, 1.0), (0.0, f64::INFINITY));
    assert!(matches!(range, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn linear_ticks_and_labels_use_step_precision() {
    let scale = ContinuousScale::linear((0.0, 1.0), (0.0, 100.0)).expect("valid scale");

    let ticks = scale.ticks(5);
    assert_eq!(ticks.len(), 6);
    assert_eq!(scale.tick_label(ticks[1], 5), "0.2");

    let wide = ContinuousScale::linear((0.0, 5000.0), (0.0, 100.0)).expect("valid scale");
    assert_eq!(wide.tick_label(2000.0, 5), "2,000");
}
