//! Tests for axis domains and bar heights

use crate::scale::{ACCURACY_AXIS, AxisDomain, SAMPLES_AXIS, TICK_INTERVALS};

#[test]
fn test_accuracy_axis_fraction() {
    assert_eq!(ACCURACY_AXIS.fraction(80.0), 0.0);
    assert_eq!(ACCURACY_AXIS.fraction(100.0), 1.0);
    assert!((ACCURACY_AXIS.fraction(90.0) - 0.5).abs() < 1e-12);
    assert!((ACCURACY_AXIS.fraction(94.2) - 0.71).abs() < 1e-9);
}

#[test]
fn test_fraction_clamps_outside_domain() {
    assert_eq!(ACCURACY_AXIS.fraction(55.0), 0.0);
    assert_eq!(ACCURACY_AXIS.fraction(120.0), 1.0);
    assert_eq!(SAMPLES_AXIS.fraction(5_000.0), 1.0);
    assert_eq!(ACCURACY_AXIS.fraction(f64::NAN), 0.0);
    assert_eq!(AxisDomain::new(5.0, 5.0).fraction(5.0), 0.0);
}

#[test]
fn test_boundary_values_stay_within_plot() {
    let rows = 12;
    assert_eq!(ACCURACY_AXIS.eighths(80.0, rows), 0);
    assert_eq!(ACCURACY_AXIS.eighths(100.0, rows), rows * 8);
    assert_eq!(SAMPLES_AXIS.eighths(1600.0, rows), rows * 8);
    assert_eq!(SAMPLES_AXIS.eighths(0.0, rows), 0);
}

#[test]
fn test_ticks() {
    assert_eq!(
        ACCURACY_AXIS.ticks(TICK_INTERVALS),
        vec![80.0, 84.0, 88.0, 92.0, 96.0, 100.0]
    );
    assert_eq!(
        SAMPLES_AXIS.ticks(TICK_INTERVALS),
        vec![0.0, 320.0, 640.0, 960.0, 1280.0, 1600.0]
    );
    assert_eq!(SAMPLES_AXIS.ticks(0), vec![0.0, 1600.0]);
}
