//! Regression fixtures for the documented example run (`R = 5, w = 2, n = 300`).
//!
//! Pinned from the reference quadrature formulas; the second block re-derives
//! the printed four-decimal report lines.

use mobius_engine::geom::{MobiusStrip, StripParams, measure};

const REFERENCE_AREA: f64 = 63.360_102_974_7;
const REFERENCE_EDGE_LENGTH: f64 = 31.681_419_874_2;
const TOLERANCE: f64 = 1e-6;

#[test]
fn reference_strip_matches_pinned_values() {
    let strip = MobiusStrip::new(StripParams::reference()).expect("reference strip");
    let measurements = measure(&strip);

    assert!(
        (measurements.surface_area - REFERENCE_AREA).abs() < TOLERANCE,
        "surface area drifted: {}",
        measurements.surface_area
    );
    assert!(
        (measurements.edge_length - REFERENCE_EDGE_LENGTH).abs() < TOLERANCE,
        "edge length drifted: {}",
        measurements.edge_length
    );
}

#[test]
fn reference_report_lines() {
    let strip = MobiusStrip::new(StripParams::reference()).expect("reference strip");
    let measurements = measure(&strip);

    assert_eq!(
        format!("Approximate Surface Area: {:.4}", measurements.surface_area),
        "Approximate Surface Area: 63.3601"
    );
    assert_eq!(
        format!("Approximate Edge Length: {:.4}", measurements.edge_length),
        "Approximate Edge Length: 31.6814"
    );
}

#[test]
fn default_resolution_values() {
    let strip = MobiusStrip::new(StripParams::default()).expect("default strip");
    let measurements = measure(&strip);

    assert!((measurements.surface_area - 64.217_795_118_6).abs() < TOLERANCE);
    assert!((measurements.edge_length - 31.894_784_675_3).abs() < TOLERANCE);
}
