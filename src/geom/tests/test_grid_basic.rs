use std::f64::consts::TAU;

use crate::geom::{ParamGrid, StripError, linspace};

#[test]
fn linspace_pins_both_endpoints() {
    for count in [2, 3, 7, 100, 301] {
        let values = linspace(0.0, TAU, count);
        assert_eq!(values.len(), count);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[count - 1], TAU);
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "linspace({count}) must be strictly increasing"
        );
    }
}

#[test]
fn linspace_handles_short_counts() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    assert_eq!(linspace(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
}

#[test]
fn grid_rejects_degenerate_resolution() {
    for resolution in [0, 1] {
        let err = ParamGrid::new(2.0, resolution).unwrap_err();
        assert_eq!(err, StripError::DegenerateResolution { resolution });
    }
}

#[test]
fn grid_axes_span_documented_ranges() {
    let width = 2.0;
    for n in [2, 5, 64] {
        let grid = ParamGrid::new(width, n).unwrap();
        assert_eq!(grid.u().len(), n);
        assert_eq!(grid.v().len(), n);
        assert_eq!(grid.u()[0], 0.0);
        assert_eq!(grid.u()[n - 1], TAU);
        assert_eq!(grid.v()[0], -1.0);
        assert_eq!(grid.v()[n - 1], 1.0);
        assert!(grid.v().windows(2).all(|w| w[0] < w[1]));

        let steps = (n - 1) as f64;
        assert!((grid.du() - TAU / steps).abs() < 1e-15);
        assert!((grid.dv() - width / steps).abs() < 1e-15);
    }
}

#[test]
fn meshgrid_rows_follow_v_and_columns_follow_u() {
    let grid = ParamGrid::new(1.0, 4).unwrap();
    assert_eq!(grid.len(), 16);

    for row in 0..grid.v_count() {
        for col in 0..grid.u_count() {
            let i = grid.index(row, col);
            assert_eq!(grid.u_mesh()[i], grid.u()[col]);
            assert_eq!(grid.v_mesh()[i], grid.v()[row]);
            assert_eq!(grid.u_at(row, col), grid.u()[col]);
            assert_eq!(grid.v_at(row, col), grid.v()[row]);
        }
    }

    let u_rows = grid.u_rows();
    let v_rows = grid.v_rows();
    assert_eq!(u_rows.len(), 4);
    assert_eq!(u_rows[2], grid.u().to_vec());
    assert!(v_rows[3].iter().all(|&v| v == grid.v()[3]));

    let samples: Vec<(f64, f64)> = grid.samples().collect();
    assert_eq!(samples[5], (grid.u()[1], grid.v()[1]));
}

#[test]
fn mirrored_grid_negates_v_only() {
    let grid = ParamGrid::new(2.0, 9).unwrap();
    let mirrored = grid.mirrored_v();

    assert_eq!(mirrored.u(), grid.u());
    assert_eq!(mirrored.du(), grid.du());
    assert_eq!(mirrored.dv(), grid.dv());
    for (a, b) in grid.v().iter().zip(mirrored.v()) {
        assert_eq!(*b, -*a);
    }
    assert_eq!(mirrored.v_mesh()[0], 1.0);
}

#[test]
fn zero_width_collapses_v_axis() {
    let grid = ParamGrid::new(0.0, 6).unwrap();
    assert!(grid.v().iter().all(|&v| v == 0.0));
    assert_eq!(grid.dv(), 0.0);
}
