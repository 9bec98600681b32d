//! Riemann-sum estimates of surface area and boundary length.
//!
//! Both quantities integrate analytic derivatives of the mapping over the
//! sampled parameter grid. Every sample carries the same weight (`du·dv` for
//! area, `du` for length); both endpoints of each axis are included, so the
//! sums overshoot by roughly one boundary row/column and converge as `O(1/n)`.

use serde::Serialize;

use super::grid::ParamGrid;
use super::metrics::{GeomMetrics, TimingBucket};
use super::surface::{MobiusStrip, MobiusSurface, Surface};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scalar results reported for a strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripMeasurements {
    pub surface_area: f64,
    pub edge_length: f64,
}

/// Local area density `|T_u × T_v|` at `(u, v)`.
#[must_use]
pub fn area_density_at(surface: &MobiusSurface, u: f64, v: f64) -> f64 {
    let (tu, tv) = surface.partial_derivatives_at(u, v);
    tu.cross(tv).length()
}

/// Speed `|∂P/∂u|` of the curve `u ↦ P(u, v)`.
#[must_use]
pub fn edge_speed_at(surface: &MobiusSurface, u: f64, v: f64) -> f64 {
    surface.u_derivative_at(u, v).length()
}

/// Sum of area densities over `grid`, times `du·dv`.
///
/// Rows are summed first and the row sums added in order, so the result is
/// bit-identical with and without the `parallel` feature.
#[must_use]
pub fn surface_area_on_grid(surface: &MobiusSurface, grid: &ParamGrid) -> f64 {
    let row_sum = |row: usize| -> f64 {
        let v = grid.v()[row];
        grid.u().iter().map(|&u| area_density_at(surface, u, v)).sum()
    };

    #[cfg(feature = "parallel")]
    let row_sums: Vec<f64> = (0..grid.v_count()).into_par_iter().map(row_sum).collect();

    #[cfg(not(feature = "parallel"))]
    let row_sums: Vec<f64> = (0..grid.v_count()).map(row_sum).collect();

    row_sums.iter().sum::<f64>() * grid.du() * grid.dv()
}

/// Arc length of the `v = v_edge` curve sampled at `u`, as `Σ speed · du`.
#[must_use]
pub fn edge_length_at(surface: &MobiusSurface, u: &[f64], v_edge: f64, du: f64) -> f64 {
    let total: f64 = u.iter().map(|&ui| edge_speed_at(surface, ui, v_edge)).sum();
    total * du
}

/// Approximate surface area of the strip.
#[must_use]
pub fn surface_area(strip: &MobiusStrip) -> f64 {
    log::debug!("surface area over {} samples", strip.grid().len());
    surface_area_on_grid(strip.surface(), strip.grid())
}

/// Approximate length of the `v = +w/2` boundary over one `u` period.
///
/// The strip has a single boundary curve that only closes after `u` runs over
/// `[0, 4π)`; this measures the `[0, 2π]` half of it. The other half is the
/// `v = -w/2` curve, which has the same length by symmetry.
#[must_use]
pub fn edge_length(strip: &MobiusStrip) -> f64 {
    let grid = strip.grid();
    let v_edge = strip.params().width / 2.0;
    edge_length_at(strip.surface(), grid.u(), v_edge, grid.du())
}

/// Both scalars, timed into `metrics` when the `metrics` feature is on.
#[must_use]
pub fn measure_with_metrics(strip: &MobiusStrip, metrics: &mut GeomMetrics) -> StripMeasurements {
    let surface_area = metrics.time(TimingBucket::SurfaceArea, || surface_area(strip));
    let edge_length = metrics.time(TimingBucket::EdgeLength, || edge_length(strip));
    StripMeasurements {
        surface_area,
        edge_length,
    }
}

#[must_use]
pub fn measure(strip: &MobiusStrip) -> StripMeasurements {
    measure_with_metrics(strip, &mut GeomMetrics::default())
}
