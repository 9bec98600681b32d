mod analysis;
mod core;
mod diagnostics;
mod grid;
mod mesh;
mod metrics;
mod params;
mod surface;
mod triangulation;

pub use analysis::{
    StripMeasurements, area_density_at, edge_length, edge_length_at, edge_speed_at, measure,
    measure_with_metrics, surface_area, surface_area_on_grid,
};
pub use core::{Point3, Vec3};
pub use diagnostics::{GeomMeshDiagnostics, compute_mesh_diagnostics};
pub use grid::{ParamGrid, linspace};
pub use mesh::{GeomContext, GeomMesh, mesh_strip, mesh_strip_with_context, seam_gap};
pub use metrics::{GeomMetrics, GeomTimingReport, TimingBucket};
pub use params::StripParams;
pub use surface::{MobiusStrip, MobiusSurface, StripError, Surface, finite_difference_partials};
pub use triangulation::triangulate_grid;

#[cfg(test)]
mod tests;
