use super::diagnostics::{GeomMeshDiagnostics, compute_mesh_diagnostics};
use super::metrics::{GeomMetrics, TimingBucket};
use super::surface::{MobiusStrip, Surface};
use super::triangulation::triangulate_grid;

/// Triangle mesh ready for export or display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeomMesh {
    pub positions: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
    pub uvs: Option<Vec<[f64; 2]>>,
    pub normals: Option<Vec<[f64; 3]>>,
}

impl GeomMesh {
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            uvs: None,
            normals: None,
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < n)
    }

    #[must_use]
    pub fn has_valid_attribute_lengths(&self) -> bool {
        let n = self.positions.len();
        self.uvs.as_ref().is_none_or(|uvs| uvs.len() == n)
            && self.normals.as_ref().is_none_or(|normals| normals.len() == n)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err("mesh indices are not a triangle list (len % 3 != 0)".to_string());
        }
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        if !self.has_valid_attribute_lengths() {
            return Err("mesh attribute buffers do not match vertex count".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct GeomContext {
    pub metrics: GeomMetrics,
}

impl GeomContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[must_use]
pub fn mesh_strip(strip: &MobiusStrip) -> (GeomMesh, GeomMeshDiagnostics) {
    let mut ctx = GeomContext::new();
    mesh_strip_with_context(strip, &mut ctx)
}

/// Triangulates the sampled coordinate grid of `strip`.
///
/// Vertices keep the grid's row-major order. UVs are the normalized grid
/// indices; normals are `T_u × T_v`, which flips sign across the seam.
/// Vertices where the normal is undefined get a zero normal.
#[must_use]
pub fn mesh_strip_with_context(
    strip: &MobiusStrip,
    ctx: &mut GeomContext,
) -> (GeomMesh, GeomMeshDiagnostics) {
    ctx.metrics.begin();

    let grid = strip.grid();
    let u_count = grid.u_count();
    let v_count = grid.v_count();

    let indices = ctx
        .metrics
        .time(TimingBucket::Triangulation, || triangulate_grid(u_count, v_count));

    let surface = strip.surface();
    let u_last = (u_count - 1) as f64;
    let v_last = (v_count - 1) as f64;

    let mut uvs = Vec::with_capacity(grid.len());
    let mut normals = Vec::with_capacity(grid.len());
    for row in 0..v_count {
        for col in 0..u_count {
            uvs.push([col as f64 / u_last, row as f64 / v_last]);
            let normal = surface
                .normal_at(grid.u_at(row, col), grid.v_at(row, col))
                .map_or([0.0; 3], |n| n.to_array());
            normals.push(normal);
        }
    }

    let mesh = GeomMesh {
        positions: strip.positions().collect(),
        indices,
        uvs: Some(uvs),
        normals: Some(normals),
    };

    let mut diag = ctx
        .metrics
        .time(TimingBucket::Diagnostics, || compute_mesh_diagnostics(&mesh));
    diag.seam_gap = seam_gap(strip);
    diag.timing = ctx.metrics.end();

    log::debug!("strip mesh: {}", diag.summary());
    (mesh, diag)
}

/// Largest distance between the first column and the mirrored last column.
///
/// Zero up to rounding for the half-twist mapping; the first and last columns
/// sample the same points in opposite `v` order.
#[must_use]
pub fn seam_gap(strip: &MobiusStrip) -> f64 {
    let grid = strip.grid();
    let last_row = grid.v_count() - 1;
    let last_col = grid.u_count() - 1;

    (0..grid.v_count())
        .map(|row| {
            strip
                .position(row, 0)
                .distance_to(strip.position(last_row - row, last_col))
        })
        .fold(0.0, f64::max)
}
