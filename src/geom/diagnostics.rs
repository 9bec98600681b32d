//! Mesh diagnostics for the render mesh of a strip.
//!
//! The strip mesh is an open grid: every border edge is an open edge, including
//! the two seam columns at `u = 0` and `u = 2π`. Those columns coincide in space
//! only after mirroring `v`, so they are reported through `seam_gap` instead of
//! being welded.

use std::collections::HashMap;

use super::core::Point3;
use super::mesh::GeomMesh;

/// Triangles with a doubled area below this are counted as degenerate.
const DEGENERATE_AREA: f64 = 1e-18;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeomMeshDiagnostics {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Zero-area triangles (all of them when the strip has zero width).
    pub degenerate_triangle_count: usize,
    /// Edges with exactly one adjacent triangle.
    pub open_edge_count: usize,
    /// Edges shared by more than two triangles. Always zero for a grid.
    pub non_manifold_edge_count: usize,
    /// Largest distance between `P(0, v)` and `P(2π, -v)` over the grid rows.
    pub seam_gap: f64,
    pub timing: Option<super::metrics::GeomTimingReport>,
    pub warnings: Vec<String>,
}

impl GeomMeshDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_manifold(&self) -> bool {
        self.non_manifold_edge_count == 0
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.non_manifold_edge_count == 0
            && self.degenerate_triangle_count == 0
            && self.warnings.is_empty()
    }

    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Format: `"V:{vertices} T:{triangles} open:{edges} [issues...]"`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("V:{} T:{}", self.vertex_count, self.triangle_count),
            format!("open:{}", self.open_edge_count),
        ];

        if self.degenerate_triangle_count > 0 {
            parts.push(format!("degenerate:{}", self.degenerate_triangle_count));
        }
        if self.non_manifold_edge_count > 0 {
            parts.push(format!("non-manifold:{}", self.non_manifold_edge_count));
        }
        parts.push(format!("seam:{:.3e}", self.seam_gap));
        if !self.warnings.is_empty() {
            parts.push(format!("warnings:{}", self.warnings.len()));
        }

        parts.join(" ")
    }
}

/// Counts, edge topology and degenerate triangles of `mesh`.
///
/// `seam_gap` is left at zero; it needs the sampled strip and is filled by
/// [`super::mesh::mesh_strip_with_context`].
#[must_use]
pub fn compute_mesh_diagnostics(mesh: &GeomMesh) -> GeomMeshDiagnostics {
    let mut diag = GeomMeshDiagnostics {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        ..GeomMeshDiagnostics::default()
    };

    let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_uses.entry(key).or_insert(0) += 1;
        }

        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| {
            let p = mesh.positions[i as usize];
            Point3::new(p[0], p[1], p[2])
        });
        let doubled_area = b.sub_point(a).cross(c.sub_point(a)).length();
        if doubled_area < DEGENERATE_AREA {
            diag.degenerate_triangle_count += 1;
        }
    }

    for uses in edge_uses.values() {
        match uses {
            1 => diag.open_edge_count += 1,
            2 => {}
            _ => diag.non_manifold_edge_count += 1,
        }
    }

    if diag.degenerate_triangle_count > 0 {
        diag.add_warning(format!(
            "mesh has {} degenerate triangles",
            diag.degenerate_triangle_count
        ));
    }
    if diag.non_manifold_edge_count > 0 {
        diag.add_warning("mesh has non-manifold edges");
    }

    diag
}
