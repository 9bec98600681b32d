//! Display payload for the web viewer.
//!
//! The geometry core never depends on this module. It packages the strip mesh
//! with a per-vertex color keyed to the `U` parameter (`(U mod 2π) / 2π`
//! through the plasma colormap) and the scene settings the viewer needs for its
//! legend and axes.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::geom::{GeomContext, GeomMesh, MobiusStrip, TimingBucket, mesh_strip_with_context};

pub const TITLE: &str = "3D Möbius Strip Visualization";
pub const LEGEND_LABEL: &str = "U Parameter";
pub const COLORMAP_NAME: &str = "plasma";
const SURFACE_ALPHA: f64 = 0.95;
const BOX_ASPECT: [f64; 3] = [1.0, 1.0, 0.5];

/// Evenly spaced stops of the plasma colormap, sRGB in `0..=255`.
const PLASMA_STOPS: [[u8; 3]; 9] = [
    [13, 8, 135],
    [70, 3, 159],
    [114, 1, 168],
    [156, 23, 158],
    [189, 55, 134],
    [216, 87, 107],
    [237, 121, 83],
    [251, 159, 58],
    [240, 249, 33],
];

/// Plasma color for `t`, clamped to `[0, 1]`. Channels are in `[0, 1]`.
#[must_use]
pub fn plasma(t: f64) -> [f64; 3] {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (PLASMA_STOPS.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(PLASMA_STOPS.len() - 2);
    let frac = scaled - lower as f64;

    let a = PLASMA_STOPS[lower];
    let b = PLASMA_STOPS[lower + 1];
    [0_usize, 1, 2].map(|c| {
        let channel = f64::from(a[c]) + (f64::from(b[c]) - f64::from(a[c])) * frac;
        channel / 255.0
    })
}

/// Normalized color key of a `U` sample; `2π` wraps back to 0.
#[must_use]
pub fn u_color_key(u: f64) -> f64 {
    u.rem_euclid(TAU) / TAU
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorLegend {
    pub label: &'static str,
    pub colormap: &'static str,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshExport {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[u32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normals: Option<Vec<[f64; 3]>>,
}

impl From<&GeomMesh> for MeshExport {
    fn from(mesh: &GeomMesh) -> Self {
        Self {
            vertices: mesh.positions.clone(),
            faces: mesh
                .indices
                .chunks_exact(3)
                .map(|tri| [tri[0], tri[1], tri[2]])
                .collect(),
            normals: mesh.normals.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    pub title: &'static str,
    pub axis_labels: [&'static str; 3],
    pub box_aspect: [f64; 3],
    pub alpha: f64,
    pub mesh: MeshExport,
    /// One RGB triple per mesh vertex.
    pub colors: Vec<[f64; 3]>,
    pub legend: ColorLegend,
}

#[must_use]
pub fn render_payload(strip: &MobiusStrip) -> RenderPayload {
    let mut ctx = GeomContext::new();
    render_payload_with_context(strip, &mut ctx)
}

#[must_use]
pub fn render_payload_with_context(strip: &MobiusStrip, ctx: &mut GeomContext) -> RenderPayload {
    let (mesh, _diag) = mesh_strip_with_context(strip, ctx);

    ctx.metrics.time(TimingBucket::Render, || {
        let colors = strip
            .grid()
            .u_mesh()
            .iter()
            .map(|&u| plasma(u_color_key(u)))
            .collect();

        let u = strip.grid().u();
        RenderPayload {
            title: TITLE,
            axis_labels: ["X-axis", "Y-axis", "Z-axis"],
            box_aspect: BOX_ASPECT,
            alpha: SURFACE_ALPHA,
            mesh: MeshExport::from(&mesh),
            colors,
            legend: ColorLegend {
                label: LEGEND_LABEL,
                colormap: COLORMAP_NAME,
                min: u.first().copied().unwrap_or(0.0),
                max: u.last().copied().unwrap_or(TAU),
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{plasma, render_payload, u_color_key};
    use crate::geom::{MobiusStrip, StripParams};
    use std::f64::consts::{PI, TAU};

    #[test]
    fn plasma_hits_endpoint_stops() {
        let start = plasma(0.0);
        let end = plasma(1.0);
        assert!((start[0] - 13.0 / 255.0).abs() < 1e-12);
        assert!((start[2] - 135.0 / 255.0).abs() < 1e-12);
        assert!((end[1] - 249.0 / 255.0).abs() < 1e-12);
        assert_eq!(plasma(-3.0), start);
        assert_eq!(plasma(7.0), end);
    }

    #[test]
    fn color_key_wraps_full_turn() {
        assert_eq!(u_color_key(0.0), 0.0);
        assert!((u_color_key(PI) - 0.5).abs() < 1e-12);
        assert!(u_color_key(TAU).abs() < 1e-12);
    }

    #[test]
    fn payload_has_one_color_per_vertex() {
        let strip = MobiusStrip::new(StripParams::new(5.0, 2.0, 12)).unwrap();
        let payload = render_payload(&strip);

        assert_eq!(payload.colors.len(), payload.mesh.vertices.len());
        assert_eq!(payload.mesh.vertices.len(), 144);
        assert_eq!(payload.mesh.faces.len(), 2 * 11 * 11);
        assert_eq!(payload.legend.label, "U Parameter");
        assert!((payload.legend.max - TAU).abs() < 1e-12);
        // first and last columns share the wrapped color
        assert_eq!(payload.colors[0], payload.colors[11]);
    }
}
