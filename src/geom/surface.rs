use std::f64::consts::TAU;

use super::core::{Point3, Vec3};
use super::grid::ParamGrid;
use super::params::StripParams;

/// Relative step used by [`finite_difference_partials`].
const DERIVATIVE_STEP: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum StripError {
    #[error("resolution must be at least 2 samples per axis, got {resolution}")]
    DegenerateResolution { resolution: usize },
}

pub trait Surface {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    #[must_use]
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Whether `point_at(u0, v) == point_at(u1, v)` for every `v`.
    #[must_use]
    fn is_u_closed(&self) -> bool {
        false
    }

    /// Tangent vectors `(∂P/∂u, ∂P/∂v)`; central differences unless overridden.
    #[must_use]
    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        finite_difference_partials(self, u, v)
    }

    #[must_use]
    fn normal_at(&self, u: f64, v: f64) -> Option<Vec3> {
        let (du, dv) = self.partial_derivatives_at(u, v);
        du.cross(dv).normalized()
    }
}

/// Central-difference partials with a step relative to each domain span.
///
/// Evaluation is not clamped to the domain, so the mapping must be defined a
/// small step outside it.
#[must_use]
pub fn finite_difference_partials<S: Surface + ?Sized>(surface: &S, u: f64, v: f64) -> (Vec3, Vec3) {
    let (u0, u1) = surface.domain_u();
    let (v0, v1) = surface.domain_v();

    let central = |span: f64, eval: &dyn Fn(f64) -> Point3| -> Vec3 {
        let h = DERIVATIVE_STEP * span.abs().max(1.0);
        if !h.is_finite() {
            return Vec3::ZERO;
        }
        eval(h).sub_point(eval(-h)).mul_scalar(0.5 / h)
    };

    let du = central(u1 - u0, &|h: f64| surface.point_at(u + h, v));
    let dv = central(v1 - v0, &|h: f64| surface.point_at(u, v + h));
    (du, dv)
}

/// Half-twist Möbius mapping around the z axis.
///
/// ```text
/// X(u, v) = (R + v cos(u/2)) cos(u)
/// Y(u, v) = (R + v cos(u/2)) sin(u)
/// Z(u, v) = v sin(u/2)
/// ```
///
/// The seam is mirrored: `P(0, v) == P(2π, -v)`. The strip is therefore not
/// u-closed in the `Surface` sense and grids built on it are never wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    pub major_radius: f64,
    pub width: f64,
}

impl MobiusSurface {
    #[must_use]
    pub const fn new(major_radius: f64, width: f64) -> Self {
        Self {
            major_radius,
            width,
        }
    }

    /// `∂P/∂u` alone; the edge-length integrand only needs this one.
    #[must_use]
    pub fn u_derivative_at(&self, u: f64, v: f64) -> Vec3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let radial = self.major_radius + v * cos_half;

        Vec3::new(
            -radial * sin_u - v * 0.5 * sin_half * cos_u,
            radial * cos_u - v * 0.5 * sin_half * sin_u,
            0.5 * v * cos_half,
        )
    }

    /// `∂P/∂v`, the unit ruling direction. Independent of `v` and `R`.
    #[must_use]
    pub fn v_derivative_at(&self, u: f64) -> Vec3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        Vec3::new(cos_half * cos_u, cos_half * sin_u, sin_half)
    }
}

impl Surface for MobiusSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let radial = self.major_radius + v * cos_half;
        Point3::new(radial * cos_u, radial * sin_u, v * sin_half)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        let half = self.width / 2.0;
        (-half, half)
    }

    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        (self.u_derivative_at(u, v), self.v_derivative_at(u))
    }
}

/// A sampled Möbius strip: constants, parameter grid and coordinate mesh.
///
/// Immutable once built. Changing any constant means building a new strip; the
/// area and edge-length queries in [`super::analysis`] only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct MobiusStrip {
    params: StripParams,
    surface: MobiusSurface,
    grid: ParamGrid,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl MobiusStrip {
    /// Samples the strip on an `n × n` grid.
    ///
    /// # Errors
    /// [`StripError::DegenerateResolution`] when `params.resolution < 2`.
    pub fn new(params: StripParams) -> Result<Self, StripError> {
        let grid = ParamGrid::new(params.width, params.resolution)?;
        let surface = MobiusSurface::new(params.major_radius, params.width);

        log::debug!(
            "sampling möbius strip R={} w={} n={}",
            params.major_radius,
            params.width,
            params.resolution
        );

        let cells = grid.len();
        let mut x = Vec::with_capacity(cells);
        let mut y = Vec::with_capacity(cells);
        let mut z = Vec::with_capacity(cells);
        for (u, v) in grid.samples() {
            let p = surface.point_at(u, v);
            x.push(p.x);
            y.push(p.y);
            z.push(p.z);
        }

        Ok(Self {
            params,
            surface,
            grid,
            x,
            y,
            z,
        })
    }

    #[must_use]
    pub fn params(&self) -> StripParams {
        self.params
    }

    #[must_use]
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    #[must_use]
    pub fn grid(&self) -> &ParamGrid {
        &self.grid
    }

    /// Flattened `X` coordinates, same layout as [`ParamGrid::u_mesh`].
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    #[must_use]
    pub fn position(&self, row: usize, col: usize) -> Point3 {
        let i = self.grid.index(row, col);
        Point3::new(self.x[i], self.y[i], self.z[i])
    }

    /// Mesh positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| [x, y, z])
    }

    /// See [`super::analysis::surface_area`].
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        super::analysis::surface_area(self)
    }

    /// See [`super::analysis::edge_length`].
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        super::analysis::edge_length(self)
    }
}
