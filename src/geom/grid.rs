//! Uniform `(u, v)` parameter grids.
//!
//! Layout follows the usual meshgrid convention: row `i` holds `v[i]`, column `j`
//! holds `u[j]`, and flattened arrays are row-major (`i * u_count + j`).

use std::f64::consts::TAU;

use super::StripError;

/// `count` evenly spaced samples over `[start, end]`, both endpoints included.
///
/// The last sample is pinned to `end` so the closing value is exact. A count of 1
/// yields `[start]`, 0 yields an empty vector.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Parameter grid of a strip: `u` over `[0, 2π]`, `v` over `[-w/2, w/2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGrid {
    u: Vec<f64>,
    v: Vec<f64>,
    u_mesh: Vec<f64>,
    v_mesh: Vec<f64>,
    du: f64,
    dv: f64,
}

impl ParamGrid {
    /// Builds the `n × n` grid for a strip of the given width.
    ///
    /// # Errors
    /// [`StripError::DegenerateResolution`] when `resolution < 2`; the step sizes
    /// would divide by zero.
    pub fn new(width: f64, resolution: usize) -> Result<Self, StripError> {
        if resolution < 2 {
            return Err(StripError::DegenerateResolution { resolution });
        }

        let half = width / 2.0;
        let u = linspace(0.0, TAU, resolution);
        let v = linspace(-half, half, resolution);
        let steps = (resolution - 1) as f64;

        Ok(Self::from_axes(u, v, TAU / steps, width / steps))
    }

    fn from_axes(u: Vec<f64>, v: Vec<f64>, du: f64, dv: f64) -> Self {
        let cells = u.len() * v.len();
        let mut u_mesh = Vec::with_capacity(cells);
        let mut v_mesh = Vec::with_capacity(cells);
        for &vi in &v {
            for &uj in &u {
                u_mesh.push(uj);
                v_mesh.push(vi);
            }
        }

        Self {
            u,
            v,
            u_mesh,
            v_mesh,
            du,
            dv,
        }
    }

    /// Same grid with every `v` sample negated, steps unchanged.
    #[must_use]
    pub fn mirrored_v(&self) -> Self {
        let v = self.v.iter().map(|value| -value).collect();
        Self::from_axes(self.u.clone(), v, self.du, self.dv)
    }

    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    #[must_use]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Flattened meshgrid `U` (row-major, rows follow `v`).
    #[must_use]
    pub fn u_mesh(&self) -> &[f64] {
        &self.u_mesh
    }

    /// Flattened meshgrid `V` (row-major, rows follow `v`).
    #[must_use]
    pub fn v_mesh(&self) -> &[f64] {
        &self.v_mesh
    }

    #[must_use]
    pub fn du(&self) -> f64 {
        self.du
    }

    #[must_use]
    pub fn dv(&self) -> f64 {
        self.dv
    }

    #[must_use]
    pub fn u_count(&self) -> usize {
        self.u.len()
    }

    #[must_use]
    pub fn v_count(&self) -> usize {
        self.v.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.u_mesh.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.u_mesh.is_empty()
    }

    /// Flat index of `(row, col)`.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.u.len() + col
    }

    /// `U[row][col]`, which is `u[col]`.
    #[must_use]
    pub fn u_at(&self, row: usize, col: usize) -> f64 {
        self.u_mesh[self.index(row, col)]
    }

    /// `V[row][col]`, which is `v[row]`.
    #[must_use]
    pub fn v_at(&self, row: usize, col: usize) -> f64 {
        self.v_mesh[self.index(row, col)]
    }

    /// `(u, v)` pairs in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.u_mesh.iter().copied().zip(self.v_mesh.iter().copied())
    }

    /// Meshgrid `U` as nested rows.
    #[must_use]
    pub fn u_rows(&self) -> Vec<Vec<f64>> {
        self.u_mesh.chunks(self.u.len()).map(<[f64]>::to_vec).collect()
    }

    /// Meshgrid `V` as nested rows.
    #[must_use]
    pub fn v_rows(&self) -> Vec<Vec<f64>> {
        self.v_mesh.chunks(self.u.len()).map(<[f64]>::to_vec).collect()
    }
}
