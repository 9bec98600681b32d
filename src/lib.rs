#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]

pub mod geom;
pub mod render;

use std::fmt;

use geom::{MobiusStrip, StripMeasurements, StripParams, mesh_strip};
use serde::Serialize;
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
#[wasm_bindgen]
pub async fn initialize_parallel(worker_count: Option<u32>) -> Result<(), JsError> {
    let threads = worker_count
        .map(|count| count.max(1) as usize)
        .or_else(|| {
            std::thread::available_parallelism()
                .map(|value| value.get())
                .ok()
        })
        .unwrap_or(1);

    wasm_bindgen_rayon::init_thread_pool(threads)
        .await
        .map_err(|err| JsError::new(&format!("could not start rayon thread pool: {err}")))
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

#[derive(Debug, Serialize)]
struct StripReport {
    params: StripParams,
    #[serde(flatten)]
    measurements: StripMeasurements,
    vertex_count: usize,
    triangle_count: usize,
    open_edge_count: usize,
    seam_gap: f64,
}

/// Public entry point for the web viewer.
///
/// Holds the current strip; every reconfiguration rebuilds it. Scalars are
/// cached per strip since they are pure functions of its parameters.
#[wasm_bindgen]
pub struct Engine {
    strip: MobiusStrip,
    measurements: Option<StripMeasurements>,
}

#[wasm_bindgen]
impl Engine {
    /// Engine holding a strip with the default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Engine, JsValue> {
        Self::with_params(StripParams::default()).map_err(to_js_error)
    }

    /// Rebuild the strip from radius, width and resolution.
    #[wasm_bindgen]
    pub fn configure(&mut self, major_radius: f64, width: f64, resolution: usize) -> Result<(), JsValue> {
        self.set_params(StripParams::new(major_radius, width, resolution))
            .map_err(to_js_error)
    }

    /// Rebuild the strip from a `{ R, w, n }` object; missing keys take defaults.
    #[wasm_bindgen]
    pub fn configure_from(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: StripParams = serde_wasm_bindgen::from_value(params)
            .map_err(|err| js_error(&err.to_string()))?;
        self.set_params(params).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn surface_area(&mut self) -> f64 {
        self.measurements().surface_area
    }

    #[wasm_bindgen]
    pub fn edge_length(&mut self) -> f64 {
        self.measurements().edge_length
    }

    /// Mesh, per-vertex colors and scene settings for the current strip.
    #[wasm_bindgen]
    pub fn get_geometry(&self) -> Result<JsValue, JsValue> {
        let payload = render::render_payload(&self.strip);
        debug_log!(
            "render payload: {} vertices, {} faces",
            payload.mesh.vertices.len(),
            payload.mesh.faces.len()
        );
        serde_wasm_bindgen::to_value(&payload).map_err(|err| JsError::new(&err.to_string()).into())
    }

    /// Parameters, scalars and mesh diagnostics as one object.
    #[wasm_bindgen]
    pub fn get_report(&mut self) -> Result<JsValue, JsValue> {
        let report = self.report();
        serde_wasm_bindgen::to_value(&report).map_err(|err| JsError::new(&err.to_string()).into())
    }
}

impl Engine {
    /// Native constructor with explicit parameters.
    ///
    /// # Errors
    /// Propagates [`geom::StripError`] from strip construction.
    pub fn with_params(params: StripParams) -> Result<Self, geom::StripError> {
        Ok(Self {
            strip: MobiusStrip::new(params)?,
            measurements: None,
        })
    }

    /// # Errors
    /// Propagates [`geom::StripError`]; the current strip is kept on failure.
    pub fn set_params(&mut self, params: StripParams) -> Result<(), geom::StripError> {
        self.strip = MobiusStrip::new(params)?;
        self.measurements = None;
        Ok(())
    }

    #[must_use]
    pub fn strip(&self) -> &MobiusStrip {
        &self.strip
    }

    fn measurements(&mut self) -> StripMeasurements {
        *self
            .measurements
            .get_or_insert_with(|| geom::measure(&self.strip))
    }

    fn report(&mut self) -> StripReport {
        let measurements = self.measurements();
        let (mesh, diag) = mesh_strip(&self.strip);
        StripReport {
            params: self.strip.params(),
            measurements,
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            open_edge_count: diag.open_edge_count,
            seam_gap: diag.seam_gap,
        }
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::Engine;
    use crate::geom::{StripError, StripParams};

    #[test]
    fn engine_caches_measurements_until_reconfigured() {
        let mut engine = Engine::with_params(StripParams::new(5.0, 2.0, 20)).unwrap();
        let first = engine.surface_area();
        assert_eq!(engine.surface_area(), first);

        engine.set_params(StripParams::new(5.0, 1.0, 20)).unwrap();
        assert!(engine.surface_area() < first);
    }

    #[test]
    fn failed_reconfigure_keeps_previous_strip() {
        let mut engine = Engine::with_params(StripParams::new(5.0, 2.0, 20)).unwrap();
        let err = engine.set_params(StripParams::new(5.0, 2.0, 1)).unwrap_err();
        assert_eq!(err, StripError::DegenerateResolution { resolution: 1 });
        assert_eq!(engine.strip().params().resolution, 20);
    }

    #[test]
    fn report_counts_open_grid_edges() {
        let mut engine = Engine::with_params(StripParams::new(5.0, 2.0, 8)).unwrap();
        let report = engine.report();
        assert_eq!(report.vertex_count, 64);
        assert_eq!(report.triangle_count, 2 * 7 * 7);
        assert_eq!(report.open_edge_count, 4 * 7);
        assert!(report.seam_gap < 1e-9);
    }
}
