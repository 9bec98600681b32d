//! Opt-in timing hooks.
//!
//! Timing is only collected with the `metrics` feature on non-wasm targets
//! (`std::time::Instant` is unavailable on `wasm32`). Otherwise every call is a
//! plain pass-through and [`GeomMetrics::end`] returns `None`.
//!
//! ```ignore
//! let mut metrics = GeomMetrics::default();
//! metrics.begin();
//! let strip = metrics.time(TimingBucket::SurfaceMesh, || MobiusStrip::new(params))?;
//! if let Some(report) = metrics.end() {
//!     println!("mesh: {} ns", report.surface_mesh_ns);
//! }
//! ```

/// Phases of a strip computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingBucket {
    /// Parameter grid and coordinate mesh sampling.
    SurfaceMesh,
    /// Area quadrature.
    SurfaceArea,
    /// Boundary arc-length quadrature.
    EdgeLength,
    /// Index buffer generation.
    Triangulation,
    /// Mesh diagnostics.
    Diagnostics,
    /// Colormap and render payload assembly.
    Render,
}

/// Accumulated nanoseconds per bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeomTimingReport {
    pub surface_mesh_ns: u64,
    pub surface_area_ns: u64,
    pub edge_length_ns: u64,
    pub triangulation_ns: u64,
    pub diagnostics_ns: u64,
    pub render_ns: u64,
}

impl GeomTimingReport {
    #[must_use]
    pub fn total_ns(&self) -> u64 {
        self.surface_mesh_ns
            .saturating_add(self.surface_area_ns)
            .saturating_add(self.edge_length_ns)
            .saturating_add(self.triangulation_ns)
            .saturating_add(self.diagnostics_ns)
            .saturating_add(self.render_ns)
    }

    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.total_ns() as f64 / 1_000_000.0
    }

    /// One `name=ms` pair per non-empty bucket.
    #[must_use]
    pub fn summary(&self) -> String {
        let buckets = [
            ("mesh", self.surface_mesh_ns),
            ("area", self.surface_area_ns),
            ("edge", self.edge_length_ns),
            ("triangulation", self.triangulation_ns),
            ("diagnostics", self.diagnostics_ns),
            ("render", self.render_ns),
        ];

        let mut parts: Vec<String> = buckets
            .iter()
            .filter(|(_, ns)| *ns > 0)
            .map(|(name, ns)| format!("{name}={:.3}ms", *ns as f64 / 1_000_000.0))
            .collect();
        parts.push(format!("total={:.3}ms", self.total_ms()));
        parts.join(" ")
    }
}

/// Accumulator for [`TimingBucket`] timings.
#[derive(Debug, Default)]
pub struct GeomMetrics {
    #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
    report: GeomTimingReport,
}

impl GeomMetrics {
    /// Resets all counters.
    pub fn begin(&mut self) {
        #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
        {
            self.report = GeomTimingReport::default();
        }
    }

    #[must_use]
    pub fn end(&self) -> Option<GeomTimingReport> {
        #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
        {
            Some(self.report.clone())
        }
        #[cfg(not(all(feature = "metrics", not(target_arch = "wasm32"))))]
        {
            None
        }
    }

    /// Runs `f`, adding its wall time to `bucket`.
    pub fn time<R>(&mut self, bucket: TimingBucket, f: impl FnOnce() -> R) -> R {
        #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
        {
            let start = std::time::Instant::now();
            let result = f();
            let nanos = start.elapsed().as_nanos().min(u128::from(u64::MAX)) as u64;
            self.add_to_bucket(bucket, nanos);
            result
        }

        #[cfg(not(all(feature = "metrics", not(target_arch = "wasm32"))))]
        {
            let _ = bucket;
            f()
        }
    }

    #[cfg(all(feature = "metrics", not(target_arch = "wasm32")))]
    fn add_to_bucket(&mut self, bucket: TimingBucket, nanos: u64) {
        let slot = match bucket {
            TimingBucket::SurfaceMesh => &mut self.report.surface_mesh_ns,
            TimingBucket::SurfaceArea => &mut self.report.surface_area_ns,
            TimingBucket::EdgeLength => &mut self.report.edge_length_ns,
            TimingBucket::Triangulation => &mut self.report.triangulation_ns,
            TimingBucket::Diagnostics => &mut self.report.diagnostics_ns,
            TimingBucket::Render => &mut self.report.render_ns,
        };
        *slot = slot.saturating_add(nanos);
    }
}
