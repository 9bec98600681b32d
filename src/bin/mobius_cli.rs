#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("mobius_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use mobius_engine::geom::{
        GeomContext, GeomMesh, GeomMeshDiagnostics, MobiusStrip, StripMeasurements, StripParams,
        TimingBucket, measure_with_metrics, mesh_strip_with_context,
    };
    use std::fmt::Write as _;
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const SNAPSHOT_QUANTIZE: f64 = 1e-6;
    const SNAPSHOT_DECIMALS: usize = 6;

    const USAGE: &str = r#"mobius_cli (mobius-engine)

USAGE:
  mobius_cli [report] [options]
  mobius_cli export --obj <path> [options]
  mobius_cli snapshot [--snap <path>] [options]

OPTIONS:
  --radius <R>        Center-line radius (default 5)
  --width <w>         Strip width (default 2)
  --resolution <n>    Samples per parameter axis, at least 2 (default 300)
  --obj <path>        OBJ output path (export)
  --snap <path>       Snapshot output path (snapshot; stdout otherwise)
  --overwrite         Overwrite existing output files
  --timing            Print phase timings to stderr (needs the `metrics` feature)
  -h, --help          Show this help
"#;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Command {
        Report,
        Export,
        Snapshot,
    }

    #[derive(Debug)]
    struct Options {
        params: StripParams,
        obj_path: Option<PathBuf>,
        snap_path: Option<PathBuf>,
        overwrite: bool,
        timing: bool,
    }

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let first = args.peek().map(str::to_owned);
        let command = match first.as_deref() {
            Some("report") => {
                args.next();
                Command::Report
            }
            Some("export") => {
                args.next();
                Command::Export
            }
            Some("snapshot") => {
                args.next();
                Command::Snapshot
            }
            Some("-h" | "--help" | "help") => {
                print_usage();
                return Ok(());
            }
            Some(other) if !other.starts_with('-') => {
                return Err(format!("unknown command `{other}`\n\n{USAGE}"));
            }
            _ => Command::Report,
        };

        let Some(options) = parse_options(&mut args)? else {
            print_usage();
            return Ok(());
        };

        match command {
            Command::Report => cmd_report(&options),
            Command::Export => cmd_export(&options),
            Command::Snapshot => cmd_snapshot(&options),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn parse_options(args: &mut Args) -> Result<Option<Options>, String> {
        let mut options = Options {
            params: StripParams::reference(),
            obj_path: None,
            snap_path: None,
            overwrite: false,
            timing: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--radius" => options.params.major_radius = args.number("--radius")?,
                "--width" => options.params.width = args.number("--width")?,
                "--resolution" => {
                    let raw = args.value("--resolution")?;
                    options.params.resolution = raw
                        .parse()
                        .map_err(|e| format!("invalid value for --resolution `{raw}`: {e}"))?;
                }
                "--obj" => options.obj_path = Some(PathBuf::from(args.value("--obj")?)),
                "--snap" => options.snap_path = Some(PathBuf::from(args.value("--snap")?)),
                "--overwrite" => options.overwrite = true,
                "--timing" => options.timing = true,
                "-h" | "--help" => return Ok(None),
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        Ok(Some(options))
    }

    struct Computed {
        strip: MobiusStrip,
        measurements: StripMeasurements,
        mesh: GeomMesh,
        mesh_diag: GeomMeshDiagnostics,
    }

    fn compute(options: &Options) -> Result<Computed, String> {
        let mut ctx = GeomContext::new();
        ctx.metrics.begin();

        let strip = ctx
            .metrics
            .time(TimingBucket::SurfaceMesh, || MobiusStrip::new(options.params))
            .map_err(|e| e.to_string())?;
        let measurements = measure_with_metrics(&strip, &mut ctx.metrics);
        let scalar_timing = ctx.metrics.end();

        let (mesh, mesh_diag) = mesh_strip_with_context(&strip, &mut ctx);

        if options.timing {
            match (scalar_timing, mesh_diag.timing.as_ref()) {
                (Some(scalars), Some(meshing)) => {
                    eprintln!("timing scalars: {}", scalars.summary());
                    eprintln!("timing mesh: {}", meshing.summary());
                }
                _ => eprintln!("timing unavailable (build with `--features metrics`)"),
            }
        }

        Ok(Computed {
            strip,
            measurements,
            mesh,
            mesh_diag,
        })
    }

    fn cmd_report(options: &Options) -> Result<(), String> {
        let computed = compute(options)?;
        println!(
            "Approximate Surface Area: {:.4}",
            computed.measurements.surface_area
        );
        println!(
            "Approximate Edge Length: {:.4}",
            computed.measurements.edge_length
        );
        eprintln!(
            "vertices={} triangles={} | {}",
            computed.mesh.vertex_count(),
            computed.mesh.triangle_count(),
            computed.mesh_diag.summary()
        );
        Ok(())
    }

    fn cmd_export(options: &Options) -> Result<(), String> {
        let path = options
            .obj_path
            .as_deref()
            .ok_or("export requires --obj <path>")?;
        let computed = compute(options)?;
        write_obj_file(path, &computed.mesh, "mobius_strip", options.overwrite)?;
        eprintln!("wrote {}", path.display());
        Ok(())
    }

    fn cmd_snapshot(options: &Options) -> Result<(), String> {
        let computed = compute(options)?;
        let text = snapshot(&computed);

        if let Some(path) = options.snap_path.as_deref() {
            write_text_file(path, &text, options.overwrite)?;
            eprintln!("wrote {}", path.display());
        } else {
            print!("{text}");
        }
        Ok(())
    }

    fn check_writable(path: &Path, overwrite: bool) -> Result<(), String> {
        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }
        Ok(())
    }

    fn write_text_file(path: &Path, text: &str, overwrite: bool) -> Result<(), String> {
        check_writable(path, overwrite)?;
        fs::write(path, normalize_snapshot_text(text)).map_err(|e| format!("write {}: {e}", path.display()))
    }

    fn write_obj_file(path: &Path, mesh: &GeomMesh, name: &str, overwrite: bool) -> Result<(), String> {
        mesh.validate().map_err(|e| format!("mesh validation failed: {e}"))?;
        check_writable(path, overwrite)?;

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "# mobius-engine mobius_cli").map_err(|e| format!("write obj: {e}"))?;
        writeln!(w, "o {name}").map_err(|e| format!("write obj: {e}"))?;

        for p in mesh.positions.iter().copied() {
            writeln!(w, "v {} {} {}", p[0], p[1], p[2]).map_err(|e| format!("write obj: {e}"))?;
        }

        if let Some(uvs) = mesh.uvs.as_ref() {
            for uv in uvs.iter().copied() {
                writeln!(w, "vt {} {}", uv[0], uv[1]).map_err(|e| format!("write obj: {e}"))?;
            }
        }

        if let Some(normals) = mesh.normals.as_ref() {
            for n in normals.iter().copied() {
                writeln!(w, "vn {} {} {}", n[0], n[1], n[2]).map_err(|e| format!("write obj: {e}"))?;
            }
        }

        let has_uvs = mesh.uvs.is_some();
        let has_normals = mesh.normals.is_some();

        for tri in mesh.indices.chunks_exact(3) {
            let a = tri[0] + 1;
            let b = tri[1] + 1;
            let c = tri[2] + 1;

            match (has_uvs, has_normals) {
                (true, true) => writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}"),
                (true, false) => writeln!(w, "f {a}/{a} {b}/{b} {c}/{c}"),
                (false, true) => writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}"),
                (false, false) => writeln!(w, "f {a} {b} {c}"),
            }
            .map_err(|e| format!("write obj: {e}"))?;
        }

        w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
    }

    fn normalize_snapshot_text(text: &str) -> String {
        let normalized = text.replace("\r\n", "\n");
        if normalized.ends_with('\n') {
            normalized
        } else {
            format!("{normalized}\n")
        }
    }

    fn quantize_f64(value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let q = (value / SNAPSHOT_QUANTIZE).round() * SNAPSHOT_QUANTIZE;
        if q == 0.0 { 0.0 } else { q }
    }

    fn write_f64_line(out: &mut String, key: &str, value: f64) {
        let value = quantize_f64(value);
        let _ = writeln!(out, "{key} {value:.SNAPSHOT_DECIMALS$}");
    }

    fn snapshot(computed: &Computed) -> String {
        let params = computed.strip.params();
        let grid = computed.strip.grid();
        let diag = &computed.mesh_diag;

        let mut out = String::new();
        let _ = writeln!(out, "# mobius-engine snapshot v1");
        let _ = writeln!(out, "quantize {SNAPSHOT_QUANTIZE:.1e}");
        write_f64_line(&mut out, "params.major_radius", params.major_radius);
        write_f64_line(&mut out, "params.width", params.width);
        let _ = writeln!(out, "params.resolution {}", params.resolution);
        write_f64_line(&mut out, "grid.du", grid.du());
        write_f64_line(&mut out, "grid.dv", grid.dv());
        write_f64_line(&mut out, "surface_area", computed.measurements.surface_area);
        write_f64_line(&mut out, "edge_length", computed.measurements.edge_length);
        let _ = writeln!(out, "mesh_diag.vertex_count {}", diag.vertex_count);
        let _ = writeln!(out, "mesh_diag.triangle_count {}", diag.triangle_count);
        let _ = writeln!(out, "mesh_diag.open_edge_count {}", diag.open_edge_count);
        let _ = writeln!(
            out,
            "mesh_diag.non_manifold_edge_count {}",
            diag.non_manifold_edge_count
        );
        let _ = writeln!(
            out,
            "mesh_diag.degenerate_triangle_count {}",
            diag.degenerate_triangle_count
        );
        write_f64_line(&mut out, "mesh_diag.seam_gap", diag.seam_gap);
        let _ = writeln!(out, "mesh_diag.warnings {}", diag.warnings.len());
        for warning in &diag.warnings {
            let _ = writeln!(out, "warning {warning}");
        }
        normalize_snapshot_text(&out)
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn peek(&self) -> Option<&str> {
            self.args.get(self.pos).map(String::as_str)
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }

        fn number(&mut self, flag: &str) -> Result<f64, String> {
            let raw = self.value(flag)?;
            raw.parse()
                .map_err(|e| format!("invalid value for {flag} `{raw}`: {e}"))
        }
    }
}
