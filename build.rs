use std::env;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Number of samples per table, not counting the two guard samples.
const SAMPLES: usize = 1024;

fn main() {
    let std_enabled = env::var("CARGO_FEATURE_STD").is_ok();
    let libm_enabled = env::var("CARGO_FEATURE_LIBM").is_ok();

    if std_enabled == libm_enabled {
        panic!(
            "Features \"std\" and \"libm\" are mutually exclusive. Enable exactly one.
The crate defaults to \"std\"; for no-std use `--no-default-features --features libm`."
        );
    }

    let default_speeds = [
        "CARGO_FEATURE_DEFAULT_SPEED_STANDARD",
        "CARGO_FEATURE_DEFAULT_SPEED_FAST1",
        "CARGO_FEATURE_DEFAULT_SPEED_FAST2",
        "CARGO_FEATURE_DEFAULT_SPEED_FAST3",
    ]
    .iter()
    .filter(|var| env::var(var).is_ok())
    .count();
    if default_speeds > 1 {
        panic!(
            "At most one of the \"default-speed-*\" features may be enabled; \
             with none enabled the default speed is `Speed::Normal`."
        );
    }

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let path = Path::new(&out_dir).join("tables.rs");
    fs::write(&path, generate_tables()).expect("OUT_DIR is writable");

    println!("cargo:rerun-if-changed=build.rs");
}

fn generate_tables() -> String {
    // sin over one period; the guards wrap around to samples 0 and 1
    let mut sin: Vec<f32> = (0..SAMPLES)
        .map(|i| (i as f64 * (TAU / SAMPLES as f64)).sin() as f32)
        .collect();
    sin.push(sin[0]);
    sin.push(sin[1]);

    // asin over [-1, 1] inclusive; the single guard saturates at π/2
    let mut asin: Vec<f32> = (0..=SAMPLES)
        .map(|i| {
            let x = (-1.0 + i as f64 * (2.0 / SAMPLES as f64)).clamp(-1.0, 1.0);
            x.asin() as f32
        })
        .collect();
    asin.push(FRAC_PI_2 as f32);

    let mut out = String::new();
    emit(&mut out, "SIN_TABLE", &sin);
    emit(&mut out, "ASIN_TABLE", &asin);
    out
}

fn emit(out: &mut String, name: &str, values: &[f32]) {
    // `{:?}` prints the shortest literal that round-trips to the same f32
    let _ = writeln!(out, "static {name}: [f32; {}] = [", values.len());
    for chunk in values.chunks(8) {
        out.push_str("   ");
        for v in chunk {
            let _ = write!(out, " {v:?}f32,");
        }
        out.push('\n');
    }
    out.push_str("];\n");
}
