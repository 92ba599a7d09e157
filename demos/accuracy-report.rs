use argh::FromArgs;
use log::{debug, info, warn, LevelFilter};
use speedmath::accuracy::{sweep_binary, sweep_unary, ErrorReport, Grid};
use speedmath::Speed;

/// Measure the worst-case error of every operation at each speed.
#[derive(FromArgs)]
struct Opts {
    /// samples per sweep (per axis for atan2)
    #[argh(option, default = "100_001")]
    samples: usize,

    /// only report this speed
    #[argh(option)]
    speed: Option<Speed>,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Info")]
    log_level: LevelFilter,
}

type Unary = fn(f32, Speed) -> f32;

fn unary_operations(samples: usize) -> Vec<(&'static str, Unary, fn(f64) -> f64, Grid)> {
    vec![
        ("sin", speedmath::sin, f64::sin, Grid::new(-10., 10., samples)),
        ("cos", speedmath::cos, f64::cos, Grid::new(-10., 10., samples)),
        // stay clear of the poles at ±π/2
        ("tan", speedmath::tan, f64::tan, Grid::new(-1.4, 1.4, samples)),
        ("asin", speedmath::asin, f64::asin, Grid::new(-1., 1., samples)),
        ("acos", speedmath::acos, f64::acos, Grid::new(-1., 1., samples)),
        ("atan", speedmath::atan, f64::atan, Grid::new(-50., 50., samples)),
        ("exp", speedmath::exp, f64::exp, Grid::new(-10., 10., samples)),
        ("exp2", speedmath::exp2, f64::exp2, Grid::new(-10., 10., samples)),
        ("log", speedmath::log, f64::ln, Grid::new(1e-3, 1e4, samples)),
        ("log2", speedmath::log2, f64::log2, Grid::new(1e-3, 1e4, samples)),
    ]
}

fn print_row<I: std::fmt::Debug>(name: &str, speed: Speed, report: &ErrorReport<I>) {
    let bound = speed
        .error_bound()
        .map_or_else(|| "-".to_owned(), |b| format!("{b:.0e}"));
    let worst = report
        .worst_input
        .as_ref()
        .map_or_else(String::new, |input| format!("{input:?}"));
    println!(
        "{name:<6} {speed:<9} {:>11.3e} {bound:>7}   {worst}",
        report.max_error
    );
    if let Some(b) = speed.error_bound() {
        if report.max_error > b {
            warn!("{name} at {speed} exceeds its nominal bound of {b:e}");
        }
    }
}

fn main() {
    let opts: Opts = argh::from_env();
    // RUST_LOG, when set, refines `--log`
    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .parse_default_env()
        .init();

    let speeds: Vec<Speed> = match opts.speed {
        Some(speed) => vec![speed],
        None => Speed::ALL.to_vec(),
    };
    info!("sweeping {} samples at {speeds:?}", opts.samples);

    println!("{:<6} {:<9} {:>11} {:>7}   worst input", "op", "speed", "max error", "bound");
    for (name, op, reference, grid) in unary_operations(opts.samples) {
        debug!("{name} over [{}, {}]", grid.start, grid.end);
        for &speed in &speeds {
            let report = sweep_unary(|x| op(x, speed), reference, grid);
            print_row(name, speed, &report);
        }
    }

    // a square grid has far more points, so keep each axis coarser
    let axis = Grid::new(-5., 5., (opts.samples as f64).sqrt() as usize | 1);
    debug!("atan2 over {0} x {0} points", axis.samples);
    for &speed in &speeds {
        let report = sweep_binary(
            |y, x| speedmath::atan2(y, x, speed),
            f64::atan2,
            axis,
            axis,
            |y, x| y == 0. && x == 0.,
        );
        print_row("atan2", speed, &report);
    }
}
