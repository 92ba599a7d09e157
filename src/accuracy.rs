//! Measuring how far an approximation is from the truth.
//!
//! The error bounds documented throughout this crate are all stated in terms of [`error`]:
//! the smaller of the absolute and the relative error. That keeps the bound meaningful both
//! near zeros of the function (where relative error explodes) and for large outputs (where
//! absolute error does).
//!
//! [`sweep_unary`] and [`sweep_binary`] evaluate an `f32` operation over a uniform [`Grid`] and
//! compare it against an `f64` reference, which is what the crate's own tests use to check the
//! documented bounds:
//!
//! ```
//! use speedmath::accuracy::{sweep_unary, Grid};
//! use speedmath::Speed;
//!
//! let report = sweep_unary(|x| speedmath::sin(x, Speed::Fast1), f64::sin, Grid::new(-10.0, 10.0, 10_000));
//! assert!(report.max_error <= 1e-5);
//! ```

use crate::float_math::Float;

/// `min(|approx - exact|, |approx - exact| / |exact|)`.
///
/// Matching NaNs count as no error; a NaN on only one side counts as infinite error.
pub fn error(approx: f64, exact: f64) -> f64 {
    match (approx.is_nan(), exact.is_nan()) {
        (true, true) => return 0.0,
        (true, false) | (false, true) => return f64::INFINITY,
        (false, false) => {}
    }
    if approx == exact {
        // also covers matching infinities
        return 0.0;
    }
    let absolute = Float::abs(approx - exact);
    if exact == 0.0 {
        absolute
    } else {
        f64::min(absolute, absolute / Float::abs(exact))
    }
}

/// `samples` evenly spaced points from `start` to `end`, both included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub start: f32,
    pub end: f32,
    pub samples: usize,
}

impl Grid {
    pub fn new(start: f32, end: f32, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    /// The grid points, rounded to `f32`.
    pub fn points(self) -> impl Iterator<Item = f32> {
        let start = f64::from(self.start);
        let span = f64::from(self.end) - start;
        let last = self.samples.saturating_sub(1).max(1) as f64;
        (0..self.samples).map(move |i| (start + span * (i as f64 / last)) as f32)
    }
}

/// The outcome of a sweep: the worst error seen and where it happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorReport<I> {
    /// Largest [`error`] over the sweep; `0.0` if the sweep was empty.
    pub max_error: f64,
    /// The input that produced `max_error`, or `None` if the sweep was empty.
    pub worst_input: Option<I>,
    /// How many inputs were evaluated.
    pub samples: usize,
}

impl<I> ErrorReport<I> {
    fn empty() -> Self {
        Self {
            max_error: 0.0,
            worst_input: None,
            samples: 0,
        }
    }

    fn record(&mut self, input: I, error: f64) {
        self.samples += 1;
        // the first input is always recorded, even when every error is zero
        if error > self.max_error || (self.worst_input.is_none() && error >= self.max_error) {
            self.max_error = error;
            self.worst_input = Some(input);
        }
    }
}

/// Compares `approx` against `exact` at every point of `grid`.
///
/// The reference is evaluated at the exact `f32` input that the approximation saw, widened to
/// `f64`, so the rounding of the grid itself does not show up as error.
pub fn sweep_unary(
    approx: impl Fn(f32) -> f32,
    exact: impl Fn(f64) -> f64,
    grid: Grid,
) -> ErrorReport<f32> {
    let mut report = ErrorReport::empty();
    for x in grid.points() {
        let e = error(f64::from(approx(x)), exact(f64::from(x)));
        report.record(x, e);
    }
    report
}

/// Like [`sweep_unary`] over the cartesian product of two grids.
///
/// Each input is `(a, b)` in argument order, with `a` drawn from `first` and `b` from `second`.
/// Points for which `skip` returns true are not evaluated (for example the origin for
/// `atan2`).
pub fn sweep_binary(
    approx: impl Fn(f32, f32) -> f32,
    exact: impl Fn(f64, f64) -> f64,
    first: Grid,
    second: Grid,
    skip: impl Fn(f32, f32) -> bool,
) -> ErrorReport<(f32, f32)> {
    let mut report = ErrorReport::empty();
    for a in first.points() {
        for b in second.points() {
            if skip(a, b) {
                continue;
            }
            let e = error(f64::from(approx(a, b)), exact(f64::from(a), f64::from(b)));
            report.record((a, b), e);
        }
    }
    report
}
