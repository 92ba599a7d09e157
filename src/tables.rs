//! Precomputed sine and arcsine samples and the interpolation over them.
//!
//! Both tables are generated by the build script and compiled in as `static` arrays, so there
//! is no initialization at runtime. Each holds [`SAMPLES`] samples plus two guard entries, which
//! let the interpolation read `table[i + 1]` without a bounds special case at the last sample.

use core::f32::consts::TAU;

/// Samples per table, excluding the guard samples.
pub(crate) const SAMPLES: usize = 1024;

// Defines `SIN_TABLE` and `ASIN_TABLE`:
//
// - `SIN_TABLE[i] = sin(i * 2π / 1024)` for `i` in `0..1024`; `[1024]` and `[1025]` repeat
//   samples 0 and 1.
// - `ASIN_TABLE[i] = asin(-1 + i * 2 / 1024)` for `i` in `0..=1024`; `[1025]` repeats π/2.
include!(concat!(env!("OUT_DIR"), "/tables.rs"));

/// Table-index units per radian for [`SIN_TABLE`].
const SIN_SCALE: f32 = SAMPLES as f32 / TAU;

/// Table-index units per unit of input for [`ASIN_TABLE`].
const ASIN_SCALE: f32 = (SAMPLES / 2) as f32;

/// Returns the stored sine sample at `index`, wrapping modulo one period.
#[cfg(test)]
pub(crate) fn sin_sample(index: i32) -> f32 {
    SIN_TABLE[(index & (SAMPLES as i32 - 1)) as usize]
}

/// Returns the stored arcsine sample at `index`, which must be in `0..=1024`.
#[cfg(test)]
pub(crate) fn asin_sample(index: usize) -> f32 {
    ASIN_TABLE[index]
}

/// Linear interpolation between two neighbouring samples; `t` is in `[0, 1)`.
#[inline(always)]
fn lerp(lo: f32, hi: f32, t: f32) -> f32 {
    (1.0 - t) * lo + t * hi
}

/// Piecewise-linear sine reconstructed from [`SIN_TABLE`].
///
/// The caller is responsible for keeping `|x|` small enough that `x * 1024 / 2π` fits in an
/// `i32` without losing the fractional part; [`trig::sin`](crate::sin) falls back to the
/// reference function above `1e9 / 1024`.
#[inline]
pub(crate) fn interpolate_sin(x: f32) -> f32 {
    let x = x * SIN_SCALE;
    let mut id = x as i32;
    // `as` truncates toward zero; we want floor
    if x < 0.0 {
        id -= 1;
    }
    let t = x - id as f32;
    // two's complement: masking is a non-negative modulo 1024
    let id = (id & (SAMPLES as i32 - 1)) as usize;
    lerp(SIN_TABLE[id], SIN_TABLE[id + 1], t)
}

/// Piecewise-linear arcsine reconstructed from [`ASIN_TABLE`].
///
/// `x` must be in `[-1, 1]`; the domain check belongs to the caller.
#[inline]
pub(crate) fn interpolate_asin(x: f32) -> f32 {
    debug_assert!((-1.0..=1.0).contains(&x), "asin table queried outside [-1, 1]: {x}");
    let x = (x + 1.0) * ASIN_SCALE;
    let id = x as usize;
    let t = x - id as f32;
    lerp(ASIN_TABLE[id], ASIN_TABLE[id + 1], t)
}
