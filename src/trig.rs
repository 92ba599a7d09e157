//! Sine, cosine and tangent, and their inverses, from interpolated lookup tables.
//!
//! All fast paths reconstruct the function by linear interpolation between the samples in
//! [`tables`](crate::tables): 1024 sine samples per period, and 1024 arcsine intervals over
//! `[-1, 1]`. Cosine and tangent are phase shifts of the same sine reconstruction, and
//! arccosine is π/2 minus the arcsine reconstruction.

use crate::float_math::Float;
use crate::speed::Speed;
use crate::tables::{interpolate_asin, interpolate_sin, SAMPLES};
use core::f32::consts::FRAC_PI_2;

/// Above this magnitude the fast sine defers to the reference function.
///
/// Reducing a huge argument into one period correctly costs far more than the reference
/// `sin` itself, and the table index would no longer carry a fractional part anyway.
const MAX_TABLE_ARGUMENT: f32 = 1e9 / SAMPLES as f32;

/// Beyond this magnitude the arcsine table is too coarse for the `Fast1`/`Fast2` guarantee,
/// because the derivative of `asin` diverges at ±1.
const ASIN_TABLE_LIMIT: f32 = 0.99;

/// Sine of `x` (radians).
///
/// - `Standard`, `Normal`: reference `sin`.
/// - `Fast1`, `Fast2`, `Fast3`: table interpolation, error ≤ 6e-6 for moderate `|x|` (the
///   rounding of `x` into table units adds error as `|x|` grows). Inputs with
///   `|x| > 1e9 / 1024` use the reference `sin`.
#[inline]
pub fn sin(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::sin(x),
        Speed::Fast1 | Speed::Fast2 | Speed::Fast3 => {
            if Float::abs(x) > MAX_TABLE_ARGUMENT {
                Float::sin(x)
            } else {
                interpolate_sin(x)
            }
        }
    }
}

/// Cosine of `x` (radians).
///
/// - `Standard`, `Normal`: reference `cos`.
/// - `Fast1`, `Fast2`, `Fast3`: [`sin`]`(x + π/2)`, with the same error.
#[inline]
pub fn cos(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::cos(x),
        Speed::Fast1 | Speed::Fast2 | Speed::Fast3 => sin(x + FRAC_PI_2, speed),
    }
}

/// Tangent of `x` (radians).
///
/// - `Standard`, `Normal`: reference `tan`.
/// - `Fast1`, `Fast2`, `Fast3`: `sin(x) / sin(x + π/2)` through [`sin`]. Error ≤ 2e-5 away
///   from the poles; close to `π/2 + kπ` the error is unbounded.
#[inline]
pub fn tan(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::tan(x),
        Speed::Fast1 | Speed::Fast2 | Speed::Fast3 => sin(x, speed) / sin(x + FRAC_PI_2, speed),
    }
}

/// Arcsine of `x`, in `[-π/2, π/2]`.
///
/// - `Standard`, `Normal`: reference `asin`.
/// - `Fast1`, `Fast2`: NaN if `|x| > 1`; reference `asin` if `|x| > 0.99`; otherwise table
///   interpolation, error about 1e-4 (worst just inside ±0.99).
/// - `Fast3`: NaN if `|x| > 1`; otherwise table interpolation everywhere. Error about 1e-4
///   within `[-0.99, 0.99]` and ≤ 1.1e-2 close to ±1.
///
/// Out-of-domain and NaN inputs give NaN at every speed.
#[inline]
pub fn asin(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::asin(x),
        Speed::Fast1 | Speed::Fast2 => {
            if !(-1.0..=1.0).contains(&x) {
                f32::NAN
            } else if Float::abs(x) > ASIN_TABLE_LIMIT {
                Float::asin(x)
            } else {
                interpolate_asin(x)
            }
        }
        Speed::Fast3 => {
            if !(-1.0..=1.0).contains(&x) {
                f32::NAN
            } else {
                interpolate_asin(x)
            }
        }
    }
}

/// Arccosine of `x`, in `[0, π]`.
///
/// - `Standard`, `Normal`: reference `acos`.
/// - `Fast1`, `Fast2`: NaN if `|x| > 1`; reference `acos` if `|x| > 0.99`; otherwise
///   `π/2 - asin` from the table, absolute error ≤ 2e-4.
/// - `Fast3`: NaN if `|x| > 1`; otherwise `π/2 - asin` from the table everywhere, error
///   ≤ 1.6e-2 close to ±1.
///
/// Out-of-domain and NaN inputs give NaN at every speed.
#[inline]
pub fn acos(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::acos(x),
        Speed::Fast1 | Speed::Fast2 => {
            if !(-1.0..=1.0).contains(&x) {
                f32::NAN
            } else if Float::abs(x) > ASIN_TABLE_LIMIT {
                Float::acos(x)
            } else {
                FRAC_PI_2 - interpolate_asin(x)
            }
        }
        Speed::Fast3 => {
            if !(-1.0..=1.0).contains(&x) {
                f32::NAN
            } else {
                FRAC_PI_2 - interpolate_asin(x)
            }
        }
    }
}
