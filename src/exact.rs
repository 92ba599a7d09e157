//! Operations without a worthwhile approximation, plus the truncation-based `fmod`.
//!
//! The pass-throughs take a [`Speed`] for uniformity with the rest of the crate but always call
//! the reference implementation: no approximation that was tried beat std/libm for them.

use crate::float_math::Float;
use crate::speed::Speed;

/// Floating point remainder of `x / y`, with the sign of `x`.
///
/// - `Standard`, `Normal`: reference `fmod`.
/// - `Fast1`, `Fast2`, `Fast3`: `x − trunc(x / y)·y` evaluated in `f64`. Exact for almost all
///   inputs; when `x / y` lands extremely close to an integer the result can be off by exactly
///   one multiple of `y`. NaN, infinite and zero-divisor inputs give whatever the arithmetic
///   produces.
#[inline]
pub fn fmod<T: Float>(x: T, y: T, speed: Speed) -> T {
    match speed {
        Speed::Standard | Speed::Normal => x.fmod(y),
        Speed::Fast1 | Speed::Fast2 | Speed::Fast3 => {
            let (x, y) = (x.to_f64(), y.to_f64());
            T::from_f64(x - Float::trunc(x / y) * y)
        }
    }
}

/// Absolute value. Identical at every speed.
#[inline]
pub fn abs<T: Float>(x: T, _speed: Speed) -> T {
    x.abs()
}

/// Absolute value; an alias of [`abs`] kept for C-style call sites.
#[inline]
pub fn fabs<T: Float>(x: T, speed: Speed) -> T {
    abs(x, speed)
}

/// Smallest integer `≥ x`. Identical at every speed.
#[inline]
pub fn ceil<T: Float>(x: T, _speed: Speed) -> T {
    x.ceil()
}

/// Largest integer `≤ x`. Identical at every speed.
#[inline]
pub fn floor<T: Float>(x: T, _speed: Speed) -> T {
    x.floor()
}

/// Nearest integer, rounding half-way cases away from zero. Identical at every speed.
#[inline]
pub fn round<T: Float>(x: T, _speed: Speed) -> T {
    x.round()
}

/// Square root. Identical at every speed.
#[inline]
pub fn sqrt<T: Float>(x: T, _speed: Speed) -> T {
    x.sqrt()
}

/// `x` raised to the power `y`. Identical at every speed.
#[inline]
pub fn pow<T: Float>(x: T, y: T, _speed: Speed) -> T {
    x.powf(y)
}
