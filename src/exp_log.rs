//! Exponentials and logarithms.
//!
//! The fast paths read an `f32`'s IEEE-754 bit pattern as an integer (or build one from an
//! integer). The biased exponent field of a binary32 is already a base-2 logarithm, so scaling
//! the raw bits by 2⁻²³ gives a piecewise-linear `log2`, and the inverse construction gives a
//! piecewise-linear `exp2`. The constants below correct the error of that linearization and are
//! fixed: the error bounds in the docs are measured against exactly these values.

use crate::float_math::Float;
use crate::speed::Speed;
use core::f32::consts::LN_2;

/// Masks the 23 mantissa bits of a binary32.
const MANTISSA_MASK: u32 = 0x007F_FFFF;
/// Exponent bits of 0.5, putting the masked mantissa in `[0.5, 1)`.
const HALF_EXPONENT: u32 = 0x3F00_0000;
/// 2⁻²³: one unit of the mantissa field, in exponent units.
const MANTISSA_ULP: f32 = 1.192_092_895_507_812_5e-7;

// log2 rational correction
#[allow(clippy::excessive_precision)]
const LOG2_BIAS: f32 = 124.225_446_37;
#[allow(clippy::excessive_precision)]
const LOG2_LINEAR: f32 = 1.498_030_302;
#[allow(clippy::excessive_precision)]
const LOG2_RATIONAL_NUM: f32 = 1.725_879_99;
#[allow(clippy::excessive_precision)]
const LOG2_RATIONAL_DEN: f32 = 0.352_088_706_8;

/// Number of squarings in the scaling-squaring exponential; the step is `x / 2^12`.
const EXP_SQUARINGS: u32 = 12;
#[allow(clippy::excessive_precision)]
const EXP_QUADRATIC_CORRECTION: f32 = 0.000_127_115_2;

/// 1/ln 2, in `f64` so the Fast3 bit construction is done at double precision.
#[allow(clippy::excessive_precision)]
const EXP_BITS_SCALE: f64 = 1.442_695_040_9;
#[allow(clippy::excessive_precision)]
const EXP_BITS_OFFSET: f32 = 126.942_015_19;

/// Base-2 logarithm.
///
/// - `Standard`, `Normal`: reference `log2`.
/// - `Fast1`, `Fast2`, `Fast3`: bit-pattern approximation, error ≤ 8e-5 (worst just below 1,
///   around 0.9). Only defined for `x > 0`: zero, negative, NaN and infinite inputs give an
///   unspecified finite or non-finite value.
#[inline]
pub fn log2(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::log2(x),
        Speed::Fast1 | Speed::Fast2 | Speed::Fast3 => fast_log2(x),
    }
}

#[inline(always)]
fn fast_log2(x: f32) -> f32 {
    let bits = x.to_bits();
    let mantissa = f32::from_bits((bits & MANTISSA_MASK) | HALF_EXPONENT);
    let linear = bits as f32 * MANTISSA_ULP;
    linear
        - LOG2_BIAS
        - LOG2_LINEAR * mantissa
        - LOG2_RATIONAL_NUM / (LOG2_RATIONAL_DEN + mantissa)
}

/// Natural logarithm.
///
/// - `Standard`, `Normal`: reference `ln`.
/// - `Fast1`, `Fast2`, `Fast3`: `log2(x) · ln 2` using the fast [`log2`], error ≤ 1e-4. Only
///   defined for `x > 0`.
#[inline]
pub fn log(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal => Float::ln(x),
        Speed::Fast1 | Speed::Fast2 | Speed::Fast3 => log2(x, speed) * LN_2,
    }
}

/// `e^x`.
///
/// - `Standard`, `Normal`, `Fast1`: reference `exp`.
/// - `Fast2`: `(1 + x/4096)^4096` by twelve squarings, with a quadratic correction for the
///   truncated expansion. Error ≤ 2e-3 for `|x| ≤ 30`.
/// - `Fast3`: builds the result's bit pattern directly from `x`. Error ≤ 4e-2. Inputs below
///   about -87 give `0.0`.
#[inline]
pub fn exp(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal | Speed::Fast1 => Float::exp(x),
        Speed::Fast2 => {
            let mut t = 1.0 + x / (1u32 << EXP_SQUARINGS) as f32;
            for _ in 0..EXP_SQUARINGS {
                t *= t;
            }
            t * (1.0 + EXP_QUADRATIC_CORRECTION * x * x)
        }
        Speed::Fast3 => {
            // `as u32` saturates, so very negative inputs end up as +0.0
            let bits = f64::from(1u32 << 23)
                * (EXP_BITS_SCALE * f64::from(x) + f64::from(EXP_BITS_OFFSET));
            f32::from_bits(bits as u32)
        }
    }
}

/// `2^x`.
///
/// - `Standard`, `Normal`, `Fast1`: reference `exp2`.
/// - `Fast2`, `Fast3`: [`exp`]`(x · ln 2)` at the same speed, inheriting its error.
#[inline]
pub fn exp2(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal | Speed::Fast1 => Float::exp2(x),
        Speed::Fast2 | Speed::Fast3 => exp(x * LN_2, speed),
    }
}

#[cfg(test)]
mod tests {
    use super::{exp, exp2, log, log2};
    use crate::accuracy::{sweep_unary, Grid};
    use crate::float_math::Float;
    use crate::Speed;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use quickcheck::quickcheck;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 0.0)]
    #[case(2.0, 1.0)]
    #[case(8.0, 3.0)]
    #[case(0.25, -2.0)]
    #[case(1024.0, 10.0)]
    #[case(3.0, 1.584_962_5)]
    fn fast_log2_known_values(#[case] x: f32, #[case] expected: f32) {
        for speed in [Speed::Fast1, Speed::Fast2, Speed::Fast3] {
            assert_abs_diff_eq!(log2(x, speed), expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn fast_log_is_scaled_log2() {
        for x in [0.1_f32, 1.0, 2.718_281_8, 10.0, 12345.0] {
            assert_eq!(
                log(x, Speed::Fast2),
                log2(x, Speed::Fast2) * core::f32::consts::LN_2
            );
        }
        assert_abs_diff_eq!(log(core::f32::consts::E, Speed::Fast1), 1.0, epsilon = 1e-4);
    }

    #[test]
    fn fast_logs_are_within_bound() {
        let grid = Grid::new(1e-3, 1e4, 100_000);
        for speed in [Speed::Fast1, Speed::Fast2, Speed::Fast3] {
            let report = sweep_unary(|x| log2(x, speed), f64::log2, grid);
            assert!(report.max_error <= 8e-5, "log2 at {speed}: {report:?}");
            let report = sweep_unary(|x| log(x, speed), f64::ln, grid);
            assert!(report.max_error <= 1e-4, "log at {speed}: {report:?}");
        }
    }

    #[test]
    fn exp_at_zero() {
        assert_abs_diff_eq!(exp(0.0, Speed::Fast2), 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(exp(0.0, Speed::Fast3), 1.0, epsilon = 4e-2);
    }

    #[test]
    fn exp_fast3_at_one() {
        assert_relative_eq!(
            exp(1.0, Speed::Fast3),
            core::f32::consts::E,
            max_relative = 4e-2
        );
    }

    #[test]
    fn fast_exps_are_within_tier_bounds() {
        let grid = Grid::new(-10.0, 10.0, 100_000);
        for speed in [Speed::Fast2, Speed::Fast3] {
            let bound = speed.error_bound().unwrap();
            let report = sweep_unary(|x| exp(x, speed), f64::exp, grid);
            assert!(report.max_error <= bound, "exp at {speed}: {report:?}");
            let report = sweep_unary(|x| exp2(x, speed), f64::exp2, grid);
            assert!(report.max_error <= bound, "exp2 at {speed}: {report:?}");
        }
    }

    #[test]
    fn fast1_exp_is_reference() {
        for x in [-20.0_f32, -1.5, 0.0, 0.3, 7.0, 80.0] {
            assert_eq!(exp(x, Speed::Fast1), Float::exp(x));
            assert_eq!(exp2(x, Speed::Fast1), Float::exp2(x));
        }
    }

    #[test]
    fn exp_fast3_underflows_to_zero() {
        assert_eq!(exp(-200.0, Speed::Fast3), 0.0);
    }

    quickcheck! {
        fn fast_exp2_is_exp_of_scaled_input(x: f32) -> bool {
            if !x.is_finite() || x.abs() > 60.0 {
                return true;
            }
            exp2(x, Speed::Fast2) == exp(x * core::f32::consts::LN_2, Speed::Fast2)
                && exp2(x, Speed::Fast3) == exp(x * core::f32::consts::LN_2, Speed::Fast3)
        }

        fn fast_log2_is_monotonic(a: f32, b: f32) -> bool {
            if !(a.is_normal() && b.is_normal()) || a <= 0.0 || b <= 0.0 {
                return true;
            }
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // the integer-to-float conversion of the bits quantizes in steps of ~1.5e-5
            log2(lo, Speed::Fast1) <= log2(hi, Speed::Fast1) + 5e-5
        }
    }
}
