//! Arctangent by minimax polynomials.

use crate::float_math::Float;
use crate::speed::Speed;
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[allow(clippy::excessive_precision)]
const ATAN_C1: f32 = 0.077_650_957_092_356_9;
#[allow(clippy::excessive_precision)]
const ATAN_C2: f32 = 0.287_434_475_393_028;

// odd polynomial in `a = min/max`, highest degree first
#[allow(clippy::excessive_precision)]
const ATAN2_C7: f32 = -0.046_496_474_9;
#[allow(clippy::excessive_precision)]
const ATAN2_C5: f32 = 0.159_314_22;
#[allow(clippy::excessive_precision)]
const ATAN2_C3: f32 = -0.327_622_764;

/// `((c1·x² − c2)·x² + (π/4 − c1 + c2))·x`, fit on `[-1, 1]`.
///
/// Exact at 0 and ±1; absolute error below 1e-3 in between.
#[inline(always)]
fn atan_kernel(x: f32) -> f32 {
    let xx = x * x;
    ((ATAN_C1 * xx - ATAN_C2) * xx + (FRAC_PI_4 - ATAN_C1 + ATAN_C2)) * x
}

/// Arctangent of `x`, in `[-π/2, π/2]`.
///
/// - `Standard`, `Normal`, `Fast1`: reference `atan`.
/// - `Fast2`, `Fast3`: an odd cubic-in-`x²` polynomial on `[-1, 1]`, and
///   `±π/2 − atan(1/x)` outside it. Error ≤ 1e-3.
#[inline]
pub fn atan(x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal | Speed::Fast1 => Float::atan(x),
        Speed::Fast2 | Speed::Fast3 => {
            if Float::abs(x) <= 1.0 {
                atan_kernel(x)
            } else {
                let x = 1.0 / x;
                let t = atan_kernel(x);
                // +π/2 for positive x, -π/2 for negative x
                (f32::from(u8::from(x > 0.0)) - 0.5) * PI - t
            }
        }
    }
}

/// The angle of the point `(x, y)`, in `[-π, π]`.
///
/// - `Standard`, `Normal`, `Fast1`: reference `atan2`.
/// - `Fast2`, `Fast3`: a degree-7 odd polynomial in `min(|x|,|y|) / max(|x|,|y|)`, then folded
///   into the right octant. Error ≤ 2.1e-4, reached on the diagonals `|x| = |y|`.
///   `atan2(0, 0)` is NaN rather than 0.
#[inline]
pub fn atan2(y: f32, x: f32, speed: Speed) -> f32 {
    match speed {
        Speed::Standard | Speed::Normal | Speed::Fast1 => Float::atan2(y, x),
        Speed::Fast2 | Speed::Fast3 => {
            let (ax, ay) = (Float::abs(x), Float::abs(y));
            let a = f32::min(ax, ay) / f32::max(ax, ay);
            let s = a * a;
            let mut r = ((ATAN2_C7 * s + ATAN2_C5) * s + ATAN2_C3) * s * a + a;
            // each fold relies on the ones before it
            if ay > ax {
                r = FRAC_PI_2 - r;
            }
            if x < 0.0 {
                r = PI - r;
            }
            if y < 0.0 {
                r = -r;
            }
            r
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{atan, atan2};
    use crate::accuracy::{sweep_binary, sweep_unary, Grid};
    use crate::float_math::Float;
    use crate::Speed;
    use approx::assert_abs_diff_eq;
    use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use quickcheck::quickcheck;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, FRAC_PI_4)]
    #[case(-1.0, -FRAC_PI_4)]
    fn fast_atan_is_exact_at_kernel_nodes(#[case] x: f32, #[case] expected: f32) {
        for speed in [Speed::Fast2, Speed::Fast3] {
            assert_abs_diff_eq!(atan(x, speed), expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn fast_atan_within_bound() {
        let grid = Grid::new(-50.0, 50.0, 200_001);
        for speed in [Speed::Fast2, Speed::Fast3] {
            let report = sweep_unary(|x| atan(x, speed), f64::atan, grid);
            assert!(report.max_error <= 1e-3, "atan at {speed}: {report:?}");
        }
    }

    #[test]
    fn fast_atan_reflects_large_inputs() {
        assert_abs_diff_eq!(atan(1e6, Speed::Fast2), FRAC_PI_2, epsilon = 1e-5);
        assert_abs_diff_eq!(atan(-1e6, Speed::Fast2), -FRAC_PI_2, epsilon = 1e-5);
        assert!(atan(2.0, Speed::Fast2) > atan(1.0, Speed::Fast2));
        assert!(atan(-2.0, Speed::Fast2) < atan(-1.0, Speed::Fast2));
    }

    #[test]
    fn fast1_atan_is_reference() {
        for x in [-3.0_f32, -0.2, 0.0, 0.7, 42.0] {
            assert_eq!(atan(x, Speed::Fast1), Float::atan(x));
            assert_eq!(atan2(x, 1.5, Speed::Fast1), Float::atan2(x, 1.5));
        }
    }

    // the polynomial is least accurate on the diagonals, about 2.03e-4
    #[rstest]
    #[case(1.0, 1.0, FRAC_PI_4)]
    #[case(-1.0, 1.0, -FRAC_PI_4)]
    #[case(1.0, -1.0, 3.0 * FRAC_PI_4)]
    #[case(-1.0, -1.0, -3.0 * FRAC_PI_4)]
    #[case(0.0, 1.0, 0.0)]
    #[case(1.0, 0.0, FRAC_PI_2)]
    #[case(0.0, -1.0, PI)]
    #[case(-1.0, 0.0, -FRAC_PI_2)]
    #[case(2.0, 1.0, 1.107_148_7)]
    #[case(-0.5, -3.0, -2.976_443_4)]
    fn fast_atan2_quadrants(#[case] y: f32, #[case] x: f32, #[case] expected: f32) {
        for speed in [Speed::Fast2, Speed::Fast3] {
            assert_abs_diff_eq!(atan2(y, x, speed), expected, epsilon = 2.5e-4);
        }
    }

    #[test]
    fn fast_atan2_within_bound() {
        let grid = Grid::new(-5.0, 5.0, 401);
        for speed in [Speed::Fast2, Speed::Fast3] {
            let report = sweep_binary(
                |y, x| atan2(y, x, speed),
                f64::atan2,
                grid,
                grid,
                |y, x| y == 0.0 && x == 0.0,
            );
            assert!(report.max_error <= 2.1e-4, "atan2 at {speed}: {report:?}");
        }
    }

    #[test]
    fn fast_atan2_at_origin_is_nan() {
        assert!(atan2(0.0, 0.0, Speed::Fast2).is_nan());
    }

    quickcheck! {
        fn fast_atan_is_odd(x: f32) -> bool {
            if !x.is_finite() {
                return true;
            }
            atan(-x, Speed::Fast2) == -atan(x, Speed::Fast2)
        }

        fn fast_atan2_is_scale_invariant(y: f32, x: f32) -> bool {
            if !(y.is_normal() && x.is_normal()) || y.abs() > 1e6 || x.abs() > 1e6 {
                return true;
            }
            (atan2(y, x, Speed::Fast2) - atan2(4.0 * y, 4.0 * x, Speed::Fast2)).abs() < 1e-6
        }
    }
}
