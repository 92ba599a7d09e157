use crate::speed::Tier;

/// Method-call access to every operation with the speed chosen at the type level.
///
/// Each method is generic over a [`Tier`], so the speed dispatch is resolved during
/// monomorphization:
///
/// ```
/// use speedmath::{Fast2, Speed, Standard, TunedMath};
///
/// let angle = 0.5_f32;
/// let rough = angle.sin_at::<Fast2>();
/// let exact = angle.sin_at::<Standard>();
/// assert!((rough - exact).abs() < 1e-5);
/// assert_eq!(exact, speedmath::sin(angle, Speed::Standard));
/// ```
pub trait TunedMath: Sized {
    fn sin_at<S: Tier>(self) -> Self;
    fn cos_at<S: Tier>(self) -> Self;
    fn tan_at<S: Tier>(self) -> Self;
    fn asin_at<S: Tier>(self) -> Self;
    fn acos_at<S: Tier>(self) -> Self;
    fn atan_at<S: Tier>(self) -> Self;
    /// Four-quadrant arctangent of `self` (y) and `x`.
    fn atan2_at<S: Tier>(self, x: Self) -> Self;
    fn exp_at<S: Tier>(self) -> Self;
    fn exp2_at<S: Tier>(self) -> Self;
    fn ln_at<S: Tier>(self) -> Self;
    fn log2_at<S: Tier>(self) -> Self;
    fn fmod_at<S: Tier>(self, y: Self) -> Self;
}

impl TunedMath for f32 {
    #[inline]
    fn sin_at<S: Tier>(self) -> Self {
        crate::sin(self, S::SPEED)
    }

    #[inline]
    fn cos_at<S: Tier>(self) -> Self {
        crate::cos(self, S::SPEED)
    }

    #[inline]
    fn tan_at<S: Tier>(self) -> Self {
        crate::tan(self, S::SPEED)
    }

    #[inline]
    fn asin_at<S: Tier>(self) -> Self {
        crate::asin(self, S::SPEED)
    }

    #[inline]
    fn acos_at<S: Tier>(self) -> Self {
        crate::acos(self, S::SPEED)
    }

    #[inline]
    fn atan_at<S: Tier>(self) -> Self {
        crate::atan(self, S::SPEED)
    }

    #[inline]
    fn atan2_at<S: Tier>(self, x: Self) -> Self {
        crate::atan2(self, x, S::SPEED)
    }

    #[inline]
    fn exp_at<S: Tier>(self) -> Self {
        crate::exp(self, S::SPEED)
    }

    #[inline]
    fn exp2_at<S: Tier>(self) -> Self {
        crate::exp2(self, S::SPEED)
    }

    #[inline]
    fn ln_at<S: Tier>(self) -> Self {
        crate::log(self, S::SPEED)
    }

    #[inline]
    fn log2_at<S: Tier>(self) -> Self {
        crate::log2(self, S::SPEED)
    }

    #[inline]
    fn fmod_at<S: Tier>(self, y: Self) -> Self {
        crate::fmod(self, y, S::SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::TunedMath;
    use crate::speed::{Fast1, Fast2, Fast3, Normal, Standard, Tier};
    use crate::Speed;
    use quickcheck::quickcheck;

    fn agrees_with_free_functions<S: Tier>(x: f32, y: f32) -> bool {
        let same = |a: f32, b: f32| a == b || (a.is_nan() && b.is_nan());
        let speed = S::SPEED;
        same(x.sin_at::<S>(), crate::sin(x, speed))
            && same(x.cos_at::<S>(), crate::cos(x, speed))
            && same(x.tan_at::<S>(), crate::tan(x, speed))
            && same(y.asin_at::<S>(), crate::asin(y, speed))
            && same(y.acos_at::<S>(), crate::acos(y, speed))
            && same(x.atan_at::<S>(), crate::atan(x, speed))
            && same(y.atan2_at::<S>(x), crate::atan2(y, x, speed))
            && same(y.exp_at::<S>(), crate::exp(y, speed))
            && same(y.exp2_at::<S>(), crate::exp2(y, speed))
            && same(x.abs().ln_at::<S>(), crate::log(x.abs(), speed))
            && same(x.abs().log2_at::<S>(), crate::log2(x.abs(), speed))
            && same(x.fmod_at::<S>(1.5), crate::fmod(x, 1.5, speed))
    }

    quickcheck! {
        fn methods_match_free_functions(x: f32, y: f32) -> bool {
            if !(x.is_finite() && y.is_finite()) || x.abs() > 1e4 || x == 0.0 {
                return true;
            }
            let y = y.clamp(-1.0, 1.0);
            agrees_with_free_functions::<Standard>(x, y)
                && agrees_with_free_functions::<Normal>(x, y)
                && agrees_with_free_functions::<Fast1>(x, y)
                && agrees_with_free_functions::<Fast2>(x, y)
                && agrees_with_free_functions::<Fast3>(x, y)
        }
    }

    #[test]
    fn tier_selects_code_path() {
        let x = 0.3_f32;
        assert_eq!(x.exp_at::<Fast1>(), crate::exp(x, Speed::Standard));
        assert_ne!(x.exp_at::<Fast3>(), crate::exp(x, Speed::Standard));
    }
}
