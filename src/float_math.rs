//! Reference math that works in both std and no-std environments.
//!
//! Every "reference" code path in this crate goes through [`Float`], which forwards either to
//! the standard library (when the `std` feature is enabled) or to `libm`. The `Standard` and
//! `Normal` speeds are defined as exactly what this module returns.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!(
    "speedmath requires a floating-point math backend. \
     Enable either the `std` feature (default) or the `libm` feature for no-std environments."
);

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// The floating point types this crate operates on (`f32` and `f64`).
///
/// The methods are the reference implementations: they forward to std or `libm` unchanged.
/// This trait is sealed.
pub trait Float: private::Sealed + Copy + PartialOrd {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn sqrt(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn abs(self) -> Self;
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    /// Remainder of `self / other` with the sign of `self`, like C's `fmod`.
    fn fmod(self, other: Self) -> Self;

    /// Widens (or keeps) the value as `f64`.
    fn to_f64(self) -> f64;
    /// Narrows (or keeps) an `f64` as `Self`, rounding to nearest.
    fn from_f64(value: f64) -> Self;
}

#[cfg(feature = "std")]
macro_rules! impl_float_std {
    ($t:ty) => {
        impl Float for $t {
            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                <$t>::tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                <$t>::asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                <$t>::atan(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                <$t>::atan2(self, other)
            }

            #[inline]
            fn exp(self) -> Self {
                <$t>::exp(self)
            }

            #[inline]
            fn exp2(self) -> Self {
                <$t>::exp2(self)
            }

            #[inline]
            fn ln(self) -> Self {
                <$t>::ln(self)
            }

            #[inline]
            fn log2(self) -> Self {
                <$t>::log2(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn powf(self, n: Self) -> Self {
                <$t>::powf(self, n)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn round(self) -> Self {
                <$t>::round(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                <$t>::trunc(self)
            }

            #[inline]
            fn fmod(self, other: Self) -> Self {
                // `%` on floats is C's fmod
                self % other
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

#[cfg(feature = "std")]
impl_float_std!(f32);
#[cfg(feature = "std")]
impl_float_std!(f64);

#[cfg(all(not(feature = "std"), feature = "libm"))]
macro_rules! impl_float_libm {
    (
        $t:ty,
        $sin:ident,
        $cos:ident,
        $tan:ident,
        $asin:ident,
        $acos:ident,
        $atan:ident,
        $atan2:ident,
        $exp:ident,
        $exp2:ident,
        $ln:ident,
        $log2:ident,
        $sqrt:ident,
        $pow:ident,
        $abs:ident,
        $ceil:ident,
        $floor:ident,
        $round:ident,
        $trunc:ident,
        $fmod:ident
    ) => {
        impl Float for $t {
            #[inline]
            fn sin(self) -> Self {
                libm::$sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                libm::$cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                libm::$tan(self)
            }

            #[inline]
            fn asin(self) -> Self {
                libm::$asin(self)
            }

            #[inline]
            fn acos(self) -> Self {
                libm::$acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                libm::$atan(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                libm::$atan2(self, other)
            }

            #[inline]
            fn exp(self) -> Self {
                libm::$exp(self)
            }

            #[inline]
            fn exp2(self) -> Self {
                libm::$exp2(self)
            }

            #[inline]
            fn ln(self) -> Self {
                libm::$ln(self)
            }

            #[inline]
            fn log2(self) -> Self {
                libm::$log2(self)
            }

            #[inline]
            fn sqrt(self) -> Self {
                libm::$sqrt(self)
            }

            #[inline]
            fn powf(self, n: Self) -> Self {
                libm::$pow(self, n)
            }

            #[inline]
            fn abs(self) -> Self {
                libm::$abs(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                libm::$ceil(self)
            }

            #[inline]
            fn floor(self) -> Self {
                libm::$floor(self)
            }

            #[inline]
            fn round(self) -> Self {
                libm::$round(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                libm::$trunc(self)
            }

            #[inline]
            fn fmod(self, other: Self) -> Self {
                libm::$fmod(self, other)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl_float_libm!(
    f32, sinf, cosf, tanf, asinf, acosf, atanf, atan2f, expf, exp2f, logf, log2f, sqrtf, powf,
    fabsf, ceilf, floorf, roundf, truncf, fmodf
);
#[cfg(all(not(feature = "std"), feature = "libm"))]
impl_float_libm!(
    f64, sin, cos, tan, asin, acos, atan, atan2, exp, exp2, log, log2, sqrt, pow, fabs, ceil,
    floor, round, trunc, fmod
);
