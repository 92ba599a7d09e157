//! Trigonometry on [`uom`] angles.
//!
//! These wrap the free functions so that angles carry their unit: the forward functions accept
//! an [`Angle`] in any unit, and the inverse functions return one.
//!
//! ```
//! use speedmath::{angle, Speed};
//! use uom::si::angle::degree;
//! use uom::si::f32::Angle;
//!
//! let s = angle::sin(Angle::new::<degree>(30.), Speed::Fast1);
//! assert!((s - 0.5).abs() < 1e-5);
//!
//! let a = angle::atan2(1., -1., Speed::Fast2);
//! assert!((a.get::<degree>() - 135.).abs() < 0.02);
//! ```

use crate::speed::Speed;
use uom::si::angle::radian;
use uom::si::f32::Angle;

/// [`sin`](crate::sin) of an angle.
#[inline]
pub fn sin(angle: Angle, speed: Speed) -> f32 {
    crate::sin(angle.get::<radian>(), speed)
}

/// [`cos`](crate::cos) of an angle.
#[inline]
pub fn cos(angle: Angle, speed: Speed) -> f32 {
    crate::cos(angle.get::<radian>(), speed)
}

/// [`tan`](crate::tan) of an angle.
#[inline]
pub fn tan(angle: Angle, speed: Speed) -> f32 {
    crate::tan(angle.get::<radian>(), speed)
}

/// [`asin`](crate::asin) as an angle; NaN radians when `|x| > 1`.
#[inline]
pub fn asin(x: f32, speed: Speed) -> Angle {
    Angle::new::<radian>(crate::asin(x, speed))
}

/// [`acos`](crate::acos) as an angle; NaN radians when `|x| > 1`.
#[inline]
pub fn acos(x: f32, speed: Speed) -> Angle {
    Angle::new::<radian>(crate::acos(x, speed))
}

/// [`atan`](crate::atan) as an angle.
#[inline]
pub fn atan(x: f32, speed: Speed) -> Angle {
    Angle::new::<radian>(crate::atan(x, speed))
}

/// [`atan2`](crate::atan2) as an angle.
#[inline]
pub fn atan2(y: f32, x: f32, speed: Speed) -> Angle {
    Angle::new::<radian>(crate::atan2(y, x, speed))
}
