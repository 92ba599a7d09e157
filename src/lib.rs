//! Elementary math functions whose speed and accuracy are chosen per call.
//!
//! Every operation in this crate takes a [`Speed`] as its last argument, and picks one of
//! several implementations based on it:
//!
//! - [`Speed::Standard`] and [`Speed::Normal`] call the reference implementation (the standard
//!   library, or `libm` in no-std builds) and return exactly what it returns.
//! - [`Speed::Fast1`], [`Speed::Fast2`] and [`Speed::Fast3`] trade accuracy for speed with
//!   increasingly coarse approximations, and make no promises about NaN or infinite inputs.
//!
//! The approximations are:
//!
//! - **bit tricks** for [`log2`], [`log`], [`exp`] and [`exp2`], which read (or build) the
//!   IEEE-754 bit pattern of an `f32` as an integer, exploiting that the exponent field already
//!   is a base-2 logarithm;
//! - **interpolated lookup tables** for [`sin`], [`cos`], [`tan`], [`asin`] and [`acos`], from
//!   1024 samples of sine over one period and 1024 intervals of arcsine over `[-1, 1]`;
//! - **minimax polynomials** for [`atan`] and [`atan2`];
//! - **truncated division** in `f64` for [`fmod`].
//!
//! Each function documents the tier at which it starts approximating and its error bound. Error
//! is always the smaller of the absolute and relative error; see [`accuracy`] for the metric and
//! for sweeps that measure it.
//!
//! # Examples
//!
//! ```
//! use speedmath::Speed;
//!
//! let x = 0.7_f32;
//!
//! // the reference result
//! let exact = speedmath::sin(x, Speed::Standard);
//!
//! // a table lookup; within 6e-6 of the reference
//! let fast = speedmath::sin(x, Speed::Fast1);
//! assert!((fast - exact).abs() < 6e-6);
//!
//! // out-of-domain inverse sines are NaN at every speed
//! assert!(speedmath::asin(1.5, Speed::Fast3).is_nan());
//! ```
//!
//! If you have no particular preference, pass [`Speed::default()`], which is
//! [`speed::DEFAULT`]. That default is fixed at build time: it is [`Speed::Normal`] unless one
//! of the `default-speed-*` cargo features selects another tier.
//!
//! # Zero-cost dispatch
//!
//! All operations are `#[inline]` and match on the `Speed` they are given, so when the speed is
//! a constant the compiler keeps only the selected branch. To have the type system guarantee
//! this instead, use the [`TunedMath`] extension trait with one of the [`Tier`] marker types:
//!
//! ```
//! use speedmath::{Fast3, TunedMath};
//!
//! let y = 2.0_f32.exp_at::<Fast3>();
//! assert!((y - 7.389_056).abs() / 7.389_056 < 4e-2);
//! ```
//!
//! # Cargo features
//!
//! - `std` (default) or `libm`: which reference implementation to use. Exactly one must be
//!   enabled; with `libm` the crate is `no_std`.
//! - `serde` (default): `Serialize`/`Deserialize` for [`Speed`].
//! - `uom`: the [`angle`](crate::angle) module, trigonometry on `uom` angles.
//! - `default-speed-standard`, `default-speed-fast1`, `default-speed-fast2`,
//!   `default-speed-fast3`: change [`speed::DEFAULT`]. At most one may be enabled.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod atan;
mod exact;
mod exp_log;
mod ext;
mod float_math;
mod tables;
mod trig;

pub mod accuracy;
#[cfg(feature = "uom")]
pub mod angle;
pub mod speed;

pub use atan::{atan, atan2};
pub use exact::{abs, ceil, fabs, floor, fmod, pow, round, sqrt};
pub use exp_log::{exp, exp2, log, log2};
pub use ext::TunedMath;
pub use float_math::Float;
pub use speed::{Fast1, Fast2, Fast3, Normal, ParseSpeedError, Speed, Standard, Tier};
pub use trig::{acos, asin, cos, sin, tan};
