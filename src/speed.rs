use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The speed/accuracy trade-off used by an operation.
///
/// Every operation in this crate takes a `Speed` as its last argument. Tiers are ordered: a
/// higher tier is never slower and never more accurate than a lower one. Accuracy is given as
/// the worst case, over all inputs, of `min(absolute error, relative error)` (see
/// [`accuracy::error`](crate::accuracy::error)).
///
/// | tier       | guarantee                                              |
/// |------------|--------------------------------------------------------|
/// | `Standard` | calls the reference implementation (std or libm)       |
/// | `Normal`   | last-place `f32` accuracy; identical to `Standard` here |
/// | `Fast1`    | error ≤ 1e-4, no special handling of NaN or infinity   |
/// | `Fast2`    | error ≤ 2e-3, no special handling of NaN or infinity   |
/// | `Fast3`    | error ≤ 4e-2, no special handling of NaN or infinity   |
///
/// Individual operations document their own bounds where these differ (`asin` and `acos` run
/// slightly over at `Fast1`), and the tier at which they start approximating (many stay on
/// the reference path for `Fast1`).
///
/// Dispatch is a plain `match` inside `#[inline]` functions, so passing a constant `Speed` lets
/// the compiler drop the unused branches entirely. To force that through the type system, use
/// the [`Tier`] marker types with [`TunedMath`](crate::TunedMath).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Speed {
    Standard = 0,
    Normal = 1,
    Fast1 = 2,
    Fast2 = 3,
    Fast3 = 4,
}

/// The speed used when a caller has no particular preference.
///
/// This is `Speed::Normal` unless one of the `default-speed-*` cargo features picks another
/// tier at build time.
pub const DEFAULT: Speed = default_speed();

const fn default_speed() -> Speed {
    if cfg!(feature = "default-speed-standard") {
        Speed::Standard
    } else if cfg!(feature = "default-speed-fast1") {
        Speed::Fast1
    } else if cfg!(feature = "default-speed-fast2") {
        Speed::Fast2
    } else if cfg!(feature = "default-speed-fast3") {
        Speed::Fast3
    } else {
        Speed::Normal
    }
}

impl Speed {
    /// All tiers, slowest first.
    pub const ALL: [Speed; 5] = [
        Speed::Standard,
        Speed::Normal,
        Speed::Fast1,
        Speed::Fast2,
        Speed::Fast3,
    ];

    /// The position of this tier in [`Speed::ALL`].
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The tier at position `ordinal` in [`Speed::ALL`], or `None` past `Fast3`.
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Speed::Standard),
            1 => Some(Speed::Normal),
            2 => Some(Speed::Fast1),
            3 => Some(Speed::Fast2),
            4 => Some(Speed::Fast3),
            _ => None,
        }
    }

    /// True for the approximating tiers, which make no promises about NaN or infinity.
    pub const fn is_fast(self) -> bool {
        matches!(self, Speed::Fast1 | Speed::Fast2 | Speed::Fast3)
    }

    /// The tier's documented worst-case error, or `None` for the tiers that are exact with
    /// respect to the reference implementation.
    pub const fn error_bound(self) -> Option<f64> {
        match self {
            Speed::Standard | Speed::Normal => None,
            Speed::Fast1 => Some(1e-4),
            Speed::Fast2 => Some(2e-3),
            Speed::Fast3 => Some(4e-2),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Speed::Standard => "standard",
            Speed::Normal => "normal",
            Speed::Fast1 => "fast1",
            Speed::Fast2 => "fast2",
            Speed::Fast3 => "fast3",
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        DEFAULT
    }
}

impl Display for Speed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a string does not name a [`Speed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseSpeedError;

impl Display for ParseSpeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("expected one of: standard, std, normal, fast1, fast2, fast3")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseSpeedError {}

impl FromStr for Speed {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Speed::ALL
            .into_iter()
            .find(|speed| s.eq_ignore_ascii_case(speed.name()))
            .or_else(|| s.eq_ignore_ascii_case("std").then_some(Speed::Standard))
            .ok_or(ParseSpeedError)
    }
}

/// A [`Speed`] lifted to the type level.
///
/// Code generic over `T: Tier` is monomorphized once per tier, so the dispatch on
/// [`Tier::SPEED`] is resolved at compile time regardless of inlining decisions.
pub trait Tier: private::Sealed {
    const SPEED: Speed;
}

mod private {
    pub trait Sealed {}
}

macro_rules! tier {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl private::Sealed for $name {}

        impl Tier for $name {
            const SPEED: Speed = Speed::$name;
        }
    };
}

tier!(
    /// Type-level [`Speed::Standard`].
    Standard
);
tier!(
    /// Type-level [`Speed::Normal`].
    Normal
);
tier!(
    /// Type-level [`Speed::Fast1`].
    Fast1
);
tier!(
    /// Type-level [`Speed::Fast2`].
    Fast2
);
tier!(
    /// Type-level [`Speed::Fast3`].
    Fast3
);

#[cfg(test)]
mod tests {
    use super::{Fast1, Fast2, Fast3, Normal, ParseSpeedError, Speed, Standard, Tier};
    use quickcheck::quickcheck;
    use rstest::rstest;

    #[test]
    fn tiers_are_ordered_slowest_first() {
        for pair in Speed::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn default_is_normal_without_features() {
        #[cfg(not(any(
            feature = "default-speed-standard",
            feature = "default-speed-fast1",
            feature = "default-speed-fast2",
            feature = "default-speed-fast3"
        )))]
        assert_eq!(Speed::default(), Speed::Normal);
        assert_eq!(Speed::default(), super::DEFAULT);
    }

    #[test]
    fn error_bounds_grow_with_tier() {
        assert_eq!(Speed::Standard.error_bound(), None);
        assert_eq!(Speed::Normal.error_bound(), None);
        let bounds: Vec<f64> = Speed::ALL.iter().filter_map(|s| s.error_bound()).collect();
        assert_eq!(bounds.len(), 3);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_fast_tiers_are_fast() {
        assert!(!Speed::Standard.is_fast());
        assert!(!Speed::Normal.is_fast());
        assert!(Speed::Fast1.is_fast());
        assert!(Speed::Fast2.is_fast());
        assert!(Speed::Fast3.is_fast());
    }

    #[test]
    fn display() {
        let names: Vec<String> = Speed::ALL.iter().map(|s| s.to_string()).collect();
        insta::assert_snapshot!(names.join(" < "), @"standard < normal < fast1 < fast2 < fast3");
    }

    #[rstest]
    #[case("standard", Ok(Speed::Standard))]
    #[case("std", Ok(Speed::Standard))]
    #[case("Normal", Ok(Speed::Normal))]
    #[case(" fast1 ", Ok(Speed::Fast1))]
    #[case("FAST2", Ok(Speed::Fast2))]
    #[case("fast3", Ok(Speed::Fast3))]
    #[case("fast4", Err(ParseSpeedError))]
    #[case("", Err(ParseSpeedError))]
    fn parse(#[case] input: &str, #[case] expected: Result<Speed, ParseSpeedError>) {
        assert_eq!(input.parse::<Speed>(), expected);
    }

    #[test]
    fn tier_markers_match_values() {
        assert_eq!(Standard::SPEED, Speed::Standard);
        assert_eq!(Normal::SPEED, Speed::Normal);
        assert_eq!(Fast1::SPEED, Speed::Fast1);
        assert_eq!(Fast2::SPEED, Speed::Fast2);
        assert_eq!(Fast3::SPEED, Speed::Fast3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&Speed::Fast2).unwrap();
        assert_eq!(yaml.trim(), "fast2");
        let back: Speed = serde_yaml::from_str("standard").unwrap();
        assert_eq!(back, Speed::Standard);
        assert!(serde_yaml::from_str::<Speed>("fastest").is_err());
    }

    quickcheck! {
        fn ordinal_roundtrip(ordinal: u8) -> bool {
            match Speed::from_ordinal(ordinal) {
                Some(speed) => speed.ordinal() == ordinal,
                None => ordinal >= 5,
            }
        }

        fn display_parses_back(ordinal: u8) -> bool {
            let speed = Speed::ALL[usize::from(ordinal % 5)];
            speed.to_string().parse::<Speed>() == Ok(speed)
        }
    }
}
