//! Strongly typed language, script and region subtags.
//!
//! Every subtag is stored in canonical case (`en`, `Hant`, `GB`) inside a
//! [`TinyAsciiStr`], so values are `Copy` and compare in a single integer
//! comparison on the hot path.

use std::fmt;
use tinystr::{TinyAsciiStr, tinystr};

/// Parses `$raw` into `$ty` when `$valid` holds for the canonicalised value.
macro_rules! subtag_parser {
    ($ty:ident, $n:literal, |$s:ident| $valid:expr, $canon:ident) => {
        impl $ty {
            /// Parse a subtag in any case, returning `None` when it is not
            /// well-formed.
            pub fn parse(raw: &str) -> Option<Self> {
                let $s = TinyAsciiStr::<$n>::try_from_str(raw).ok()?.$canon();
                if $valid { Some(Self($s)) } else { None }
            }

            #[inline(always)]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($ty), self.as_str())
            }
        }
    };
}

/// Primary language subtag: 2-3 or 5-8 ASCII letters, lowercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(TinyAsciiStr<8>);

/// Script subtag: 4 ASCII letters, titlecase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Script(TinyAsciiStr<4>);

/// Region subtag: 2 ASCII letters (uppercase) or a 3 digit UN M.49 code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region(TinyAsciiStr<3>);

/// Variant subtag: 5-8 alphanumerics, or 4 starting with a digit; lowercase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variant(TinyAsciiStr<8>);

subtag_parser!(Language, 8, |s| s.is_ascii_alphabetic() && matches!(s.len(), 2 | 3 | 5..=8), to_ascii_lowercase);
subtag_parser!(Script, 4, |s| s.len() == 4 && s.is_ascii_alphabetic(), to_ascii_titlecase);
subtag_parser!(
    Region,
    3,
    |s| (s.len() == 2 && s.is_ascii_alphabetic()) || (s.len() == 3 && s.is_ascii_numeric()),
    to_ascii_uppercase
);
subtag_parser!(
    Variant,
    8,
    |s| s.is_ascii_alphanumeric()
        && (matches!(s.len(), 5..=8) || (s.len() == 4 && s.as_str().as_bytes()[0].is_ascii_digit())),
    to_ascii_lowercase
);

impl Language {
    /// `und`, the undetermined language.
    pub const UNKNOWN: Self = Self(tinystr!(8, "und"));

    #[inline(always)]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl Script {
    /// `Zzzz`, the code for an uncoded script.
    pub const UNKNOWN: Self = Self(tinystr!(4, "Zzzz"));

    #[inline(always)]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl Region {
    /// `ZZ`, the unknown region.
    pub const UNKNOWN: Self = Self(tinystr!(3, "ZZ"));
    /// `001`, the world.
    pub const WORLD: Self = Self(tinystr!(3, "001"));

    #[inline(always)]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    /// UN M.49 numeric codes name macro regions (continents, sub-continents).
    #[inline(always)]
    pub fn is_macro_region(&self) -> bool {
        self.0.is_ascii_numeric()
    }
}
