//! Attribute classifiers
//!
//! Each classifier reads the representative [`Lab`](crate::Lab) color and
//! applies a fixed rule:
//!
//! | Attribute | Input | Labels |
//! |-----------|-------|--------|
//! | [`Undertone`] | a*, b*, chroma | warm / cool / neutral |
//! | [`Depth`] | L* | light / medium / deep |
//! | [`Clarity`] | chroma | muted / clear / vivid |
//!
//! Undertone and depth come with a confidence in `0.0..=1.0`; clarity is a
//! plain label that only feeds season inference.

/// Implements `as_str`, `Display`, and `FromStr` for a lowercase label enum.
macro_rules! label_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::classify::ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err($crate::classify::ParseLabelError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

mod clarity;
mod depth;
mod undertone;

use std::fmt;

pub use clarity::{classify_clarity, Clarity};
pub use depth::{classify_depth, Depth};
pub use undertone::{classify_undertone, Undertone};

/// A label together with the classifier's confidence in it.
///
/// Generic over the label type so that an undertone assessment can never be
/// passed where a depth assessment is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment<L> {
    pub label: L,
    /// Confidence in `0.0..=1.0`.
    pub confidence: f64,
}

impl<L> Assessment<L> {
    #[inline]
    pub fn new(label: L, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

impl<L: fmt::Display> fmt::Display for Assessment<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.label, self.confidence)
    }
}

/// Error returned when parsing an unknown label string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} label: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ParseLabelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_strings() {
        for &u in Undertone::ALL {
            assert_eq!(u.as_str().parse::<Undertone>().unwrap(), u);
        }
        for &d in Depth::ALL {
            assert_eq!(d.to_string().parse::<Depth>().unwrap(), d);
        }
        for &c in Clarity::ALL {
            assert_eq!(c.as_str().parse::<Clarity>().unwrap(), c);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Warm ".parse::<Undertone>().unwrap(), Undertone::Warm);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "olive".parse::<Undertone>().unwrap_err();
        assert_eq!(err.to_string(), "unknown undertone label: \"olive\"");
    }

    #[test]
    fn test_assessment_display() {
        let a = Assessment::new(Depth::Light, 0.8487);
        assert_eq!(a.to_string(), "light (0.85)");
    }
}
