//! 8-bit sRGB color samples

use std::fmt;

/// A single 8-bit sRGB color, as averaged from one sampled patch.
///
/// Samples are produced once per patch and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSample {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Mean of the three channels (0.0..=255.0).
    #[inline]
    pub fn brightness(&self) -> f64 {
        self.brightness_key() as f64 / 3.0
    }

    /// Channel sum. Orders samples exactly like [`brightness`](Self::brightness)
    /// without going through floating point.
    #[inline]
    pub fn brightness_key(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use skin_tone::ColorSample;
    /// assert_eq!(ColorSample::new(210, 160, 120).to_hex(), "#d2a078");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for ColorSample {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for ColorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
