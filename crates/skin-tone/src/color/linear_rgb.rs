//! Linear RGB color type
//!
//! Linear RGB is the space in which the sRGB→XYZ matrix is defined; the
//! gamma curve must be removed before the matrix is applied.

use super::lut::srgb8_to_linear;
use super::sample::ColorSample;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power,
/// in the range 0.0..=1.0 for colors decoded from 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<ColorSample> for LinearRgb {
    /// Decode the sRGB gamma of each channel via the lookup table.
    fn from(sample: ColorSample) -> Self {
        Self {
            r: srgb8_to_linear(sample.r),
            g: srgb8_to_linear(sample.g),
            b: srgb8_to_linear(sample.b),
        }
    }
}
