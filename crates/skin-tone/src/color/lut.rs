//! Gamma lookup table access
//!
//! Inputs are always whole 8-bit channel values, so the table generated by
//! build.rs holds the exact linear value for each of the 256 codes and no
//! interpolation is needed.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel value to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}
