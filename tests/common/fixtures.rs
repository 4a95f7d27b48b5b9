//! Test fixtures: generated portraits and their encodings.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Reference skin tones with known classifications
pub mod tones {
    /// Warm, light, clear: spring (0.80)
    pub const LIGHT_WARM: [u8; 3] = [245, 215, 190];
    /// Warm, medium, vivid: autumn (0.65)
    pub const MEDIUM_WARM: [u8; 3] = [210, 160, 120];
    /// Cool, light, muted: summer (0.80)
    pub const LIGHT_COOL: [u8; 3] = [220, 225, 240];
    /// Cool, deep, vivid: winter (0.80)
    pub const DEEP_COOL: [u8; 3] = [40, 50, 90];
    /// Neutral, medium: autumn (0.55)
    pub const GRAY: [u8; 3] = [128, 128, 128];
}

/// Solid-color portrait
pub fn portrait(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).expect("Failed to encode image");
    out.into_inner()
}

/// PNG bytes of a solid-color portrait
pub fn portrait_png(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    encode(&portrait(width, height, color), ImageFormat::Png)
}

/// Base64 of a solid-color PNG portrait
pub fn portrait_base64(width: u32, height: u32, color: [u8; 3]) -> String {
    STANDARD.encode(portrait_png(width, height, color))
}

/// `data:` URI of a solid-color PNG portrait
pub fn portrait_data_uri(width: u32, height: u32, color: [u8; 3]) -> String {
    format!(
        "data:image/png;base64,{}",
        portrait_base64(width, height, color)
    )
}
