//! Color types and conversion utilities
//!
//! Skin color is sampled as 8-bit sRGB and classified in CIE L*a*b*:
//!
//! - [`ColorSample`]: an 8-bit sRGB triple, one per sampled patch
//! - [`LinearRgb`]: linear light intensity, the input to the XYZ matrix
//! - [`Lab`]: CIE L*a*b* under D65, the space all classifiers read
//!
//! # Example
//!
//! ```
//! use skin_tone::{ColorSample, Lab};
//!
//! let sample = ColorSample::new(210, 160, 120);
//! let lab = Lab::from(sample);
//! assert!(lab.b > 0.0); // yellowish
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod sample;

pub use lab::{rgb_to_lab, Lab};
pub use linear_rgb::LinearRgb;
pub use sample::ColorSample;
