
//! skin-tone: Seasonal color analysis from a face photograph
//!
//! This library samples skin from fixed positions inside a face region,
//! picks one representative color, and classifies it into undertone,
//! depth, and clarity, from which a seasonal palette (spring, summer,
//! autumn, winter) is inferred.
//!
//! # Quick Start
//!
//! The [`SkinToneAnalyzer`] is the primary entry point:
//!
//! ```
//! use image::{DynamicImage, Rgb, RgbImage};
//! use skin_tone::{Season, SkinToneAnalyzer, Undertone};
//!
//! let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(600, 800, Rgb([40, 50, 90])));
//! let analysis = SkinToneAnalyzer::new().analyze_image(&photo, None).unwrap();
//!
//! assert_eq!(analysis.undertone().label, Undertone::Cool);
//! assert_eq!(analysis.season().label, Season::Winter);
//! ```
//!
//! # Classifying a Known Color
//!
//! When the skin color is already known, skip the image pipeline:
//!
//! ```
//! use skin_tone::{Analysis, ColorSample, Depth, Season};
//!
//! let analysis = Analysis::from_color(ColorSample::new(245, 215, 190));
//! assert_eq!(analysis.depth().label, Depth::Light);
//! assert_eq!(analysis.season().label, Season::Spring);
//! assert_eq!(analysis.hex(), "#f5d7be");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! image ──> face region ──> 3 patches ──> median ──> L*a*b* ──> labels ──> season
//!           (box or          (cheeks,      (by          (D65)      (rules)     (table)
//!            heuristic)       forehead)     brightness)
//! ```
//!
//! # Color Science
//!
//! ## Why CIE L\*a\*b\*
//!
//! The classifiers reason about three perceptual quantities: how light the
//! skin is, whether it leans yellow or blue, and how saturated it is.
//! CIE L\*a\*b\* exposes all three directly:
//!
//! | Quantity | Lab expression | Used by |
//! |----------|----------------|---------|
//! | Lightness | L\* (0..100) | [`classify_depth`] |
//! | Yellow/blue lean | b\* sign and magnitude | [`classify_undertone`] |
//! | Red/green lean | a\* | [`classify_undertone`] |
//! | Saturation | chroma = sqrt(a\*^2 + b\*^2) | [`classify_undertone`], [`classify_clarity`] |
//!
//! Thresholds such as "b\* above 5 with positive a\* is warm" only make
//! sense in a space where those numbers mean the same thing across the
//! gamut, which rules out doing the comparison on raw sRGB bytes.
//!
//! ## Conversion Path
//!
//! ```text
//! sRGB u8 ──LUT──> linear RGB ──matrix──> XYZ (D65) ──/white──> f(t) ──> L*a*b*
//! ```
//!
//! - Gamma decoding uses the IEC 61966-2-1 piecewise curve, precomputed
//!   for all 256 channel values at build time.
//! - The XYZ matrix is the standard sRGB/D65 one.
//! - XYZ is normalized by the D65 reference white (0.95047, 1.0, 1.08883).
//! - `f(t)` is the cube root above 0.008856 and the linear segment
//!   `7.787 t + 16/116` below it.
//!
//! Neutral grays land within 1e-3 of a\* = b\* = 0, so they always
//! classify as a neutral undertone.
//!
//! ## Why the Median, Not the Mean
//!
//! A patch that catches a shadow, a highlight, or a strand of hair is an
//! outlier. Averaging three patches lets one outlier drag the result;
//! taking the middle patch by brightness discards it. Each patch is
//! already smoothed by averaging a 10x10 downsample, so within-patch
//! noise is handled before aggregation.

pub mod aggregate;
pub mod api;
#[macro_use]
pub mod classify;
pub mod color;
pub mod output;
pub mod region;
pub mod season;


pub use aggregate::select_representative;
pub use api::{AnalysisError, SkinToneAnalyzer, Stage};
pub use classify::{
    classify_clarity, classify_depth, classify_undertone, Assessment, Clarity, Depth,
    ParseLabelError, Undertone,
};
pub use color::{rgb_to_lab, ColorSample, Lab, LinearRgb};
pub use output::Analysis;
pub use region::{
    extract_patches, resolve_face_box, FaceBox, PatchKind, PatchRect, PatchSample, Region,
};
pub use season::{infer_season, Season};
