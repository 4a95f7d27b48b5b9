//! Error type for the analysis pipeline.
//!
//! [`AnalysisError`] distinguishes caller mistakes (no image, an unusable
//! face box) from failures to read the image itself, so that outer layers
//! can choose how to report each.

use std::fmt;

use super::analyzer::Stage;
use crate::region::{FaceBox, Region};

/// Failure of a single analysis call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// No image data was supplied.
    MissingInput,
    /// The image bytes could not be decoded.
    ImageDecodeFailed(String),
    /// The face box (after fallback) has no usable area inside the image.
    InvalidRegion {
        /// The box that was rejected (caller-supplied or heuristic)
        face_box: FaceBox,
        image_width: u32,
        image_height: u32,
    },
    /// Every candidate patch overflowed the face region.
    NoSamples {
        /// The region that was sampled
        region: Region,
    },
}

impl AnalysisError {
    /// Pipeline stage at which the error was raised.
    pub fn stage(&self) -> Stage {
        match self {
            AnalysisError::MissingInput | AnalysisError::ImageDecodeFailed(_) => {
                Stage::AcquireImage
            }
            AnalysisError::InvalidRegion { .. } => Stage::ResolveFaceBox,
            AnalysisError::NoSamples { .. } => Stage::ExtractPatches,
        }
    }

    /// `true` if the caller can fix the request (missing image, bad face box).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AnalysisError::ImageDecodeFailed(_))
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingInput => write!(f, "no image data supplied"),
            AnalysisError::ImageDecodeFailed(reason) => {
                write!(f, "failed to decode image: {}", reason)
            }
            AnalysisError::InvalidRegion {
                face_box,
                image_width,
                image_height,
            } => write!(
                f,
                "face box {{x: {}, y: {}, width: {}, height: {}}} has no usable area in a {}x{} image",
                face_box.x, face_box.y, face_box.width, face_box.height, image_width, image_height
            ),
            AnalysisError::NoSamples { region } => write!(
                f,
                "no skin patch fits inside the {}x{} face region",
                region.width, region.height
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<image::ImageError> for AnalysisError {
    fn from(err: image::ImageError) -> Self {
        AnalysisError::ImageDecodeFailed(err.to_string())
    }
}
