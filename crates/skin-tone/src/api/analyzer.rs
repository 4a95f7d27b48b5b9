//! SkinToneAnalyzer -- the entry point that runs the full pipeline.
//!
//! ```text
//! image bytes ──decode──> DynamicImage
//!     │
//!     ├─ resolve face box   (caller box, else heuristic; clamp to image)
//!     ├─ extract patches    (cheeks + forehead, 10x10 grid mean each)
//!     ├─ aggregate          (brightness median)
//!     ├─ classify           (undertone, depth, clarity from L*a*b*)
//!     └─ infer              (season decision table)
//! ```
//!
//! Every transition is one-way and nothing is retried. The analyzer holds
//! no mutable state, so one instance can serve concurrent calls.

use std::fmt;
use std::io::Cursor;

use image::{DynamicImage, ImageReader, Limits};

use super::error::AnalysisError;
use crate::aggregate::select_representative;
use crate::output::Analysis;
use crate::region::{extract_patches, resolve_face_box, FaceBox};

/// States of the analysis pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    AcquireImage,
    ResolveFaceBox,
    ExtractPatches,
    Aggregate,
    Classify,
    Infer,
    Done,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::AcquireImage => "acquire_image",
            Stage::ResolveFaceBox => "resolve_face_box",
            Stage::ExtractPatches => "extract_patches",
            Stage::Aggregate => "aggregate",
            Stage::Classify => "classify",
            Stage::Infer => "infer",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the skin-tone analysis pipeline.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgb, RgbImage};
/// use skin_tone::{FaceBox, Season, SkinToneAnalyzer};
///
/// let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(400, 400, Rgb([245, 215, 190])));
/// let analysis = SkinToneAnalyzer::new()
///     .analyze_image(&photo, Some(FaceBox::new(100, 80, 200, 240)))
///     .unwrap();
///
/// assert_eq!(analysis.season().label, Season::Spring);
/// assert_eq!(analysis.samples().len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkinToneAnalyzer {
    max_dimension: Option<u32>,
}

impl SkinToneAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject images wider or taller than `pixels` at decode time.
    #[inline]
    pub fn max_dimension(mut self, pixels: u32) -> Self {
        self.max_dimension = Some(pixels);
        self
    }

    /// Decode `bytes` and analyze the result.
    ///
    /// Empty input is [`AnalysisError::MissingInput`]; undecodable input is
    /// [`AnalysisError::ImageDecodeFailed`].
    pub fn analyze_bytes(
        &self,
        bytes: &[u8],
        face_box: Option<FaceBox>,
    ) -> Result<Analysis, AnalysisError> {
        let image = self.decode(bytes).inspect_err(|err| {
            tracing::warn!(
                stage = %err.stage(),
                %err,
                byte_len = bytes.len(),
                "Image acquisition failed"
            );
        })?;
        tracing::debug!(
            stage = %Stage::AcquireImage,
            width = image.width(),
            height = image.height(),
            "Image decoded"
        );

        self.analyze_image(&image, face_box)
    }

    /// Analyze an already decoded image.
    pub fn analyze_image(
        &self,
        image: &DynamicImage,
        face_box: Option<FaceBox>,
    ) -> Result<Analysis, AnalysisError> {
        let (width, height) = (image.width(), image.height());

        let region = resolve_face_box(face_box, width, height).inspect_err(|err| {
            tracing::warn!(
                stage = %err.stage(),
                %err,
                face_box = ?face_box,
                image_width = width,
                image_height = height,
                "Face box rejected"
            );
        })?;
        tracing::debug!(
            stage = %Stage::ResolveFaceBox,
            ?region,
            heuristic = face_box.map_or(true, |fb| !fb.is_valid()),
            "Face region resolved"
        );

        let samples = extract_patches(image, &region).inspect_err(|err| {
            tracing::warn!(
                stage = %err.stage(),
                %err,
                face_box = ?face_box,
                ?region,
                sample_count = 0,
                "No usable skin patches"
            );
        })?;
        tracing::debug!(
            stage = %Stage::ExtractPatches,
            sample_count = samples.len(),
            samples = ?samples.iter().map(|s| s.color.to_hex()).collect::<Vec<_>>(),
            "Patches sampled"
        );

        let colors: Vec<_> = samples.iter().map(|s| s.color).collect();
        let color = select_representative(&colors).ok_or(AnalysisError::NoSamples { region })?;
        tracing::debug!(stage = %Stage::Aggregate, color = %color, "Representative color selected");

        let analysis = Analysis::from_color(color).with_sampling(region, samples);
        tracing::debug!(
            stage = %Stage::Classify,
            lab = ?analysis.lab(),
            undertone = %analysis.undertone(),
            depth = %analysis.depth(),
            clarity = %analysis.clarity(),
            "Attributes classified"
        );
        tracing::debug!(stage = %Stage::Infer, season = %analysis.season(), "Season inferred");
        tracing::debug!(
            stage = %Stage::Done,
            confidence = analysis.confidence(),
            sample_count = analysis.samples().len(),
            "Analysis complete"
        );

        Ok(analysis)
    }

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, AnalysisError> {
        if bytes.is_empty() {
            return Err(AnalysisError::MissingInput);
        }

        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AnalysisError::ImageDecodeFailed(e.to_string()))?;

        let mut limits = Limits::default();
        limits.max_image_width = self.max_dimension;
        limits.max_image_height = self.max_dimension;
        reader.limits(limits);

        Ok(reader.decode()?)
    }
}
