//! Patch sampling inside a face region.
//!
//! Three square patches are placed at fixed proportions of the face region
//! (both cheeks and the forehead). Each patch is downsampled to a
//! [`PATCH_GRID`]×[`PATCH_GRID`] grid and averaged into one [`ColorSample`].
//!
//! Patches that would overflow the face region, or that are smaller than
//! the sampling grid, are dropped without error. Only when no patch
//! qualifies does sampling fail with [`AnalysisError::NoSamples`].

use image::imageops::{self, FilterType};
use image::DynamicImage;

use super::face_box::Region;
use crate::api::AnalysisError;
use crate::color::ColorSample;

/// Side length of the grid every patch is downsampled to before averaging.
pub const PATCH_GRID: u32 = 10;

/// Upper bound on a patch's side length in source pixels.
pub const PATCH_MAX_SIDE: u32 = 30;

/// A sampled skin location, in sampling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchKind {
    LeftCheek,
    RightCheek,
    Forehead,
}

impl PatchKind {
    pub const ALL: [PatchKind; 3] = [
        PatchKind::LeftCheek,
        PatchKind::RightCheek,
        PatchKind::Forehead,
    ];

    /// Top-left anchor as whole percentages of the region's (width, height).
    fn anchor_percent(self) -> (u32, u32) {
        match self {
            PatchKind::LeftCheek => (10, 60),
            PatchKind::RightCheek => (75, 60),
            PatchKind::Forehead => (35, 15),
        }
    }

    /// Side length as a whole percentage of the region's width.
    fn side_percent(self) -> u32 {
        match self {
            PatchKind::LeftCheek | PatchKind::RightCheek => 15,
            PatchKind::Forehead => 20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatchKind::LeftCheek => "left_cheek",
            PatchKind::RightCheek => "right_cheek",
            PatchKind::Forehead => "forehead",
        }
    }
}

/// Square patch in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRect {
    pub kind: PatchKind,
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

/// The averaged color of one patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSample {
    pub rect: PatchRect,
    pub color: ColorSample,
}

impl PatchRect {
    /// Place a patch of the given kind inside `region`.
    ///
    /// Returns `None` when the patch would be smaller than the sampling grid
    /// or would extend past the region's right or bottom edge.
    pub fn place(kind: PatchKind, region: &Region) -> Option<Self> {
        // Widened so huge regions cannot overflow the percentage products.
        let percent = |len: u32, pct: u32| u64::from(len) * u64::from(pct) / 100;
        let (ax, ay) = kind.anchor_percent();
        let side = u64::from(PATCH_MAX_SIDE).min(percent(region.width, kind.side_percent()));
        if side < u64::from(PATCH_GRID) {
            return None;
        }

        let x = u64::from(region.x) + percent(region.width, ax);
        let y = u64::from(region.y) + percent(region.height, ay);
        let right = u64::from(region.x) + u64::from(region.width);
        let bottom = u64::from(region.y) + u64::from(region.height);
        if x + side > right || y + side > bottom {
            return None;
        }

        Some(Self {
            kind,
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
            side: u32::try_from(side).ok()?,
        })
    }
}

/// Patch rectangles that fit `region`, in the order left cheek, right cheek,
/// forehead.
pub fn patch_rects(region: &Region) -> Vec<PatchRect> {
    PatchKind::ALL
        .iter()
        .filter_map(|&kind| {
            let rect = PatchRect::place(kind, region);
            if rect.is_none() {
                tracing::debug!(patch = kind.as_str(), ?region, "Patch does not fit face region");
            }
            rect
        })
        .collect()
}

/// Average one patch: crop, downsample to the fixed grid, then take the
/// rounded channel-wise mean. Alpha, if present, is ignored.
fn sample_patch(image: &DynamicImage, rect: &PatchRect) -> ColorSample {
    let patch = image
        .crop_imm(rect.x, rect.y, rect.side, rect.side)
        .to_rgb8();
    let grid = imageops::resize(&patch, PATCH_GRID, PATCH_GRID, FilterType::Triangle);

    let mut sums = [0u32; 3];
    let mut count = 0u32;
    for pixel in grid.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += channel as u32;
        }
        count += 1;
    }

    if count == 0 {
        return ColorSample::default();
    }

    let mean = |sum: u32| ((sum + count / 2) / count) as u8;
    ColorSample::new(mean(sums[0]), mean(sums[1]), mean(sums[2]))
}

/// Sample every qualifying patch of `region`.
///
/// Fails with [`AnalysisError::NoSamples`] when no patch fits.
pub fn extract_patches(
    image: &DynamicImage,
    region: &Region,
) -> Result<Vec<PatchSample>, AnalysisError> {
    let rects = patch_rects(region);
    if rects.is_empty() {
        return Err(AnalysisError::NoSamples { region: *region });
    }

    Ok(rects
        .into_iter()
        .map(|rect| PatchSample {
            rect,
            color: sample_patch(image, &rect),
        })
        .collect())
}
