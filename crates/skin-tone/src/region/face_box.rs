//! Face box resolution.

use crate::api::AnalysisError;

/// Heuristic face width as a fraction of image width.
const HEURISTIC_WIDTH: f64 = 0.45;
/// Heuristic face height as a fraction of image height.
const HEURISTIC_HEIGHT: f64 = 0.50;
/// Heuristic top offset as a fraction of image height.
const HEURISTIC_TOP: f64 = 0.15;

/// Face rectangle as supplied by a caller, in image pixel coordinates.
///
/// Fields are signed so that invalid input is representable; any negative
/// field makes the box invalid and triggers the heuristic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl FaceBox {
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `true` if no field is negative.
    pub fn is_valid(&self) -> bool {
        self.x >= 0 && self.y >= 0 && self.width >= 0 && self.height >= 0
    }

    /// Fixed-proportion face box for portraits with no detected face.
    ///
    /// Centered horizontally, 45% of the image wide and 50% tall, starting
    /// 15% down from the top.
    ///
    /// ```
    /// use skin_tone::FaceBox;
    /// assert_eq!(FaceBox::heuristic(1000, 1000), FaceBox::new(275, 150, 450, 500));
    /// ```
    pub fn heuristic(image_width: u32, image_height: u32) -> Self {
        let width = (image_width as f64 * HEURISTIC_WIDTH).round() as i64;
        let height = (image_height as f64 * HEURISTIC_HEIGHT).round() as i64;
        let x = (image_width as i64 - width) / 2;
        let y = (image_height as f64 * HEURISTIC_TOP).round() as i64;

        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A validated face region: in bounds, with positive area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Resolve the face box used for sampling.
///
/// An absent or invalid box is replaced by [`FaceBox::heuristic`]. The box is
/// then clamped to the image; a zero-area result (or a zero-sized image) is
/// an [`AnalysisError::InvalidRegion`].
pub fn resolve_face_box(
    supplied: Option<FaceBox>,
    image_width: u32,
    image_height: u32,
) -> Result<Region, AnalysisError> {
    let face_box = match supplied {
        Some(fb) if fb.is_valid() => fb,
        Some(fb) => {
            tracing::debug!(?fb, "Supplied face box is invalid, using heuristic");
            FaceBox::heuristic(image_width, image_height)
        }
        None => FaceBox::heuristic(image_width, image_height),
    };

    let invalid = || AnalysisError::InvalidRegion {
        face_box,
        image_width,
        image_height,
    };

    if image_width == 0 || image_height == 0 {
        return Err(invalid());
    }

    let (img_w, img_h) = (image_width as i64, image_height as i64);
    if face_box.x >= img_w || face_box.y >= img_h {
        return Err(invalid());
    }

    let width = face_box.width.min(img_w - face_box.x);
    let height = face_box.height.min(img_h - face_box.y);
    if width <= 0 || height <= 0 {
        return Err(invalid());
    }

    Ok(Region {
        x: face_box.x as u32,
        y: face_box.y as u32,
        width: width as u32,
        height: height as u32,
    })
}
