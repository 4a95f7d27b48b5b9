//! Representative color selection
//!
//! The representative skin color is the brightness median of the patch
//! samples. With two or three samples a mean would be pulled just as far by
//! one shadowed or blown-out patch, so the median is used instead.

use crate::color::ColorSample;

/// Pick the sample at index `n / 2` after a stable sort by brightness.
///
/// For an even count this is the upper of the two middle samples (for two
/// samples, the brighter one). Ties keep their input order. Returns `None`
/// for empty input.
///
/// ```
/// use skin_tone::{select_representative, ColorSample};
///
/// let samples = [
///     ColorSample::new(200, 200, 200),
///     ColorSample::new(50, 50, 50),
///     ColorSample::new(120, 120, 120),
/// ];
/// assert_eq!(select_representative(&samples), Some(ColorSample::new(120, 120, 120)));
/// ```
pub fn select_representative(samples: &[ColorSample]) -> Option<ColorSample> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by_key(ColorSample::brightness_key);
    Some(sorted[sorted.len() / 2])
}
