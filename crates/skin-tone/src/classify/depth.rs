//! Depth: how light or deep the skin is, from L* alone.

use super::Assessment;
use crate::color::Lab;

/// L* above this is light.
const LIGHT_ABOVE: f64 = 70.0;
/// L* above this (and not light) is medium.
const MEDIUM_ABOVE: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Light,
    Medium,
    Deep,
}

label_enum!(Depth, "depth", {
    Light => "light",
    Medium => "medium",
    Deep => "deep",
});

/// Classify depth from L*.
///
/// Confidence grows with the distance from the nearest band boundary.
pub fn classify_depth(lab: &Lab) -> Assessment<Depth> {
    let l = lab.l;

    if l > LIGHT_ABOVE {
        Assessment::new(
            Depth::Light,
            0.95f64.min(0.7 + (l - LIGHT_ABOVE) / 30.0 * 0.25),
        )
    } else if l > MEDIUM_ABOVE {
        let margin = (l - MEDIUM_ABOVE).min(LIGHT_ABOVE - l);
        Assessment::new(Depth::Medium, 0.9f64.min(0.7 + margin / 30.0 * 0.2))
    } else {
        Assessment::new(
            Depth::Deep,
            0.95f64.min(0.7 + (MEDIUM_ABOVE - l) / 40.0 * 0.25),
        )
    }
}
