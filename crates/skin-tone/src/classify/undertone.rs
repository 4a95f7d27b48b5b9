//! Undertone: the hue direction of the skin in the a*/b* plane.

use super::Assessment;
use crate::color::Lab;

/// Minimum |b*| (yellow/blue) for a warm or cool call.
const B_THRESHOLD: f64 = 5.0;
const BASE_CONFIDENCE: f64 = 0.7;
const MAX_CONFIDENCE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

label_enum!(Undertone, "undertone", {
    Warm => "warm",
    Cool => "cool",
    Neutral => "neutral",
});

/// Classify undertone from a*/b*.
///
/// Warm needs clearly yellow (b* > 5) and reddish (a* > 0) skin; cool is
/// clearly blue (b* < -5) or in the green-blue quadrant. Warm and cool gain
/// confidence with chroma; neutral loses it.
pub fn classify_undertone(lab: &Lab) -> Assessment<Undertone> {
    let chroma = lab.chroma();

    if lab.b > B_THRESHOLD && lab.a > 0.0 {
        Assessment::new(
            Undertone::Warm,
            MAX_CONFIDENCE.min(BASE_CONFIDENCE + chroma / 50.0),
        )
    } else if lab.b < -B_THRESHOLD || (lab.a < 0.0 && lab.b < 0.0) {
        Assessment::new(
            Undertone::Cool,
            MAX_CONFIDENCE.min(BASE_CONFIDENCE + chroma.abs() / 50.0),
        )
    } else {
        Assessment::new(Undertone::Neutral, 0.5f64.max(0.8 - chroma / 30.0))
    }
}
