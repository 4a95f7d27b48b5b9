//! Seasonal color classification
//!
//! Maps the three attribute labels onto one of four seasons through a fixed
//! decision table. Strong matches (the textbook combination for a season)
//! score 0.80; warm and cool fallbacks score 0.65; neutral undertones are
//! placed by depth alone at 0.55–0.60.

use crate::classify::{Assessment, Clarity, Depth, Undertone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

label_enum!(Season, "season", {
    Spring => "spring",
    Summer => "summer",
    Autumn => "autumn",
    Winter => "winter",
});

const STRONG: f64 = 0.80;
const FALLBACK: f64 = 0.65;
const NEUTRAL_EDGE: f64 = 0.60;
const NEUTRAL_MEDIUM: f64 = 0.55;

/// Infer the season for an (undertone, depth, clarity) combination.
///
/// ```
/// use skin_tone::{infer_season, Clarity, Depth, Season, Undertone};
///
/// let season = infer_season(Undertone::Warm, Depth::Light, Clarity::Clear);
/// assert_eq!(season.label, Season::Spring);
/// assert_eq!(season.confidence, 0.80);
/// ```
pub fn infer_season(undertone: Undertone, depth: Depth, clarity: Clarity) -> Assessment<Season> {
    use Clarity::*;
    use Depth::*;
    use Season::*;

    let (season, confidence) = match (undertone, depth, clarity) {
        (Undertone::Warm, Light, Clear | Vivid) => (Spring, STRONG),
        (Undertone::Warm, Medium | Deep, Muted) => (Autumn, STRONG),
        (Undertone::Warm, Light, _) => (Spring, FALLBACK),
        (Undertone::Warm, _, _) => (Autumn, FALLBACK),

        (Undertone::Cool, Light, Muted) => (Summer, STRONG),
        (Undertone::Cool, Deep, Clear | Vivid) => (Winter, STRONG),
        (Undertone::Cool, Light, _) => (Summer, FALLBACK),
        (Undertone::Cool, _, _) => (Winter, FALLBACK),

        (Undertone::Neutral, Light, _) => (Summer, NEUTRAL_EDGE),
        (Undertone::Neutral, Deep, _) => (Winter, NEUTRAL_EDGE),
        (Undertone::Neutral, Medium, _) => (Autumn, NEUTRAL_MEDIUM),
    };

    Assessment::new(season, confidence)
}
