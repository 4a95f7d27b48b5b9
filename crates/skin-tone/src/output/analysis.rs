//! The analysis result aggregate.

use crate::classify::{
    classify_clarity, classify_depth, classify_undertone, Assessment, Clarity, Depth, Undertone,
};
use crate::color::{ColorSample, Lab};
use crate::region::{PatchSample, Region};
use crate::season::{infer_season, Season};

/// The result of analyzing one photograph.
///
/// Built from the representative skin color; every derived field is
/// computed once at construction.
///
/// The overall [`confidence`](Analysis::confidence) is the mean of the
/// undertone, depth, and season confidences. Clarity has no confidence of
/// its own and does not contribute.
///
/// # Example
///
/// ```
/// use skin_tone::{Analysis, ColorSample, Depth, Season, Undertone};
///
/// let analysis = Analysis::from_color(ColorSample::new(245, 215, 190));
/// assert_eq!(analysis.undertone().label, Undertone::Warm);
/// assert_eq!(analysis.depth().label, Depth::Light);
/// assert_eq!(analysis.season().label, Season::Spring);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    color: ColorSample,
    lab: Lab,
    undertone: Assessment<Undertone>,
    depth: Assessment<Depth>,
    clarity: Clarity,
    season: Assessment<Season>,
    confidence: f64,
    /// Patch samples the color was chosen from (empty for direct colors).
    samples: Vec<PatchSample>,
    /// Face region that was sampled, if any.
    region: Option<Region>,
}

impl Analysis {
    /// Classify a representative color directly, without image sampling.
    pub fn from_color(color: ColorSample) -> Self {
        let lab = Lab::from(color);
        let undertone = classify_undertone(&lab);
        let depth = classify_depth(&lab);
        let clarity = classify_clarity(&lab);
        let season = infer_season(undertone.label, depth.label, clarity);
        let confidence = (undertone.confidence + depth.confidence + season.confidence) / 3.0;

        Self {
            color,
            lab,
            undertone,
            depth,
            clarity,
            season,
            confidence,
            samples: Vec::new(),
            region: None,
        }
    }

    /// Attach the sampling provenance.
    pub(crate) fn with_sampling(mut self, region: Region, samples: Vec<PatchSample>) -> Self {
        self.region = Some(region);
        self.samples = samples;
        self
    }

    /// Structurally complete placeholder for failed analyses.
    ///
    /// Neutral, medium, muted, autumn, black, with every confidence 0. Outer
    /// layers that must always return a full result use this on failure.
    pub fn safe_default() -> Self {
        let color = ColorSample::default();
        Self {
            color,
            lab: Lab::from(color),
            undertone: Assessment::new(Undertone::Neutral, 0.0),
            depth: Assessment::new(Depth::Medium, 0.0),
            clarity: Clarity::Muted,
            season: Assessment::new(Season::Autumn, 0.0),
            confidence: 0.0,
            samples: Vec::new(),
            region: None,
        }
    }

    /// Representative skin color.
    #[inline]
    pub fn color(&self) -> ColorSample {
        self.color
    }

    /// Representative skin color as `#rrggbb`.
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }

    #[inline]
    pub fn undertone(&self) -> Assessment<Undertone> {
        self.undertone
    }

    #[inline]
    pub fn depth(&self) -> Assessment<Depth> {
        self.depth
    }

    #[inline]
    pub fn clarity(&self) -> Clarity {
        self.clarity
    }

    #[inline]
    pub fn season(&self) -> Assessment<Season> {
        self.season
    }

    /// Mean of the undertone, depth, and season confidences.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    #[inline]
    pub fn samples(&self) -> &[PatchSample] {
        &self.samples
    }

    #[inline]
    pub fn region(&self) -> Option<Region> {
        self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warm_medium_vivid_reference_tone() {
        // L* = 69.6, just under the light threshold
        let analysis = Analysis::from_color(ColorSample::new(210, 160, 120));
        assert_eq!(analysis.undertone().label, Undertone::Warm);
        assert_eq!(analysis.depth().label, Depth::Medium);
        assert_eq!(analysis.clarity(), Clarity::Vivid);
        assert_eq!(analysis.season().label, Season::Autumn);
        assert_eq!(analysis.season().confidence, 0.65);
        assert_eq!(analysis.hex(), "#d2a078");
    }

    #[test]
    fn test_light_warm_tone_is_spring() {
        let analysis = Analysis::from_color(ColorSample::new(245, 215, 190));
        assert_eq!(analysis.undertone().label, Undertone::Warm);
        assert_eq!(analysis.depth().label, Depth::Light);
        assert_eq!(analysis.clarity(), Clarity::Clear);
        assert_eq!(analysis.season().label, Season::Spring);
        assert_eq!(analysis.season().confidence, 0.80);
    }

    #[test]
    fn test_overall_confidence_excludes_clarity() {
        let analysis = Analysis::from_color(ColorSample::new(245, 215, 190));
        let expected = (analysis.undertone().confidence
            + analysis.depth().confidence
            + analysis.season().confidence)
            / 3.0;
        assert_eq!(analysis.confidence(), expected);
    }

    #[test]
    fn test_cool_light_muted_is_summer() {
        let analysis = Analysis::from_color(ColorSample::new(220, 225, 240));
        assert_eq!(analysis.undertone().label, Undertone::Cool);
        assert_eq!(analysis.depth().label, Depth::Light);
        assert_eq!(analysis.clarity(), Clarity::Muted);
        assert_eq!(analysis.season().label, Season::Summer);
        assert_eq!(analysis.season().confidence, 0.80);
    }

    #[test]
    fn test_cool_deep_vivid_is_winter() {
        let analysis = Analysis::from_color(ColorSample::new(40, 50, 90));
        assert_eq!(analysis.undertone().label, Undertone::Cool);
        assert_eq!(analysis.depth().label, Depth::Deep);
        assert_eq!(analysis.season().label, Season::Winter);
        assert_eq!(analysis.season().confidence, 0.80);
    }

    #[test]
    fn test_mid_gray_is_neutral_autumn() {
        let analysis = Analysis::from_color(ColorSample::new(128, 128, 128));
        assert_eq!(analysis.undertone().label, Undertone::Neutral);
        assert_eq!(analysis.depth().label, Depth::Medium);
        assert_eq!(analysis.season().label, Season::Autumn);
        assert_eq!(analysis.season().confidence, 0.55);
    }

    #[test]
    fn test_safe_default() {
        let analysis = Analysis::safe_default();
        assert_eq!(analysis.undertone().label, Undertone::Neutral);
        assert_eq!(analysis.depth().label, Depth::Medium);
        assert_eq!(analysis.season().label, Season::Autumn);
        assert_eq!(analysis.confidence(), 0.0);
        assert_eq!(analysis.hex(), "#000000");
        assert!(analysis.samples().is_empty());
        assert!(analysis.region().is_none());
    }
}
