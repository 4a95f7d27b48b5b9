use serde::{Deserialize, Serialize};
use skin_tone::Analysis;
use utoipa::ToSchema;

/// Analysis result returned by `/api/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Representative skin color
    pub rgb: RgbValue,
    /// Same color as `#rrggbb`
    pub hex: String,
    /// CIE L*a*b* (D65), one decimal place
    pub lab: LabValue,
    /// `warm`, `cool`, or `neutral`
    pub undertone: String,
    /// `light`, `medium`, or `deep`
    pub depth: String,
    /// `muted`, `clear`, or `vivid`
    pub clarity: String,
    /// `spring`, `summer`, `autumn`, or `winter`
    pub season: String,
    /// Mean of the individual scores, two decimal places
    pub confidence: f64,
    pub scores: Scores,
    /// Present only on failure-masked responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RgbValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabValue {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Per-attribute confidences, two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scores {
    pub undertone: f64,
    pub depth: f64,
    pub season: f64,
}

/// Error body for client errors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl From<&Analysis> for AnalyzeResponse {
    fn from(analysis: &Analysis) -> Self {
        let color = analysis.color();
        let lab = analysis.lab();

        Self {
            rgb: RgbValue {
                r: color.r,
                g: color.g,
                b: color.b,
            },
            hex: analysis.hex(),
            lab: LabValue {
                l: round_to(lab.l, 1),
                a: round_to(lab.a, 1),
                b: round_to(lab.b, 1),
            },
            undertone: analysis.undertone().label.to_string(),
            depth: analysis.depth().label.to_string(),
            clarity: analysis.clarity().to_string(),
            season: analysis.season().label.to_string(),
            confidence: round_to(analysis.confidence(), 2),
            scores: Scores {
                undertone: round_to(analysis.undertone().confidence, 2),
                depth: round_to(analysis.depth().confidence, 2),
                season: round_to(analysis.season().confidence, 2),
            },
            error: None,
        }
    }
}

impl AnalyzeResponse {
    /// Structurally complete placeholder returned when analysis fails on
    /// the server side.
    pub fn safe_default(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::from(&Analysis::safe_default())
        }
    }
}
