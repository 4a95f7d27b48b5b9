use serde::{Deserialize, Serialize};
use skin_tone::FaceBox;
use std::str::FromStr;
use utoipa::ToSchema;

/// Request body for skin-tone analysis
///
/// Supply the image either inline (`imageBase64`) or by reference
/// (`imageUrl`). When both are present the inline data is used.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Base64-encoded image, raw or as a `data:<mime>;base64,` URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,

    /// HTTP(S) URL to fetch the image from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Face rectangle in image pixels; omitted or invalid boxes fall back
    /// to a centered heuristic region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_box: Option<FaceBoxInput>,
}

impl AnalyzeRequest {
    /// Inline payload, ignoring blank strings.
    pub fn inline_payload(&self) -> Option<&str> {
        self.image_base64
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Remote URL, ignoring blank strings.
    pub fn remote_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Face rectangle as sent by clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct FaceBoxInput {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl From<FaceBoxInput> for FaceBox {
    fn from(input: FaceBoxInput) -> Self {
        FaceBox::new(input.x, input.y, input.width, input.height)
    }
}

/// Parses the CLI form `x,y,width,height`.
impl FromStr for FaceBoxInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid face box {s:?}: {e}"))?;

        match parts.as_slice() {
            &[x, y, width, height] => Ok(Self {
                x,
                y,
                width,
                height,
            }),
            _ => Err(format!(
                "invalid face box {s:?}: expected x,y,width,height"
            )),
        }
    }
}
