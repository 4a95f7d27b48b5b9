//! Resolving a request into raw image bytes.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::PathBuf;

use crate::error::ApiError;
use crate::models::AnalyzeRequest;

/// Where the image for a request comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline base64 payload (raw or data URI)
    Inline(String),
    /// Remote URL
    Remote(String),
}

impl ImageSource {
    /// Pick the image source for a request. Inline data wins over a URL.
    pub fn from_request(request: &AnalyzeRequest) -> Result<Self, ApiError> {
        match (request.inline_payload(), request.remote_url()) {
            (Some(payload), url) => {
                if let Some(url) = url {
                    tracing::debug!(url, "Both imageBase64 and imageUrl supplied, using inline data");
                }
                Ok(ImageSource::Inline(payload.to_string()))
            }
            (None, Some(url)) => Ok(ImageSource::Remote(url.to_string())),
            (None, None) => Err(ApiError::MissingInput),
        }
    }
}

/// Origin of acquired bytes, recorded in logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    Inline,
    Url(String),
    File(PathBuf),
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Inline => f.write_str("inline"),
            Provenance::Url(url) => f.write_str(url),
            Provenance::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Image bytes together with where they came from
#[derive(Debug, Clone)]
pub struct AcquiredImage {
    pub bytes: Vec<u8>,
    pub provenance: Provenance,
}

impl AcquiredImage {
    pub fn new(bytes: Vec<u8>, provenance: Provenance) -> Self {
        Self { bytes, provenance }
    }

    /// Hex SHA-256 of the bytes
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }
}

/// Decode an inline payload: plain base64, or a `data:` URI with a base64
/// body. Whitespace (line-wrapped base64) is ignored.
pub fn decode_inline(payload: &str) -> Result<Vec<u8>, ApiError> {
    let encoded = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest
                .split_once(',')
                .ok_or_else(|| ApiError::InvalidInput("malformed data URI".to_string()))?;
            if !header.ends_with(";base64") {
                return Err(ApiError::InvalidInput(
                    "data URI must be base64-encoded".to_string(),
                ));
            }
            data
        }
        None => payload,
    };

    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ApiError::InvalidInput(format!("imageBase64 is not valid base64: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(base64: Option<&str>, url: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest {
            image_base64: base64.map(String::from),
            image_url: url.map(String::from),
            face_box: None,
        }
    }

    #[test]
    fn test_inline_wins_over_url() {
        let source =
            ImageSource::from_request(&request(Some("AAAA"), Some("http://x/y.png"))).unwrap();
        assert_eq!(source, ImageSource::Inline("AAAA".to_string()));
    }

    #[test]
    fn test_url_only() {
        let source = ImageSource::from_request(&request(None, Some(" http://x/y.png "))).unwrap();
        assert_eq!(source, ImageSource::Remote("http://x/y.png".to_string()));
    }

    #[test]
    fn test_neither_is_missing_input() {
        assert!(matches!(
            ImageSource::from_request(&request(None, None)),
            Err(ApiError::MissingInput)
        ));
        assert!(matches!(
            ImageSource::from_request(&request(Some(""), Some("  "))),
            Err(ApiError::MissingInput)
        ));
    }

    #[test]
    fn test_decode_plain_base64() {
        assert_eq!(decode_inline("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_decode_wrapped_base64() {
        assert_eq!(decode_inline("aGVs\nbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn test_decode_data_uri() {
        assert_eq!(
            decode_inline("data:image/png;base64,aGVsbG8=").unwrap(),
            b"hello"
        );
    }

    #[test]
    fn test_decode_rejects_non_base64_data_uri() {
        assert!(matches!(
            decode_inline("data:text/plain,hello"),
            Err(ApiError::InvalidInput(_))
        ));
        assert!(matches!(
            decode_inline("data:image/png;base64"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_inline("not base64 at all!"),
            Err(ApiError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_digest_is_sha256_hex() {
        let image = AcquiredImage::new(b"hello".to_vec(), Provenance::Inline);
        assert_eq!(
            image.digest(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_provenance_display() {
        assert_eq!(Provenance::Inline.to_string(), "inline");
        assert_eq!(
            Provenance::Url("https://x/y.png".into()).to_string(),
            "https://x/y.png"
        );
        assert_eq!(
            Provenance::File(PathBuf::from("a/b.jpg")).to_string(),
            "file:a/b.jpg"
        );
    }
}
