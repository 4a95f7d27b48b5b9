use skin_tone::{Analysis, FaceBox, SkinToneAnalyzer};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AnalysisConfig, AnalyzeRequest, AnalyzeResponse};
use crate::services::image_fetcher::ImageFetcher;
use crate::services::image_source::{decode_inline, AcquiredImage, ImageSource, Provenance};

/// Acquires request images and runs the skin-tone pipeline on them
pub struct AnalysisService {
    analyzer: SkinToneAnalyzer,
    fetcher: Arc<dyn ImageFetcher>,
}

impl AnalysisService {
    pub fn new(config: &AnalysisConfig, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            analyzer: SkinToneAnalyzer::new().max_dimension(config.max_dimension),
            fetcher,
        }
    }

    /// Resolve a request into image bytes.
    pub async fn acquire(&self, request: &AnalyzeRequest) -> Result<AcquiredImage, ApiError> {
        let source =
            ImageSource::from_request(request).inspect_err(|e| log_rejected(request, e))?;
        match source {
            ImageSource::Inline(payload) => Ok(AcquiredImage::new(
                decode_inline(&payload).inspect_err(|e| log_rejected(request, e))?,
                Provenance::Inline,
            )),
            ImageSource::Remote(url) => {
                let bytes = self.fetcher.fetch(&url).await.map_err(|e| {
                    tracing::warn!(url = %url, %e, "Image fetch failed");
                    ApiError::from(e)
                })?;
                Ok(AcquiredImage::new(bytes, Provenance::Url(url)))
            }
        }
    }

    /// Handle a full analysis request.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
        let image = self.acquire(&request).await?;
        let face_box = request.face_box.map(FaceBox::from);
        let analysis = self.analyze_image(image, face_box).await?;
        Ok(AnalyzeResponse::from(&analysis))
    }

    /// Analyze already acquired bytes.
    ///
    /// Decoding and sampling are CPU-bound, so they run on the blocking
    /// thread pool.
    pub async fn analyze_image(
        &self,
        image: AcquiredImage,
        face_box: Option<FaceBox>,
    ) -> Result<Analysis, ApiError> {
        let digest = image.digest();
        let AcquiredImage { bytes, provenance } = image;
        tracing::debug!(
            source = %provenance,
            sha256 = %digest,
            bytes = bytes.len(),
            face_box = ?face_box,
            "Analyzing image"
        );

        let analyzer = self.analyzer.clone();
        let result = tokio::task::spawn_blocking(move || analyzer.analyze_bytes(&bytes, face_box))
            .await
            .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))?;

        match result {
            Ok(analysis) => {
                tracing::info!(
                    source = %provenance,
                    sha256 = %digest,
                    hex = %analysis.hex(),
                    season = %analysis.season().label,
                    confidence = analysis.confidence(),
                    samples = analysis.samples().len(),
                    "Analysis complete"
                );
                Ok(analysis)
            }
            Err(e) => {
                tracing::warn!(
                    source = %provenance,
                    sha256 = %digest,
                    face_box = ?face_box,
                    stage = %e.stage(),
                    %e,
                    "Analysis failed"
                );
                Err(e.into())
            }
        }
    }
}

fn log_rejected(request: &AnalyzeRequest, e: &ApiError) {
    tracing::warn!(
        has_inline = request.image_base64.is_some(),
        has_url = request.image_url.is_some(),
        payload_len = request.image_base64.as_deref().map_or(0, str::len),
        face_box = ?request.face_box,
        %e,
        "Image request rejected"
    );
}
