use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
use crate::services::AnalysisService;

/// Analyze skin tone
///
/// Samples the cheeks and forehead inside the face box (or a centered
/// heuristic region), classifies undertone, depth, and clarity, and infers
/// the seasonal palette.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = AnalyzeResponse),
        (status = 400, description = "Missing image, bad base64, or unusable face box", body = ErrorResponse),
        (status = 500, description = "Fetch or decode failure; safe default payload with an error field", body = AnalyzeResponse),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(service): State<Arc<AnalysisService>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let response = service.analyze(request).await?;
    Ok(Json(response))
}
