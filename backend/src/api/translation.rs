//! Translation API handlers
//!
//! HTTP bindings of the two flows. Bodies are taken as raw JSON so that a
//! missing or empty field is reported by the flow's schema (naming the field)
//! rather than by the extractor.

use crate::error::AppError;
use crate::flows::{RetrainOutcome, TranslationResult};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::Value;

/// POST /api/translate - Translate text into English
///
/// # Returns
/// * `Ok(Json<TranslationResult>)` - The translation
/// * `Err(AppError)` - Validation (400), model (502), or internal (500) failure
pub async fn translate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<TranslationResult>, AppError> {
    let request = state.translate.parse_request(&body)?;
    let result = state.translate.run(&request).await?;
    Ok(Json(result))
}

/// POST /api/retrain - Submit a correction
///
/// Always answers 200; failures are reported as `success: false`.
pub async fn retrain(State(state): State<AppState>, Json(body): Json<Value>) -> Json<RetrainOutcome> {
    Json(state.retrain.run_json(&body).await)
}
