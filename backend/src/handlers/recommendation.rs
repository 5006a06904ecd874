//! HTTP handlers for crop recommendation endpoints

use axum::{extract::State, Json};
use shared::{CropInputs, CropRecommendation};

use crate::error::AppResult;
use crate::services::RecommendationService;
use crate::AppState;

/// Produce a crop recommendation from agronomic inputs
pub async fn recommend_crop(
    State(state): State<AppState>,
    Json(inputs): Json<CropInputs>,
) -> AppResult<Json<CropRecommendation>> {
    let service = RecommendationService::new(state.crop_model.clone());
    let recommendation = service.recommend(inputs).await?;
    Ok(Json(recommendation))
}
