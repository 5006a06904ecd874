//! Crop recommendation service
//!
//! Validates agronomic inputs and forwards them to the prediction model
//! service, mapping the returned class label to a crop name.

use shared::{crop_for_label, CropInputs, CropRecommendation};
use validator::Validate;

use crate::error::AppResult;
use crate::external::CropModelClient;

/// Service for producing crop recommendations
#[derive(Clone)]
pub struct RecommendationService {
    client: CropModelClient,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(client: CropModelClient) -> Self {
        Self { client }
    }

    /// Validate inputs, query the model, and resolve the crop name
    pub async fn recommend(&self, inputs: CropInputs) -> AppResult<CropRecommendation> {
        inputs.validate()?;

        let label = self.client.predict(&inputs).await?;
        let crop = crop_for_label(label).unwrap_or("Unknown");

        tracing::info!(label, crop, "crop recommendation produced");

        Ok(CropRecommendation {
            predicted_crop: crop.to_string(),
        })
    }
}
