//! Crop prediction model client
//!
//! Client for the model-serving endpoint that classifies agronomic inputs
//! into a crop label. The model itself (a trained classifier over the seven
//! features) stays behind this HTTP boundary.

use reqwest::Client;
use serde::Deserialize;
use shared::CropInputs;

use crate::config::ModelConfig;
use crate::error::{AppError, AppResult};

/// Client for the crop prediction model service
#[derive(Clone)]
pub struct CropModelClient {
    http_client: Client,
    base_url: String,
}

/// Response from the prediction endpoint
#[derive(Debug, Deserialize)]
struct PredictResponse {
    /// Numeric class label following the model's training encoding
    label: i32,
}

impl CropModelClient {
    /// Create a new client for the given model service base URL
    pub fn new(base_url: String) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url,
        }
    }

    /// Create a client from the model section of the configuration
    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    /// Submit inputs for classification and return the predicted class label
    pub async fn predict(&self, inputs: &CropInputs) -> AppResult<i32> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(inputs)
            .send()
            .await
            .map_err(|e| AppError::ModelServiceError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ModelServiceError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: PredictResponse = response
            .json()
            .await
            .map_err(|e| AppError::ModelServiceError(format!("Failed to parse response: {}", e)))?;

        Ok(result.label)
    }
}
