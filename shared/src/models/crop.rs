//! Crop recommendation models
//!
//! The prediction model classifies the seven agronomic features into one of
//! the crops below; the numeric class labels follow the model's training
//! encoding.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Crop class labels as encoded by the prediction model
pub const CROP_LABELS: [(i32, &str); 22] = [
    (1, "rice"),
    (2, "maize"),
    (3, "chickpea"),
    (4, "kidneybeans"),
    (5, "pigeonpeas"),
    (6, "mothbeans"),
    (7, "mungbean"),
    (8, "blackgram"),
    (9, "lentil"),
    (10, "pomegranate"),
    (11, "banana"),
    (12, "mango"),
    (13, "grapes"),
    (14, "watermelon"),
    (15, "muskmelon"),
    (16, "apple"),
    (17, "orange"),
    (18, "papaya"),
    (19, "coconut"),
    (20, "cotton"),
    (21, "jute"),
    (22, "coffee"),
];

/// Map a model class label to its crop name
pub fn crop_for_label(label: i32) -> Option<&'static str> {
    CROP_LABELS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, name)| *name)
}

/// Agronomic inputs for a crop recommendation
///
/// Field names follow the model's feature order; ranges match the bounds of
/// the training data.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CropInputs {
    /// Nitrogen content ratio in soil (kg/ha)
    #[serde(rename = "N")]
    #[validate(range(min = 0.0, max = 140.0))]
    pub nitrogen: f64,

    /// Phosphorus content ratio in soil (kg/ha)
    #[serde(rename = "P")]
    #[validate(range(min = 5.0, max = 145.0))]
    pub phosphorus: f64,

    /// Potassium content ratio in soil (kg/ha)
    #[serde(rename = "K")]
    #[validate(range(min = 5.0, max = 205.0))]
    pub potassium: f64,

    /// Air temperature (°C)
    #[validate(range(min = 8.0, max = 45.0))]
    pub temperature: f64,

    /// Relative humidity (%)
    #[validate(range(min = 14.0, max = 100.0))]
    pub humidity: f64,

    /// Soil pH value
    #[validate(range(min = 3.5, max = 10.0))]
    pub ph: f64,

    /// Monthly rainfall (mm)
    #[validate(range(min = 20.0, max = 300.0))]
    pub rainfall: f64,
}

/// Recommendation returned to the display layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub predicted_crop: String,
}
