//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Label attached to a rainfall figure indicating which fallback tier
/// produced it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainfallSource {
    /// Summed directly from forecast interval precipitation
    Forecast,
    /// Derived from the forecast's leading condition code
    ConditionEstimate,
    /// Derived from latitude-zone climate normals
    ClimateEstimate,
    /// Derived from current observed conditions
    CurrentConditionEstimate,
}
