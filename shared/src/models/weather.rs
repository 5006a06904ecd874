//! Weather data models
//!
//! Normalized forms of the weather provider payloads. These are the inputs
//! to rainfall estimation and the shapes served to the display layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A weather phenomenon classification as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherCondition {
    /// Numeric condition code (2xx thunderstorm, 3xx drizzle, 5xx rain,
    /// 6xx snow, 7xx atmosphere, 800 clear, 80x clouds)
    pub id: u16,
    pub description: String,
    pub icon: String,
}

impl WeatherCondition {
    pub fn new(id: u16, description: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            icon: icon.into(),
        }
    }
}

/// Current conditions observed at a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub observed_at: DateTime<Utc>,
    pub location_name: String,
    pub location: GpsCoordinates,
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    pub pressure_hpa: i32,
    pub wind_speed_mps: f64,
    pub condition: WeatherCondition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_1h_mm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_3h_mm: Option<f64>,
}

impl WeatherSnapshot {
    /// Wind speed converted for display (the provider reports m/s)
    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed_mps * 3.6
    }
}

/// One 3-hour step of a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastInterval {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    pub condition: WeatherCondition,
    /// Probability of precipitation, 0.0..=1.0
    pub precipitation_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain_3h_mm: Option<f64>,
}

/// Time-ordered forecast for a location (3-hour intervals over ~5 days)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub location_name: String,
    pub location: GpsCoordinates,
    pub intervals: Vec<ForecastInterval>,
}

impl ForecastSeries {
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
