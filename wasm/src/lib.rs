//! WebAssembly module for the Crop Advisory Platform
//!
//! Provides client-side computation for:
//! - Rainfall estimation from forecast or current-conditions JSON
//! - Location input validation
//! - Crop label resolution

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;

use shared::models::{ForecastSeries, WeatherSnapshot};
use shared::rainfall::{estimate_from_current, estimate_from_forecast};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn browser_rng() -> SmallRng {
    // The host clock is entropy enough for estimation jitter
    SmallRng::seed_from_u64(js_sys::Date::now() as u64)
}

fn estimate_forecast_inner<R: Rng + ?Sized>(
    forecast_json: &str,
    month0: u32,
    rng: &mut R,
) -> Result<String, String> {
    let series: ForecastSeries = serde_json::from_str(forecast_json)
        .map_err(|e| format!("Invalid forecast JSON: {}", e))?;
    let estimate = estimate_from_forecast(&series, month0, rng).map_err(|e| e.to_string())?;
    serde_json::to_string(&estimate).map_err(|e| e.to_string())
}

fn estimate_current_inner<R: Rng + ?Sized>(
    snapshot_json: &str,
    month0: u32,
    rng: &mut R,
) -> Result<String, String> {
    let snapshot: WeatherSnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| format!("Invalid snapshot JSON: {}", e))?;
    let estimate = estimate_from_current(&snapshot, month0, rng);
    serde_json::to_string(&estimate).map_err(|e| e.to_string())
}

/// Estimate rainfall from a normalized forecast series (JSON in, JSON out)
#[wasm_bindgen]
pub fn estimate_rainfall_from_forecast(forecast_json: &str, month0: u32) -> Result<String, JsValue> {
    estimate_forecast_inner(forecast_json, month0, &mut browser_rng())
        .map_err(|e| JsValue::from_str(&e))
}

/// Estimate rainfall from normalized current conditions (JSON in, JSON out)
#[wasm_bindgen]
pub fn estimate_rainfall_from_current(snapshot_json: &str, month0: u32) -> Result<String, JsValue> {
    estimate_current_inner(snapshot_json, month0, &mut browser_rng())
        .map_err(|e| JsValue::from_str(&e))
}

/// Validate a latitude/longitude pair
#[wasm_bindgen]
pub fn validate_location(latitude: f64, longitude: f64) -> bool {
    shared::validate_latitude(latitude).is_ok() && shared::validate_longitude(longitude).is_ok()
}

/// Validate a city search term
#[wasm_bindgen]
pub fn validate_city(city: &str) -> bool {
    shared::validate_city_name(city).is_ok()
}

/// Resolve a model class label to its crop name
#[wasm_bindgen]
pub fn crop_name_for_label(label: i32) -> String {
    shared::crop_for_label(label).unwrap_or("Unknown").to_string()
}

/// Convert provider wind speed (m/s) for display (km/h)
#[wasm_bindgen]
pub fn wind_speed_kmh(wind_speed_mps: f64) -> f64 {
    wind_speed_mps * 3.6
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_JSON: &str = r#"{
        "location_name": "Testville",
        "location": {"latitude": 10.0, "longitude": 0.0},
        "intervals": [
            {
                "timestamp": "2024-07-01T12:00:00Z",
                "temperature_celsius": 24.0,
                "humidity_percent": 70,
                "condition": {"id": 500, "description": "light rain", "icon": "10d"},
                "precipitation_probability": 0.6,
                "rain_3h_mm": 2.5
            }
        ]
    }"#;

    const SNAPSHOT_JSON: &str = r#"{
        "observed_at": "2024-07-01T12:00:00Z",
        "location_name": "Testville",
        "location": {"latitude": 10.0, "longitude": 0.0},
        "temperature_celsius": 24.0,
        "humidity_percent": 70,
        "pressure_hpa": 1013,
        "wind_speed_mps": 2.5,
        "condition": {"id": 800, "description": "clear sky", "icon": "01d"},
        "rain_3h_mm": 1.5
    }"#;

    #[test]
    fn test_estimate_from_forecast_json() {
        let mut rng = SmallRng::seed_from_u64(1);
        let out = estimate_forecast_inner(FORECAST_JSON, 6, &mut rng).unwrap();
        assert!(out.contains("\"source\":\"forecast\""));
        assert!(out.contains("\"daily_total_mm\":2.5"));
    }

    #[test]
    fn test_estimate_from_current_json() {
        let mut rng = SmallRng::seed_from_u64(1);
        let out = estimate_current_inner(SNAPSHOT_JSON, 6, &mut rng).unwrap();
        assert!(out.contains("\"source\":\"current_condition_estimate\""));
        assert!(out.contains("\"daily_total_mm\":12"));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(estimate_forecast_inner("not json", 6, &mut rng).is_err());
    }

    #[test]
    fn test_validate_location() {
        assert!(validate_location(18.79, 98.98));
        assert!(!validate_location(120.0, 0.0));
    }

    #[test]
    fn test_crop_name_for_label() {
        assert_eq!(crop_name_for_label(1), "rice");
        assert_eq!(crop_name_for_label(99), "Unknown");
    }
}
