//! HTTP handlers for weather endpoints
//!
//! The display layer queries these instead of talking to the weather
//! provider directly, keeping the API key server-side.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::weather::{ForecastReport, WeatherReport, WeatherService};
use crate::AppState;

/// Query parameters for coordinate-based lookups
#[derive(Debug, Deserialize)]
pub struct CoordsQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Query parameters for city-based lookups
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: String,
}

/// Query parameters for forecast lookups (coordinates or city)
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

fn check_coords(lat: f64, lon: f64) -> AppResult<()> {
    shared::validate_latitude(lat).map_err(|message| AppError::Validation {
        field: "lat".to_string(),
        message: message.to_string(),
    })?;
    shared::validate_longitude(lon).map_err(|message| AppError::Validation {
        field: "lon".to_string(),
        message: message.to_string(),
    })?;
    Ok(())
}

fn check_city(city: &str) -> AppResult<()> {
    shared::validate_city_name(city).map_err(|message| AppError::Validation {
        field: "city".to_string(),
        message: message.to_string(),
    })
}

/// Get current weather and rainfall estimate for coordinates
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<CoordsQuery>,
) -> AppResult<Json<WeatherReport>> {
    check_coords(query.lat, query.lon)?;

    let service = WeatherService::new(state.weather.clone());
    let report = service.report_by_coords(query.lat, query.lon).await?;
    Ok(Json(report))
}

/// Get current weather and rainfall estimate for a searched city
pub async fn get_city_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<WeatherReport>> {
    check_city(&query.city)?;

    let service = WeatherService::new(state.weather.clone());
    let report = service.report_by_city(query.city.trim()).await?;
    Ok(Json(report))
}

/// Get the forecast and its rainfall estimate, by coordinates or city
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ForecastReport>> {
    let service = WeatherService::new(state.weather.clone());

    let report = match (query.city, query.lat, query.lon) {
        (Some(city), _, _) => {
            check_city(&city)?;
            service.forecast_by_city(city.trim()).await?
        }
        (None, Some(lat), Some(lon)) => {
            check_coords(lat, lon)?;
            service.forecast_by_coords(lat, lon).await?
        }
        _ => {
            return Err(AppError::Validation {
                field: "city".to_string(),
                message: "Either city or lat and lon must be provided".to_string(),
            })
        }
    };

    Ok(Json(report))
}
