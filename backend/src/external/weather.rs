//! Weather API client for fetching weather data
//!
//! Integrates with an OpenWeatherMap-compatible API for current conditions
//! and forecasts, and normalizes the provider payloads into shared models.

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared::{ForecastInterval, ForecastSeries, GpsCoordinates, WeatherCondition, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Provider response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    coord: OwmCoord,
    weather: Vec<OwmWeatherEntry>,
    main: OwmMain,
    wind: OwmWind,
    rain: Option<OwmRain>,
    dt: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwmCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeatherEntry {
    id: u16,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    pressure: i32,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

/// Provider response for the 5-day/3-hour forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    city: OwmCity,
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    name: String,
    coord: OwmCoord,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    weather: Vec<OwmWeatherEntry>,
    pop: Option<f64>,
    rain: Option<OwmForecastRain>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the public provider endpoint
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, "https://api.openweathermap.org/data/2.5".to_string())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Create a client from the weather section of the configuration
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.api_endpoint.clone())
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<WeatherSnapshot> {
        let data = self
            .fetch::<OwmCurrentResponse>(
                "weather",
                &[
                    ("lat", latitude.to_string()),
                    ("lon", longitude.to_string()),
                ],
            )
            .await?;
        Ok(convert_current_response(data))
    }

    /// Fetch current weather conditions by city name
    pub async fn current_by_city(&self, city: &str) -> AppResult<WeatherSnapshot> {
        let data = self
            .fetch::<OwmCurrentResponse>("weather", &[("q", city.to_string())])
            .await?;
        Ok(convert_current_response(data))
    }

    /// Fetch the 5-day/3-hour forecast by GPS coordinates
    pub async fn forecast_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<ForecastSeries> {
        let data = self
            .fetch::<OwmForecastResponse>(
                "forecast",
                &[
                    ("lat", latitude.to_string()),
                    ("lon", longitude.to_string()),
                ],
            )
            .await?;
        Ok(convert_forecast_response(data))
    }

    /// Fetch the 5-day/3-hour forecast by city name
    pub async fn forecast_by_city(&self, city: &str) -> AppResult<ForecastSeries> {
        let data = self
            .fetch::<OwmForecastResponse>("forecast", &[("q", city.to_string())])
            .await?;
        Ok(convert_forecast_response(data))
    }

    /// Issue a provider request and deserialize the JSON body
    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Location".to_string())),
            status if !status.is_success() => {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!("Weather API error: {} - {}", status, body);
                Err(AppError::WeatherServiceUnavailable)
            }
            _ => response.json().await.map_err(|e| {
                AppError::ExternalService(format!("Failed to parse weather response: {}", e))
            }),
        }
    }
}

/// Normalize a provider current-conditions payload
fn convert_current_response(data: OwmCurrentResponse) -> WeatherSnapshot {
    WeatherSnapshot {
        observed_at: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
        location_name: data.name,
        location: GpsCoordinates::new(data.coord.lat, data.coord.lon),
        temperature_celsius: data.main.temp,
        humidity_percent: data.main.humidity,
        pressure_hpa: data.main.pressure,
        wind_speed_mps: data.wind.speed,
        condition: convert_condition(data.weather),
        rain_1h_mm: data.rain.as_ref().and_then(|r| r.one_hour),
        rain_3h_mm: data.rain.as_ref().and_then(|r| r.three_hour),
    }
}

/// Normalize a provider forecast payload
fn convert_forecast_response(data: OwmForecastResponse) -> ForecastSeries {
    let intervals = data
        .list
        .into_iter()
        .map(|item| ForecastInterval {
            timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
            temperature_celsius: item.main.temp,
            humidity_percent: item.main.humidity,
            condition: convert_condition(item.weather),
            precipitation_probability: item.pop.unwrap_or(0.0),
            rain_3h_mm: item.rain.and_then(|r| r.three_hour),
        })
        .collect();

    ForecastSeries {
        location_name: data.city.name,
        location: GpsCoordinates::new(data.city.coord.lat, data.city.coord.lon),
        intervals,
    }
}

fn convert_condition(entries: Vec<OwmWeatherEntry>) -> WeatherCondition {
    entries
        .into_iter()
        .next()
        .map(|w| WeatherCondition::new(w.id, w.description, w.icon))
        // Code 0 matches no condition bucket, so estimation degrades cleanly
        .unwrap_or_else(|| WeatherCondition::new(0, "", ""))
}
