//! Weather service composing provider data with rainfall estimates
//!
//! One weather query issues at most two provider round trips (current
//! conditions, then the forecast). The rainfall figure degrades through
//! tiers: forecast-derived estimate, then current-conditions estimate when
//! the forecast is unavailable or unusable.

use chrono::{Datelike, Utc};
use serde::Serialize;
use shared::rainfall::{estimate_from_current, estimate_from_forecast, RainfallEstimate};
use shared::{ForecastSeries, WeatherSnapshot};

use crate::error::AppResult;
use crate::external::WeatherClient;

/// Current conditions bundled with their rainfall estimate
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub weather: WeatherSnapshot,
    pub rainfall: RainfallEstimate,
}

/// Forecast series bundled with its rainfall estimate
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub forecast: ForecastSeries,
    pub rainfall: RainfallEstimate,
}

/// Weather service for building display-ready reports
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Build a weather report for GPS coordinates
    pub async fn report_by_coords(&self, latitude: f64, longitude: f64) -> AppResult<WeatherReport> {
        let snapshot = self.client.current_by_coords(latitude, longitude).await?;
        let forecast = self.client.forecast_by_coords(latitude, longitude).await;
        Ok(Self::build_report(snapshot, forecast))
    }

    /// Build a weather report for a city name
    pub async fn report_by_city(&self, city: &str) -> AppResult<WeatherReport> {
        let snapshot = self.client.current_by_city(city).await?;
        let forecast = self.client.forecast_by_city(city).await;
        Ok(Self::build_report(snapshot, forecast))
    }

    /// Fetch the forecast for GPS coordinates with its rainfall estimate
    pub async fn forecast_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<ForecastReport> {
        let series = self.client.forecast_by_coords(latitude, longitude).await?;
        Self::build_forecast_report(series)
    }

    /// Fetch the forecast for a city name with its rainfall estimate
    pub async fn forecast_by_city(&self, city: &str) -> AppResult<ForecastReport> {
        let series = self.client.forecast_by_city(city).await?;
        Self::build_forecast_report(series)
    }

    /// Combine a snapshot with whatever forecast data could be fetched
    fn build_report(
        snapshot: WeatherSnapshot,
        forecast: AppResult<ForecastSeries>,
    ) -> WeatherReport {
        let month0 = Utc::now().month0();
        let mut rng = rand::thread_rng();

        let rainfall = match forecast {
            Ok(series) => match estimate_from_forecast(&series, month0, &mut rng) {
                Ok(estimate) => estimate,
                Err(err) => {
                    tracing::warn!(
                        "Forecast unusable ({}), estimating from current conditions",
                        err
                    );
                    estimate_from_current(&snapshot, month0, &mut rng)
                }
            },
            Err(err) => {
                tracing::warn!(
                    "Forecast fetch failed ({}), estimating from current conditions",
                    err
                );
                estimate_from_current(&snapshot, month0, &mut rng)
            }
        };

        WeatherReport {
            weather: snapshot,
            rainfall,
        }
    }

    /// Attach a rainfall estimate to a bare forecast series
    fn build_forecast_report(series: ForecastSeries) -> AppResult<ForecastReport> {
        let month0 = Utc::now().month0();
        let mut rng = rand::thread_rng();

        // Without a current-conditions snapshot there is nothing to degrade
        // to, so an unusable series surfaces to the caller.
        let rainfall = estimate_from_forecast(&series, month0, &mut rng)?;

        Ok(ForecastReport {
            forecast: series,
            rainfall,
        })
    }
}
