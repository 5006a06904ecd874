//! Rainfall estimation
//!
//! Turns heterogeneous, possibly-incomplete weather data into a single
//! rainfall estimate with a disclosed confidence tier. Estimation degrades
//! through tiers rather than failing: reported forecast precipitation, then
//! a condition-code heuristic, then latitude-zone climate normals.
//!
//! The estimator is pure apart from jitter drawn from the caller-provided
//! random source; callers pass the month index so no ambient clock is read.

mod climate;

pub use climate::{monthly_normal_mm, typical_daily_mm, ClimateZone};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ForecastSeries, WeatherSnapshot};
use crate::types::RainfallSource;

/// Estimates use a flat 30-day month
const DAYS_PER_MONTH: f64 = 30.0;

/// A 5-day forecast window covers roughly one sixth of a month
const FORECAST_WINDOWS_PER_MONTH: f64 = 6.0;

#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),
}

/// A rainfall figure with its provenance
///
/// Computed fresh on every weather query and handed straight to the display
/// layer; never mutated or stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RainfallEstimate {
    pub has_rainfall: bool,
    pub daily_total_mm: f64,
    pub monthly_total_mm: f64,
    pub source: RainfallSource,
}

impl RainfallEstimate {
    /// Build an estimate whose monthly figure extrapolates a daily rate
    fn from_daily(daily_total_mm: f64, source: RainfallSource) -> Self {
        Self {
            has_rainfall: true,
            daily_total_mm,
            monthly_total_mm: daily_total_mm * DAYS_PER_MONTH,
            source,
        }
    }
}

/// Estimate rainfall from a forecast series.
///
/// Precipitation amounts reported on the intervals are treated as ground
/// truth when any are positive. Otherwise the condition code of the first
/// interval drives a heuristic, and non-rain conditions fall back to the
/// climate normal for the location's latitude zone and `month0`
/// (0 = January).
///
/// Returns `MalformedInput` when the series has no intervals.
pub fn estimate_from_forecast<R: Rng + ?Sized>(
    series: &ForecastSeries,
    month0: u32,
    rng: &mut R,
) -> Result<RainfallEstimate, EstimateError> {
    let first = series
        .intervals
        .first()
        .ok_or(EstimateError::MalformedInput(
            "forecast series has no intervals",
        ))?;

    let mut total_mm = 0.0;
    let mut any_reported = false;
    for interval in &series.intervals {
        if let Some(mm) = interval.rain_3h_mm {
            if mm > 0.0 {
                total_mm += mm;
                any_reported = true;
            }
        }
    }
    if any_reported {
        return Ok(RainfallEstimate {
            has_rainfall: true,
            daily_total_mm: total_mm,
            monthly_total_mm: total_mm * FORECAST_WINDOWS_PER_MONTH,
            source: RainfallSource::Forecast,
        });
    }

    if let Some(daily) = forecast_condition_daily_mm(first.condition.id, rng) {
        return Ok(RainfallEstimate::from_daily(
            daily,
            RainfallSource::ConditionEstimate,
        ));
    }

    let zone = ClimateZone::for_latitude(series.location.latitude);
    let daily = monthly_normal_mm(zone, month0) / DAYS_PER_MONTH * climate_jitter(rng);
    Ok(RainfallEstimate::from_daily(
        daily,
        RainfallSource::ClimateEstimate,
    ))
}

/// Estimate rainfall from current conditions only (no forecast available).
///
/// An observed precipitation window converts to a daily rate; the 3-hour
/// figure takes precedence over the 1-hour one. Without an observation the
/// condition code drives a heuristic, then the climate normal. Never fails.
pub fn estimate_from_current<R: Rng + ?Sized>(
    snapshot: &WeatherSnapshot,
    month0: u32,
    rng: &mut R,
) -> RainfallEstimate {
    let observed_daily = match (snapshot.rain_3h_mm, snapshot.rain_1h_mm) {
        (Some(mm), _) => Some(mm * 8.0),
        (None, Some(mm)) => Some(mm * 24.0),
        (None, None) => None,
    };
    if let Some(daily) = observed_daily {
        return RainfallEstimate::from_daily(daily, RainfallSource::CurrentConditionEstimate);
    }

    if let Some(daily) = current_condition_daily_mm(snapshot.condition.id, rng) {
        return RainfallEstimate::from_daily(daily, RainfallSource::CurrentConditionEstimate);
    }

    let zone = ClimateZone::for_latitude(snapshot.location.latitude);
    let daily = typical_daily_mm(zone, month0) * climate_jitter(rng);
    RainfallEstimate::from_daily(daily, RainfallSource::ClimateEstimate)
}

/// Daily estimate for a forecast-level condition code.
///
/// Buckets are half-open: 700 (atmosphere) and 800 (clear) fall through to
/// the climate normal.
fn forecast_condition_daily_mm<R: Rng + ?Sized>(code: u16, rng: &mut R) -> Option<f64> {
    match code {
        // Thunderstorm
        200..=299 => Some(15.0 * rng.gen_range(0.5..1.0)),
        // Drizzle
        300..=399 => Some(5.0 * rng.gen_range(0.5..1.0)),
        // Rain
        500..=599 => Some(10.0 * rng.gen_range(0.5..1.0)),
        // Snow, as water equivalent
        600..=699 => Some(8.0 * rng.gen_range(0.5..1.0)),
        _ => None,
    }
}

/// Daily estimate for a currently-observed condition code
fn current_condition_daily_mm<R: Rng + ?Sized>(code: u16, rng: &mut R) -> Option<f64> {
    match code {
        200..=299 => Some(10.0 + rng.gen_range(0.0..15.0)),
        300..=399 => Some(2.0 + rng.gen_range(0.0..5.0)),
        500..=599 => Some(5.0 + rng.gen_range(0.0..15.0)),
        600..=699 => Some(3.0 + rng.gen_range(0.0..10.0)),
        _ => None,
    }
}

fn climate_jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.8..1.2)
}
