//! Rainfall estimation tests
//!
//! Covers the estimation fallback tiers:
//! - forecast precipitation sums as ground truth
//! - condition-code heuristics with documented bounds
//! - climate-normal fallback for non-rain conditions

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use shared::rainfall::{estimate_from_current, estimate_from_forecast, ClimateZone};
use shared::{
    monthly_normal_mm, typical_daily_mm, ForecastInterval, ForecastSeries, GpsCoordinates,
    RainfallSource, WeatherCondition, WeatherSnapshot,
};

fn interval(condition_id: u16, rain_3h_mm: Option<f64>) -> ForecastInterval {
    ForecastInterval {
        timestamp: Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
        temperature_celsius: 24.0,
        humidity_percent: 70,
        condition: WeatherCondition::new(condition_id, "test", "10d"),
        precipitation_probability: 0.0,
        rain_3h_mm,
    }
}

fn series(latitude: f64, intervals: Vec<ForecastInterval>) -> ForecastSeries {
    ForecastSeries {
        location_name: "Testville".to_string(),
        location: GpsCoordinates::new(latitude, 0.0),
        intervals,
    }
}

fn snapshot(
    latitude: f64,
    condition_id: u16,
    rain_1h_mm: Option<f64>,
    rain_3h_mm: Option<f64>,
) -> WeatherSnapshot {
    WeatherSnapshot {
        observed_at: Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap(),
        location_name: "Testville".to_string(),
        location: GpsCoordinates::new(latitude, 0.0),
        temperature_celsius: 24.0,
        humidity_percent: 70,
        pressure_hpa: 1013,
        wind_speed_mps: 3.0,
        condition: WeatherCondition::new(condition_id, "test", "10d"),
        rain_1h_mm,
        rain_3h_mm,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Documented example: 40 intervals at 0.5mm each
    #[test]
    fn test_forecast_sum_example() {
        let intervals = (0..40).map(|_| interval(500, Some(0.5))).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let estimate = estimate_from_forecast(&series(10.0, intervals), 6, &mut rng).unwrap();

        assert_eq!(estimate.source, RainfallSource::Forecast);
        assert!((estimate.daily_total_mm - 20.0).abs() < 1e-9);
        assert!((estimate.monthly_total_mm - 120.0).abs() < 1e-9);
    }

    /// Documented example: current snapshot, rain condition, no rain field
    #[test]
    fn test_current_rain_condition_example() {
        let mut rng = StdRng::seed_from_u64(1);
        let estimate = estimate_from_current(&snapshot(10.0, 500, None, None), 6, &mut rng);

        assert_eq!(estimate.source, RainfallSource::CurrentConditionEstimate);
        assert!(estimate.daily_total_mm >= 5.0);
        assert!(estimate.daily_total_mm < 20.0);
    }

    /// Documented example: tropical latitude, July, clear sky
    #[test]
    fn test_current_climate_example() {
        let mut rng = StdRng::seed_from_u64(1);
        let estimate = estimate_from_current(&snapshot(10.0, 800, None, None), 6, &mut rng);

        assert_eq!(estimate.source, RainfallSource::ClimateEstimate);
        assert!(estimate.daily_total_mm >= 6.7 * 0.8);
        assert!(estimate.daily_total_mm < 6.7 * 1.2);
    }

    #[test]
    fn test_empty_series_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(estimate_from_forecast(&series(10.0, vec![]), 6, &mut rng).is_err());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    /// Strategy for latitudes across all three climate zones
    fn latitude_strategy() -> impl Strategy<Value = f64> {
        -60.0..60.0f64
    }

    /// Strategy for month indices
    fn month_strategy() -> impl Strategy<Value = u32> {
        0..12u32
    }

    /// Strategy for condition codes that map to a rainfall bucket
    fn rainy_code_strategy() -> impl Strategy<Value = u16> {
        prop_oneof![200..300u16, 300..400u16, 500..600u16, 600..700u16]
    }

    /// Strategy for condition codes with no rainfall bucket
    fn dry_code_strategy() -> impl Strategy<Value = u16> {
        prop_oneof![400..500u16, 700..800u16, 800..810u16]
    }

    /// Strategy for per-interval precipitation amounts
    fn rain_amount_strategy() -> impl Strategy<Value = f64> {
        0.1..30.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Reported forecast precipitation is ground truth: the monthly
        /// figure is six 5-day windows, not a 30-day extrapolation
        #[test]
        fn prop_forecast_sum_scales_by_six(
            amounts in prop::collection::vec(rain_amount_strategy(), 1..40),
            seed in any::<u64>()
        ) {
            let expected: f64 = amounts.iter().sum();
            let intervals = amounts.iter().map(|&mm| interval(800, Some(mm))).collect();
            let mut rng = StdRng::seed_from_u64(seed);

            let estimate = estimate_from_forecast(&series(10.0, intervals), 0, &mut rng).unwrap();

            prop_assert!(estimate.has_rainfall);
            prop_assert_eq!(estimate.source, RainfallSource::Forecast);
            prop_assert!((estimate.daily_total_mm - expected).abs() < 1e-9);
            prop_assert!((estimate.monthly_total_mm - expected * 6.0).abs() < 1e-6);
        }

        /// Rainy condition codes produce a condition estimate within the
        /// documented bucket bound
        #[test]
        fn prop_condition_estimate_bounds(
            code in rainy_code_strategy(),
            month0 in month_strategy(),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate =
                estimate_from_forecast(&series(10.0, vec![interval(code, None)]), month0, &mut rng)
                    .unwrap();

            prop_assert!(estimate.has_rainfall);
            prop_assert_eq!(estimate.source, RainfallSource::ConditionEstimate);

            let (lo, hi) = match code {
                200..=299 => (7.5, 15.0),
                300..=399 => (2.5, 5.0),
                500..=599 => (5.0, 10.0),
                _ => (4.0, 8.0),
            };
            prop_assert!(estimate.daily_total_mm >= lo);
            prop_assert!(estimate.daily_total_mm < hi);
        }

        /// Non-rain codes (including 700 and 800 exactly) reach the climate
        /// fallback, bounded by the tabulated normal with ±20% jitter
        #[test]
        fn prop_dry_codes_reach_climate_estimate(
            code in dry_code_strategy(),
            latitude in latitude_strategy(),
            month0 in month_strategy(),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate =
                estimate_from_forecast(&series(latitude, vec![interval(code, None)]), month0, &mut rng)
                    .unwrap();

            prop_assert_eq!(estimate.source, RainfallSource::ClimateEstimate);

            let zone = ClimateZone::for_latitude(latitude);
            let base = monthly_normal_mm(zone, month0) / 30.0;
            prop_assert!(estimate.daily_total_mm > 0.0);
            prop_assert!(estimate.daily_total_mm >= base * 0.8);
            prop_assert!(estimate.daily_total_mm <= base * 1.2);
        }

        /// Every branch except the direct forecast sum extrapolates the
        /// monthly figure as daily x 30
        #[test]
        fn prop_monthly_is_thirty_days_off_forecast_path(
            code in prop_oneof![rainy_code_strategy(), dry_code_strategy()],
            latitude in latitude_strategy(),
            month0 in month_strategy(),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate =
                estimate_from_forecast(&series(latitude, vec![interval(code, None)]), month0, &mut rng)
                    .unwrap();
            prop_assert!((estimate.monthly_total_mm - estimate.daily_total_mm * 30.0).abs() < 1e-9);

            let current =
                estimate_from_current(&snapshot(latitude, code, None, None), month0, &mut rng);
            prop_assert!((current.monthly_total_mm - current.daily_total_mm * 30.0).abs() < 1e-9);
        }

        /// Observed precipitation windows convert to daily rates with the
        /// 3-hour figure taking precedence
        #[test]
        fn prop_observed_precipitation_conversion(
            rain_1h in proptest::option::of(rain_amount_strategy()),
            rain_3h in proptest::option::of(rain_amount_strategy()),
            seed in any::<u64>()
        ) {
            prop_assume!(rain_1h.is_some() || rain_3h.is_some());
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate =
                estimate_from_current(&snapshot(10.0, 800, rain_1h, rain_3h), 6, &mut rng);

            prop_assert_eq!(estimate.source, RainfallSource::CurrentConditionEstimate);
            let expected = match (rain_3h, rain_1h) {
                (Some(mm), _) => mm * 8.0,
                (None, Some(mm)) => mm * 24.0,
                _ => unreachable!(),
            };
            prop_assert!((estimate.daily_total_mm - expected).abs() < 1e-9);
        }

        /// Current-conditions climate fallback stays within jitter bounds of
        /// the typical-daily table
        #[test]
        fn prop_current_climate_bounds(
            latitude in latitude_strategy(),
            month0 in month_strategy(),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate =
                estimate_from_current(&snapshot(latitude, 800, None, None), month0, &mut rng);

            prop_assert_eq!(estimate.source, RainfallSource::ClimateEstimate);
            let base = typical_daily_mm(ClimateZone::for_latitude(latitude), month0);
            prop_assert!(estimate.daily_total_mm >= base * 0.8);
            prop_assert!(estimate.daily_total_mm <= base * 1.2);
        }

        /// Estimates never fail on structurally valid input and never go
        /// negative
        #[test]
        fn prop_current_estimate_total(
            latitude in latitude_strategy(),
            code in 0..900u16,
            month0 in month_strategy(),
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate =
                estimate_from_current(&snapshot(latitude, code, None, None), month0, &mut rng);

            prop_assert!(estimate.has_rainfall);
            prop_assert!(estimate.daily_total_mm >= 0.0);
            prop_assert!(estimate.monthly_total_mm >= 0.0);
        }
    }
}
