//! Route definitions for the Crop Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather proxy
        .nest("/weather", weather_routes())
        // Crop recommendations
        .route("/recommendations", post(handlers::recommend_crop))
}

/// Weather proxy routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        // Current conditions by coordinates
        .route("/current", get(handlers::get_current_weather))
        // Current conditions by searched city
        .route("/city", get(handlers::get_city_weather))
        // Forecast by coordinates or city
        .route("/forecast", get(handlers::get_weather_forecast))
}
