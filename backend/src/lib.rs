//! Crop Advisory Platform - Backend Library
//!
//! Proxies the external weather provider, attaches rainfall estimates to the
//! normalized data, and forwards crop-recommendation requests to the
//! configured prediction model service.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{CropModelClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub crop_model: CropModelClient,
}

impl AppState {
    /// Build state (and the external clients) from configuration
    pub fn from_config(config: Config) -> Self {
        let weather = WeatherClient::from_config(&config.weather);
        let crop_model = CropModelClient::from_config(&config.model);
        Self {
            config: Arc::new(config),
            weather,
            crop_model,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Crop Advisory Platform API v1.0"
}
