//! Business logic services for the Crop Advisory Platform

pub mod recommendation;
pub mod weather;

pub use recommendation::RecommendationService;
pub use weather::WeatherService;
