//! External API integrations

pub mod crop_model;
pub mod weather;

pub use crop_model::CropModelClient;
pub use weather::WeatherClient;
