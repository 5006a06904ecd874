//! Validation utilities for the Crop Advisory Platform

// ============================================================================
// Location Validations
// ============================================================================

/// Validate a latitude in degrees
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() {
        return Err("Latitude must be a finite number");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90 degrees");
    }
    Ok(())
}

/// Validate a longitude in degrees
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !longitude.is_finite() {
        return Err("Longitude must be a finite number");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180 degrees");
    }
    Ok(())
}

/// Validate a city search term before passing it to the weather provider
pub fn validate_city_name(city: &str) -> Result<(), &'static str> {
    let trimmed = city.trim();
    if trimmed.is_empty() {
        return Err("City name must not be empty");
    }
    if trimmed.len() > 128 {
        return Err("City name must be at most 128 characters");
    }
    Ok(())
}
