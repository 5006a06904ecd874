//! Latitude-zone climate normals used as the last estimation fallback

use serde::{Deserialize, Serialize};

/// Coarse latitude-based climate classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Temperate,
    Subtropical,
    Tropical,
}

impl ClimateZone {
    /// Classify a latitude by absolute value: temperate above 40°,
    /// subtropical above 23°, tropical otherwise
    pub fn for_latitude(latitude: f64) -> Self {
        let abs = latitude.abs();
        if abs > 40.0 {
            ClimateZone::Temperate
        } else if abs > 23.0 {
            ClimateZone::Subtropical
        } else {
            ClimateZone::Tropical
        }
    }
}

/// Monthly rainfall normals (mm/month), indexed by zone then month (0 = January)
const MONTHLY_NORMAL_MM: [[f64; 12]; 3] = [
    // Temperate
    [
        80.0, 70.0, 65.0, 60.0, 55.0, 50.0, 45.0, 50.0, 55.0, 65.0, 75.0, 80.0,
    ],
    // Subtropical
    [
        40.0, 45.0, 50.0, 55.0, 60.0, 30.0, 20.0, 25.0, 30.0, 40.0, 45.0, 40.0,
    ],
    // Tropical
    [
        20.0, 30.0, 50.0, 70.0, 120.0, 180.0, 200.0, 190.0, 150.0, 100.0, 60.0, 30.0,
    ],
];

/// Typical daily rainfall (mm/day), indexed by zone then month (0 = January)
const TYPICAL_DAILY_MM: [[f64; 12]; 3] = [
    // Temperate
    [2.5, 2.3, 2.1, 2.0, 1.8, 1.7, 1.5, 1.7, 1.8, 2.1, 2.3, 2.5],
    // Subtropical
    [1.3, 1.5, 1.7, 1.8, 2.0, 1.0, 0.7, 0.8, 1.0, 1.3, 1.5, 1.3],
    // Tropical
    [0.7, 1.0, 1.7, 2.3, 4.0, 6.0, 6.7, 6.3, 5.0, 3.3, 2.0, 1.0],
];

/// Monthly rainfall normal for a zone and month index (0 = January)
pub fn monthly_normal_mm(zone: ClimateZone, month0: u32) -> f64 {
    MONTHLY_NORMAL_MM[zone as usize][(month0 % 12) as usize]
}

/// Typical daily rainfall for a zone and month index (0 = January)
pub fn typical_daily_mm(zone: ClimateZone, month0: u32) -> f64 {
    TYPICAL_DAILY_MM[zone as usize][(month0 % 12) as usize]
}
