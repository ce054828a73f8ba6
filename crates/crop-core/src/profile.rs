//! Crop profiles - the fixed agronomic thresholds per supported crop

use serde::{Deserialize, Serialize};

/// Inclusive acceptable temperature band in °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempRange {
    pub low: f64,
    pub high: f64,
}

impl TempRange {
    /// Check whether a temperature lies inside the band, bounds included
    pub fn contains(&self, temperature: f64) -> bool {
        self.low <= temperature && temperature <= self.high
    }

    /// Distance to the nearest bound; zero inside the band
    pub fn distance(&self, temperature: f64) -> f64 {
        if self.contains(temperature) {
            0.0
        } else {
            (temperature - self.low)
                .abs()
                .min((temperature - self.high).abs())
        }
    }
}

/// Moisture (%) and temperature (°C) above which fungal disease is likely
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseThresholds {
    pub moisture: f64,
    pub temperature: f64,
}

/// Immutable per-crop policy table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub moisture_min: f64,
    pub temp_range: TempRange,
    pub veg_min: f64,
    pub disease_risk: DiseaseThresholds,
}

impl CropProfile {
    pub const WHEAT: CropProfile = CropProfile {
        name: "Wheat",
        moisture_min: 40.0,
        temp_range: TempRange { low: 10.0, high: 25.0 },
        veg_min: 5.0,
        disease_risk: DiseaseThresholds {
            moisture: 80.0,
            temperature: 20.0,
        },
    };

    pub const CORN: CropProfile = CropProfile {
        name: "Corn",
        moisture_min: 50.0,
        temp_range: TempRange { low: 20.0, high: 35.0 },
        veg_min: 5.0,
        disease_risk: DiseaseThresholds {
            moisture: 85.0,
            temperature: 30.0,
        },
    };

    pub const RICE: CropProfile = CropProfile {
        name: "Rice",
        moisture_min: 70.0,
        temp_range: TempRange { low: 25.0, high: 35.0 },
        veg_min: 6.0,
        disease_risk: DiseaseThresholds {
            moisture: 90.0,
            temperature: 28.0,
        },
    };

    /// All supported crops in menu order (menu numbers start at 1)
    pub const ALL: [CropProfile; 3] = [Self::WHEAT, Self::CORN, Self::RICE];

    /// Look up a crop by its 1-based menu number
    pub fn from_choice(choice: i64) -> Option<CropProfile> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Self::ALL.get(idx).copied())
    }
}
