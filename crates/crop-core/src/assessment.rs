//! Scoring engine - maps one field's readings and a crop profile to a health assessment

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profile::CropProfile;

/// Maximum contribution of soil moisture to the health score
pub const MOISTURE_WEIGHT: f64 = 35.0;
/// Contribution of temperature when inside the crop's acceptable band
pub const TEMPERATURE_WEIGHT: f64 = 30.0;
/// Points lost per °C outside the acceptable band
pub const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 2.0;
/// Points per vegetation-score unit (35 at the maximum of 10)
pub const VEGETATION_FACTOR: f64 = 3.5;

/// Moisture offset below the disease threshold that already counts as moderate risk
pub const MODERATE_MOISTURE_MARGIN: f64 = 10.0;
/// Temperature offset below the disease threshold that already counts as moderate risk
pub const MODERATE_TEMPERATURE_MARGIN: f64 = 5.0;

pub const DEFAULT_LOCATION: &str = "Unknown";

/// Manual sensor readings for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReading {
    pub field_name: String,
    pub location: String,
    /// Soil moisture, 0-100 %
    pub moisture: f64,
    /// Average temperature, -50 to 50 °C
    pub temperature: f64,
    /// Remote-sensing vegetation score, 0-10
    pub vegetation_score: f64,
}

impl FieldReading {
    pub fn new(
        field_name: impl Into<String>,
        location: impl Into<String>,
        moisture: f64,
        temperature: f64,
        vegetation_score: f64,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            location: location.into(),
            moisture,
            temperature,
            vegetation_score,
        }
    }

    /// Name used when the user leaves the field name blank (`index` is 0-based)
    pub fn default_name(index: usize) -> String {
        format!("Field {}", index + 1)
    }
}

/// Health band derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthTier::Excellent
        } else if score >= 60.0 {
            HealthTier::Good
        } else if score >= 40.0 {
            HealthTier::Fair
        } else {
            HealthTier::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent",
            HealthTier::Good => "Good",
            HealthTier::Fair => "Fair",
            HealthTier::Poor => "Poor",
        }
    }
}

impl fmt::Display for HealthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Disease risk rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Rate disease risk against the crop's thresholds; High is checked first
    pub fn evaluate(moisture: f64, temperature: f64, profile: &CropProfile) -> Self {
        let thresholds = profile.disease_risk;
        if moisture > thresholds.moisture && temperature > thresholds.temperature {
            RiskLevel::High
        } else if moisture > thresholds.moisture - MODERATE_MOISTURE_MARGIN
            || temperature > thresholds.temperature - MODERATE_TEMPERATURE_MARGIN
        {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Label with the advisory suffix shown to users
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate - Monitor for pests or rot.",
            RiskLevel::High => "High - Risk of fungal disease! Act fast.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Assessment of a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub field_name: String,
    pub location: String,
    pub moisture: f64,
    pub temperature: f64,
    pub vegetation_score: f64,
    /// Always within 0-100
    pub health_score: f64,
    pub health_tier: HealthTier,
    pub tip: String,
    pub risk: RiskLevel,
}

/// Weighted health score in 0-100
pub fn health_score(
    moisture: f64,
    temperature: f64,
    vegetation_score: f64,
    profile: &CropProfile,
) -> f64 {
    let moisture_component = moisture / 100.0 * MOISTURE_WEIGHT;
    let temperature_component = (TEMPERATURE_WEIGHT
        - TEMPERATURE_PENALTY_PER_DEGREE * profile.temp_range.distance(temperature))
    .max(0.0);
    let vegetation_component = vegetation_score * VEGETATION_FACTOR;

    moisture_component + temperature_component + vegetation_component
}

/// Care tip for a tier. For Poor fields the first failing condition wins:
/// moisture, then temperature, then vegetation.
pub fn select_tip(tier: HealthTier, moisture: f64, temperature: f64, profile: &CropProfile) -> String {
    match tier {
        HealthTier::Excellent => "Perfect conditions! Crops thriving.".to_string(),
        HealthTier::Good => "Solid growth! Monitor for improvements.".to_string(),
        HealthTier::Fair => "Needs work. Check soil, temp, or vegetation.".to_string(),
        HealthTier::Poor => {
            let action = if moisture < profile.moisture_min {
                "Add water"
            } else if !profile.temp_range.contains(temperature) {
                "Adjust temperature"
            } else {
                "Boost vegetation"
            };
            format!("Urgent! {} for {}.", action, profile.name)
        }
    }
}

/// Run the scoring engine over one reading
pub fn assess(reading: &FieldReading, profile: &CropProfile) -> AssessmentResult {
    let score = health_score(
        reading.moisture,
        reading.temperature,
        reading.vegetation_score,
        profile,
    );
    let tier = HealthTier::from_score(score);

    AssessmentResult {
        field_name: reading.field_name.clone(),
        location: reading.location.clone(),
        moisture: reading.moisture,
        temperature: reading.temperature,
        vegetation_score: reading.vegetation_score,
        health_score: score,
        health_tier: tier,
        tip: select_tip(tier, reading.moisture, reading.temperature, profile),
        risk: RiskLevel::evaluate(reading.moisture, reading.temperature, profile),
    }
}

/// Echo a reading the way users typed it, keeping one decimal for whole numbers
pub fn format_reading(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat(moisture: f64, temperature: f64, veg: f64) -> AssessmentResult {
        assess(
            &FieldReading::new("North", "West Farm", moisture, temperature, veg),
            &CropProfile::WHEAT,
        )
    }

    #[test]
    fn test_wheat_reference_field() {
        let result = wheat(50.0, 17.0, 5.0);
        assert_eq!(result.health_score, 65.0);
        assert_eq!(result.health_tier, HealthTier::Good);
        assert_eq!(result.tip, "Solid growth! Monitor for improvements.");
        // 17 °C is above Wheat's 20 °C threshold minus the 5 °C margin
        assert_eq!(result.risk, RiskLevel::Moderate);
    }

    #[test]
    fn test_perfect_score_for_every_crop() {
        for profile in CropProfile::ALL {
            let inside = (profile.temp_range.low + profile.temp_range.high) / 2.0;
            assert_eq!(health_score(100.0, inside, 10.0, &profile), 100.0);
            assert_eq!(health_score(100.0, profile.temp_range.low, 10.0, &profile), 100.0);
            assert_eq!(health_score(100.0, profile.temp_range.high, 10.0, &profile), 100.0);
        }
    }

    #[test]
    fn test_score_stays_in_bounds() {
        for profile in CropProfile::ALL {
            for moisture in [0.0, 12.5, 50.0, 99.9, 100.0] {
                for temperature in [-50.0, -10.0, 0.0, 15.5, 27.0, 40.0, 50.0] {
                    for veg in [0.0, 2.5, 5.0, 10.0] {
                        let score = health_score(moisture, temperature, veg, &profile);
                        assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_penalty_floors_at_zero() {
        // 5 °C below Wheat's band costs 10 points
        assert_eq!(health_score(0.0, 5.0, 0.0, &CropProfile::WHEAT), 20.0);
        assert_eq!(health_score(0.0, -50.0, 0.0, &CropProfile::WHEAT), 0.0);
        assert_eq!(health_score(0.0, 50.0, 0.0, &CropProfile::WHEAT), 0.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(HealthTier::from_score(100.0), HealthTier::Excellent);
        assert_eq!(HealthTier::from_score(80.0), HealthTier::Excellent);
        assert_eq!(HealthTier::from_score(79.99), HealthTier::Good);
        assert_eq!(HealthTier::from_score(60.0), HealthTier::Good);
        assert_eq!(HealthTier::from_score(59.9), HealthTier::Fair);
        assert_eq!(HealthTier::from_score(40.0), HealthTier::Fair);
        assert_eq!(HealthTier::from_score(39.99), HealthTier::Poor);
        assert_eq!(HealthTier::from_score(0.0), HealthTier::Poor);
    }

    #[test]
    fn test_high_risk_needs_both_conditions() {
        let profile = CropProfile::WHEAT;
        assert_eq!(RiskLevel::evaluate(81.0, 21.0, &profile), RiskLevel::High);
        // only moisture above threshold
        assert_eq!(RiskLevel::evaluate(81.0, 10.0, &profile), RiskLevel::Moderate);
        // only temperature above threshold
        assert_eq!(RiskLevel::evaluate(30.0, 21.0, &profile), RiskLevel::Moderate);
        // thresholds are strict
        assert_eq!(RiskLevel::evaluate(80.0, 20.0, &profile), RiskLevel::Moderate);
    }

    #[test]
    fn test_moderate_margins() {
        let profile = CropProfile::CORN;
        assert_eq!(RiskLevel::evaluate(75.0, 25.0, &profile), RiskLevel::Low);
        assert_eq!(RiskLevel::evaluate(75.1, 0.0, &profile), RiskLevel::Moderate);
        assert_eq!(RiskLevel::evaluate(0.0, 25.1, &profile), RiskLevel::Moderate);
    }

    #[test]
    fn test_poor_tip_priority() {
        // moisture below minimum wins even when temperature is also out of range
        let dry_and_cold = wheat(10.0, -20.0, 0.0);
        assert_eq!(dry_and_cold.health_tier, HealthTier::Poor);
        assert_eq!(dry_and_cold.tip, "Urgent! Add water for Wheat.");

        let cold = wheat(45.0, -20.0, 0.0);
        assert_eq!(cold.health_tier, HealthTier::Poor);
        assert_eq!(cold.tip, "Urgent! Adjust temperature for Wheat.");

        // adequate moisture inside the band always scores at least Fair, so
        // the vegetation branch is only reachable through select_tip directly
        assert_eq!(
            select_tip(HealthTier::Poor, 72.0, 30.0, &CropProfile::RICE),
            "Urgent! Boost vegetation for Rice."
        );
    }

    #[test]
    fn test_risk_descriptions() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate - Monitor for pests or rot.");
        assert_eq!(RiskLevel::High.to_string(), "High - Risk of fungal disease! Act fast.");
        assert_eq!(RiskLevel::High.label(), "High");
    }

    #[test]
    fn test_format_reading() {
        assert_eq!(format_reading(50.0), "50.0");
        assert_eq!(format_reading(17.5), "17.5");
        assert_eq!(format_reading(-3.0), "-3.0");
        assert_eq!(format_reading(0.25), "0.25");
    }

    #[test]
    fn test_default_field_name() {
        assert_eq!(FieldReading::default_name(0), "Field 1");
        assert_eq!(FieldReading::default_name(9), "Field 10");
    }
}
