//! Trend aggregation across a batch of assessed fields

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assessment::{assess, AssessmentResult, FieldReading, HealthTier, RiskLevel};
use crate::profile::CropProfile;
use crate::{Error, Result};

/// Average score below which the batch is flagged as unhealthy
pub const LOW_HEALTH_AVERAGE: f64 = 60.0;

/// Number of fields per health tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

impl TierCounts {
    pub fn record(&mut self, tier: HealthTier) {
        match tier {
            HealthTier::Excellent => self.excellent += 1,
            HealthTier::Good => self.good += 1,
            HealthTier::Fair => self.fair += 1,
            HealthTier::Poor => self.poor += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.excellent + self.good + self.fair + self.poor
    }
}

/// Overall direction of the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendOutlook {
    OutbreakAlert,
    LowHealthWarning,
    Stable,
}

impl TrendOutlook {
    /// Outbreak wins when more than half the fields are high risk,
    /// otherwise a low average triggers the warning.
    pub fn classify(high_risk_count: usize, field_count: usize, average_score: f64) -> Self {
        if high_risk_count * 2 > field_count {
            TrendOutlook::OutbreakAlert
        } else if average_score < LOW_HEALTH_AVERAGE {
            TrendOutlook::LowHealthWarning
        } else {
            TrendOutlook::Stable
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            TrendOutlook::OutbreakAlert => "Alert: High disease risk in many fields! Act fast.",
            TrendOutlook::LowHealthWarning => {
                "Warning: Low overall health. Review remote sensing data."
            }
            TrendOutlook::Stable => "Trend: Most fields stable. Keep monitoring!",
        }
    }

    pub fn prediction(&self) -> &'static str {
        match self {
            TrendOutlook::OutbreakAlert => {
                "Disease outbreak likely soon—apply fungicides, improve drainage."
            }
            TrendOutlook::LowHealthWarning => "Crop yield may drop—adjust water or temp soon.",
            TrendOutlook::Stable => "Stable growth expected—continue current practices.",
        }
    }
}

/// Summary statistics over all assessed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub field_count: usize,
    pub average_score: f64,
    pub counts: TierCounts,
    pub high_risk_count: usize,
    pub outlook: TrendOutlook,
}

impl TrendSummary {
    /// Score every reading and aggregate the results
    pub fn from_readings(readings: &[FieldReading], profile: &CropProfile) -> Result<Self> {
        let results: Vec<AssessmentResult> = readings
            .iter()
            .map(|reading| assess(reading, profile))
            .collect();
        Self::from_results(&results)
    }

    /// Aggregate already-computed assessments
    pub fn from_results(results: &[AssessmentResult]) -> Result<Self> {
        if results.is_empty() {
            return Err(Error::InvalidInput("No data to analyze.".to_string()));
        }

        let mut counts = TierCounts::default();
        let mut total_score = 0.0;
        let mut high_risk_count = 0;

        for result in results {
            total_score += result.health_score;
            counts.record(result.health_tier);
            if result.risk == RiskLevel::High {
                high_risk_count += 1;
            }
        }

        let field_count = results.len();
        let average_score = total_score / field_count as f64;

        Ok(Self {
            field_count,
            average_score,
            counts,
            high_risk_count,
            outlook: TrendOutlook::classify(high_risk_count, field_count, average_score),
        })
    }

    pub fn narrative(&self) -> &'static str {
        self.outlook.narrative()
    }

    pub fn prediction(&self) -> &'static str {
        self.outlook.prediction()
    }
}

impl fmt::Display for TrendSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Health Score: {:.1}/100", self.average_score)?;
        writeln!(
            f,
            "Fields: {} Excellent, {} Good, {} Fair, {} Poor",
            self.counts.excellent, self.counts.good, self.counts.fair, self.counts.poor
        )?;
        writeln!(f, "{}", self.narrative())?;
        write!(f, "Prediction: {}", self.prediction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(moisture: f64, temperature: f64, veg: f64) -> FieldReading {
        FieldReading::new("Field", "Unknown", moisture, temperature, veg)
    }

    #[test]
    fn test_average_is_mean_of_scores() {
        let profile = CropProfile::CORN;
        let readings = vec![
            reading(60.0, 25.0, 7.0),
            reading(20.0, 10.0, 2.0),
            reading(90.0, 33.0, 9.5),
        ];

        let summary = TrendSummary::from_readings(&readings, &profile).unwrap();
        let expected: f64 = readings
            .iter()
            .map(|r| assess(r, &profile).health_score)
            .sum::<f64>()
            / readings.len() as f64;

        assert!((summary.average_score - expected).abs() < 1e-9);
        assert_eq!(summary.counts.total(), 3);
    }

    #[test]
    fn test_order_independent() {
        let profile = CropProfile::WHEAT;
        let mut readings = vec![
            reading(85.0, 22.0, 8.0),
            reading(30.0, 5.0, 1.0),
            reading(55.0, 18.0, 6.0),
            reading(70.0, 12.0, 4.0),
        ];
        let forward = TrendSummary::from_readings(&readings, &profile).unwrap();
        readings.reverse();
        let backward = TrendSummary::from_readings(&readings, &profile).unwrap();

        assert!((forward.average_score - backward.average_score).abs() < 1e-9);
        assert_eq!(forward.counts, backward.counts);
        assert_eq!(forward.high_risk_count, backward.high_risk_count);
        assert_eq!(forward.outlook, backward.outlook);
    }

    #[test]
    fn test_all_high_risk_is_outbreak() {
        let profile = CropProfile::WHEAT;
        for n in 1..=10 {
            let readings = vec![reading(95.0, 23.0, 10.0); n];
            let summary = TrendSummary::from_readings(&readings, &profile).unwrap();
            assert_eq!(summary.high_risk_count, n);
            assert_eq!(summary.outlook, TrendOutlook::OutbreakAlert);
        }
    }

    #[test]
    fn test_half_high_risk_is_not_outbreak() {
        assert_eq!(TrendOutlook::classify(1, 2, 90.0), TrendOutlook::Stable);
        assert_eq!(TrendOutlook::classify(2, 3, 90.0), TrendOutlook::OutbreakAlert);
    }

    #[test]
    fn test_low_average_without_high_risk_warns() {
        assert_eq!(TrendOutlook::classify(0, 4, 59.9), TrendOutlook::LowHealthWarning);
        assert_eq!(TrendOutlook::classify(0, 4, 60.0), TrendOutlook::Stable);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        assert!(matches!(
            TrendSummary::from_results(&[]),
            Err(Error::InvalidInput(_))
        ));
    }
}
