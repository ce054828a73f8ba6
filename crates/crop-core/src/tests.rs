//! Snapshot tests for the trend narrative

#[cfg(test)]
mod snapshot_tests {
    use crate::{CropProfile, FieldReading, TrendSummary};
    use insta::assert_snapshot;

    fn field(name: &str, moisture: f64, temperature: f64, veg: f64) -> FieldReading {
        FieldReading::new(name, "Unknown", moisture, temperature, veg)
    }

    #[test]
    fn test_stable_trend_snapshot() {
        let readings = vec![
            field("North", 50.0, 17.0, 5.0),
            field("East", 85.0, 22.0, 8.0),
            field("South", 20.0, 5.0, 3.0),
        ];
        let summary = TrendSummary::from_readings(&readings, &CropProfile::WHEAT).unwrap();

        assert_snapshot!(summary.to_string(), @r"
        Average Health Score: 63.4/100
        Fields: 1 Excellent, 1 Good, 0 Fair, 1 Poor
        Trend: Most fields stable. Keep monitoring!
        Prediction: Stable growth expected—continue current practices.
        ");
    }

    #[test]
    fn test_outbreak_trend_snapshot() {
        let readings = vec![
            field("Paddy 1", 95.0, 30.0, 9.0),
            field("Paddy 2", 95.0, 30.0, 9.0),
            field("Paddy 3", 72.0, 30.0, 6.0),
        ];
        let summary = TrendSummary::from_readings(&readings, &CropProfile::RICE).unwrap();

        assert_eq!(summary.high_risk_count, 2);
        assert_snapshot!(summary.to_string(), @r"
        Average Health Score: 88.6/100
        Fields: 2 Excellent, 1 Good, 0 Fair, 0 Poor
        Alert: High disease risk in many fields! Act fast.
        Prediction: Disease outbreak likely soon—apply fungicides, improve drainage.
        ");
    }

    #[test]
    fn test_low_health_trend_snapshot() {
        let readings = vec![field("Upland", 30.0, 15.0, 3.0)];
        let summary = TrendSummary::from_readings(&readings, &CropProfile::CORN).unwrap();

        assert_snapshot!(summary.to_string(), @r"
        Average Health Score: 41.0/100
        Fields: 0 Excellent, 0 Good, 1 Fair, 0 Poor
        Warning: Low overall health. Review remote sensing data.
        Prediction: Crop yield may drop—adjust water or temp soon.
        ");
    }
}
