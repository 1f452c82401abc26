//! Core domain types for the fittrack system.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One raw sensor package: a workout-type code plus its readings.
///
/// Readings are positional and unpacked in declared order by the
/// dispatcher. Count-valued readings (actions, pool laps) travel as
/// floats in the payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub code: String,
    pub readings: Vec<f64>,
}

impl SensorPackage {
    pub fn new(code: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            readings,
        }
    }
}

/// Cached demo payload - built once and reused across all operations
static SAMPLE_PACKAGES: Lazy<Vec<SensorPackage>> = Lazy::new(build_sample_packages);

/// Get the built-in demo packages, one per workout type
pub fn sample_packages() -> &'static [SensorPackage] {
    &SAMPLE_PACKAGES
}

fn build_sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_from_json_line() {
        let package: SensorPackage =
            serde_json::from_str(r#"{"code":"RUN","readings":[15000,1,75]}"#).unwrap();

        assert_eq!(package.code, "RUN");
        assert_eq!(package.readings, vec![15000.0, 1.0, 75.0]);
    }

    #[test]
    fn test_sample_packages_cover_all_codes() {
        let codes: Vec<_> = sample_packages().iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }
}
