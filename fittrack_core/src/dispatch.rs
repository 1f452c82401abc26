//! Dispatch from raw sensor packages to workout sessions.

use crate::workout::{RunningSession, SwimmingSession, WalkingSession, Workout};
use crate::{Error, Result, SensorPackage};

/// Workout-type code for swimming packages
pub const CODE_SWIMMING: &str = "SWM";
/// Workout-type code for running packages
pub const CODE_RUNNING: &str = "RUN";
/// Workout-type code for walking packages
pub const CODE_WALKING: &str = "WLK";

/// Build the session variant selected by the package's workout code.
///
/// Readings are positional: action count, duration in hours, weight in
/// kilograms, then any variant-specific trailing fields. Count-valued
/// readings are truncated to integers at this boundary. An unknown code
/// or a wrong reading count is an error, never silently tolerated.
pub fn build_session(package: &SensorPackage) -> Result<Box<dyn Workout>> {
    let readings = &package.readings;

    let session: Box<dyn Workout> = match package.code.as_str() {
        CODE_SWIMMING => {
            expect_readings(package, 5)?;
            Box::new(SwimmingSession::new(
                readings[0] as u32,
                readings[1],
                readings[2],
                readings[3],
                readings[4] as u32,
            ))
        }
        CODE_RUNNING => {
            expect_readings(package, 3)?;
            Box::new(RunningSession::new(
                readings[0] as u32,
                readings[1],
                readings[2],
            ))
        }
        CODE_WALKING => {
            expect_readings(package, 4)?;
            Box::new(WalkingSession::new(
                readings[0] as u32,
                readings[1],
                readings[2],
                readings[3],
            ))
        }
        _ => return Err(Error::UnknownWorkoutCode(package.code.clone())),
    };

    tracing::debug!(
        "Built {} session from code {}",
        session.kind(),
        package.code
    );
    Ok(session)
}

fn expect_readings(package: &SensorPackage, expected: usize) -> Result<()> {
    let got = package.readings.len();
    if got != expected {
        return Err(Error::ReadingCount {
            code: package.code.clone(),
            expected,
            got,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::sample_packages;

    #[test]
    fn test_codes_map_to_their_variants() {
        let run = build_session(&SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])).unwrap();
        let wlk =
            build_session(&SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0])).unwrap();
        let swm = build_session(&SensorPackage::new(
            "SWM",
            vec![720.0, 1.0, 80.0, 25.0, 40.0],
        ))
        .unwrap();

        assert_eq!(run.kind(), "Running");
        assert_eq!(wlk.kind(), "Walking");
        assert_eq!(swm.kind(), "Swimming");
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = build_session(&SensorPackage::new("XYZ", vec![1.0, 1.0, 1.0])).unwrap_err();

        assert!(matches!(err, Error::UnknownWorkoutCode(code) if code == "XYZ"));
    }

    #[test]
    fn test_reading_count_mismatch_is_rejected() {
        let short = build_session(&SensorPackage::new("RUN", vec![15000.0, 1.0])).unwrap_err();
        let long = build_session(&SensorPackage::new(
            "WLK",
            vec![9000.0, 1.0, 75.0, 180.0, 5.0],
        ))
        .unwrap_err();

        assert!(matches!(
            short,
            Error::ReadingCount {
                expected: 3,
                got: 2,
                ..
            }
        ));
        assert!(matches!(
            long,
            Error::ReadingCount {
                expected: 4,
                got: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_sample_packages_all_dispatch() {
        for package in sample_packages() {
            let session = build_session(package).unwrap();
            session.summary().unwrap();
        }
    }

    #[test]
    fn test_dispatched_running_scenario() {
        let session = build_session(&SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])).unwrap();
        let report = session.summary().unwrap();

        assert!((report.distance_km - 9.75).abs() < 1e-9);
        assert!((report.mean_speed_kmh - 9.75).abs() < 1e-9);
        assert!((report.calories_kcal - 699.75).abs() < 1e-9);
    }
}
