//! Session report: the rendered, read-only summary of a computed
//! session.

use serde::{Deserialize, Serialize};

/// Read-only view of one computed workout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionReport {
    pub kind: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl SessionReport {
    /// Render the one-line human-readable summary.
    ///
    /// Every numeric field is printed with exactly three decimals,
    /// regardless of magnitude.
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swim_report() -> SessionReport {
        SessionReport {
            kind: "Swimming".into(),
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        }
    }

    #[test]
    fn test_message_uses_three_decimals() {
        let message = swim_report().message();

        assert_eq!(
            message,
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg. speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_whole_numbers_keep_trailing_zeros() {
        let mut report = swim_report();
        report.distance_km = 1.0;

        assert!(report.message().contains("Distance: 1.000 km"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let json = serde_json::to_string(&swim_report()).unwrap();

        assert!(json.contains(r#""kind":"Swimming""#));
        assert!(json.contains(r#""calories_kcal":336.0"#));
    }
}
