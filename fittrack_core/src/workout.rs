//! Workout model: the shared session contract and its three variants.
//!
//! Running and Walking share the step-based distance and speed
//! computations. Swimming swaps the per-action length for its stroke
//! length and replaces the speed formula with the pool-based one.
//! Calorie formulas are fully per-variant.

use crate::report::SessionReport;
use crate::{Error, Result};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Distance covered per step, in meters
const STEP_LEN_M: f64 = 0.65;

/// Shared contract for one recorded workout session.
///
/// Sessions are constructed once from sensor readings, computed, and
/// discarded after their report is produced. `spent_calories` has no
/// usable default: every variant must override it, and reaching the
/// default body is an error naming the offending variant.
pub trait Workout {
    /// Display name of the workout variant
    fn kind(&self) -> &'static str;

    /// Number of actions (steps or strokes) recorded by the sensor
    fn action_count(&self) -> u32;

    /// Session duration in hours
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Distance covered per action, in meters
    fn action_len_m(&self) -> f64 {
        STEP_LEN_M
    }

    /// Total distance covered over the session, in kilometers
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.action_len_m() / M_IN_KM
    }

    /// Mean speed over the session, in km/h
    fn mean_speed_kmh(&self) -> Result<f64> {
        if self.duration_h() == 0.0 {
            return Err(Error::ZeroDuration);
        }
        Ok(self.distance_km() / self.duration_h())
    }

    /// Energy spent over the session, in kcal
    fn spent_calories(&self) -> Result<f64> {
        Err(Error::CaloriesUnsupported { kind: self.kind() })
    }

    /// Assemble the read-only report for this session
    fn summary(&self) -> Result<SessionReport> {
        Ok(SessionReport {
            kind: self.kind().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh()?,
            calories_kcal: self.spent_calories()?,
        })
    }
}

impl std::fmt::Debug for dyn Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workout")
            .field("kind", &self.kind())
            .finish()
    }
}

/// Running session: step-based distance and speed.
#[derive(Clone, Debug)]
pub struct RunningSession {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl RunningSession {
    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Workout for RunningSession {
    fn kind(&self) -> &'static str {
        "Running"
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok((Self::SPEED_FACTOR * speed - Self::SPEED_SHIFT) * self.weight_kg / M_IN_KM
            * self.duration_h
            * MIN_IN_H)
    }
}

/// Walking session: step-based movement with a height-dependent
/// calorie term.
#[derive(Clone, Debug)]
pub struct WalkingSession {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl WalkingSession {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Workout for WalkingSession {
    fn kind(&self) -> &'static str {
        "Walking"
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        // speed² is floor-divided by height, not truly divided
        let speed_term = (speed.powi(2) / self.height_cm).floor();
        Ok((Self::WEIGHT_FACTOR * self.weight_kg
            + speed_term * Self::SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MIN_IN_H)
    }
}

/// Swimming session: stroke-based distance, pool-based speed.
#[derive(Clone, Debug)]
pub struct SwimmingSession {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    pool_len_m: f64,
    pool_laps: u32,
}

impl SwimmingSession {
    const STROKE_LEN_M: f64 = 1.38;
    const SPEED_OFFSET: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_len_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_len_m,
            pool_laps,
        }
    }
}

impl Workout for SwimmingSession {
    fn kind(&self) -> &'static str {
        "Swimming"
    }

    fn action_count(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn action_len_m(&self) -> f64 {
        Self::STROKE_LEN_M
    }

    fn mean_speed_kmh(&self) -> Result<f64> {
        if self.duration_h == 0.0 {
            return Err(Error::ZeroDuration);
        }
        Ok(self.pool_len_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_h)
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        Ok((speed + Self::SPEED_OFFSET) * Self::WEIGHT_FACTOR * self.weight_kg)
    }
}
