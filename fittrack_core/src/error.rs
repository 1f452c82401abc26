//! Error types for the fittrack_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fittrack_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Workout-type code not recognized by the dispatcher
    #[error("unknown workout code: {0}")]
    UnknownWorkoutCode(String),

    /// Sensor package carried the wrong number of readings for its code
    #[error("workout {code} expects {expected} readings, got {got}")]
    ReadingCount {
        code: String,
        expected: usize,
        got: usize,
    },

    /// Calorie computation reached the shared contract's default body
    #[error("calorie formula not implemented for {kind}")]
    CaloriesUnsupported { kind: &'static str },

    /// Session duration is zero, so speed and calories are undefined
    #[error("session duration is zero")]
    ZeroDuration,

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
