#![forbid(unsafe_code)]

//! Core domain model and business logic for the fittrack workout
//! calculator.
//!
//! This crate provides:
//! - Domain types (sensor packages, reports)
//! - The workout model (distance, mean speed, calorie formulas)
//! - Dispatch from workout-type codes to session variants
//! - Report rendering

pub mod types;
pub mod error;
pub mod workout;
pub mod dispatch;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{sample_packages, SensorPackage};
pub use config::Config;
pub use dispatch::build_session;
pub use report::SessionReport;
pub use workout::{RunningSession, SwimmingSession, WalkingSession, Workout};
