#![forbid(unsafe_code)]

//! Core domain model and business logic for the Liftday system.
//!
//! This crate provides:
//! - Domain types (workouts, exercises, sets, user profile)
//! - The seeded workout catalog
//! - The application store
//! - The weekly schedule resolver
//! - The active workout session engine and its countdown timers

pub mod types;
pub mod error;
pub mod profile;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod store;
pub mod schedule;
pub mod timer;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_catalog, Catalog};
pub use config::Config;
pub use store::{default_user, AppStore};
pub use schedule::{plan_for_day, week_days, week_range_label, workout_for_day, WorkoutDay};
pub use timer::{format_time, Countdown, TickOutcome};
pub use session::{ActiveSession, FinishOutcome, SessionTick, DEFAULT_TIMER_SECONDS, REST_SECONDS};
