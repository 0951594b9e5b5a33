//! Workout session tracking.

pub mod session;
pub mod types;

pub use session::WorkoutTracker;
pub use types::{
    TrackerConfig, TrackerEvent, TrackerStatus, WorkoutRecord, WorkoutSession, WorkoutType,
};
