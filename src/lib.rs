//! Fixierun - Move-to-Earn Cycling Tracker
//!
//! The tracking core of a move-to-earn cycling application. Records workouts
//! from a stream of geolocation fixes, derives live metrics (distance, speed,
//! calories, FIXIE reward tokens), persists completed workouts to a local
//! history, and folds that history into lifetime statistics, personal records,
//! ecological estimates, and a daily streak.

pub mod display;
pub mod geo;
pub mod goals;
pub mod location;
pub mod stats;
pub mod storage;
pub mod tracker;

// Re-export commonly used types
pub use location::types::{LocationUpdate, PositionSample};
pub use stats::aggregator::summarize;
pub use storage::state::AppState;
pub use tracker::session::WorkoutTracker;
pub use tracker::types::{TrackerEvent, TrackerStatus};
