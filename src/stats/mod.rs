//! Lifetime statistics derived from the workout history.

pub mod aggregator;
pub mod types;

pub use aggregator::{streak_days, summarize};
pub use types::{EcologicalImpact, StatsSummary, UrbanGrade};
