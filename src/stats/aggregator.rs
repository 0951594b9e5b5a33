//! Pure fold over the workout history.
//!
//! The aggregator has no state of its own; the current time is an explicit
//! parameter so every figure is deterministic and testable without touching
//! the clock.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::stats::types::{EcologicalImpact, StatsSummary, UrbanGrade};
use crate::tracker::types::WorkoutRecord;

/// How far back the streak walk looks, in days.
const STREAK_LOOKBACK_DAYS: i64 = 30;

/// Fold the history into summary statistics.
///
/// `total_tokens` is the lifetime balance carried in the persisted state;
/// it can exceed the sum over the (capped) history.
pub fn summarize(
    history: &[WorkoutRecord],
    total_tokens: f64,
    now: DateTime<Utc>,
) -> StatsSummary {
    let total_workouts = history.len();
    let total_distance_km: f64 = history.iter().map(|r| r.distance_km).sum();
    let total_duration_seconds: u64 = history.iter().map(|r| u64::from(r.duration_seconds)).sum();

    let average_distance_km = if total_workouts == 0 {
        0.0
    } else {
        total_distance_km / total_workouts as f64
    };

    let week_ago = now - Duration::days(7);
    let weekly_tokens: f64 = history
        .iter()
        .filter(|r| r.started_at > week_ago)
        .map(|r| r.tokens)
        .sum();

    let tokens_per_km = if total_distance_km > 0.0 {
        total_tokens / total_distance_km
    } else {
        0.0
    };

    StatsSummary {
        total_workouts,
        total_distance_km,
        total_duration_seconds,
        average_distance_km,
        weekly_tokens,
        tokens_per_km,
        grade: UrbanGrade::from_tokens_per_km(tokens_per_km),
        ecological: EcologicalImpact::from_distance(total_distance_km),
        streak_days: streak_days(history, now.date_naive()),
    }
}

/// Count consecutive calendar days with at least one workout, walking
/// backward from `today`.
///
/// An empty today never breaks the streak; the walk stops at the first gap
/// otherwise, and never looks further back than 30 days.
pub fn streak_days(history: &[WorkoutRecord], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = history.iter().map(|r| r.date).collect();

    let mut streak = 0;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if days.contains(&day) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }
    streak
}
