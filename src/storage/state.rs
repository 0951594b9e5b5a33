//! Persisted application state.
//!
//! Everything the app remembers between runs lives in one JSON document:
//! the workout history (newest first), personal records, lifetime token
//! balance, and today's accumulation bucket. There is no schema version
//! field; readers substitute zeroed defaults for anything missing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::tracker::types::WorkoutRecord;

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// The single persisted state document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Completed workouts, newest first
    #[serde(default)]
    pub workout_history: Vec<WorkoutRecord>,
    /// All-time personal records
    #[serde(default)]
    pub personal_records: PersonalRecords,
    /// Lifetime FIXIE token balance
    #[serde(default)]
    pub total_tokens: f64,
    /// Accumulation bucket for the current calendar day
    #[serde(default)]
    pub today_stats: TodayStats,
    /// When the document was last written
    #[serde(default = "epoch")]
    pub last_saved: DateTime<Utc>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            workout_history: Vec::new(),
            personal_records: PersonalRecords::default(),
            total_tokens: 0.0,
            today_stats: TodayStats::default(),
            last_saved: epoch(),
        }
    }
}

impl AppState {
    /// Fold a completed workout into the state.
    ///
    /// Prepends the record to the history (trimmed to `history_cap`), adds its
    /// tokens to the lifetime balance, and updates personal records and the
    /// today bucket.
    pub fn record_workout(&mut self, record: WorkoutRecord, history_cap: usize) {
        self.total_tokens += record.tokens;
        self.personal_records.absorb(&record);
        self.today_stats.absorb(&record);
        self.workout_history.insert(0, record);
        self.workout_history.truncate(history_cap);
    }
}

/// All-time personal records, folded from completed workouts.
///
/// Each field is the elementwise maximum over the history and never
/// decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecords {
    /// Longest single-workout distance in km
    #[serde(default)]
    pub longest_distance_km: f64,
    /// Fastest recorded speed in km/h
    #[serde(default)]
    pub fastest_speed_kmh: f64,
    /// Longest single-workout duration in seconds
    #[serde(default)]
    pub longest_duration_seconds: u32,
    /// Most calories burned in a single workout
    #[serde(default)]
    pub most_calories: u32,
}

impl PersonalRecords {
    /// Raise each record to the new workout's value where it is higher.
    pub fn absorb(&mut self, record: &WorkoutRecord) {
        self.longest_distance_km = self.longest_distance_km.max(record.distance_km);
        self.fastest_speed_kmh = self.fastest_speed_kmh.max(record.max_speed_kmh);
        self.longest_duration_seconds = self.longest_duration_seconds.max(record.duration_seconds);
        self.most_calories = self.most_calories.max(record.calories);
    }
}

/// Accumulated totals for a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TodayStats {
    /// The day this bucket covers
    pub date: NaiveDate,
    /// Distance covered in km
    #[serde(default)]
    pub distance_km: f64,
    /// Time spent working out in seconds
    #[serde(default)]
    pub duration_seconds: u32,
    /// Calories burned
    #[serde(default)]
    pub calories: u32,
    /// Tokens earned
    #[serde(default)]
    pub tokens: f64,
}

impl Default for TodayStats {
    fn default() -> Self {
        Self::for_day(NaiveDate::MIN)
    }
}

impl TodayStats {
    /// An empty bucket for the given day.
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            date,
            distance_km: 0.0,
            duration_seconds: 0,
            calories: 0,
            tokens: 0.0,
        }
    }

    /// Fold a completed workout into the bucket.
    ///
    /// A record dated after the bucket's day rolls the bucket over to that
    /// day first; a record from an earlier day is ignored.
    pub fn absorb(&mut self, record: &WorkoutRecord) {
        if record.date > self.date {
            *self = Self::for_day(record.date);
        }
        if record.date == self.date {
            self.distance_km += record.distance_km;
            self.duration_seconds += record.duration_seconds;
            self.calories += record.calories;
            self.tokens += record.tokens;
        }
    }
}
