//! Workout tracking types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::RoutePoint;
use crate::location::types::PositionSample;
use crate::location::DEFAULT_CENTER;

/// Status of the workout tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerStatus {
    /// No workout in progress
    #[default]
    Idle,
    /// Actively tracking a workout
    Active,
    /// Workout paused; elapsed time does not accrue
    Paused,
    /// Last workout completed; `Start` begins a fresh session
    Stopped,
}

/// An event consumed by the tracker's transition function.
///
/// All three external callback sources (user actions, the periodic timer,
/// and the location stream) are funneled through this one type, with the
/// current time carried explicitly so the tracker never reads the clock.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// Begin a new workout session
    Start { now: DateTime<Utc> },
    /// A geolocation fix arrived
    Position(PositionSample),
    /// One-second periodic timer fired
    Tick { now: DateTime<Utc> },
    /// Pause the running workout
    Pause { now: DateTime<Utc> },
    /// Resume a paused workout
    Resume { now: DateTime<Utc> },
    /// Finish the workout and persist a record
    Stop { now: DateTime<Utc> },
    /// Close the live view, stopping first if still in progress
    Close { now: DateTime<Utc> },
}

/// The in-progress, mutable workout being tracked.
///
/// Owned exclusively by the tracker and mutated only while active; converted
/// into a [`WorkoutRecord`] on stop.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// Elapsed time in seconds, excluding paused intervals
    pub elapsed_seconds: u32,
    /// Cumulative distance in km over accepted fixes
    pub distance_km: f64,
    /// Most recent instantaneous speed in km/h
    pub current_speed_kmh: f64,
    /// Calorie estimate
    pub calories: u32,
    /// Token estimate
    pub tokens: f64,
    /// Accepted route points, in order
    pub route: Vec<RoutePoint>,
    /// When the current pause began, if paused
    pub paused_at: Option<DateTime<Utc>>,
    /// Total seconds spent paused in completed pause intervals
    pub paused_seconds: i64,
}

impl WorkoutSession {
    /// Start a fresh session at the given time.
    pub fn begin(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            elapsed_seconds: 0,
            distance_km: 0.0,
            current_speed_kmh: 0.0,
            calories: 0,
            tokens: 0.0,
            route: Vec::new(),
            paused_at: None,
            paused_seconds: 0,
        }
    }

    /// Elapsed seconds at `now`, excluding completed and ongoing pauses.
    pub fn elapsed_seconds_at(&self, now: DateTime<Utc>) -> u32 {
        let mut seconds = (now - self.started_at).num_seconds() - self.paused_seconds;
        if let Some(paused_at) = self.paused_at {
            seconds -= (now - paused_at).num_seconds();
        }
        seconds.max(0) as u32
    }

    /// Recompute the derived live fields from the wall clock.
    pub fn refresh_derived(&mut self, now: DateTime<Utc>, config: &TrackerConfig) {
        self.elapsed_seconds = self.elapsed_seconds_at(now);
        let minutes = f64::from(self.elapsed_seconds) / 60.0;
        self.calories = (minutes * config.calories_per_minute).floor() as u32;
        self.tokens = self.distance_km * config.tokens_per_km + minutes * config.tokens_per_minute;
    }

    /// Freeze the session into an immutable record.
    pub fn into_record(self, ended_at: DateTime<Utc>) -> WorkoutRecord {
        WorkoutRecord {
            id: Uuid::new_v4(),
            started_at: self.started_at,
            ended_at,
            duration_seconds: self.elapsed_seconds,
            distance_km: self.distance_km,
            // Speed at the moment of stopping, not a true session max
            max_speed_kmh: self.current_speed_kmh,
            calories: self.calories,
            tokens: self.tokens,
            date: ended_at.date_naive(),
            workout_type: WorkoutType::Cycling,
        }
    }
}

/// An immutable, persisted summary of a completed workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Unique identifier
    pub id: Uuid,
    /// When the workout started
    pub started_at: DateTime<Utc>,
    /// When the workout ended
    pub ended_at: DateTime<Utc>,
    /// Duration in seconds, excluding paused time
    pub duration_seconds: u32,
    /// Distance in km
    pub distance_km: f64,
    /// Highest reported speed in km/h
    pub max_speed_kmh: f64,
    /// Calorie estimate
    pub calories: u32,
    /// Tokens earned
    pub tokens: f64,
    /// Calendar day of the workout
    pub date: NaiveDate,
    /// Kind of activity
    #[serde(default)]
    pub workout_type: WorkoutType,
}

/// Kind of recorded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    /// Cycling session
    #[default]
    Cycling,
    /// Running session
    Running,
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Cycling => write!(f, "Cycling"),
            WorkoutType::Running => write!(f, "Running"),
        }
    }
}

/// Configuration for the workout tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum distance in meters between accepted route points
    pub min_step_meters: f64,
    /// Maximum horizontal accuracy in meters for a fix to be accepted
    pub max_accuracy_meters: f64,
    /// Calorie burn rate per minute of activity
    pub calories_per_minute: f64,
    /// Tokens earned per km
    pub tokens_per_km: f64,
    /// Tokens earned per minute of activity
    pub tokens_per_minute: f64,
    /// Maximum number of records kept in the history
    pub history_cap: usize,
    /// Map center used before the first fix or when location is unavailable
    pub default_center: (f64, f64),
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_step_meters: 3.0,
            max_accuracy_meters: 50.0,
            calories_per_minute: 8.0,
            tokens_per_km: 0.5,
            tokens_per_minute: 0.01,
            history_cap: 50,
            default_center: DEFAULT_CENTER,
        }
    }
}
