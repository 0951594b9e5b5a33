//! Daily goal targets and progress.

use serde::{Deserialize, Serialize};

use crate::storage::state::TodayStats;

/// Daily targets shown as progress bars on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyGoals {
    /// Target distance in km
    pub distance_km: f64,
    /// Target workout time in minutes
    pub duration_minutes: u32,
    /// Target calories burned
    pub calories: u32,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            distance_km: 10.0,
            duration_minutes: 30,
            calories: 300,
        }
    }
}

impl DailyGoals {
    /// Progress toward each target for the given day bucket.
    pub fn progress(&self, today: &TodayStats) -> GoalProgress {
        GoalProgress {
            distance_percent: percent(today.distance_km, self.distance_km),
            duration_percent: percent(
                f64::from(today.duration_seconds) / 60.0,
                f64::from(self.duration_minutes),
            ),
            calories_percent: percent(f64::from(today.calories), f64::from(self.calories)),
        }
    }
}

/// Progress toward the daily goals, each clamped to 100%.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GoalProgress {
    /// Distance progress (0-100)
    pub distance_percent: f32,
    /// Duration progress (0-100)
    pub duration_percent: f32,
    /// Calorie progress (0-100)
    pub calories_percent: f32,
}

fn percent(current: f64, target: f64) -> f32 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).min(100.0) as f32
}
