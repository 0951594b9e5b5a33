//! Display and map surfaces.
//!
//! The tracker and aggregator push formatted strings into named output slots;
//! nothing flows back. Implementations are free to skip slots they do not
//! render - a missing target skips that single update.

pub mod console;

pub use console::{ConsoleDisplay, ConsoleMap};

use crate::geo::RoutePoint;
use crate::storage::config::Units;

/// Named output slots on the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplaySlot {
    /// GPS availability label
    GpsStatus,
    /// Live speed during a workout
    LiveSpeed,
    /// Live cumulative distance during a workout
    LiveDistance,
    /// Live elapsed time during a workout
    LiveElapsed,
    /// Live calorie estimate during a workout
    LiveCalories,
    /// Live token estimate during a workout
    LiveTokens,
    /// Lifetime workout count
    TotalWorkouts,
    /// Lifetime distance
    TotalDistance,
    /// Lifetime workout time
    TotalDuration,
    /// Average distance per workout
    AverageDistance,
    /// Tokens earned in the trailing week
    WeeklyTokens,
    /// Lifetime tokens per km
    TokensPerKm,
    /// Urban riding grade
    UrbanGrade,
    /// Current daily streak
    StreakDays,
    /// Longest single-workout distance
    RecordDistance,
    /// Fastest recorded speed
    RecordSpeed,
    /// Longest single-workout duration
    RecordDuration,
    /// Most calories in a single workout
    RecordCalories,
    /// CO2 saved estimate
    Co2Saved,
    /// Equivalent trees planted
    TreesEquivalent,
    /// Fuel saved estimate
    FuelSaved,
    /// Daily distance goal progress
    GoalDistance,
    /// Daily duration goal progress
    GoalDuration,
    /// Daily calorie goal progress
    GoalCalories,
}

/// A set of named output slots the tracker pushes formatted strings into.
pub trait DisplaySurface {
    /// Update one output slot.
    fn update(&mut self, slot: DisplaySlot, value: &str);

    /// Reveal the live-tracking surface.
    fn show_live(&mut self) {}

    /// Hide the live-tracking surface.
    fn hide_live(&mut self) {}
}

/// A map viewport that accepts a center point and the route polyline.
///
/// The tracker never reads from it.
pub trait MapSurface {
    /// Recenter the viewport.
    fn recenter(&mut self, latitude: f64, longitude: f64);

    /// Replace the rendered route polyline.
    fn set_route(&mut self, route: &[RoutePoint]);
}

/// A display surface that drops every update.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySurface for NullDisplay {
    fn update(&mut self, _slot: DisplaySlot, _value: &str) {}
}

/// A map surface that drops every update.
#[derive(Debug, Default)]
pub struct NullMap;

impl MapSurface for NullMap {
    fn recenter(&mut self, _latitude: f64, _longitude: f64) {}
    fn set_route(&mut self, _route: &[RoutePoint]) {}
}

/// Format elapsed seconds as `MM:SS`.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a speed in km/h for display in the preferred units.
pub fn format_speed(speed_kmh: f64, units: Units) -> String {
    let (value, unit) = units.convert_speed(speed_kmh);
    format!("{value:.1} {unit}")
}

/// Format a distance in km for display in the preferred units.
pub fn format_distance(distance_km: f64, units: Units) -> String {
    let (value, unit) = units.convert_distance(distance_km);
    format!("{value:.2} {unit}")
}
