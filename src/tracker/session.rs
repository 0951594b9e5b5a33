//! Workout session tracker.
//!
//! A state machine (`idle -> active -> [paused] -> stopped`) driven by
//! [`TrackerEvent`]s from three serialized callback sources: user actions,
//! the one-second periodic timer, and the location stream. The timer and the
//! location subscription are acquired on `Start` and released on `Stop`;
//! a liveness flag checked at the top of each callback guards against late
//! ticks and fixes after a logical stop.
//!
//! No operation propagates an error: events that are invalid in the current
//! state are logged no-ops, and persistence failures degrade to a log line.

use chrono::{DateTime, Utc};

use crate::display::{
    format_distance, format_elapsed, format_speed, DisplaySlot, DisplaySurface, MapSurface,
};
use crate::geo::{self, RoutePoint};
use crate::goals::DailyGoals;
use crate::location::types::PositionSample;
use crate::stats::aggregator::summarize;
use crate::storage::config::{AppConfig, Units};
use crate::storage::state::AppState;
use crate::storage::store::StateStore;
use crate::tracker::types::{TrackerConfig, TrackerEvent, TrackerStatus, WorkoutSession};

/// Tracks workout sessions and owns the application state they fold into.
pub struct WorkoutTracker {
    /// Tracking configuration
    config: TrackerConfig,
    /// Unit preference for formatted output
    units: Units,
    /// Daily goal targets for the progress slots
    goals: DailyGoals,
    /// Current state-machine status
    status: TrackerStatus,
    /// The in-progress session, if any
    session: Option<WorkoutSession>,
    /// True while the periodic timer and location subscription are held
    timer_live: bool,
    /// Application state (history, records, totals)
    state: AppState,
    /// State store for persistence (optional)
    store: Option<StateStore>,
    /// Display surface receiving formatted output
    display: Box<dyn DisplaySurface>,
    /// Map surface receiving the viewport center and route polyline
    map: Box<dyn MapSurface>,
}

impl WorkoutTracker {
    /// Create a tracker over the given state and surfaces.
    pub fn new(
        config: &AppConfig,
        state: AppState,
        display: Box<dyn DisplaySurface>,
        map: Box<dyn MapSurface>,
    ) -> Self {
        Self {
            config: config.tracker.clone(),
            units: config.units,
            goals: config.goals.clone(),
            status: TrackerStatus::Idle,
            session: None,
            timer_live: false,
            state,
            store: None,
            display,
            map,
        }
    }

    /// Attach a state store for persistence on stop.
    pub fn with_store(mut self, store: StateStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Current state-machine status.
    pub fn status(&self) -> TrackerStatus {
        self.status
    }

    /// The in-progress session, if any.
    pub fn session(&self) -> Option<&WorkoutSession> {
        self.session.as_ref()
    }

    /// The application state owned by the tracker.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply one event to the state machine.
    pub fn apply(&mut self, event: TrackerEvent) {
        match event {
            TrackerEvent::Start { now } => self.start(now),
            TrackerEvent::Position(sample) => self.on_position(sample),
            TrackerEvent::Tick { now } => self.on_tick(now),
            TrackerEvent::Pause { now } => self.pause(now),
            TrackerEvent::Resume { now } => self.resume(now),
            TrackerEvent::Stop { now } => self.stop(now),
            TrackerEvent::Close { now } => self.close(now),
        }
    }

    /// React to the location provider reporting that fixes are unavailable.
    ///
    /// Falls back to the default map center and a degraded status label;
    /// tracking simply never accumulates distance.
    pub fn location_unavailable(&mut self, reason: &str) {
        tracing::warn!("location unavailable: {reason}");
        let (latitude, longitude) = self.config.default_center;
        self.map.recenter(latitude, longitude);
        self.display.update(DisplaySlot::GpsStatus, "GPS unavailable");
    }

    fn start(&mut self, now: DateTime<Utc>) {
        if matches!(self.status, TrackerStatus::Active | TrackerStatus::Paused) {
            tracing::debug!("start ignored: workout already in progress");
            return;
        }

        self.session = Some(WorkoutSession::begin(now));
        self.timer_live = true;
        self.status = TrackerStatus::Active;
        self.display.show_live();

        tracing::info!("workout started");
        self.publish_live();
    }

    fn on_position(&mut self, sample: PositionSample) {
        if !self.timer_live || self.status != TrackerStatus::Active {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // Jitter filter: reject poor fixes and sub-threshold movement
        if sample.accuracy_meters >= self.config.max_accuracy_meters {
            tracing::debug!(
                accuracy = sample.accuracy_meters,
                "fix rejected: poor accuracy"
            );
            return;
        }

        let point = RoutePoint::new(sample.latitude, sample.longitude);
        if let Some(last) = session.route.last() {
            let step_meters = geo::distance_between(last, &point);
            if step_meters <= self.config.min_step_meters {
                return;
            }
            session.distance_km += step_meters / 1000.0;
        }
        session.route.push(point);

        if let Some(speed_mps) = sample.speed_mps {
            if speed_mps >= 0.0 {
                session.current_speed_kmh = speed_mps * 3.6;
            }
        }

        self.map.recenter(point.latitude, point.longitude);
        if let Some(session) = self.session.as_ref() {
            self.map.set_route(&session.route);
        }
    }

    fn on_tick(&mut self, now: DateTime<Utc>) {
        if !self.timer_live || self.status != TrackerStatus::Active {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.refresh_derived(now, &self.config);
        }
        self.publish_live();
    }

    fn pause(&mut self, now: DateTime<Utc>) {
        if self.status != TrackerStatus::Active {
            tracing::debug!("pause ignored: no active workout");
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.paused_at = Some(now);
        }
        self.status = TrackerStatus::Paused;
        tracing::info!("workout paused");
    }

    fn resume(&mut self, now: DateTime<Utc>) {
        if self.status != TrackerStatus::Paused {
            tracing::debug!("resume ignored: workout not paused");
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if let Some(paused_at) = session.paused_at.take() {
                session.paused_seconds += (now - paused_at).num_seconds().max(0);
            }
        }
        self.status = TrackerStatus::Active;
        tracing::info!("workout resumed");
    }

    fn stop(&mut self, now: DateTime<Utc>) {
        if !matches!(self.status, TrackerStatus::Active | TrackerStatus::Paused) {
            tracing::debug!("stop ignored: no workout in progress");
            return;
        }
        let Some(mut session) = self.session.take() else {
            self.status = TrackerStatus::Idle;
            return;
        };

        // Release the timer and location subscription before anything else;
        // a late tick or fix must not touch the finished session.
        self.timer_live = false;

        if let Some(paused_at) = session.paused_at.take() {
            session.paused_seconds += (now - paused_at).num_seconds().max(0);
        }
        session.refresh_derived(now, &self.config);

        let record = session.into_record(now);
        tracing::info!(
            distance_km = record.distance_km,
            duration_seconds = record.duration_seconds,
            tokens = record.tokens,
            "workout completed"
        );

        self.state.record_workout(record, self.config.history_cap);
        self.state.last_saved = now;

        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.state) {
                tracing::warn!("failed to persist workout history: {err}");
            }
        } else {
            tracing::debug!("no state store configured, workout not persisted");
        }

        self.status = TrackerStatus::Stopped;
        self.refresh_displays(now);
    }

    fn close(&mut self, now: DateTime<Utc>) {
        if matches!(self.status, TrackerStatus::Active | TrackerStatus::Paused) {
            tracing::debug!("live view closed mid-workout, stopping first");
            self.stop(now);
        }
        self.display.hide_live();
    }

    /// Push the live session fields to the display surface.
    fn publish_live(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let speed = format_speed(session.current_speed_kmh, self.units);
        let distance = format_distance(session.distance_km, self.units);
        let elapsed = format_elapsed(session.elapsed_seconds);
        let calories = session.calories.to_string();
        let tokens = format!("{:.2}", session.tokens);

        self.display.update(DisplaySlot::LiveSpeed, &speed);
        self.display.update(DisplaySlot::LiveDistance, &distance);
        self.display.update(DisplaySlot::LiveElapsed, &elapsed);
        self.display.update(DisplaySlot::LiveCalories, &calories);
        self.display.update(DisplaySlot::LiveTokens, &tokens);
    }

    /// Recompute all derived figures and push them to the display surface.
    pub fn refresh_displays(&mut self, now: DateTime<Utc>) {
        let summary = summarize(&self.state.workout_history, self.state.total_tokens, now);
        let records = self.state.personal_records;
        let progress = self.goals.progress(&self.state.today_stats);

        let updates = [
            (DisplaySlot::TotalWorkouts, summary.total_workouts.to_string()),
            (
                DisplaySlot::TotalDistance,
                format_distance(summary.total_distance_km, self.units),
            ),
            (
                DisplaySlot::TotalDuration,
                format!("{:.1} h", summary.total_duration_seconds as f64 / 3600.0),
            ),
            (
                DisplaySlot::AverageDistance,
                format_distance(summary.average_distance_km, self.units),
            ),
            (
                DisplaySlot::WeeklyTokens,
                format!("{:.2}", summary.weekly_tokens),
            ),
            (
                DisplaySlot::TokensPerKm,
                format!("{:.2}", summary.tokens_per_km),
            ),
            (DisplaySlot::UrbanGrade, summary.grade.to_string()),
            (DisplaySlot::StreakDays, summary.streak_days.to_string()),
            (
                DisplaySlot::RecordDistance,
                format_distance(records.longest_distance_km, self.units),
            ),
            (
                DisplaySlot::RecordSpeed,
                format_speed(records.fastest_speed_kmh, self.units),
            ),
            (
                DisplaySlot::RecordDuration,
                format_elapsed(records.longest_duration_seconds),
            ),
            (DisplaySlot::RecordCalories, records.most_calories.to_string()),
            (
                DisplaySlot::Co2Saved,
                format!("{:.1} kg", summary.ecological.co2_saved_kg),
            ),
            (
                DisplaySlot::TreesEquivalent,
                summary.ecological.trees_equivalent.to_string(),
            ),
            (
                DisplaySlot::FuelSaved,
                format!("{:.1} L", summary.ecological.fuel_saved_liters),
            ),
            (
                DisplaySlot::GoalDistance,
                format!("{:.0}%", progress.distance_percent),
            ),
            (
                DisplaySlot::GoalDuration,
                format!("{:.0}%", progress.duration_percent),
            ),
            (
                DisplaySlot::GoalCalories,
                format!("{:.0}%", progress.calories_percent),
            ),
        ];

        for (slot, value) in updates {
            self.display.update(slot, &value);
        }
    }
}
