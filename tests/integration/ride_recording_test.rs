//! End-to-end rides through the tracking pipeline: record, persist, reload,
//! and aggregate across days.

use chrono::{DateTime, Duration, TimeZone, Utc};

use fixierun::display::{NullDisplay, NullMap};
use fixierun::location::{LocationProvider, LocationUpdate, SimulatedProvider, DEFAULT_CENTER};
use fixierun::storage::config::AppConfig;
use fixierun::storage::store::StateStore;
use fixierun::tracker::{TrackerEvent, TrackerStatus, WorkoutTracker};
use fixierun::{summarize, AppState, PositionSample};

fn tracker_with(state: AppState, store: StateStore) -> WorkoutTracker {
    WorkoutTracker::new(
        &AppConfig::default(),
        state,
        Box::new(NullDisplay),
        Box::new(NullMap),
    )
    .with_store(store)
}

/// Drive one session: ticks every second, a northward fix every 10 seconds.
fn ride(tracker: &mut WorkoutTracker, start: DateTime<Utc>, seconds: i64) {
    tracker.apply(TrackerEvent::Start { now: start });

    for i in 0..seconds {
        let now = start + Duration::seconds(i);
        if i % 10 == 0 {
            let sample = PositionSample {
                latitude: 48.8500 + i as f64 * 0.00001,
                longitude: 2.3500,
                accuracy_meters: 10.0,
                speed_mps: Some(4.5),
                timestamp: now,
            };
            tracker.apply(TrackerEvent::Position(sample));
        }
        tracker.apply(TrackerEvent::Tick { now });
    }

    tracker.apply(TrackerEvent::Stop {
        now: start + Duration::seconds(seconds),
    });
}

#[test]
fn recorded_ride_persists_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 7, 0, 0).unwrap();

    let mut tracker = tracker_with(store.load(), store.clone());
    ride(&mut tracker, start, 600);
    assert_eq!(tracker.status(), TrackerStatus::Stopped);

    // A fresh process sees the completed workout
    let reloaded = store.load();
    assert_eq!(reloaded.workout_history.len(), 1);

    let record = &reloaded.workout_history[0];
    assert_eq!(record.duration_seconds, 600);
    assert!(record.distance_km > 0.5, "distance {}", record.distance_km);
    assert_eq!(record.calories, 80); // floor(10 min * 8)
    assert_eq!(record.max_speed_kmh, 4.5 * 3.6);
    assert_eq!(reloaded.personal_records.longest_duration_seconds, 600);
    assert_eq!(reloaded.total_tokens, record.tokens);
}

#[test]
fn rides_on_consecutive_days_build_a_streak() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    let day1 = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
    let mut tracker = tracker_with(store.load(), store.clone());
    ride(&mut tracker, day1, 300);

    // Next day, a fresh tracker over the reloaded state
    let day2 = Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap();
    let mut tracker = tracker_with(store.load(), store.clone());
    ride(&mut tracker, day2, 300);

    let state = store.load();
    assert_eq!(state.workout_history.len(), 2);

    let now = day2 + Duration::hours(1);
    let summary = summarize(&state.workout_history, state.total_tokens, now);
    assert_eq!(summary.streak_days, 2);
    assert_eq!(summary.total_workouts, 2);
    assert_eq!(summary.weekly_tokens, state.total_tokens);

    // The today bucket rolled over to day 2 and only holds that ride
    assert_eq!(state.today_stats.date, day2.date_naive());
    assert_eq!(state.today_stats.duration_seconds, 300);
}

#[test]
fn simulated_provider_drives_a_full_ride() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 7, 0, 0).unwrap();

    let mut tracker = tracker_with(AppState::default(), store.clone());
    let mut provider = SimulatedProvider::new(Some(99), DEFAULT_CENTER);

    tracker.apply(TrackerEvent::Start { now: start });
    for i in 0..300 {
        let now = start + Duration::seconds(i);
        if i % 3 == 0 {
            match provider.poll(now) {
                Some(LocationUpdate::Fix(sample)) => {
                    tracker.apply(TrackerEvent::Position(sample));
                }
                Some(LocationUpdate::Unavailable(reason)) => {
                    tracker.location_unavailable(&reason);
                }
                None => {}
            }
        }
        tracker.apply(TrackerEvent::Tick { now });
    }
    tracker.apply(TrackerEvent::Close {
        now: start + Duration::seconds(300),
    });

    let state = store.load();
    assert_eq!(state.workout_history.len(), 1);

    let record = &state.workout_history[0];
    assert_eq!(record.duration_seconds, 300);
    // ~13 km/h for 5 minutes is roughly a kilometer
    assert!(
        record.distance_km > 0.3 && record.distance_km < 3.0,
        "distance {}",
        record.distance_km
    );
    assert!(record.tokens > 0.0);
}
