//! Unit tests for workout tracking through the public API.
//!
//! Covers the jitter-filter distance property and the live display
//! publication path.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use fixierun::display::{DisplaySlot, DisplaySurface, NullDisplay, NullMap};
use fixierun::geo;
use fixierun::storage::config::AppConfig;
use fixierun::tracker::{TrackerEvent, WorkoutTracker};
use fixierun::{AppState, PositionSample};

/// Display stub that records the latest value pushed into each slot.
#[derive(Default)]
struct RecordingDisplay {
    slots: Rc<RefCell<HashMap<DisplaySlot, String>>>,
}

impl RecordingDisplay {
    fn handle(&self) -> Rc<RefCell<HashMap<DisplaySlot, String>>> {
        Rc::clone(&self.slots)
    }
}

impl DisplaySurface for RecordingDisplay {
    fn update(&mut self, slot: DisplaySlot, value: &str) {
        self.slots.borrow_mut().insert(slot, value.to_string());
    }
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap()
}

fn fix(latitude: f64, longitude: f64, accuracy: f64) -> PositionSample {
    PositionSample {
        latitude,
        longitude,
        accuracy_meters: accuracy,
        speed_mps: Some(4.0),
        timestamp: t0(),
    }
}

#[test]
fn cumulative_distance_matches_accepted_haversine_steps() {
    // A northward line with some noise mixed in: every 0.001 degrees of
    // latitude is roughly 111 m.
    let fixes = vec![
        fix(48.8500, 2.3500, 8.0),
        fix(48.8510, 2.3500, 12.0),  // ~111 m, accepted
        fix(48.8510, 2.3500, 9.0),   // zero step, rejected
        fix(48.8520, 2.3500, 70.0),  // poor accuracy, rejected
        fix(48.8520, 2.3500, 15.0),  // ~111 m from last accepted, accepted
        fix(48.85201, 2.3500, 10.0), // ~1 m, rejected
        fix(48.8535, 2.3510, 20.0),  // accepted
    ];

    // Accumulate independently with the same accuracy/min-step gate
    let mut expected_meters = 0.0;
    let mut last: Option<(f64, f64)> = None;
    for sample in &fixes {
        if sample.accuracy_meters >= 50.0 {
            continue;
        }
        if let Some((lat, lon)) = last {
            let step = geo::haversine_distance(lat, lon, sample.latitude, sample.longitude);
            if step <= 3.0 {
                continue;
            }
            expected_meters += step;
        }
        last = Some((sample.latitude, sample.longitude));
    }

    let mut tracker = WorkoutTracker::new(
        &AppConfig::default(),
        AppState::default(),
        Box::new(NullDisplay),
        Box::new(NullMap),
    );
    tracker.apply(TrackerEvent::Start { now: t0() });
    for sample in fixes {
        tracker.apply(TrackerEvent::Position(sample));
    }

    let session = tracker.session().unwrap();
    assert!((session.distance_km - expected_meters / 1000.0).abs() < 1e-12);
    assert_eq!(session.route.len(), 4);
}

#[test]
fn live_slots_update_on_tick() {
    let display = RecordingDisplay::default();
    let slots = display.handle();

    let mut tracker = WorkoutTracker::new(
        &AppConfig::default(),
        AppState::default(),
        Box::new(display),
        Box::new(NullMap),
    );

    tracker.apply(TrackerEvent::Start { now: t0() });
    tracker.apply(TrackerEvent::Position(fix(48.8500, 2.3500, 8.0)));
    tracker.apply(TrackerEvent::Tick {
        now: t0() + Duration::seconds(65),
    });

    let slots = slots.borrow();
    assert_eq!(slots.get(&DisplaySlot::LiveElapsed).unwrap(), "01:05");
    assert_eq!(slots.get(&DisplaySlot::LiveSpeed).unwrap(), "14.4 km/h");
    assert_eq!(slots.get(&DisplaySlot::LiveDistance).unwrap(), "0.00 km");
    assert_eq!(slots.get(&DisplaySlot::LiveCalories).unwrap(), "8");
}

#[test]
fn summary_slots_update_on_stop() {
    let display = RecordingDisplay::default();
    let slots = display.handle();

    let mut tracker = WorkoutTracker::new(
        &AppConfig::default(),
        AppState::default(),
        Box::new(display),
        Box::new(NullMap),
    );

    tracker.apply(TrackerEvent::Start { now: t0() });
    tracker.apply(TrackerEvent::Stop {
        now: t0() + Duration::seconds(600),
    });

    let slots = slots.borrow();
    assert_eq!(slots.get(&DisplaySlot::TotalWorkouts).unwrap(), "1");
    assert_eq!(slots.get(&DisplaySlot::StreakDays).unwrap(), "1");
    assert_eq!(slots.get(&DisplaySlot::UrbanGrade).unwrap(), "N/A");
    // 10 of the 30-minute daily duration goal
    assert_eq!(slots.get(&DisplaySlot::GoalDuration).unwrap(), "33%");
}

#[test]
fn location_unavailable_degrades_status_label() {
    let display = RecordingDisplay::default();
    let slots = display.handle();

    let mut tracker = WorkoutTracker::new(
        &AppConfig::default(),
        AppState::default(),
        Box::new(display),
        Box::new(NullMap),
    );

    tracker.location_unavailable("permission denied");

    let slots = slots.borrow();
    assert_eq!(slots.get(&DisplaySlot::GpsStatus).unwrap(), "GPS unavailable");
}
