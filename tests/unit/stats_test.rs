//! Unit tests for the stats aggregator through the public API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use fixierun::stats::UrbanGrade;
use fixierun::summarize;
use fixierun::tracker::{WorkoutRecord, WorkoutType};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 20, 0, 0).unwrap()
}

fn record_days_ago(days: i64, distance_km: f64, tokens: f64) -> WorkoutRecord {
    let started_at = now() - Duration::days(days);
    WorkoutRecord {
        id: Uuid::new_v4(),
        started_at,
        ended_at: started_at + Duration::seconds(1800),
        duration_seconds: 1800,
        distance_km,
        max_speed_kmh: 22.0,
        calories: 240,
        tokens,
        date: started_at.date_naive(),
        workout_type: WorkoutType::Cycling,
    }
}

#[test]
fn empty_history_yields_zeroed_summary() {
    let summary = summarize(&[], 0.0, now());

    assert_eq!(summary.total_workouts, 0);
    assert_eq!(summary.total_distance_km, 0.0);
    assert_eq!(summary.average_distance_km, 0.0);
    assert_eq!(summary.tokens_per_km, 0.0);
    assert_eq!(summary.grade, UrbanGrade::NotRated);
    assert_eq!(summary.streak_days, 0);
    assert_eq!(summary.ecological.trees_equivalent, 0);
}

#[test]
fn one_ride_scenario() {
    let history = vec![record_days_ago(0, 10.0, 8.0)];
    let summary = summarize(&history, 8.0, now());

    assert_eq!(summary.total_distance_km, 10.0);
    assert_eq!(summary.tokens_per_km, 0.8);
    assert_eq!(summary.grade, UrbanGrade::A);
    assert!((summary.ecological.co2_saved_kg - 1.2).abs() < 1e-9);
    assert_eq!(summary.ecological.trees_equivalent, 0);
}

#[test]
fn grade_drops_just_below_the_boundary() {
    let history = vec![record_days_ago(0, 10.0, 7.9999)];
    let summary = summarize(&history, 7.9999, now());

    assert!((summary.tokens_per_km - 0.79999).abs() < 1e-9);
    assert_eq!(summary.grade, UrbanGrade::B);
}

#[test]
fn averages_over_several_rides() {
    let history = vec![
        record_days_ago(0, 12.0, 6.0),
        record_days_ago(1, 6.0, 3.0),
        record_days_ago(2, 6.0, 3.0),
    ];
    let summary = summarize(&history, 12.0, now());

    assert_eq!(summary.total_workouts, 3);
    assert_eq!(summary.total_distance_km, 24.0);
    assert_eq!(summary.average_distance_km, 8.0);
    assert_eq!(summary.total_duration_seconds, 5400);
    assert_eq!(summary.streak_days, 3);
}

#[test]
fn streak_stops_at_first_gap() {
    let history = vec![
        record_days_ago(0, 5.0, 2.5),
        record_days_ago(1, 5.0, 2.5),
        record_days_ago(3, 5.0, 2.5),
        record_days_ago(4, 5.0, 2.5),
    ];
    let summary = summarize(&history, 10.0, now());
    assert_eq!(summary.streak_days, 2);
}

#[test]
fn lifetime_tokens_can_exceed_capped_history() {
    // The persisted balance survives records trimmed from the history
    let history = vec![record_days_ago(0, 10.0, 5.0)];
    let summary = summarize(&history, 12.0, now());

    assert_eq!(summary.tokens_per_km, 1.2);
    assert_eq!(summary.grade, UrbanGrade::APlus);
    assert_eq!(summary.weekly_tokens, 5.0);
}

#[test]
fn deterministic_for_a_fixed_now() {
    let history = vec![record_days_ago(2, 9.0, 4.5)];

    let a = summarize(&history, 4.5, now());
    let b = summarize(&history, 4.5, now());
    assert_eq!(a, b);

    // Viewed eight days later, the ride leaves the weekly window and the streak
    let later = summarize(&history, 4.5, now() + Duration::days(8));
    assert_eq!(later.weekly_tokens, 0.0);
    assert_eq!(later.streak_days, 0);
}
