//! Simulated GPS ride for the demo binary and integration tests.
//!
//! Produces a random walk around a starting point at urban cycling speeds
//! (roughly 8-18 km/h with a slow sinusoidal variation), including the
//! occasional low-accuracy fix that the tracker's jitter filter is expected
//! to reject.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geo::METERS_PER_DEG_LAT;
use crate::location::types::{LocationUpdate, PositionSample};
use crate::location::LocationProvider;

/// Fraction of fixes emitted with degraded accuracy.
const POOR_FIX_RATIO: f64 = 0.1;

/// Generates a plausible urban ride as a stream of geolocation fixes.
pub struct SimulatedProvider {
    rng: StdRng,
    latitude: f64,
    longitude: f64,
    heading_rad: f64,
    fixes_emitted: u32,
    last_fix_at: Option<DateTime<Utc>>,
}

impl SimulatedProvider {
    /// Create a simulated ride starting at `center`.
    ///
    /// Passing a seed makes the ride reproducible.
    pub fn new(seed: Option<u64>, center: (f64, f64)) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            latitude: center.0,
            longitude: center.1,
            heading_rad: 0.0,
            fixes_emitted: 0,
            last_fix_at: None,
        }
    }

    /// Current simulated position.
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl LocationProvider for SimulatedProvider {
    fn poll(&mut self, now: DateTime<Utc>) -> Option<LocationUpdate> {
        let elapsed_secs = self
            .last_fix_at
            .map(|t| (now - t).num_seconds().max(0) as f64)
            .unwrap_or(0.0);
        self.last_fix_at = Some(now);
        self.fixes_emitted += 1;

        // Speed drifts slowly around 13 km/h with some noise
        let wave = (f64::from(self.fixes_emitted) / 10.0).sin() * 3.0;
        let speed_kmh = (13.0 + wave + self.rng.gen_range(-2.0..2.0)).max(0.0);
        let speed_mps = speed_kmh / 3.6;

        // Meander: small heading changes each fix
        self.heading_rad += self.rng.gen_range(-0.3..0.3);
        let step_meters = speed_mps * elapsed_secs;
        self.latitude += step_meters * self.heading_rad.cos() / METERS_PER_DEG_LAT;
        self.longitude += step_meters * self.heading_rad.sin()
            / (METERS_PER_DEG_LAT * self.latitude.to_radians().cos());

        let accuracy_meters = if self.rng.gen_range(0.0..1.0) < POOR_FIX_RATIO {
            self.rng.gen_range(60.0..120.0)
        } else {
            self.rng.gen_range(4.0..25.0)
        };

        Some(LocationUpdate::Fix(PositionSample {
            latitude: self.latitude,
            longitude: self.longitude,
            accuracy_meters,
            speed_mps: Some(speed_mps),
            timestamp: now,
        }))
    }
}
