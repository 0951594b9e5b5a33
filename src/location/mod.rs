//! Location provider seam.
//!
//! Providers deliver an initial best-effort fix and then a continuous stream
//! of fixes, and signal permission or hardware unavailability distinctly from
//! a normal fix so the consumer can fall back to a default map center.

pub mod simulator;
pub mod types;

pub use simulator::SimulatedProvider;
pub use types::{LocationUpdate, PositionSample};

use chrono::{DateTime, Utc};

/// Default map center (Paris) used when no fix is available yet.
pub const DEFAULT_CENTER: (f64, f64) = (48.8566, 2.3522);

/// A source of geolocation fixes.
pub trait LocationProvider {
    /// Poll the provider for the next update, if any is ready.
    fn poll(&mut self, now: DateTime<Utc>) -> Option<LocationUpdate>;
}
