//! Location provider types.

use chrono::{DateTime, Utc};

/// A single geolocation fix.
///
/// Transient; produced by a location provider and consumed immediately by the
/// tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// GPS latitude in degrees
    pub latitude: f64,
    /// GPS longitude in degrees
    pub longitude: f64,
    /// Horizontal accuracy in meters
    pub accuracy_meters: f64,
    /// Instantaneous ground speed in meters per second, if reported
    pub speed_mps: Option<f64>,
    /// When the fix was taken
    pub timestamp: DateTime<Utc>,
}

/// An update from a location provider.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationUpdate {
    /// A normal geolocation fix
    Fix(PositionSample),
    /// The provider cannot deliver fixes (permission denied, no hardware).
    /// The consumer should fall back to a default map center.
    Unavailable(String),
}
