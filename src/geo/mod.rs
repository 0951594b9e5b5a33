//! Geodesy primitives shared by the tracker, the location providers, and the
//! map surface.

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters, as used by the Haversine formula.
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Approximate meters per degree of latitude.
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// A point on a recorded route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    /// GPS latitude in degrees
    pub latitude: f64,
    /// GPS longitude in degrees
    pub longitude: f64,
}

impl RoutePoint {
    /// Create a route point from a latitude/longitude pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Calculate the great-circle distance between two GPS points in meters
/// (Haversine formula).
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS * c
}

/// Distance in meters between two route points.
pub fn distance_between(a: &RoutePoint, b: &RoutePoint) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}
