//! Console implementations of the display and map surfaces.
//!
//! Used by the demo binary; every slot update and map movement is emitted
//! through the tracing subscriber.

use crate::display::{DisplaySlot, DisplaySurface, MapSurface};
use crate::geo::RoutePoint;

/// Display surface that logs slot updates.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    /// Create a console display.
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn update(&mut self, slot: DisplaySlot, value: &str) {
        tracing::info!(target: "display", "{slot:?}: {value}");
    }

    fn show_live(&mut self) {
        tracing::info!(target: "display", "live tracking view opened");
    }

    fn hide_live(&mut self) {
        tracing::info!(target: "display", "live tracking view closed");
    }
}

/// Map surface that logs viewport movements.
#[derive(Debug, Default)]
pub struct ConsoleMap {
    points: usize,
}

impl ConsoleMap {
    /// Create a console map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for ConsoleMap {
    fn recenter(&mut self, latitude: f64, longitude: f64) {
        tracing::debug!(target: "map", "recentered to {latitude:.5}, {longitude:.5}");
    }

    fn set_route(&mut self, route: &[RoutePoint]) {
        if route.len() != self.points {
            self.points = route.len();
            tracing::debug!(target: "map", "route now has {} points", route.len());
        }
    }
}
