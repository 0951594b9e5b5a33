//! Demo application: wires the tracker to a simulated location provider and
//! console surfaces, and runs the serialized tick/fix event loop.

use std::time::Duration;

use chrono::Utc;

use fixierun::display::{ConsoleDisplay, ConsoleMap};
use fixierun::location::{LocationProvider, LocationUpdate, SimulatedProvider};
use fixierun::storage::config::{self, AppConfig};
use fixierun::storage::store::StateStore;
use fixierun::tracker::{TrackerEvent, WorkoutTracker};

/// The demo application.
pub struct FixieApp {
    config: AppConfig,
    tracker: WorkoutTracker,
    provider: SimulatedProvider,
}

impl FixieApp {
    /// Load configuration and saved state, and build the tracking pipeline.
    pub fn new() -> anyhow::Result<Self> {
        let config = config::load_config().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err}");
            AppConfig::default()
        });

        let store = StateStore::at_default_location();
        let state = store.load();
        tracing::info!(
            workouts = state.workout_history.len(),
            total_tokens = state.total_tokens,
            "loaded saved state"
        );

        let tracker = WorkoutTracker::new(
            &config,
            state,
            Box::new(ConsoleDisplay::new()),
            Box::new(ConsoleMap::new()),
        )
        .with_store(store);

        let provider =
            SimulatedProvider::new(config.simulation.seed, config.tracker.default_center);

        Ok(Self {
            config,
            tracker,
            provider,
        })
    }

    /// Run one simulated ride through the tracker.
    ///
    /// All mutation happens on this single task: the one-second tick, the
    /// simulated fixes, and the start/stop actions are applied in sequence,
    /// never concurrently.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let ride_seconds = u64::from(self.config.simulation.duration_seconds);
        let fix_seconds = u64::from(self.config.simulation.fix_interval_seconds.max(1));
        tracing::info!("simulating a {ride_seconds}s ride");

        self.tracker.refresh_displays(Utc::now());
        self.tracker.apply(TrackerEvent::Start { now: Utc::now() });

        let started = tokio::time::Instant::now();
        let mut tick = tokio::time::interval(Duration::from_secs(1));
        let mut fix = tokio::time::interval(Duration::from_secs(fix_seconds));

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.tracker.apply(TrackerEvent::Tick { now: Utc::now() });
                    if started.elapsed().as_secs() >= ride_seconds {
                        break;
                    }
                }
                _ = fix.tick() => {
                    let now = Utc::now();
                    match self.provider.poll(now) {
                        Some(LocationUpdate::Fix(sample)) => {
                            self.tracker.apply(TrackerEvent::Position(sample));
                        }
                        Some(LocationUpdate::Unavailable(reason)) => {
                            self.tracker.location_unavailable(&reason);
                        }
                        None => {}
                    }
                }
            }
        }

        self.tracker.apply(TrackerEvent::Stop { now: Utc::now() });
        self.tracker.apply(TrackerEvent::Close { now: Utc::now() });

        let state = self.tracker.state();
        tracing::info!(
            workouts = state.workout_history.len(),
            "ride finished with {:.2} total tokens",
            state.total_tokens
        );
        Ok(())
    }
}
