//! Local persistence: application state document and configuration.

pub mod config;
pub mod state;
pub mod store;

pub use config::{AppConfig, ConfigError, Units};
pub use state::{AppState, PersonalRecords, TodayStats};
pub use store::{StateStore, StoreError};
