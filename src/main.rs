//! Fixierun - Move-to-Earn Cycling Tracker
//!
//! Demo entry point: drives a simulated ride through the real tracking
//! pipeline and prints the resulting statistics.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fixierun v{}", env!("CARGO_PKG_VERSION"));

    let mut app = app::FixieApp::new()?;
    app.run().await
}
