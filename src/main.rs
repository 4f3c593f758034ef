use std::sync::Arc;

use anyhow::{Context, Result};
use denguewatch::api::AppState;
use denguewatch::refresh::run_periodic_refresh;
use denguewatch::{
    AdvisoryEngine, AlertBoard, DashboardState, DengueWatchConfig, WeatherApiClient, cases, web,
};
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = DengueWatchConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .with_context(|| "Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "Starting DengueWatch v{} (default location: {})",
        denguewatch::VERSION,
        config.defaults.location
    );

    let client = WeatherApiClient::new(&config)?;
    let engine = AdvisoryEngine::new(Arc::new(client), config.defaults.location.clone());
    let dashboard = Arc::new(DashboardState::new(engine, config.defaults.location.clone()));

    // First tick fires immediately, which doubles as the initial load
    tokio::spawn(run_periodic_refresh(
        dashboard.clone(),
        config.defaults.refresh_interval_minutes,
    ));

    let state = Arc::new(AppState {
        dashboard,
        alerts: RwLock::new(AlertBoard::seeded()),
        cases: cases::seeded_reports(),
    });

    web::run(config.server.port, state).await
}
