//! foodtruck-analytics - analytics HTTP server
//!
//! Serves the analytics calculators over JSON.
//!
//! Environment:
//! - `ANALYTICS_ADDR`: bind address (default `0.0.0.0:8080`)
//! - `ANALYTICS_CONFIG`: configuration file (default `config/analytics.yaml`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::error::Error;
use std::net::SocketAddr;

use foodtruck_analytics::api::{create_router, AppState};
use foodtruck_analytics::config::{AnalyticsConfig, ConfigLoader};
use foodtruck_analytics::error::EngineError;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CONFIG_PATH: &str = "config/analytics.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;

    let addr: SocketAddr = env::var("ANALYTICS_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(addr = %addr, "Analytics HTTP server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// An explicitly configured file must exist; the default path may be absent.
fn load_config() -> Result<AnalyticsConfig, EngineError> {
    match env::var("ANALYTICS_CONFIG") {
        Ok(path) => Ok(ConfigLoader::load(path)?.into_config()),
        Err(_) => match ConfigLoader::load(DEFAULT_CONFIG_PATH) {
            Ok(loader) => Ok(loader.into_config()),
            Err(EngineError::ConfigNotFound { path }) => {
                warn!(path = %path, "Configuration file not found, using defaults");
                Ok(AnalyticsConfig::default())
            }
            Err(err) => Err(err),
        },
    }
}
