// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::climate_service::ClimateService;
use crate::application::location_service::LocationService;
use crate::application::series_assembler::SeriesAssembler;
use crate::domain::projection::UtmProjection;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::geonorge_place_names::GeonorgePlaceNames;
use crate::infrastructure::nve_grid_repository::NveGridRepository;
use crate::infrastructure::retry::RetryConfig;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_service_config()?;

    // Create repositories (infrastructure layer)
    let grid_repository = Arc::new(NveGridRepository::new(
        config.grid_service.base_url.clone(),
        Duration::from_secs(config.grid_service.timeout_secs),
        RetryConfig {
            max_retries: config.grid_service.max_retries,
            base_delay_ms: config.grid_service.retry_base_delay_ms,
            ..RetryConfig::default()
        },
    )?);
    let place_names = Arc::new(GeonorgePlaceNames::new(
        config.place_names.base_url.clone(),
        Duration::from_secs(config.place_names.timeout_secs),
    )?);

    // Create services (application layer)
    let projection = UtmProjection::for_zone(config.projection.utm_zone)?;
    let assembler = SeriesAssembler::new(
        chrono::Duration::hours(config.series.interval_hours),
        config.series.sentinel_threshold,
    )?;
    let climate_service = ClimateService::new(grid_repository, assembler);
    let location_service =
        LocationService::new(projection, place_names, config.place_names.radius_m);

    // Create application state
    let state = Arc::new(AppState {
        climate_service,
        location_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_address))?;
    tracing::info!(
        "Starting skredvaer-climate on {} (grid service {})",
        addr,
        config.grid_service.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
