use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub grid_service: GridServiceSettings,
    pub place_names: PlaceNameSettings,
    pub projection: ProjectionSettings,
    pub series: SeriesSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GridServiceSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_base_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaceNameSettings {
    pub base_url: String,
    pub radius_m: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectionSettings {
    pub utm_zone: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesSettings {
    pub interval_hours: i64,
    pub sentinel_threshold: f64,
}

fn builder_with_defaults() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_address", "0.0.0.0:8080")?
        .set_default("grid_service.base_url", "http://h-web02.nve.no:8080/api")?
        .set_default("grid_service.timeout_secs", 30)?
        .set_default("grid_service.max_retries", 3)?
        .set_default("grid_service.retry_base_delay_ms", 500)?
        .set_default("place_names.base_url", "https://ws.geonorge.no/stedsnavn/v1")?
        .set_default("place_names.radius_m", 500)?
        .set_default("place_names.timeout_secs", 10)?
        .set_default("projection.utm_zone", 33)?
        .set_default("series.interval_hours", 3)?
        .set_default("series.sentinel_threshold", 1000.0)?)
}

/// Load `config/service.toml` (optional) with `SKREDVAER__SECTION__KEY` overrides.
pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name("config/service").required(false))
        .add_source(
            config::Environment::with_prefix("SKREDVAER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
