// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    climate_chart, climate_table, health_check, pick_location, place_name, query_window,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/location", get(pick_location))
        .route("/place-name", get(place_name))
        .route("/window", get(query_window))
        .route("/climate", get(climate_table))
        .route("/chart", get(climate_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
