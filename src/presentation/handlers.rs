// HTTP request handlers
use crate::domain::chart::ChartData;
use crate::domain::climate_table::ClimateRow;
use crate::domain::coordinate::ProjectedCoord;
use crate::domain::parameter::ClimateParameter;
use crate::domain::query_window::QueryWindow;
use crate::application::location_service::PickedLocation;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
}

/// Text fields as typed by the user; parsed and validated server-side.
#[derive(Deserialize)]
pub struct PointQuery {
    pub northing: String,
    pub easting: String,
}

#[derive(Deserialize)]
pub struct WindowQuery {
    pub start: String,
    pub days: String,
}

#[derive(Deserialize)]
pub struct ClimateQuery {
    pub northing: String,
    pub easting: String,
    pub start: String,
    pub days: String,
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct PlaceNameResponse {
    pub name: String,
}

#[derive(Serialize)]
pub struct ClimateResponse {
    pub coordinate: ProjectedCoord,
    pub window: QueryWindow,
    pub altitude: f64,
    pub columns: Vec<ClimateParameter>,
    pub rows: Vec<ClimateRow>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Map click: project the point and look up a name for it
pub async fn pick_location(
    query: Result<Query<LocationQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PickedLocation>, ApiError> {
    let Query(query) = query?;
    let picked = state.location_service.pick(query.lat, query.lon).await?;
    Ok(Json(picked))
}

pub async fn place_name(
    query: Result<Query<PointQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PlaceNameResponse>, ApiError> {
    let Query(query) = query?;
    let coord = ProjectedCoord::parse(&query.easting, &query.northing)?;
    let name = state.location_service.place_name(coord).await;
    Ok(Json(PlaceNameResponse { name }))
}

pub async fn query_window(
    query: Result<Query<WindowQuery>, QueryRejection>,
) -> Result<Json<QueryWindow>, ApiError> {
    let Query(query) = query?;
    Ok(Json(QueryWindow::parse(&query.start, &query.days)?))
}

pub async fn climate_table(
    query: Result<Query<ClimateQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClimateResponse>, ApiError> {
    let Query(query) = query?;
    let coord = ProjectedCoord::parse(&query.easting, &query.northing)?;
    let window = QueryWindow::parse(&query.start, &query.days)?;

    let table = state.climate_service.climate_table(coord, &window).await?;

    Ok(Json(ClimateResponse {
        coordinate: coord,
        window,
        altitude: table.altitude(),
        columns: table.parameters(),
        rows: table.rows(),
    }))
}

/// Chart description for the renderer; looks up a name when none was given
pub async fn climate_chart(
    query: Result<Query<ClimateQuery>, QueryRejection>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartData>, ApiError> {
    let Query(query) = query?;
    let coord = ProjectedCoord::parse(&query.easting, &query.northing)?;
    let window = QueryWindow::parse(&query.start, &query.days)?;

    let location = match query.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name,
        None => state.location_service.place_name(coord).await,
    };

    let chart = state.climate_service.chart(coord, &window, location).await?;
    Ok(Json(chart))
}
