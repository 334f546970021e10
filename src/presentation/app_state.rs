// Application state for HTTP handlers
use crate::application::climate_service::ClimateService;
use crate::application::location_service::LocationService;

#[derive(Clone)]
pub struct AppState {
    pub climate_service: ClimateService,
    pub location_service: LocationService,
}
