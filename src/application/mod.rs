// Application layer - Use cases and repository interfaces
pub mod climate_service;
pub mod grid_series_repository;
pub mod location_service;
pub mod place_name_lookup;
pub mod series_assembler;
