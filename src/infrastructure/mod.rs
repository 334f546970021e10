// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod geonorge_place_names;
pub mod nve_grid_repository;
pub mod retry;
