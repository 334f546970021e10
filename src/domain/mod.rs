// Domain layer - Pure models and coordinate math
pub mod chart;
pub mod climate_table;
pub mod coordinate;
pub mod error;
pub mod parameter;
pub mod projection;
pub mod query_window;
