// Error taxonomy shared by the domain and application layers
use super::parameter::ClimateParameter;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClimateError {
    #[error("projection setup failed: {0}")]
    Configuration(String),

    #[error("grid service request for {parameter} failed: {reason}")]
    RemoteService {
        parameter: ClimateParameter,
        reason: String,
    },

    #[error("series {parameter} has {actual} values but the window has {expected} ticks")]
    ShapeMismatch {
        parameter: ClimateParameter,
        expected: usize,
        actual: usize,
    },

    #[error("altitude for {parameter} is {actual} m, expected {expected} m")]
    AltitudeMismatch {
        parameter: ClimateParameter,
        expected: f64,
        actual: f64,
    },

    #[error("no parameter series to assemble")]
    EmptySeries,

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ClimateError {
    pub fn remote(parameter: ClimateParameter, reason: impl Into<String>) -> Self {
        Self::RemoteService {
            parameter,
            reason: reason.into(),
        }
    }
}
