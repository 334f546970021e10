// Mapping of domain errors onto HTTP responses
use crate::domain::error::ClimateError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub struct ApiError(pub ClimateError);

impl From<ClimateError> for ApiError {
    fn from(err: ClimateError) -> Self {
        Self(err)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(ClimateError::InvalidInput(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ClimateError::InvalidInput(_) | ClimateError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            ClimateError::RemoteService { .. }
            | ClimateError::ShapeMismatch { .. }
            | ClimateError::AltitudeMismatch { .. }
            | ClimateError::EmptySeries => StatusCode::BAD_GATEWAY,
            ClimateError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        } else {
            tracing::debug!("Rejected request: {}", self.0);
        }
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}
