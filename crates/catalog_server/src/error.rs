//! Mapping of service results onto HTTP responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use catalog_error::CatalogError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use tracing::error;

/// Title used for every internal failure response.
pub const INTERNAL_ERROR_TITLE: &str = "An error occurred while processing your request.";

/// Problem details body returned with a 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    /// Short human-readable summary
    pub title: String,
    /// HTTP status code
    pub status: u16,
}

impl ProblemDetails {
    /// The generic internal-failure problem.
    pub fn internal() -> Self {
        Self {
            title: INTERNAL_ERROR_TITLE.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        }
    }
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ApiError {
    /// The addressed content does not exist; empty 404.
    #[display("Not Found")]
    NotFound,
    /// Any store fault; details stay in the logs.
    #[display("Internal Server Error")]
    Internal,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        error!(error = %err, "Unhandled store fault");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "application/problem+json")],
                Json(ProblemDetails::internal()),
            )
                .into_response(),
        }
    }
}
