//! Defines the app level error type and conversions to rendered HTML pages.
use axum::response::{IntoResponse, Response};

use crate::internal_server_error::InternalServerError;

/// The errors that may occur while serving a request.
///
/// Errors that occur while loading the dataset are reported separately by
/// [DataLoadError](crate::DataLoadError) since they stop the server from starting.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::JSONSerializationError(error) => {
                tracing::error!("Could not serialize the dashboard as JSON: {error}");
                InternalServerError {
                    description: "Could not prepare the dashboard data.",
                    fix: "Try again later or check the server logs",
                }
                .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn serialization_error_renders_500() {
        let response = Error::JSONSerializationError("boom".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
