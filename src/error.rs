//! Error representation for the documentation handlers.
//!
//! Configuration absence, missing keys during document stripping and a
//! missing assets directory are all handled silently; the only fallible step
//! left in a handler is serializing the viewer page parameters.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;

/// Standard return type out of the documentation handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Error raised while rendering a documentation response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Serializing the viewer page parameters failed.
    #[error("failed to render documentation page: {0}")]
    Render(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({
            "errors": [{
                "status": status.as_u16(),
                "title": status.canonical_reason(),
                "detail": self.to_string(),
            }]
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_errors_map_to_internal_server_error() {
        let error = AppError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
