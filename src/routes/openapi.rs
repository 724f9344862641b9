//! Customized OpenAPI document route.

use crate::{openapi::strip_validation_errors, router::DocsState};
use axum::{extract::State, Json};
use utoipa::openapi::OpenApi;

/// GET handler serving the application's OpenAPI document with
/// validation-error noise removed.
///
/// The document is regenerated on every request; the stripped result also
/// replaces the cached schema, so later reads observe exactly what clients
/// received.
pub async fn serve(State(state): State<DocsState>) -> Json<OpenApi> {
    let document = strip_validation_errors(state.source.openapi());
    state.cache.store(document.clone());

    Json(document)
}
