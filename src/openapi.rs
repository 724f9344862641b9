//! OpenAPI document post-processing.

use parking_lot::RwLock;
use std::{fmt, sync::Arc};
use utoipa::openapi::OpenApi;

/// Response code removed from every operation.
const VALIDATION_RESPONSE_CODE: &str = "422";

/// Component schemas removed from the document.
const VALIDATION_SCHEMAS: [&str; 2] = ["HTTPValidationError", "ValidationError"];

/// Produces the application's OpenAPI document on demand.
///
/// Generation itself stays opaque to this crate. Any `Fn() -> OpenApi` works,
/// e.g. the `ApiDoc::openapi` associated function of a
/// `#[derive(utoipa::OpenApi)]` type.
pub trait OpenApiSource: Send + Sync + 'static {
    /// Regenerate the document.
    fn openapi(&self) -> OpenApi;
}

impl<F> OpenApiSource for F
where
    F: Fn() -> OpenApi + Send + Sync + 'static,
{
    fn openapi(&self) -> OpenApi {
        self()
    }
}

/// Removes validation-error noise from a generated OpenAPI document.
///
/// Deletes the `422` entry from every operation's responses and drops the
/// `HTTPValidationError` / `ValidationError` component schemas. Keys that are
/// already absent are left alone, so repeated application is a no-op. The
/// processed document is returned by value; whether to cache it is the
/// caller's decision.
pub fn strip_validation_errors(mut document: OpenApi) -> OpenApi {
    for path_item in document.paths.paths.values_mut() {
        for operation in path_item.operations.values_mut() {
            operation.responses.responses.remove(VALIDATION_RESPONSE_CODE);
        }
    }

    if let Some(components) = document.components.as_mut() {
        for schema in VALIDATION_SCHEMAS {
            components.schemas.remove(schema);
        }
    }

    document
}

/// The most recently served, stripped OpenAPI document.
///
/// The OpenAPI route regenerates the document on every request and stores the
/// stripped result here, so the host application can observe the same
/// document its clients received. Concurrent requests may race on the slot;
/// since stripping is idempotent the worst outcome is redundant regeneration
/// work, never a corrupted document.
#[derive(Clone, Default)]
pub struct SchemaCache {
    inner: Arc<RwLock<Option<OpenApi>>>,
}

impl SchemaCache {
    /// New empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last document served by the OpenAPI route, if any.
    pub fn get(&self) -> Option<OpenApi> {
        self.inner.read().clone()
    }

    pub(crate) fn store(&self, document: OpenApi) {
        *self.inner.write() = Some(document);
    }
}

impl fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaCache")
            .field("populated", &self.inner.read().is_some())
            .finish()
    }
}
