#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! Customized interactive-documentation routes for [axum] applications.
//!
//! The crate replaces an application's default documentation endpoints with a
//! small fixed set of routes derived from its configured paths:
//!
//! * the OpenAPI document, with `422` responses and the
//!   `HTTPValidationError` / `ValidationError` component schemas removed,
//! * Swagger UI and ReDoc viewer pages served against local static assets
//!   instead of a CDN,
//! * the static OAuth2 redirect page required by the Swagger UI login flow,
//! * the `/assets` directory holding the viewer bundles.
//!
//! ```no_run
//! use axum::Router;
//! use axum_docs_ext::{DocsRouter, DocsSettings};
//!
//! // Any `Fn() -> utoipa::openapi::OpenApi` works as the document source,
//! // e.g. `ApiDoc::openapi` for a `#[derive(OpenApi)]` type.
//! let docs = DocsRouter::new(DocsSettings::default(), utoipa::openapi::OpenApi::default);
//! let app: Router = Router::new().merge(docs.into_router());
//! ```

pub mod error;
pub mod extract;
pub mod html;
pub mod openapi;
pub mod router;
pub mod routes;
pub mod settings;
pub mod urls;

pub use openapi::{strip_validation_errors, OpenApiSource, SchemaCache};
pub use router::DocsRouter;
pub use settings::DocsSettings;
