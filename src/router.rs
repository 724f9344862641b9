//! Replacement documentation [`Router`] assembly.

use crate::{
    openapi::{OpenApiSource, SchemaCache},
    routes,
    settings::{self, DocsSettings},
    urls,
};
use axum::{routing::get, Router};
use serde_json::{Map, Value};
use std::{fmt, sync::Arc};
use tower_http::services::ServeDir;
use tracing::debug;

/// Route under which the local viewer assets are served.
pub const ASSETS_ROUTE: &str = "/assets";

/// Shared state behind the documentation routes.
///
/// Assembled once at installation time; handlers treat it as read-only apart
/// from the [`SchemaCache`] slot.
#[derive(Clone)]
pub struct DocsState {
    pub(crate) title: String,
    pub(crate) openapi_path: String,
    pub(crate) oauth2_redirect_path: Option<String>,
    pub(crate) init_oauth: Option<Value>,
    pub(crate) swagger_ui_parameters: Option<Map<String, Value>>,
    pub(crate) source: Arc<dyn OpenApiSource>,
    pub(crate) cache: SchemaCache,
}

impl fmt::Debug for DocsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsState")
            .field("title", &self.title)
            .field("openapi_path", &self.openapi_path)
            .field("oauth2_redirect_path", &self.oauth2_redirect_path)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Installs the replacement documentation routes.
///
/// The full route list is assembled before anything is handed to the host:
/// merge the produced [`Router`] into a freshly built application router, so
/// that afterwards exactly the replacement routes exist and none of the
/// host framework's default documentation routes remain.
///
/// Route registration rules, each skipped silently when its governing path
/// is unset:
///
/// 1. `openapi_path` serves the stripped OpenAPI document.
/// 2. `docs_path` (requires `openapi_path`) serves Swagger UI, mounted at
///    [`urls::docs_prefix`]` + docs_path`; with `oauth2_redirect_path` also
///    set, the static OAuth2 redirect page is mounted the same way.
/// 3. `redoc_path` (requires `openapi_path`) serves ReDoc.
/// 4. An existing `assets_dir` (requires `openapi_path`) is served under
///    [`ASSETS_ROUTE`]; a directory missing on disk is skipped, not an
///    error.
pub struct DocsRouter {
    settings: DocsSettings,
    source: Arc<dyn OpenApiSource>,
    cache: SchemaCache,
}

impl DocsRouter {
    /// New installer over the application's documentation settings and its
    /// OpenAPI document source.
    pub fn new(settings: DocsSettings, source: impl OpenApiSource) -> Self {
        Self {
            settings,
            source: Arc::new(source),
            cache: SchemaCache::new(),
        }
    }

    /// Handle on the schema cache.
    ///
    /// After the first request to the OpenAPI route the cache holds the
    /// stripped document that was served.
    pub fn schema_cache(&self) -> SchemaCache {
        self.cache.clone()
    }

    /// Build the replacement router.
    pub fn into_router(self) -> Router {
        let mut router = Router::new();

        let openapi_path = settings::configured(&self.settings.openapi_path)
            .map(str::to_owned)
            .unwrap_or_default();

        if openapi_path.is_empty() {
            debug!(
                subject = "docs",
                category = "init",
                "no OpenAPI path configured, skipping all documentation routes"
            );
        } else {
            router = router.route(&openapi_path, get(routes::openapi::serve));
            debug!(
                subject = "docs",
                category = "init",
                "serving OpenAPI document at {}",
                openapi_path
            );

            let prefix = urls::docs_prefix(&openapi_path);

            if let Some(docs_path) = settings::configured(&self.settings.docs_path) {
                let docs_url = format!("{prefix}{docs_path}");
                router = router.route(&docs_url, get(routes::swagger::serve));
                debug!(
                    subject = "docs",
                    category = "init",
                    "serving Swagger UI at {}",
                    docs_url
                );

                if let Some(redirect_path) =
                    settings::configured(&self.settings.oauth2_redirect_path)
                {
                    let redirect_url = format!("{prefix}{redirect_path}");
                    router = router.route(&redirect_url, get(routes::swagger::oauth2_redirect));
                    debug!(
                        subject = "docs",
                        category = "init",
                        "serving OAuth2 redirect page at {}",
                        redirect_url
                    );
                }
            }

            if let Some(redoc_path) = settings::configured(&self.settings.redoc_path) {
                let redoc_url = format!("{prefix}{redoc_path}");
                router = router.route(&redoc_url, get(routes::redoc::serve));
                debug!(
                    subject = "docs",
                    category = "init",
                    "serving ReDoc at {}",
                    redoc_url
                );
            }

            match &self.settings.assets_dir {
                Some(dir) if dir.is_dir() => {
                    router = router.nest_service(ASSETS_ROUTE, ServeDir::new(dir));
                    debug!(
                        subject = "docs",
                        category = "init",
                        "serving viewer assets from {}",
                        dir.display()
                    );
                }
                Some(dir) => {
                    debug!(
                        subject = "docs",
                        category = "init",
                        "assets directory {} does not exist, skipping the {} mount",
                        dir.display(),
                        ASSETS_ROUTE
                    );
                }
                None => {}
            }
        }

        let state = DocsState {
            title: self.settings.title,
            openapi_path,
            oauth2_redirect_path: self
                .settings
                .oauth2_redirect_path
                .filter(|path| !path.is_empty()),
            init_oauth: self.settings.init_oauth,
            swagger_ui_parameters: self.settings.swagger_ui_parameters,
            source: self.source,
            cache: self.cache,
        };

        router.with_state(state)
    }
}

impl fmt::Debug for DocsRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsRouter")
            .field("settings", &self.settings)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
