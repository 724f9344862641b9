//! Settings / Configuration.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Configuration for the replacement documentation routes.
///
/// Mirrors the documentation-related configuration a host application
/// declares. Every optional path doubles as a toggle: leaving it unset (or
/// setting it to the empty string) disables the corresponding route without
/// an error.
#[derive(Clone, Debug, Deserialize)]
pub struct DocsSettings {
    /// Application title, used in the viewer page titles.
    #[serde(default = "default_title")]
    pub title: String,
    /// Path serving the OpenAPI document. Unset disables every
    /// documentation route.
    #[serde(default = "default_openapi_path")]
    pub openapi_path: Option<String>,
    /// Path of the Swagger UI page, mounted relative to [`urls::docs_prefix`].
    ///
    /// [`urls::docs_prefix`]: crate::urls::docs_prefix
    #[serde(default = "default_docs_path")]
    pub docs_path: Option<String>,
    /// Path of the ReDoc page, mounted relative to the same prefix.
    #[serde(default = "default_redoc_path")]
    pub redoc_path: Option<String>,
    /// Path of the static page completing the Swagger UI OAuth2 redirect
    /// handshake. Only mounted when the Swagger UI page itself is.
    #[serde(default = "default_oauth2_redirect_path")]
    pub oauth2_redirect_path: Option<String>,
    /// Directory holding the local viewer bundles, served under `/assets`.
    /// Skipped silently when the directory does not exist on disk.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: Option<PathBuf>,
    /// OAuth2 init options handed to `ui.initOAuth` on the Swagger UI page.
    #[serde(default)]
    pub init_oauth: Option<Value>,
    /// Arbitrary Swagger UI parameter overrides, passed through to the
    /// viewer unchanged.
    #[serde(default)]
    pub swagger_ui_parameters: Option<Map<String, Value>>,
}

impl Default for DocsSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            openapi_path: default_openapi_path(),
            docs_path: default_docs_path(),
            redoc_path: default_redoc_path(),
            oauth2_redirect_path: default_oauth2_redirect_path(),
            assets_dir: default_assets_dir(),
            init_oauth: None,
            swagger_ui_parameters: None,
        }
    }
}

impl DocsSettings {
    /// Load settings from an optional settings file plus environment
    /// variables.
    ///
    /// Environment variables use the `DOCS` prefix, e.g.
    /// `DOCS__OPENAPI_PATH="/openapi.json"`.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(&path.as_path().display().to_string()));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("DOCS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Treats an unset or empty path as absent.
pub(crate) fn configured(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|path| !path.is_empty())
}

fn default_title() -> String {
    "API".to_owned()
}

fn default_openapi_path() -> Option<String> {
    Some("/openapi.json".to_owned())
}

fn default_docs_path() -> Option<String> {
    Some("/docs".to_owned())
}

fn default_redoc_path() -> Option<String> {
    Some("/redoc".to_owned())
}

fn default_oauth2_redirect_path() -> Option<String> {
    Some("/docs/oauth2-redirect".to_owned())
}

fn default_assets_dir() -> Option<PathBuf> {
    Some(PathBuf::from("assets"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = DocsSettings::default();

        assert_eq!(settings.title, "API");
        assert_eq!(settings.openapi_path.as_deref(), Some("/openapi.json"));
        assert_eq!(settings.docs_path.as_deref(), Some("/docs"));
        assert_eq!(settings.redoc_path.as_deref(), Some("/redoc"));
        assert_eq!(
            settings.oauth2_redirect_path.as_deref(),
            Some("/docs/oauth2-redirect")
        );
        assert_eq!(settings.assets_dir.as_deref(), Some("assets".as_ref()));
        assert!(settings.init_oauth.is_none());
        assert!(settings.swagger_ui_parameters.is_none());
    }

    #[test]
    fn test_load_without_sources_yields_defaults() {
        let settings = DocsSettings::load(None).unwrap();

        assert_eq!(settings.openapi_path.as_deref(), Some("/openapi.json"));
        assert_eq!(settings.title, "API");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("docs-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
title = "Example"
openapi_path = "/api/openapi.json"
docs_path = ""
"#,
        )
        .unwrap();

        let settings = DocsSettings::load(Some(path.clone())).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(settings.title, "Example");
        assert_eq!(settings.openapi_path.as_deref(), Some("/api/openapi.json"));
        // An empty path counts as absent.
        assert_eq!(configured(&settings.docs_path), None);
        // Untouched keys fall back to their defaults.
        assert_eq!(settings.redoc_path.as_deref(), Some("/redoc"));
    }

    #[test]
    fn test_configured_filters_empty_paths() {
        assert_eq!(configured(&None), None);
        assert_eq!(configured(&Some(String::new())), None);
        assert_eq!(configured(&Some("/docs".to_owned())), Some("/docs"));
    }
}
