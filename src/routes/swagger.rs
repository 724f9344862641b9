//! Swagger UI routes.

use crate::{
    error::AppResult,
    extract::RootPath,
    html::{self, SwaggerUiPage},
    router::DocsState,
    urls,
};
use axum::{extract::State, response::Html};

/// GET handler rendering the Swagger UI viewer against the local assets.
pub async fn serve(
    State(state): State<DocsState>,
    RootPath(root_path): RootPath,
) -> AppResult<Html<String>> {
    let openapi_url = format!("{root_path}{}", state.openapi_path);
    // TODO: the root path ends up in this URL twice whenever the application
    // is mounted under a prefix. Confirm which form deployed reverse proxies
    // expect before changing the derivation.
    let oauth2_redirect_url = state
        .oauth2_redirect_path
        .as_deref()
        .map(|redirect_path| {
            format!(
                "{}{root_path}{redirect_path}",
                urls::docs_prefix(&openapi_url)
            )
        });

    let title = format!("{} - Swagger UI", state.title);
    let page = SwaggerUiPage {
        openapi_url: &openapi_url,
        title: &title,
        oauth2_redirect_url: oauth2_redirect_url.as_deref(),
        init_oauth: state.init_oauth.as_ref(),
        parameters: state.swagger_ui_parameters.as_ref(),
    };

    Ok(Html(html::swagger_ui_html(&page)?))
}

/// GET handler returning the static page completing the Swagger UI OAuth2
/// redirect handshake.
pub async fn oauth2_redirect() -> Html<&'static str> {
    Html(html::OAUTH2_REDIRECT_HTML)
}
