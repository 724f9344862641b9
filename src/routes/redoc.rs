//! ReDoc route.

use crate::{extract::RootPath, html, router::DocsState};
use axum::{extract::State, response::Html};

/// GET handler rendering the ReDoc viewer against the local assets.
pub async fn serve(State(state): State<DocsState>, RootPath(root_path): RootPath) -> Html<String> {
    let openapi_url = format!("{root_path}{}", state.openapi_path);
    let title = format!("{} - ReDoc", state.title);

    Html(html::redoc_html(&openapi_url, &title))
}
