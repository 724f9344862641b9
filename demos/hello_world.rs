//! Hello-world application wired to the replacement documentation routes.
//!
//! ```console
//! cargo run --example hello-world
//! ```
//!
//! Then browse <http://localhost:8000/docs> or <http://localhost:8000/redoc>.

use anyhow::Result;
use axum::{routing::get, Json, Router};
use axum_docs_ext::{DocsRouter, DocsSettings};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

/// API documentation generator.
#[derive(OpenApi)]
#[openapi(paths(hello_world))]
struct ApiDoc;

/// GET handler greeting the caller.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String)
    )
)]
async fn hello_world() -> Json<&'static str> {
    Json("Hello World!")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = DocsSettings {
        title: "Hello World".to_owned(),
        ..DocsSettings::load(None)?
    };
    let docs = DocsRouter::new(settings, ApiDoc::openapi);

    let app = Router::new()
        .route("/", get(hello_world))
        .merge(docs.into_router());

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000);
    info!(
        subject = "app_start",
        category = "init",
        "listening on {}",
        addr
    );

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
