//! Request extractors.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use http::request::Parts;
use std::convert::Infallible;

/// Header carrying the URL prefix under which the application is mounted,
/// set by the hosting server / reverse proxy.
pub const ROOT_PATH_HEADER: &str = "x-forwarded-prefix";

/// URL prefix under which the application is mounted.
///
/// Taken from the [`ROOT_PATH_HEADER`] request header with any trailing `/`
/// removed; requests without the header yield the empty string. Extraction
/// never rejects.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RootPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RootPath
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let root_path = parts
            .headers
            .get(ROOT_PATH_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .trim_end_matches('/');

        Ok(Self(root_path.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;

    async fn extract(request: Request<()>) -> RootPath {
        let (mut parts, _) = request.into_parts();
        RootPath::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_yields_empty_root_path() {
        let request = Request::builder().uri("/docs").body(()).unwrap();

        assert_eq!(extract(request).await, RootPath(String::new()));
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let request = Request::builder()
            .uri("/docs")
            .header(ROOT_PATH_HEADER, "/api/v1/")
            .body(())
            .unwrap();

        assert_eq!(extract(request).await, RootPath("/api/v1".to_owned()));
    }
}
