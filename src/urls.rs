//! Documentation URL derivation.

/// Removes exactly one literal trailing `.json` from a path.
///
/// Paths without the suffix are returned unchanged; this is a plain string
/// operation, never an error.
pub fn strip_json_suffix(path: &str) -> &str {
    path.strip_suffix(".json").unwrap_or(path)
}

/// Mount prefix for the documentation pages, derived from the OpenAPI
/// document path.
///
/// When the final segment names a `.json` document the whole segment is
/// dropped, so the pages mount next to the document:
/// `/openapi.json` yields `` and `/api/openapi.json` yields `/api`.
/// Paths without the suffix are used as the prefix unchanged.
pub fn docs_prefix(openapi_path: &str) -> &str {
    let stem = strip_json_suffix(openapi_path);
    if stem.len() == openapi_path.len() {
        return openapi_path;
    }

    match stem.rfind('/') {
        Some(index) => &openapi_path[..index],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_suffix() {
        assert_eq!(strip_json_suffix("/openapi.json"), "/openapi");
        assert_eq!(strip_json_suffix("/openapi"), "/openapi");
        assert_eq!(strip_json_suffix("/openapi.yaml"), "/openapi.yaml");
        assert_eq!(strip_json_suffix(""), "");
        // Exactly one trailing occurrence is removed.
        assert_eq!(strip_json_suffix("/spec.json.json"), "/spec.json");
    }

    #[test]
    fn test_docs_prefix_drops_the_document_segment() {
        assert_eq!(docs_prefix("/openapi.json"), "");
        assert_eq!(docs_prefix("/api/openapi.json"), "/api");
        assert_eq!(docs_prefix("/api/v1/openapi.json"), "/api/v1");
    }

    #[test]
    fn test_docs_prefix_keeps_paths_without_suffix() {
        assert_eq!(docs_prefix("/openapi"), "/openapi");
        assert_eq!(docs_prefix("/api/spec"), "/api/spec");
    }
}
