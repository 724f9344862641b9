//! Viewer page rendering.
//!
//! The markup mirrors the stock Swagger UI / ReDoc pages, except that the
//! JS and CSS bundles are loaded from the local [`/assets`] mount instead of
//! a CDN and the favicons are embedded as data URIs.
//!
//! [`/assets`]: crate::router::ASSETS_ROUTE

use serde_json::{json, Map, Value};

/// Local URL of the Swagger UI bundle.
pub const SWAGGER_UI_JS_URL: &str = "/assets/js/swagger-ui-bundle.js";

/// Local URL of the Swagger UI stylesheet.
pub const SWAGGER_UI_CSS_URL: &str = "/assets/css/swagger-ui.css";

/// Local URL of the standalone ReDoc bundle.
pub const REDOC_JS_URL: &str = "/assets/js/redoc.standalone.js";

/// Embedded favicon for the Swagger UI page.
pub const SWAGGER_UI_FAVICON: &str = "data:image/svg+xml;base64,PHN2ZyBoZWlnaHQ9IjUxMiIgd2lkdGg9IjUxMiIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cGF0aCBkPSJtMTI3LjcxMTA4MjUgMzQuNDUzMTM2NGMtMTcwLjI4MTQ3ODkgOTguMTY5MjA0Ny0xNzAuMjgxNDAyNiAzNDQuOTI0NTkxMSAwIDQ0My4wOTM3MTk1czM4NC4yODg5MTc1LTI1LjIwODQ3NyAzODQuMjg4OTE3NS0yMjEuNTQ2ODI1NC0yMTQuMDA3NTA3My0zMTkuNzE2MDMzOS0zODQuMjg4OTE3NS0yMjEuNTQ2ODk0MXptNDguNjYzMDQ3NyAzNzQuMTAwMTE2OGMtMTIyLjEzOTgwMSAwLTE5LjkyOTMwNi0xMzcuMzMzNTI2Ni0xMDQuNzc2MTYxMi0xMzQuOTY1NzI4OHYtMzYuNzAxMTI2MWM4MC4wMzg2NzM0IDkuOTMwNjE4My0xNS4zOTA2NTE3LTE0Ni4yMTI1NTQ5IDEwNC4xODM5ODI4LTEzMi41OTc2MjU3djI4LjQxMzc4MDJjLTY2LjY5MzQyMDQgMS41Nzg1ODI4LS4zOTQ2MDc1IDg2LjgxOTkxNTgtNjAuMzc5MjcyNSAxMjIuNTM0NDA4NiA2MC4zNzkyNzI1IDM5LjY2MDg4ODctMy4xNTcxMDQ1IDEzMC4wMzI1MzE3IDYwLjk3MTQ1MDggMTIwLjE2NjU5NTV2MzMuMTQ5Njk2M3ptLTQuMjg1ODEyMy0xMzMuNDIyMzMyOGMtMTMuNzgxMTI3OS03Ljk0NDk3NjgtMTMuNzgxMTI3OS0yNy45MTUxNzY0IDAtMzUuODYwMDc2OSAxMy43ODEwNTE2LTcuOTQ0OTkyMSAzMS4xMDA5MDY0IDIuMDQwMTE1NCAzMS4xMDA5MDY0IDE3LjkyOTk5MjdzLTE3LjMxOTg1NDggMjUuODc1LTMxLjEwMDkwNjQgMTcuOTMwMDg0MnptNzMuNTI5MTQ0MyAwYy0xMy43ODEwNjY5LTcuOTQ0OTc2OC0xMy43ODEwNjY5LTI3LjkxNTE3NjQgMC0zNS44NjAwNzY5IDEzLjc4MTA2NjktNy45NDQ5OTIxIDMxLjEwMDg5MTEgMi4wNDAxMTU0IDMxLjEwMDg5MTEgMTcuOTI5OTkyN3MtMTcuMzE5ODI0MiAyNS44NzUtMzEuMTAwODkxMSAxNy45MzAwODQyem03My41MjkxNDQyIDBjLTEzLjc4MTA2NjktNy45NDQ5NzY4LTEzLjc4MTA2NjktMjcuOTE1MTc2NCAwLTM1Ljg2MDA3NjkgMTMuNzgxMDY2OS03Ljk0NDk5MjEgMzEuMTAwOTgyNyAyLjA0MDExNTQgMzEuMTAwOTgyNyAxNy45Mjk5OTI3cy0xNy4zMTk5MTU4IDI1Ljg3NS0zMS4xMDA5ODI3IDE3LjkzMDA4NDJ6bTE2LjQ3OTMwOTEgMTMzLjQyMjMzMjh2LTMzLjE0OTY4ODdjNjQuMTI4NTcwNiA5Ljg2NTkzNjMuNTkyMTYzMS04MC41MDU3MDY4IDYwLjk3MTQzNTUtMTIwLjE2NjU5NTUtNTkuOTg0NjQ5Ny0zNS43MTQ0OTI4IDYuMzE0MTQ3OS0xMjAuOTU1ODI1OC02MC4zNzkyNzI1LTEyMi41MzQ0MDg2di0yOC40MTM3ODAyYzExOS41NzQ2NDYtMTMuNjE0OTI5MiAyNC4xNDUzMjQ3IDE0Mi41MjgyMjg4IDEwNC4xODM5OTA1IDEzMi41OTc2MjU3djM2LjcwMTEyNjFjLTg0Ljg0Njg2MjctMi4zNjc4MDU0IDE3LjM2MzY0NzYgMTM0Ljk2NTcyMTItMTA0Ljc3NjE1MzUgMTM0Ljk2NTcyMTJ6Ii8+PC9zdmc+";

/// Embedded favicon for the ReDoc page.
pub const REDOC_FAVICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHZpZXdCb3g9IjAgMCAzMDAgMzAwIiB3aWR0aD0iMzAwIiBoZWlnaHQ9IjMwMCI+Cgk8ZGVmcz4KCQk8aW1hZ2Ugd2lkdGg9IjI5MiIgaGVpZ2h0PSIyOTIiIGlkPSJpbWcxIiBocmVmPSJkYXRhOmltYWdlL3BuZztiYXNlNjQsaVZCT1J3MEtHZ29BQUFBTlNVaEVVZ0FBQVNRQUFBRWtBUU1BQUFDOE45NnZBQUFBQVhOU1IwSUIyY2tzZndBQUFBWlFURlJGQUFBQUFBQUFwV2U1endBQUFBSjBVazVUQVA5YmtTSzFBQUFFT2tsRVFWUjRuTzJaUWJLak1BeEVvVmg0eVJGOEZCL05ISTJqY0lRcy95TDFtY0VCZ2xwdHFpZmh6MlF4M2lYMXdLMjJBVmxxd3N6SDJCeEhyRkR6Y0tSU2pib2ZxVnlqekp4MTZ1dEFWYUY1MXFoSm9yNGthdGFvU2FLZVUrWVQ2bHVpbnNMU0diWGJIOCtvMjBiMVo5Uys0clg5VmNaVC9xcnN1TGEvUi9mQUJqRDIyMUtya3NOU0JodjEwYUliL2pFQ0ZWQkhnSnMvcnpVNmlQeFYyZkdQT01QVHNJd09naXhUWXBDUEtZODZXaFprbWVFWVpIRjJRQ3FnMnA1WVVXWXdhanU4K1NiTXFHMlpGVVVZWHVhc0tNS00yc2lzNkZCdHo2eG9jT0U2WnNWaWtJbXBaVllzT214TW1leUtSWWVOQ1crKzZiQXhSVWExR0ZOZ3RpNDZCcmk1dDNYUk1jTE52YTJManNuOFFXM3RVUzFLMk5SYUNpVnNhbTFNa1ZFdHh0UXo4eHVNeVVuWTFKNUwyTlNpQkVKRmpKeWEzMk5NbVpudnFNU29nSkdqMERJNnBDS2pXdlNuWnd2WllPU0JMWkZJWmZESENTMGpBZFZXS1BDSExuZVVxQjc5eVd5NW5UK1VDa2hoT0dWMFBzblNLTElwV3FUNkNqVUJSVFpGZzFTb1VEZWtCazlsb0xvSzlTVlFDU2dYOUI5UXptdVZtanpWaXhTc1NCWXBzbG1EU01HNkpVWjFuaUpiK2tVcU1xckYxVlVwOG5nNHlpMUdHU28xdmtTUlI4MVJic25LeUpkUzA0OVJibUhMU1ArQWNxK1R5NmoyRFNwK0FqWDhwejZjOHRESFVxODlIWi96bmtDS3ZlVTA2aWZmcTFkK0ZhNzlwcjFERGVhMzl0MitNbE80TW9QUmNpWXQvM29ybDNPSG1NbFRMaFZSODlYUlU3aHNXaDZ0NWVSYWZxK2RGYlJ6aDNhRzBjNUQydG1xZGs1RFNqbnphZWRIN1N5cW5XdTFNM0xsdk8wS0p4T2pyRDIxT29BcjZJeWV3cHFDVnAvUWFoMWEzYVJXZzBHS2JBa1hPSzBOdVpDa09wTldzM0k2VjdHdStDalUwbHgxYWhWclEzS1ZycFd5SWJuYTJpcldsV0U5NVNxbFVoMVRxNGxxOVZXdFZxdlZmUk16MWRXUWFUMDZnRml0dHEzVnlYbk5IV1hRK3IyVElmVUNlRjhCWmZBZVJRSVpQV3ZxTk5qdlNNeXVEbVJvZlJpdHAwUDdReTMycWFSZVU4QjIxejdoVVVaaVBiRFNrTHJEYjdjakVreFEybWtZNHVQU3lWN2tRcHpOQkd2YnJ6SzJhK0laZExmelZjYnVZVDZqSm9uYTNUbURudTVJc2k3b0l3OFNOVXJVVGFMdUV2WGNxVmtTbGlSaDhZemFiVDN0WE85THBPM0NiVTdZMFMzSTM3Q0dZUlArTVFBV2pmek5qUW1vRm5WMHhodHo3ZkdQUEpPM1NVQWQwUWRKM2t3ZENmSXhnOUhCZ2l6TFluU2t1ZkwyTlRvQ3NhTE1ZRjVGMWErQ1ZjdXNLS0VidGJuMnRUSnFZKzNMWjlRR1p0Z3lnMUZiL1NLN05HZDBWRVMxdVpJcFdMV3Awcm0yYW50bVdJdHFNUTNaZFJpMUxxWFpkQmkxTGowcUk3N1d1VTVTOWhncm5XdWhKKzF5U2kxRGZyTnpQWUNFSCs1Y2s1NjBjdEtKMHFuSkNWMkdpK21kempYcFNSTUtEK0hhaWRVZEZjdDRzU2RORjFMclhHczk2WmM3MTBwUFdxdUkxTnBwU0ltZGF6cGNiVWlnYXVtQXExa0pWUHNXNWFwM2Y1dktGMUxwSFFyMmVaU29TdllIejE5bFUweVdxaXozMlB3Q1ZJalYySi9jbDJVQUFBQUFTVVZPUks1Q1lJST0iLz4KCQk8aW1hZ2Ugd2lkdGg9IjExNCIgaGVpZ2h0PSI4MyIgaWQ9ImltZzIiIGhyZWY9ImRhdGE6aW1hZ2UvcG5nO2Jhc2U2NCxpVkJPUncwS0dnb0FBQUFOU1VoRVVnQUFBSElBQUFCVEFRTUFBQUI1NDhHdEFBQUFBWE5TUjBJQjJja3Nmd0FBQUFaUVRGUkZBRVRVQUFBQW9TSnBpQUFBQUFKMFVrNVRBUDlia1NLMUFBQUFpMGxFUVZSNG5PM1VNUTZBSUF3RjBCb0hSby9BVVR3YUhLMUg4UWlPREFZRUJ2azJqY1lZallQZDNnTDBVNkFoYmJWUUx0dWNpa2V3ejNaZ1ZneE0wNG5uaTliV2N3ZG01ZnpRYiszUE5FYjZpM1lURUlvaHdUb2hUaVNHTjVMWm9UMVJqK2JuTGZlWDUwTkhyVC9iSEY2TS9hTmxSRHJ5L1VCNk5XMDAwNzMvUWZxTi84R0NSZjlsV2xZYUMycE03Z0tsb0FBQUFBQkpSVTVFcmtKZ2dnPT0iLz4KCTwvZGVmcz4KCTxzdHlsZT4KCQl0c3BhbiB7IHdoaXRlLXNwYWNlOnByZSB9Cgk8L3N0eWxlPgoJPHVzZSBpZD0iTGF5ZXIiIGhyZWY9IiNpbWcxIiB4PSI0IiB5PSI0IiAvPgoJPHVzZSBpZD0iTGF5ZXIiIGhyZWY9IiNpbWcyIiB4PSIxNDQiIHk9Ijc0IiAvPgo8L3N2Zz4=";

/// Parameters for the Swagger UI page.
#[derive(Debug)]
pub struct SwaggerUiPage<'a> {
    /// URL of the OpenAPI document the viewer loads.
    pub openapi_url: &'a str,
    /// Page title.
    pub title: &'a str,
    /// URL of the OAuth2 redirect page, when the flow is enabled.
    pub oauth2_redirect_url: Option<&'a str>,
    /// OAuth2 init options handed to `ui.initOAuth`.
    pub init_oauth: Option<&'a Value>,
    /// Overrides merged over the default viewer parameters.
    pub parameters: Option<&'a Map<String, Value>>,
}

/// Renders the Swagger UI page.
///
/// Serialization of the parameter objects is the only fallible step; the
/// markup itself is a plain string template.
pub fn swagger_ui_html(page: &SwaggerUiPage<'_>) -> Result<String, serde_json::Error> {
    let mut parameters = default_ui_parameters();
    if let Some(overrides) = page.parameters {
        for (key, value) in overrides {
            parameters.insert(key.clone(), value.clone());
        }
    }

    let mut config_entries = String::new();
    for (key, value) in &parameters {
        config_entries.push_str(&format!(
            "        {}: {},\n",
            serde_json::to_string(key)?,
            serde_json::to_string(value)?
        ));
    }

    let oauth2_redirect = match page.oauth2_redirect_url {
        Some(url) => format!("        oauth2RedirectUrl: window.location.origin + '{url}',\n"),
        None => String::new(),
    };

    let init_oauth = match page.init_oauth {
        Some(options) => format!("\n    ui.initOAuth({});", serde_json::to_string(options)?),
        None => String::new(),
    };

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link type="text/css" rel="stylesheet" href="{css_url}">
    <link rel="shortcut icon" href="{favicon}">
    <title>{title}</title>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="{js_url}"></script>
    <script>
    const ui = SwaggerUIBundle({{
        url: '{openapi_url}',
{config_entries}{oauth2_redirect}        presets: [
            SwaggerUIBundle.presets.apis,
            SwaggerUIBundle.SwaggerUIStandalonePreset
        ],
    }});{init_oauth}
    </script>
</body>
</html>"#,
        css_url = SWAGGER_UI_CSS_URL,
        favicon = SWAGGER_UI_FAVICON,
        title = page.title,
        js_url = SWAGGER_UI_JS_URL,
        openapi_url = page.openapi_url,
        config_entries = config_entries,
        oauth2_redirect = oauth2_redirect,
        init_oauth = init_oauth,
    ))
}

/// Renders the ReDoc page.
pub fn redoc_html(openapi_url: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="shortcut icon" href="{favicon}">
    <style>
        body {{
            margin: 0;
            padding: 0;
        }}
    </style>
</head>
<body>
    <noscript>
        ReDoc requires Javascript to function. Please enable it to browse the documentation.
    </noscript>
    <redoc spec-url="{openapi_url}"></redoc>
    <script src="{js_url}"></script>
</body>
</html>"#,
        title = title,
        favicon = REDOC_FAVICON,
        openapi_url = openapi_url,
        js_url = REDOC_JS_URL,
    )
}

/// Static page completing the Swagger UI OAuth2 redirect handshake.
pub const OAUTH2_REDIRECT_HTML: &str = r#"<!doctype html>
<html lang="en-US">
<head>
    <title>Swagger UI: OAuth2 Redirect</title>
</head>
<body>
<script>
    'use strict';
    function run () {
        var oauth2 = window.opener.swaggerUIRedirectOauth2;
        var sentState = oauth2.state;
        var redirectUrl = oauth2.redirectUrl;
        var isValid, qp, arr;

        if (/code|token|error/.test(window.location.hash)) {
            qp = window.location.hash.substring(1).replace('?', '&');
        } else {
            qp = location.search.substring(1);
        }

        arr = qp.split("&");
        arr.forEach(function (v,i,_arr) { _arr[i] = '"' + v.replace('=', '":"') + '"';});
        qp = qp ? JSON.parse('{' + arr.join() + '}',
                function (key, value) {
                    return key === "" ? value : decodeURIComponent(value);
                }
        ) : {};

        isValid = qp.state === sentState;

        if ((
           oauth2.auth.schema.get("flow") === "accessCode" ||
           oauth2.auth.schema.get("flow") === "authorizationCode" ||
           oauth2.auth.schema.get("flow") === "authorization_code"
        ) && !oauth2.auth.code) {
            if (!isValid) {
                oauth2.errCb({
                    authId: oauth2.auth.name,
                    source: "auth",
                    level: "warning",
                    message: "Authorization may be unsafe, passed state was changed in server. The passed state wasn't returned from auth server."
                });
            }

            if (qp.code) {
                delete oauth2.state;
                oauth2.auth.code = qp.code;
                oauth2.callback({auth: oauth2.auth, redirectUrl: redirectUrl});
            } else {
                let oauthErrorMsg;
                if (qp.error) {
                    oauthErrorMsg = "["+qp.error+"]: " +
                        (qp.error_description ? qp.error_description+ ". " : "no accessCode received from the server. ") +
                        (qp.error_uri ? "More info: "+qp.error_uri : "");
                }

                oauth2.errCb({
                    authId: oauth2.auth.name,
                    source: "auth",
                    level: "error",
                    message: oauthErrorMsg || "[Authorization failed]: no accessCode received from the server."
                });
            }
        } else {
            oauth2.callback({auth: oauth2.auth, token: qp, isValid: isValid, redirectUrl: redirectUrl});
        }
        window.close();
    }

    if (document.readyState !== 'loading') {
        run();
    } else {
        document.addEventListener('DOMContentLoaded', function () {
            run();
        });
    }
</script>
</body>
</html>"#;

/// Default Swagger UI parameters, applied before the configured overrides.
fn default_ui_parameters() -> Map<String, Value> {
    let mut parameters = Map::new();
    parameters.insert("dom_id".to_owned(), json!("#swagger-ui"));
    parameters.insert("layout".to_owned(), json!("BaseLayout"));
    parameters.insert("deepLinking".to_owned(), json!(true));
    parameters.insert("showExtensions".to_owned(), json!(true));
    parameters.insert("showCommonExtensions".to_owned(), json!(true));
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>(oauth2_redirect_url: Option<&'a str>) -> SwaggerUiPage<'a> {
        SwaggerUiPage {
            openapi_url: "/openapi.json",
            title: "Example - Swagger UI",
            oauth2_redirect_url,
            init_oauth: None,
            parameters: None,
        }
    }

    #[test]
    fn test_swagger_ui_page_references_local_assets() {
        let html = swagger_ui_html(&page(None)).unwrap();

        assert!(html.contains("url: '/openapi.json'"));
        assert!(html.contains("<title>Example - Swagger UI</title>"));
        assert!(html.contains(SWAGGER_UI_JS_URL));
        assert!(html.contains(SWAGGER_UI_CSS_URL));
        assert!(html.contains("data:image/svg+xml;base64,"));
        assert!(!html.contains("oauth2RedirectUrl"));
        assert!(!html.contains("initOAuth"));
    }

    #[test]
    fn test_swagger_ui_page_default_parameters() {
        let html = swagger_ui_html(&page(None)).unwrap();

        assert!(html.contains(r##""dom_id": "#swagger-ui","##));
        assert!(html.contains(r#""layout": "BaseLayout","#));
        assert!(html.contains(r#""deepLinking": true,"#));
    }

    #[test]
    fn test_swagger_ui_parameter_overrides_win() {
        let mut overrides = Map::new();
        overrides.insert("deepLinking".to_owned(), json!(false));
        overrides.insert("docExpansion".to_owned(), json!("none"));

        let html = swagger_ui_html(&SwaggerUiPage {
            parameters: Some(&overrides),
            ..page(None)
        })
        .unwrap();

        assert!(html.contains(r#""deepLinking": false,"#));
        assert!(html.contains(r#""docExpansion": "none","#));
        assert!(!html.contains(r#""deepLinking": true,"#));
    }

    #[test]
    fn test_swagger_ui_oauth2_flow_wiring() {
        let init_oauth = json!({ "clientId": "example-client" });

        let html = swagger_ui_html(&SwaggerUiPage {
            init_oauth: Some(&init_oauth),
            ..page(Some("/docs/oauth2-redirect"))
        })
        .unwrap();

        assert!(
            html.contains("oauth2RedirectUrl: window.location.origin + '/docs/oauth2-redirect',")
        );
        assert!(html.contains(r#"ui.initOAuth({"clientId":"example-client"})"#));
    }

    #[test]
    fn test_redoc_page() {
        let html = redoc_html("/api/v1/openapi.json", "Example - ReDoc");

        assert!(html.contains(r#"<redoc spec-url="/api/v1/openapi.json">"#));
        assert!(html.contains("<title>Example - ReDoc</title>"));
        assert!(html.contains(REDOC_JS_URL));
    }

    #[test]
    fn test_oauth2_redirect_page_targets_the_opener() {
        assert!(OAUTH2_REDIRECT_HTML.contains("window.opener.swaggerUIRedirectOauth2"));
    }
}
