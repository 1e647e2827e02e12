//! HTTP helper functions for Crux Core
//!
//! This module extracts common HTTP response handling logic from macros
//! into debuggable, testable functions.

use crux_http::Response;

/// Base URL for backend endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell strips this prefix before sending requests via `fetch()`, so they
/// stay relative to the page's origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use userprefs_ui_core::http_helpers::build_url;
/// let url = build_url("/preview");
/// assert_eq!(url, "https://relative/preview");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Map a transport level error (request never completed) into a message
pub fn map_http_error(action: &str, error: crux_http::HttpError) -> String {
    format!("{action} failed: {error}")
}

/// Parse a response body as JSON
pub fn parse_json_body(action: &str, body: Option<Vec<u8>>) -> Result<serde_json::Value, String> {
    match body {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Describe a non-2xx response, including its body when it is readable text
pub fn status_error_message(
    action: &str,
    code: impl std::fmt::Display,
    body: Option<Vec<u8>>,
) -> String {
    match body {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {code}: {msg}"),
            Err(e) => format!("{action} failed: HTTP {code} (Invalid UTF-8: {e})"),
        },
        _ => format!("{action} failed: HTTP {code} (Empty body)"),
    }
}

/// Process HTTP response result and parse the JSON body.
///
/// The body is parsed whatever the status code is: `crux_http` reports a
/// non-2xx response as `HttpError::Http`, and the body it carries is used
/// like that of a successful response. Only transport failures and unreadable
/// bodies become errors.
pub fn process_json_body(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<serde_json::Value, String> {
    match result {
        Ok(mut response) => parse_json_body(action, response.take_body()),
        Err(crux_http::HttpError::Http {
            body: Some(body), ..
        }) => parse_json_body(action, Some(body)),
        Err(e) => Err(map_http_error(action, e)),
    }
}

/// Process HTTP response result and return the body of a 2xx response
pub fn process_bytes_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<Vec<u8>, String> {
    match result {
        Ok(mut response) => Ok(response.take_body().unwrap_or_default()),
        Err(crux_http::HttpError::Http { code, body, .. }) => {
            Err(status_error_message(action, code, body))
        }
        Err(e) => Err(map_http_error(action, e)),
    }
}
