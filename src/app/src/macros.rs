// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{build_url, process_bytes_response, process_json_body, BASE_URL};

/// Macro for JSON POST requests to the backend.
///
/// Shows the loading indicator, renders, and sends the request. The response
/// is delivered as `Event::$domain($domain_event::$response_event(result))`.
///
/// # Patterns
///
/// Pattern 1: JSON body expecting a JSON body back (status is not checked)
/// ```ignore
/// post_json!(Submit, SubmitEvent, model, PREVIEW_ENDPOINT, PreviewResponse, "Preview",
///     body_json: &payload,
///     expect: json
/// )
/// ```
///
/// Pattern 2: JSON body expecting raw bytes from a 2xx response
/// ```ignore
/// post_json!(Submit, SubmitEvent, model, DOWNLOAD_ENDPOINT, DownloadResponse, "Download",
///     body_json: &payload,
///     expect: bytes
/// )
/// ```
#[macro_export]
macro_rules! post_json {
    // Pattern 1: JSON body, JSON response
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect: json) => {
        $crate::post_json!(@send $domain, $domain_event, $model, $endpoint, $response_event, $action, $body,
            $crate::macros::process_json_body)
    };

    // Pattern 2: JSON body, raw bytes response
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect: bytes) => {
        $crate::post_json!(@send $domain, $domain_event, $model, $endpoint, $response_event, $action, $body,
            $crate::macros::process_bytes_response)
    };

    (@send $domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, $body:expr, $process:path) => {{
        $model.start_loading();
        match $crate::HttpCmd::post($crate::macros::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $process($action, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => {
                // the request never left, so it settles right away
                crux_core::Command::event($crate::events::Event::$domain(
                    $crate::events::$domain_event::$response_event(Err(format!(
                        "Failed to create {} request: {}",
                        $action, e
                    ))),
                ))
            }
        }
    }};
}
