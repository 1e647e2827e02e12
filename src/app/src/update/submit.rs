use crux_core::{render::render, Command};
use serde_json::Value;

use crate::config::{
    DOWNLOAD_ENDPOINT, DOWNLOAD_ERROR_MESSAGE, DOWNLOAD_FILENAME, PREVIEW_ENDPOINT,
    PREVIEW_ERROR_MESSAGE,
};
use crate::commands::browser::BrowserOutput;
use crate::events::{Event, SubmitEvent};
use crate::model::Model;
use crate::post_json;
use crate::types::{FormElement, FormPayload};
use crate::{BrowserCmd, Effect};

/// Handle preview and download requests.
///
/// Requests are not de-duplicated: a second click while one is in flight
/// sends another request and the last response to arrive wins.
pub fn handle(event: SubmitEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SubmitEvent::Preview { elements } => {
            let payload = collect_payload(&elements);
            post_json!(Submit, SubmitEvent, model, PREVIEW_ENDPOINT, PreviewResponse, "Preview",
                body_json: &payload,
                expect: json
            )
        }

        SubmitEvent::PreviewResponse(result) => {
            model.stop_loading();
            model.preview_text = Some(match result {
                Ok(body) => render_preview(&body),
                Err(e) => {
                    log::error!("{e}");
                    PREVIEW_ERROR_MESSAGE.to_string()
                }
            });
            render()
        }

        SubmitEvent::Download { elements } => {
            let payload = collect_payload(&elements);
            post_json!(Submit, SubmitEvent, model, DOWNLOAD_ENDPOINT, DownloadResponse, "Download",
                body_json: &payload,
                expect: bytes
            )
        }

        SubmitEvent::DownloadResponse(result) => {
            model.stop_loading();
            let conclusion = match result {
                Ok(data) => BrowserCmd::save_file(DOWNLOAD_FILENAME, data),
                Err(e) => {
                    log::error!("{e}");
                    BrowserCmd::alert(DOWNLOAD_ERROR_MESSAGE)
                }
            };
            Command::all([
                render(),
                conclusion
                    .build()
                    .then_send(|output| Event::Submit(SubmitEvent::DownloadConcluded(output))),
            ])
        }

        SubmitEvent::DownloadConcluded(output) => {
            if let BrowserOutput::Error { message } = output {
                log::error!("download could not be concluded: {message}");
            }
            Command::done()
        }
    }
}

fn collect_payload(elements: &[FormElement]) -> FormPayload {
    let payload = FormPayload::collect(elements);
    log::debug!(
        "raw form data collected: {}",
        serde_json::to_string(&payload).unwrap_or_default()
    );
    payload
}

/// Text for the preview pane: the generated content of a successful response,
/// otherwise the whole response pretty-printed
pub fn render_preview(body: &Value) -> String {
    if body.get("success") == Some(&Value::Bool(true)) {
        return match body.get("content") {
            Some(Value::String(content)) => content.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
    }

    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
}
