use serde::{Deserialize, Serialize};

use crate::commands::browser::BrowserOutput;
use crate::commands::storage::StorageOutput;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// DOM loaded; carries the static facts of the page
    Initialize(PageLayout),

    Form(FormEvent),
    Submit(SubmitEvent),
    Theme(ThemeEvent),
    Timezone(TimezoneEvent),
}

/// Interactions with the form that never leave the page
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SectionToggled { section: Section, checked: bool },
    ChannelsToWriteChanged { value: String },
    ChannelTabSelected { index: usize },
    /// A "generate PSK" button was clicked; `target` is its `data-target`
    GeneratePsk { target: Option<String> },
}

/// Preview and download requests
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SubmitEvent {
    Preview {
        elements: Vec<FormElement>,
    },
    Download {
        elements: Vec<FormElement>,
    },

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    PreviewResponse(Result<serde_json::Value, String>),
    #[serde(skip)]
    DownloadResponse(Result<Vec<u8>, String>),
    /// Outcome of the save or alert that concluded a download
    #[serde(skip)]
    DownloadConcluded(BrowserOutput),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    Toggle,

    #[serde(skip)]
    Loaded(StorageOutput),
    #[serde(skip)]
    Stored(StorageOutput),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum TimezoneEvent {
    Selected { zone: String },

    #[serde(skip)]
    Detected(BrowserOutput),
}
