use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::*;

/// Application Model - the complete page state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub theme: Theme,

    // Form state
    pub sections: SectionVisibility,
    pub channel_tabs: ChannelTabs,
    pub timezone: TimezoneDropdown,

    // PSK generator
    /// Field ids that have a generator button
    pub psk_targets: Vec<String>,
    /// Latest generated key per target field id
    pub psk_values: BTreeMap<String, String>,

    // Preview/download state
    /// Content of the preview pane; `None` until the first preview completes
    pub preview_text: Option<String>,
    pub is_loading: bool,
}

impl Model {
    /// Show the loading indicator ahead of a request
    pub fn start_loading(&mut self) {
        self.is_loading = true;
    }

    /// Hide the loading indicator once a request settles
    pub fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    pub fn has_psk_target(&self, target: &str) -> bool {
        self.psk_targets.iter().any(|t| t == target)
    }
}
