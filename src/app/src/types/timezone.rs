use serde::{Deserialize, Serialize};

use crate::catalog::TimezoneRegion;
use crate::config::TIMEZONE_PLACEHOLDER;

/// A labeled `<optgroup>` of the timezone dropdown
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimezoneOptionGroup {
    pub label: String,
    /// Option value and display text are both the IANA identifier
    pub zones: Vec<String>,
}

/// Content and selection of the timezone `<select>`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimezoneDropdown {
    pub placeholder: String,
    pub groups: Vec<TimezoneOptionGroup>,
    /// `None` while the placeholder is selected
    pub selected: Option<String>,
}

impl TimezoneDropdown {
    /// Fresh dropdown with the placeholder selected, followed by one group per region
    pub fn populate(catalog: &[TimezoneRegion]) -> Self {
        Self {
            placeholder: TIMEZONE_PLACEHOLDER.to_string(),
            groups: catalog
                .iter()
                .map(|region| TimezoneOptionGroup {
                    label: region.region.to_string(),
                    zones: region.zones.iter().map(|zone| zone.to_string()).collect(),
                })
                .collect(),
            selected: None,
        }
    }

    /// Number of zone options, placeholder excluded
    pub fn option_count(&self) -> usize {
        self.groups.iter().map(|group| group.zones.len()).sum()
    }

    pub fn contains(&self, zone: &str) -> bool {
        self.groups
            .iter()
            .any(|group| group.zones.iter().any(|z| z == zone))
    }

    /// Select `zone` if it is one of the options (exact match). An empty value
    /// selects the placeholder. Returns whether the value was accepted.
    pub fn select(&mut self, zone: &str) -> bool {
        if zone.is_empty() {
            self.selected = None;
            return true;
        }
        if !self.contains(zone) {
            return false;
        }
        self.selected = Some(zone.to_string());
        true
    }

    /// Value submitted with the form; empty for the placeholder
    pub fn selected_value(&self) -> &str {
        self.selected.as_deref().unwrap_or("")
    }
}
