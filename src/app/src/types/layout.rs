use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use crate::types::SectionVisibility;

/// Static facts about the page, reported by the shell once the DOM is loaded
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    /// Number of `.nav-item` headers in the channel tab list
    #[validate(maximum = 8)]
    pub channel_tab_count: usize,
    /// Initial value of the "channels to write" selector
    pub channels_to_write: String,
    /// Checked state of the section checkboxes at load
    pub sections: SectionVisibility,
    /// Ids of the fields that have a "generate PSK" button
    #[serde(default)]
    pub psk_targets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_up_to_eight_tabs() {
        let layout = PageLayout {
            channel_tab_count: 8,
            ..Default::default()
        };
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn rejects_more_tabs_than_channel_slots() {
        let layout = PageLayout {
            channel_tab_count: 9,
            ..Default::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn deserializes_shell_json() {
        let layout: PageLayout = serde_json::from_str(
            r#"{
                "channelTabCount": 8,
                "channelsToWrite": "1",
                "sections": {"lora": true, "gps": false, "fixedPosition": false, "network": true, "mqtt": false},
                "pskTargets": ["channel_0_psk"]
            }"#,
        )
        .unwrap();

        assert_eq!(layout.channel_tab_count, 8);
        assert!(layout.sections.lora && layout.sections.network);
        assert_eq!(layout.psk_targets, vec!["channel_0_psk"]);
    }
}
