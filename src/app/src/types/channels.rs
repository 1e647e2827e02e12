use serde::{Deserialize, Serialize};

/// Parse a "channels to write" value the way the page's `parseInt` does.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit. `None` stands for "not a number".
pub fn parse_channel_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() {
        return None;
    }

    // saturate instead of failing on absurdly long inputs
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelTab {
    pub visible: bool,
    /// Tab header and its content pane are active together
    pub active: bool,
}

/// Fixed list of channel tab headers, addressed by position
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelTabs {
    tabs: Vec<ChannelTab>,
}

impl ChannelTabs {
    pub fn new(count: usize) -> Self {
        Self {
            tabs: vec![ChannelTab::default(); count],
        }
    }

    pub fn tabs(&self) -> &[ChannelTab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active)
    }

    /// Show the first `count` tabs and hide the rest.
    ///
    /// When at least one channel is written and no tab is active, the first
    /// tab is activated. An already active tab stays active even if it is
    /// now hidden.
    pub fn apply_channel_count(&mut self, count: Option<i64>) {
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            tab.visible = count.is_some_and(|n| (index as i64) < n);
        }

        if count.is_some_and(|n| n > 0) && self.active_index().is_none() {
            if let Some(first) = self.tabs.first_mut() {
                first.active = true;
            }
        }
    }

    /// Activate a visible tab, deactivating all others. Returns whether anything changed.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.tabs.get(index).is_some_and(|tab| tab.visible) {
            return false;
        }
        if self.active_index() == Some(index) {
            return false;
        }

        for (position, tab) in self.tabs.iter_mut().enumerate() {
            tab.active = position == index;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(tabs: &ChannelTabs) -> Vec<bool> {
        tabs.tabs().iter().map(|tab| tab.visible).collect()
    }

    #[test]
    fn parses_like_parse_int() {
        assert_eq!(parse_channel_count("3"), Some(3));
        assert_eq!(parse_channel_count("  5"), Some(5));
        assert_eq!(parse_channel_count("4abc"), Some(4));
        assert_eq!(parse_channel_count("+2"), Some(2));
        assert_eq!(parse_channel_count("-1"), Some(-1));
        assert_eq!(parse_channel_count(""), None);
        assert_eq!(parse_channel_count("abc"), None);
        assert_eq!(parse_channel_count("-"), None);
    }

    #[test]
    fn first_n_tabs_are_visible_for_every_n() {
        for n in 0..=8 {
            let mut tabs = ChannelTabs::new(8);
            // start from an arbitrary prior state
            tabs.apply_channel_count(Some(8 - n));
            tabs.apply_channel_count(Some(n));

            let expected: Vec<bool> = (0..8).map(|i| i < n as usize).collect();
            assert_eq!(visible(&tabs), expected, "n = {n}");
        }
    }

    #[test]
    fn count_beyond_tab_list_shows_all() {
        let mut tabs = ChannelTabs::new(3);
        tabs.apply_channel_count(Some(12));
        assert_eq!(visible(&tabs), vec![true, true, true]);
    }

    #[test]
    fn not_a_number_hides_everything_without_activation() {
        let mut tabs = ChannelTabs::new(4);
        tabs.apply_channel_count(None);

        assert_eq!(visible(&tabs), vec![false; 4]);
        assert_eq!(tabs.active_index(), None);
    }

    #[test]
    fn first_tab_is_activated_when_none_is_active() {
        let mut tabs = ChannelTabs::new(4);
        tabs.apply_channel_count(Some(2));
        assert_eq!(tabs.active_index(), Some(0));
    }

    #[test]
    fn zero_channels_do_not_activate_a_tab() {
        let mut tabs = ChannelTabs::new(4);
        tabs.apply_channel_count(Some(0));
        assert_eq!(tabs.active_index(), None);
    }

    #[test]
    fn existing_active_tab_is_kept_even_when_hidden() {
        let mut tabs = ChannelTabs::new(4);
        tabs.apply_channel_count(Some(4));
        assert!(tabs.select(3));

        tabs.apply_channel_count(Some(2));

        assert_eq!(tabs.active_index(), Some(3));
        assert!(!tabs.tabs()[3].visible);
    }

    #[test]
    fn select_ignores_hidden_and_unknown_tabs() {
        let mut tabs = ChannelTabs::new(4);
        tabs.apply_channel_count(Some(2));

        assert!(!tabs.select(2));
        assert!(!tabs.select(10));
        assert!(!tabs.select(0));
        assert!(tabs.select(1));
        assert_eq!(tabs.active_index(), Some(1));
        assert!(!tabs.tabs()[0].active);
    }
}
