mod form;
mod submit;
mod theme;
mod timezone;

use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::catalog::TIMEZONE_CATALOG;
use crate::config::MAX_CHANNEL_TABS;
use crate::events::Event;
use crate::model::Model;
use crate::types::{parse_channel_count, ChannelTabs, PageLayout, TimezoneDropdown};
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize(layout) => initialize(layout, model),
        Event::Form(event) => form::handle(event, model),
        Event::Submit(event) => submit::handle(event, model),
        Event::Theme(event) => theme::handle(event, model),
        Event::Timezone(event) => timezone::handle(event, model),
    }
}

/// Set up the page from its layout, then ask the shell for the stored theme
/// and the local time zone
fn initialize(layout: PageLayout, model: &mut Model) -> Command<Effect, Event> {
    let tab_count = match layout.validate() {
        Ok(()) => layout.channel_tab_count,
        Err(e) => {
            log::error!("invalid page layout, clamping channel tabs: {e}");
            layout.channel_tab_count.min(MAX_CHANNEL_TABS)
        }
    };

    model.sections = layout.sections;
    model.psk_targets = layout.psk_targets;
    model.psk_values.clear();

    model.channel_tabs = ChannelTabs::new(tab_count);
    model
        .channel_tabs
        .apply_channel_count(parse_channel_count(&layout.channels_to_write));

    model.timezone = TimezoneDropdown::populate(TIMEZONE_CATALOG);

    Command::all([
        render(),
        theme::load(),
        timezone::detect(),
    ])
}
