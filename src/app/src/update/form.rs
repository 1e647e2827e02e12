use crux_core::{render::render, Command};

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::psk::generate_psk;
use crate::types::parse_channel_count;
use crate::Effect;

/// Handle in-page form interactions (section toggles, channel tabs, PSK buttons)
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::SectionToggled { section, checked } => {
            if model.sections.is_visible(section) == checked {
                return Command::done();
            }
            model.sections.set(section, checked);
            render()
        }

        FormEvent::ChannelsToWriteChanged { value } => {
            model
                .channel_tabs
                .apply_channel_count(parse_channel_count(&value));
            render()
        }

        FormEvent::ChannelTabSelected { index } => {
            if model.channel_tabs.select(index) {
                render()
            } else {
                Command::done()
            }
        }

        FormEvent::GeneratePsk { target } => handle_generate_psk(target, model),
    }
}

fn handle_generate_psk(target: Option<String>, model: &mut Model) -> Command<Effect, Event> {
    let Some(target) = target.filter(|t| model.has_psk_target(t)) else {
        return Command::done();
    };

    match generate_psk() {
        Ok(psk) => {
            model.psk_values.insert(target, psk);
            render()
        }
        Err(e) => {
            log::error!("failed to draw random bytes for {target}: {e}");
            Command::done()
        }
    }
}
