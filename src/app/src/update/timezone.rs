use crux_core::{render::render, Command};

use crate::commands::browser::BrowserOutput;
use crate::events::{Event, TimezoneEvent};
use crate::model::Model;
use crate::{BrowserCmd, Effect};

/// Ask the shell for the runtime's resolved time zone
pub fn detect() -> Command<Effect, Event> {
    BrowserCmd::detect_timezone()
        .build()
        .then_send(|output| Event::Timezone(TimezoneEvent::Detected(output)))
}

/// Handle timezone selection and detection results
pub fn handle(event: TimezoneEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        TimezoneEvent::Selected { zone } => {
            if model.timezone.selected_value() == zone {
                return Command::done();
            }
            if !model.timezone.select(&zone) {
                log::debug!("ignoring selection of unknown timezone {zone}");
                return Command::done();
            }
            render()
        }

        TimezoneEvent::Detected(BrowserOutput::Timezone(Some(zone))) if !zone.is_empty() => {
            // the user may have picked a zone while detection was pending
            if model.timezone.selected.is_some() {
                return Command::done();
            }
            if model.timezone.select(&zone) {
                render()
            } else {
                log::debug!("detected timezone {zone} is not offered");
                Command::done()
            }
        }

        TimezoneEvent::Detected(BrowserOutput::Error { message }) => {
            log::warn!("could not auto-detect timezone: {message}");
            Command::done()
        }

        TimezoneEvent::Detected(_) => Command::done(),
    }
}
