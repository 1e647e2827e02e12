use crux_core::{render::render, Command};

use crate::commands::storage::StorageOutput;
use crate::config::THEME_STORAGE_KEY;
use crate::events::{Event, ThemeEvent};
use crate::model::Model;
use crate::types::Theme;
use crate::{Effect, StorageCmd};

/// Read the persisted theme preference
pub fn load() -> Command<Effect, Event> {
    StorageCmd::get(THEME_STORAGE_KEY)
        .build()
        .then_send(|output| Event::Theme(ThemeEvent::Loaded(output)))
}

/// Handle theme toggle and storage responses
pub fn handle(event: ThemeEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ThemeEvent::Toggle => {
            model.theme = model.theme.toggled();
            Command::all([
                render(),
                StorageCmd::set(THEME_STORAGE_KEY, model.theme.as_str())
                    .build()
                    .then_send(|output| Event::Theme(ThemeEvent::Stored(output))),
            ])
        }

        ThemeEvent::Loaded(StorageOutput::Value(Some(stored))) => {
            let theme = stored.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("{e}, falling back to {}", Theme::default().as_str());
                Theme::default()
            });
            model.theme = theme;
            render()
        }

        ThemeEvent::Loaded(StorageOutput::Value(None)) => {
            model.theme = Theme::default();
            render()
        }

        ThemeEvent::Loaded(StorageOutput::Error { message })
        | ThemeEvent::Stored(StorageOutput::Error { message }) => {
            log::error!("theme storage failed: {message}");
            Command::done()
        }

        ThemeEvent::Loaded(StorageOutput::Stored) | ThemeEvent::Stored(_) => Command::done(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::storage::StorageOperation;

    fn loaded(value: Option<&str>) -> ThemeEvent {
        ThemeEvent::Loaded(StorageOutput::Value(value.map(str::to_string)))
    }

    #[test]
    fn defaults_to_dark_when_nothing_is_stored() {
        let mut model = Model::default();
        let _ = handle(loaded(None), &mut model);
        assert_eq!(model.theme, Theme::Dark);
    }

    #[test]
    fn stored_light_theme_is_applied() {
        let mut model = Model::default();
        let _ = handle(loaded(Some("light")), &mut model);
        assert_eq!(model.theme, Theme::Light);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_dark() {
        let mut model = Model {
            theme: Theme::Light,
            ..Default::default()
        };
        let _ = handle(loaded(Some("sepia")), &mut model);
        assert_eq!(model.theme, Theme::Dark);
    }

    #[test]
    fn toggle_flips_theme_and_persists_it() {
        let mut model = Model::default();

        let mut cmd = handle(ThemeEvent::Toggle, &mut model);

        assert_eq!(model.theme, Theme::Light);
        let operation = cmd
            .effects()
            .find_map(|e| match e {
                Effect::Storage(request) => Some(request.operation),
                _ => None,
            })
            .expect("storage effect");
        assert_eq!(
            operation,
            StorageOperation::Set {
                key: "theme".to_string(),
                value: "light".to_string(),
            }
        );
    }

    #[test]
    fn storage_error_keeps_in_memory_theme() {
        let mut model = Model::default();
        let _ = handle(ThemeEvent::Toggle, &mut model);

        let _ = handle(
            ThemeEvent::Stored(StorageOutput::Error {
                message: "quota exceeded".to_string(),
            }),
            &mut model,
        );

        assert_eq!(model.theme, Theme::Light);
    }

    #[test]
    fn load_requests_theme_key() {
        let mut cmd = load();

        let operation = cmd
            .effects()
            .find_map(|e| match e {
                Effect::Storage(request) => Some(request.operation),
                _ => None,
            })
            .expect("storage effect");
        assert_eq!(
            operation,
            StorageOperation::Get {
                key: "theme".to_string()
            }
        );
    }

    #[test]
    fn resolved_load_feeds_back_as_loaded_event() {
        let mut cmd = load();
        let mut request = cmd
            .effects()
            .find_map(|e| match e {
                Effect::Storage(request) => Some(request),
                _ => None,
            })
            .expect("storage effect");

        request
            .resolve(StorageOutput::Value(Some("light".to_string())))
            .expect("resolve storage request");

        let events: Vec<Event> = cmd.events().collect();
        assert_eq!(
            events,
            vec![Event::Theme(ThemeEvent::Loaded(StorageOutput::Value(Some(
                "light".to_string()
            ))))]
        );
    }
}
