use super::*;
use crate::events::{FormEvent, SubmitEvent, ThemeEvent, TimezoneEvent};
use crux_core::testing::AppTester;

fn layout() -> PageLayout {
    PageLayout {
        channel_tab_count: 8,
        channels_to_write: "2".to_string(),
        sections: SectionVisibility {
            lora: true,
            ..Default::default()
        },
        psk_targets: vec!["channel_0_psk".to_string(), "channel_1_psk".to_string()],
    }
}

#[test]
fn test_initialize_sets_up_page() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Initialize(layout()), &mut model);

    assert!(model.sections.lora);
    assert!(!model.sections.gps);
    assert_eq!(model.channel_tabs.len(), 8);
    assert_eq!(
        model
            .channel_tabs
            .tabs()
            .iter()
            .filter(|tab| tab.visible)
            .count(),
        2
    );
    assert_eq!(model.channel_tabs.active_index(), Some(0));
    assert_eq!(model.timezone.option_count(), 413);
    assert_eq!(model.timezone.selected, None);
    assert_eq!(model.theme, Theme::Dark);
}

#[test]
fn test_initialize_clamps_oversized_tab_list() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::Initialize(PageLayout {
            channel_tab_count: 12,
            ..layout()
        }),
        &mut model,
    );

    assert_eq!(model.channel_tabs.len(), 8);
}

#[test]
fn test_initialize_with_unparsable_channel_count_hides_all_tabs() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::Initialize(PageLayout {
            channels_to_write: "all".to_string(),
            ..layout()
        }),
        &mut model,
    );

    assert!(model.channel_tabs.tabs().iter().all(|tab| !tab.visible));
}

#[test]
fn test_theme_toggle_round_trip() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Theme(ThemeEvent::Toggle), &mut model);
    assert_eq!(model.theme, Theme::Light);
    assert_eq!(model.theme.icon_class(), "bi-moon-fill");

    let _command = app.update(Event::Theme(ThemeEvent::Toggle), &mut model);
    assert_eq!(model.theme, Theme::Dark);
    assert_eq!(model.theme.icon_class(), "bi-sun-fill");
}

#[test]
fn test_timezone_selection_after_initialize() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let _command = app.update(Event::Initialize(layout()), &mut model);

    let _command = app.update(
        Event::Timezone(TimezoneEvent::Selected {
            zone: "Asia/Tokyo".to_string(),
        }),
        &mut model,
    );

    assert_eq!(model.timezone.selected_value(), "Asia/Tokyo");
}

#[test]
fn test_psk_generation_after_initialize() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let _command = app.update(Event::Initialize(layout()), &mut model);

    let _command = app.update(
        Event::Form(FormEvent::GeneratePsk {
            target: Some("channel_0_psk".to_string()),
        }),
        &mut model,
    );

    assert_eq!(model.psk_values.len(), 1);
    assert!(model.psk_values["channel_0_psk"].starts_with("{ 0x"));
}

#[test]
fn test_reinitialize_forgets_generated_keys() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let _command = app.update(Event::Initialize(layout()), &mut model);
    let _command = app.update(
        Event::Form(FormEvent::GeneratePsk {
            target: Some("channel_1_psk".to_string()),
        }),
        &mut model,
    );

    let _command = app.update(Event::Initialize(layout()), &mut model);

    assert!(model.psk_values.is_empty());
}

#[test]
fn test_preview_sets_loading() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::Submit(SubmitEvent::Preview {
            elements: vec![FormElement::input("region", "EU_868")],
        }),
        &mut model,
    );

    assert!(model.is_loading);
}

#[test]
fn test_view_mirrors_model() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    let _command = app.update(Event::Initialize(layout()), &mut model);

    assert_eq!(app.view(&model), model);
}
