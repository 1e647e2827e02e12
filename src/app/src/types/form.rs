use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// State of a single form control as read by the shell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FormControl {
    Checkbox { checked: bool },
    Radio { checked: bool, value: String },
    /// Text, number, select, textarea and hidden inputs
    Input { value: String },
}

/// A named control of the configuration form, in DOM order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormElement {
    pub name: String,
    pub control: FormControl,
}

impl FormElement {
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            control: FormControl::Checkbox { checked },
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            control: FormControl::Radio {
                checked,
                value: value.into(),
            },
        }
    }

    pub fn input(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            control: FormControl::Input {
                value: value.into(),
            },
        }
    }
}

/// Flat field name to value mapping submitted to the backend.
///
/// Serializes as a JSON object whose keys keep the order in which they were
/// first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    entries: Vec<(String, String)>,
}

impl FormPayload {
    /// Build the payload from the form's controls.
    ///
    /// Unnamed controls are skipped, checkboxes contribute `"true"`/`"false"`
    /// and only checked radio buttons contribute their value.
    pub fn collect<'a>(elements: impl IntoIterator<Item = &'a FormElement>) -> Self {
        let mut payload = Self::default();

        for element in elements {
            if element.name.is_empty() {
                continue;
            }

            match &element.control {
                FormControl::Checkbox { checked } => {
                    payload.insert(&element.name, if *checked { "true" } else { "false" })
                }
                FormControl::Radio { checked, value } => {
                    if *checked {
                        payload.insert(&element.name, value)
                    }
                }
                FormControl::Input { value } => payload.insert(&element.name, value),
            }
        }

        payload
    }

    /// Insert or overwrite a value; an overwritten key keeps its position
    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Optional configuration sections that are shown only while enabled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Lora,
    Gps,
    FixedPosition,
    Network,
    Mqtt,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Lora,
        Section::Gps,
        Section::FixedPosition,
        Section::Network,
        Section::Mqtt,
    ];
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionVisibility {
    pub lora: bool,
    pub gps: bool,
    pub fixed_position: bool,
    pub network: bool,
    pub mqtt: bool,
}

impl SectionVisibility {
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Lora => self.lora,
            Section::Gps => self.gps,
            Section::FixedPosition => self.fixed_position,
            Section::Network => self.network,
            Section::Mqtt => self.mqtt,
        }
    }

    pub fn set(&mut self, section: Section, visible: bool) {
        let slot = match section {
            Section::Lora => &mut self.lora,
            Section::Gps => &mut self.gps,
            Section::FixedPosition => &mut self.fixed_position,
            Section::Network => &mut self.network,
            Section::Mqtt => &mut self.mqtt,
        };
        *slot = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_serializes_as_boolean_string() {
        let checked = FormPayload::collect(&[FormElement::checkbox("x", true)]);
        let unchecked = FormPayload::collect(&[FormElement::checkbox("x", false)]);

        assert_eq!(checked.get("x"), Some("true"));
        assert_eq!(unchecked.get("x"), Some("false"));
    }

    #[test]
    fn unchecked_radio_group_contributes_nothing() {
        let payload = FormPayload::collect(&[
            FormElement::radio("mode", "a", false),
            FormElement::radio("mode", "b", false),
        ]);

        assert!(payload.is_empty());
    }

    #[test]
    fn checked_radio_contributes_its_value() {
        let payload = FormPayload::collect(&[
            FormElement::radio("mode", "a", false),
            FormElement::radio("mode", "b", true),
            FormElement::radio("mode", "c", false),
        ]);

        assert_eq!(payload.get("mode"), Some("b"));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn unnamed_controls_are_skipped() {
        let payload = FormPayload::collect(&[
            FormElement::input("", "ignored"),
            FormElement::checkbox("", true),
            FormElement::input("device_name", "node"),
        ]);

        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("device_name"), Some("node"));
    }

    #[test]
    fn duplicate_name_overwrites_value_but_keeps_position() {
        let payload = FormPayload::collect(&[
            FormElement::input("a", "1"),
            FormElement::input("b", "2"),
            FormElement::input("a", "3"),
        ]);

        let entries: Vec<_> = payload.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn serializes_as_json_object_in_insertion_order() {
        let payload = FormPayload::collect(&[
            FormElement::input("zeta", "1"),
            FormElement::checkbox("alpha", true),
            FormElement::input("mid", "x y"),
        ]);

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"zeta":"1","alpha":"true","mid":"x y"}"#
        );
    }

    #[test]
    fn section_visibility_tracks_each_section_independently() {
        let mut visibility = SectionVisibility::default();

        visibility.set(Section::Gps, true);
        visibility.set(Section::Mqtt, true);
        visibility.set(Section::Mqtt, false);

        for section in Section::ALL {
            assert_eq!(visibility.is_visible(section), section == Section::Gps);
        }
    }
}
