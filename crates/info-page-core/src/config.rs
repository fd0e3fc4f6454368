#![forbid(unsafe_code)]

//! Page wiring and presentation knobs.
//!
//! Every field has a default matching the stock info page markup, so hosts
//! only need to supply the values they want to change.

use serde::Deserialize;

/// Category used when the payload does not name one.
pub const DEFAULT_FALLBACK_CATEGORY: &str = "scout";
/// Text of the empty-state element.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No changes for this class match your filter.";
/// Click cue played on category change.
pub const DEFAULT_CLICK_SOUND_PATH: &str = "/info/sound/tf2-button-click.mp3";
/// Playback volume for the click cue.
pub const DEFAULT_CLICK_VOLUME: f64 = 0.5;

/// Configuration for booting the tile view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfoPageConfig {
    /// Id of the element whose text content holds the JSON payload.
    pub data_element_id: String,
    /// Selector for the bar holding the category buttons.
    pub class_bar_selector: String,
    /// Selector (relative to the bar) matching each category button.
    pub class_button_selector: String,
    /// Attribute on a category button carrying its category key.
    pub class_attribute: String,
    /// Selector for the element tiles are rendered into.
    pub container_selector: String,
    /// Selector for the free-text search input.
    pub search_selector: String,
    /// Active category when the payload does not provide one.
    pub fallback_category: String,
    /// Resource path of the click cue.
    pub click_sound_path: String,
    /// Click cue volume in `[0, 1]`.
    pub click_volume: f64,
    /// Message shown when no item qualifies for display.
    pub empty_message: String,
}

impl Default for InfoPageConfig {
    fn default() -> Self {
        Self {
            data_element_id: "info-data".to_string(),
            class_bar_selector: "#class-bar".to_string(),
            class_button_selector: ".class-btn".to_string(),
            class_attribute: "data-class".to_string(),
            container_selector: "#button-container".to_string(),
            search_selector: "#search".to_string(),
            fallback_category: DEFAULT_FALLBACK_CATEGORY.to_string(),
            click_sound_path: DEFAULT_CLICK_SOUND_PATH.to_string(),
            click_volume: DEFAULT_CLICK_VOLUME,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl InfoPageConfig {
    /// Parse a (possibly partial) JSON override object.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Volume clamped into the range accepted by media elements.
    ///
    /// A NaN volume falls back to the default.
    #[must_use]
    pub fn effective_volume(&self) -> f64 {
        if self.click_volume.is_nan() {
            return DEFAULT_CLICK_VOLUME;
        }
        self.click_volume.clamp(0.0, 1.0)
    }

    /// Active category to start with, given the payload's preference.
    #[must_use]
    pub fn initial_category(&self, preferred: Option<&str>) -> String {
        match preferred {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => self.fallback_category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = InfoPageConfig::from_json(r#"{"fallback_category":"medic"}"#)
            .expect("valid override");
        assert_eq!(config.fallback_category, "medic");
        assert_eq!(config.data_element_id, "info-data");
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = InfoPageConfig::from_json(r#"{"theme":"dark"}"#).expect("valid override");
        assert_eq!(config, InfoPageConfig::default());
    }

    #[test]
    fn volume_is_clamped() {
        let mut config = InfoPageConfig {
            click_volume: 3.0,
            ..InfoPageConfig::default()
        };
        assert_eq!(config.effective_volume(), 1.0);
        config.click_volume = -1.0;
        assert_eq!(config.effective_volume(), 0.0);
        config.click_volume = f64::NAN;
        assert_eq!(config.effective_volume(), DEFAULT_CLICK_VOLUME);
    }

    #[test]
    fn initial_category_prefers_payload() {
        let config = InfoPageConfig::default();
        assert_eq!(config.initial_category(Some("sniper")), "sniper");
        assert_eq!(config.initial_category(Some("")), "scout");
        assert_eq!(config.initial_category(None), "scout");
    }
}
