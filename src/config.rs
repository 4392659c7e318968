use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::error::ConfigError;

/// Id of the optional JSON island that overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "page-behavior-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub theme_key: String,
    pub banner_key: String,
    /// Wait after `load` before deciding whether the banner shows.
    pub banner_delay_ms: u32,
    /// Wait between unhiding the banner and starting its transition.
    pub banner_transition_delay_ms: u32,
    pub header_scroll_threshold: f64,
    pub min_anchor_offset: f64,
    pub reveal_ratio: f64,
    pub animated_selector: String,
    pub nav_link_selector: String,
    pub contact_acknowledgement: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_key: "preferred-theme".to_string(),
            banner_key: "theme-banner-dismissed".to_string(),
            banner_delay_ms: 700,
            banner_transition_delay_ms: 60,
            header_scroll_threshold: 50.0,
            min_anchor_offset: 70.0,
            reveal_ratio: 0.85,
            animated_selector: ".skill-level, .project-card, .timeline-content".to_string(),
            nav_link_selector: ".nav-links a".to_string(),
            contact_acknowledgement: "Thank you for your message! I will get back to you soon."
                .to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config island if the page has one, otherwise the defaults.
    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}, falling back to defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = PageConfig::from_json(r#"{"bannerDelayMs": 1200, "themeKey": "theme"}"#)
            .expect("valid config");

        assert_eq!(
            config,
            PageConfig {
                banner_delay_ms: 1200,
                theme_key: "theme".to_string(),
                ..PageConfig::default()
            }
        );
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            PageConfig::from_json("{bannerDelayMs: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn defaults_match_page_contract() {
        let config = PageConfig::default();
        assert_eq!(config.theme_key, "preferred-theme");
        assert_eq!(config.banner_key, "theme-banner-dismissed");
        assert_eq!(config.header_scroll_threshold, 50.0);
        assert_eq!(config.reveal_ratio, 0.85);
    }
}
