use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::dom::PageElement;

/// Attribute on `<html>` the stylesheet keys its palette off.
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    // The toggle advertises the theme it switches *to*
    fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => r#"<i class="fas fa-sun"></i>"#,
            Theme::Light => r#"<i class="fas fa-moon"></i>"#,
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// How to hear about OS light/dark switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeSubscription {
    /// `addEventListener("change", ..)` on the media query list.
    ChangeEvent,
    /// The older `addListener(..)`, for browsers without the above.
    LegacyListener,
}

/// Prefers the modern API. With neither there are simply no live updates.
pub fn scheme_subscription(
    has_event_listener: bool,
    has_legacy_listener: bool,
) -> Option<SchemeSubscription> {
    if has_event_listener {
        Some(SchemeSubscription::ChangeEvent)
    } else if has_legacy_listener {
        Some(SchemeSubscription::LegacyListener)
    } else {
        None
    }
}

/// An explicit stored choice wins over the operating system's preference.
pub fn resolve(stored: Option<Theme>, system: Theme) -> Theme {
    stored.unwrap_or(system)
}

/// Parses a raw stored value; anything unrecognised counts as no choice.
pub fn parse_stored(raw: Option<&str>) -> Option<Theme> {
    match raw?.parse() {
        Ok(theme) => Some(theme),
        Err(UnknownTheme(value)) => {
            debug!("ignoring unknown stored theme {:?}", value);
            None
        }
    }
}

/// The document theme marker plus the toggle button mirroring it.
pub struct ThemeSwitch<E> {
    root: E,
    toggle: Option<E>,
}

impl<E: PageElement> ThemeSwitch<E> {
    pub fn new(root: E, toggle: Option<E>) -> Self {
        Self { root, toggle }
    }

    /// Current theme as marked on the document; anything but dark is light.
    pub fn current(&self) -> Theme {
        Theme::from_dark(self.root.attribute(THEME_ATTRIBUTE).as_deref() == Some("dark"))
    }

    pub fn render(&self, theme: Theme) {
        self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());

        if let Some(toggle) = &self.toggle {
            let pressed = theme == Theme::Dark;
            toggle.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
            toggle.set_attribute("aria-label", theme.toggle_label());
            toggle.set_inner_html(theme.toggle_icon());
            toggle.set_title(theme.toggle_label());
        }
    }
}
