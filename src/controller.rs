use log::debug;

use crate::banner::{should_reveal, ThemeBanner};
use crate::config::PageConfig;
use crate::dom::PageElement;
use crate::menu::MobileMenu;
use crate::scroll::{self, AnchorScroll};
use crate::storage::{self, KeyValueStore};
use crate::theme::{self, Theme, ThemeSwitch};

/// Elements the controller drives, looked up once by the caller.
/// Anything missing simply leaves its feature unwired.
pub struct PageElements<E> {
    pub root: E,
    pub theme_toggle: Option<E>,
    pub banner: Option<E>,
    pub menu_button: Option<E>,
    pub nav_panel: Option<E>,
    pub header: Option<E>,
    pub animated: Vec<E>,
}

impl<E> PageElements<E> {
    pub fn new(root: E) -> Self {
        Self {
            root,
            theme_toggle: None,
            banner: None,
            menu_button: None,
            nav_panel: None,
            header: None,
            animated: Vec::new(),
        }
    }
}

pub struct PageController<S, E> {
    config: PageConfig,
    storage: S,
    theme: ThemeSwitch<E>,
    banner: Option<ThemeBanner<E>>,
    menu: Option<MobileMenu<E>>,
    header: Option<E>,
    animated: Vec<E>,
}

impl<S: KeyValueStore, E: PageElement> PageController<S, E> {
    pub fn new(config: PageConfig, storage: S, elements: PageElements<E>) -> Self {
        let PageElements {
            root,
            theme_toggle,
            banner,
            menu_button,
            nav_panel,
            header,
            animated,
        } = elements;

        Self {
            config,
            storage,
            theme: ThemeSwitch::new(root, theme_toggle),
            banner: banner.map(ThemeBanner::new),
            menu: nav_panel.map(|panel| MobileMenu::new(menu_button, panel)),
            header,
            animated,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn has_menu_button(&self) -> bool {
        self.menu.as_ref().is_some_and(|menu| menu.has_button())
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn stored_theme(&self) -> Option<Theme> {
        let raw = storage::read_or_absent(&self.storage, &self.config.theme_key);
        theme::parse_stored(raw.as_deref())
    }

    pub fn apply_theme(&self, theme: Theme) {
        debug!("applying {} theme", theme);
        self.theme.render(theme);
        if let Some(banner) = self.banner.as_ref().filter(|banner| banner.is_visible()) {
            banner.play_show_transition();
        }
    }

    pub fn init_theme(&self, system: Theme) -> Theme {
        let chosen = theme::resolve(self.stored_theme(), system);
        self.apply_theme(chosen);
        chosen
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.current().opposite();
        self.apply_theme(next);
        storage::write_best_effort(&self.storage, &self.config.theme_key, next.as_str());
        next
    }

    /// Follows the OS only while the visitor hasn't chosen. Checked on every
    /// change rather than unsubscribing, so clearing the choice resumes it.
    pub fn system_theme_changed(&self, system: Theme) -> bool {
        if self.stored_theme().is_some() {
            debug!("ignoring system switch to {}, explicit choice stored", system);
            return false;
        }
        self.apply_theme(system);
        true
    }

    pub fn clear_theme_preference(&self, system: Theme) -> Theme {
        storage::remove_best_effort(&self.storage, &self.config.theme_key);
        self.init_theme(system)
    }

    pub fn banner_should_reveal(&self) -> bool {
        let dismissed = storage::read_or_absent(&self.storage, &self.config.banner_key).is_some();
        // Same notion of "chosen" as theme resolution: unknown values don't count
        should_reveal(dismissed, self.stored_theme().is_some())
    }

    /// First stage of the banner gate. Returns whether the banner was unhidden
    /// and the show-in transition should follow.
    pub fn reveal_banner_if_needed(&self) -> bool {
        let Some(banner) = &self.banner else {
            return false;
        };
        if banner.is_closed() || !self.banner_should_reveal() {
            debug!("theme banner stays hidden");
            return false;
        }
        banner.reveal()
    }

    pub fn play_banner_transition(&self) {
        if let Some(banner) = &self.banner {
            banner.play_show_transition();
        }
    }

    pub fn enable_dark_from_banner(&self) {
        self.apply_theme(Theme::Dark);
        storage::write_best_effort(&self.storage, &self.config.theme_key, Theme::Dark.as_str());
        self.dismiss_banner();
    }

    pub fn dismiss_banner(&self) {
        storage::write_best_effort(&self.storage, &self.config.banner_key, "1");
        if let Some(banner) = &self.banner {
            banner.close();
        }
    }

    pub fn toggle_menu(&self) {
        if let Some(menu) = &self.menu {
            menu.toggle();
        }
    }

    pub fn close_menu(&self) {
        if let Some(menu) = &self.menu {
            menu.close();
        }
    }

    /// The target is passed as its viewport top so any element kind can be
    /// scrolled to, not only the ones the controller drives.
    pub fn anchor_click(
        &self,
        href: &str,
        target_top: Option<f64>,
        scroll_y: f64,
    ) -> AnchorScroll {
        let header_height = self.header.as_ref().map(PageElement::offset_height);
        let offset = scroll::header_offset(header_height, self.config.min_anchor_offset);
        scroll::anchor_scroll(href, target_top, scroll_y, offset)
    }

    pub fn on_scroll(&self, scroll_y: f64, viewport_height: f64) {
        if let Some(header) = &self.header {
            scroll::update_header(header, scroll_y, self.config.header_scroll_threshold);
        }
        scroll::reveal_in_view(&self.animated, viewport_height, self.config.reveal_ratio);
    }
}
