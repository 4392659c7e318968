use crate::dom::PageElement;

pub const OPEN_CLASS: &str = "active";
const EXPANDED_ATTRIBUTE: &str = "aria-expanded";

/// Mobile navigation: the burger button and the panel it opens.
pub struct MobileMenu<E> {
    button: Option<E>,
    panel: E,
}

impl<E: PageElement> MobileMenu<E> {
    pub fn new(button: Option<E>, panel: E) -> Self {
        Self { button, panel }
    }

    pub fn has_button(&self) -> bool {
        self.button.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.button
            .as_ref()
            .and_then(|button| button.attribute(EXPANDED_ATTRIBUTE))
            .as_deref()
            == Some("true")
    }

    pub fn toggle(&self) {
        let Some(button) = &self.button else {
            return;
        };
        if self.is_open() {
            button.set_attribute(EXPANDED_ATTRIBUTE, "false");
            self.panel.remove_class(OPEN_CLASS);
        } else {
            button.set_attribute(EXPANDED_ATTRIBUTE, "true");
            self.panel.add_class(OPEN_CLASS);
        }
    }

    /// Following a nav link always collapses the menu.
    pub fn close(&self) {
        self.panel.remove_class(OPEN_CLASS);
        if let Some(button) = &self.button {
            button.set_attribute(EXPANDED_ATTRIBUTE, "false");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    fn menu() -> (MobileMenu<FakeElement>, FakeElement, FakeElement) {
        let button = FakeElement::default();
        let panel = FakeElement::default();
        (
            MobileMenu::new(Some(button.clone()), panel.clone()),
            button,
            panel,
        )
    }

    #[test]
    fn toggle_flips_flag_and_class_together() {
        let (menu, button, panel) = menu();

        menu.toggle();
        assert_eq!(button.attribute(EXPANDED_ATTRIBUTE).as_deref(), Some("true"));
        assert!(panel.has_class(OPEN_CLASS));

        menu.toggle();
        assert_eq!(button.attribute(EXPANDED_ATTRIBUTE).as_deref(), Some("false"));
        assert!(!panel.has_class(OPEN_CLASS));
    }

    #[test]
    fn close_collapses_open_menu() {
        let (menu, button, panel) = menu();
        menu.toggle();
        assert!(menu.is_open());

        menu.close();
        assert!(!menu.is_open());
        assert_eq!(button.attribute(EXPANDED_ATTRIBUTE).as_deref(), Some("false"));
        assert!(!panel.has_class(OPEN_CLASS));

        // idempotent
        menu.close();
        assert!(!panel.has_class(OPEN_CLASS));
    }

    #[test]
    fn panel_without_button_still_closes() {
        let panel = FakeElement::default();
        panel.add_class(OPEN_CLASS);
        let menu = MobileMenu::new(None, panel.clone());

        menu.toggle();
        assert!(panel.has_class(OPEN_CLASS));

        menu.close();
        assert!(!panel.has_class(OPEN_CLASS));
    }
}
