use std::cell::Cell;

use crate::dom::PageElement;

/// The banner only nudges visitors who haven't chosen and haven't said no.
pub fn should_reveal(dismissed: bool, has_stored_theme: bool) -> bool {
    !dismissed && !has_stored_theme
}

/// One-time "try dark mode" banner. Once closed it stays closed for the session.
pub struct ThemeBanner<E> {
    element: E,
    closed: Cell<bool>,
}

impl<E: PageElement> ThemeBanner<E> {
    pub fn new(element: E) -> Self {
        Self {
            element,
            closed: Cell::new(false),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.element.is_hidden()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Unhides the banner; the transition is played separately so it has
    /// a rendered starting state to animate from.
    pub fn reveal(&self) -> bool {
        if self.closed.get() {
            return false;
        }
        self.element.set_hidden(false);
        true
    }

    pub fn play_show_transition(&self) {
        if self.closed.get() || !self.is_visible() {
            return;
        }
        self.element.set_style("opacity", "1");
        self.element.set_style("transform", "translateY(0)");
    }

    /// Hides immediately, no exit animation.
    pub fn close(&self) {
        self.closed.set(true);
        self.element.set_hidden(true);
    }
}
