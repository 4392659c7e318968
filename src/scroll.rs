use crate::dom::PageElement;

pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const ANIMATE_ATTRIBUTE: &str = "data-animate";

/// What an in-page anchor click should turn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorScroll {
    /// Not a same-page link; the browser handles it.
    PassThrough,
    /// Same-page link whose target doesn't exist: swallow the click.
    Suppress,
    /// Swallow the click and smooth-scroll to this document offset.
    To(f64),
}

/// Id an anchor href points at, if it is a same-page link with a target.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

pub fn header_offset(header_height: Option<f64>, minimum: f64) -> f64 {
    header_height.map_or(minimum, |height| height.max(minimum))
}

/// `target_top` is the viewport top of whatever element the fragment names,
/// HTML or not, or `None` when no element has that id.
pub fn anchor_scroll(
    href: &str,
    target_top: Option<f64>,
    scroll_y: f64,
    offset: f64,
) -> AnchorScroll {
    if fragment_id(href).is_none() {
        return AnchorScroll::PassThrough;
    }
    match target_top {
        Some(top) => AnchorScroll::To(top + scroll_y - offset),
        None => AnchorScroll::Suppress,
    }
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn update_header<E: PageElement>(header: &E, scroll_y: f64, threshold: f64) {
    if is_scrolled(scroll_y, threshold) {
        header.add_class(SCROLLED_CLASS);
    } else {
        header.remove_class(SCROLLED_CLASS);
    }
}

pub fn in_reveal_zone(top: f64, viewport_height: f64, ratio: f64) -> bool {
    top <= viewport_height * ratio
}

/// One-way: elements that were revealed stay revealed.
pub fn reveal_in_view<E: PageElement>(elements: &[E], viewport_height: f64, ratio: f64) {
    for element in elements {
        if in_reveal_zone(element.top(), viewport_height, ratio) {
            element.add_class(VISIBLE_CLASS);
        }
    }
}
