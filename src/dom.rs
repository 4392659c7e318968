use web_sys::{HtmlElement, HtmlFormElement};

/// The slice of an element's DOM surface the page behaviors touch.
pub trait PageElement {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn is_hidden(&self) -> bool;
    fn set_hidden(&self, hidden: bool);
    fn set_style(&self, property: &str, value: &str);
    fn set_inner_html(&self, html: &str);
    fn set_title(&self, title: &str);
    /// Top edge relative to the viewport.
    fn top(&self) -> f64;
    fn offset_height(&self) -> f64;
}

pub trait FormElement {
    fn reset(&self);
}

impl PageElement for HtmlElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = web_sys::Element::set_attribute(self, name, value);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }

    fn is_hidden(&self) -> bool {
        self.hidden()
    }

    fn set_hidden(&self, hidden: bool) {
        HtmlElement::set_hidden(self, hidden);
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn set_inner_html(&self, html: &str) {
        web_sys::Element::set_inner_html(self, html);
    }

    fn set_title(&self, title: &str) {
        HtmlElement::set_title(self, title);
    }

    fn top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }

    fn offset_height(&self) -> f64 {
        HtmlElement::offset_height(self) as f64
    }
}

impl FormElement for HtmlFormElement {
    fn reset(&self) {
        HtmlFormElement::reset(self);
    }
}
