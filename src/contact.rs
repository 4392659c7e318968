use crate::dom::FormElement;

/// Placeholder contact form: nothing is sent, the visitor just gets a thank-you.
pub struct ContactForm<F> {
    form: F,
    acknowledgement: String,
}

impl<F: FormElement> ContactForm<F> {
    pub fn new(form: F, acknowledgement: String) -> Self {
        Self {
            form,
            acknowledgement,
        }
    }

    pub fn submit(&self, notify: impl FnOnce(&str)) {
        notify(&self.acknowledgement);
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn submit_acknowledges_then_resets() {
        let form = FakeElement::default();
        let contact = ContactForm::new(form.clone(), "Thanks!".to_string());

        let mut shown = Vec::new();
        contact.submit(|message| shown.push(message.to_string()));

        assert_eq!(shown, vec!["Thanks!".to_string()]);
        assert_eq!(form.resets(), 1);
    }
}
