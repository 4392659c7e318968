use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::dom::{FormElement, PageElement};
use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Cloning shares the entries, like two handles on one origin's storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Makes every subsequent access fail, like a disabled store.
    pub fn fail_all(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing.get() {
            return Err(StorageError::Read {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            });
        }
        Ok(self.value(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "QuotaExceededError".to_string(),
            });
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Remove {
                key: key.to_string(),
                message: "SecurityError".to_string(),
            });
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ElementState {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub hidden: bool,
    pub inner_html: String,
    pub title: String,
    pub top: f64,
    pub offset_height: f64,
    pub resets: u32,
}

/// Cloning shares state, so a test keeps a handle after giving one away.
#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn hidden() -> Self {
        let element = Self::default();
        element.0.borrow_mut().hidden = true;
        element
    }

    pub fn at(top: f64) -> Self {
        let element = Self::default();
        element.0.borrow_mut().top = top;
        element
    }

    pub fn with_height(height: f64) -> Self {
        let element = Self::default();
        element.0.borrow_mut().offset_height = height;
        element
    }

    pub fn move_to(&self, top: f64) {
        self.0.borrow_mut().top = top;
    }

    pub fn resize(&self, height: f64) {
        self.0.borrow_mut().offset_height = height;
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    pub fn title(&self) -> String {
        self.0.borrow().title.clone()
    }

    pub fn resets(&self) -> u32 {
        self.0.borrow().resets
    }
}

impl PageElement for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn is_hidden(&self) -> bool {
        self.0.borrow().hidden
    }

    fn set_hidden(&self, hidden: bool) {
        self.0.borrow_mut().hidden = hidden;
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn set_inner_html(&self, html: &str) {
        self.0.borrow_mut().inner_html = html.to_string();
    }

    fn set_title(&self, title: &str) {
        self.0.borrow_mut().title = title.to_string();
    }

    fn top(&self) -> f64 {
        self.0.borrow().top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }
}

impl FormElement for FakeElement {
    fn reset(&self) {
        self.0.borrow_mut().resets += 1;
    }
}
