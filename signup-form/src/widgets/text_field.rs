//! In-memory text field.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::{FormField, InvalidMarker};

/// Internal state for a TextField.
#[derive(Debug, Default)]
struct TextFieldInner {
    /// Current text value
    value: String,
    /// Invalid marking and its message (if any)
    invalid: Option<(InvalidMarker, String)>,
}

/// A text field with shared state.
///
/// Clones share the same state, so the host and the form session can both
/// hold a handle. Any change sets the dirty flag so a host can re-render.
///
/// # Example
///
/// ```ignore
/// let email = TextField::new();
/// let session = FormSession::mount(surface_with(&email), services, config)?;
///
/// email.set_value("a..b@example.com");
/// session.dispatch(FormEvent::Input(FieldId::Email))?;
/// assert!(email.is_invalid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextField {
    inner: Arc<RwLock<TextFieldInner>>,
    dirty: Arc<AtomicBool>,
}

impl TextField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextFieldInner {
                value: value.into(),
                invalid: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the current text value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Set the text value.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Append a character, as a keystroke would.
    pub fn push_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.push(c);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Remove the last character, as backspace would.
    pub fn pop_char(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.value.pop().is_some()
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Whether the field is marked invalid.
    pub fn is_invalid(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.invalid.is_some())
            .unwrap_or(false)
    }

    /// Message attached to the invalid marking.
    pub fn validation_message(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.invalid.as_ref().map(|(_, msg)| msg.clone()))
    }

    /// How the field is currently marked, if invalid.
    pub fn marker(&self) -> Option<InvalidMarker> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.invalid.as_ref().map(|(marker, _)| *marker))
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field has changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl FormField for TextField {
    fn value(&self) -> String {
        TextField::value(self)
    }

    fn set_value(&self, value: &str) {
        TextField::set_value(self, value)
    }

    fn mark_invalid(&self, marker: InvalidMarker, message: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.invalid = Some((marker, message.to_string()));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn clear_invalid(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.invalid.take().is_some()
        {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn is_invalid(&self) -> bool {
        TextField::is_invalid(self)
    }
}
