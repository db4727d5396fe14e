//! Field bindings: one input, its error panel and its validity source.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use super::{DisplayPanel, FieldId, FormField, InvalidMarker, RuleBattery};

/// Message shown on submit for an empty field.
pub const REQUIRED_MESSAGE: &str = "Please fill out this field.";

/// Message shown when the master pattern fails but no rule explains why.
pub const FORMAT_MESSAGE: &str = "Please match the requested format.";

/// Type alias for predicate closures deciding validity from the field value.
pub type Predicate = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Where a binding gets its verdict from.
pub enum ValiditySource {
    /// Master pattern plus failure rules.
    Pattern(RuleBattery),
    /// External predicate, usually reading other fields.
    Predicate(Predicate),
}

impl fmt::Debug for ValiditySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(battery) => f.debug_tuple("Pattern").field(battery).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// When a check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// On an input event. Empty values pass pattern checks; predicates
    /// still see them.
    Input,
    /// On form submission. Empty values are reported as missing.
    Submit,
}

/// Binds one field to its validation behavior.
pub struct FieldBinding {
    id: FieldId,
    field: Arc<dyn FormField>,
    errors: Arc<dyn DisplayPanel>,
    source: ValiditySource,
    marker: InvalidMarker,
    max_len: Option<usize>,
}

impl FieldBinding {
    /// Bind a field to a rule battery.
    pub fn pattern(
        id: FieldId,
        field: Arc<dyn FormField>,
        errors: Arc<dyn DisplayPanel>,
        battery: RuleBattery,
    ) -> Self {
        Self::new(id, field, errors, ValiditySource::Pattern(battery))
    }

    /// Bind a field to a predicate. An `Err` carries the message to show.
    pub fn predicate<F>(
        id: FieldId,
        field: Arc<dyn FormField>,
        errors: Arc<dyn DisplayPanel>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        Self::new(
            id,
            field,
            errors,
            ValiditySource::Predicate(Box::new(predicate)),
        )
    }

    fn new(
        id: FieldId,
        field: Arc<dyn FormField>,
        errors: Arc<dyn DisplayPanel>,
        source: ValiditySource,
    ) -> Self {
        Self {
            id,
            field,
            errors,
            source,
            marker: InvalidMarker::default(),
            max_len: None,
        }
    }

    /// Set how the field shows it is invalid.
    pub fn with_marker(mut self, marker: InvalidMarker) -> Self {
        self.marker = marker;
        self
    }

    /// Truncate values longer than `max` characters before checking.
    pub fn with_max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn field(&self) -> &Arc<dyn FormField> {
        &self.field
    }

    pub fn errors(&self) -> &Arc<dyn DisplayPanel> {
        &self.errors
    }

    pub fn marker(&self) -> InvalidMarker {
        self.marker
    }

    /// Messages for `value` without touching the field. Empty means valid.
    pub fn messages_for(&self, value: &str, mode: CheckMode) -> Vec<String> {
        if value.is_empty() && mode == CheckMode::Submit {
            return vec![REQUIRED_MESSAGE.to_string()];
        }

        match &self.source {
            ValiditySource::Pattern(battery) => {
                // An empty value has no pattern mismatch until submit.
                if value.is_empty() || battery.accepts(value) {
                    return Vec::new();
                }
                let messages = battery.evaluate(value);
                if messages.is_empty() {
                    vec![FORMAT_MESSAGE.to_string()]
                } else {
                    messages
                }
            }
            ValiditySource::Predicate(predicate) => match predicate(value) {
                Ok(()) => Vec::new(),
                Err(message) => vec![message],
            },
        }
    }

    /// Recompute the field's validity from its current value and render
    /// the outcome. Returns the messages shown.
    pub fn check(&self, mode: CheckMode) -> Vec<String> {
        let value = self.enforce_max_len();
        self.errors.clear();

        let messages = self.messages_for(&value, mode);
        if messages.is_empty() {
            trace!("[binding] {} valid", self.id);
            self.field.clear_invalid();
        } else {
            debug!("[binding] {} invalid: {:?}", self.id, messages);
            for message in &messages {
                self.errors.append(message);
            }
            self.field.mark_invalid(self.marker, &messages.join("\n"));
        }
        messages
    }

    /// Clear messages and the invalid marking without validating.
    pub fn reset(&self) {
        self.errors.clear();
        self.field.clear_invalid();
    }

    /// Drop trailing characters until the value fits `max_len`.
    ///
    /// Trims as many characters as needed in one event, so pasted text is
    /// cut down immediately rather than one character per keystroke.
    fn enforce_max_len(&self) -> String {
        let mut value = self.field.value();
        let Some(max) = self.max_len else {
            return value;
        };

        let mut trimmed = false;
        while value.chars().count() > max {
            value.pop();
            trimmed = true;
        }
        if trimmed {
            debug!("[binding] {} truncated to {} characters", self.id, max);
            self.field.set_value(&value);
        }
        value
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("id", &self.id)
            .field("source", &self.source)
            .field("marker", &self.marker)
            .field("max_len", &self.max_len)
            .finish_non_exhaustive()
    }
}
