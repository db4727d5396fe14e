//! Capabilities the host provides for each form field.

use std::fmt;

/// Identifies one field of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Country,
    PostalCode,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Email,
        FieldId::Country,
        FieldId::PostalCode,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// Stable name used in logs and error reports.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Country => "country",
            FieldId::PostalCode => "postal_code",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm_password",
        }
    }

    /// Parse a field name as produced by [`FieldId::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a field shows that it is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidMarker {
    /// Native constraint validity with a custom message (default).
    #[default]
    Constraint,
    /// A style-class flag; the message only goes to the error panel.
    Class,
}

/// Trait for input fields that can be validated.
///
/// Methods take `&self`; implementations use interior mutability so a
/// field handle can be shared between bindings.
pub trait FormField: Send + Sync {
    /// Current text value.
    fn value(&self) -> String;

    /// Replace the text value.
    fn set_value(&self, value: &str);

    /// Mark the field invalid.
    fn mark_invalid(&self, marker: InvalidMarker, message: &str);

    /// Clear any invalid marking.
    fn clear_invalid(&self);

    /// Whether the field is currently marked invalid.
    fn is_invalid(&self) -> bool;
}

/// Trait for the area next to a field where messages are listed.
pub trait DisplayPanel: Send + Sync {
    /// Remove every item.
    fn clear(&self);

    /// Append one text item.
    fn append(&self, item: &str);

    /// Items currently shown.
    fn items(&self) -> Vec<String>;
}
