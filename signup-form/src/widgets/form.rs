//! In-memory surface for a whole signup form.

use std::sync::Arc;

use crate::session::{FieldSurface, FormSurface};
use crate::validation::FieldId;

use super::{ListPanel, TextField};

/// Text fields and panels for every signup input, with shared state.
///
/// Hand [`surface`](Self::surface) to a session and keep this value to type
/// into fields and read back what the session rendered.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    pub email: TextField,
    pub email_errors: ListPanel,
    pub country: TextField,
    pub country_errors: ListPanel,
    pub country_suggestions: ListPanel,
    pub postal_code: TextField,
    pub postal_code_errors: ListPanel,
    pub password: TextField,
    pub password_errors: ListPanel,
    pub confirm_password: TextField,
    pub confirm_password_errors: ListPanel,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capability handles sharing this form's state.
    pub fn surface(&self) -> FormSurface {
        FormSurface {
            email: slot(&self.email, &self.email_errors),
            country: slot(&self.country, &self.country_errors),
            country_suggestions: Arc::new(self.country_suggestions.clone()),
            postal_code: slot(&self.postal_code, &self.postal_code_errors),
            password: slot(&self.password, &self.password_errors),
            confirm_password: slot(&self.confirm_password, &self.confirm_password_errors),
        }
    }

    pub fn field(&self, id: FieldId) -> &TextField {
        match id {
            FieldId::Email => &self.email,
            FieldId::Country => &self.country,
            FieldId::PostalCode => &self.postal_code,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn errors(&self, id: FieldId) -> &ListPanel {
        match id {
            FieldId::Email => &self.email_errors,
            FieldId::Country => &self.country_errors,
            FieldId::PostalCode => &self.postal_code_errors,
            FieldId::Password => &self.password_errors,
            FieldId::ConfirmPassword => &self.confirm_password_errors,
        }
    }

    /// Whether anything changed since the last [`clear_dirty`](Self::clear_dirty).
    pub fn is_dirty(&self) -> bool {
        FieldId::ALL
            .into_iter()
            .any(|id| self.field(id).is_dirty() || self.errors(id).is_dirty())
            || self.country_suggestions.is_dirty()
    }

    pub fn clear_dirty(&self) {
        for id in FieldId::ALL {
            self.field(id).clear_dirty();
            self.errors(id).clear_dirty();
        }
        self.country_suggestions.clear_dirty();
    }
}

fn slot(field: &TextField, errors: &ListPanel) -> FieldSurface {
    FieldSurface {
        field: Arc::new(field.clone()),
        errors: Arc::new(errors.clone()),
    }
}
