use super::FieldId;

/// A field that failed submit-time validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field that failed.
    pub field: FieldId,
    /// Every message shown for the field, in display order.
    pub messages: Vec<String>,
}

impl FieldError {
    /// First message, if any.
    pub fn message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

/// Result of validating the whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    /// Build a result from collected errors.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Error for one field, if it failed.
    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field == field)
    }

    /// First invalid field in form order (for focusing).
    pub fn first_invalid_field(&self) -> Option<FieldId> {
        self.errors().first().map(|e| e.field)
    }
}
