//! Signup form validation.
//!
//! Host-agnostic validation for a signup form: rule-based email checks,
//! a fuzzy country autocomplete feeding postal code validation, and
//! password confirmation. The host supplies fields and panels through the
//! [`validation::FormField`] and [`validation::DisplayPanel`] traits and
//! forwards events to a mounted [`FormSession`].

pub mod config;
pub mod country;
pub mod error;
pub mod session;
pub mod validation;
pub mod widgets;

pub use config::FormConfig;
pub use error::{FormError, Result};
pub use session::{FormEvent, FormSession, FormSurface, Services, SuggestionKey};

pub mod prelude {
    pub use crate::config::FormConfig;
    pub use crate::error::FormError;
    pub use crate::session::{FormEvent, FormSession, FormSurface, Services, SuggestionKey};
    pub use crate::validation::{FieldId, FormField, DisplayPanel, ValidationResult};
    pub use crate::widgets::{ListPanel, MemoryForm, TextField};
}
