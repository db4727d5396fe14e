//! Field validation for the signup form.
//!
//! A [`RuleBattery`] pairs a master acceptance pattern with ordered
//! failure rules. A [`FieldBinding`] connects a battery (or a predicate)
//! to one [`FormField`] and renders messages into a [`DisplayPanel`].
//!
//! # Example
//!
//! ```ignore
//! use signup_form::validation::{email_battery, CheckMode, FieldBinding, FieldId};
//!
//! let binding = FieldBinding::pattern(
//!     FieldId::Email,
//!     Arc::new(email_field.clone()),
//!     Arc::new(email_errors.clone()),
//!     email_battery()?,
//! );
//!
//! // on every input event
//! let messages = binding.check(CheckMode::Input);
//! ```

mod binding;
mod field;
mod result;
mod rule;
mod rules;

pub use binding::{
    CheckMode, FORMAT_MESSAGE, FieldBinding, Predicate, REQUIRED_MESSAGE, ValiditySource,
};
pub use field::{DisplayPanel, FieldId, FormField, InvalidMarker};
pub use result::{FieldError, ValidationResult};
pub use rule::{Rule, RuleBattery, RuleBatteryBuilder, evaluate};
pub use rules::*;
