//! Form configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Tunables for the signup form.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Maximum number of country suggestions shown at once.
    pub suggestion_limit: usize,
    /// Fuzzy matches scoring below this are dropped.
    pub min_score: u32,
    /// Minimum password length.
    pub password_min_len: usize,
    /// Maximum password length; longer input is truncated.
    pub password_max_len: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 6,
            min_score: 0,
            password_min_len: 6,
            password_max_len: 20,
        }
    }
}

impl FormConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults when it is missing.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(FormError::InvalidConfig(format!(
                "cannot read {}: {}",
                path.as_ref().display(),
                e
            ))),
        }
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(FormError::InvalidConfig(
                "suggestion_limit must be at least 1".into(),
            ));
        }
        if self.password_min_len == 0 {
            return Err(FormError::InvalidConfig(
                "password_min_len must be at least 1".into(),
            ));
        }
        if self.password_min_len > self.password_max_len {
            return Err(FormError::InvalidConfig(format!(
                "password_min_len ({}) exceeds password_max_len ({})",
                self.password_min_len, self.password_max_len
            )));
        }
        Ok(())
    }
}
