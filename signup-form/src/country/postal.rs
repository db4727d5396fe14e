//! Postal code validator service.

use std::collections::{HashMap, HashSet};

use regex::{Regex, RegexBuilder};

use crate::error::{FormError, Result};

use super::data::{COUNTRIES, NO_POSTAL_CODES, POSTAL_FORMATS};

/// Loose format used for countries with postal codes but no known format.
const GENERIC_FORMAT: &str = r"[A-Z0-9][A-Z0-9 -]{1,9}";

/// Checks a postal code against a country's format.
pub trait PostalCodeValidator: Send + Sync {
    /// `Err` carries the message to show the user.
    fn validate(&self, code: &str, value: &str) -> std::result::Result<(), String>;
}

/// Regex-table validator covering the bundled directory.
#[derive(Debug, Clone)]
pub struct PostalCodeTable {
    formats: HashMap<String, Regex>,
    generic: Regex,
    without_codes: HashSet<String>,
    known: HashSet<String>,
}

impl PostalCodeTable {
    /// Build the table from the bundled formats.
    pub fn bundled() -> Result<Self> {
        Self::new(
            POSTAL_FORMATS.iter().copied(),
            NO_POSTAL_CODES.iter().copied(),
            COUNTRIES.iter().map(|(_, code)| *code),
        )
    }

    /// Build a table from explicit formats, codes without postal codes and
    /// the set of known country codes.
    pub fn new<'a>(
        formats: impl IntoIterator<Item = (&'a str, &'a str)>,
        without_codes: impl IntoIterator<Item = &'a str>,
        known: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let mut compiled = HashMap::new();
        for (code, pattern) in formats {
            compiled.insert(code.to_string(), compile(code, pattern)?);
        }
        let mut known: HashSet<String> = known.into_iter().map(str::to_string).collect();
        known.extend(compiled.keys().cloned());

        Ok(Self {
            formats: compiled,
            generic: compile("generic", GENERIC_FORMAT)?,
            without_codes: without_codes.into_iter().map(str::to_string).collect(),
            known,
        })
    }
}

fn compile(key: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{pattern})$"))
        .case_insensitive(true)
        .build()
        .map_err(|e| FormError::invalid_pattern(format!("postal:{key}"), e))
}

impl PostalCodeValidator for PostalCodeTable {
    fn validate(&self, code: &str, value: &str) -> std::result::Result<(), String> {
        let code = code.to_ascii_uppercase();
        if !self.known.contains(&code) {
            return Err(format!("Unknown country code {code}."));
        }
        if self.without_codes.contains(&code) {
            return Ok(());
        }

        let format = self.formats.get(&code).unwrap_or(&self.generic);
        if format.is_match(value.trim()) {
            Ok(())
        } else {
            Err(format!("Postal code {value} is not valid for country {code}."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_formats() {
        let table = PostalCodeTable::bundled().unwrap();
        assert!(table.validate("US", "90210").is_ok());
        assert!(table.validate("US", "90210-1234").is_ok());
        assert!(table.validate("GB", "sw1a 1aa").is_ok());
        assert!(table.validate("CA", "K1A 0B1").is_ok());
    }

    #[test]
    fn test_mismatch_message() {
        let table = PostalCodeTable::bundled().unwrap();
        assert_eq!(
            table.validate("DE", "1234"),
            Err("Postal code 1234 is not valid for country DE.".to_string())
        );
    }

    #[test]
    fn test_country_without_postal_codes_accepts_anything() {
        let table = PostalCodeTable::bundled().unwrap();
        assert!(table.validate("AE", "whatever").is_ok());
    }

    #[test]
    fn test_unknown_code() {
        let table = PostalCodeTable::bundled().unwrap();
        assert_eq!(
            table.validate("QQ", "12345"),
            Err("Unknown country code QQ.".to_string())
        );
    }

    #[test]
    fn test_generic_fallback() {
        let table = PostalCodeTable::bundled().unwrap();
        assert!(table.validate("AF", "1001").is_ok());
        assert!(table.validate("AF", "!").is_err());
    }
}
