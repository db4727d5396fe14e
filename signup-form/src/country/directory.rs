//! Country directory service.

use std::collections::HashMap;

use super::data::COUNTRIES;

/// A country as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    /// Display name, as shown and typed.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
}

/// Read-only mapping from display name to country code.
pub trait CountryDirectory: Send + Sync {
    /// All display names in directory order.
    fn names(&self) -> Vec<String>;

    /// Code for an exact display name.
    fn code_for(&self, name: &str) -> Option<String>;

    /// Whether `name` is exactly a listed display name.
    fn contains(&self, name: &str) -> bool {
        self.code_for(name).is_some()
    }
}

/// In-memory directory, by default the bundled ISO 3166 list.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    countries: Vec<Country>,
    by_name: HashMap<String, usize>,
}

impl StaticDirectory {
    /// Build a directory from `(name, code)` pairs, keeping their order.
    ///
    /// A repeated name keeps its first code.
    pub fn from_pairs<N, C>(pairs: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        let mut countries = Vec::new();
        let mut by_name = HashMap::new();
        for (name, code) in pairs {
            let name = name.into();
            if by_name.contains_key(&name) {
                continue;
            }
            by_name.insert(name.clone(), countries.len());
            countries.push(Country {
                name,
                code: code.into(),
            });
        }
        Self { countries, by_name }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::from_pairs(COUNTRIES.iter().copied())
    }
}

impl CountryDirectory for StaticDirectory {
    fn names(&self) -> Vec<String> {
        self.countries.iter().map(|c| c.name.clone()).collect()
    }

    fn code_for(&self, name: &str) -> Option<String> {
        self.by_name
            .get(name)
            .map(|&index| self.countries[index].code.clone())
    }
}
