//! Rules, rule batteries and the evaluator.

use std::collections::HashSet;

use regex::Regex;

use crate::error::{FormError, Result};

/// A single failure-detecting pattern and the message shown when it fires.
#[derive(Debug, Clone)]
pub struct Rule {
    key: String,
    pattern: Regex,
    message: String,
}

impl Rule {
    /// Compile a rule.
    pub fn new(
        key: impl Into<String>,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let pattern = Regex::new(pattern).map_err(|e| FormError::invalid_pattern(&key, e))?;
        Ok(Self {
            key,
            pattern,
            message: message.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this rule fires anywhere in `value`.
    pub fn fires(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Ordered rules plus the master pattern that decides overall acceptance.
///
/// The rules describe failures: a valid value fires none of them, and the
/// order only affects the order of the returned messages.
#[derive(Debug, Clone)]
pub struct RuleBattery {
    master: Regex,
    rules: Vec<Rule>,
}

impl RuleBattery {
    /// Start building a battery around a master acceptance pattern.
    ///
    /// The master is matched against the whole value.
    pub fn builder(master: impl Into<String>) -> RuleBatteryBuilder {
        RuleBatteryBuilder {
            master: master.into(),
            rules: Vec::new(),
        }
    }

    /// Whether the whole value satisfies the master pattern.
    pub fn accepts(&self, value: &str) -> bool {
        self.master.is_match(value)
    }

    /// Messages of every rule that fires, in battery order.
    pub fn evaluate(&self, value: &str) -> Vec<String> {
        evaluate(value, self)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by key.
    pub fn rule(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.key == key)
    }
}

/// Run every rule of `battery` against `value` and collect the messages of
/// those that fire. Overlapping rules all report.
pub fn evaluate(value: &str, battery: &RuleBattery) -> Vec<String> {
    battery
        .rules
        .iter()
        .filter(|rule| rule.fires(value))
        .map(|rule| rule.message.clone())
        .collect()
}

/// Builder for [`RuleBattery`]. Patterns are compiled in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RuleBatteryBuilder {
    master: String,
    rules: Vec<(String, String, String)>,
}

impl RuleBatteryBuilder {
    /// Append a rule.
    pub fn rule(
        mut self,
        key: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.rules.push((key.into(), pattern.into(), message.into()));
        self
    }

    /// Compile the master and every rule.
    pub fn build(self) -> Result<RuleBattery> {
        let master = Regex::new(&format!("^(?:{})$", self.master))
            .map_err(|e| FormError::invalid_pattern("master", e))?;

        let mut seen = HashSet::new();
        let mut rules = Vec::with_capacity(self.rules.len());
        for (key, pattern, message) in self.rules {
            if !seen.insert(key.clone()) {
                return Err(FormError::DuplicateRule(key));
            }
            rules.push(Rule::new(key, &pattern, message)?);
        }

        Ok(RuleBattery { master, rules })
    }
}
