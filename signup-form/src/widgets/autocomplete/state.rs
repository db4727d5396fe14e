//! Autocomplete state machine.

use std::sync::Arc;

use log::debug;

use crate::validation::{DisplayPanel, FormField};

use super::filter::FuzzyMatcher;

/// One ranked suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub score: u32,
}

/// Ranked suggestions for one open/close cycle of the panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteSession {
    /// Text the suggestions were ranked against
    query: String,
    /// Best first
    suggestions: Vec<Suggestion>,
    /// Keyboard cursor into `suggestions`
    cursor: usize,
}

impl AutocompleteSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Whether the suggestion panel is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AutocompleteState {
    #[default]
    Closed,
    Open(AutocompleteSession),
}

/// A text field with fuzzy-ranked suggestions from a fixed list.
///
/// Typing or focusing opens the panel and re-ranks; choosing a suggestion
/// commits its label to the field and closes the panel.
pub struct Autocomplete {
    field: Arc<dyn FormField>,
    panel: Arc<dyn DisplayPanel>,
    matcher: Arc<dyn FuzzyMatcher>,
    /// All available option labels
    option_labels: Vec<String>,
    limit: usize,
    min_score: u32,
    state: AutocompleteState,
}

impl Autocomplete {
    /// Create a closed autocomplete over `option_labels`.
    pub fn new(
        field: Arc<dyn FormField>,
        panel: Arc<dyn DisplayPanel>,
        matcher: Arc<dyn FuzzyMatcher>,
        option_labels: Vec<String>,
    ) -> Self {
        Self {
            field,
            panel,
            matcher,
            option_labels,
            limit: 6,
            min_score: 0,
            state: AutocompleteState::Closed,
        }
    }

    /// Set the maximum number of suggestions shown.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the minimum fuzzy score a suggestion needs.
    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn field(&self) -> &Arc<dyn FormField> {
        &self.field
    }

    pub fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, AutocompleteState::Open(_))
    }

    /// Labels currently suggested, best first. Empty when closed.
    pub fn suggestions(&self) -> Vec<String> {
        match &self.state {
            AutocompleteState::Closed => Vec::new(),
            AutocompleteState::Open(session) => session
                .suggestions
                .iter()
                .map(|s| s.label.clone())
                .collect(),
        }
    }

    /// Whether `value` is exactly one of the option labels.
    pub fn is_option(&self, value: &str) -> bool {
        self.option_labels.iter().any(|label| label == value)
    }

    // -------------------------------------------------------------------------
    // Open/close
    // -------------------------------------------------------------------------

    /// Rank the options against the field's current value and show the
    /// panel. Opens the panel if it was closed.
    pub fn refresh(&mut self) {
        let query = self.field.value();
        let suggestions: Vec<Suggestion> = self
            .matcher
            .rank(&query, &self.option_labels, self.limit, self.min_score)
            .into_iter()
            .filter_map(|m| {
                self.option_labels.get(m.index).map(|label| Suggestion {
                    label: label.clone(),
                    score: m.score,
                })
            })
            .collect();

        self.panel.clear();
        for suggestion in &suggestions {
            self.panel.append(&suggestion.label);
        }

        debug!(
            "[autocomplete] '{}' -> {} suggestions",
            query,
            suggestions.len()
        );
        self.state = AutocompleteState::Open(AutocompleteSession {
            query,
            suggestions,
            cursor: 0,
        });
    }

    /// Close the panel, keeping the field's value. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = AutocompleteState::Closed;
        self.panel.clear();
        was_open
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Commit the suggestion at `index` and close the panel.
    ///
    /// Returns the committed label, or `None` if the panel is closed or the
    /// index is out of range.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let AutocompleteState::Open(session) = &self.state else {
            return None;
        };
        let label = session.suggestions.get(index)?.label.clone();
        self.field.set_value(&label);
        self.close();
        debug!("[autocomplete] selected '{}'", label);
        Some(label)
    }

    /// Commit the suggestion under the keyboard cursor.
    pub fn select_at_cursor(&mut self) -> Option<String> {
        let AutocompleteState::Open(session) = &self.state else {
            return None;
        };
        let cursor = session.cursor;
        self.select(cursor)
    }

    /// Move the keyboard cursor up.
    pub fn cursor_up(&mut self) {
        if let AutocompleteState::Open(session) = &mut self.state {
            session.cursor = session.cursor.saturating_sub(1);
        }
    }

    /// Move the keyboard cursor down.
    pub fn cursor_down(&mut self) {
        if let AutocompleteState::Open(session) = &mut self.state {
            let max = session.suggestions.len().saturating_sub(1);
            if session.cursor < max {
                session.cursor += 1;
            }
        }
    }
}

impl std::fmt::Debug for Autocomplete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autocomplete")
            .field("options", &self.option_labels.len())
            .field("limit", &self.limit)
            .field("min_score", &self.min_score)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::autocomplete::NucleoMatcher;
    use crate::widgets::{ListPanel, TextField};

    fn colors(field: &TextField, panel: &ListPanel) -> Autocomplete {
        Autocomplete::new(
            Arc::new(field.clone()),
            Arc::new(panel.clone()),
            Arc::new(NucleoMatcher),
            ["Red", "Green", "Blue", "Black", "Brown"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .with_limit(3)
    }

    #[test]
    fn test_refresh_opens_and_renders() {
        let field = TextField::with_value("bl");
        let panel = ListPanel::new();
        let mut ac = colors(&field, &panel);

        ac.refresh();
        assert!(ac.is_open());
        let shown = panel.items();
        assert!(shown.contains(&"Blue".to_string()));
        assert!(shown.contains(&"Black".to_string()));
        assert_eq!(shown, ac.suggestions());
    }

    #[test]
    fn test_empty_query_lists_first_options() {
        let field = TextField::new();
        let panel = ListPanel::new();
        let mut ac = colors(&field, &panel);

        ac.refresh();
        assert_eq!(ac.suggestions(), vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_select_commits_label_and_closes() {
        let field = TextField::with_value("gre");
        let panel = ListPanel::new();
        let mut ac = colors(&field, &panel);

        ac.refresh();
        assert_eq!(ac.select(0).as_deref(), Some("Green"));
        assert_eq!(field.value(), "Green");
        assert!(!ac.is_open());
        assert!(panel.is_empty());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let field = TextField::with_value("gre");
        let panel = ListPanel::new();
        let mut ac = colors(&field, &panel);

        ac.refresh();
        assert_eq!(ac.select(5), None);
        assert!(ac.is_open());
        assert_eq!(field.value(), "gre");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let field = TextField::new();
        let panel = ListPanel::new();
        let mut ac = colors(&field, &panel);

        ac.refresh();
        ac.cursor_up();
        for _ in 0..10 {
            ac.cursor_down();
        }
        assert_eq!(ac.select_at_cursor().as_deref(), Some("Blue"));
    }

    #[test]
    fn test_close_keeps_typed_value() {
        let field = TextField::with_value("Purple");
        let panel = ListPanel::new();
        let mut ac = colors(&field, &panel);

        ac.refresh();
        assert!(ac.close());
        assert!(!ac.close());
        assert_eq!(field.value(), "Purple");
        assert!(!ac.is_option("Purple"));
        assert!(ac.is_option("Brown"));
    }
}
