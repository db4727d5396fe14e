//! Autocomplete - text input with fuzzy-ranked suggestions.

mod filter;
mod state;

pub use filter::{FilterMatch, FuzzyMatcher, NucleoMatcher, fuzzy_filter};
pub use state::{Autocomplete, AutocompleteSession, AutocompleteState, Suggestion};
