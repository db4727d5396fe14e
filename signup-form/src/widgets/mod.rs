//! Field implementations and the autocomplete widget.

pub mod autocomplete;
mod form;
mod list_panel;
mod text_field;

pub use autocomplete::{Autocomplete, AutocompleteState, FuzzyMatcher, NucleoMatcher};
pub use form::MemoryForm;
pub use list_panel::ListPanel;
pub use text_field::TextField;
