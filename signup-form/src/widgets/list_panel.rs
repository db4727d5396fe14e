//! In-memory list panel for error messages and suggestions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::validation::DisplayPanel;

/// An ordered list of text items with shared state.
#[derive(Debug, Clone, Default)]
pub struct ListPanel {
    items: Arc<RwLock<Vec<String>>>,
    dirty: Arc<AtomicBool>,
}

impl ListPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items currently shown.
    pub fn items(&self) -> Vec<String> {
        self.items
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.items
            .read()
            .map(|guard| guard.is_empty())
            .unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl DisplayPanel for ListPanel {
    fn clear(&self) {
        if let Ok(mut guard) = self.items.write()
            && !guard.is_empty()
        {
            guard.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn append(&self, item: &str) {
        if let Ok(mut guard) = self.items.write() {
            guard.push(item.to_string());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn items(&self) -> Vec<String> {
        ListPanel::items(self)
    }
}
