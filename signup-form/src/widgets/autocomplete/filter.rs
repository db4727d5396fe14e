//! Default fuzzy filtering using nucleo-matcher.

use log::trace;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Ranks candidate labels against a query.
pub trait FuzzyMatcher: Send + Sync {
    /// Best matches first, at most `limit`, none scoring below `min_score`.
    fn rank(
        &self,
        query: &str,
        candidates: &[String],
        limit: usize,
        min_score: u32,
    ) -> Vec<FilterMatch>;
}

/// [`FuzzyMatcher`] backed by [`fuzzy_filter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NucleoMatcher;

impl FuzzyMatcher for NucleoMatcher {
    fn rank(
        &self,
        query: &str,
        candidates: &[String],
        limit: usize,
        min_score: u32,
    ) -> Vec<FilterMatch> {
        let ranked: Vec<FilterMatch> = fuzzy_filter(query, candidates)
            .into_iter()
            .filter(|m| query.is_empty() || m.score >= min_score)
            .take(limit)
            .collect();
        trace!(
            "[fuzzy] '{}' -> {} of {} candidates",
            query,
            ranked.len(),
            candidates.len()
        );
        ranked
    }
}

/// Default fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first); ties keep list order.
/// Empty query returns all items with score 0.
///
/// # Example
///
/// ```ignore
/// let labels = vec!["France".to_string(), "Finland".to_string(), "Chad".to_string()];
/// let matches = fuzzy_filter("fr", &labels);
/// // Returns: France
/// ```
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    // Empty query returns all items
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
