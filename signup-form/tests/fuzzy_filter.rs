use signup_form::country::{CountryDirectory, StaticDirectory};
use signup_form::widgets::autocomplete::{FuzzyMatcher, NucleoMatcher, fuzzy_filter};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_query_returns_all() {
    let items = labels(&["Chad", "Chile"]);
    let matches = fuzzy_filter("", &items);
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].index, 0);
    assert_eq!(matches[1].index, 1);
}

#[test]
fn test_fuzzy_matching() {
    let items = labels(&["Austria", "Belgium", "Australia"]);
    let matches = fuzzy_filter("aus", &items);
    assert_eq!(matches.len(), 2);
    let indices: Vec<usize> = matches.iter().map(|m| m.index).collect();
    assert!(indices.contains(&0)); // Austria
    assert!(indices.contains(&2)); // Australia
}

#[test]
fn test_no_matches() {
    let items = labels(&["Chad", "Chile"]);
    assert!(fuzzy_filter("xyz", &items).is_empty());
}

#[test]
fn test_case_insensitive() {
    let items = labels(&["Norway", "PERU"]);
    let matches = fuzzy_filter("peru", &items);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].index, 1);
}

#[test]
fn test_scores_are_descending() {
    let directory = StaticDirectory::default();
    let matches = NucleoMatcher.rank("land", &directory.names(), 6, 0);
    assert!(matches.len() <= 6);
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_exact_name_is_ranked_first() {
    let directory = StaticDirectory::default();
    let names = directory.names();
    let matches = NucleoMatcher.rank("Germany", &names, 6, 0);
    assert_eq!(names[matches[0].index], "Germany");
}
