//! End-to-end scenarios against the bundled catalog.

use crate::common::assert_sorted_descending;
use ferret::{search_pages, Catalog, MatchType};

#[test]
fn missing_orders_by_name_fragment() {
    let results = search_pages(Catalog::bundled(), "missing", 8);
    assert!(!results.is_empty());
    assert_eq!(results[0].entry.name, "Missing Orders");
    assert_eq!(results[0].match_type, MatchType::Name);
    assert_eq!(results[0].score, 80.0);
}

#[test]
fn sql_pages_by_keyword() {
    let results = search_pages(Catalog::bundled(), "sql", 8);
    let names: Vec<&str> = results.iter().map(|r| r.entry.name.as_str()).collect();
    assert!(names.contains(&"SQL Query"));
    assert!(names.contains(&"Slow Queries"));
    assert_sorted_descending(&results);
}

#[test]
fn loyalty_page_by_reward_keyword() {
    let results = search_pages(Catalog::bundled(), "rewards", 8);
    assert!(!results.is_empty());
    assert_eq!(results[0].entry.href, "/customers/loyalty");
    assert_eq!(results[0].match_type, MatchType::Keyword);
    assert_eq!(results[0].matched_term, "rewards");
}

#[test]
fn otp_finds_login() {
    let results = search_pages(Catalog::bundled(), "otp", 8);
    assert!(!results.is_empty());
    assert_eq!(results[0].entry.href, "/login");
}

#[test]
fn dropdown_limit_is_respected() {
    // "re" brushes against many entries; the dropdown cap still holds.
    let results = search_pages(Catalog::bundled(), "re", 8);
    assert!(results.len() <= 8);
    assert_sorted_descending(&results);
}

#[test]
fn every_bundled_page_is_findable_by_exact_name() {
    let catalog = Catalog::bundled();
    for page in &catalog.pages {
        let results = search_pages(catalog, &page.name, catalog.len());
        assert!(
            results.iter().any(|r| r.entry.href == page.href),
            "page {} not found by its own name",
            page.href
        );
        // An exact name match scores 100 and cannot be out-ranked.
        assert_eq!(results[0].score, 100.0);
    }
}
