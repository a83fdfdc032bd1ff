//! Relevance threshold and degenerate-input behavior.

use crate::common::{assert_above_threshold, make_page, test_catalog};
use ferret::{search_pages, Catalog};

#[test]
fn empty_query_returns_no_results() {
    let catalog = test_catalog();
    for limit in [0, 1, 8, 100] {
        assert!(search_pages(&catalog, "", limit).is_empty());
        assert!(search_pages(&catalog, " \t ", limit).is_empty());
    }
}

#[test]
fn zero_limit_requests_nothing() {
    let catalog = test_catalog();
    assert!(search_pages(&catalog, "orders", 0).is_empty());
}

#[test]
fn empty_catalog_never_fails() {
    let catalog = Catalog::default();
    assert!(search_pages(&catalog, "anything", 8).is_empty());
}

#[test]
fn every_result_clears_the_threshold() {
    let catalog = test_catalog();
    for query in ["orders", "sync", "sql", "dash", "points", "q"] {
        let results = search_pages(&catalog, query, 10);
        assert_above_threshold(&results);
    }
}

#[test]
fn low_overlap_queries_are_filtered_out() {
    let catalog = test_catalog();
    assert!(search_pages(&catalog, "xyz123", 10).is_empty());
    assert!(search_pages(&catalog, "zzzzzz", 10).is_empty());
}

#[test]
fn near_threshold_fallback_score_is_kept() {
    // "orders" against the name "Order Sync": six in-order character
    // matches (12) minus a length penalty of 2 lands exactly on the
    // threshold of 10.
    let catalog = Catalog {
        pages: vec![make_page("Order Sync", "x", "/a", "Analytics", &[])],
    };
    let results = search_pages(&catalog, "orders", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 10.0);
}

#[test]
fn just_below_threshold_is_dropped() {
    // Same six in-order matches, but the longer tail raises the length
    // penalty to 3.5: 12 - 3.5 = 8.5, below the threshold of 10.
    let catalog = Catalog {
        pages: vec![make_page("Order Syncing", "x", "/a", "Analytics", &[])],
    };
    assert!(search_pages(&catalog, "orders", 10).is_empty());
}
