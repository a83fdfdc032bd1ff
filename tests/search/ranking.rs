//! Ranking order: field weights, tie-breaking, and sort stability.

use crate::common::{assert_sorted_descending, make_page, test_catalog};
use ferret::{search_pages, Catalog, MatchType, DESCRIPTION_WEIGHT, KEYWORD_WEIGHT};

#[test]
fn exact_name_beats_exact_keyword_beats_exact_description() {
    let catalog = Catalog {
        pages: vec![
            make_page("Ledger", "Totals by day", "/by-desc", "Reports", &[]),
            make_page("Totals", "Revenue ledger", "/by-name", "Reports", &[]),
            make_page("Revenue", "Daily summary", "/by-keyword", "Reports", &["totals"]),
        ],
    };
    let results = search_pages(&catalog, "totals", 10);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].entry.href, "/by-name");
    assert_eq!(results[1].entry.href, "/by-keyword");
    assert_eq!(results[2].entry.href, "/by-desc");
    assert_sorted_descending(&results);
}

#[test]
fn weights_are_applied_to_candidate_scores() {
    let catalog = Catalog {
        pages: vec![make_page("Alpha", "sync", "/a", "Analytics", &["sync"])],
    };
    // Description and keyword both match "sync" exactly (raw 100); the
    // keyword weight is higher, so the keyword candidate wins.
    let results = search_pages(&catalog, "sync", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::Keyword);
    assert_eq!(results[0].score, 100.0 * KEYWORD_WEIGHT);
}

#[test]
fn description_candidate_carries_description_weight() {
    let catalog = Catalog {
        pages: vec![make_page("Alpha", "device mapping", "/a", "Payments", &[])],
    };
    let results = search_pages(&catalog, "device", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::Description);
    assert_eq!(results[0].score, 80.0 * DESCRIPTION_WEIGHT);
    assert_eq!(results[0].matched_term, "device mapping");
}

#[test]
fn name_wins_exact_tie_with_description() {
    // Name substring (80 × 1.0) and exact description match (100 × 0.8)
    // weigh in at exactly 80 each; strict greater-than comparison keeps the
    // first-assigned name candidate.
    let catalog = Catalog {
        pages: vec![make_page("Missing Orders", "missing", "/a", "Reports", &[])],
    };
    let results = search_pages(&catalog, "missing", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::Name);
    assert_eq!(results[0].matched_term, "Missing Orders");
    assert_eq!(results[0].score, 80.0);
}

#[test]
fn equal_scores_preserve_catalog_order() {
    let catalog = Catalog {
        pages: vec![
            make_page("Report One", "first", "/1", "Reports", &[]),
            make_page("Report Two", "second", "/2", "Reports", &[]),
            make_page("Report Three", "third", "/3", "Reports", &[]),
        ],
    };
    let results = search_pages(&catalog, "report", 10);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].entry.href, "/1");
    assert_eq!(results[1].entry.href, "/2");
    assert_eq!(results[2].entry.href, "/3");
}

#[test]
fn limit_truncates_after_sorting() {
    let catalog = test_catalog();
    let all = search_pages(&catalog, "orders", 10);
    let capped = search_pages(&catalog, "orders", 1);
    assert!(all.len() >= 2);
    assert_eq!(capped.len(), 1);
    // The capped list keeps the best result, not the first catalog entry.
    assert_eq!(capped[0].entry.href, all[0].entry.href);
}

#[test]
fn matched_term_is_the_specific_keyword() {
    let catalog = test_catalog();
    let results = search_pages(&catalog, "gap", 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_term, "gap");
    assert_eq!(results[0].entry.name, "Missing Orders");
}
