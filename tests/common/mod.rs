//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ferret::SearchResult;

// Re-export canonical test utilities from ferret::testing
pub use ferret::testing::{make_page, test_catalog};

/// Assert a result list is sorted by score descending.
pub fn assert_sorted_descending(results: &[SearchResult]) {
    for (i, pair) in results.windows(2).enumerate() {
        assert!(
            pair[0].score >= pair[1].score,
            "results not sorted at {}: {} < {}",
            i,
            pair[0].score,
            pair[1].score
        );
    }
}

/// Assert every result clears the relevance threshold.
pub fn assert_above_threshold(results: &[SearchResult]) {
    for result in results {
        assert!(
            result.score >= ferret::MIN_RESULT_SCORE,
            "result {} below threshold: {}",
            result.entry.href,
            result.score
        );
    }
}
