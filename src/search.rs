// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The page ranker: catalog in, ranked results out.
//!
//! Every entry gets three weighted candidate scores (name ×1.0, description
//! ×0.8, best keyword ×0.9) and the best one wins. Ties resolve in field
//! order: name beats description beats keyword, because the comparison is a
//! strict greater-than against the running best.
//!
//! Entries below [`MIN_RESULT_SCORE`] never appear in output regardless of
//! the requested limit.

use crate::scoring::{
    fuzzy_score, DESCRIPTION_WEIGHT, KEYWORD_WEIGHT, MIN_RESULT_SCORE, NAME_WEIGHT,
};
use crate::types::{Catalog, MatchType, PageEntry, SearchResult};
use std::cmp::Ordering;

/// Search the catalog and return at most `max_results` ranked results.
///
/// A trimmed-empty query returns no results without scoring anything, as
/// does `max_results == 0`. Results are sorted by score descending; the sort
/// is stable, so equal-score entries keep their catalog order.
///
/// # Example
///
/// ```
/// use ferret::{search_pages, Catalog};
///
/// let catalog = Catalog::bundled();
/// let results = search_pages(catalog, "missing", 8);
/// assert!(results.iter().all(|r| r.score >= 10.0));
/// ```
pub fn search_pages(catalog: &Catalog, query: &str, max_results: usize) -> Vec<SearchResult> {
    if query.trim().is_empty() || max_results == 0 {
        return Vec::new();
    }

    let mut results: Vec<SearchResult> = catalog
        .pages
        .iter()
        .filter_map(|entry| score_entry(entry, query))
        .collect();

    // Stable sort: catalog order is the tiebreaker for equal scores.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(max_results);
    results
}

/// Score a single entry against the query, returning a result when the best
/// weighted candidate clears the relevance threshold.
fn score_entry(entry: &PageEntry, query: &str) -> Option<SearchResult> {
    let mut best_score = 0.0;
    let mut match_type = MatchType::Name;
    let mut matched_term = String::new();

    let name_score = fuzzy_score(query, &entry.name) * NAME_WEIGHT;
    if name_score > best_score {
        best_score = name_score;
        match_type = MatchType::Name;
        matched_term.clone_from(&entry.name);
    }

    let description_score = fuzzy_score(query, &entry.description) * DESCRIPTION_WEIGHT;
    if description_score > best_score {
        best_score = description_score;
        match_type = MatchType::Description;
        matched_term.clone_from(&entry.description);
    }

    for keyword in &entry.keywords {
        let keyword_score = fuzzy_score(query, keyword) * KEYWORD_WEIGHT;
        if keyword_score > best_score {
            best_score = keyword_score;
            match_type = MatchType::Keyword;
            matched_term.clone_from(keyword);
        }
    }

    if best_score >= MIN_RESULT_SCORE {
        Some(SearchResult {
            entry: entry.clone(),
            score: best_score,
            match_type,
            matched_term,
        })
    } else {
        None
    }
}
