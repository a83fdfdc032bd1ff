// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy match scorer.
//!
//! Three branches, checked in order:
//!
//! 1. Exact match (case-insensitive) → 100, nothing else applies.
//! 2. Substring containment → 80, nothing else applies.
//! 3. Fallback: greedy in-order character overlap, plus a word-boundary
//!    bonus and a length penalty, floored at zero.
//!
//! # Constants
//!
//! | Constant               | Value | Applies to       |
//! |------------------------|-------|------------------|
//! | `EXACT_MATCH_SCORE`    | 100.0 | branch 1         |
//! | `SUBSTRING_MATCH_SCORE`| 80.0  | branch 2         |
//! | `CHAR_MATCH_SCORE`     | 2.0   | branch 3, per char |
//! | `WORD_PREFIX_BONUS`    | 20.0  | branch 3         |
//! | `WORD_CONTAINS_BONUS`  | 10.0  | branch 3         |
//! | `LENGTH_PENALTY`       | 0.5   | branch 3, per char of length difference |
//!
//! These are empirical tuning values carried over from the reference
//! deployment. Changing any of them changes ranking behavior for every
//! caller; the ranker's `MIN_RESULT_SCORE` threshold is calibrated against
//! them.

/// Score for an exact (normalized) match. The maximum possible score.
pub const EXACT_MATCH_SCORE: f64 = 100.0;

/// Score when the target contains the query as a substring.
pub const SUBSTRING_MATCH_SCORE: f64 = 80.0;

/// Fallback branch: score contributed by each in-order matched character.
pub const CHAR_MATCH_SCORE: f64 = 2.0;

/// Fallback branch: bonus when a word of the target starts with the query.
pub const WORD_PREFIX_BONUS: f64 = 20.0;

/// Fallback branch: bonus when a word of the target contains the query.
pub const WORD_CONTAINS_BONUS: f64 = 10.0;

/// Fallback branch: penalty per character of length difference.
pub const LENGTH_PENALTY: f64 = 0.5;

/// Weight applied to name-field candidate scores.
pub const NAME_WEIGHT: f64 = 1.0;

/// Weight applied to description-field candidate scores.
pub const DESCRIPTION_WEIGHT: f64 = 0.8;

/// Weight applied to keyword candidate scores.
pub const KEYWORD_WEIGHT: f64 = 0.9;

/// Minimum weighted score for an entry to appear in results at all.
pub const MIN_RESULT_SCORE: f64 = 10.0;

/// Compute the fuzzy similarity score between a query and a target string.
///
/// The query is trimmed and both sides are lowercased before comparison.
/// Comparison is per Unicode scalar value.
///
/// Exact matches return [`EXACT_MATCH_SCORE`] and substring matches return
/// [`SUBSTRING_MATCH_SCORE`] immediately; the word-boundary bonus and length
/// penalty only ever apply to the fallback branch. The result is never
/// negative.
///
/// # Example
///
/// ```
/// use ferret::fuzzy_score;
///
/// assert_eq!(fuzzy_score("Missing Orders", "missing orders"), 100.0);
/// assert_eq!(fuzzy_score("missing", "Missing Orders"), 80.0);
/// assert_eq!(fuzzy_score("xyz123", ""), 0.0);
/// ```
pub fn fuzzy_score(query: &str, target: &str) -> f64 {
    let query = query.trim().to_lowercase();
    let target = target.to_lowercase();

    if query == target {
        return EXACT_MATCH_SCORE;
    }
    if target.contains(&query) {
        return SUBSTRING_MATCH_SCORE;
    }

    // Greedy in-order character overlap: scan the target left to right,
    // consuming query characters as they appear.
    let query_chars: Vec<char> = query.chars().collect();
    let mut score = 0.0;
    let mut query_index = 0;
    for c in target.chars() {
        if query_index < query_chars.len() && c == query_chars[query_index] {
            score += CHAR_MATCH_SCORE;
            query_index += 1;
        }
    }

    // Word-boundary bonus: only the first qualifying word counts, and
    // starts-with is checked before contains for each word.
    for word in target.split_whitespace() {
        if word.starts_with(query.as_str()) {
            score += WORD_PREFIX_BONUS;
            break;
        }
        if word.contains(query.as_str()) {
            score += WORD_CONTAINS_BONUS;
            break;
        }
    }

    let length_diff = target.chars().count().abs_diff(query_chars.len());
    score -= LENGTH_PENALTY * length_diff as f64;

    score.max(0.0)
}
