// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: catalog entries and search results.

use serde::{Deserialize, Serialize};

/// A navigable page in the catalog.
///
/// The catalog is loaded once at startup and never mutated afterwards;
/// everything downstream borrows or clones these entries.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// Short display label, e.g. "Missing Orders".
    pub name: String,
    /// Longer descriptive string shown under the name.
    pub description: String,
    /// Navigation target. Opaque to the search core.
    pub href: String,
    /// Classification string, e.g. "Reports".
    pub category: String,
    /// Extra searchable terms. Insertion order is irrelevant to scoring.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The full set of searchable pages.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub pages: Vec<PageEntry>,
}

/// Which field of the entry produced the winning score.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Name,
    Description,
    Keyword,
}

/// A ranked hit. Built fresh for every query, never persisted.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The matched catalog entry, flattened into the result on the wire.
    #[serde(flatten)]
    pub entry: PageEntry,
    /// Weighted best score across name, description, and keywords.
    pub score: f64,
    /// Field that produced `score`.
    pub match_type: MatchType,
    /// The specific string that matched: the name, the description, or one keyword.
    pub matched_term: String,
}
