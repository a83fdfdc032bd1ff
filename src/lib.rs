//! Fuzzy page search for admin-panel navigation.
//!
//! This crate scores a free-text query against a small static catalog of
//! pages and returns a ranked, capped list of matches with match-type
//! classification and highlightable matched spans. It is a cheap O(n)
//! heuristic over tens of entries, fast enough to run on every keystroke.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog.rs │────▶│  scoring/    │────▶│  search.rs   │
//! │  (Catalog,  │     │ (fuzzy_score,│     │(search_pages)│
//! │  PageEntry) │     │   weights)   │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  session.rs  │    │ highlight.rs │    │  coalesce.rs │
//! │ (debounce +  │    │ (match spans,│    │  (in-flight  │
//! │  keyboard)   │    │  escaping)   │    │  dedup map)  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ferret::{highlight_match, search_pages, Catalog};
//!
//! let catalog = Catalog::bundled();
//! let results = search_pages(catalog, "missing", 8);
//!
//! for result in &results {
//!     let marked = highlight_match(&result.entry.name, "missing");
//!     println!("{} ({:.1})", marked.text(), result.score);
//! }
//! ```

// Module declarations
mod catalog;
mod coalesce;
mod highlight;
mod scoring;
mod search;
mod session;
pub mod testing;
mod types;
mod util;

// Re-exports for public API
pub use coalesce::Inflight;
pub use highlight::{highlight_match, Highlighted};
pub use scoring::{
    fuzzy_score, CHAR_MATCH_SCORE, DESCRIPTION_WEIGHT, EXACT_MATCH_SCORE, KEYWORD_WEIGHT,
    LENGTH_PENALTY, MIN_RESULT_SCORE, NAME_WEIGHT, SUBSTRING_MATCH_SCORE, WORD_CONTAINS_BONUS,
    WORD_PREFIX_BONUS,
};
pub use search::search_pages;
pub use session::{Key, SearchSession, SessionEvent, DEBOUNCE_INTERVAL, DROPDOWN_LIMIT};
pub use types::{Catalog, MatchType, PageEntry, SearchResult};
pub use util::normalize;
