// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for search results and catalog inspection.
//!
//! Colored output respects `NO_COLOR` and non-TTY pipelines. Matched spans
//! are emphasized with bold+underline rather than markup; the `--json` path
//! bypasses this module entirely.

use ferret::{highlight_match, Catalog, MatchType, SearchResult};
use std::collections::BTreeMap;
use std::sync::OnceLock;

// Box drawing - width between │ and │ (excluding border chars)
const BOX_WIDTH: usize = 60;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

/// Cached color-capability detection.
static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Whether to emit ANSI escapes: stdout is a TTY and `NO_COLOR` is unset.
pub fn use_color() -> bool {
    *USE_COLOR
        .get_or_init(|| atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none())
}

fn paint(text: &str, style: &str) -> String {
    if use_color() {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}

/// Color for a category badge.
fn category_color(category: &str) -> &'static str {
    match category {
        "Overview" => BLUE,
        "Customers" => GREEN,
        "User Management" => MAGENTA,
        "Payments" => YELLOW,
        "Analytics" => CYAN,
        "Reports" => RED,
        "Authentication" => YELLOW,
        _ => GRAY,
    }
}

/// Short tag for the field that matched.
fn match_type_tag(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Name => "name",
        MatchType::Description => "desc",
        MatchType::Keyword => "key ",
    }
}

/// Render a string with its query-matched span emphasized.
fn emphasized(text: &str, query: &str) -> String {
    let marked = highlight_match(text, query);
    if marked.span().is_none() || !use_color() {
        return text.to_string();
    }
    format!(
        "{}{}{}{}{}{}",
        marked.prefix(),
        BOLD,
        UNDERLINE,
        marked.matched(),
        RESET,
        marked.suffix()
    )
}

/// Print ranked search results.
pub fn render_results(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("No results found for \"{}\"", query);
        println!("{}", paint("Try different keywords or check spelling", DIM));
        return;
    }

    for result in results {
        let badge = paint(&result.entry.category, category_color(&result.entry.category));
        let tag = paint(match_type_tag(result.match_type), DIM);
        let name = match result.match_type {
            MatchType::Name => emphasized(&result.entry.name, query),
            _ => result.entry.name.clone(),
        };
        println!("  {} {}  [{}]  {}", tag, name, badge, paint(&format!("{:.1}", result.score), DIM));

        let description = match result.match_type {
            MatchType::Description => emphasized(&result.entry.description, query),
            _ => result.entry.description.clone(),
        };
        println!("       {}", paint(&description, DIM));

        if result.match_type == MatchType::Keyword {
            println!(
                "       {} {}",
                paint("matched keyword:", DIM),
                emphasized(&result.matched_term, query)
            );
        }
        println!("       {}", paint(&result.entry.href, CYAN));
    }

    println!();
    println!(
        "{}",
        paint(
            &format!(
                "{} result{} found",
                results.len(),
                if results.len() == 1 { "" } else { "s" }
            ),
            DIM
        )
    );
}

/// Print a catalog summary with per-category bars.
pub fn render_inspect(catalog: &Catalog) {
    let total_keywords: usize = catalog.pages.iter().map(|p| p.keywords.len()).sum();

    let mut categories: BTreeMap<&str, usize> = BTreeMap::new();
    for page in &catalog.pages {
        *categories.entry(page.category.as_str()).or_insert(0) += 1;
    }

    println!();
    println!("╔{}╗", "═".repeat(BOX_WIDTH));
    println!("║{:^w$}║", "CATALOG INSPECTOR", w = BOX_WIDTH);
    println!("╠{}╣", "═".repeat(BOX_WIDTH));
    println!("║  Pages:      {:<44}  ║", catalog.len());
    println!("║  Categories: {:<44}  ║", categories.len());
    println!("║  Keywords:   {:<44}  ║", total_keywords);
    println!("╚{}╝", "═".repeat(BOX_WIDTH));
    println!();

    let max_count = categories.values().copied().max().unwrap_or(1);
    let bar_width = 24;

    println!("┌─ CATEGORIES {}┐", "─".repeat(BOX_WIDTH - 13));
    for (category, count) in &categories {
        let bar_len = ((count * bar_width) / max_count.max(1)).max(1);
        let bar: String = "█".repeat(bar_len);
        let empty: String = "░".repeat(bar_width - bar_len);
        println!(
            "│  {:<18} │{}{}│ {:>3} pages   │",
            truncate(category, 18),
            bar,
            empty,
            count
        );
    }
    println!("└{}┘", "─".repeat(BOX_WIDTH));
    println!();
}

/// Truncate a label to fit in the given width.
fn truncate(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
