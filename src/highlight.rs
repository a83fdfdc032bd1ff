// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting: which span of a result string the query hit.
//!
//! [`highlight_match`] returns a structured view over the original text
//! rather than pre-built markup, so the rendering layer chooses its own
//! emphasis and its own escaping. [`Highlighted::to_html`] wraps the span in
//! `<mark>` and HTML-escapes all three segments; the CLI renders the same
//! span with ANSI emphasis instead.
//!
//! Span selection mirrors the scorer: a case-insensitive substring hit wins
//! outright; otherwise the longest run of consecutive in-order character
//! matches across all start positions is chosen, first run on ties.

use std::ops::Range;

/// A piece of text with an optional highlighted byte span.
///
/// The span is always on character boundaries of the original text, so the
/// accessors can slice safely. When `span` is `None` the text passes through
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlighted<'a> {
    text: &'a str,
    span: Option<Range<usize>>,
}

impl<'a> Highlighted<'a> {
    /// The original text, byte-for-byte.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte range of the highlighted span, if any.
    pub fn span(&self) -> Option<Range<usize>> {
        self.span.clone()
    }

    /// Text before the span (the whole text when there is no span).
    pub fn prefix(&self) -> &'a str {
        match &self.span {
            Some(range) => &self.text[..range.start],
            None => self.text,
        }
    }

    /// The matched span itself, case preserved from the original text.
    pub fn matched(&self) -> &'a str {
        match &self.span {
            Some(range) => &self.text[range.clone()],
            None => "",
        }
    }

    /// Text after the span.
    pub fn suffix(&self) -> &'a str {
        match &self.span {
            Some(range) => &self.text[range.end..],
            None => "",
        }
    }

    /// Render as HTML with the span wrapped in `<mark>`.
    ///
    /// All three segments are escaped; catalog content and queries are
    /// arbitrary strings and must not reach the DOM unescaped.
    pub fn to_html(&self) -> String {
        match &self.span {
            Some(_) => format!(
                "{}<mark>{}</mark>{}",
                escape_html(self.prefix()),
                escape_html(self.matched()),
                escape_html(self.suffix())
            ),
            None => escape_html(self.text),
        }
    }
}

/// Find the best-matching span of `query` in `text`.
///
/// A trimmed-empty query produces no span. Comparison is case-insensitive
/// per character; the returned span indexes the original text.
///
/// # Example
///
/// ```
/// use ferret::highlight_match;
///
/// let h = highlight_match("Reports Dashboard", "report");
/// assert_eq!(h.matched(), "Report");
/// assert_eq!(h.to_html(), "<mark>Report</mark>s Dashboard");
/// ```
pub fn highlight_match<'a>(text: &'a str, query: &str) -> Highlighted<'a> {
    let query: Vec<char> = query.trim().chars().map(fold_char).collect();
    if query.is_empty() {
        return Highlighted { text, span: None };
    }

    // Byte offset and case-folded value for every character of the text.
    let chars: Vec<(usize, char)> = text.char_indices().map(|(i, c)| (i, fold_char(c))).collect();

    let span = find_substring(text, &chars, &query)
        .or_else(|| find_longest_run(text, &chars, &query));
    Highlighted { text, span }
}

/// First case-insensitive occurrence of the whole query.
fn find_substring(text: &str, chars: &[(usize, char)], query: &[char]) -> Option<Range<usize>> {
    if query.len() > chars.len() {
        return None;
    }
    for start in 0..=chars.len() - query.len() {
        if (0..query.len()).all(|k| chars[start + k].1 == query[k]) {
            return Some(byte_range(text, chars, start, query.len()));
        }
    }
    None
}

/// Longest run of consecutive characters matching the query in order.
///
/// From each start position, characters are consumed greedily while they
/// match the next pending query character; the run ends at the first
/// non-match after it has begun. The maximum-length run wins, first one on
/// ties.
fn find_longest_run(text: &str, chars: &[(usize, char)], query: &[char]) -> Option<Range<usize>> {
    if query.len() > chars.len() {
        return None;
    }

    let mut best_start = 0;
    let mut best_len = 0;
    for start in 0..=chars.len() - query.len() {
        let mut run_start = start;
        let mut run_len = 0;
        let mut query_index = 0;
        for (position, &(_, c)) in chars.iter().enumerate().skip(start) {
            if query_index >= query.len() {
                break;
            }
            if c == query[query_index] {
                if run_len == 0 {
                    run_start = position;
                }
                run_len += 1;
                query_index += 1;
            } else if run_len > 0 {
                break;
            }
        }
        if run_len > best_len {
            best_len = run_len;
            best_start = run_start;
        }
    }

    if best_len == 0 {
        return None;
    }
    Some(byte_range(text, chars, best_start, best_len))
}

/// Byte range covering `len` characters starting at character index `start`.
fn byte_range(text: &str, chars: &[(usize, char)], start: usize, len: usize) -> Range<usize> {
    let begin = chars[start].0;
    let end = chars
        .get(start + len)
        .map_or(text.len(), |&(offset, _)| offset);
    begin..end
}

/// Case-fold a single character for comparison.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Minimal HTML escaping for text content.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
