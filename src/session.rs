// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interactive search session: debounce, cursor, and keyboard handling.
//!
//! The session is a synchronous state machine polled by its caller. Scoring
//! the whole catalog is effectively instantaneous at these sizes, so there is
//! nothing to cancel: a rapid sequence of query edits simply re-arms the
//! debounce deadline and only the settled query is ever scored.
//!
//! Time is passed in by the caller (`set_query`/`poll` take an [`Instant`]),
//! which keeps the debounce contract testable without sleeping; the `*_now`
//! wrappers cover the common case.

use crate::search::search_pages;
use crate::types::{Catalog, SearchResult};
use crate::util::normalize;
use std::time::{Duration, Instant};

/// Delay between the last query edit and the search actually running.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(150);

/// Result-list cap used by the navigation dropdown.
pub const DROPDOWN_LIMIT: usize = 8;

/// Keys the session responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
}

/// What a key press resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Enter on a selected result: navigate to this href.
    Activated(String),
    /// The session was dismissed without activating anything.
    Closed,
}

/// A live search-as-you-type session over one catalog.
pub struct SearchSession<'a> {
    catalog: &'a Catalog,
    debounce: Duration,
    max_results: usize,
    query: String,
    deadline: Option<Instant>,
    results: Vec<SearchResult>,
    selected: Option<usize>,
    open: bool,
}

impl<'a> SearchSession<'a> {
    /// Create a session with the default debounce and result cap.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            debounce: DEBOUNCE_INTERVAL,
            max_results: DROPDOWN_LIMIT,
            query: String::new(),
            deadline: None,
            results: Vec::new(),
            selected: None,
            open: true,
        }
    }

    /// Override the debounce interval.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Override the result cap.
    pub fn with_limit(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Record a query edit at time `now`.
    ///
    /// An empty (trimmed) query clears results and cursor immediately, with
    /// no debounce. Anything else arms the debounce deadline; a later edit
    /// supersedes an earlier pending one.
    pub fn set_query(&mut self, query: &str, now: Instant) {
        self.query = query.to_string();
        if query.trim().is_empty() {
            self.results.clear();
            self.selected = None;
            self.deadline = None;
        } else {
            self.deadline = Some(now + self.debounce);
        }
    }

    /// Record a query edit at the current time.
    pub fn set_query_now(&mut self, query: &str) {
        self.set_query(query, Instant::now());
    }

    /// Run the pending search if its deadline has passed.
    ///
    /// Returns whether the result list was refreshed. The cursor resets to
    /// the first result whenever a search produces a non-empty list, and
    /// clears otherwise.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let query = normalize(&self.query);
                self.results = search_pages(self.catalog, &query, self.max_results);
                self.selected = if self.results.is_empty() { None } else { Some(0) };
                true
            }
            _ => false,
        }
    }

    /// Run the pending search if its deadline has passed, against the clock.
    pub fn poll_now(&mut self) -> bool {
        self.poll(Instant::now())
    }

    /// Handle a key press. Returns the event it resolved to, if any.
    ///
    /// Up/Down clamp the cursor to the result list without wrapping. Enter
    /// activates the selected result and closes the session; with no
    /// selection it does nothing. Escape closes without activating.
    pub fn handle_key(&mut self, key: Key) -> Option<SessionEvent> {
        match key {
            Key::Down => {
                if let Some(selected) = self.selected {
                    if selected + 1 < self.results.len() {
                        self.selected = Some(selected + 1);
                    }
                }
                None
            }
            Key::Up => {
                if let Some(selected) = self.selected {
                    self.selected = Some(selected.saturating_sub(1));
                }
                None
            }
            Key::Enter => {
                let href = self
                    .selected
                    .and_then(|i| self.results.get(i))
                    .map(|r| r.entry.href.clone())?;
                self.open = false;
                Some(SessionEvent::Activated(href))
            }
            Key::Escape => {
                self.open = false;
                Some(SessionEvent::Closed)
            }
        }
    }

    /// The current result list.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// The cursor position, when there is one.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The result under the cursor.
    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected.and_then(|i| self.results.get(i))
    }

    /// The query as last set.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether a search is pending on the debounce timer.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the session is still open.
    pub fn is_open(&self) -> bool {
        self.open
    }
}
