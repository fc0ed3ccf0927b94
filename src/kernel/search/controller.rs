//! Find panel orchestration: debounced scans, navigation, replacement.
//!
//! Mutating methods return whether anything changed, like the editor
//! reducers. With no host mounted every method is a no-op.

use std::time::{Duration, Instant};

use super::navigator;
use super::state::{SearchState, SearchSummary};
use crate::kernel::services::adapters::search::{
    apply_selection, find_matches, replace_all, replace_one, walk,
};
use crate::kernel::services::ports::{
    DocumentHost, SearchError, SearchOptions, SearchResult, SearchSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Closed,
    /// Panel shown, no term yet.
    Open,
    /// A scan is scheduled and waiting for the debounce window.
    Searching,
    IdleWithMatches,
    IdleNoMatches,
}

/// One pending delayed scan; scheduling again replaces the deadline.
#[derive(Debug, Clone, Copy)]
struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let overshoot = now.duration_since(deadline);
        if overshoot.as_millis() > 50 {
            tracing::debug!(
                overshoot_ms = u64::try_from(overshoot.as_millis()).unwrap_or(u64::MAX),
                "search debounce overshoot"
            );
        }
        self.deadline = None;
        true
    }
}

pub struct SearchController<H> {
    host: Option<H>,
    settings: SearchSettings,
    options: SearchOptions,
    phase: SearchPhase,
    state: SearchState,
    debounce: Debounce,
}

impl<H: DocumentHost> SearchController<H> {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            host: None,
            options: settings.options(),
            debounce: Debounce::new(settings.debounce()),
            settings,
            phase: SearchPhase::Closed,
            state: SearchState::default(),
        }
    }

    pub fn with_host(host: H, settings: SearchSettings) -> Self {
        let mut controller = Self::new(settings);
        controller.host = Some(host);
        controller
    }

    /// Attaches a document. Matches recorded against a previous document are
    /// dropped and an open panel rescans right away.
    pub fn mount(&mut self, host: H) -> Option<H> {
        let previous = self.host.replace(host);
        if previous.is_some() {
            self.state.clear_matches();
        }
        if self.is_open() && !self.state.term.is_empty() {
            self.debounce.cancel();
            self.refresh(None);
        }
        previous
    }

    pub fn unmount(&mut self) -> Option<H> {
        let host = self.host.take()?;
        self.debounce.cancel();
        self.state.clear_matches();
        if self.is_open() {
            self.phase = self.idle_phase();
        }
        Some(host)
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn summary(&self) -> SearchSummary {
        self.state.summary()
    }

    pub fn has_matches(&self) -> bool {
        self.state.has_matches()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.state.last_error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.phase != SearchPhase::Closed
    }

    pub fn is_scan_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn open(&mut self) -> bool {
        if let Err(e) = self.require_host() {
            tracing::debug!(error = %e, "find panel open ignored");
            return false;
        }
        if self.is_open() {
            return false;
        }
        self.phase = SearchPhase::Open;
        true
    }

    pub fn close(&mut self) -> bool {
        if self.host.is_none() || !self.is_open() {
            return false;
        }
        self.debounce.cancel();
        self.state.reset();
        self.phase = SearchPhase::Closed;
        true
    }

    pub fn set_term(&mut self, term: &str, now: Instant) -> bool {
        if !self.accepts_input() || self.state.term == term {
            return false;
        }
        self.state.term = term.to_string();
        self.schedule_scan(now);
        true
    }

    pub fn set_replace_term(&mut self, replace_term: &str) -> bool {
        if !self.accepts_input() || self.state.replace_term == replace_term {
            return false;
        }
        self.state.replace_term = replace_term.to_string();
        true
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool, now: Instant) -> bool {
        let mut options = self.options;
        options.case_sensitive = case_sensitive;
        self.set_options(options, now)
    }

    pub fn set_use_regex(&mut self, use_regex: bool, now: Instant) -> bool {
        let mut options = self.options;
        options.use_regex = use_regex;
        self.set_options(options, now)
    }

    pub fn set_whole_word(&mut self, whole_word: bool, now: Instant) -> bool {
        let mut options = self.options;
        options.whole_word = whole_word;
        self.set_options(options, now)
    }

    fn set_options(&mut self, options: SearchOptions, now: Instant) -> bool {
        if !self.accepts_input() || self.options == options {
            return false;
        }
        self.options = options;
        if !self.state.term.is_empty() {
            self.schedule_scan(now);
        }
        true
    }

    /// Runs the scheduled scan once its debounce window has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.host.is_none() || !self.debounce.poll(now) {
            return false;
        }
        self.refresh(None);
        true
    }

    /// Runs a scheduled scan immediately.
    pub fn flush(&mut self) -> bool {
        if self.host.is_none() || !self.debounce.cancel() {
            return false;
        }
        self.refresh(None);
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(navigator::next(&self.state))
    }

    pub fn previous(&mut self) -> bool {
        self.step(navigator::previous(&self.state))
    }

    fn step(&mut self, index: Option<usize>) -> bool {
        if !self.accepts_input() || index.is_none() {
            return false;
        }
        self.state.current_index = index;
        self.sync_selection();
        true
    }

    /// Replaces the selected match and moves on to the first match after the
    /// inserted text, wrapping to the top. Returns whether the document changed.
    pub fn replace_current(&mut self) -> bool {
        if !self.accepts_edit() {
            return false;
        }
        let Some(index) = self.state.current_index else {
            return false;
        };
        let Some(m) = self.state.matches.get(index).cloned() else {
            return false;
        };
        let Some(host) = self.host.as_mut() else {
            return false;
        };

        let resume = match replace_one(host, &m, &self.state.replace_term) {
            Ok(()) => {
                tracing::info!(path = %m.path, offset = m.anchor_offset, "replaced match");
                m.anchor_offset + self.state.replace_term.len()
            }
            Err(e) => {
                tracing::debug!(path = %m.path, error = %e, "replace dropped");
                self.refresh(Some(index));
                return false;
            }
        };

        // The inserted text may itself match; never land on it again.
        self.scan(None);
        self.state.select_at_or_after(&m.path, resume);
        self.sync_selection();
        true
    }

    /// Replaces every match, then rescans. Returns `false` when the host
    /// rejected an edit; edits applied before the rejected one stay applied.
    pub fn replace_all(&mut self) -> bool {
        if !self.accepts_edit() {
            return false;
        }
        let matches = std::mem::take(&mut self.state.matches);
        self.state.current_index = None;
        let Some(host) = self.host.as_mut() else {
            return false;
        };

        let changed = match replace_all(host, &matches, &self.state.replace_term) {
            Ok(replaced) => {
                tracing::info!(replaced, "replaced all matches");
                replaced > 0
            }
            Err(e) => {
                tracing::debug!(error = %e, "replace all dropped");
                false
            }
        };

        self.refresh(None);
        changed
    }

    fn require_host(&self) -> SearchResult<&H> {
        self.host.as_ref().ok_or(SearchError::HostUnavailable)
    }

    fn accepts_input(&self) -> bool {
        if let Err(e) = self.require_host() {
            tracing::trace!(error = %e, "find panel input ignored");
            return false;
        }
        self.is_open()
    }

    fn accepts_edit(&self) -> bool {
        if !self.accepts_input() || !self.state.has_matches() {
            return false;
        }
        if self.debounce.is_pending() {
            tracing::debug!("replace rejected: scan pending");
            return false;
        }
        true
    }

    fn schedule_scan(&mut self, now: Instant) {
        if self.state.term.is_empty() {
            self.debounce.cancel();
            self.state.clear_matches();
            self.phase = SearchPhase::Open;
            return;
        }
        self.debounce.schedule(now);
        self.phase = SearchPhase::Searching;
    }

    fn idle_phase(&self) -> SearchPhase {
        if self.state.term.is_empty() {
            SearchPhase::Open
        } else if self.state.has_matches() {
            SearchPhase::IdleWithMatches
        } else {
            SearchPhase::IdleNoMatches
        }
    }

    /// Rescans the document and selects the current match.
    fn refresh(&mut self, preferred: Option<usize>) {
        self.scan(preferred);
        self.sync_selection();
    }

    fn scan(&mut self, preferred: Option<usize>) {
        let Some(host) = self.host.as_ref() else {
            return;
        };

        let leaves = walk(host.root());
        match find_matches(&leaves, &self.state.term, self.options) {
            Ok(matches) => {
                self.state.last_error = None;
                self.state.set_matches(matches, preferred);
            }
            Err(e) => {
                tracing::debug!(error = %e, "search term rejected");
                self.state.last_error = Some(e.to_string());
                self.state.set_matches(Vec::new(), None);
            }
        }
        self.phase = self.idle_phase();

        tracing::debug!(
            leaves = leaves.len(),
            matches = self.state.matches.len(),
            "scan complete"
        );
    }

    fn sync_selection(&mut self) {
        let Some(m) = self.state.current_match().cloned() else {
            return;
        };
        let Some(host) = self.host.as_mut() else {
            return;
        };

        if let Err(e) = apply_selection(host, &m, self.settings.scroll_into_view) {
            tracing::debug!(path = %m.path, error = %e, "selection dropped");
            if e.needs_rescan() {
                self.scan(self.state.current_index);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/search/controller.rs"]
mod tests;
