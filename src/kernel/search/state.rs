use crate::kernel::services::ports::{Match, StructuralPath};
use std::fmt;

/// Everything the find panel knows about the current search.
///
/// Owned by the controller; rebuilt after every scan because recorded paths
/// and offsets go stale as soon as the document changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub replace_term: String,
    pub matches: Vec<Match>,
    pub current_index: Option<usize>,
    pub last_error: Option<String>,
}

/// Counter shown next to the search field, e.g. "3/17".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub match_count: usize,
    pub current_index: Option<usize>,
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = match self.current_index {
            Some(ix) if self.match_count > 0 => ix + 1,
            _ => 0,
        };
        write!(f, "{}/{}", current, self.match_count)
    }
}

impl SearchState {
    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            match_count: self.matches.len(),
            current_index: self.current_index,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.current_index.and_then(|ix| self.matches.get(ix))
    }

    /// Installs a fresh match list. `preferred` is clamped into range, so a
    /// rescan after "replace current" lands on the next occurrence.
    pub fn set_matches(&mut self, matches: Vec<Match>, preferred: Option<usize>) {
        self.matches = matches;
        self.current_index = if self.matches.is_empty() {
            None
        } else {
            Some(preferred.unwrap_or(0).min(self.matches.len() - 1))
        };
    }

    /// Selects the first match at or after `(path, offset)` in document
    /// order, wrapping to the first match.
    pub fn select_at_or_after(&mut self, path: &StructuralPath, offset: usize) {
        self.current_index = if self.matches.is_empty() {
            None
        } else {
            let ix = self
                .matches
                .iter()
                .position(|m| (&m.path, m.anchor_offset) >= (path, offset))
                .unwrap_or(0);
            Some(ix)
        };
    }

    pub fn clear_matches(&mut self) -> bool {
        if self.matches.is_empty() && self.current_index.is_none() && self.last_error.is_none() {
            return false;
        }
        self.matches.clear();
        self.current_index = None;
        self.last_error = None;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
