use super::document::{HostError, StructuralPath};

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search term: {0}")]
    InvalidTerm(#[from] regex::Error),
    #[error("stale path {0}")]
    StalePath(StructuralPath),
    #[error("document host is not mounted")]
    HostUnavailable,
    #[error(transparent)]
    Host(HostError),
}

impl From<HostError> for SearchError {
    fn from(e: HostError) -> Self {
        match e {
            HostError::StalePath(path) | HostError::OffsetOutOfRange { path, .. } => {
                SearchError::StalePath(path)
            }
            other => SearchError::Host(other),
        }
    }
}

impl SearchError {
    /// Errors after which the recorded match list can no longer be trusted.
    pub fn needs_rescan(&self) -> bool {
        matches!(self, Self::StalePath(_))
    }
}

/// One text leaf as produced by the document walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRef {
    pub path: StructuralPath,
    pub text: String,
}

impl LeafRef {
    pub fn new(path: StructuralPath, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
        }
    }
}

/// One occurrence of the search term inside a single leaf.
///
/// Offsets are UTF-8 byte offsets into the leaf text, on `char` boundaries,
/// with `anchor_offset < focus_offset`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Match {
    pub path: StructuralPath,
    pub anchor_offset: usize,
    pub focus_offset: usize,
}

impl Match {
    pub fn new(path: StructuralPath, anchor_offset: usize, focus_offset: usize) -> Self {
        Self {
            path,
            anchor_offset,
            focus_offset,
        }
    }

    pub fn len(&self) -> usize {
        self.focus_offset.saturating_sub(self.anchor_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor_offset >= self.focus_offset
    }

    /// The same range counted in UTF-16 code units of `text`.
    pub fn utf16_range(&self, text: &str) -> Option<(usize, usize)> {
        let head = text.get(..self.anchor_offset)?;
        let body = text.get(self.anchor_offset..self.focus_offset)?;
        let start = head.encode_utf16().count();
        Some((start, start + body.encode_utf16().count()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub use_regex: bool,
    pub whole_word: bool,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/search.rs"]
mod tests;
