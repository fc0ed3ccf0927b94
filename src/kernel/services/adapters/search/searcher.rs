//! Per-leaf match finder.
//!
//! - Literal, case-sensitive: memchr `memmem` finder
//! - Literal, case-insensitive: escaped regex
//! - Pattern (`use_regex`): the term is compiled as-is
//!
//! Every start offset that begins an occurrence yields one match, so
//! overlapping occurrences are all reported.

use crate::kernel::services::ports::search::{LeafRef, Match, Result, SearchOptions};
use memchr::memmem::Finder;
use regex::{Regex, RegexBuilder};
use unicode_xid::UnicodeXID;

/// Compiled matcher for one search term.
#[derive(Clone)]
pub enum SearchConfig {
    Literal {
        finder: Finder<'static>,
        whole_word: bool,
    },
    Regex {
        regex: Regex,
        whole_word: bool,
    },
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { finder, whole_word } => f
                .debug_struct("Literal")
                .field("needle", &String::from_utf8_lossy(finder.needle()))
                .field("whole_word", whole_word)
                .finish(),
            Self::Regex { regex, whole_word } => f
                .debug_struct("Regex")
                .field("pattern", &regex.as_str())
                .field("whole_word", whole_word)
                .finish(),
        }
    }
}

impl SearchConfig {
    /// Compiles `term` under `options`. An empty term has no matcher.
    pub fn build(term: &str, options: SearchOptions) -> Result<Option<Self>> {
        if term.is_empty() {
            return Ok(None);
        }
        let config = if options.use_regex {
            Self::regex(term, options)?
        } else {
            Self::literal(term, options)?
        };
        Ok(Some(config))
    }

    pub fn literal(term: &str, options: SearchOptions) -> Result<Self> {
        if options.case_sensitive {
            return Ok(Self::Literal {
                finder: Finder::new(term.as_bytes()).into_owned(),
                whole_word: options.whole_word,
            });
        }
        // Unicode simple case folding, so offsets stay in the original text.
        let regex = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()?;
        Ok(Self::Regex {
            regex,
            whole_word: options.whole_word,
        })
    }

    pub fn regex(term: &str, options: SearchOptions) -> Result<Self> {
        let regex = RegexBuilder::new(term)
            .case_insensitive(!options.case_sensitive)
            .build()?;
        Ok(Self::Regex {
            regex,
            whole_word: options.whole_word,
        })
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex { .. })
    }

    fn whole_word(&self) -> bool {
        match self {
            Self::Literal { whole_word, .. } | Self::Regex { whole_word, .. } => *whole_word,
        }
    }

    /// Appends every occurrence in `leaf` to `out`, ascending by anchor.
    pub fn find_in_leaf(&self, leaf: &LeafRef, out: &mut Vec<Match>) {
        let text = leaf.text.as_str();
        let whole_word = self.whole_word();
        let mut push = |start: usize, end: usize| {
            if start < end && (!whole_word || is_word_bounded(text, start, end)) {
                out.push(Match::new(leaf.path.clone(), start, end));
            }
        };

        match self {
            Self::Literal { finder, .. } => {
                let needle_len = finder.needle().len();
                let bytes = text.as_bytes();
                let mut pos = 0usize;
                while pos < bytes.len() {
                    let Some(ix) = finder.find(&bytes[pos..]) else {
                        break;
                    };
                    let start = pos + ix;
                    push(start, start + needle_len);
                    pos = start + char_len_at(text, start);
                }
            }
            Self::Regex { regex, .. } => {
                let mut pos = 0usize;
                while pos < text.len() {
                    let Some(m) = regex.find_at(text, pos) else {
                        break;
                    };
                    let start = m.start();
                    if start >= text.len() {
                        break;
                    }
                    push(start, m.end());
                    pos = start + char_len_at(text, start);
                }
            }
        }
    }

    pub fn find(&self, leaves: &[LeafRef]) -> Vec<Match> {
        let mut matches = Vec::new();
        for leaf in leaves {
            self.find_in_leaf(leaf, &mut matches);
        }
        matches
    }
}

/// Compiles `term` and scans `leaves`. Empty term yields no matches.
pub fn find_matches(leaves: &[LeafRef], term: &str, options: SearchOptions) -> Result<Vec<Match>> {
    let Some(config) = SearchConfig::build(term, options)? else {
        return Ok(Vec::new());
    };
    let matches = config.find(leaves);
    tracing::trace!(
        leaves = leaves.len(),
        matches = matches.len(),
        regex = config.is_regex(),
        "leaf scan"
    );
    Ok(matches)
}

fn char_len_at(text: &str, byte: usize) -> usize {
    text.get(byte..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || UnicodeXID::is_xid_continue(ch)
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/searcher.rs"]
mod tests;
