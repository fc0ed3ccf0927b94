//! Replacement through the host mutation API.
//!
//! Every edit may change the length of its leaf, which shifts the offsets of
//! later matches in that same leaf. Bulk replacement therefore runs from the
//! last match to the first: each edit only touches text after every match that
//! is still pending.

use crate::kernel::services::ports::{DocumentHost, Match, SearchResult};

/// Replaces `[anchor, focus)` at `m.path` with `replacement`.
///
/// Every match computed before this call is stale afterwards.
pub fn replace_one<H: DocumentHost + ?Sized>(
    host: &mut H,
    m: &Match,
    replacement: &str,
) -> SearchResult<()> {
    host.delete_range(&m.path, m.anchor_offset, m.focus_offset)?;
    if !replacement.is_empty() {
        host.insert_text(&m.path, m.anchor_offset, replacement)?;
    }
    Ok(())
}

/// Replaces every match, last one first. Returns how many edits were applied.
///
/// Overlapping matches ("aa" twice in "aaa") are resolved leftmost-first; the
/// later overlapping occurrence is not replaced. Stops at the first edit the
/// host rejects; edits already applied stay applied.
pub fn replace_all<H: DocumentHost + ?Sized>(
    host: &mut H,
    matches: &[Match],
    replacement: &str,
) -> SearchResult<usize> {
    let ordered = disjoint_in_document_order(matches);

    let mut applied = 0usize;
    for m in ordered.into_iter().rev() {
        if let Err(e) = replace_one(host, m, replacement) {
            tracing::debug!(
                applied,
                total = matches.len(),
                path = %m.path,
                error = %e,
                "replace all interrupted"
            );
            return Err(e);
        }
        applied += 1;
    }
    Ok(applied)
}

fn disjoint_in_document_order(matches: &[Match]) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort();

    let mut kept: Vec<&Match> = Vec::with_capacity(sorted.len());
    for m in sorted {
        if let Some(prev) = kept.last() {
            if prev.path == m.path && m.anchor_offset < prev.focus_offset {
                continue;
            }
        }
        kept.push(m);
    }
    kept
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/replace.rs"]
mod tests;
