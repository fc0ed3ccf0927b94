use crate::kernel::services::ports::{
    DocumentHost, Match, SearchResult, Selection, SelectionPoint,
};

impl Match {
    pub fn to_selection(&self) -> Selection {
        Selection {
            anchor: SelectionPoint {
                path: self.path.clone(),
                offset: self.anchor_offset,
            },
            focus: SelectionPoint {
                path: self.path.clone(),
                offset: self.focus_offset,
            },
        }
    }
}

/// Selects `m` in the host, then scrolls to it if asked.
///
/// Scrolling is best effort: a missing render surface only gets logged.
pub fn apply_selection<H: DocumentHost + ?Sized>(
    host: &mut H,
    m: &Match,
    scroll: bool,
) -> SearchResult<()> {
    host.set_selection(m.to_selection())?;
    if scroll {
        if let Err(e) = host.scroll_into_view(&m.path) {
            tracing::debug!(path = %m.path, error = %e, "scroll into view skipped");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/selection.rs"]
mod tests;
