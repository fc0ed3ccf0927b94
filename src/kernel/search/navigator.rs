//! Wraparound stepping through the match list.

use super::state::SearchState;

pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(ix) => (ix % len + 1) % len,
        None => 0,
    })
}

pub fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(ix) => (ix % len + len - 1) % len,
        None => len - 1,
    })
}

pub fn next(state: &SearchState) -> Option<usize> {
    next_index(state.current_index, state.matches.len())
}

pub fn previous(state: &SearchState) -> Option<usize> {
    previous_index(state.current_index, state.matches.len())
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/search/navigator.rs"]
mod tests;
