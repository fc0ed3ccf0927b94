//! Find/replace panel: state, navigation and the controller that drives them.

mod controller;
pub mod navigator;
mod state;

pub use controller::{SearchController, SearchPhase};
pub use state::{SearchState, SearchSummary};
