//! Headless find/replace core (state/controller/services).

pub mod search;
pub mod services;

pub use search::{SearchController, SearchPhase, SearchState, SearchSummary};
pub use services::adapters::MemoryDocument;
pub use services::ports::{
    DocumentHost, HostError, LeafRef, Match, Node, SearchError, SearchOptions, SearchSettings,
    Selection, SelectionPoint, StructuralPath,
};
