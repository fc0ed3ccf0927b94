//! Service ports: traits + data contracts.

pub mod document;
pub mod search;
pub mod settings;

pub use document::{DocumentHost, HostError, Node, Selection, SelectionPoint, StructuralPath};
pub use search::{LeafRef, Match, Result as SearchResult, SearchError, SearchOptions};
pub use settings::{SearchSettings, DEFAULT_DEBOUNCE_MS};
