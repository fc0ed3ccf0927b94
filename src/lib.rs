//! docfind - find and replace over structured documents
//!
//! Text lives in the leaves of a block tree and is addressed by
//! (structural path, offset). Module layout:
//! - kernel::services::ports: host contract and data types
//! - kernel::services::adapters: walk/find/select/replace pipeline, in-memory host
//! - kernel::search: search state, navigation and the debounced controller
//! - logging: tracing setup for the command-line front end

pub mod kernel;
pub mod logging;

pub use kernel::{
    DocumentHost, HostError, Match, MemoryDocument, Node, SearchController, SearchError,
    SearchOptions, SearchPhase, SearchSettings, SearchSummary, StructuralPath,
};
