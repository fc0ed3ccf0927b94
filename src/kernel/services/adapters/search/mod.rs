//! Find/replace pipeline over the document tree.
//!
//! - walker: tree -> text leaves in reading order
//! - searcher: leaves + term -> ordered matches
//! - selection: match -> host selection
//! - replace: match(es) -> host edits

mod replace;
mod searcher;
mod selection;
mod walker;

pub use replace::{replace_all, replace_one};
pub use searcher::{find_matches, SearchConfig};
pub use selection::apply_selection;
pub use walker::walk;
