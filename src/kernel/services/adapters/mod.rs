//! Service adapters: concrete implementations behind the ports.

pub mod document;
pub mod search;
pub mod settings;

pub use document::MemoryDocument;
pub use search::{
    apply_selection, find_matches, replace_all, replace_one, walk, SearchConfig,
};
pub use settings::{get_settings_path, load_settings, load_settings_or_default, parse_settings};
