use crate::kernel::services::ports::settings::SearchSettings;
use std::path::{Path, PathBuf};

pub const SETTINGS_ENV: &str = "DOCFIND_SETTINGS";

pub fn get_settings_path() -> Option<PathBuf> {
    std::env::var_os(SETTINGS_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub fn parse_settings(data: &str) -> Option<SearchSettings> {
    match serde_json::from_str(data) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(error = %e, "invalid search settings");
            None
        }
    }
}

pub fn load_settings(path: &Path) -> Option<SearchSettings> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "read search settings failed");
            return None;
        }
    };
    parse_settings(&data)
}

/// Settings from `$DOCFIND_SETTINGS`, or defaults.
pub fn load_settings_or_default() -> SearchSettings {
    get_settings_path()
        .and_then(|path| load_settings(&path))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
