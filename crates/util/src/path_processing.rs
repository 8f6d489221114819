use std::env;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, data_dir, home_dir};

/// Environment variable overriding the data view file read at startup.
pub const PAGES_PATH_ENV: &str = "PAGENAV_PAGES_PATH";
/// Environment variable overriding the TUI log file.
pub const LOG_PATH_ENV: &str = "PAGENAV_LOG_PATH";

pub const PAGES_FILE_NAME: &str = "pages.json";
pub const LOG_FILE_NAME: &str = "pagenav.log";
const APP_DIR: &str = "pagenav";

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }
    if let Some(rest) = trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }
    PathBuf::from(trimmed)
}

/// Resolves which data view file to load.
///
/// An explicit argument wins, then [`PAGES_PATH_ENV`], then
/// `<config dir>/pagenav/pages.json` if that file exists. `None` means the
/// widget starts without host data.
pub fn resolve_pages_path(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit.and_then(non_blank) {
        return Some(expand_tilde(path));
    }
    if let Some(path) = env_path(PAGES_PATH_ENV) {
        return Some(path);
    }
    config_dir()
        .map(|dir| dir.join(APP_DIR).join(PAGES_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Location of the TUI log file.
pub fn default_log_path() -> PathBuf {
    if let Some(path) = env_path(LOG_PATH_ENV) {
        return path;
    }
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(LOG_FILE_NAME)
}

/// True when `path` names a YAML document.
pub fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml"))
}

fn env_path(name: &str) -> Option<PathBuf> {
    let value = env::var(name).ok()?;
    non_blank(&value).map(expand_tilde)
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
