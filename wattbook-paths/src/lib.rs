//! XDG Base Directory paths for wattbook.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths. This matches tools like gh, docker, kubectl.

use std::path::PathBuf;

/// Get the wattbook config directory.
///
/// Returns `$XDG_CONFIG_HOME/wattbook` if set, otherwise `~/.config/wattbook`.
///
/// # Examples
///
/// ```
/// use wattbook_paths::config_dir;
///
/// let config = config_dir();
/// let identity_file = config.join("identity.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("wattbook")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/wattbook")
    } else {
        PathBuf::from(".config/wattbook")
    }
}

/// Get the wattbook data directory.
///
/// Returns `$XDG_DATA_HOME/wattbook` if set, otherwise
/// `~/.local/share/wattbook`. This is where the assessment database lives.
///
/// # Examples
///
/// ```
/// use wattbook_paths::data_dir;
///
/// let db_path = data_dir().join("assessments.db");
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("wattbook")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/wattbook")
    } else {
        PathBuf::from(".local/share/wattbook")
    }
}
