use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Per-user application directory, e.g. `~/.config/teletext_deck` on Linux.
/// Falls back to the current directory if no config directory is known.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the platform-specific path for the config file.
pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().to_string()
}
