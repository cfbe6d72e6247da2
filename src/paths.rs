//! XDG-style path utilities for the configuration directory.
//!
//! The directory name is shared with earlier releases of the tool so existing
//! configuration files keep working.

use std::path::PathBuf;

use crate::error::{Result, TransError};

/// Directory name under the user's config root.
pub const APP_DIR_NAME: &str = "deeplx-for-command-line";

/// File name of the `KEY=VALUE` configuration file.
pub const CONFIG_FILE_NAME: &str = "config.cfg";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/deeplx-for-command-line` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/deeplx-for-command-line` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR_NAME)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR_NAME)),
    }
}

/// Returns the default configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(TransError::HomeDirUnavailable)
}
