use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TransError};
use crate::paths;

/// Key holding the translation endpoint URL.
pub const KEY_API: &str = "API";
/// Key holding the default source language code.
pub const KEY_SOURCE_LANG: &str = "SourceLang";
/// Key holding the default target language code.
pub const KEY_TARGET_LANG: &str = "TargetLang";

/// Settings loaded from `config.cfg`.
///
/// Built once at startup and handed to every component by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Translation endpoint URL.
    pub api: Option<String>,
    /// Default source language, empty when not configured.
    pub source_lang: String,
    /// Default target language, empty when not configured.
    pub target_lang: String,
    /// Every `KEY=VALUE` pair found in the file, recognized or not.
    pub entries: BTreeMap<String, String>,
    /// File the settings were read from.
    pub path: PathBuf,
}

impl Config {
    /// Parses `KEY=VALUE` lines.
    ///
    /// Each line is split on the first `=`. Lines without `=` or with an
    /// empty key are ignored. A later duplicate key wins.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let mut entries = BTreeMap::new();

        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        let api = entries.get(KEY_API).filter(|v| !v.is_empty()).cloned();
        let source_lang = entries.get(KEY_SOURCE_LANG).cloned().unwrap_or_default();
        let target_lang = entries.get(KEY_TARGET_LANG).cloned().unwrap_or_default();

        Self {
            api,
            source_lang,
            target_lang,
            entries,
            path: path.into(),
        }
    }

    /// Returns `true` if no `KEY=VALUE` line was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the endpoint URL, failing if `API` is not configured.
    pub fn api(&self) -> Result<&str> {
        self.api.as_deref().ok_or_else(|| TransError::MissingApi {
            path: self.path.clone(),
        })
    }
}

/// Locates, bootstraps, and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default location.
    ///
    /// Configuration is stored at
    /// `$XDG_CONFIG_HOME/deeplx-for-command-line/config.cfg`
    /// or `~/.config/deeplx-for-command-line/config.cfg` if
    /// `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_file()?,
        })
    }

    /// Creates a manager for an explicit file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the configuration.
    ///
    /// On first run the directory and an empty file are created and
    /// [`TransError::ConfigMissing`] is returned so the caller can ask the
    /// user to fill it in. A file without any `KEY=VALUE` line yields
    /// [`TransError::ConfigEmpty`].
    pub fn load(&self) -> Result<Config> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.bootstrap()?;
                return Err(TransError::ConfigMissing {
                    path: self.config_path.clone(),
                });
            }
            Err(source) => {
                return Err(TransError::ConfigIo {
                    path: self.config_path.clone(),
                    source,
                });
            }
        };

        let config = Config::parse(&contents, &self.config_path);
        if config.is_empty() {
            return Err(TransError::ConfigEmpty {
                path: self.config_path.clone(),
            });
        }

        for key in config.entries.keys() {
            if ![KEY_API, KEY_SOURCE_LANG, KEY_TARGET_LANG].contains(&key.as_str()) {
                debug!(key = %key, "ignoring unrecognized config key");
            }
        }
        debug!(path = %self.config_path.display(), entries = config.entries.len(), "loaded config");

        Ok(config)
    }

    fn bootstrap(&self) -> Result<()> {
        let io_error = |source| TransError::ConfigIo {
            path: self.config_path.clone(),
            source,
        };

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(&self.config_path, "").map_err(io_error)?;

        debug!(path = %self.config_path.display(), "created empty config file");
        Ok(())
    }
}
