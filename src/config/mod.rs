//! Configuration file loading.

mod manager;

pub use manager::{Config, ConfigManager, KEY_API, KEY_SOURCE_LANG, KEY_TARGET_LANG};
