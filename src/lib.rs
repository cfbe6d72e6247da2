//! # trans - DeepLX command-line front-end
//!
//! `trans` forwards text to a DeepLX-compatible HTTP endpoint and prints the
//! translation. One request is issued per translation unit, sequentially.
//!
//! ## Quick Start
//!
//! ```bash
//! # Chinese to English
//! trans -e 你好
//!
//! # English to Simplified Chinese
//! trans -z "Hello, world"
//!
//! # Custom pair, or the configured default pair when -l is omitted
//! trans -l EN:JA -c "Good morning"
//!
//! # Translate a whole file
//! trans -l DE:EN-GB -f notes.txt
//!
//! # One translation per stdin line
//! cat lines.txt | trans -l EN:ZH
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/deeplx-for-command-line/config.cfg`,
//! one `KEY=VALUE` per line:
//!
//! ```text
//! API=http://localhost:1188/translate
//! SourceLang=EN
//! TargetLang=ZH
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading.
pub mod config;

/// Error type and exit status mapping.
pub mod error;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client and language pair resolution.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{Result, TransError};
