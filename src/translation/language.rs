//! Language pair parsing and fallback to configured defaults.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Config;

/// `SRC:TGT` with an optional region or script suffix on the target,
/// e.g. `EN:ZH`, `DE:EN-GB`, `EN:ZH-HANS`. Anchored at the end only.
pub const LANGUAGE_PAIR_PATTERN: &str = r"[A-Z]{2}:[A-Z]{2}(?:-(?:[A-Z]{2}|[A-Z]{4}))?$";

#[allow(clippy::expect_used)]
static LANGUAGE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LANGUAGE_PAIR_PATTERN).expect("valid regex"));

/// Source and target language codes sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn fixed(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    /// Chinese to English, used by `-e`.
    pub fn to_english() -> Self {
        Self::fixed("ZH", "EN")
    }

    /// English to Simplified Chinese, used by `-z`.
    pub fn to_chinese() -> Self {
        Self::fixed("EN", "ZH")
    }

    /// Parses `SRC:TGT`, returning `None` if it does not match
    /// [`LANGUAGE_PAIR_PATTERN`].
    pub fn parse(spec: &str) -> Option<Self> {
        if !LANGUAGE_PAIR.is_match(spec) {
            return None;
        }

        let mut parts = spec.split(':');
        let source = parts.next()?;
        let target = parts.next()?;
        Some(Self::fixed(source, target))
    }
}

/// Returns `true` if `spec` is a well-formed language pair.
pub fn is_valid_pair(spec: &str) -> bool {
    LANGUAGE_PAIR.is_match(spec)
}

/// Resolves the pair for a customized translation.
///
/// A matching `pair_spec` is split and used verbatim. Anything else,
/// including `None` and the empty string, falls back to the configured
/// `SourceLang` and `TargetLang`, which may themselves be empty.
pub fn resolve(pair_spec: Option<&str>, config: &Config) -> LanguagePair {
    pair_spec
        .and_then(LanguagePair::parse)
        .unwrap_or_else(|| LanguagePair {
            source: config.source_lang.clone(),
            target: config.target_lang.clone(),
        })
}
