mod client;
mod language;

pub use client::{
    TranslationClient, TranslationRequest, TranslationResponse, is_unsupported_language,
};
pub use language::{LANGUAGE_PAIR_PATTERN, LanguagePair, is_valid_pair, resolve};
