use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::language::LanguagePair;
use crate::error::{Result, TransError};

/// Phrase the endpoint uses when it rejects the target language code.
const UNSUPPORTED_TARGET_LANG: &str = "Value for 'target_lang' not supported";

/// Request body sent to the endpoint.
#[derive(Debug, Serialize)]
pub struct TranslationRequest<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
}

/// Response body returned by the endpoint.
///
/// Only `data` is required; the other fields are informational.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TranslationResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(rename = "ID", default)]
    pub id: i64,
    /// The translated text.
    pub data: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alternatives: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns `true` if the raw body carries the endpoint's
/// unsupported-target-language error, whatever its JSON shape.
pub fn is_unsupported_language(body: &str) -> bool {
    body.contains(UNSUPPORTED_TARGET_LANG)
}

/// Client for a DeepLX-compatible `/translate` endpoint.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one POST and decodes the reply.
    ///
    /// The unsupported-language phrase is looked for before the status code
    /// or the JSON shape are inspected.
    pub async fn translate(&self, text: &str, pair: &LanguagePair) -> Result<TranslationResponse> {
        let request = TranslationRequest {
            text,
            source_lang: &pair.source,
            target_lang: &pair.target,
        };
        let payload = serde_json::to_vec(&request).map_err(TransError::Encoding)?;

        debug!(
            endpoint = %self.endpoint,
            source_lang = %pair.source,
            target_lang = %pair.target,
            bytes = payload.len(),
            "sending translation request"
        );

        let network_error = |source| TransError::Network {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if is_unsupported_language(&body) {
            return Err(TransError::UnsupportedLanguage);
        }

        if !status.is_success() {
            return Err(TransError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| TransError::Decoding { source, body })
    }
}
