use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Default public translation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Client for the public Google translation endpoint.
///
/// Uses the unauthenticated `translate_a/single` API (`client=gtx`), the
/// same backend the original command-line converters rely on. One request
/// translates one cue's text.
#[derive(Debug, Clone)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint base URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new client against the given endpoint base URL.
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a client against the default public endpoint.
    pub fn default_endpoint(timeout_secs: u64) -> Self {
        Self::new(DEFAULT_ENDPOINT, timeout_secs)
    }

    /// Issue a translation request and return the decoded JSON body.
    ///
    /// The response is a nested array: index 0 holds translated segments,
    /// index 2 the detected source language.
    async fn request(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<Value, ProviderError> {
        let api_url = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation endpoint error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Concatenate the translated segments of a response body.
    fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                ProviderError::ParseError("response has no translation segments".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "response contained an empty translation".to_string(),
            ));
        }

        Ok(translated)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let body = self.request(text, source_language, target_language).await?;
        Self::extract_translation(&body)
    }

    async fn detect_language(&self, text: &str) -> Result<String, ProviderError> {
        let body = self.request(text, "auto", "en").await?;

        body.get(2)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ProviderError::ParseError("response has no detected language".to_string())
            })
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
