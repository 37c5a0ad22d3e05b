/*!
 * Core translation service.
 *
 * Wraps a [`TranslationProvider`] with the policies the conversion
 * pipeline relies on: empty text is returned unchanged without a provider
 * call, identical cue text is served from the cache, and a per-entry
 * failure falls back to the source text instead of aborting the run.
 */

use std::sync::Arc;

use log::warn;

use crate::errors::TranslationError;
use crate::providers::TranslationProvider;
use super::cache::TranslationCache;

/// Translation front-end used by the conversion pipeline.
#[derive(Debug, Clone)]
pub struct TranslationService {
    provider: Arc<dyn TranslationProvider>,
    cache: TranslationCache,
}

impl TranslationService {
    /// Create a service over the given provider.
    pub fn new(provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            provider,
            cache: TranslationCache::new(),
        }
    }

    /// Translate a single text payload.
    ///
    /// Empty or whitespace-only text is returned unchanged without
    /// invoking the provider. A `source_language` of `"auto"` is passed
    /// through so the provider detects the language per call.
    pub async fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        if let Some(hit) = self.cache.get(text, source_language, target_language) {
            return Ok(hit);
        }

        let translated = self
            .provider
            .translate(text, source_language, target_language)
            .await?;

        self.cache.insert(text, source_language, target_language, &translated);
        Ok(translated)
    }

    /// Translate with fallback-to-source-text.
    ///
    /// A failed translation is logged and the original text returned;
    /// it never aborts the surrounding conversion.
    pub async fn translate_or_original(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> String {
        match self.translate_text(text, source_language, target_language).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation failed, keeping source text: {}", e);
                text.to_string()
            }
        }
    }

    /// Detect the language of a text sample. Best-effort: any failure
    /// yields English.
    pub async fn detect_language(&self, sample: &str) -> String {
        match self.provider.detect_language(sample).await {
            Ok(language) => language,
            Err(e) => {
                warn!("Language detection failed, assuming \"en\": {}", e);
                "en".to_string()
            }
        }
    }

    /// Provider name for logs.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Number of distinct texts translated so far.
    pub fn cached_translations(&self) -> usize {
        self.cache.len()
    }
}
