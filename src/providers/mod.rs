/*!
 * Translation provider implementations.
 *
 * This module defines the interface the conversion pipeline uses to talk
 * to a machine-translation backend, plus the concrete implementations:
 * - `google`: the public Google translation endpoint
 * - `mock`: configurable in-memory provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers.
///
/// Implementations translate a single text payload per call. A source
/// language of `"auto"` asks the provider to detect the language of each
/// call's text itself.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate `text` from `source_language` to `target_language`.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError>;

    /// Detect the language of a text sample, returning an ISO 639-1 code.
    async fn detect_language(&self, text: &str) -> Result<String, ProviderError>;

    /// Short provider name for logs.
    fn name(&self) -> &'static str;
}

pub mod google;
pub mod mock;
