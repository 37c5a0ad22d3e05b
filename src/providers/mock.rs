/*!
 * Mock provider for testing.
 *
 * Simulates the behaviors the pipeline has to survive:
 * - `MockProvider::identity()` - returns the input text unchanged
 * - `MockProvider::working()` - succeeds with visibly translated text
 * - `MockProvider::failing()` - always fails with an error
 * - `MockProvider::intermittent(n)` - fails every nth request
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the input text unchanged
    Identity,
    /// Always succeeds, marking the text so tests can see it was translated
    Working,
    /// Always fails with an error
    Failing,
    /// Fails every nth request
    Intermittent {
        /// Every nth request fails
        fail_every: usize
    },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock that returns input text unchanged
    pub fn identity() -> Self {
        Self::new(MockBehavior::Identity)
    }

    /// Mock that always succeeds with `[xx] text` marking
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Mock that fails every nth request
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Number of translate calls received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        _source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behavior {
            MockBehavior::Identity => Ok(text.to_string()),
            MockBehavior::Working => Ok(format!("[{}] {}", target_language, text)),
            MockBehavior::Failing => {
                Err(ProviderError::RequestFailed("mock provider failure".to_string()))
            }
            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == 0 {
                    Err(ProviderError::RequestFailed(format!(
                        "mock intermittent failure on request {}",
                        count
                    )))
                } else {
                    Ok(format!("[{}] {}", target_language, text))
                }
            }
        }
    }

    async fn detect_language(&self, _text: &str) -> Result<String, ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider failure".to_string(),
            )),
            _ => Ok("en".to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
