/*!
 * In-memory translation cache.
 *
 * Subtitle documents repeat lines constantly (recurring names, "Yes.",
 * "What?", sound cues), so identical cue text is translated once per
 * (source, target) pair and reused for the rest of the document.
 */

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    source_language: String,
    target_language: String,
}

/// Shared translation result cache. Cloning is cheap and shares storage.
#[derive(Debug, Clone, Default)]
pub struct TranslationCache {
    inner: Arc<RwLock<HashMap<CacheKey, String>>>,
}

impl TranslationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously translated text.
    pub fn get(&self, text: &str, source_language: &str, target_language: &str) -> Option<String> {
        let key = CacheKey {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        };
        self.inner.read().get(&key).cloned()
    }

    /// Store a translation result.
    pub fn insert(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        translated: &str,
    ) {
        let key = CacheKey {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        };
        self.inner.write().insert(key, translated.to_string());
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
