/*!
 * Translation layer for the conversion pipeline.
 *
 * - `core`: the [`TranslationService`] with empty-text short-circuit,
 *   caching and fallback-to-source-text
 * - `cache`: shared in-memory result cache
 */

pub use self::cache::TranslationCache;
pub use self::core::TranslationService;

pub mod cache;
pub mod core;
