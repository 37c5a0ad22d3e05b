/*!
 * # subconv - Subtitle Format Converter & Translator
 *
 * A Rust library for converting subtitle files between formats and
 * machine-translating their text.
 *
 * ## Features
 *
 * - Parse SRT, WebVTT and SBV into a format-agnostic entry model
 * - Re-serialize to SRT, WebVTT, SBV or TTML with per-format timestamp
 *   encoding
 * - Format-preserving SSA/ASS and TTML transforms that rewrite only the
 *   dialogue text and leave all other structure untouched
 * - Optional machine translation with per-entry fallback to the source
 *   text on failure
 * - Bounded-concurrency translation that preserves entry order
 * - Language auto-detection from a bounded document sample
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitles`: timecodes, format detection, parsers, serializers and
 *   in-place transforms
 * - `converter`: the conversion pipeline coordinator
 * - `translation`: translation service with caching and fallback
 * - `providers`: translation backend clients (Google endpoint, mock)
 * - `app_config`: configuration management
 * - `app_controller`: main application controller
 * - `file_utils`: file system operations
 * - `language_utils`: ISO language code utilities and detection sampling
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod converter;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod subtitles;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use converter::Converter;
pub use errors::{AppError, ProviderError, SubtitleError, TranslationError};
pub use subtitles::{Document, SubtitleEntry, SubtitleFormat, TimeCode};
pub use translation::TranslationService;
