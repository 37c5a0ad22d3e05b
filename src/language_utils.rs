use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language utilities for ISO language code handling and detection
/// sampling.
///
/// Language codes flow in from the CLI and the config file; they are
/// validated here before any conversion starts so a typo fails fast
/// instead of after a full document of provider calls.
// Word-like tokens: letters only, so numbers and timestamps in subtitle
// documents never end up in a detection sample.
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

/// Number of word tokens sampled for language detection.
const DETECTION_SAMPLE_TOKENS: usize = 50;

/// Pseudo-code requesting per-call language auto-detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// Validate an ISO 639-1 (2-letter) or ISO 639-3 (3-letter) code.
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized = code.trim().to_lowercase();

    let valid = match normalized.len() {
        2 => Language::from_639_1(&normalized).is_some(),
        3 => Language::from_639_3(&normalized).is_some(),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(anyhow!("Invalid language code: {}", code))
    }
}

/// Get the English language name for a code, for friendly log output.
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    let language = match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    };

    language
        .map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Build a bounded detection sample from document text.
///
/// Takes the first 50 word-like tokens so detection cost does not grow
/// with document size, and timing lines contribute nothing.
pub fn detection_sample(content: &str) -> String {
    let tokens: Vec<&str> = WORD_REGEX
        .find_iter(content)
        .take(DETECTION_SAMPLE_TOKENS)
        .map(|m| m.as_str())
        .collect();

    tokens.join(" ")
}
