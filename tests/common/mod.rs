/*!
 * Common test utilities for the subconv test suite
 */

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use subconv::providers::mock::MockProvider;
use subconv::translation::TranslationService;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Wrap a mock provider in a translation service
pub fn service_with(provider: MockProvider) -> TranslationService {
    TranslationService::new(Arc::new(provider))
}

/// Service whose provider returns input text unchanged
pub fn identity_service() -> TranslationService {
    service_with(MockProvider::identity())
}

/// Service whose provider marks translated text with `[lang] `
pub fn working_service() -> TranslationService {
    service_with(MockProvider::working())
}

/// Service whose provider always fails
pub fn failing_service() -> TranslationService {
    service_with(MockProvider::failing())
}

/// Working service plus a handle to the shared request counter
pub fn counting_working_service() -> (TranslationService, MockProvider) {
    let provider = MockProvider::working();
    (service_with(provider.clone()), provider)
}

/// A three-entry SRT document
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// A two-cue WebVTT document with header and cue settings
pub const SAMPLE_VTT: &str = "WEBVTT

00:00:01.000 --> 00:00:04.000
This is a test subtitle.

00:00:05.000 --> 00:00:09.000 align:start
It contains multiple entries.
";

/// A two-entry SBV document
pub const SAMPLE_SBV: &str = "00:00:01.000 --> 00:00:04.000
This is a test subtitle.

00:00:05.000 --> 00:00:09.000
It contains multiple entries.
";

/// A small SSA script with two dialogue events
pub const SAMPLE_SSA: &str = "[Script Info]
Title: Sample
ScriptType: v4.00+

[V4+ Styles]
Format: Name, Fontname, Fontsize
Style: Default,Arial,20

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Hello, world
Dialogue: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,Second line
";

/// A small TTML document with two paragraphs
pub const SAMPLE_TTML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tt xmlns="http://www.w3.org/ns/ttml" xml:lang="en">
<body>
<div>
<p begin="00:00:01.000" end="00:00:04.000" style="default">Hello world</p>
<p begin="00:00:05.000" end="00:00:09.000">Second paragraph</p>
</div>
</body>
</tt>"#;
