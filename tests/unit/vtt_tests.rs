/*!
 * Tests for WebVTT parsing and serialization
 */

use subconv::subtitles::timecode::TimeCode;
use subconv::subtitles::vtt;

use crate::common::SAMPLE_VTT;

#[test]
fn test_parse_withHeaderBlock_shouldDiscardHeaderSilently() {
    let entries = vtt::parse(SAMPLE_VTT);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "This is a test subtitle.");
    assert!(!entries.iter().any(|e| e.text.contains("WEBVTT")));
}

#[test]
fn test_parse_withCueSettings_shouldIgnoreSettingsAfterEndTime() {
    let entries = vtt::parse(SAMPLE_VTT);

    assert_eq!(entries[1].start, TimeCode::from_ms(5_000));
    assert_eq!(entries[1].end, TimeCode::from_ms(9_000));
    assert_eq!(entries[1].text, "It contains multiple entries.");
}

#[test]
fn test_parse_withCueIdentifier_shouldKeepIdentifierAsText() {
    // Lines other than the timing line are cue text, including an
    // identifier placed before the timing line.
    let content = "WEBVTT\n\nintro-cue\n00:00:01.000 --> 00:00:02.000\nHello\n";
    let entries = vtt::parse(content);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "intro-cue\nHello");
}

#[test]
fn test_parse_withNoteBlock_shouldDiscardSilently() {
    let content = "WEBVTT\n\nNOTE this is a comment\n\n00:00:01.000 --> 00:00:02.000\nKept\n";
    let entries = vtt::parse(content);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Kept");
}

#[test]
fn test_parse_withCommaSeparator_shouldAcceptLoosely() {
    let content = "WEBVTT\n\n00:00:01,500 --> 00:00:02,500\nInconsistent file\n";
    let entries = vtt::parse(content);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start, TimeCode::from_ms(1_500));
}

#[test]
fn test_parse_withMalformedTimestamps_shouldSkipBlock() {
    let content = "WEBVTT\n\nbroken --> cue\nDropped\n\n00:00:01.000 --> 00:00:02.000\nKept\n";
    let entries = vtt::parse(content);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Kept");
}

#[test]
fn test_serialize_shouldEmitHeaderAndPeriodTimestamps() {
    let entries = vtt::parse(SAMPLE_VTT);
    let output = vtt::serialize(&entries);

    assert!(output.starts_with("WEBVTT\n\n"));
    assert!(output.contains("00:00:01.000 --> 00:00:04.000\nThis is a test subtitle.\n"));
    assert!(!output.contains(','));
}

#[test]
fn test_serialize_withEmptyEntryList_shouldEmitHeaderOnly() {
    assert_eq!(vtt::serialize(&[]), "WEBVTT\n");
}

#[test]
fn test_roundtrip_shouldPreserveTextAndTimes() {
    let entries = vtt::parse(SAMPLE_VTT);
    let reparsed = vtt::parse(&vtt::serialize(&entries));

    assert_eq!(entries.len(), reparsed.len());
    for (original, roundtripped) in entries.iter().zip(reparsed.iter()) {
        assert_eq!(original.start, roundtripped.start);
        assert_eq!(original.text, roundtripped.text);
    }
}
