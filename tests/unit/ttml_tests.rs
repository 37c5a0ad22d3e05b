/*!
 * Tests for TTML serialization and the in-place transform
 */

use subconv::errors::SubtitleError;
use subconv::subtitles::model::SubtitleEntry;
use subconv::subtitles::timecode::TimeCode;
use subconv::subtitles::ttml;

use crate::common::{SAMPLE_TTML, failing_service, identity_service, working_service};

fn sample_entries() -> Vec<SubtitleEntry> {
    vec![
        SubtitleEntry::new(
            1,
            TimeCode::from_ms(1_000),
            TimeCode::from_ms(4_000),
            "Tom & Jerry".to_string(),
        ),
        SubtitleEntry::new(
            2,
            TimeCode::from_ms(5_000),
            TimeCode::from_ms(9_000),
            "a < b".to_string(),
        ),
    ]
}

#[test]
fn test_serialize_shouldEmitNamespacedDocument() {
    let output = ttml::serialize(&sample_entries(), "fr");

    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(output.contains(r#"<tt xmlns="http://www.w3.org/ns/ttml""#));
    assert!(output.contains(r#"xmlns:tts="http://www.w3.org/ns/ttml#styling""#));
    assert!(output.contains(r#"xml:lang="fr""#));
    assert!(output.ends_with("</tt>"));
}

#[test]
fn test_serialize_shouldEmitPeriodTimestampsPerEntry() {
    let output = ttml::serialize(&sample_entries(), "fr");

    assert!(output.contains(r#"<p begin="00:00:01.000" end="00:00:04.000">"#));
    assert!(output.contains(r#"<p begin="00:00:05.000" end="00:00:09.000">"#));
}

#[test]
fn test_serialize_shouldEscapeMarkupInText() {
    let output = ttml::serialize(&sample_entries(), "fr");

    assert!(output.contains("Tom &amp; Jerry"));
    assert!(output.contains("a &lt; b"));
}

#[test]
fn test_serialize_withEmptyEntryList_shouldStillBeValidDocument() {
    let output = ttml::serialize(&[], "fr");

    assert!(ttml::check_document(&output).is_ok());
    assert!(!output.contains("<p "));
}

#[test]
fn test_check_document_withoutRootElement_shouldFail() {
    let result = ttml::check_document("just some text, no markup");
    assert!(matches!(result, Err(SubtitleError::DocumentParse(_))));
}

#[tokio::test]
async fn test_translate_in_place_shouldRewriteOnlyParagraphText() {
    let service = working_service();
    let output = ttml::translate_in_place(SAMPLE_TTML, &service, "en", "fr")
        .await
        .unwrap();

    assert!(output.contains(r#"<p begin="00:00:01.000" end="00:00:04.000" style="default">[fr] Hello world</p>"#));
    assert!(output.contains("[fr] Second paragraph"));
    // Everything outside the text nodes is byte-identical.
    assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<tt xmlns=\"http://www.w3.org/ns/ttml\" xml:lang=\"en\">"));
}

#[tokio::test]
async fn test_translate_in_place_withIdentityTranslation_shouldReproduceInputExactly() {
    let service = identity_service();
    let output = ttml::translate_in_place(SAMPLE_TTML, &service, "en", "fr")
        .await
        .unwrap();

    assert_eq!(output, SAMPLE_TTML);
}

#[tokio::test]
async fn test_translate_in_place_withNestedMarkup_shouldLeaveParagraphUntouched() {
    let content = r#"<tt xmlns="http://www.w3.org/ns/ttml"><body><div><p begin="00:00:01.000" end="00:00:02.000">Line one<br/>line two</p></div></body></tt>"#;
    let service = working_service();
    let output = ttml::translate_in_place(content, &service, "en", "fr")
        .await
        .unwrap();

    // Paragraphs with child elements have no single text node to rewrite.
    assert_eq!(output, content);
}

#[tokio::test]
async fn test_translate_in_place_withEntities_shouldDecodeBeforeTranslationAndReencode() {
    let content = r#"<tt xmlns="http://www.w3.org/ns/ttml"><body><div><p begin="00:00:01.000" end="00:00:02.000">Tom &amp; Jerry</p></div></body></tt>"#;
    let service = identity_service();
    let output = ttml::translate_in_place(content, &service, "en", "fr")
        .await
        .unwrap();

    assert_eq!(output, content);
}

#[tokio::test]
async fn test_translate_in_place_withFailingProvider_shouldFallBackToSourceText() {
    let service = failing_service();
    let output = ttml::translate_in_place(SAMPLE_TTML, &service, "en", "fr")
        .await
        .unwrap();

    assert_eq!(output, SAMPLE_TTML);
}

#[tokio::test]
async fn test_translate_in_place_withNonXmlInput_shouldFailWithDocumentError() {
    let service = identity_service();
    let result = ttml::translate_in_place("1\n00:00:01,000 --> 00:00:02,000\nSrt!", &service, "en", "fr").await;

    assert!(matches!(result, Err(SubtitleError::DocumentParse(_))));
}
