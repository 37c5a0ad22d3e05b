/*!
 * TTML / DFXP serialization and format-preserving transform.
 *
 * Two distinct operations live here:
 * - [`serialize`] emits a minimal valid TTML document from an entry
 *   list (used when converting from an entry-based format).
 * - [`translate_in_place`] rewrites only the text nodes of `<p>`
 *   elements in an existing TTML document, leaving every other byte of
 *   the input untouched, so styling and timing attributes survive
 *   exactly as authored.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::subtitles::model::SubtitleEntry;
use crate::translation::TranslationService;

// A <p> element whose content is pure text. Elements with child markup
// (<br/>, <span>) are not rewritten, matching the behavior of tree-based
// converters that only touch single-text-node paragraphs.
static P_TEXT_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p\b[^>]*>([^<]+)</p>").unwrap());

/// Serialize entries to a minimal TTML document.
///
/// Timing uses the period-separated clock format. Text content is
/// XML-escaped; the `tts` styling namespace is declared so the emitted
/// document is valid stand-alone.
pub fn serialize(entries: &[SubtitleEntry], target_language: &str) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(entries.len() + 2);

    lines.push(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<tt xmlns="http://www.w3.org/ns/ttml" xmlns:tts="http://www.w3.org/ns/ttml#styling" xml:lang="{}">
<head>
<styling>
<style xml:id="default" tts:color="white" tts:fontFamily="sansSerif" tts:fontSize="100%"/>
</styling>
</head>
<body>
<div>"#,
        target_language
    ));

    for entry in entries {
        lines.push(format!(
            r#"<p begin="{}" end="{}">{}</p>"#,
            entry.start.format_period(),
            entry.end.format_period(),
            escape_text(&entry.text)
        ));
    }

    lines.push(
        r#"</div>
</body>
</tt>"#
            .to_string(),
    );

    lines.join("\n")
}

/// Check that the content is recognizably a TTML document.
pub fn check_document(content: &str) -> Result<(), SubtitleError> {
    if !content.contains("<tt") {
        return Err(SubtitleError::DocumentParse(
            "TTML document has no <tt> root element".to_string(),
        ));
    }
    Ok(())
}

/// Rewrite the text nodes of `<p>` elements with translated text.
///
/// Fails with a document error when the input has no `<tt>` root; all
/// bytes outside the rewritten text nodes are preserved verbatim.
pub async fn translate_in_place(
    content: &str,
    service: &TranslationService,
    source_language: &str,
    target_language: &str,
) -> Result<String, SubtitleError> {
    check_document(content)?;

    let mut output = String::with_capacity(content.len());
    let mut last_end = 0;

    for caps in P_TEXT_ELEMENT.captures_iter(content) {
        let Some(text_node) = caps.get(1) else { continue };

        output.push_str(&content[last_end..text_node.start()]);

        let original = unescape_text(text_node.as_str());
        let translated = service
            .translate_or_original(&original, source_language, target_language)
            .await;
        output.push_str(&escape_text(&translated));

        last_end = text_node.end();
    }

    output.push_str(&content[last_end..]);
    Ok(output)
}

/// Escape a text node for XML output.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Decode the entities [`escape_text`] produces.
fn unescape_text(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
