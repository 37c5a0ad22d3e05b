/*!
 * SubStation Alpha (.ssa / .ass) format-preserving transform.
 *
 * SSA documents carry script info, style definitions and event metadata
 * that must survive conversion byte-for-byte. Only the text field of
 * `Dialogue:` event lines is translatable: the 10th comma-delimited
 * field, which may itself contain commas and is never split further.
 */

use crate::translation::TranslationService;

/// Number of comma-delimited fields in a `Dialogue:` event line. The
/// last field is the text payload.
const DIALOGUE_FIELDS: usize = 10;

/// Rewrite the text field of every `Dialogue:` line, leaving all other
/// lines and the first nine fields untouched.
pub async fn translate_in_place(
    content: &str,
    service: &TranslationService,
    source_language: &str,
    target_language: &str,
) -> String {
    let mut output: Vec<String> = Vec::new();

    for line in content.split('\n') {
        // Keep CRLF endings out of the translatable payload.
        let (body, had_cr) = match line.strip_suffix('\r') {
            Some(stripped) => (stripped, true),
            None => (line, false),
        };

        let mut rewritten = rewrite_dialogue_line(body, service, source_language, target_language)
            .await
            .unwrap_or_else(|| body.to_string());

        if had_cr {
            rewritten.push('\r');
        }
        output.push(rewritten);
    }

    output.join("\n")
}

/// Translate the text field of a `Dialogue:` line. Returns `None` when
/// the line is not a well-formed dialogue event and must pass through
/// unchanged.
async fn rewrite_dialogue_line(
    line: &str,
    service: &TranslationService,
    source_language: &str,
    target_language: &str,
) -> Option<String> {
    if !line.starts_with("Dialogue:") {
        return None;
    }

    let parts: Vec<&str> = line.splitn(DIALOGUE_FIELDS, ',').collect();
    if parts.len() != DIALOGUE_FIELDS {
        return None;
    }

    let translated = service
        .translate_or_original(parts[DIALOGUE_FIELDS - 1], source_language, target_language)
        .await;

    Some(format!(
        "{},{}",
        parts[..DIALOGUE_FIELDS - 1].join(","),
        translated
    ))
}
