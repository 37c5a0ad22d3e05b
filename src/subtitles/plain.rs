/*!
 * Plain text transform: each line is translated independently and the
 * result is newline-joined. No timing is involved.
 */

use crate::translation::TranslationService;

/// Translate plain text content line by line.
///
/// Empty lines pass through unchanged (the service never calls the
/// provider for whitespace-only text), so paragraph structure survives.
pub async fn translate(
    content: &str,
    service: &TranslationService,
    source_language: &str,
    target_language: &str,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in content.split('\n') {
        lines.push(
            service
                .translate_or_original(line, source_language, target_language)
                .await,
        );
    }

    lines.join("\n")
}
