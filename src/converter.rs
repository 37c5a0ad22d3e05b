/*!
 * Pipeline coordinator.
 *
 * Dispatches raw document text to the parser for the detected source
 * format, maps the translation service over the translatable payload,
 * and re-serializes in the requested target format.
 *
 * Conversion matrix: entry-based sources (SRT, VTT, SBV) can target any
 * of SRT, VTT, SBV or TTML. SSA, TTML and plain text are
 * format-preserving and can only target their own format family. Every
 * other pair fails with `UnsupportedConversion` before any translation
 * work starts.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream::{self, StreamExt};
use log::{debug, info};

use crate::errors::AppError;
use crate::subtitles::{Document, SubtitleEntry, SubtitleFormat, plain, sbv, srt, ssa, ttml, vtt};
use crate::translation::TranslationService;

/// Coordinates parsing, translation and serialization for one document.
#[derive(Debug, Clone)]
pub struct Converter {
    service: TranslationService,
    concurrent_requests: usize,
}

impl Converter {
    /// Create a converter over a translation service.
    pub fn new(service: TranslationService, concurrent_requests: usize) -> Self {
        Self {
            service,
            concurrent_requests: concurrent_requests.max(1),
        }
    }

    /// Convert document text between subtitle formats, optionally
    /// translating the text payload.
    ///
    /// `target_language: None` performs a pure format conversion with no
    /// provider calls. The progress callback receives
    /// `(completed, total)` once per translated entry; it is not invoked
    /// for format-preserving transforms.
    pub async fn convert(
        &self,
        content: &str,
        source_format: SubtitleFormat,
        target_format: SubtitleFormat,
        source_language: &str,
        target_language: Option<&str>,
        progress: impl Fn(usize, usize) + Clone + Send + Sync + 'static,
    ) -> Result<String, AppError> {
        Self::ensure_supported(source_format, target_format)?;

        if source_format.is_entry_based() {
            let document = Document::parse(content, source_format)?;
            let Document::Entries(entries) = document else {
                return Err(AppError::Unknown(
                    "entry-based format parsed to a raw document".to_string(),
                ));
            };
            info!("Parsed {} subtitle entries from {} input", entries.len(), source_format);

            let entries = match target_language {
                Some(target) => {
                    self.translate_entries(entries, source_language, target, progress)
                        .await
                }
                None => entries,
            };

            let output = match target_format {
                SubtitleFormat::Srt => srt::serialize(&entries),
                SubtitleFormat::Vtt => vtt::serialize(&entries),
                SubtitleFormat::Sbv => sbv::serialize(&entries),
                SubtitleFormat::Ttml => {
                    ttml::serialize(&entries, target_language.unwrap_or(source_language))
                }
                // Unreachable after ensure_supported
                other => {
                    return Err(AppError::UnsupportedConversion {
                        from: source_format.to_string(),
                        to: other.to_string(),
                    });
                }
            };
            return Ok(output);
        }

        match source_format {
            SubtitleFormat::Ssa => match target_language {
                Some(target) => Ok(ssa::translate_in_place(
                    content,
                    &self.service,
                    source_language,
                    target,
                )
                .await),
                None => Ok(content.to_string()),
            },
            SubtitleFormat::Ttml => match target_language {
                Some(target) => Ok(ttml::translate_in_place(
                    content,
                    &self.service,
                    source_language,
                    target,
                )
                .await?),
                None => {
                    ttml::check_document(content)?;
                    Ok(content.to_string())
                }
            },
            SubtitleFormat::PlainText => match target_language {
                Some(target) => Ok(plain::translate(
                    content,
                    &self.service,
                    source_language,
                    target,
                )
                .await),
                None => Ok(content.to_string()),
            },
            // Entry-based formats are handled above.
            _ => Err(AppError::Unknown("unhandled source format".to_string())),
        }
    }

    /// Translate entry text with bounded concurrency.
    ///
    /// The stream buffer is ordered, so output order equals input order
    /// regardless of per-entry completion times, and each entry carries
    /// its own fallback: one failed translation never cancels another.
    async fn translate_entries(
        &self,
        entries: Vec<SubtitleEntry>,
        source_language: &str,
        target_language: &str,
        progress: impl Fn(usize, usize) + Clone + Send + Sync + 'static,
    ) -> Vec<SubtitleEntry> {
        let total = entries.len();
        let completed = Arc::new(AtomicUsize::new(0));

        debug!(
            "Translating {} entries ({} -> {}) with {} concurrent requests",
            total, source_language, target_language, self.concurrent_requests
        );

        stream::iter(entries)
            .map(|mut entry| {
                let service = self.service.clone();
                let completed = Arc::clone(&completed);
                let progress = progress.clone();
                let source = source_language.to_string();
                let target = target_language.to_string();

                async move {
                    entry.text = service
                        .translate_or_original(&entry.text, &source, &target)
                        .await;

                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    progress(done, total);
                    entry
                }
            })
            .buffered(self.concurrent_requests)
            .collect()
            .await
    }

    /// Validate the conversion matrix before any processing begins.
    fn ensure_supported(
        source_format: SubtitleFormat,
        target_format: SubtitleFormat,
    ) -> Result<(), AppError> {
        let supported = match source_format {
            SubtitleFormat::Srt | SubtitleFormat::Vtt | SubtitleFormat::Sbv => matches!(
                target_format,
                SubtitleFormat::Srt
                    | SubtitleFormat::Vtt
                    | SubtitleFormat::Sbv
                    | SubtitleFormat::Ttml
            ),
            SubtitleFormat::Ssa => target_format == SubtitleFormat::Ssa,
            SubtitleFormat::Ttml => target_format == SubtitleFormat::Ttml,
            SubtitleFormat::PlainText => target_format == SubtitleFormat::PlainText,
        };

        if supported {
            Ok(())
        } else {
            Err(AppError::UnsupportedConversion {
                from: source_format.to_string(),
                to: target_format.to_string(),
            })
        }
    }
}
