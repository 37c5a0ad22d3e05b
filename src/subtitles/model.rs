/*!
 * Format-agnostic subtitle document model.
 *
 * Entry-based formats (SRT, VTT, SBV) parse into an ordered list of
 * [`SubtitleEntry`] values. SSA and TTML documents carry styling and
 * script metadata that must survive conversion untouched, so they are
 * kept as raw text and rewritten in place; the same applies to plain
 * text. The [`Document`] enum models both shapes.
 */

use log::warn;

use crate::errors::SubtitleError;
use crate::subtitles::format::SubtitleFormat;
use crate::subtitles::timecode::TimeCode;
use crate::subtitles::{sbv, srt, vtt};

/// A single subtitle cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    /// 1-based sequence number. Input indices are not trusted; this is
    /// regenerated on serialization.
    pub seq_num: usize,

    /// Display start time
    pub start: TimeCode,

    /// Display end time
    pub end: TimeCode,

    /// Text payload. Embedded line breaks are preserved verbatim.
    pub text: String,
}

impl SubtitleEntry {
    /// Create a new subtitle entry.
    ///
    /// An entry ending before it starts is kept (parsers are permissive)
    /// but logged, since consumers expect `end >= start`.
    pub fn new(seq_num: usize, start: TimeCode, end: TimeCode, text: String) -> Self {
        if end < start {
            warn!(
                "Subtitle entry {} ends before it starts ({} < {})",
                seq_num,
                end.as_ms(),
                start.as_ms()
            );
        }
        SubtitleEntry { seq_num, start, end, text }
    }
}

/// A parsed subtitle document, ready for translation and re-serialization.
#[derive(Debug, Clone)]
pub enum Document {
    /// Ordered cue list (SRT, VTT, SBV)
    Entries(Vec<SubtitleEntry>),

    /// Format-preserving raw content (SSA, TTML, plain text)
    Raw(String),
}

impl Document {
    /// Parse raw document text according to the declared source format.
    ///
    /// Entry-based formats recover from malformed blocks locally and
    /// never fail; a document where every block is malformed parses to
    /// an empty entry list.
    pub fn parse(content: &str, format: SubtitleFormat) -> Result<Self, SubtitleError> {
        match format {
            SubtitleFormat::Srt => Ok(Document::Entries(srt::parse(content))),
            SubtitleFormat::Vtt => Ok(Document::Entries(vtt::parse(content))),
            SubtitleFormat::Sbv => Ok(Document::Entries(sbv::parse(content))),
            SubtitleFormat::Ssa | SubtitleFormat::Ttml | SubtitleFormat::PlainText => {
                Ok(Document::Raw(content.to_string()))
            }
        }
    }

    /// Number of cues, where that is meaningful.
    pub fn entry_count(&self) -> Option<usize> {
        match self {
            Document::Entries(entries) => Some(entries.len()),
            Document::Raw(_) => None,
        }
    }
}
