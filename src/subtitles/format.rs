/*!
 * Subtitle format tags and extension-based detection.
 */

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Result, anyhow};

/// Format family of a subtitle document.
///
/// `dfxp` and `xml` are aliases of TTML; `ass` is an alias of SSA.
/// Unrecognized extensions map to plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    /// SubRip (.srt)
    Srt,
    /// WebVTT (.vtt)
    Vtt,
    /// YouTube SBV (.sbv)
    Sbv,
    /// SubStation Alpha (.ssa / .ass)
    Ssa,
    /// Timed Text Markup Language (.ttml / .dfxp / .xml)
    Ttml,
    /// Plain text, one caption per line, no timing
    PlainText,
}

impl SubtitleFormat {
    /// Detect the format from a file extension tag, case-insensitively.
    /// Unknown tags fall back to plain text.
    pub fn from_extension(ext: &str) -> Self {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "srt" => Self::Srt,
            "vtt" => Self::Vtt,
            "sbv" => Self::Sbv,
            "ssa" | "ass" => Self::Ssa,
            "ttml" | "dfxp" | "xml" => Self::Ttml,
            _ => Self::PlainText,
        }
    }

    /// Detect the format from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .map(|ext| Self::from_extension(&ext.to_string_lossy()))
            .unwrap_or(Self::PlainText)
    }

    /// Canonical file extension for this format (without the dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
            Self::Sbv => "sbv",
            Self::Ssa => "ssa",
            Self::Ttml => "ttml",
            Self::PlainText => "txt",
        }
    }

    /// Whether documents in this format parse into a generic entry list.
    ///
    /// SSA and TTML documents carry format metadata that must survive
    /// untouched, so they are handled as format-preserving transforms
    /// instead.
    pub fn is_entry_based(&self) -> bool {
        matches!(self, Self::Srt | Self::Vtt | Self::Sbv)
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for SubtitleFormat {
    type Err = anyhow::Error;

    /// Parse an explicit format tag. Unlike extension detection this is
    /// strict: an unknown tag is an error, not plain text, because the
    /// user asked for it by name.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim_start_matches('.').to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            "sbv" => Ok(Self::Sbv),
            "ssa" | "ass" => Ok(Self::Ssa),
            "ttml" | "dfxp" | "xml" => Ok(Self::Ttml),
            "txt" => Ok(Self::PlainText),
            _ => Err(anyhow!("Unrecognized subtitle format: {}", s)),
        }
    }
}
