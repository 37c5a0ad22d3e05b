/*!
 * Normalized subtitle timestamp representation.
 *
 * A `TimeCode` is a count of milliseconds since the start of the document.
 * Parsing is deliberately loose: real-world files mix comma and period as
 * the sub-second separator regardless of their nominal format, so both are
 * accepted on input. Formatting is strict per target format.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;
use crate::subtitles::format::SubtitleFormat;

// Hours are optional on input: SBV and short-form VTT omit them.
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d{1,4}):)?(\d{1,2}):(\d{1,2})[,.](\d{1,3})$").unwrap()
});

/// A normalized subtitle timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeCode {
    ms: u64,
}

impl TimeCode {
    /// Create a timecode from a millisecond count.
    pub fn from_ms(ms: u64) -> Self {
        TimeCode { ms }
    }

    /// Total milliseconds since document start.
    pub fn as_ms(&self) -> u64 {
        self.ms
    }

    /// Parse a timestamp string in any of the supported textual encodings.
    ///
    /// Accepts `HH:MM:SS,mmm` (SRT), `HH:MM:SS.mmm` (VTT/SBV/TTML) and
    /// `H:MM:SS.CC` (SSA centiseconds), with the hours component optional.
    /// Fraction digits scale by count: `.5` is 500 ms, `.50` is 500 ms,
    /// `.500` is 500 ms.
    pub fn parse(raw: &str) -> Result<Self, SubtitleError> {
        let trimmed = raw.trim();
        let caps = TIMECODE_REGEX
            .captures(trimmed)
            .ok_or_else(|| SubtitleError::MalformedTimestamp(trimmed.to_string()))?;

        let hours: u64 = caps.get(1).map_or(Ok(0), |m| m.as_str().parse()).map_err(|_| {
            SubtitleError::MalformedTimestamp(trimmed.to_string())
        })?;
        let minutes: u64 = caps[2].parse().unwrap_or(0);
        let seconds: u64 = caps[3].parse().unwrap_or(0);
        let fraction = &caps[4];

        if minutes >= 60 || seconds >= 60 {
            return Err(SubtitleError::MalformedTimestamp(trimmed.to_string()));
        }

        // Scale the sub-second fraction by its digit count so that ".5",
        // ".50" and ".500" all mean 500 ms.
        let digits: u64 = fraction.parse().unwrap_or(0);
        let millis = match fraction.len() {
            1 => digits * 100,
            2 => digits * 10,
            _ => digits,
        };

        Ok(TimeCode {
            ms: (hours * 3600 + minutes * 60 + seconds) * 1000 + millis,
        })
    }

    /// Format for SRT: `HH:MM:SS,mmm`.
    pub fn format_srt(&self) -> String {
        let (h, m, s, ms) = self.split();
        format!("{:02}:{:02}:{:02},{:03}", h, m, s, ms)
    }

    /// Format with a period separator: `HH:MM:SS.mmm` (VTT, SBV, TTML).
    pub fn format_period(&self) -> String {
        let (h, m, s, ms) = self.split();
        format!("{:02}:{:02}:{:02}.{:03}", h, m, s, ms)
    }

    /// Format for SSA/ASS: `H:MM:SS.CC`.
    ///
    /// Centiseconds are obtained by truncating the millisecond value, not
    /// rounding. This matches the long-standing behavior of existing
    /// converters and is relied on by downstream tooling.
    pub fn format_ssa(&self) -> String {
        let (h, m, s, ms) = self.split();
        format!("{}:{:02}:{:02}.{:02}", h, m, s, ms / 10)
    }

    /// Format for a target subtitle format.
    pub fn format_for(&self, format: SubtitleFormat) -> String {
        match format {
            SubtitleFormat::Srt => self.format_srt(),
            SubtitleFormat::Ssa => self.format_ssa(),
            SubtitleFormat::Vtt
            | SubtitleFormat::Sbv
            | SubtitleFormat::Ttml
            | SubtitleFormat::PlainText => self.format_period(),
        }
    }

    fn split(&self) -> (u64, u64, u64, u64) {
        let hours = self.ms / 3_600_000;
        let minutes = (self.ms % 3_600_000) / 60_000;
        let seconds = (self.ms % 60_000) / 1_000;
        let millis = self.ms % 1_000;
        (hours, minutes, seconds, millis)
    }
}
