/*!
 * Subtitle parsing, timing normalization and re-serialization.
 *
 * Submodules:
 * - `timecode`: normalized timestamp with per-format textual encodings
 * - `format`: format tags and extension-based detection
 * - `model`: the entry and document model shared by all formats
 * - `srt`, `vtt`, `sbv`: entry-based parsers and serializers
 * - `ssa`, `ttml`: format-preserving in-place transforms
 * - `plain`: line-oriented plain text transform
 */

pub use self::format::SubtitleFormat;
pub use self::model::{Document, SubtitleEntry};
pub use self::timecode::TimeCode;

pub mod format;
pub mod model;
pub mod plain;
pub mod sbv;
pub mod srt;
pub mod ssa;
pub mod timecode;
pub mod ttml;
pub mod vtt;
