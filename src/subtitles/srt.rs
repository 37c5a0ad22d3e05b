/*!
 * SubRip (.srt) parsing and serialization.
 *
 * Grammar: blocks separated by one or more blank lines. Within a block,
 * the first line is a sequence index (ignored - indices are regenerated
 * on output), the second is `start --> end`, and the remaining lines are
 * the cue text. Malformed blocks are skipped with a warning; the parse
 * as a whole always succeeds over the remaining valid blocks.
 */

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::subtitles::model::SubtitleEntry;
use crate::subtitles::timecode::TimeCode;

static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Parse SRT content into subtitle entries.
pub fn parse(content: &str) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();

    for block in BLOCK_SEPARATOR.split(content.trim()) {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            continue;
        }
        if lines.len() < 3 {
            warn!("Skipping SRT block with too few lines: {:?}", lines);
            continue;
        }

        // lines[0] is the input index; it is not trusted and not kept.
        let Some((start_raw, end_raw)) = lines[1].split_once("-->") else {
            warn!("Skipping SRT block without a timing line: {}", lines[1]);
            continue;
        };

        match (TimeCode::parse(start_raw), TimeCode::parse(end_raw)) {
            (Ok(start), Ok(end)) => {
                let text = lines[2..].join("\n");
                entries.push(SubtitleEntry::new(entries.len() + 1, start, end, text));
            }
            _ => {
                warn!("Skipping SRT block with malformed timestamps: {}", lines[1]);
            }
        }
    }

    entries
}

/// Serialize entries to SRT, regenerating 1-based sequential indices.
pub fn serialize(entries: &[SubtitleEntry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                entry.start.format_srt(),
                entry.end.format_srt(),
                entry.text
            )
        })
        .collect();

    blocks.join("\n")
}
