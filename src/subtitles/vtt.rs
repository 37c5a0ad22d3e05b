/*!
 * WebVTT (.vtt) parsing and serialization.
 *
 * Parsing scans each blank-line-separated block for the first line
 * containing `-->` and treats every other line as cue text. Blocks with
 * no timing line - including the `WEBVTT` header block and NOTE blocks -
 * are discarded silently.
 */

use log::warn;

use crate::subtitles::model::SubtitleEntry;
use crate::subtitles::timecode::TimeCode;

/// Parse WebVTT content into subtitle entries.
pub fn parse(content: &str) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();

    for block in content.trim().split("\n\n") {
        if !block.contains("-->") {
            continue;
        }

        let mut timing_line: Option<&str> = None;
        let mut text_lines: Vec<&str> = Vec::new();

        for line in block.lines() {
            if timing_line.is_none() && line.contains("-->") {
                timing_line = Some(line);
            } else {
                text_lines.push(line);
            }
        }

        let Some(timing) = timing_line else { continue };
        let Some((start_raw, end_raw)) = timing.split_once("-->") else { continue };

        // The end timestamp may be followed by cue settings
        // ("00:00:04.000 align:start"); only the first token is timing.
        let end_token = end_raw.split_whitespace().next().unwrap_or("");

        match (TimeCode::parse(start_raw), TimeCode::parse(end_token)) {
            (Ok(start), Ok(end)) => {
                let text = text_lines.join("\n");
                entries.push(SubtitleEntry::new(entries.len() + 1, start, end, text));
            }
            _ => {
                warn!("Skipping VTT block with malformed timestamps: {}", timing);
            }
        }
    }

    entries
}

/// Serialize entries to WebVTT: a `WEBVTT` header followed by timed cues.
pub fn serialize(entries: &[SubtitleEntry]) -> String {
    let mut blocks: Vec<String> = Vec::with_capacity(entries.len() + 1);
    blocks.push("WEBVTT\n".to_string());

    for entry in entries {
        blocks.push(format!(
            "{} --> {}\n{}\n",
            entry.start.format_period(),
            entry.end.format_period(),
            entry.text
        ));
    }

    blocks.join("\n")
}
