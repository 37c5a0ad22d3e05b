/*!
 * YouTube SBV (.sbv) parsing and serialization.
 *
 * SBV is handled as a line-oriented state machine: a line containing
 * `-->` flushes any in-progress entry and starts a new one; other lines
 * accumulate into the current entry's text. A malformed timing line
 * aborts the current entry, so text lines before the next valid timing
 * line are dropped.
 */

use log::warn;

use crate::subtitles::model::SubtitleEntry;
use crate::subtitles::timecode::TimeCode;

/// Parse SBV content into subtitle entries.
pub fn parse(content: &str) -> Vec<SubtitleEntry> {
    let mut entries: Vec<SubtitleEntry> = Vec::new();
    let mut current: Option<SubtitleEntry> = None;

    for line in content.lines() {
        if line.contains("-->") {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }

            let parts: Vec<&str> = line.split("-->").collect();
            if parts.len() != 2 {
                warn!("Dropping malformed SBV timing line: {}", line);
                continue;
            }

            match (TimeCode::parse(parts[0]), TimeCode::parse(parts[1])) {
                (Ok(start), Ok(end)) => {
                    current = Some(SubtitleEntry::new(
                        entries.len() + 1,
                        start,
                        end,
                        String::new(),
                    ));
                }
                _ => {
                    // Orphaned text lines after this point are dropped
                    // until the next valid timing line.
                    warn!("Dropping malformed SBV timing line: {}", line);
                }
            }
        } else if let Some(entry) = current.as_mut() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !entry.text.is_empty() {
                entry.text.push('\n');
            }
            entry.text.push_str(trimmed);
        }
    }

    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    entries
}

/// Serialize entries to SBV: bare timed blocks, no header.
pub fn serialize(entries: &[SubtitleEntry]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{} --> {}\n{}\n",
                entry.start.format_period(),
                entry.end.format_period(),
                entry.text
            )
        })
        .collect();

    blocks.join("\n")
}
