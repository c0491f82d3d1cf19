//! Upstream dump parser.
//!
//! The dump is a loose, hand-maintained text file: entries are separated by
//! blank lines, and each entry is a handful of lines naming an identifier,
//! a friend code, and/or a PUID in no fixed order. Parsing is best-effort
//! and lossy: malformed blocks are skipped, never an error.

use crate::model::{Record, UNKNOWN, UNKNOWN_ID};

/// Minimum stripped-hex length for a line to count as a PUID.
const PUID_MIN_HEX: usize = 16;

/// Parse a raw dump into remote-origin records.
///
/// Blocks are separated by one or more whitespace-only lines. Within a
/// block each trimmed, non-empty line is classified in order:
/// contains `#` → friend code (last match wins); strips to ≥ 16 hex
/// characters → PUID, kept in stripped form (last match wins); otherwise
/// the first unclaimed line becomes the identifier. A block yields a
/// record only if at least one field was found.
pub fn parse_text(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if let Some(record) = parse_block(&block) {
                records.push(record);
            }
            block.clear();
        } else {
            block.push(trimmed);
        }
    }
    if let Some(record) = parse_block(&block) {
        records.push(record);
    }

    records
}

fn parse_block(lines: &[&str]) -> Option<Record> {
    let mut identifier = String::new();
    let mut friend_code = String::new();
    let mut puid = String::new();

    for line in lines {
        if line.contains('#') {
            friend_code = (*line).to_string();
            continue;
        }
        let hex = strip_non_hex(line);
        if hex.len() >= PUID_MIN_HEX {
            puid = hex;
            continue;
        }
        if identifier.is_empty() {
            identifier = (*line).to_string();
        }
    }

    if identifier.is_empty() && friend_code.is_empty() && puid.is_empty() {
        return None;
    }

    Some(Record::remote(
        if identifier.is_empty() { UNKNOWN_ID.to_string() } else { identifier },
        if friend_code.is_empty() { UNKNOWN.to_string() } else { friend_code },
        if puid.is_empty() { UNKNOWN.to_string() } else { puid },
    ))
}

/// Keep only hexadecimal characters, preserving case.
fn strip_non_hex(line: &str) -> String {
    line.chars().filter(char::is_ascii_hexdigit).collect()
}

/// Serialize records back into the dump's block format.
///
/// One block per record: identifier, friend code, PUID, each on its own
/// line. Sentinel fields are omitted so the output re-parses to
/// equivalent records.
pub fn to_block_text(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        let mut lines: Vec<&str> = Vec::new();
        if record.identifier != UNKNOWN_ID {
            lines.push(&record.identifier);
        }
        if record.friend_code != UNKNOWN {
            lines.push(&record.friend_code);
        }
        if record.puid != UNKNOWN {
            lines.push(&record.puid);
        }
        if lines.is_empty() {
            continue;
        }
        out.push_str(&lines.join("\n"));
        out.push_str("\n\n");
    }
    out
}
