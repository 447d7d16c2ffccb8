/*!
 * Structural anonymization of SubRip text.
 *
 * Blank lines, sequence numbers and timing lines are kept verbatim. Every other
 * line has each character that is not a space, tab, carriage return or newline
 * replaced by [`PLACEHOLDER`], so line count, line length and whitespace layout
 * survive unchanged. A byte order mark is kept where it stands and does not
 * turn a sequence number into content.
 */

use std::borrow::Cow;
use crate::errors::FileError;
use crate::subtitle_processor::BYTE_ORDER_MARK;
use crate::vtt_normalizer::TIMING_DELIMITER;

/// Character substituted for every content character
pub const PLACEHOLDER: char = 'X';

/// Characters kept in place on content lines
const PRESERVED_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Classification of a SubRip line, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only separator
    Blank,
    /// Digits-only cue number
    SequenceNumber,
    /// Line containing `-->`
    Timing,
    /// Cue text
    Content,
}

impl LineKind {
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Content)
    }
}

// @classifies: One line of SubRip text; a leading byte order mark is ignored
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim_start_matches(BYTE_ORDER_MARK).trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
        LineKind::SequenceNumber
    } else if line.contains(TIMING_DELIMITER) {
        LineKind::Timing
    } else {
        LineKind::Content
    }
}

fn mask_char(c: char) -> char {
    if PRESERVED_WHITESPACE.contains(&c) || c == BYTE_ORDER_MARK {
        c
    } else {
        PLACEHOLDER
    }
}

/// Anonymize a single line; structural lines are returned borrowed
pub fn anonymize_line(line: &str) -> Cow<'_, str> {
    match classify_line(line) {
        LineKind::Content => Cow::Owned(line.chars().map(mask_char).collect()),
        _ => Cow::Borrowed(line),
    }
}

/// Anonymize SubRip text line by line.
///
/// Lines are split on `\n` and rejoined with `\n`, so `\r\n` endings and a
/// trailing newline come out exactly as they went in.
pub fn anonymize(content: &str) -> String {
    content
        .split('\n')
        .map(anonymize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check that `anonymized` keeps the structure of `original`.
///
/// Line count, per-line character count, structural lines and whitespace
/// positions must all match; content characters must be the placeholder.
pub fn verify_structure(original: &str, anonymized: &str) -> Result<(), FileError> {
    let original_lines: Vec<&str> = original.split('\n').collect();
    let anonymized_lines: Vec<&str> = anonymized.split('\n').collect();

    if original_lines.len() != anonymized_lines.len() {
        return Err(FileError::Transform(format!(
            "line count changed from {} to {}",
            original_lines.len(),
            anonymized_lines.len()
        )));
    }

    for (idx, (before, after)) in original_lines.iter().zip(&anonymized_lines).enumerate() {
        let line_no = idx + 1;

        if classify_line(before).is_structural() {
            if before != after {
                return Err(FileError::Transform(format!(
                    "structural line {} was modified",
                    line_no
                )));
            }
            continue;
        }

        if before.chars().count() != after.chars().count() {
            return Err(FileError::Transform(format!(
                "line {} changed length",
                line_no
            )));
        }

        let layout_kept = before
            .chars()
            .zip(after.chars())
            .all(|(b, a)| a == mask_char(b));
        if !layout_kept {
            return Err(FileError::Transform(format!(
                "line {} does not match its anonymized layout",
                line_no
            )));
        }
    }

    Ok(())
}
