/*!
 * WebVTT to SubRip normalization.
 *
 * A single forward scan over the lines of a WebVTT document. Each line is
 * classified against the current [`NormalizerState`] and the classification
 * decides what, if anything, is emitted. Parsing is lenient: lines that fit no
 * rule (cue identifiers, stray text between cues) are classified as
 * [`VttLine::Unrecognized`] and dropped.
 */

use regex::Regex;
use once_cell::sync::Lazy;
use log::trace;
use crate::subtitle_processor::strip_byte_order_mark;

/// Token that opens every WebVTT file
pub const HEADER_TOKEN: &str = "WEBVTT";

/// Tokens that open a metadata block skipped up to the next blank line
pub const METADATA_TOKENS: [&str; 2] = ["STYLE", "NOTE"];

/// Delimiter between the two timestamps of a timing line
pub const TIMING_DELIMITER: &str = "-->";

/// HH:MM:SS.mmm, rewritten with a comma before the milliseconds
static VTT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2})\.(\d{3})").unwrap()
});

/// Cue settings removed from timing lines, applied in order
static CUE_SETTINGS_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\s+align:.*$").unwrap(),
        Regex::new(r"\s+position:.*$").unwrap(),
        Regex::new(r"\s+line:.*$").unwrap(),
    ]
});

/// Voice and class span tags removed from cue text, applied in order
static SPAN_TAG_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // <v Speaker>
        Regex::new(r"<v\s+[^>]+>").unwrap(),
        Regex::new(r"</v>").unwrap(),
        // <c.classname>
        Regex::new(r"<c[^>]*>").unwrap(),
        Regex::new(r"</c>").unwrap(),
    ]
});

/// Position of a line inside a skipped STYLE/NOTE block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker {
    /// Line starting with STYLE or NOTE
    Start,
    /// Any non-blank line while the block is open
    Body,
    /// Blank line closing the block
    End,
}

/// Classification of a single trimmed WebVTT line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VttLine<'a> {
    /// WEBVTT signature line
    Header,
    /// Part of a STYLE or NOTE block
    MetadataBlock(BlockMarker),
    /// Blank line closing the current cue
    Blank,
    /// Line carrying the `-->` delimiter
    TimingLine(&'a str),
    /// Cue text
    TextLine(&'a str),
    /// Anything else; discarded
    Unrecognized,
}

/// Counters collected while normalizing, reported in debug logs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub cues: usize,
    pub metadata_blocks: usize,
    pub dropped_lines: usize,
}

// @struct: Single-pass scan state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerState {
    // @field: Sequence number assigned to the next timing line
    pub next_seq_num: usize,

    // @field: A timing line was seen and no blank line has closed it yet
    pub in_cue: bool,

    // @field: Inside a STYLE/NOTE block
    pub skipping_metadata: bool,
}

impl Default for NormalizerState {
    fn default() -> Self {
        Self {
            next_seq_num: 1,
            in_cue: false,
            skipping_metadata: false,
        }
    }
}

impl NormalizerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a trimmed line against the current state
    pub fn classify<'a>(&self, line: &'a str) -> VttLine<'a> {
        if line.starts_with(HEADER_TOKEN) {
            VttLine::Header
        } else if METADATA_TOKENS.iter().any(|token| line.starts_with(token)) {
            VttLine::MetadataBlock(BlockMarker::Start)
        } else if self.skipping_metadata {
            if line.is_empty() {
                VttLine::MetadataBlock(BlockMarker::End)
            } else {
                VttLine::MetadataBlock(BlockMarker::Body)
            }
        } else if line.is_empty() {
            if self.in_cue {
                VttLine::Blank
            } else {
                VttLine::Unrecognized
            }
        } else if line.contains(TIMING_DELIMITER) {
            VttLine::TimingLine(line)
        } else if self.in_cue {
            VttLine::TextLine(line)
        } else {
            VttLine::Unrecognized
        }
    }

    /// Advance the state for a classified line, pushing emitted SubRip lines to `out`
    pub fn apply(&mut self, line: VttLine<'_>, out: &mut Vec<String>, stats: &mut NormalizeStats) {
        match line {
            VttLine::Header => {}
            VttLine::MetadataBlock(BlockMarker::Start) => {
                self.skipping_metadata = true;
                stats.metadata_blocks += 1;
            }
            VttLine::MetadataBlock(BlockMarker::Body) => {}
            VttLine::MetadataBlock(BlockMarker::End) => {
                self.skipping_metadata = false;
            }
            VttLine::Blank => {
                out.push(String::new());
                self.in_cue = false;
            }
            VttLine::TimingLine(text) => {
                out.push(self.next_seq_num.to_string());
                out.push(convert_timing_line(text));
                self.next_seq_num += 1;
                self.in_cue = true;
                stats.cues += 1;
            }
            VttLine::TextLine(text) => {
                out.push(strip_span_tags(text));
            }
            VttLine::Unrecognized => {
                stats.dropped_lines += 1;
            }
        }
    }
}

/// Rewrite a WebVTT timing line into SubRip form.
///
/// `00:00:01.000 --> 00:00:03.500 align:start` becomes `00:00:01,000 --> 00:00:03,500`.
pub fn convert_timing_line(line: &str) -> String {
    let converted = VTT_TIMESTAMP_REGEX.replace_all(line, "${1}:${2}:${3},${4}");
    CUE_SETTINGS_PATTERNS
        .iter()
        .fold(converted.into_owned(), |acc, re| re.replace(&acc, "").into_owned())
}

/// Remove `<v ...>`, `</v>`, `<c...>` and `</c>` tags, keeping the enclosed text
pub fn strip_span_tags(line: &str) -> String {
    SPAN_TAG_PATTERNS
        .iter()
        .fold(line.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// Convert WebVTT text to SubRip text
pub fn normalize(vtt_content: &str) -> String {
    normalize_with_stats(vtt_content).0
}

/// Convert WebVTT text to SubRip text and report what the scan saw
pub fn normalize_with_stats(vtt_content: &str) -> (String, NormalizeStats) {
    let mut state = NormalizerState::new();
    let mut stats = NormalizeStats::default();
    let mut out = Vec::new();

    for raw in strip_byte_order_mark(vtt_content).split('\n') {
        let line = raw.trim();
        let kind = state.classify(line);
        if kind == VttLine::Unrecognized && !line.is_empty() {
            trace!("Dropping unrecognized WebVTT line: {:?}", line);
        }
        state.apply(kind, &mut out, &mut stats);
    }

    (out.join("\n"), stats)
}
