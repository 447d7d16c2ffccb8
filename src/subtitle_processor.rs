use std::fmt;
use std::path::Path;
use regex::Regex;
use once_cell::sync::Lazy;
use crate::errors::SubtitleError;

// @module: Subtitle data model and lenient SubRip parsing

/// UTF-8 byte order mark some editors put at the start of subtitle files
pub const BYTE_ORDER_MARK: char = '\u{feff}';

// @const: SRT timing line regex
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2},\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

/// Remove a leading byte order mark, if any
pub fn strip_byte_order_mark(content: &str) -> &str {
    content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content)
}

/// Subtitle formats accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    /// SubRip (.srt)
    SubRip,
    /// WebVTT (.vtt)
    WebVtt,
}

impl SubtitleFormat {
    // @returns: Format for a file extension, case-insensitive, without the dot
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "srt" => Some(Self::SubRip),
            "vtt" => Some(Self::WebVtt),
            _ => None,
        }
    }

    // @returns: Format for a path based on its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::SubRip => "srt",
            Self::WebVtt => "vtt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubRip => write!(f, "SRT"),
            Self::WebVtt => write!(f, "VTT"),
        }
    }
}

// @struct: Start and end of a cue in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl TimeRange {
    /// Duration of the range; zero when the end precedes the start
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Sequence number, when the cue carried one
    pub seq_num: Option<usize>,

    // @field: Timing line exactly as written
    pub timing_line: String,

    // @field: Parsed timing, None when the timing line is not well-formed
    pub time_range: Option<TimeRange>,

    // @field: Text lines
    pub lines: Vec<String>,
}

/// Ordered cues of a SubRip-shaped document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleDocument {
    /// Cues in file order
    pub cues: Vec<Cue>,
}

impl SubtitleDocument {
    /// Parse SubRip text without failing.
    ///
    /// Every line containing `-->` opens a new cue, whether or not a blank line
    /// separated it from the previous one. A digits-only line right before it is
    /// the sequence number; the following non-blank lines up to the next blank
    /// line or timing line are cue text. Lines outside any cue are ignored.
    pub fn parse_srt(content: &str) -> Self {
        let lines: Vec<&str> = strip_byte_order_mark(content).lines().collect();
        let mut cues = Vec::new();
        let mut current: Option<Cue> = None;

        for (idx, line) in lines.iter().enumerate() {
            if line.contains("-->") {
                let number_line = idx.checked_sub(1).map(|prev| lines[prev]);
                let seq_num = number_line.and_then(Self::parse_sequence_number);

                if let Some(mut cue) = current.take() {
                    // The number line of this cue was collected as text of the previous one
                    if seq_num.is_some() && cue.lines.last().map(String::as_str) == number_line {
                        cue.lines.pop();
                    }
                    cues.push(cue);
                }

                let timing_line = line.trim();
                current = Some(Cue {
                    seq_num,
                    timing_line: timing_line.to_string(),
                    time_range: Self::parse_timing_line(timing_line),
                    lines: Vec::new(),
                });
            } else if line.trim().is_empty() {
                if let Some(cue) = current.take() {
                    cues.push(cue);
                }
            } else if let Some(cue) = current.as_mut() {
                cue.lines.push(line.to_string());
            }
        }
        cues.extend(current);

        SubtitleDocument { cues }
    }

    fn parse_sequence_number(line: &str) -> Option<usize> {
        let trimmed = line.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        trimmed.parse().ok()
    }

    // @parses: "HH:MM:SS,mmm --> HH:MM:SS,mmm"
    pub fn parse_timing_line(line: &str) -> Option<TimeRange> {
        let caps = TIMESTAMP_REGEX.captures(line)?;
        let start_ms = Self::parse_timestamp(&caps[1]).ok()?;
        let end_ms = Self::parse_timestamp(&caps[2]).ok()?;
        Some(TimeRange { start_ms, end_ms })
    }

    pub fn cue_count(&self) -> usize {
        self.cues.len()
    }

    /// Number of cue text lines across the document
    pub fn line_count(&self) -> usize {
        self.cues.iter().map(|cue| cue.lines.len()).sum()
    }

    /// Sum of the durations of every cue with a parseable timing line
    pub fn total_duration_ms(&self) -> u64 {
        self.cues
            .iter()
            .filter_map(|cue| cue.time_range)
            .map(|range| range.duration_ms())
            .sum()
    }

    /// True when the sequence numbers are exactly 1..=N in order
    pub fn is_dense_numbering(&self) -> bool {
        self.cues
            .iter()
            .enumerate()
            .all(|(idx, cue)| cue.seq_num == Some(idx + 1))
    }

    /// Parse a timestamp to milliseconds; accepts both `,` and `.` before the milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64, SubtitleError> {
        let parts: Vec<&str> = timestamp.trim().split(&[':', ',', '.'][..]).collect();
        if parts.len() != 4 {
            return Err(SubtitleError::InvalidTimestamp(timestamp.to_string()));
        }

        let mut values = [0u64; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .parse()
                .map_err(|_| SubtitleError::InvalidTimestamp(timestamp.to_string()))?;
        }
        let [hours, minutes, seconds, millis] = values;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(SubtitleError::TimestampOutOfRange(timestamp.to_string()));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}
