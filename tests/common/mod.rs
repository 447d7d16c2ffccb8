/*!
 * Common test utilities for the subanon test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Three-cue SubRip document used across tests
pub const SAMPLE_SRT: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.
On two lines.

3
00:00:10,000 --> 00:00:14,000
For testing purposes.
";

/// WebVTT document with a header, a STYLE block, a NOTE block, cue identifiers,
/// cue settings and voice/class spans
pub const SAMPLE_VTT: &str = "WEBVTT

STYLE
::cue { color: yellow }

NOTE this block is a comment
spanning two lines

intro
00:00:01.000 --> 00:00:03.500 align:start
<v John>Hi there</v>

00:00:04.000 --> 00:00:06.000 position:10%
<c.loud>Watch out!</c>
Second line

00:00:07.250 --> 00:00:09.000
Plain text
";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample SubRip file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_SRT)
}

/// Creates a sample WebVTT file for testing
pub fn create_test_vtt(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_VTT)
}
