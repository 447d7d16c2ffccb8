/*!
 * Tests for error types and conversions
 */

use std::error::Error;
use std::path::PathBuf;
use subanon::errors::{FileError, SubtitleError};

#[test]
fn test_fileError_notFound_shouldDisplayPath() {
    let error = FileError::NotFound(PathBuf::from("missing.srt"));
    let display = format!("{}", error);
    assert!(display.contains("File not found"));
    assert!(display.contains("missing.srt"));
    assert_eq!(error.kind(), "not-found");
}

#[test]
fn test_fileError_unsupportedExtension_shouldMentionFormats() {
    let error = FileError::UnsupportedExtension(PathBuf::from("notes.txt"));
    let display = format!("{}", error);
    assert!(display.contains("notes.txt"));
    assert!(display.contains(".srt or .vtt"));
    assert_eq!(error.kind(), "unsupported-extension");
}

#[test]
fn test_fileError_read_shouldExposeIoSource() {
    let error = FileError::Read {
        path: PathBuf::from("a.srt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(format!("{}", error).contains("Failed to read a.srt"));
    assert!(error.source().is_some());
    assert_eq!(error.kind(), "read");
}

#[test]
fn test_fileError_transform_shouldDisplayReason() {
    let error = FileError::Transform("line count changed".to_string());
    assert_eq!(format!("{}", error), "Transform failed: line count changed");
    assert_eq!(error.kind(), "transform");
}

#[test]
fn test_fileError_outputCollision_shouldNameBothPaths() {
    let error = FileError::OutputCollision {
        input: PathBuf::from("a.vtt"),
        output: PathBuf::from("a_ANONYME.srt"),
    };
    let message = format!("{}", error);

    assert!(message.contains("a_ANONYME.srt"));
    assert!(message.contains("a.vtt"));
    assert_eq!(error.kind(), "output-collision");
}

#[test]
fn test_subtitleError_invalidTimestamp_shouldDisplayInput() {
    let error = SubtitleError::InvalidTimestamp("1:2".to_string());
    assert_eq!(format!("{}", error), "Invalid timestamp format: 1:2");
}
