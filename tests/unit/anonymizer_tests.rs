/*!
 * Tests for structural anonymization
 */

use subanon::anonymizer::{anonymize, anonymize_line, classify_line, verify_structure, LineKind, PLACEHOLDER};
use subanon::errors::FileError;
use crate::common;

/// Test the classification priority of each line kind
#[test]
fn test_classify_line_withEachKind_shouldClassifyCorrectly() {
    assert_eq!(classify_line(""), LineKind::Blank);
    assert_eq!(classify_line("  \t\r"), LineKind::Blank);
    assert_eq!(classify_line("42"), LineKind::SequenceNumber);
    assert_eq!(classify_line(" 7 \r"), LineKind::SequenceNumber);
    assert_eq!(classify_line("00:00:01,000 --> 00:00:02,000"), LineKind::Timing);
    assert_eq!(classify_line("wait --> there"), LineKind::Timing);
    assert_eq!(classify_line("42 apples"), LineKind::Content);
    assert_eq!(classify_line("-1"), LineKind::Content);
}

/// Test the documented example line
#[test]
fn test_anonymize_line_withPunctuation_shouldReplaceEveryNonWhitespace() {
    assert_eq!(anonymize_line("Hello, world!"), "XXXXXX XXXXXX");
}

/// Test that tabs and carriage returns stay in place
#[test]
fn test_anonymize_line_withTabsAndCarriageReturn_shouldKeepWhitespace() {
    assert_eq!(anonymize_line("\tab c\r"), "\tXX X\r");
}

/// Test that non-ASCII characters become a single placeholder each
#[test]
fn test_anonymize_line_withAccents_shouldKeepCharacterCount() {
    let line = "Ça va, très bien";
    let anonymized = anonymize_line(line);
    assert_eq!(anonymized, "XX XXX XXXX XXXX");
    assert_eq!(anonymized.chars().count(), line.chars().count());
}

/// Test that structural lines are returned unchanged
#[test]
fn test_anonymize_line_withStructuralLines_shouldBorrowUnchanged() {
    for line in ["", "   ", "12", "00:00:01,000 --> 00:00:03,500"] {
        assert_eq!(anonymize_line(line), line);
    }
}

/// Test a full document
#[test]
fn test_anonymize_withSampleSrt_shouldKeepStructure() {
    let anonymized = anonymize(common::SAMPLE_SRT);

    let expected = "1
00:00:01,000 --> 00:00:04,000
XXXX XX X XXXX XXXXXXXXX

2
00:00:05,000 --> 00:00:09,000
XX XXXXXXXX XXXXXXXX XXXXXXXX
XX XXX XXXXXX

3
00:00:10,000 --> 00:00:14,000
XXX XXXXXXX XXXXXXXXX
";
    assert_eq!(anonymized, expected);
}

/// Test that line count and every line length are preserved
#[test]
fn test_anonymize_withCrlfInput_shouldPreserveLineCountAndLengths() {
    let input = "1\r\n00:00:01,000 --> 00:00:02,000\r\nBonjour à tous\r\n\r\n";
    let output = anonymize(input);

    assert_eq!(output, "1\r\n00:00:01,000 --> 00:00:02,000\r\nXXXXXXX X XXXX\r\n\r\n");

    let input_lines: Vec<&str> = input.split('\n').collect();
    let output_lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(input_lines.len(), output_lines.len());
    for (before, after) in input_lines.iter().zip(&output_lines) {
        assert_eq!(before.chars().count(), after.chars().count());
    }
}

/// Test that anonymization is a fixed point on its own output
#[test]
fn test_anonymize_whenRunTwice_shouldBeIdempotent() {
    let once = anonymize(common::SAMPLE_SRT);
    let twice = anonymize(&once);
    assert_eq!(once, twice);
}

/// Test that a content line never contains anything but placeholders and whitespace
#[test]
fn test_anonymize_withContentLines_shouldOnlyContainPlaceholders() {
    let output = anonymize("1\n00:00:01,000 --> 00:00:02,000\n<i>It's 3 o'clock</i>\n");
    let content = output.lines().nth(2).unwrap();
    assert!(content.chars().all(|c| c == PLACEHOLDER || c == ' '));
    assert_eq!(content, "XXXXXXX X XXXXXXXXXXX");
}

/// Test that the structure check accepts real output
#[test]
fn test_verify_structure_withAnonymizedOutput_shouldPass() {
    let output = anonymize(common::SAMPLE_SRT);
    assert!(verify_structure(common::SAMPLE_SRT, &output).is_ok());
}

/// Test that the structure check rejects a dropped line
#[test]
fn test_verify_structure_withMissingLine_shouldFail() {
    let result = verify_structure("1\nHello", "1");
    assert!(matches!(result, Err(FileError::Transform(_))));
}

/// Test that the structure check rejects a modified timing line
#[test]
fn test_verify_structure_withModifiedTiming_shouldFail() {
    let result = verify_structure(
        "00:00:01,000 --> 00:00:02,000",
        "00:00:01,000 --> 00:00:02,500",
    );
    assert!(matches!(result, Err(FileError::Transform(_))));
}

/// Test that the structure check rejects moved whitespace
#[test]
fn test_verify_structure_withShiftedWhitespace_shouldFail() {
    let result = verify_structure("ab cd", "XXX X");
    assert!(matches!(result, Err(FileError::Transform(_))));
}

/// Test that a leading byte order mark keeps the first sequence number intact
#[test]
fn test_anonymize_withByteOrderMark_shouldKeepFirstSequenceNumber() {
    let original = "\u{feff}1\n00:00:01,000 --> 00:00:02,000\nHi\n";
    let anonymized = anonymize(original);

    assert_eq!(classify_line("\u{feff}1"), LineKind::SequenceNumber);
    assert_eq!(anonymized, "\u{feff}1\n00:00:01,000 --> 00:00:02,000\nXX\n");
    assert!(verify_structure(original, &anonymized).is_ok());
}
