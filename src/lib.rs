/*!
 * # subanon - Subtitle anonymizer for caption audits
 *
 * A Rust library that produces anonymized copies of subtitle files. All cue text
 * is replaced by a placeholder character while sequence numbers, timing lines
 * and blank separators are kept, so a third party can audit caption timing and
 * structure without seeing the content.
 *
 * ## Features
 *
 * - SubRip (.srt) and WebVTT (.vtt) input
 * - WebVTT normalized to SubRip structure (renumbering, comma milliseconds,
 *   cue settings and voice/class tags stripped, STYLE/NOTE blocks skipped)
 * - Line count, line length and whitespace layout preserved exactly
 * - Batch processing that keeps going when a file fails
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: Subtitle formats and the cue data model
 * - `vtt_normalizer`: WebVTT to SubRip conversion
 * - `anonymizer`: Structural anonymization and its verification
 * - `file_utils`: File system operations and output naming
 * - `app_config`: Configuration management
 * - `app_controller`: Per-file pipeline and batch runs
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod anonymizer;
pub mod file_utils;
pub mod subtitle_processor;
pub mod vtt_normalizer;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, OutputNaming};
pub use anonymizer::{anonymize, PLACEHOLDER};
pub use app_controller::{BatchReport, Controller};
pub use subtitle_processor::{Cue, SubtitleDocument, SubtitleFormat};
pub use vtt_normalizer::normalize;
pub use errors::{FileError, SubtitleError};
