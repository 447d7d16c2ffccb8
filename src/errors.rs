/*!
 * Error types for the subanon application.
 *
 * This module contains custom error types for the file pipeline and the
 * subtitle data model, using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while processing a single input file
#[derive(Error, Debug)]
pub enum FileError {
    /// The input path does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input path has an extension other than .srt or .vtt
    #[error("Unsupported file format: {} (.srt or .vtt only)", .0.display())]
    UnsupportedExtension(PathBuf),

    /// Reading the input file failed
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the output file failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Another input of the same batch already wrote this output file
    #[error("Output {} was already written for another input; not overwriting it with {}", output.display(), input.display())]
    OutputCollision {
        /// Input that would have overwritten the file
        input: PathBuf,
        /// Output path claimed earlier in the batch
        output: PathBuf,
    },

    /// The anonymized text does not keep the structure of its source
    #[error("Transform failed: {0}")]
    Transform(String),
}

impl FileError {
    /// Short machine-friendly name of the error kind, logged with batch failures
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not-found",
            Self::UnsupportedExtension(_) => "unsupported-extension",
            Self::Read { .. } => "read",
            Self::Write { .. } => "write",
            Self::OutputCollision { .. } => "output-collision",
            Self::Transform(_) => "transform",
        }
    }
}

/// Errors that can occur when interpreting subtitle data
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubtitleError {
    /// Timestamp text does not match HH:MM:SS,mmm
    #[error("Invalid timestamp format: {0}")]
    InvalidTimestamp(String),

    /// Timestamp has out-of-range components
    #[error("Invalid time components in timestamp: {0}")]
    TimestampOutOfRange(String),
}
