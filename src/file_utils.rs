use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use walkdir::WalkDir;
use crate::app_config::OutputNaming;
use crate::errors::FileError;
use crate::subtitle_processor::SubtitleFormat;

// @module: File and directory utilities

/// Suffix of files produced with batch naming
pub const BATCH_SUFFIX: &str = "_ANONYME";

/// Suffix of files produced with single-file naming
pub const SINGLE_SUFFIX: &str = "_anonymise";

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Determine the subtitle format of an input file from its extension
    pub fn detect_format<P: AsRef<Path>>(path: P) -> Result<SubtitleFormat, FileError> {
        let path = path.as_ref();

        if !Self::file_exists(path) {
            return Err(FileError::NotFound(path.to_path_buf()));
        }

        SubtitleFormat::from_path(path)
            .ok_or_else(|| FileError::UnsupportedExtension(path.to_path_buf()))
    }

    // @generates: Output path next to the input file
    // @params: input_file, naming, format of the input
    pub fn generate_output_path<P: AsRef<Path>>(
        input_file: P,
        naming: OutputNaming,
        format: SubtitleFormat,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();

        let output_filename = match naming {
            OutputNaming::Batch => format!("{}{}.srt", stem, BATCH_SUFFIX),
            OutputNaming::Single => {
                // WebVTT input is written as SubRip
                let ext = match format {
                    SubtitleFormat::SubRip => input_file
                        .extension()
                        .map(|ext| ext.to_string_lossy().into_owned())
                        .unwrap_or_else(|| format.extension().to_string()),
                    SubtitleFormat::WebVtt => SubtitleFormat::SubRip.extension().to_string(),
                };
                format!("{}{}.{}", stem, SINGLE_SUFFIX, ext)
            }
        };

        input_file.with_file_name(output_filename)
    }

    /// True for files this tool wrote itself
    pub fn is_generated_output<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref()
            .file_stem()
            .map(|stem| {
                let stem = stem.to_string_lossy();
                stem.ends_with(BATCH_SUFFIX) || stem.ends_with(SINGLE_SUFFIX)
            })
            .unwrap_or(false)
    }

    /// Expand directory arguments into the subtitle files they contain.
    ///
    /// File arguments, including missing ones, pass through untouched so they are
    /// reported by the pipeline. Files found in directories are sorted and exclude
    /// previously generated outputs.
    pub fn expand_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut result = Vec::new();

        for input in inputs {
            if !Self::dir_exists(input) {
                result.push(input.clone());
                continue;
            }

            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!("Failed to read directory entry in {}: {}", input.display(), e);
                        None
                    }
                })
                .map(|entry| entry.into_path())
                .filter(|path| path.is_file())
                .filter(|path| SubtitleFormat::from_path(path).is_some())
                .filter(|path| !Self::is_generated_output(path))
                .collect();
            found.sort();

            debug!("Found {} subtitle file(s) in {}", found.len(), input.display());
            result.extend(found);
        }

        result
    }

    /// Read a whole file as UTF-8 text
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a whole string to a file, replacing any existing content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FileError> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
