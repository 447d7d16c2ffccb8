use log::{error, info, debug};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use crate::anonymizer;
use crate::app_config::Config;
use crate::errors::FileError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::{SubtitleDocument, SubtitleFormat};
use crate::vtt_normalizer;

// @module: Application controller for subtitle anonymization

/// Result of anonymizing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    // @field: Source file
    pub input: PathBuf,

    // @field: Written anonymized file
    pub output: PathBuf,

    // @field: Detected source format
    pub format: SubtitleFormat,

    // @field: Cues in the written file
    pub cue_count: usize,

    // @field: Lines in the written file
    pub line_count: usize,
}

/// Aggregate tally of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of files attempted
    pub total: usize,

    /// Files anonymized successfully
    pub outcomes: Vec<FileOutcome>,

    /// Failed files with the error that stopped them
    pub failures: Vec<(PathBuf, FileError)>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every attempted file succeeded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.succeeded() == self.total
    }
}

/// Main application controller for subtitle anonymization
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Anonymize a single file.
    ///
    /// WebVTT input is normalized to SubRip first. The output file is written only
    /// once the anonymized text has passed the structure check.
    pub fn process_file(&self, input: &Path, output_override: Option<&Path>) -> Result<FileOutcome, FileError> {
        self.process_file_claiming(input, output_override, &mut HashSet::new())
    }

    /// Same as [`Controller::process_file`], refusing outputs already in `written`.
    ///
    /// The output path is added to `written` before the file is written.
    fn process_file_claiming(
        &self,
        input: &Path,
        output_override: Option<&Path>,
        written: &mut HashSet<PathBuf>,
    ) -> Result<FileOutcome, FileError> {
        let format = FileManager::detect_format(input)?;
        let content = FileManager::read_to_string(input)?;

        let srt_content = match format {
            SubtitleFormat::WebVtt => {
                info!("🔄 Converting VTT → SRT: {}", Self::display_name(input));
                let (converted, stats) = vtt_normalizer::normalize_with_stats(&content);
                debug!(
                    "Normalized {} cue(s), skipped {} metadata block(s), dropped {} line(s)",
                    stats.cues, stats.metadata_blocks, stats.dropped_lines
                );
                converted
            }
            SubtitleFormat::SubRip => content,
        };

        let anonymized = anonymizer::anonymize(&srt_content);
        anonymizer::verify_structure(&srt_content, &anonymized)?;

        let source_doc = SubtitleDocument::parse_srt(&srt_content);
        let anonymized_doc = SubtitleDocument::parse_srt(&anonymized);
        if anonymized_doc.cue_count() != source_doc.cue_count() {
            return Err(FileError::Transform(format!(
                "cue count changed from {} to {}",
                source_doc.cue_count(),
                anonymized_doc.cue_count()
            )));
        }
        if !source_doc.is_dense_numbering() {
            debug!("{}: sequence numbers are not 1..{}", Self::display_name(input), source_doc.cue_count());
        }

        let output = match output_override {
            Some(path) => path.to_path_buf(),
            None => FileManager::generate_output_path(input, self.config.naming, format),
        };
        if !written.insert(output.clone()) {
            return Err(FileError::OutputCollision {
                input: input.to_path_buf(),
                output,
            });
        }
        FileManager::write_to_file(&output, &anonymized)?;

        let outcome = FileOutcome {
            input: input.to_path_buf(),
            output,
            format,
            cue_count: anonymized_doc.cue_count(),
            line_count: anonymized.split('\n').count(),
        };

        info!("✅ Anonymized file: {}", Self::display_name(&outcome.output));
        debug!(
            "{} ({}) → {} ({} cue(s), {} text line(s), {} line(s), {} of timed captions)",
            outcome.input.display(),
            outcome.format,
            outcome.output.display(),
            outcome.cue_count,
            anonymized_doc.line_count(),
            outcome.line_count,
            SubtitleDocument::format_timestamp(anonymized_doc.total_duration_ms())
        );

        Ok(outcome)
    }

    /// Anonymize every input, continuing past failures.
    ///
    /// Each failure is logged with the offending file and recorded in the report.
    /// An input whose output path was already written earlier in the batch fails
    /// instead of overwriting it.
    pub fn run_batch(&self, inputs: &[PathBuf], output_override: Option<&Path>) -> BatchReport {
        let mut report = BatchReport {
            total: inputs.len(),
            ..BatchReport::default()
        };
        let mut written = HashSet::new();

        debug!("Output naming: {}", self.config.naming);

        let progress_bar = if inputs.len() > 1 {
            let pb = ProgressBar::new(inputs.len() as u64);
            let template_result = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
                .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(template_result.progress_chars("█▓▒░"));
            pb
        } else {
            ProgressBar::hidden()
        };

        for input in inputs {
            progress_bar.set_message(Self::display_name(input));

            let result = progress_bar.suspend(|| self.process_file_claiming(input, output_override, &mut written));
            match result {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(e) => {
                    progress_bar.suspend(|| {
                        error!("Error processing '{}' [{}]: {}", input.display(), e.kind(), e)
                    });
                    report.failures.push((input.clone(), e));
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        info!(
            "{}/{} file(s) anonymized successfully, {} failed",
            report.succeeded(),
            report.total,
            report.failed()
        );

        report
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }
}
