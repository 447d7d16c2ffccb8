use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles loading and validating the optional JSON settings file.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Output file naming scheme
    #[serde(default)]
    pub naming: OutputNaming,

    /// Wait for Enter before exiting, for drag-and-drop launches
    #[serde(default)]
    pub pause_on_exit: bool,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How output files are named
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputNaming {
    // @naming: <stem>_ANONYME.srt
    #[default]
    Batch,
    // @naming: <stem>_anonymise<ext>
    Single,
}

impl std::fmt::Display for OutputNaming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Batch => write!(f, "batch"),
            Self::Single => write!(f, "single"),
        }
    }
}

impl std::str::FromStr for OutputNaming {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "batch" => Ok(Self::Batch),
            "single" => Ok(Self::Single),
            _ => Err(anyhow::anyhow!("Invalid output naming: {}", s)),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the run against this configuration.
    ///
    /// An explicit output path only makes sense for exactly one input file.
    pub fn validate(&self, output: Option<&Path>, input_count: usize) -> Result<()> {
        if input_count == 0 {
            return Err(anyhow::anyhow!("No subtitle files to process"));
        }
        if output.is_some() && input_count != 1 {
            return Err(anyhow::anyhow!(
                "--output requires exactly one input file, got {}",
                input_count
            ));
        }
        Ok(())
    }
}
