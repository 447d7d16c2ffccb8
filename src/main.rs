// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{error, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use std::process::ExitCode;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use subanon::app_config::{self, Config, OutputNaming};
use subanon::app_controller::Controller;
use subanon::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for OutputNaming to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliNaming {
    /// <name>_ANONYME.srt
    Batch,
    /// <name>_anonymise<ext>
    Single,
}

impl From<CliNaming> for OutputNaming {
    fn from(cli_naming: CliNaming) -> Self {
        match cli_naming {
            CliNaming::Batch => OutputNaming::Batch,
            CliNaming::Single => OutputNaming::Single,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for subanon
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subanon - Subtitle anonymizer for caption audits
///
/// Replaces every subtitle text character with 'X' while keeping sequence
/// numbers, timecodes and blank lines, so caption timing can be audited
/// without exposing the content.
#[derive(Parser, Debug)]
#[command(name = "subanon")]
#[command(version)]
#[command(about = "Anonymize SRT/VTT subtitles while preserving their structure")]
#[command(long_about = "subanon replaces all subtitle text with 'X' while preserving sequence numbers, \
timecodes and blank lines. WebVTT files are converted to SubRip first.

EXAMPLES:
    subanon movie.srt                          # Writes movie_ANONYME.srt
    subanon ep1.srt ep2.vtt ep3.srt            # Batch, one output per file
    subanon --naming single movie.srt          # Writes movie_anonymise.srt
    subanon movie.srt -o audit.srt             # Explicit output path
    subanon /captions/                         # Every .srt/.vtt in a directory
    subanon completions bash > subanon.bash    # Generate bash completions")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle files (.srt, .vtt) or directories to process
    #[arg(value_name = "INPUT_PATHS")]
    input_paths: Vec<PathBuf>,

    /// Output file path, only with a single input file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file naming scheme
    #[arg(short, long, value_enum)]
    naming: Option<CliNaming>,

    /// Configuration file path (JSON)
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

// @struct: Custom logger implementation; filtering is left to log::max_level
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger at the given level
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌",
            Level::Warn => "🚧",
            Level::Info => " ",
            Level::Debug => "🔍",
            Level::Trace => "📋",
        }
    }

    // @returns: ANSI colour for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                Self::get_color_for_level(record.level()),
                now,
                Self::get_emoji_for_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "subanon", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let pause = cli.pause;
    let (code, pause_on_exit) = match run_anonymize(cli) {
        Ok(result) => result,
        Err(e) => {
            error!("{:#}", e);
            (ExitCode::FAILURE, pause)
        }
    };

    if pause_on_exit {
        wait_for_enter();
    }

    code
}

fn run_anonymize(options: CommandLineOptions) -> Result<(ExitCode, bool)> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(naming) = &options.naming {
        config.naming = naming.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    config.pause_on_exit |= options.pause;

    log::set_max_level(config.log_level.to_level_filter());

    if options.input_paths.is_empty() {
        let mut cmd = CommandLineOptions::command();
        let _ = cmd.print_help();
        return Err(anyhow::anyhow!("At least one INPUT_PATH is required"));
    }

    let inputs = FileManager::expand_inputs(&options.input_paths);
    config.validate(options.output.as_deref(), inputs.len())?;

    info!("🔒 Anonymizing {} file(s)", inputs.len());

    let pause_on_exit = config.pause_on_exit;
    let controller = Controller::with_config(config);
    let report = controller.run_batch(&inputs, options.output.as_deref());

    let code = if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    Ok((code, pause_on_exit))
}

fn wait_for_enter() {
    eprint!("Press Enter to exit...");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}
