// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;
use subtitles::SubtitleFormat;

mod app_config;
mod app_controller;
mod converter;
mod errors;
mod file_utils;
mod language_utils;
mod providers;
mod subtitles;
mod translation;

/// CLI wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Srt,
    Vtt,
    Sbv,
    Ssa,
    Ass,
    Ttml,
    Dfxp,
    Xml,
    Txt,
}

impl From<CliOutputFormat> for SubtitleFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Srt => SubtitleFormat::Srt,
            CliOutputFormat::Vtt => SubtitleFormat::Vtt,
            CliOutputFormat::Sbv => SubtitleFormat::Sbv,
            CliOutputFormat::Ssa | CliOutputFormat::Ass => SubtitleFormat::Ssa,
            CliOutputFormat::Ttml | CliOutputFormat::Dfxp | CliOutputFormat::Xml => {
                SubtitleFormat::Ttml
            }
            CliOutputFormat::Txt => SubtitleFormat::PlainText,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert and translate a subtitle file (default command)
    #[command(alias = "convert")]
    Convert(ConvertArgs),

    /// Generate shell completions for subconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input subtitle file to convert
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output file path (default: <input stem>.<target lang>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: same as input)
    #[arg(short = 'e', long, value_enum)]
    to: Option<CliOutputFormat>,

    /// Target language code (e.g., 'en', 'es', 'fr'); omit to convert
    /// without translating
    #[arg(short, long)]
    target_language: Option<String>,

    /// Source language code (default: auto-detect)
    #[arg(short, long)]
    source_language: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subconv - subtitle format converter and translator
///
/// Converts subtitle files between SRT, WebVTT, SBV, SSA/ASS, TTML and
/// plain text, optionally machine-translating the subtitle text.
#[derive(Parser, Debug)]
#[command(name = "subconv")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle format converter and translator")]
#[command(long_about = "subconv converts subtitle files between formats and optionally
translates their text into a target language.

EXAMPLES:
    subconv movie.srt -e vtt                   # Convert SRT to WebVTT
    subconv movie.srt -t fr                    # Translate to French, keep SRT
    subconv movie.vtt -e ttml -t es            # Convert and translate
    subconv -s en -t de movie.srt              # Explicit source language
    subconv movie.srt -o out/movie.de.srt -t de -f
    subconv completions bash > subconv.bash    # Generate bash completions

FORMATS:
    srt, vtt, sbv, ssa/ass, ttml/dfxp/xml, txt
    SSA and TTML inputs are format-preserving: only dialogue text is
    rewritten and they keep their own format on output.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file to convert
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file path (default: <input stem>.<target lang>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: same as input)
    #[arg(short = 'e', long, value_enum)]
    to: Option<CliOutputFormat>,

    /// Target language code (e.g., 'en', 'es', 'fr'); omit to convert
    /// without translating
    #[arg(short, long)]
    target_language: Option<String>,

    /// Source language code (default: auto-detect)
    #[arg(short, long)]
    source_language: Option<String>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{} {}[{}] {}\x1B[0m",
                now,
                color,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after loading the config if needed.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subconv", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args).await,
        None => {
            // Default behavior - use top-level args so a bare
            // `subconv file.srt` works without a subcommand.
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let convert_args = ConvertArgs {
                input_path,
                output: cli.output,
                to: cli.to,
                target_language: cli.target_language,
                source_language: cli.source_language,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args).await
        }
    }
}

async fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config: Config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = Some(target_lang.clone());
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller
        .run(
            &options.input_path,
            options.output,
            options.to.map(SubtitleFormat::from),
            options.force_overwrite,
        )
        .await
}
