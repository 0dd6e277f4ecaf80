// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use yakugo::app_config::{Config, LogLevel};
use yakugo::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a glossary dataset into Japanese
    Translate {
        /// Input dataset (JSON array of terms)
        #[arg(short, long, default_value = "glossary.json")]
        input: PathBuf,

        /// Output file for the translated dataset
        #[arg(short, long, default_value = "glossary_ja.json")]
        output: PathBuf,
    },

    /// Continue an interrupted run from a checkpoint file
    Resume {
        /// Checkpoint file written by a previous run
        #[arg(value_name = "CHECKPOINT")]
        checkpoint: PathBuf,

        /// Input dataset (JSON array of terms)
        #[arg(short, long, default_value = "glossary.json")]
        input: PathBuf,

        /// Output file for the translated dataset
        #[arg(short, long, default_value = "glossary_ja.json")]
        output: PathBuf,
    },

    /// Validate a translated dataset against its source
    Validate {
        /// Original dataset
        #[arg(long, default_value = "glossary.json")]
        original: PathBuf,

        /// Translated dataset
        #[arg(long, default_value = "glossary_ja.json")]
        translated: PathBuf,

        /// Report output file
        #[arg(short, long, default_value = "validation_report.txt")]
        report: PathBuf,
    },

    /// Generate shell completions for yakugo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Yakugo - English-to-Japanese glossary translation pipeline
///
/// Translates a software-engineering glossary dataset term by term through
/// a browser-based translation sidecar, with checkpointing and resume, and
/// validates translated datasets against their source.
#[derive(Parser, Debug)]
#[command(name = "yakugo")]
#[command(version = "1.0.0")]
#[command(about = "Batch glossary translation and validation")]
#[command(long_about = "Yakugo translates an English glossary dataset into Japanese through a
translation sidecar and validates the result.

EXAMPLES:
    yakugo translate                                  # glossary.json -> glossary_ja.json
    yakugo translate -i terms.json -o terms_ja.json   # Explicit paths
    yakugo resume glossary_ja.checkpoint.300.json     # Continue an interrupted run
    yakugo validate                                   # Check glossary_ja.json against glossary.json
    yakugo --log-level debug translate                # Verbose run
    yakugo completions bash > yakugo.bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

SIDECAR:
    Translation requires the sidecar to be running (http://localhost:9223 by
    default); it exposes GET /healthz and POST /translate. The validate command
    works without it.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Load the configuration file, creating a default one when absent
fn load_or_create_config(config_path: &str, cli_log_level: Option<&CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
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

    if let Some(log_level) = cli_log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "yakugo", &mut std::io::stdout());
        return Ok(());
    }

    // Apply a CLI log level immediately so config loading is logged at
    // the requested verbosity
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config = load_or_create_config(&cli.config_path, cli.log_level.as_ref())?;
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    let clean = match &cli.command {
        Commands::Translate { input, output } => controller.run_translate(input, output).await?,
        Commands::Resume {
            checkpoint,
            input,
            output,
        } => controller.run_resume(checkpoint, input, output).await?,
        Commands::Validate {
            original,
            translated,
            report,
        } => controller.run_validate(original, translated, report).await?,
        Commands::Completions { .. } => unreachable!(),
    };

    if !clean {
        // Interrupted run or failed validation
        std::process::exit(1);
    }

    Ok(())
}
