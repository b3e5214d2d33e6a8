// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use pagelate::app_config::{Config, LogLevel};
use pagelate::app_controller::Controller;
use pagelate::renderer::InsertMode;

/// CLI wrapper for InsertMode to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInsertMode {
    After,
    Wrap,
}

impl From<CliInsertMode> for InsertMode {
    fn from(cli_mode: CliInsertMode) -> Self {
        match cli_mode {
            CliInsertMode::After => InsertMode::After,
            CliInsertMode::Wrap => InsertMode::Wrap,
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
    /// Generate shell completions for pagelate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// pagelate - AI-powered HTML page translation
///
/// Extracts the readable content blocks from an HTML page, translates them
/// in one batch through the Gemini API, and injects the translations next
/// to the originals.
#[derive(Parser, Debug)]
#[command(name = "pagelate")]
#[command(version = "0.1.0")]
#[command(about = "Translate the readable content of an HTML page with AI")]
#[command(long_about = "pagelate extracts visible content blocks from an HTML page and \
translates them using the Gemini API, injecting each translation next to its original.

EXAMPLES:
    pagelate page.html                        # Translate using default config
    pagelate page.html -o page.zh.html        # Write the result to a file
    pagelate -t fr page.html                  # Translate into French
    pagelate --insert-mode wrap page.html     # Wrap original and translation together
    pagelate -e page.html                     # Show detected blocks without translating
    cat page.html | pagelate -                # Read the page from stdin
    pagelate completions bash > pagelate.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in pagelate.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically. The API key can be
    set in the config file, via --api-key, or the GEMINI_API_KEY
    environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input HTML file, or '-' to read from stdin
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file for the translated page (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target language code (e.g., 'zh', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the Gemini API
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// How translations are attached to their originals
    #[arg(short, long, value_enum)]
    insert_mode: Option<CliInsertMode>,

    /// Configuration file path
    #[arg(short, long, default_value = "pagelate.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print detected content blocks without translating
    #[arg(short, long)]
    extract_only: bool,
}

// Custom logger writing timestamped colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

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
                "{}{} {:5} {}\x1B[0m",
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default.
    // The level is updated after the config is loaded.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "pagelate", &mut std::io::stdout());
            Ok(())
        }
        None => run(cli).await,
    }
}

async fn run(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let input_path = options
        .input_path
        .as_ref()
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    let mut config = load_or_create_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }
    if let Some(api_key) = &options.api_key {
        config.translation.api_key = api_key.clone();
    }
    if let Some(insert_mode) = options.insert_mode {
        config.insert_mode = insert_mode.into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    let input = read_input(input_path)?;

    if options.extract_only {
        return extract_only(&input);
    }

    let controller = Controller::new(config)?;
    let output = controller.translate_html(&input).await?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &output)
                .context(format!("Failed to write output file: {:?}", path))?;
            info!("Wrote translated page to {:?}", path);
        }
        None => {
            std::io::stdout()
                .write_all(&output)
                .context("Failed to write output to stdout")?;
        }
    }

    Ok(())
}

/// Load the configuration file, creating a default one when it is missing
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .context(format!("Failed to load config file: {}", config_path))
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to: {}", config_path))?;

        Ok(config)
    }
}

/// Read the input document from a file or stdin when the path is '-'
fn read_input(input_path: &Path) -> Result<Vec<u8>> {
    if input_path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read input from stdin")?;
        Ok(buf)
    } else {
        std::fs::read(input_path).context(format!("Failed to read input file: {:?}", input_path))
    }
}

/// Print the blocks the extractor would submit for translation
fn extract_only(input: &[u8]) -> Result<()> {
    use pagelate::dom;
    use pagelate::extractor::Extractor;

    let page = dom::html_to_dom(input);
    let blocks = Extractor::new().extract(&page.document);

    info!("Detected {} content blocks", blocks.len());
    let mut stdout = std::io::stdout();
    for (index, block) in blocks.iter().enumerate() {
        writeln!(stdout, "{:>3}. {}", index + 1, block.text)
            .context("Failed to write block list to stdout")?;
    }

    Ok(())
}
