//! sayc - tokenizer front end for the Say teaching language.
//!
//! Parses command-line arguments with clap, loads `sayc.toml`, installs
//! the tracing subscriber and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sayc_lex::LexerConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputFormat, run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{DrvError, Result};

/// sayc - tokenize Say programs
///
/// Turns `.say` source files into token streams and reports lexical
/// errors with their line numbers.
#[derive(Parser, Debug)]
#[command(name = "sayc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizer for the Say teaching language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SAYC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SAYC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SAYC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sayc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Stops at the first lexical error unless `--recover` is given.
    Tokens(TokensCommand),

    /// Report every lexical error in one or more source files
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to tokenize
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Count each statement terminator as an extra line
    #[arg(long)]
    legacy_lines: bool,

    /// Keep going after lexical errors and report all of them
    #[arg(long)]
    recover: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Count each statement terminator as an extra line
    #[arg(long)]
    legacy_lines: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration and runs the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color, &config.log_level)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` wins over the
/// configured level. Logs always go to stderr.
fn init_logging(verbose: bool, no_color: bool, level: &str) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

fn lexer_config(legacy_lines: bool, config: &Config) -> LexerConfig {
    if legacy_lines {
        LexerConfig::legacy()
    } else {
        config.lexer_config()
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        lexer: lexer_config(args.legacy_lines, &config),
        format: args.format.unwrap_or(config.output.format),
        recover: args.recover || config.lexer.recover,
        file: args.file,
        extension: config.source.extension,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        lexer: lexer_config(args.legacy_lines, &config),
        files: args.files,
        extension: config.source.extension,
    };
    run_check(check_args)
}
