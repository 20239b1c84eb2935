//! CLI module for minic
//!
//! This module provides the command-line interface for the analyzer.
//!
//! ## Commands
//!
//! - `lex <file>` - Token table and per-kind counts
//! - `syntax <file>` - Tokens plus the syntax report
//! - `semantic <file>` - Tokens plus the semantic report
//! - `check <file>` - Both reports; fails on errors
//! - `tree|postfix|prefix <file>` - Expression conversions (or `--expr "a + b"` alone)
//!
//! Every command also accepts `-c "code"` instead of a file.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorChoice, OutputFormat, ReportConfig};
use crate::version::MINIC_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Lexical, syntax and semantic analyzer for a small C-like language
#[derive(Parser, Debug)]
#[command(name = "minic")]
#[command(version = MINIC_VERSION)]
#[command(about = "Lexical, syntax and semantic analyzer for a small C-like language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// When to use colors in text output
    #[arg(long, value_enum, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Omit the token table
    #[arg(long, global = true)]
    pub no_tokens: bool,

    /// Omit the per-kind token counts
    #[arg(long, global = true)]
    pub no_counts: bool,

    /// Print diagnostics without `file:line:col` prefixes
    #[arg(long, global = true)]
    pub no_locations: bool,
}

/// Where the analyzed text comes from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Source file to analyze
    #[arg(value_name = "FILE", conflicts_with = "command", required_unless_present = "command")]
    pub file: Option<PathBuf>,

    /// Analyze inline source code
    #[arg(short = 'c', long = "command", value_name = "CODE")]
    pub command: Option<String>,
}

/// Input of an expression command: a file, `-c` code, or `--expr` text.
#[derive(Args, Debug, Clone)]
pub struct ExpressionArgs {
    /// Source file whose tokens are converted
    #[arg(
        value_name = "FILE",
        conflicts_with = "command",
        required_unless_present_any = ["command", "expr"]
    )]
    pub file: Option<PathBuf>,

    /// Convert the tokens of inline source code
    #[arg(short = 'c', long = "command", value_name = "CODE")]
    pub command: Option<String>,

    /// Convert this expression text on its own
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["file", "command", "range"])]
    pub expr: Option<String>,

    /// Half-open token index range of the input, e.g. `2..7`
    #[arg(long, value_name = "START..END")]
    pub range: Option<TokenRange>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token table and per-kind counts
    Lex {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Run the syntax checker
    Syntax {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Run the semantic checker
    Semantic {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Run both checkers and fail on errors
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Fail on warnings too
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Draw the expression tree
    Tree {
        #[command(flatten)]
        input: ExpressionArgs,
    },

    /// Convert to postfix (reverse Polish) notation
    Postfix {
        #[command(flatten)]
        input: ExpressionArgs,
    },

    /// Convert to prefix (Polish) notation
    Prefix {
        #[command(flatten)]
        input: ExpressionArgs,
    },
}

/// Half-open range of token indices, written `START..END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for TokenRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| format!("expected START..END, found '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid token index '{part}': {e}"))
        };
        let range = TokenRange {
            start: parse(start)?,
            end: parse(end)?,
        };
        if range.start > range.end {
            return Err(format!("range start {} is after its end {}", range.start, range.end));
        }
        Ok(range)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Build the report configuration from global flags and the environment.
fn report_config(cli: &Cli) -> ReportConfig {
    ReportConfig::new()
        .with_format(cli.format)
        .with_color(cli.color)
        .with_show_tokens(!cli.no_tokens)
        .with_show_counts(!cli.no_counts)
        .with_show_locations(!cli.no_locations)
        .with_env_overrides(|key| std::env::var(key).ok())
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = report_config(&cli);
    tracing::debug!(?config, "report configuration");

    match cli.command {
        Command::Lex { input } => commands::lex(&input, &config),
        Command::Syntax { input } => commands::analyze(&input, commands::Stage::Syntax, &config),
        Command::Semantic { input } => commands::analyze(&input, commands::Stage::Semantic, &config),
        Command::Check { input, deny_warnings } => {
            let config = config.with_deny_warnings(deny_warnings);
            commands::analyze(&input, commands::Stage::Check, &config)
        }
        Command::Tree { input } => {
            commands::expression(&input, commands::Notation::Tree, &config)
        }
        Command::Postfix { input } => {
            commands::expression(&input, commands::Notation::Postfix, &config)
        }
        Command::Prefix { input } => {
            commands::expression(&input, commands::Notation::Prefix, &config)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
