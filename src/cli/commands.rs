//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::ReportConfig;
use crate::frontend::expr::{self, ExprError};
use crate::frontend::lexer::{self, Token};
use crate::frontend::report::{JsonExpression, JsonReport, NO_TOKENS, TextReport};
use crate::frontend::{Analysis, Passes, analyze_source};

use super::{CliError, CliResult, ExitCode, ExpressionArgs, InputArgs, TokenRange};

/// Maximum source file size (10 MiB)
///
/// Files larger than this are rejected before reading.
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Display name for inline `-c` code.
const INLINE_NAME: &str = "<command>";

/// Display name for `--expr` text.
const EXPR_NAME: &str = "<expr>";

/// Diagnostic passes selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Syntax,
    Semantic,
    Check,
}

impl Stage {
    fn passes(self) -> Passes {
        match self {
            Stage::Syntax => Passes::Syntax,
            Stage::Semantic => Passes::Semantic,
            Stage::Check => Passes::All,
        }
    }
}

/// Expression output requested by `tree`, `postfix` or `prefix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Tree,
    Postfix,
    Prefix,
}

/// Source text plus the name used in diagnostics.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub source: String,
}

// ============================================================================
// Input loading
// ============================================================================

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (10 MiB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let display = path.display();
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{display}': {e}")))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{display}' is too large ({} bytes, max {MAX_SOURCE_SIZE} bytes)",
            metadata.len(),
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{display}': {e}")))
}

/// Resolve `-c` code or a file path into an [`Input`].
pub fn load_input(args: &InputArgs) -> CliResult<Input> {
    load_source(args.file.as_deref(), args.command.as_deref())
}

fn load_source(file: Option<&Path>, command: Option<&str>) -> CliResult<Input> {
    if let Some(code) = command {
        return Ok(Input {
            name: INLINE_NAME.to_string(),
            source: code.to_string(),
        });
    }
    match file {
        Some(path) => Ok(Input {
            name: path.display().to_string(),
            source: read_source(path)?,
        }),
        None => Err(CliError::failure("Error: a file path or -c \"code\" is required")),
    }
}

// ============================================================================
// Commands
// ============================================================================

/// `minic lex`
pub fn lex(args: &InputArgs, config: &ReportConfig) -> CliResult<ExitCode> {
    let input = load_input(args)?;
    let analysis = analyze_source(&input.source, Passes::Lexical);
    emit_analysis(&input, &analysis, config)?;
    Ok(ExitCode::SUCCESS)
}

/// `minic syntax`, `minic semantic` and `minic check`
pub fn analyze(args: &InputArgs, stage: Stage, config: &ReportConfig) -> CliResult<ExitCode> {
    let input = load_input(args)?;
    let analysis = analyze_source(&input.source, stage.passes());
    emit_analysis(&input, &analysis, config)?;

    if analysis.has_failures(config.deny_warnings) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// `minic tree`, `minic postfix` and `minic prefix`
pub fn expression(args: &ExpressionArgs, notation: Notation, config: &ReportConfig) -> CliResult<ExitCode> {
    let Input { name, source } = match &args.expr {
        Some(text) => Input {
            name: EXPR_NAME.to_string(),
            source: text.clone(),
        },
        None => load_source(args.file.as_deref(), args.command.as_deref())?,
    };
    let stream = lexer::tokenize(&source);
    let tokens = select(&stream, args.range)?;

    let report = TextReport::new(config, &name, &source, config.color.enabled_for_stdout());
    if tokens.is_empty() && !config.is_json() {
        println!("{NO_TOKENS}");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = convert(tokens, notation);
    if config.is_json() {
        let json = match &outcome {
            Ok(Converted::Tree(root)) => JsonExpression::tree(root.as_ref()),
            Ok(Converted::Postfix(text)) => JsonExpression::Postfix(text),
            Ok(Converted::Prefix(text)) => JsonExpression::Prefix(text),
            Err(error) => JsonExpression::from_error(error),
        };
        print_json(&json)?;
        return Ok(if json.is_error() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    match outcome {
        Ok(Converted::Tree(root)) => print!("{}", report.tree(root.as_ref())),
        Ok(Converted::Postfix(text) | Converted::Prefix(text)) => println!("{text}"),
        Err(error) => return Err(CliError::failure(report.expr_error(&error))),
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Helpers
// ============================================================================

enum Converted {
    Tree(Option<expr::ExprNode>),
    Postfix(String),
    Prefix(String),
}

fn convert(tokens: &[Token], notation: Notation) -> Result<Converted, ExprError> {
    Ok(match notation {
        Notation::Tree => Converted::Tree(expr::to_tree(tokens)?),
        Notation::Postfix => Converted::Postfix(expr::to_postfix(tokens)?),
        Notation::Prefix => Converted::Prefix(expr::to_prefix(tokens)?),
    })
}

/// Apply `--range` to a token stream.
fn select(tokens: &[Token], range: Option<TokenRange>) -> CliResult<&[Token]> {
    let Some(range) = range else {
        return Ok(tokens);
    };
    tokens.get(range.start..range.end).ok_or_else(|| {
        CliError::failure(format!(
            "Error: token range {}..{} is out of bounds ({} tokens)",
            range.start,
            range.end,
            tokens.len()
        ))
    })
}

fn emit_analysis(input: &Input, analysis: &Analysis, config: &ReportConfig) -> CliResult<()> {
    if config.is_json() {
        return print_json(&JsonReport::new(&input.name, analysis));
    }
    let report = TextReport::new(config, &input.name, &input.source, config.color.enabled_for_stdout());
    print!("{}", report.analysis(analysis));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::failure(format!("Error serializing report: {e}")))?;
    println!("{json}");
    Ok(())
}
