//! Rendering of analysis results.
//!
//! Text output mirrors the classic analyzer window: a token table, per-kind counts, then one
//! section per pass with either its diagnostics or a fixed sentinel line. JSON output carries the
//! same data for tooling.

use serde::Serialize;

use crate::config::ReportConfig;
use crate::frontend::Analysis;
use crate::frontend::diagnostics::{Diagnostic, Severity};
use crate::frontend::expr::{ExprError, ExprNode};
use crate::frontend::lexer::{TokenCounts, TokenStream};

/// Shown instead of any report when the input has no tokens.
pub const NO_TOKENS: &str = "no tokens to analyze";

/// Deepest expression tree that is drawn line by line or nested in JSON.
///
/// A drawing grows with the square of the depth and JSON nesting recurses in the serializer, so
/// deeper trees are shown in their parenthesized form only.
pub const MAX_TREE_DEPTH: usize = 256;

pub const NO_SYNTAX_ERRORS: &str = "no syntax errors";
pub const NO_SEMANTIC_ERRORS: &str = "no semantic errors";

/// A diagnostic pass with its own report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Syntax,
    Semantic,
}

impl Pass {
    pub fn heading(self) -> &'static str {
        match self {
            Pass::Syntax => "SYNTAX ANALYSIS",
            Pass::Semantic => "SEMANTIC ANALYSIS",
        }
    }

    pub fn sentinel(self) -> &'static str {
        match self {
            Pass::Syntax => NO_SYNTAX_ERRORS,
            Pass::Semantic => NO_SEMANTIC_ERRORS,
        }
    }
}

/// Report body of one pass: the diagnostics one per line, or the pass sentinel.
pub fn diagnostics_text(pass: Pass, diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return pass.sentinel().to_string();
    }
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// 1-based line and column (in characters) of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let col = source[line_start..offset].chars().count() + 1;
    (line, col)
}

// ============================================================================
// Text rendering
// ============================================================================

struct Palette {
    enabled: bool,
}

impl Palette {
    const RED: &'static str = "\x1b[31m";
    const YELLOW: &'static str = "\x1b[33m";
    const GREEN: &'static str = "\x1b[32m";
    const BOLD: &'static str = "\x1b[1m";
    const RESET: &'static str = "\x1b[0m";

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{}", Self::RESET)
        } else {
            text.to_string()
        }
    }

    fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Error => Self::RED,
            Severity::Warning => Self::YELLOW,
        };
        self.paint(color, &severity.to_string())
    }
}

/// Renders analysis results for one named source text.
pub struct TextReport<'a> {
    config: &'a ReportConfig,
    name: &'a str,
    source: &'a str,
    palette: Palette,
}

impl<'a> TextReport<'a> {
    /// `color` is the resolved color decision for the target stream.
    pub fn new(config: &'a ReportConfig, name: &'a str, source: &'a str, color: bool) -> Self {
        Self {
            config,
            name,
            source,
            palette: Palette { enabled: color },
        }
    }

    /// Token table, counts and the sections of every pass that ran.
    pub fn analysis(&self, analysis: &Analysis) -> String {
        if analysis.stream.is_empty() {
            return format!("{NO_TOKENS}\n");
        }

        let mut sections = Vec::new();
        if self.config.show_tokens {
            sections.push(self.tokens(&analysis.stream));
        }
        if self.config.show_counts {
            sections.push(self.counts(analysis.stream.counts()));
        }
        if let Some(diagnostics) = &analysis.syntax {
            sections.push(self.pass(Pass::Syntax, diagnostics));
        }
        if let Some(diagnostics) = &analysis.semantic {
            sections.push(self.pass(Pass::Semantic, diagnostics));
        }
        sections.join("\n")
    }

    /// One `lexeme  KIND` row per token.
    pub fn tokens(&self, stream: &TokenStream) -> String {
        let rows: Vec<(String, &str)> = stream
            .iter()
            .map(|t| (printable(&t.lexeme), t.kind.label()))
            .collect();
        let width = rows
            .iter()
            .map(|(lexeme, _)| lexeme.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = self.heading("TOKENS");
        for (lexeme, kind) in rows {
            let pad = width - lexeme.chars().count();
            out.push_str(&format!("{lexeme}{}  {kind}\n", " ".repeat(pad)));
        }
        out
    }

    pub fn counts(&self, counts: &TokenCounts) -> String {
        let mut out = self.heading("COUNTS");
        for (kind, count) in counts.iter() {
            out.push_str(&format!("{:<10}  {count}\n", kind.label()));
        }
        out
    }

    pub fn pass(&self, pass: Pass, diagnostics: &[Diagnostic]) -> String {
        let mut out = self.heading(pass.heading());
        if diagnostics.is_empty() {
            out.push_str(&self.palette.paint(Palette::GREEN, pass.sentinel()));
            out.push('\n');
        }
        for diagnostic in diagnostics {
            out.push_str(&self.diagnostic(diagnostic));
            out.push('\n');
        }
        out
    }

    /// `name:line:col: severity: message`, or just `severity: message` without locations.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let body = format!(
            "{}: {}",
            self.palette.severity(diagnostic.severity),
            diagnostic.message
        );
        if !self.config.show_locations {
            return body;
        }
        let (line, col) = line_col(self.source, diagnostic.span.start);
        format!("{}:{line}:{col}: {body}", self.name)
    }

    pub fn tree(&self, root: Option<&ExprNode>) -> String {
        match root {
            Some(root) => match root.depth() {
                depth if depth > MAX_TREE_DEPTH => format!(
                    "{}\n{root}\n",
                    self.palette.paint(
                        Palette::YELLOW,
                        &format!("tree is {depth} levels deep; drawing skipped (limit {MAX_TREE_DEPTH})")
                    )
                ),
                _ => format!("{}\n{root}\n", root.render_tree()),
            },
            None => format!("{NO_TOKENS}\n"),
        }
    }

    /// Expression failure with the offending token underlined.
    pub fn expr_error(&self, error: &ExprError) -> String {
        let report = miette::Report::new(error.clone()).with_source_code(miette::NamedSource::new(
            self.name,
            self.source.to_string(),
        ));
        format!("{report:?}")
    }

    fn heading(&self, title: &str) -> String {
        format!("{}\n\n", self.palette.paint(Palette::BOLD, title))
    }
}

/// Escape control characters so multi-line lexemes stay on one table row.
fn printable(lexeme: &str) -> String {
    lexeme
        .chars()
        .flat_map(|c| match c {
            '\n' => vec!['\\', 'n'],
            '\r' => vec!['\\', 'r'],
            '\t' => vec!['\\', 't'],
            c => vec![c],
        })
        .collect()
}

// ============================================================================
// JSON rendering
// ============================================================================

/// JSON document for `--format json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub analysis: &'a Analysis,
    pub errors: usize,
    pub warnings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

impl<'a> JsonReport<'a> {
    pub fn new(source: &'a str, analysis: &'a Analysis) -> Self {
        Self {
            source,
            analysis,
            errors: analysis.count(Severity::Error),
            warnings: analysis.count(Severity::Warning),
            notice: analysis.stream.is_empty().then_some(NO_TOKENS),
        }
    }
}

/// JSON result of an expression conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonExpression<'a> {
    Tree(Option<&'a ExprNode>),
    Postfix(&'a str),
    Prefix(&'a str),
    Error { code: String, message: String },
}

impl<'a> JsonExpression<'a> {
    /// Nested tree, or an error when it is deeper than [`MAX_TREE_DEPTH`].
    pub fn tree(root: Option<&'a ExprNode>) -> Self {
        match root.map(ExprNode::depth) {
            Some(depth) if depth > MAX_TREE_DEPTH => JsonExpression::Error {
                code: "minic::report::tree_too_deep".to_string(),
                message: format!(
                    "expression tree is {depth} levels deep; JSON trees are limited to {MAX_TREE_DEPTH} levels"
                ),
            },
            _ => JsonExpression::Tree(root),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, JsonExpression::Error { .. })
    }

    pub fn from_error(error: &ExprError) -> Self {
        use miette::Diagnostic as _;

        JsonExpression::Error {
            code: error.code().map(|c| c.to_string()).unwrap_or_default(),
            message: error.to_string(),
        }
    }
}
