//! Convert minic diagnostics to LSP diagnostics

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range};

use crate::frontend::diagnostics::{Diagnostic as MinicDiagnostic, Severity};
use crate::frontend::lexer::Span;

/// Convert a byte offset to LSP Position (0-based line and character)
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    let offset = offset.min(source.len());
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    Position::new(line, col)
}

/// Convert an LSP Position back to a byte offset, clamped to the source length
pub fn position_to_offset(source: &str, position: Position) -> usize {
    let mut line = 0u32;
    let mut col = 0u32;

    for (i, c) in source.char_indices() {
        if line == position.line && col == position.character {
            return i;
        }
        if c == '\n' {
            if line == position.line {
                // Cursor past the end of this line
                return i;
            }
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }

    source.len()
}

/// Convert a span to LSP Range
pub fn span_to_range(source: &str, span: Span) -> Range {
    let start_pos = offset_to_position(source, span.start);
    let end_pos = offset_to_position(source, span.end.max(span.start + 1));
    Range::new(start_pos, end_pos)
}

fn severity_to_lsp(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    }
}

/// Convert a minic diagnostic to an LSP Diagnostic
///
/// `pass` names the producing pass (`syntax` or `semantic`) and becomes the diagnostic code.
pub fn to_lsp_diagnostic(diagnostic: &MinicDiagnostic, source: &str, pass: &str) -> Diagnostic {
    Diagnostic {
        range: span_to_range(source, diagnostic.span),
        severity: Some(severity_to_lsp(diagnostic.severity)),
        code: Some(NumberOrString::String(pass.to_string())),
        code_description: None,
        source: Some("minic".to_string()),
        message: diagnostic.message.clone(),
        related_information: None,
        tags: None,
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_position() {
        let source = "line 1\nline 2\nline 3";

        let pos = offset_to_position(source, 0);
        assert_eq!(pos.line, 0);
        assert_eq!(pos.character, 0);

        let pos = offset_to_position(source, 7); // Start of "line 2"
        assert_eq!(pos.line, 1);
        assert_eq!(pos.character, 0);

        let pos = offset_to_position(source, 10); // "e 2"
        assert_eq!(pos.line, 1);
        assert_eq!(pos.character, 3);
    }

    #[test]
    fn test_position_to_offset_inverts() {
        let source = "int x;\nx = 1;";
        for offset in [0, 4, 7, 11] {
            assert_eq!(position_to_offset(source, offset_to_position(source, offset)), offset);
        }
        // Past the end of line 0 clamps to its newline
        assert_eq!(position_to_offset(source, Position::new(0, 40)), 6);
        assert_eq!(position_to_offset(source, Position::new(9, 0)), source.len());
    }

    #[test]
    fn test_empty_span_gets_one_character() {
        let range = span_to_range("abc", Span::new(1, 1));
        assert_eq!(range.start, Position::new(0, 1));
        assert_eq!(range.end, Position::new(0, 2));
    }

    #[test]
    fn test_severity_mapping() {
        let warning = crate::frontend::diagnostics::warnings::unused_variable("y", 1, Span::new(4, 5));
        let lsp = to_lsp_diagnostic(&warning, "int y;", "semantic");
        assert_eq!(lsp.severity, Some(DiagnosticSeverity::WARNING));
        assert_eq!(lsp.range, Range::new(Position::new(0, 4), Position::new(0, 5)));
        assert_eq!(lsp.code, Some(NumberOrString::String("semantic".to_string())));
    }
}
