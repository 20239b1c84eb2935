use minic_syntax::diagnostics::Severity;
use minic_syntax::lexer::tokenize;

use super::*;

fn findings(source: &str) -> Vec<(Severity, String)> {
    check_semantics(&tokenize(source))
        .into_iter()
        .map(|d| (d.severity, d.message))
        .collect()
}

fn error(message: &str) -> (Severity, String) {
    (Severity::Error, message.to_string())
}

fn warning(message: &str) -> (Severity, String) {
    (Severity::Warning, message.to_string())
}

#[test]
fn test_clean_program() {
    assert!(findings("int x = 1; int y = x + 2; print(y);").is_empty());
}

#[test]
fn test_assignment_does_not_initialize() {
    assert_eq!(
        findings("int y; y = y;"),
        vec![
            warning("variable 'y' possibly used without initialization"),
            warning("variable 'y' possibly used without initialization"),
        ]
    );
}

#[test]
fn test_undeclared_use() {
    assert_eq!(
        findings("x = 3;"),
        vec![error("variable 'x' used without declaration")]
    );
}

#[test]
fn test_redeclaration() {
    assert_eq!(
        findings("int a = 1; float a = 2; a;"),
        vec![error("variable 'a' already declared")]
    );
}

#[test]
fn test_unused_in_declaration_order() {
    assert_eq!(
        findings("int zeta = 1; char alpha = 2; float mid = 3;"),
        vec![
            warning("variable 'zeta' declared but never used"),
            warning("variable 'alpha' declared but never used"),
            warning("variable 'mid' declared but never used"),
        ]
    );
}

#[test]
fn test_initializer_scan_stops_at_semicolon() {
    assert_eq!(
        findings("int a; = ; a;"),
        vec![warning("variable 'a' possibly used without initialization")]
    );
}

#[test]
fn test_functions_are_not_variables() {
    // `f` is declared as a function and called; calls are never uses.
    assert!(findings("int f(); f();").is_empty());
    assert!(findings("void main() { }").is_empty());
}

#[test]
fn test_function_name_without_call_warns() {
    assert_eq!(
        findings("int f(); g = f;"),
        vec![
            error("variable 'g' used without declaration"),
            warning("variable 'f' possibly used without initialization"),
        ]
    );
}

#[test]
fn test_void_marks_declaration_only() {
    // `void v;` declares nothing, and `v` right after `void` is not a use either.
    assert!(findings("void v;").is_empty());
    assert_eq!(
        findings("void v; v;"),
        vec![error("variable 'v' used without declaration")]
    );
}

#[test]
fn test_strings_and_comments_are_skipped() {
    assert_eq!(
        findings("int x = 1; \"x y\" // z\n/* w */ x;"),
        Vec::<(Severity, String)>::new()
    );
}

#[test]
fn test_diagnostics_point_at_identifier() {
    let tokens = tokenize("int a = 1;\nb;");
    let diagnostics = check_semantics(&tokens);
    let undeclared = diagnostics
        .iter()
        .find(|d| d.severity == Severity::Error)
        .unwrap();
    assert_eq!(undeclared.token_index, 5);
    assert_eq!(undeclared.span, tokens[5].span);
}

#[test]
fn test_state_collects_declarations() {
    let analysis = analyze(&tokenize("int a = 1; int f(); int a; a = f();"));
    let state = &analysis.state;
    assert_eq!(state.variables.len(), 1);
    assert_eq!(state.variables[0].token_index, 1);
    assert!(state.is_function("f"));
    assert!(state.initialized.contains("a"));
    assert_eq!(state.declaration_of("f").map(|d| d.token_index), Some(6));
    assert_eq!(state.declared_names().collect::<Vec<_>>(), vec!["a", "f"]);
}

#[test]
fn test_empty_input() {
    assert!(check_semantics(&[]).is_empty());
}
