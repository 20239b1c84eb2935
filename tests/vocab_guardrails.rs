use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use minic_core::lang::{delimiters, keywords, operators};

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "int"`,
/// `"while" =>` or `== ';'` in Rust source files where we expect callers to go through the
/// `minic_core::lang` registries (or the `Token` helpers built on them) instead.
///
/// Notes:
/// - We allow occurrences in `crates/minic_core/src/lang/**` (registries themselves) and in tests.
/// - This is not meant to be perfect; it’s meant to catch “oops I added a string match”.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer minic_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Quoted forms of every registered spelling, e.g. `"int"` and `';'`.
fn spellings() -> Vec<String> {
    let mut set: BTreeSet<String> = BTreeSet::new();

    for k in keywords::KEYWORDS {
        set.insert(format!("\"{}\"", k.canonical));
    }
    for o in operators::OPERATORS {
        set.insert(format!("\"{}\"", o.spelling));
    }
    for d in delimiters::DELIMITERS {
        set.insert(format!("'{}'", d.spelling));
    }

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/minic_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[String], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        // Inline `#[cfg(test)] mod tests` blocks sit at the end of a file.
        for (idx, line) in contents.lines().enumerate().take_while(|(_, l)| !l.starts_with("#[cfg(test)]")) {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[String]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") || trimmed.starts_with("///") || trimmed.starts_with("//!") {
        return false;
    }

    // Only flag explicit equality checks or match arms for known vocabulary spellings.
    for s in spellings {
        // Patterns we consider "stringly vocab checks":
        // - `... == "spelling"`
        // - `"spelling" => ...`
        let eq = format!("== {s}");
        let arm = format!("{s} =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
    }

    false
}
