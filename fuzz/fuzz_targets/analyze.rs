#![no_main]

use libfuzzer_sys::fuzz_target;
use minic::frontend::{Passes, analyze_source, expr};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every pass is total: none of these may panic
        let analysis = analyze_source(s, Passes::All);
        let tokens = analysis.stream.tokens();
        let _ = expr::to_tree(tokens);
        let _ = expr::to_postfix(tokens);
        let _ = expr::to_prefix(tokens);
    }
});
