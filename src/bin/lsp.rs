//! minic Language Server binary entry point
//!
//! Run with: minic-lsp
//!
//! The LSP communicates via stdin/stdout using the Language Server Protocol.

use minic::lsp::MinicLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    // stdout is the protocol channel; logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(MinicLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;
}
