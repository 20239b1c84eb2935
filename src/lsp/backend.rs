//! LSP (Language Server Protocol) backend implementation for minic

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use minic_core::lang::{keywords, operators};

use crate::frontend::lexer::{Span, Token, TokenKind, TokenStream};
use crate::frontend::semantics::{self, SemanticState};
use crate::frontend::{checker, lexer};
use crate::lsp::diagnostics::{position_to_offset, span_to_range, to_lsp_diagnostic};
use crate::version::MINIC_VERSION;

/// Document state stored by the LSP
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub source: String,
    pub tokens: TokenStream,
    /// Names collected by the last semantic pass.
    pub names: SemanticState,
    pub version: i32,
}

impl DocumentState {
    /// Tokenize and analyze `source`, returning the state and its LSP diagnostics.
    pub fn analyze(source: String, version: i32) -> (Self, Vec<Diagnostic>) {
        let tokens = lexer::tokenize(&source);
        let syntax = checker::check_syntax(&tokens);
        let semantic = semantics::analyze(&tokens);

        let diagnostics = syntax
            .iter()
            .map(|d| to_lsp_diagnostic(d, &source, "syntax"))
            .chain(
                semantic
                    .diagnostics
                    .iter()
                    .map(|d| to_lsp_diagnostic(d, &source, "semantic")),
            )
            .collect();

        let state = Self {
            source,
            tokens,
            names: semantic.state,
            version,
        };
        (state, diagnostics)
    }

    /// Token under the cursor; a cursor just past a token's end still selects it.
    pub fn token_at(&self, position: Position) -> Option<&Token> {
        let offset = position_to_offset(&self.source, position);
        let index = self
            .tokens
            .index_at(offset)
            .or_else(|| offset.checked_sub(1).and_then(|prev| self.tokens.index_at(prev)))?;
        self.tokens.get(index)
    }

    /// Markdown hover text for a token.
    pub fn hover_markdown(&self, token: &Token) -> String {
        let mut markdown = format!("```minic\n{}\n```\n\n*{}*", token.lexeme, token.kind);
        if let Some(id) = token.keyword_id() {
            markdown.push_str("\n\n");
            markdown.push_str(keywords::info_for(id).description);
        } else if let Some(id) = token.operator_id() {
            markdown.push_str("\n\n");
            markdown.push_str(operators::info_for(id).description);
        } else if token.kind == TokenKind::Identifier {
            let role = if self.names.is_variable(&token.lexeme) {
                Some("declared variable")
            } else if self.names.is_function(&token.lexeme) {
                Some("declared function")
            } else {
                None
            };
            if let Some(role) = role {
                markdown.push_str("\n\n");
                markdown.push_str(role);
            }
        }
        markdown
    }

    /// Span of the first declaration of the identifier under the cursor.
    pub fn definition_at(&self, position: Position) -> Option<Span> {
        let token = self.token_at(position)?;
        if token.kind != TokenKind::Identifier {
            return None;
        }
        self.names.declaration_of(&token.lexeme).map(|d| d.span)
    }

    /// Keywords from the registry, then every declared name.
    pub fn completion_items(&self) -> Vec<CompletionItem> {
        let mut items: Vec<CompletionItem> = keywords::KEYWORDS
            .iter()
            .map(|k| CompletionItem {
                label: k.canonical.to_string(),
                kind: Some(CompletionItemKind::KEYWORD),
                detail: Some(k.description.to_string()),
                ..Default::default()
            })
            .collect();

        for name in self.names.declared_names() {
            let (kind, detail) = if self.names.is_variable(name) {
                (CompletionItemKind::VARIABLE, "variable")
            } else {
                (CompletionItemKind::FUNCTION, "function")
            };
            items.push(CompletionItem {
                label: name.to_string(),
                kind: Some(kind),
                detail: Some(detail.to_string()),
                ..Default::default()
            });
        }
        items
    }
}

/// minic Language Server
pub struct MinicLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
}

impl MinicLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Analyze a document and publish diagnostics
    #[tracing::instrument(skip_all, fields(uri = %uri, version = version))]
    async fn analyze_document(&self, uri: &Url, source: String, version: i32) {
        let (state, diagnostics) = DocumentState::analyze(source, version);
        tracing::debug!(diagnostics = diagnostics.len(), "publishing diagnostics");

        // Store document state
        {
            let mut docs = self.documents.write().await;
            docs.insert(uri.clone(), state);
        }

        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for MinicLanguageServer {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                // Real-time diagnostics via text sync
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                // Hover support
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                // Go-to-definition
                definition_provider: Some(OneOf::Left(true)),
                // Completions (keywords and declared names)
                completion_provider: Some(CompletionOptions::default()),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "minic-lsp".to_string(),
                version: Some(MINIC_VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        tracing::info!("minic LSP initialized");
        self.client
            .log_message(MessageType::INFO, "minic LSP initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        self.analyze_document(&uri, params.text_document.text, version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        // We use FULL sync, so there's only one change with the full content
        if let Some(change) = params.content_changes.into_iter().next() {
            self.analyze_document(&uri, change.text, version).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;

        // Remove document from cache
        let mut docs = self.documents.write().await;
        docs.remove(&uri);

        // Clear diagnostics
        self.client.publish_diagnostics(uri, vec![], None).await;
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };
        let Some(token) = doc.token_at(position) else {
            return Ok(None);
        };

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.hover_markdown(token),
            }),
            range: Some(span_to_range(&doc.source, token.span)),
        }))
    }

    async fn goto_definition(&self, params: GotoDefinitionParams) -> Result<Option<GotoDefinitionResponse>> {
        let uri = &params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        Ok(doc.definition_at(position).map(|span| {
            GotoDefinitionResponse::Scalar(Location {
                uri: uri.clone(),
                range: span_to_range(&doc.source, span),
            })
        }))
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;

        let docs = self.documents.read().await;
        let Some(doc) = docs.get(uri) else {
            return Ok(None);
        };

        Ok(Some(CompletionResponse::Array(doc.completion_items())))
    }
}
