//! MCP server implementation for the OKR session
//!
//! This module exposes one objective session to AI assistants over the Model
//! Context Protocol. Every tool call locks the shared session, so calls are
//! applied one at a time in arrival order.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use okr_core::ObjectiveSession;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{
    Alignment, Id, KeyResultDeadline, KeyResultText, KeyResultWeight, McpResult, ObjectiveText,
    RegenerateKeyResult, SetDeadline,
};

const INSTRUCTIONS: &str = r#"This server drives the "Set Objective" dialog of an OKR workspace. One objective is drafted at a time.

## Core Concepts
- **Objective**: the goal statement, aligned with one of the supervisor's key results
- **Key Results**: measurable outcomes with a weight (0-100%), an optional deadline and milestones
- **AI suggestions**: canned key result ideas; they are not tailored to the objective

## Workflow
1. `open_session` starts an empty draft
2. `list_alignments` then `set_alignment`; this also sets the objective text and replaces all key results with four generated ones
3. Edit with `update_key_result_text`, `update_key_result_weight`, `update_key_result_deadline`, `add_milestone`, `delete_key_result`, `add_key_result`
4. `request_suggestion` shows an idea; `accept_suggestion` adds it, `dismiss_suggestion` hides it
5. `regenerate_key_result` rewrites one key result around a short prompt
6. `show_session` to review, then `save_session` or `cancel_session`

Requests that cannot apply (no open draft, unknown key result ID, a weight outside 0-100) are ignored and reported as "Ignored:". Dates use YYYY-MM-DD."#;

/// MCP server for the OKR session
#[derive(Clone)]
pub struct OkrMcpServer {
    session: Arc<Mutex<ObjectiveSession>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl OkrMcpServer {
    pub fn new(session: ObjectiveSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "open_session",
        description = "Open the Set Objective dialog with an empty draft. Does nothing if a draft is already open; use show_session to see it."
    )]
    async fn open_session(&self) -> McpResult {
        self.handlers().open_session().await
    }

    #[tool(
        name = "list_alignments",
        description = "List the supervisor key results an objective can align with. Pass one of them verbatim to set_alignment."
    )]
    async fn list_alignments(&self) -> McpResult {
        self.handlers().list_alignments().await
    }

    #[tool(
        name = "set_alignment",
        description = "Align the objective with a supervisor key result. The choice also becomes the objective text, and ALL current key results are replaced by four generated AI key results with weight 25%. The suggestion card opens as well; accept_suggestion adds it."
    )]
    async fn set_alignment(&self, params: Parameters<Alignment>) -> McpResult {
        self.handlers().set_alignment(params).await
    }

    #[tool(
        name = "set_objective",
        description = "Replace the objective statement without changing the alignment or key results."
    )]
    async fn set_objective(&self, params: Parameters<ObjectiveText>) -> McpResult {
        self.handlers().set_objective(params).await
    }

    #[tool(
        name = "set_deadline",
        description = "Set the objective deadline as YYYY-MM-DD. Omit the deadline to clear it."
    )]
    async fn set_deadline(&self, params: Parameters<SetDeadline>) -> McpResult {
        self.handlers().set_deadline(params).await
    }

    #[tool(
        name = "add_key_result",
        description = "Append an empty key result with weight 25%. Returns its ID; fill it in with update_key_result_text."
    )]
    async fn add_key_result(&self) -> McpResult {
        self.handlers().add_key_result().await
    }

    #[tool(
        name = "delete_key_result",
        description = "Remove a key result and its milestones from the draft."
    )]
    async fn delete_key_result(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_key_result(params).await
    }

    #[tool(
        name = "update_key_result_text",
        description = "Replace a key result's text. Empty text is allowed."
    )]
    async fn update_key_result_text(&self, params: Parameters<KeyResultText>) -> McpResult {
        self.handlers().update_key_result_text(params).await
    }

    #[tool(
        name = "update_key_result_weight",
        description = "Set a key result's weight from 0 to 100, passed as a string. The leading integer is used, so '50%' sets 50 and '12.5' sets 12. Input without a leading number, or outside 0-100, is ignored and the previous weight is kept. Weights do not have to add up to 100."
    )]
    async fn update_key_result_weight(&self, params: Parameters<KeyResultWeight>) -> McpResult {
        self.handlers().update_key_result_weight(params).await
    }

    #[tool(
        name = "update_key_result_deadline",
        description = "Set a key result's deadline as YYYY-MM-DD. Omit the deadline to clear it."
    )]
    async fn update_key_result_deadline(
        &self,
        params: Parameters<KeyResultDeadline>,
    ) -> McpResult {
        self.handlers().update_key_result_deadline(params).await
    }

    #[tool(
        name = "add_milestone",
        description = "Append a milestone named 'Milestone' to a key result."
    )]
    async fn add_milestone(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().add_milestone(params).await
    }

    #[tool(
        name = "regenerate_key_result",
        description = "Rewrite a key result's text around a short focus prompt, e.g. 'customer retention'. Works on user-authored key results as well as AI ones; the AI flag, weight, deadline and milestones are kept. An empty prompt is ignored."
    )]
    async fn regenerate_key_result(&self, params: Parameters<RegenerateKeyResult>) -> McpResult {
        self.handlers().regenerate_key_result(params).await
    }

    #[tool(
        name = "request_suggestion",
        description = "Show an AI key result suggestion above the key result list, replacing any suggestion already showing. Suggestions are drawn at random and may repeat."
    )]
    async fn request_suggestion(&self) -> McpResult {
        self.handlers().request_suggestion().await
    }

    #[tool(
        name = "accept_suggestion",
        description = "Add the suggestion that is showing as a new AI key result with weight 25%."
    )]
    async fn accept_suggestion(&self) -> McpResult {
        self.handlers().accept_suggestion().await
    }

    #[tool(
        name = "dismiss_suggestion",
        description = "Hide the suggestion that is showing without adding it."
    )]
    async fn dismiss_suggestion(&self) -> McpResult {
        self.handlers().dismiss_suggestion().await
    }

    #[tool(
        name = "show_session",
        description = "Show the draft: objective, alignment, deadline, the suggestion card if showing, and every key result with its weight, deadline and milestones."
    )]
    async fn show_session(&self) -> McpResult {
        self.handlers().show_session().await
    }

    #[tool(
        name = "save_session",
        description = "Confirm the objective and close the dialog. No field is required. Returns the saved record."
    )]
    async fn save_session(&self) -> McpResult {
        self.handlers().save_session().await
    }

    #[tool(
        name = "cancel_session",
        description = "Discard the draft and close the dialog without saving."
    )]
    async fn cancel_session(&self) -> McpResult {
        self.handlers().cancel_session().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for OkrMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "okr".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: OkrMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting OKR MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
