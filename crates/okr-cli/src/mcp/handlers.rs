//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use okr_core::{params as core, ObjectiveSession, SUPERVISOR_KEY_RESULTS};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any parameter type
/// without a dedicated wrapper struct per tool.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type Alignment = McpParams<core::Alignment>;
pub type ObjectiveText = McpParams<core::ObjectiveText>;
pub type SetDeadline = McpParams<core::SetDeadline>;
pub type KeyResultText = McpParams<core::KeyResultText>;
pub type KeyResultWeight = McpParams<core::KeyResultWeight>;
pub type KeyResultDeadline = McpParams<core::KeyResultDeadline>;
pub type RegenerateKeyResult = McpParams<core::RegenerateKeyResult>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text(output: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(output)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<ObjectiveSession>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<ObjectiveSession>>) -> Self {
        Self { session }
    }

    pub async fn open_session(&self) -> McpResult {
        debug!("open_session");
        text(self.session.lock().await.handle_open())
    }

    pub async fn list_alignments(&self) -> McpResult {
        debug!("list_alignments");
        let mut output = String::from("# Supervisor Key Results\n\n");
        for choice in SUPERVISOR_KEY_RESULTS {
            output.push_str(&format!("- {choice}\n"));
        }
        text(output)
    }

    pub async fn set_alignment(&self, Parameters(params): Parameters<Alignment>) -> McpResult {
        debug!("set_alignment: {:?}", params);
        text(self.session.lock().await.handle_set_alignment(params.as_ref()))
    }

    pub async fn set_objective(&self, Parameters(params): Parameters<ObjectiveText>) -> McpResult {
        debug!("set_objective: {:?}", params);
        text(self.session.lock().await.handle_set_objective(params.as_ref()))
    }

    pub async fn set_deadline(&self, Parameters(params): Parameters<SetDeadline>) -> McpResult {
        debug!("set_deadline: {:?}", params);
        let output = self
            .session
            .lock()
            .await
            .handle_set_deadline(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to set deadline", &e))?;
        text(output)
    }

    pub async fn add_key_result(&self) -> McpResult {
        debug!("add_key_result");
        text(self.session.lock().await.handle_add_key_result())
    }

    pub async fn delete_key_result(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_key_result: {:?}", params);
        text(self.session.lock().await.handle_delete_key_result(params.as_ref()))
    }

    pub async fn update_key_result_text(
        &self,
        Parameters(params): Parameters<KeyResultText>,
    ) -> McpResult {
        debug!("update_key_result_text: {:?}", params);
        text(
            self.session
                .lock()
                .await
                .handle_update_key_result_text(params.as_ref()),
        )
    }

    pub async fn update_key_result_weight(
        &self,
        Parameters(params): Parameters<KeyResultWeight>,
    ) -> McpResult {
        debug!("update_key_result_weight: {:?}", params);
        text(
            self.session
                .lock()
                .await
                .handle_update_key_result_weight(params.as_ref()),
        )
    }

    pub async fn update_key_result_deadline(
        &self,
        Parameters(params): Parameters<KeyResultDeadline>,
    ) -> McpResult {
        debug!("update_key_result_deadline: {:?}", params);
        let output = self
            .session
            .lock()
            .await
            .handle_update_key_result_deadline(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to set key result deadline", &e))?;
        text(output)
    }

    pub async fn add_milestone(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("add_milestone: {:?}", params);
        text(self.session.lock().await.handle_add_milestone(params.as_ref()))
    }

    pub async fn regenerate_key_result(
        &self,
        Parameters(params): Parameters<RegenerateKeyResult>,
    ) -> McpResult {
        debug!("regenerate_key_result: {:?}", params);
        text(
            self.session
                .lock()
                .await
                .handle_regenerate_key_result(params.as_ref()),
        )
    }

    pub async fn request_suggestion(&self) -> McpResult {
        debug!("request_suggestion");
        text(self.session.lock().await.handle_request_suggestion())
    }

    pub async fn accept_suggestion(&self) -> McpResult {
        debug!("accept_suggestion");
        text(self.session.lock().await.handle_accept_suggestion())
    }

    pub async fn dismiss_suggestion(&self) -> McpResult {
        debug!("dismiss_suggestion");
        text(self.session.lock().await.handle_dismiss_suggestion())
    }

    pub async fn show_session(&self) -> McpResult {
        debug!("show_session");
        text(self.session.lock().await.handle_show())
    }

    pub async fn save_session(&self) -> McpResult {
        debug!("save_session");
        let output = self
            .session
            .lock()
            .await
            .handle_save()
            .map_err(|e| to_mcp_error("Failed to save objective", &e))?;
        text(output)
    }

    pub async fn cancel_session(&self) -> McpResult {
        debug!("cancel_session");
        text(self.session.lock().await.handle_cancel())
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let prompts = get_prompt_templates()
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                description: Some(arg.description.clone()),
                                title: None,
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let arguments = request.arguments.as_ref();
        let prompt_text = template
            .apply(|name| arguments.and_then(|args| args.get(name)).and_then(|v| v.as_str()))
            .map_err(|missing| {
                McpError::invalid_params(
                    format!("Required argument '{missing}' is missing"),
                    None,
                )
            })?;

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
