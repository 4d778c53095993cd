//! MCP server implementation for the conversation memory tools.
//!
//! Uses the rmcp SDK's macro-based approach for defining tools and prompts.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::{
    handler::server::{
        router::{prompt::PromptRouter, tool::ToolRouter},
        wrapper::Parameters,
    },
    model::*,
    prompt, prompt_handler, prompt_router, schemars, tool, tool_handler, tool_router,
    service::RequestContext,
    ErrorData as McpError, RoleServer, ServerHandler,
};

use convmem_client::EmbeddingApiClient;
use convmem_core::parse;
use convmem_core::types::{ConversationData, MessageMatch, SearchParams, StoreResponse};

use crate::tools::*;

/// MCP server for the conversation memory operations.
///
/// Wraps an [`EmbeddingApiClient`] and exposes it as the save-memory and
/// search-memory tools plus the matching prompt templates.
#[derive(Clone)]
pub struct ConversationMemoryServer {
    client: Arc<EmbeddingApiClient>,
    tool_router: ToolRouter<ConversationMemoryServer>,
    prompt_router: PromptRouter<ConversationMemoryServer>,
}

#[tool_router]
impl ConversationMemoryServer {
    /// Create a new server wrapping the given API client.
    pub fn new(client: EmbeddingApiClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    /// Store content in the vector database.
    ///
    /// Content that is itself a serialized message list is stored turn by
    /// turn; anything else becomes a single assistant message.
    #[tool(
        name = "save-memory",
        description = "Save content to vector database"
    )]
    async fn save_memory(
        &self,
        Parameters(input): Parameters<SaveMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let data = conversation_from_input(input);
        let response = self.client.store_conversation(&data).await;

        if !response.success {
            return Ok(CallToolResult::error(vec![Content::text(
                store_error_text(&response),
            )]));
        }

        Ok(CallToolResult::success(vec![Content::text(
            store_success_text(&response),
        )]))
    }

    /// Search stored content by semantic similarity.
    #[tool(
        name = "search-memory",
        description = "Search for information in vector database"
    )]
    async fn search_memory(
        &self,
        Parameters(input): Parameters<SearchMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let mut params = SearchParams::new(input.query).with_context(true);
        if let Some(count) = input.max_matches {
            params = params.with_match_count(count);
        }

        let response = self.client.search_conversations(&params).await;

        if !response.success {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Error searching content: {}",
                response.error.unwrap_or_default()
            ))]));
        }

        Ok(CallToolResult::success(vec![Content::text(
            search_result_text(&response.matches),
        )]))
    }
}

#[prompt_router]
impl ConversationMemoryServer {
    /// Suggest storing content via the save-memory tool.
    #[prompt(
        name = "save-memory",
        description = "Help store content in the vector database"
    )]
    async fn save_memory_prompt(
        &self,
        Parameters(args): Parameters<SaveMemoryPromptArgs>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                save_prompt_text(&args.path, &args.content),
            )],
        })
    }

    /// Suggest searching stored content via the search-memory tool.
    #[prompt(
        name = "search-memory",
        description = "Help search the vector database"
    )]
    async fn search_memory_prompt(
        &self,
        Parameters(args): Parameters<SearchMemoryPromptArgs>,
    ) -> Result<GetPromptResult, McpError> {
        Ok(GetPromptResult {
            description: None,
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                search_prompt_text(&args.query),
            )],
        })
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for ConversationMemoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "conversation-memory".to_string(),
                version: "1.0.0".to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Conversation Memory Server - stores content in a remote vector \
                 database and retrieves it by semantic similarity. Use save-memory \
                 to store content under a unique path, and search-memory to find \
                 previously stored content relevant to a query."
                    .to_string(),
            ),
        }
    }
}

/// Build the storable conversation from the tool input.
///
/// The conversation identifier is the sanitized path; the title prefers the
/// parent path; metadata records source, type, and the original path.
fn conversation_from_input(input: SaveMemoryInput) -> ConversationData {
    let conversation_id = parse::conversation_id_from_path(&input.path);
    let messages = parse::messages_from_content(&input.content);
    let title = input.parent_path.unwrap_or_else(|| input.path.clone());

    let metadata = HashMap::from([
        (
            "source".to_string(),
            input.source.unwrap_or_else(|| "api".to_string()),
        ),
        (
            "type".to_string(),
            input.content_type.unwrap_or_else(|| "markdown".to_string()),
        ),
        ("originalPath".to_string(), input.path),
    ]);

    ConversationData::new(conversation_id, messages)
        .with_title(title)
        .with_metadata(metadata)
}

fn store_error_text(response: &StoreResponse) -> String {
    format!(
        "Error storing content: {}",
        response.error.as_deref().unwrap_or("Unknown error")
    )
}

fn store_success_text(response: &StoreResponse) -> String {
    format!(
        "Successfully stored content with conversation ID: {}\nMessages processed: {}",
        response.conversation_id, response.messages
    )
}

fn search_result_text(matches: &[MessageMatch]) -> String {
    if matches.is_empty() {
        return "No matching content found for your query.".to_string();
    }
    matches
        .iter()
        .map(render_match)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one match block.
///
/// Enriched matches additionally carry the parent conversation's label and,
/// when present, the neighboring messages. Match order is the service's
/// ranking and is preserved as-is.
fn render_match(m: &MessageMatch) -> String {
    let similarity = (m.similarity * 100.0).round() as i64;
    let mut block = format!("--- Match ({similarity}% similarity) ---\n");
    block.push_str(&format!("{}: {}\n", m.role, m.content));

    if let Some(conversation) = &m.conversation {
        let label = conversation
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&conversation.conversation_id);
        block.push_str(&format!("\nFrom conversation: {label}\n"));

        if !m.context.is_empty() {
            block.push_str("\nContext:\n");
            for ctx in &m.context {
                block.push_str(&format!("{}: {}\n", ctx.role, ctx.content));
            }
        }
    }

    block
}

fn save_prompt_text(path: &str, content: &str) -> String {
    format!(
        "Please help me store the following content with path \"{path}\":\n\n{content}\n\n\
         You can use the save-memory tool to save this information."
    )
}

fn search_prompt_text(query: &str) -> String {
    format!(
        "Please search for information about: {query}\n\n\
         You can use the search-memory tool to find relevant information."
    )
}
