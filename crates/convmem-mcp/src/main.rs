//! Conversation Memory MCP Server - memory tools for Claude and other MCP
//! clients, backed by a remote vector embedding service.
//!
//! This binary exposes the save-memory and search-memory tools (and the
//! matching prompts) over stdio transport, which is the standard for local
//! MCP servers. Every tool call turns into one HTTP request against the
//! embedding service; nothing is stored locally.
//!
//! # Configuration
//!
//! - `CONVMEM_BASE_URL` - Optional, overrides the embedding service URL
//!   (defaults to the hosted service)
//! - `RUST_LOG` - Optional, tracing filter (logs go to stderr)
//!
//! # Usage with Claude Desktop
//!
//! Run `convmem-register` from the repository root after building, or add
//! an entry to `claude_desktop_config.json` manually:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "conversation-memory": {
//!       "command": "/path/to/convmem-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use convmem_client::EmbeddingApiClient;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod server;
mod tools;

use server::ConversationMemoryServer;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr (stdout is used for MCP transport)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting conversation-memory MCP server");

    let client = EmbeddingApiClient::from_env();
    let server = ConversationMemoryServer::new(client);

    // Serve via stdio transport
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Server error: {:?}", e);
    })?;

    tracing::info!("MCP server running on stdio");

    service.waiting().await?;
    Ok(())
}
