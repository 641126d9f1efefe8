//! MCP server for the contact book.
//!
//! This module exposes the contact workflow to MCP clients over stdio.

pub mod handlers;

pub use handlers::{to_mcp_error, ContactBookServer};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact book server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once
/// the client disconnects.
pub async fn run_server(server: ContactBookServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
