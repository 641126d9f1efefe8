//! MCP tool handlers for the contact book server.
//!
//! This module implements the contact tools using the rmcp SDK's tool_router pattern.
//! Handlers only translate between tool parameters and the contact service;
//! every rule lives in the service.

use crate::domain::ContactId;
use crate::error::ContactError;
use crate::models::{ContactSubmission, ProfilePicture};
use crate::services::ContactService;
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactBookServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactBookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-book-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact address book - list, search, create, update and delete contacts with validated names, unique emails and phones, and optional profile pictures.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListContactsParams {
    /// Substring matched against name, email and phone
    #[serde(default)]
    search: Option<String>,
    /// Zero-based page index
    #[serde(default)]
    page: Option<i64>,
    /// Page size
    #[serde(default)]
    size: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateContactToolParams {
    name: String,
    email: String,
    phone: String,
    /// YYYY-MM-DD
    date_of_birth: String,
    #[serde(default)]
    profile_picture_base64: Option<String>,
    #[serde(default)]
    profile_picture_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactToolParams {
    id: i64,
    name: String,
    email: String,
    phone: String,
    /// YYYY-MM-DD
    date_of_birth: String,
    /// Leave out to keep the current picture
    #[serde(default)]
    profile_picture_base64: Option<String>,
    #[serde(default)]
    profile_picture_type: Option<String>,
}

/// Structured detail attached to tool errors.
#[derive(Debug, Serialize)]
struct ErrorDetail {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

/// Map a workflow error to the protocol error returned to the client.
///
/// Bad input and conflicts become `invalid_params`, a missing contact
/// becomes `resource_not_found`, and store failures become
/// `internal_error` with a generic message.
pub fn to_mcp_error(err: ContactError) -> McpError {
    let (code, kind, field) = match &err {
        ContactError::Validation(e) => (ErrorCode::INVALID_PARAMS, "validation", Some(e.field())),
        ContactError::PictureTooLarge { .. } => (
            ErrorCode::INVALID_PARAMS,
            "picture_too_large",
            Some("profile_picture"),
        ),
        ContactError::Conflict { field } => (ErrorCode::INVALID_PARAMS, "conflict", Some(*field)),
        ContactError::NotFound(_) => (ErrorCode::RESOURCE_NOT_FOUND, "not_found", None),
        ContactError::Internal(_) => (ErrorCode::INTERNAL_ERROR, "internal", None),
    };

    let message = match err {
        ContactError::Internal(_) => "An internal server error occurred".to_string(),
        other => other.to_string(),
    };

    McpError {
        code,
        message: Cow::from(message),
        data: serde_json::to_value(ErrorDetail { kind, field }).ok(),
    }
}

// Helper function to convert serialization errors to MCP errors
fn internal_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Decode an optional base64 picture payload.
fn decode_picture(
    payload: Option<String>,
    media_type: Option<String>,
) -> Result<Option<ProfilePicture>, McpError> {
    let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
        return Ok(None);
    };

    let bytes = B64.decode(payload.trim()).map_err(|e| McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(format!("Profile picture is not valid base64: {}", e)),
        data: serde_json::to_value(ErrorDetail {
            kind: "validation",
            field: Some("profile_picture"),
        })
        .ok(),
    })?;

    Ok(Some(ProfilePicture::new(bytes, media_type)))
}

fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(internal_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl ContactBookServer {
    /// Create a new contact book server on top of a contact service.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List contacts page by page, optionally filtered by a search term.
    #[tool(
        description = "List contacts in ascending id order. With a non-blank search term, only contacts whose name or email contains it (case-insensitive) or whose phone contains it are returned. Returns a page with content, pageNumber, pageSize, totalElements, totalPages and last."
    )]
    async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!(
            "MCP Handler: list_contacts search={:?} page={:?} size={:?}",
            params.search,
            params.page,
            params.size
        );

        let page = self
            .contact_service
            .list_contacts_paged(params.search.as_deref(), params.page, params.size)
            .await
            .map_err(to_mcp_error)?;

        json_result(&page)
    }

    /// Retrieve one contact by id.
    #[tool(description = "Retrieve a contact by its id")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.id);

        let contact = self
            .contact_service
            .get_contact(id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&contact)
    }

    /// Create a contact.
    #[tool(
        description = "Create a contact. The name needs at least two words, each capitalized except the lowercase connectors de, do, da and e. Email and phone must not belong to another contact. The phone may contain punctuation but must have 10 or 11 digits. date_of_birth is YYYY-MM-DD and cannot be in the future. An optional picture is passed as base64 with its media type."
    )]
    async fn create_contact(
        &self,
        params: Parameters<CreateContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: create_contact called");
        tracing::debug!(
            "Parameters: name={}, email={}, phone={}, date_of_birth={}, has_picture={}",
            params.name,
            params.email,
            params.phone,
            params.date_of_birth,
            params.profile_picture_base64.is_some()
        );

        let picture = decode_picture(params.profile_picture_base64, params.profile_picture_type)?;
        let submission =
            ContactSubmission::new(params.name, params.email, params.phone, params.date_of_birth);

        let contact = self
            .contact_service
            .create_contact(submission, picture)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create contact: {}", e);
                to_mcp_error(e)
            })?;

        tracing::info!("Contact created successfully: id={}", contact.id);
        json_result(&contact)
    }

    /// Replace the data of an existing contact.
    #[tool(
        description = "Update every field of an existing contact under the same rules as create_contact. The current picture is kept unless a new one is supplied."
    )]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let id = ContactId::new(params.id);

        tracing::info!("MCP Handler: update_contact called for id={}", id);

        let picture = decode_picture(params.profile_picture_base64, params.profile_picture_type)?;
        let submission =
            ContactSubmission::new(params.name, params.email, params.phone, params.date_of_birth);

        let contact = self
            .contact_service
            .update_contact(id, submission, picture)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update contact {}: {}", id, e);
                to_mcp_error(e)
            })?;

        json_result(&contact)
    }

    /// Delete a contact.
    #[tool(description = "Delete a contact by its id")]
    async fn delete_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let id = ContactId::new(params.0.id);

        self.contact_service
            .delete_contact(id)
            .await
            .map_err(to_mcp_error)?;

        json_result(&serde_json::json!({ "deleted": id }))
    }
}
