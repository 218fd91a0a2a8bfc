//! MCP server implementation
//!
//! The main server struct coordinating MCP protocol handling with the
//! shortening registry.

use std::io::{BufRead, Write};

use serde_json::{json, Value};
use shortl_core::Shortener;

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability,
};
use crate::tools::{get_tool_definitions, ToolDefinition, ToolResult};
use crate::{Error, Result};

/// MCP server for shortl
///
/// Speaks JSON-RPC 2.0 over stdio: requests and responses go through
/// stdout, logs go to stderr. The registry lives in the wrapped
/// [`Shortener`], so custom providers registered over the protocol stay
/// available for the lifetime of the server process.
pub struct ShortlMcpServer {
    shortener: Shortener,
    tools: Vec<ToolDefinition>,
}

impl ShortlMcpServer {
    /// Create a server around an existing shortener.
    pub fn new(shortener: Shortener) -> Self {
        Self {
            shortener,
            tools: get_tool_definitions(),
        }
    }

    /// Run the server: process MCP messages from stdin until EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{response}")?;
                    stdout.flush()?;
                }
                Ok(_) => {} // notification, no response
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {e}"));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{json_str}")?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message.
    ///
    /// Returns the JSON-RPC response as a string, or an empty string for
    /// notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: "2024-11-05".to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "shortl-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools: Vec<Value> = self
            .tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = serde_json::from_value(params)?;

        match handle_tool_call(&self.shortener, &tool_params.name, tool_params.arguments).await {
            Ok(result) => {
                // Bare strings (short URLs, provider names) go out verbatim;
                // structured results are pretty-printed.
                let text = match result {
                    Value::String(text) => text,
                    other => serde_json::to_string_pretty(&other)?,
                };
                let tool_result = ToolResult::text(text);
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
            Err(e) => {
                let tool_result = ToolResult::error(e.to_string());
                Ok(JsonRpcResponse::success(
                    id,
                    serde_json::to_value(tool_result)?,
                ))
            }
        }
    }

    /// Available tools.
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}
