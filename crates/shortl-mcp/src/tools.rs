//! MCP tool definitions and result types
//!
//! Four tools, each a direct pass-through to the registry/dispatcher:
//!
//! - `shorten_url` - shorten a URL with a named provider
//! - `register_custom_provider` - register a provider from script source
//! - `delete_custom_provider` - remove a custom provider
//! - `list_providers` - list built-in and custom providers

use serde::{Deserialize, Serialize};

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

/// Result from a tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// Content types for tool results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a successful text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
            is_error: None,
        }
    }

    /// Create an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: Some(true),
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "shorten_url".to_string(),
            description: "Shorten a URL using a named provider (built-in or custom)".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL to shorten"
                    },
                    "provider": {
                        "type": "string",
                        "description": "Provider name, e.g. 'isgd' or 'tinyurl', or a registered custom provider"
                    }
                },
                "required": ["url", "provider"]
            }),
        },
        ToolDefinition {
            name: "register_custom_provider".to_string(),
            description: "Register a custom provider from script source text. The source must \
                          define exactly one function of one parameter, e.g. \
                          `fn tag(url) { \"x-\" + url }`; it runs in an isolated scope with no \
                          access to the host."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "function": {
                        "type": "string",
                        "description": "Provider script source text"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name to register under; defaults to the function's own name"
                    }
                },
                "required": ["function"]
            }),
        },
        ToolDefinition {
            name: "delete_custom_provider".to_string(),
            description: "Remove a custom provider. Built-in providers cannot be deleted."
                .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Custom provider name to remove"
                    }
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "list_providers".to_string(),
            description: "List all providers with their kind (builtin or custom)".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}
