//! MCP server for shortl
//!
//! Exposes the URL-shortening registry over the Model Context Protocol so
//! agentic clients (Claude Desktop and friends) can register, inspect, and
//! invoke providers.
//!
//! # Architecture
//!
//! The crate is a facade over `shortl-core`:
//!
//! ```text
//! [ MCP Client ]
//!       | (JSON-RPC 2.0 over stdio)
//!       v
//! [ shortl-mcp (this crate) ]
//!       | (Rust API)
//!       v
//! [ shortl-core: Shortener / ProviderRegistry ]
//! ```
//!
//! # Tools
//!
//! - `shorten_url` - shorten a URL with a named provider
//! - `register_custom_provider` - register a provider from script source
//! - `delete_custom_provider` - remove a custom provider
//! - `list_providers` - list all providers with their kind
//!
//! Tool failures carry the registry/dispatcher error message verbatim in an
//! `is_error` result; the server never rewrites them.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::ShortlMcpServer;
pub use tools::{get_tool_definitions, ToolContent, ToolDefinition, ToolResult};
