//! MCP tool handlers
//!
//! Each handler deserializes its arguments, calls straight into the
//! [`Shortener`], and returns the result as JSON. Registry and dispatcher
//! errors bubble up unchanged; the server layer turns them into `is_error`
//! tool results with the original message.

use serde::Deserialize;
use serde_json::{json, Value};
use shortl_core::{Registration, Shortener};

use crate::{Error, Result};

/// Handle a tool call by dispatching to the appropriate handler
pub async fn handle_tool_call(
    shortener: &Shortener,
    tool_name: &str,
    arguments: Value,
) -> Result<Value> {
    match tool_name {
        "shorten_url" => handle_shorten(shortener, arguments).await,
        "register_custom_provider" => handle_register(shortener, arguments),
        "delete_custom_provider" => handle_delete(shortener, arguments),
        "list_providers" => handle_list(shortener),
        _ => Err(Error::UnknownTool(tool_name.to_string())),
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments).map_err(|e| Error::InvalidArguments {
        message: e.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct ShortenArgs {
    url: String,
    provider: String,
}

async fn handle_shorten(shortener: &Shortener, arguments: Value) -> Result<Value> {
    let args: ShortenArgs = parse_args(arguments)?;
    let short = shortener.shorten(&args.url, args.provider).await?;
    Ok(Value::String(short))
}

#[derive(Debug, Deserialize)]
struct RegisterArgs {
    function: String,
    #[serde(default)]
    name: Option<String>,
}

fn handle_register(shortener: &Shortener, arguments: Value) -> Result<Value> {
    let args: RegisterArgs = parse_args(arguments)?;
    let name =
        shortener.register_custom(Registration::Source(args.function), args.name.as_deref())?;
    Ok(Value::String(name))
}

#[derive(Debug, Deserialize)]
struct DeleteArgs {
    name: String,
}

fn handle_delete(shortener: &Shortener, arguments: Value) -> Result<Value> {
    let args: DeleteArgs = parse_args(arguments)?;
    let deleted = shortener.delete_custom(&args.name)?;
    Ok(json!({ "deleted": deleted, "name": args.name }))
}

fn handle_list(shortener: &Shortener) -> Result<Value> {
    let providers: Vec<Value> = shortener
        .list_all()
        .into_iter()
        .map(|(name, kind)| json!({ "name": name, "type": kind.as_str() }))
        .collect();
    Ok(json!({ "providers": providers }))
}
