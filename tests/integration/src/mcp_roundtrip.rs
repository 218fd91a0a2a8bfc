//! Full MCP protocol round-trips against a live registry

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shortl_core::Shortener;
use shortl_mcp::ShortlMcpServer;

fn server() -> ShortlMcpServer {
    ShortlMcpServer::new(Shortener::new().unwrap())
}

async fn call(server: &ShortlMcpServer, message: Value) -> Value {
    let response = server
        .handle_message(&message.to_string())
        .await
        .expect("message handling failed");
    serde_json::from_str(&response).expect("response is not JSON")
}

fn tool_call(id: u64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
}

fn result_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[tokio::test]
async fn full_session_register_list_shorten_delete() {
    let server = server();

    // handshake
    let init = call(
        &server,
        json!({ "jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {} }),
    )
    .await;
    assert_eq!(init["result"]["serverInfo"]["name"], "shortl-mcp");

    let listed = call(
        &server,
        json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" }),
    )
    .await;
    assert_eq!(listed["result"]["tools"].as_array().unwrap().len(), 4);

    // register a custom provider from source
    let registered = call(
        &server,
        tool_call(
            3,
            "register_custom_provider",
            json!({ "function": "fn f(url) { \"x-\" + url }" }),
        ),
    )
    .await;
    assert_eq!(result_text(&registered), "f");

    // the listing now carries type metadata for both categories
    let providers = call(&server, tool_call(4, "list_providers", json!({}))).await;
    let parsed: Value = serde_json::from_str(result_text(&providers)).unwrap();
    assert_eq!(
        parsed["providers"],
        json!([
            { "name": "isgd", "type": "builtin" },
            { "name": "tinyurl", "type": "builtin" },
            { "name": "f", "type": "custom" },
        ])
    );

    // dispatch through the registered provider
    let shortened = call(
        &server,
        tool_call(5, "shorten_url", json!({ "url": "abc", "provider": "f" })),
    )
    .await;
    assert_eq!(result_text(&shortened), "x-abc");

    // delete it and watch dispatch miss
    let deleted = call(
        &server,
        tool_call(6, "delete_custom_provider", json!({ "name": "f" })),
    )
    .await;
    let parsed: Value = serde_json::from_str(result_text(&deleted)).unwrap();
    assert_eq!(parsed, json!({ "deleted": true, "name": "f" }));

    let missed = call(
        &server,
        tool_call(7, "shorten_url", json!({ "url": "abc", "provider": "f" })),
    )
    .await;
    assert_eq!(missed["result"]["is_error"], true);
    assert_eq!(
        result_text(&missed),
        "provider 'f' not found (available: isgd, tinyurl)"
    );
}

#[tokio::test]
async fn policy_and_evaluation_errors_cross_the_protocol_verbatim() {
    let server = server();

    let overwrite = call(
        &server,
        tool_call(
            1,
            "register_custom_provider",
            json!({ "function": "fn isgd(url) { url }" }),
        ),
    )
    .await;
    assert_eq!(overwrite["result"]["is_error"], true);
    assert_eq!(
        result_text(&overwrite),
        "cannot overwrite built-in provider 'isgd'"
    );

    let broken = call(
        &server,
        tool_call(
            2,
            "register_custom_provider",
            json!({ "function": "fn f(url) {" }),
        ),
    )
    .await;
    assert_eq!(broken["result"]["is_error"], true);

    let empty = call(
        &server,
        tool_call(3, "register_custom_provider", json!({ "function": "  " })),
    )
    .await;
    assert_eq!(empty["result"]["is_error"], true);
    assert_eq!(
        result_text(&empty),
        "source text does not define a provider function"
    );
}
