//! MCP protocol integration tests.
//!
//! These tests spawn the actual `smarty-mcfly serve` process and communicate
//! via JSON-RPC over stdio, testing the complete MCP protocol flow.
//!
//! The rmcp library uses line-delimited JSON (each message is one line):
//! ```
//! {"jsonrpc":"2.0","id":1,"method":"initialize",...}\n
//! {"jsonrpc":"2.0","id":1,"result":{...}}\n
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};

mod common;
use common::{read, serve_once, PASSTHROUGH};

/// JSON-RPC 2.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: Option<u64>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct JsonRpcError {
    code: i64,
    message: String,
    data: Option<Value>,
}

/// MCP test client that spawns and communicates with the server
struct McpTestClient {
    child: Child,
    request_id: u64,
    reader: BufReader<std::process::ChildStdout>,
}

impl McpTestClient {
    /// Spawn a server whose working directory is `project`, with the
    /// converter replaced by a passthrough and cloning disabled.
    fn spawn(project: &Path) -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_smarty-mcfly"))
            .arg("serve")
            .current_dir(project)
            .env("SMARTY_MCFLY_PANDOC", PASSTHROUGH)
            .env("SMARTY_MCFLY_GIT", "false")
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to spawn smarty-mcfly serve");

        let stdout = child.stdout.take().expect("Failed to get stdout");
        let reader = BufReader::new(stdout);

        Self {
            child,
            request_id: 0,
            reader,
        }
    }

    /// Send a message as line-delimited JSON
    fn send_message(&mut self, content: &str) {
        let stdin = self.child.stdin.as_mut().expect("Failed to get stdin");
        writeln!(stdin, "{}", content).expect("Failed to write message");
        stdin.flush().expect("Failed to flush stdin");
    }

    /// Read a message as line-delimited JSON
    fn read_message(&mut self) -> String {
        let mut line = String::new();
        self.reader
            .read_line(&mut line)
            .expect("Failed to read line");
        line.trim().to_string()
    }

    /// Send a JSON-RPC request and get the response
    fn request(&mut self, method: &str, params: Option<Value>) -> JsonRpcResponse {
        self.request_id += 1;
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.request_id,
            method: method.to_string(),
            params,
        };

        let request_json = serde_json::to_string(&request).expect("Failed to serialize request");
        self.send_message(&request_json);

        let response_json = self.read_message();
        serde_json::from_str(&response_json).expect("Failed to parse response")
    }

    /// Send initialize request and initialized notification (required first messages)
    fn initialize(&mut self) -> JsonRpcResponse {
        let response = self.request(
            "initialize",
            Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "1.0.0"
                }
            })),
        );

        // Send initialized notification (required by MCP protocol)
        let notification = json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized"
        });
        self.send_message(&notification.to_string());

        response
    }

    /// List available tools
    fn list_tools(&mut self) -> JsonRpcResponse {
        self.request("tools/list", None)
    }

    /// Call a tool with parameters
    fn call_tool(&mut self, name: &str, arguments: Value) -> JsonRpcResponse {
        self.request(
            "tools/call",
            Some(json!({
                "name": name,
                "arguments": arguments
            })),
        )
    }
}

impl Drop for McpTestClient {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

// ============================================================
// Protocol Tests
// ============================================================

const TOOLS: [&str; 7] = [
    "setup_smarts",
    "learn_from_url",
    "learn_from_man",
    "learn_from_javadoc",
    "learn_from_sphinx",
    "learn_from_godoc",
    "learn_from_rustdoc",
];

fn is_error(response: &JsonRpcResponse) -> bool {
    response.error.is_some()
        || response
            .result
            .as_ref()
            .and_then(|r| r.get("isError"))
            .and_then(|e| e.as_bool())
            .unwrap_or(false)
}

/// Helper to extract text content from MCP tool response
fn extract_text_content(response: &JsonRpcResponse) -> String {
    response
        .result
        .as_ref()
        .and_then(|r| r.get("content"))
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|c| c.get("text"))
        .and_then(|t| t.as_str())
        .expect("Expected text content in response")
        .to_string()
}

mod protocol {
    use super::*;

    #[test]
    fn initialize_returns_server_info() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        let response = client.initialize();

        assert!(response.error.is_none(), "Expected success, got error");
        let result = response.result.expect("Expected result");

        assert_eq!(result["serverInfo"]["name"].as_str(), Some("smarty-mcfly"));
        assert!(result.get("capabilities").is_some());
        assert!(result["instructions"]
            .as_str()
            .is_some_and(|i| i.contains(".smarts/MANIFEST.md")));
    }

    #[test]
    fn tools_list_returns_all_tools() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.list_tools();
        assert!(response.error.is_none(), "Expected success, got error");

        let result = response.result.expect("Expected result");
        let tools_array = result
            .get("tools")
            .and_then(|t| t.as_array())
            .expect("Tools should be array");

        assert_eq!(
            tools_array.len(),
            TOOLS.len(),
            "Expected {} tools, got {}",
            TOOLS.len(),
            tools_array.len()
        );

        let tool_names: Vec<&str> = tools_array
            .iter()
            .filter_map(|t| t.get("name").and_then(|n| n.as_str()))
            .collect();
        for name in TOOLS {
            assert!(tool_names.contains(&name), "missing tool {}", name);
        }
    }

    #[test]
    fn tools_have_descriptions_and_schemas() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.list_tools();
        let result = response.result.expect("Expected result");
        let tools = result
            .get("tools")
            .expect("Expected tools")
            .as_array()
            .expect("Tools should be array");

        for tool in tools {
            let name = tool.get("name").and_then(|n| n.as_str()).unwrap_or("?");
            assert!(
                tool.get("description").is_some(),
                "Tool {} missing description",
                name
            );
            assert!(
                tool.get("inputSchema").is_some(),
                "Tool {} missing inputSchema",
                name
            );
        }
    }

    #[test]
    fn rustdoc_tool_takes_a_crate_argument() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let result = client.list_tools().result.expect("Expected result");
        let tool = result["tools"]
            .as_array()
            .and_then(|tools| tools.iter().find(|t| t["name"] == "learn_from_rustdoc"))
            .expect("Expected learn_from_rustdoc");

        let properties = &tool["inputSchema"]["properties"];
        assert!(properties.get("crate").is_some());
        assert!(properties.get("project_root").is_some());
    }
}

// ============================================================
// Tool Call Tests
// ============================================================

mod tool_calls {
    use super::*;

    #[test]
    fn setup_smarts_reports_existing_store() {
        let project = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(project.path().join(".smarts")).unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.call_tool("setup_smarts", json!({}));

        assert!(!is_error(&response), "Expected success, got {:?}", response);
        assert!(extract_text_content(&response).contains("Smarts already available at"));
    }

    #[test]
    fn setup_smarts_clone_failure_is_an_error() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.call_tool(
            "setup_smarts",
            json!({ "project_root": project.path().to_str().unwrap() }),
        );

        assert!(is_error(&response));
        assert!(!project.path().join(".smarts").exists());
    }

    #[test]
    fn learn_from_url_files_the_page() {
        let project = tempfile::tempdir().unwrap();
        let url = serve_once(200, "<h1>Requests</h1>");
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.call_tool(
            "learn_from_url",
            json!({ "topic": "python", "subtopic": "requests", "url": url }),
        );

        assert!(!is_error(&response), "Expected success, got {:?}", response);
        assert!(extract_text_content(&response).starts_with("Documentation saved to "));

        let store = project.path().join(".smarts");
        assert_eq!(read(store.join("python/requests.md")), "<h1>Requests</h1>");
        assert!(read(store.join("MANIFEST.md")).contains("- [requests](python/requests.md)"));
    }

    #[test]
    fn learn_from_url_honours_project_root() {
        let cwd = tempfile::tempdir().unwrap();
        let project = tempfile::tempdir().unwrap();
        let url = serve_once(200, "docs");
        let mut client = McpTestClient::spawn(cwd.path());
        client.initialize();

        let response = client.call_tool(
            "learn_from_url",
            json!({
                "topic": "web",
                "subtopic": "page",
                "url": url,
                "project_root": project.path().to_str().unwrap()
            }),
        );

        assert!(!is_error(&response), "Expected success, got {:?}", response);
        assert!(project.path().join(".smarts/web/page.md").exists());
        assert!(!cwd.path().join(".smarts").exists());
    }
}

// ============================================================
// Error Handling Tests
// ============================================================

mod errors {
    use super::*;

    #[test]
    fn invalid_tool_name_returns_error() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.call_tool("nonexistent_tool", json!({}));

        assert!(response.error.is_some(), "Expected error for invalid tool");
    }

    #[test]
    fn fetch_failure_returns_error_and_writes_nothing() {
        let project = tempfile::tempdir().unwrap();
        let url = serve_once(404, "missing");
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        let response = client.call_tool(
            "learn_from_url",
            json!({ "topic": "python", "subtopic": "requests", "url": url }),
        );

        assert!(is_error(&response));
        assert!(!project.path().join(".smarts").exists());
    }

    #[test]
    fn missing_required_param_returns_error() {
        let project = tempfile::tempdir().unwrap();
        let mut client = McpTestClient::spawn(project.path());
        client.initialize();

        // learn_from_url requires 'url'
        let response = client.call_tool(
            "learn_from_url",
            json!({ "topic": "python", "subtopic": "requests" }),
        );

        assert!(is_error(&response));
    }
}
