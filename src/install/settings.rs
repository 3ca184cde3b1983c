//! MCP server registration in JSON settings files.
//!
//! Two shapes are recognized by their top-level key:
//! - `mcpServers` (Claude Desktop): `{"mcpServers": {"<name>": {"command", "args"}}}`
//! - `mcp.servers` (VS Code): `{"mcp": {"servers": {"<name>": {"type": "stdio", "command", "args"}}}}`

use serde_json::{json, Map, Value};

/// Name the server is registered under.
pub const SERVER_NAME: &str = "smarty-mcfly";
/// Command launching the stdio server.
pub const SERVER_COMMAND: &str = "smarty-mcfly";
pub const SERVER_ARGS: [&str; 1] = ["serve"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    ClaudeDesktop,
    VsCode,
}

impl SettingsFormat {
    pub fn detect(settings: &Map<String, Value>) -> Self {
        if settings.contains_key("mcp") {
            Self::VsCode
        } else {
            Self::ClaudeDesktop
        }
    }

    /// The server descriptor in this format's shape.
    pub fn server_entry(self) -> Value {
        match self {
            Self::ClaudeDesktop => json!({
                "command": SERVER_COMMAND,
                "args": SERVER_ARGS,
            }),
            Self::VsCode => json!({
                "type": "stdio",
                "command": SERVER_COMMAND,
                "args": SERVER_ARGS,
            }),
        }
    }
}

/// Return a copy of `settings` with this server registered. Other keys and
/// other servers are preserved; an existing registration is replaced in place.
pub fn add_mcp_server(settings: &Value) -> Result<Value, String> {
    let mut settings = settings.clone();
    let root = settings
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;

    let format = SettingsFormat::detect(root);
    let servers = match format {
        SettingsFormat::VsCode => {
            let mcp = root
                .get_mut("mcp")
                .and_then(Value::as_object_mut)
                .ok_or_else(|| "\"mcp\" is not an object".to_string())?;
            object_entry(mcp, "servers").ok_or_else(|| "\"mcp.servers\" is not an object".to_string())?
        }
        SettingsFormat::ClaudeDesktop => object_entry(root, "mcpServers")
            .ok_or_else(|| "\"mcpServers\" is not an object".to_string())?,
    };
    servers.insert(SERVER_NAME.to_string(), format.server_entry());

    Ok(settings)
}

/// Serialize settings the way they are written back: two-space indent and a
/// trailing newline.
pub fn render_settings(settings: &Value) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(settings)?;
    text.push('\n');
    Ok(text)
}

/// The object under `key`, created empty if missing.
fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    map.entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}
