mod pokeapi;

use serde::{Deserialize, Serialize};

pub use self::pokeapi::Lookup;
// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

/// Signals to the host runtime that tool answers should carry citations.
pub const CITATION: bool = true;

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
    pub experimental: ExperimentalCapabilities,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct ExperimentalCapabilities {
    pub citation: bool,
}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
            experimental: ExperimentalCapabilities { citation: CITATION },
        },
        server_info: ServerInfo {
            name: "pokeapi".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let tools = ToolsList {
        tools: Lookup::ALL.into_iter().map(Lookup::tool).collect(),
    };

    serde_json::to_value(tools).map_err(|e| JsonRpcError {
        code: -32603,
        message: format!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: format!("Invalid params: {e}"),
            data: None,
        })?;

    match Lookup::from_tool_name(&params.name) {
        Some(lookup) => pokeapi::handle_lookup(lookup, params.arguments, global).await,
        None => Err(JsonRpcError {
            code: -32602,
            message: format!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_advertises_citation() {
        let value = handle_initialize().unwrap();

        assert_eq!(value["protocolVersion"], json!("2024-11-05"));
        assert_eq!(value["capabilities"]["experimental"]["citation"], json!(true));
        assert_eq!(value["serverInfo"]["name"], json!("pokeapi"));
    }

    #[test]
    fn test_tools_list_names() {
        let value = handle_tools_list().unwrap();
        let names: Vec<&str> = value["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|tool| tool["name"].as_str().unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "get_pokemon_details",
                "get_ability_details",
                "get_pokemon_location",
                "get_pokemon_movelist",
                "get_item",
                "get_egg_groups",
            ]
        );
        assert!(value["tools"][0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let global = crate::Global {
            base_url: None,
            verbose: false,
        };

        let err = handle_tools_call(Some(json!({ "name": "get_berry" })), &global)
            .await
            .unwrap_err();

        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Unknown tool: get_berry");
    }

    #[tokio::test]
    async fn test_tools_call_invalid_params() {
        let global = crate::Global {
            base_url: None,
            verbose: false,
        };

        let err = handle_tools_call(None, &global).await.unwrap_err();

        assert_eq!(err.code, -32602);
        assert!(err.message.starts_with("Invalid params"));
    }
}
