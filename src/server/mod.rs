//! Stdio JSON-RPC dispatch for the tool surface. One request per line on
//! stdin, one response per line on stdout; logging goes to stderr so the
//! transport stays clean. Methods follow the agent tool protocol:
//! `initialize`, `tools/list`, `tools/call`, plus `ping`.

use log::{error, info, warn};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::api::FeedProvider;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::metrics;
use crate::tools::ToolRegistry;

const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

pub struct Server {
    info: ServerConfig,
    registry: ToolRegistry,
    feeds: Arc<dyn FeedProvider>,
}

impl Server {
    pub fn new(info: ServerConfig, registry: ToolRegistry, feeds: Arc<dyn FeedProvider>) -> Self {
        Self {
            info,
            registry,
            feeds,
        }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        info!(
            "{} v{} serving on stdio",
            self.info.name, self.info.version
        );

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut out = serde_json::to_vec(&response)?;
                out.push(b'\n');
                stdout.write_all(&out).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw request line. Returns `None` for notifications, which
    /// take no response.
    async fn handle_line(&self, line: &str) -> Option<Value> {
        let request: RpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("unparseable request: {}", e);
                return Some(error_response(
                    Value::Null,
                    PARSE_ERROR,
                    &format!("parse error: {}", e),
                ));
            }
        };

        let id = request.id.clone();
        let result = self.dispatch(&request).await;
        let id = id?; // notification: no response even on error

        Some(match result {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err((code, message)) => error_response(id, code, &message),
        })
    }

    async fn dispatch(&self, request: &RpcRequest) -> std::result::Result<Value, (i64, String)> {
        match request.method.as_str() {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": self.info.name,
                    "version": self.info.version,
                },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.registry.definitions() })),
            "tools/call" => self.call_tool(&request.params).await,
            other => Err((METHOD_NOT_FOUND, format!("method not found: {}", other))),
        }
    }

    /// Invoke one tool. A failed invocation is reported inside the result
    /// (`isError: true`) rather than as a JSON-RPC error, so the caller can
    /// read the failure text; only malformed params are protocol errors.
    async fn call_tool(&self, params: &Value) -> std::result::Result<Value, (i64, String)> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| (INVALID_PARAMS, "tools/call requires a tool name".to_string()))?;
        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        metrics::TOOL_CALLS.inc();
        match self.registry.invoke(name, &arguments, self.feeds.as_ref()).await {
            Ok(text) => Ok(json!({
                "content": [{ "type": "text", "text": text }],
            })),
            Err(e) => {
                metrics::TOOL_ERRORS.inc();
                error!("tool {} failed: {}", name, e);
                Ok(json!({
                    "content": [{ "type": "text", "text": format!("Error: {}", e) }],
                    "isError": true,
                }))
            }
        }
    }
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}
