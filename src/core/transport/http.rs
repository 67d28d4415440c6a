//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over POST, for clients that cannot spawn the server as a
//! subprocess. Only the tool surface of MCP is served.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use ::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::ToolError;

/// MCP protocol revision reported by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(e: ToolError) -> Self {
        Self {
            code: -32602,
            message: e.to_string(),
        }
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for a server.
    pub fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(server)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC at POST {}, CORS {})",
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<McpServer>) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", request.method.as_str());
    debug!("Received JSON-RPC request");
    (StatusCode::OK, Json(process_request(&server, request).await))
}

/// Process a JSON-RPC request and return the response.
pub async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(
            request.id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": server.name(),
                    "version": server.version()
                },
                "instructions": server.instructions()
            }),
        ),

        "tools/list" => JsonRpcResponse::success(request.id, json!({ "tools": server.list_tools() })),

        "tools/call" => handle_tools_call(server, request).await,

        "ping" => JsonRpcResponse::success(request.id, json!({})),

        // Stateless over HTTP: acknowledge and move on
        method if method.starts_with("notifications/") => {
            debug!("Received notification: {}", method);
            JsonRpcResponse::success(request.id, Value::Null)
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

async fn handle_tools_call(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    let Some(params) = request.params else {
        return JsonRpcResponse::invalid_params(request.id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
        return JsonRpcResponse::invalid_params(request.id, "Missing tool name");
    };

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    info!("Calling tool {} over HTTP", name);
    match server.call_tool(name, arguments).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(e.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ApiConfig, Config};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rpc(method: &str, params: Option<Value>) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    fn server_for(base_url: String) -> McpServer {
        McpServer::new(Config::default().with_api(ApiConfig::new(base_url, "k"))).unwrap()
    }

    #[tokio::test]
    async fn test_rejects_wrong_version() {
        let server = McpServer::new(Config::default()).unwrap();
        let mut request = rpc("tools/list", None);
        request.jsonrpc = "1.0".to_string();
        let response = process_request(&server, request).await;
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[tokio::test]
    async fn test_initialize_reports_tools_only() {
        let server = McpServer::new(Config::default()).unwrap();
        let response = process_request(&server, rpc("initialize", None)).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "ckmt-search");
        assert_eq!(result["capabilities"], json!({ "tools": {} }));
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = McpServer::new(Config::default()).unwrap();
        let response = process_request(&server, rpc("tools/list", None)).await;
        assert_eq!(response.result.unwrap()["tools"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = McpServer::new(Config::default()).unwrap();
        let response = process_request(&server, rpc("resources/list", None)).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = McpServer::new(Config::default()).unwrap();
        let response = process_request(
            &server,
            rpc("tools/call", Some(json!({ "name": "nope", "arguments": {} }))),
        )
        .await;
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("nope"));
    }

    #[tokio::test]
    async fn test_tools_call_returns_upstream_error_as_result() {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search/host/10.1.2.3"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&upstream)
            .await;

        let server = server_for(upstream.uri());
        let response = process_request(
            &server,
            rpc(
                "tools/call",
                Some(json!({ "name": "search_host", "arguments": { "ip": "10.1.2.3" } })),
            ),
        )
        .await;

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], json!(false));
        assert_eq!(result["structuredContent"], json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_health_check_reports_timestamp() {
        let body = health_check().await.into_response().into_body();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["status"], "healthy");
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
