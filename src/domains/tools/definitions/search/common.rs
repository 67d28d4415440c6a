//! Common utilities shared across CKMT search tools.
//!
//! Every tool funnels through [`call_api`], so upstream failures always come
//! back as an `{"error": ...}` value and never as a protocol error.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::gateway::{ApiGateway, ApiRequest, into_result_value};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Run a request and collapse the outcome into the tool result value.
pub async fn call_api(gateway: &ApiGateway, request: ApiRequest) -> Value {
    into_result_value(gateway.execute(&request).await)
}

/// Wrap a result value as a successful tool call.
///
/// Objects are also attached as structured content; the text content is the
/// compact JSON encoding either way.
pub fn api_result(value: Value) -> CallToolResult {
    let text = value.to_string();
    let structured_content = if value.is_object() { Some(value) } else { None };

    CallToolResult {
        content: vec![Content::text(text)],
        structured_content,
        is_error: Some(false),
        meta: None,
    }
}

/// Deserialize rmcp call arguments into a parameter struct.
pub fn parse_route_arguments<P: DeserializeOwned>(args: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Deserialize HTTP transport arguments into a parameter struct.
#[cfg(feature = "http")]
pub fn parse_arguments<P: DeserializeOwned>(arguments: Value) -> Result<P, ToolError> {
    // Missing arguments behave like an empty object
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Render a tool result as the JSON-RPC `tools/call` result body.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(obj)) = (result.structured_content, response.as_object_mut()) {
        obj.insert("structuredContent".to_string(), structured);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_api_result_object_is_structured() {
        let result = api_result(json!({ "total": 5 }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({ "total": 5 })));
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, r#"{"total":5}"#),
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn test_api_result_error_object_is_not_a_tool_error() {
        let result = api_result(json!({ "error": "Not found" }));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({ "error": "Not found" })));
    }

    #[test]
    fn test_api_result_array_is_text_only() {
        let result = api_result(json!(["http", "ssh"]));
        assert!(result.structured_content.is_none());
    }

    #[test]
    fn test_parse_route_arguments_rejects_wrong_type() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Params {
            ip: String,
        }

        let mut args = JsonObject::new();
        args.insert("ip".to_string(), json!(42));
        assert!(parse_route_arguments::<Params>(args).is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_response_includes_structured_content() {
        let response = http_response(api_result(json!({ "total": 1 })));
        assert_eq!(response["isError"], json!(false));
        assert_eq!(response["structuredContent"], json!({ "total": 1 }));
    }
}
