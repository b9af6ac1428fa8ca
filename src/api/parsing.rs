use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::SummarizeRequest;
use crate::errors::SummarizeError;

/// HTTP method of a Function URL / HTTP API (v2) or REST API (v1) event.
pub fn request_method(payload: &Value) -> Option<&str> {
    payload
        .pointer("/requestContext/http/method")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("httpMethod").and_then(|v| v.as_str()))
}

pub fn is_preflight(payload: &Value) -> bool {
    request_method(payload).is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
}

/// Returns the request body, base64-decoding it when the event says so.
pub fn extract_body(payload: &Value) -> Result<String, SummarizeError> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Err(SummarizeError::InvalidRequest("Missing body".to_string()));
    };

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| SummarizeError::InvalidRequest(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| SummarizeError::InvalidRequest(format!("Body is not valid UTF-8: {e}")))
}

pub fn parse_summarize_request(body: &str) -> Result<SummarizeRequest, SummarizeError> {
    serde_json::from_str(body)
        .map_err(|e| SummarizeError::InvalidRequest(format!("Invalid JSON body: {e}")))
}
