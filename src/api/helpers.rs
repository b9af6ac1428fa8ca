//! Response builders for the Lambda HTTP boundary.
//!
//! Every response carries the CORS headers browsers need to call the
//! function directly.

use serde_json::{Map, Value, json};
use tracing::error;

use crate::core::models::{ErrorBody, SummaryResult};
use crate::errors::SummarizeError;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

fn cors_headers() -> Map<String, Value> {
    let mut headers = Map::new();
    headers.insert("Access-Control-Allow-Origin".to_string(), json!(CORS_ALLOW_ORIGIN));
    headers.insert("Access-Control-Allow-Headers".to_string(), json!(CORS_ALLOW_HEADERS));
    headers
}

fn json_headers() -> Value {
    let mut headers = cors_headers();
    headers.insert("Content-Type".to_string(), json!("application/json"));
    Value::Object(headers)
}

/// Returns the empty 200 answer to a CORS pre-flight request.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": Value::Object(cors_headers()),
        "body": ""
    })
}

/// Returns a 200 OK response carrying the structured summary.
#[must_use]
pub fn ok_summary(result: &SummaryResult) -> Value {
    match serde_json::to_string(result) {
        Ok(body) => json!({
            "statusCode": 200,
            "headers": json_headers(),
            "body": body
        }),
        Err(e) => {
            error!("Failed to serialize summary: {}", e);
            err_response(500, "Failed to process request")
        }
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    let body = ErrorBody {
        error: message.to_string(),
    };
    let body = serde_json::to_string(&body).unwrap_or_else(|e| {
        error!("Failed to serialize error body: {}", e);
        r#"{"error":"Unknown error occurred"}"#.to_string()
    });

    json!({
        "statusCode": status_code,
        "headers": json_headers(),
        "body": body
    })
}

#[must_use]
pub fn error_from(err: &SummarizeError) -> Value {
    err_response(err.status_code(), &err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_has_cors_and_empty_body() {
        let resp = preflight();
        assert_eq!(resp["statusCode"], 200);
        assert_eq!(resp["body"], "");
        assert_eq!(resp["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            resp["headers"]["Access-Control-Allow-Headers"],
            CORS_ALLOW_HEADERS
        );
    }

    #[test]
    fn test_error_from_hides_upstream_body() {
        let err = SummarizeError::Upstream {
            status: 500,
            body: "internal stack trace".to_string(),
        };
        let resp = error_from(&err);
        assert_eq!(resp["statusCode"], 500);
        let body = resp["body"].as_str().unwrap();
        assert!(!body.contains("stack trace"));
        assert_eq!(body, r#"{"error":"Failed to process request"}"#);
    }

    #[test]
    fn test_err_response_body_round_trips_as_error_body() {
        let resp = err_response(429, "Rate \"limited\"");
        assert_eq!(resp["statusCode"], 429);
        let body: ErrorBody = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
        assert_eq!(body.error, "Rate \"limited\"");
    }

    #[test]
    fn test_ok_summary_uses_camel_case_key_points() {
        let resp = ok_summary(&SummaryResult {
            summary: "s".to_string(),
            key_points: vec!["k".to_string()],
        });
        assert_eq!(resp["headers"]["Content-Type"], "application/json");
        let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, json!({ "summary": "s", "keyPoints": ["k"] }));
    }
}
