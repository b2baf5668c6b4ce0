//! Request payload normalization for gateway-translated tool calls.
//!
//! Gateways that translate MCP calls into REST requests serialize absent
//! optional object and array fields as empty strings instead of `null` or
//! `{}`. POST bodies are rewritten before any handler deserializes them.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

/// Upper bound on buffered request bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Fields that must be objects. Anything else becomes `{}`.
const OBJECT_FIELDS: &[&str] = &["metadata", "arguments"];
/// Object fields where `""` means absent.
const NULLABLE_OBJECT_FIELDS: &[&str] = &["agent", "text"];
/// Fields that must be arrays. Anything else becomes `null`.
const LIST_FIELDS: &[&str] = &["tools"];
/// String fields dropped entirely when empty.
const STRIP_EMPTY_FIELDS: &[&str] = &[
    "instructions",
    "model",
    "previous_response_id",
    "tool_choice",
    "truncation",
];
/// Conversation ids shorter than this are gateway-invented and dropped.
const MIN_CONVERSATION_ID_LEN: usize = 55;

/// Normalize a JSON payload in place. Returns true if anything changed.
pub fn sanitize(payload: &mut Value) -> bool {
    let Value::Object(fields) = payload else {
        return false;
    };

    let mut changed = false;

    for &name in OBJECT_FIELDS {
        if let Some(value) = fields.get_mut(name) {
            if !value.is_object() {
                *value = Value::Object(Map::new());
                changed = true;
            }
        }
    }

    for &name in NULLABLE_OBJECT_FIELDS {
        if let Some(value) = fields.get_mut(name) {
            if value.as_str() == Some("") {
                *value = Value::Null;
                changed = true;
            }
        }
    }

    for &name in LIST_FIELDS {
        if let Some(value) = fields.get_mut(name) {
            if !value.is_array() && !value.is_null() {
                *value = Value::Null;
                changed = true;
            }
        }
    }

    for &name in STRIP_EMPTY_FIELDS {
        if fields.get(name).and_then(Value::as_str) == Some("") {
            fields.remove(name);
            changed = true;
        }
    }

    let drop_conversation = match fields.get("conversation") {
        Some(Value::String(id)) => id.chars().count() < MIN_CONVERSATION_ID_LEN,
        Some(Value::Object(conversation)) => conversation.get("id").map_or(true, is_blank),
        _ => false,
    };
    if drop_conversation {
        fields.remove("conversation");
        changed = true;
    }

    changed
}

/// Null, false, zero and empty values count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Middleware applying [`sanitize`] to POST bodies.
///
/// Bodies that are not JSON objects pass through untouched so the handler
/// reports the real deserialization error.
pub async fn sanitize_payload(request: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    if request.method() != Method::POST {
        return Ok(next.run(request).await);
    }

    let (mut parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to buffer request body: {}", e);
            StatusCode::PAYLOAD_TOO_LARGE
        })?;

    let sanitized = serde_json::from_slice::<Value>(&bytes)
        .ok()
        .and_then(|mut payload| sanitize(&mut payload).then_some(payload));

    let body = match sanitized {
        Some(payload) => {
            tracing::debug!("Sanitized payload for {}", parts.uri.path());
            let rewritten = serde_json::to_vec(&payload).map_err(|e| {
                tracing::error!("Failed to re-serialize payload: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?;
            parts.headers.remove(header::CONTENT_LENGTH);
            Body::from(rewritten)
        }
        None => Body::from(bytes),
    };

    Ok(next.run(Request::from_parts(parts, body)).await)
}
