//! JSON body parsing layer.
//!
//! Requests declaring `Content-Type: application/json` have their body
//! buffered and checked before routing, mirroring a conventional JSON body
//! parser: bodies over [`JSON_BODY_LIMIT`] are refused with 413, malformed
//! JSON or a scalar top-level value with 400. No handler consumes the
//! parsed value; the original bytes are passed on unchanged.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use serde_json::Value;

use crate::error::BodyRejection;

/// Maximum accepted JSON body size (100 KiB).
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Whether the request declares a JSON body.
fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Declared Content-Length, if present and well formed.
fn declared_length(request: &Request) -> Option<usize> {
    request
        .headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

/// Check that `bytes` holds an acceptable JSON body.
pub fn validate_json(bytes: &[u8]) -> Result<(), BodyRejection> {
    if bytes.is_empty() {
        return Ok(());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| BodyRejection::InvalidJson(e.to_string()))?;

    if value.is_object() || value.is_array() {
        Ok(())
    } else {
        Err(BodyRejection::NotObjectOrArray)
    }
}

/// Middleware that parses JSON request bodies before they reach a handler.
pub async fn json_body_layer(request: Request, next: Next) -> Response {
    if !is_json(&request) {
        return next.run(request).await;
    }

    if declared_length(&request).is_some_and(|len| len > JSON_BODY_LIMIT) {
        return BodyRejection::TooLarge {
            limit: JSON_BODY_LIMIT,
        }
        .into_response();
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, JSON_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to buffer request body");
            // Bodies without a Content-Length only hit the limit here.
            if e.into_inner().is::<LengthLimitError>() {
                return BodyRejection::TooLarge {
                    limit: JSON_BODY_LIMIT,
                }
                .into_response();
            }
            return BodyRejection::Unreadable.into_response();
        }
    };

    if let Err(rejection) = validate_json(&bytes) {
        return rejection.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
