//! Serves the mock route table over HTTP
//!
//! Every request that reaches the fallback is decoded into an
//! [`ApiRequest`] and offered to the registry. Unmatched requests are
//! forwarded upstream or answered with 404, depending on config.

use axum::body::{to_bytes, Body, Bytes};
use axum::extract::{FromRequest, Multipart, State};
use axum::http::{header, HeaderMap, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use contracts::system::http::{parse_form, ApiRequest, ApiResponse, FormPart, Method, RequestBody};
use mocks::MockRegistry;
use serde_json::{json, Value};
use std::sync::Arc;

use super::upstream::Upstream;
use crate::shared::config::UnhandledMode;

const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MockRegistry>,
    pub on_unhandled: UnhandledMode,
    pub upstream: Option<Arc<Upstream>>,
}

impl AppState {
    pub fn new(registry: MockRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            on_unhandled: UnhandledMode::Error,
            upstream: None,
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

/// Convert a mock answer into an HTTP response
fn into_http(response: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = if serde_json::from_str::<Value>(&response.body).is_ok() {
        "application/json"
    } else {
        "text/plain; charset=utf-8"
    };

    let mut http = (status, [(header::CONTENT_TYPE, content_type)], response.body).into_response();
    if let Some(cookie) = response.set_cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                http.headers_mut().insert(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Dropping invalid Set-Cookie '{}': {}", cookie, e),
        }
    }
    http
}

/// Decode a url-encoded or multipart body; anything else is treated as empty
async fn read_body(headers: &HeaderMap, bytes: Bytes) -> Result<RequestBody, String> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        let text = std::str::from_utf8(&bytes).map_err(|e| e.to_string())?;
        return Ok(RequestBody::Form(parse_form(text)));
    }

    if content_type.starts_with("multipart/form-data") {
        let request = Request::builder()
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(bytes))
            .map_err(|e| e.to_string())?;
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| e.to_string())?;

        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field.bytes().await.map_err(|e| e.to_string())?;
                    parts.push(FormPart::File {
                        name,
                        file_name,
                        content_type,
                        bytes: data.to_vec(),
                    });
                }
                None => {
                    let value = field.text().await.map_err(|e| e.to_string())?;
                    parts.push(FormPart::Text { name, value });
                }
            }
        }
        return Ok(RequestBody::Multipart(parts));
    }

    // Unlabelled or mislabelled bodies are still read as form fields
    match std::str::from_utf8(&bytes) {
        Ok(text) if !text.trim().is_empty() => Ok(RequestBody::Form(parse_form(text))),
        _ => Ok(RequestBody::Empty),
    }
}

/// Fallback handler: answer from the mock table
pub async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                &format!("Failed to read body: {}", e),
            )
        }
    };
    let path = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| parts.uri.path().to_string());

    if let Some(method) = Method::parse(parts.method.as_str()) {
        let body = match read_body(&parts.headers, bytes.clone()).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Bad request body for {} {}: {}", method, path, e);
                return error_response(StatusCode::BAD_REQUEST, &e);
            }
        };
        let api_request = ApiRequest {
            method,
            path: path.clone(),
            body,
        };
        if let Some(response) = state.registry.handle(&api_request) {
            tracing::debug!("[mock] {} -> {}", api_request, response.status);
            return into_http(response);
        }
    }

    match (state.on_unhandled, &state.upstream) {
        (UnhandledMode::Bypass, Some(upstream)) => {
            tracing::debug!("[mock] bypass {} {} -> {}", parts.method, path, upstream.base_url());
            match upstream.forward(&parts, bytes).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!("Upstream request {} {} failed: {}", parts.method, path, e);
                    error_response(StatusCode::BAD_GATEWAY, &format!("Upstream request failed: {}", e))
                }
            }
        }
        _ => {
            let message = format!("No mock handler for {} {}", parts.method, path);
            tracing::warn!("{}", message);
            error_response(StatusCode::NOT_FOUND, &message)
        }
    }
}
