//! Helpers shared by the per-aggregate API modules
//!
//! A call fails when the transport fails or the status is not 2xx. The
//! error keeps the backend's own error text so pages can prefer it over
//! their fixed fallback messages.

use contracts::domain::common::{Record, RecordId};
use contracts::system::endpoints;
use contracts::system::http::{ApiRequest, ApiResponse};
use serde_json::Value;
use thiserror::Error;

use super::transport::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("-"))]
    Status { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// Rejected locally before anything was sent
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Error text sent by the backend, if any
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Send `request` and turn a non-2xx status into [`ApiError::Status`]
pub async fn send_checked(
    transport: &dyn Transport,
    request: ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let response = transport.send(request).await?;
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            message: response.error_text(),
        });
    }
    Ok(response)
}

pub fn parse_value(response: &ApiResponse) -> Result<Value, ApiError> {
    response
        .parse_json::<Value>()
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /admin/<collection>` normalized into records.
///
/// A body that is valid JSON but not an array yields an empty list.
pub async fn fetch_list<R: Record>(transport: &dyn Transport) -> Result<Vec<R>, ApiError> {
    let request = ApiRequest::get(endpoints::list_path(R::collection_name()));
    let response = send_checked(transport, request).await?;
    let raw = parse_value(&response)?;
    let records = R::normalize_list(&raw);
    log::debug!("Loaded {} {} records", records.len(), R::collection_name());
    Ok(records)
}

/// `POST /admin/<collection>/add` with a url-encoded form; returns the
/// normalized echo of the created record.
pub async fn add_form<R: Record>(
    transport: &dyn Transport,
    form: Vec<(String, String)>,
) -> Result<R, ApiError> {
    let request = ApiRequest::post(endpoints::add_path(R::collection_name())).with_form(form);
    let response = send_checked(transport, request).await?;
    Ok(R::normalize(&parse_value(&response)?))
}

/// `POST /admin/<collection>/delete/:id`
pub async fn delete_record<R: Record>(
    transport: &dyn Transport,
    id: RecordId,
) -> Result<(), ApiError> {
    let request = ApiRequest::post(endpoints::delete_path(R::collection_name(), id));
    send_checked(transport, request).await?;
    Ok(())
}
