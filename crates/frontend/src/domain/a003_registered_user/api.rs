use contracts::domain::a003_registered_user::{RegisteredUser, RegisteredUserDto};
use contracts::system::endpoints;
use contracts::system::http::{ApiRequest, FormPart};
use serde::Deserialize;

use crate::shared::api_utils::{add_form, fetch_list, parse_value, send_checked};
use crate::shared::transport::Transport;
use crate::shared::ApiError;

/// Summary returned by the CSV import endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CsvImportSummary {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub imported: u64,
}

/// Fetch all registered users
pub async fn fetch_users(transport: &dyn Transport) -> Result<Vec<RegisteredUser>, ApiError> {
    fetch_list::<RegisteredUser>(transport).await
}

/// Register one user
pub async fn add_user(
    transport: &dyn Transport,
    dto: &RegisteredUserDto,
) -> Result<RegisteredUser, ApiError> {
    dto.validate().map_err(ApiError::Invalid)?;
    add_form::<RegisteredUser>(transport, dto.to_form()).await
}

/// Bulk import from a CSV file (multipart field `file`)
pub async fn upload_users_csv(
    transport: &dyn Transport,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<CsvImportSummary, ApiError> {
    let request = ApiRequest::post(endpoints::USERS_UPLOAD_CSV).with_multipart(vec![
        FormPart::File {
            name: "file".to_string(),
            file_name: file_name.to_string(),
            content_type: "text/csv".to_string(),
            bytes,
        },
    ]);
    let response = send_checked(transport, request).await?;
    let summary = serde_json::from_value::<CsvImportSummary>(parse_value(&response)?)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    log::info!("CSV import: {} users", summary.imported);
    Ok(summary)
}
