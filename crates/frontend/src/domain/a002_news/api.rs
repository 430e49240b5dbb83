use contracts::domain::a002_news::{News, NewsDto};
use contracts::domain::common::RecordId;

use crate::shared::api_utils::{add_form, delete_record, fetch_list};
use crate::shared::transport::Transport;
use crate::shared::ApiError;

/// Fetch all news items
pub async fn fetch_news(transport: &dyn Transport) -> Result<Vec<News>, ApiError> {
    fetch_list::<News>(transport).await
}

/// Publish a news item; the form is validated before anything is sent
pub async fn add_news(transport: &dyn Transport, dto: &NewsDto) -> Result<News, ApiError> {
    dto.validate().map_err(ApiError::Invalid)?;
    add_form::<News>(transport, dto.to_form()).await
}

/// Delete a news item
pub async fn delete_news(transport: &dyn Transport, id: RecordId) -> Result<(), ApiError> {
    delete_record::<News>(transport, id).await
}
