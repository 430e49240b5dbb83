use contracts::domain::a001_agenda::{Agenda, NewAgenda};
use contracts::domain::common::{Record, RecordId};
use contracts::system::endpoints;
use contracts::system::http::ApiRequest;

use crate::shared::api_utils::{delete_record, fetch_list, parse_value, send_checked};
use crate::shared::transport::Transport;
use crate::shared::ApiError;

/// Fetch all agendas, normalized
pub async fn fetch_agendas(transport: &dyn Transport) -> Result<Vec<Agenda>, ApiError> {
    fetch_list::<Agenda>(transport).await
}

/// Create an agenda (multipart: text fields plus optional `image` file)
pub async fn add_agenda(transport: &dyn Transport, agenda: &NewAgenda) -> Result<Agenda, ApiError> {
    let request = ApiRequest::post(endpoints::add_path(Agenda::collection_name()))
        .with_multipart(agenda.to_multipart());
    let response = send_checked(transport, request).await?;
    Ok(Agenda::normalize(&parse_value(&response)?))
}

/// Approve an agenda (`POST /admin/agendas/updateStatus/:id`)
pub async fn approve_agenda(transport: &dyn Transport, id: RecordId) -> Result<(), ApiError> {
    let request = ApiRequest::post(endpoints::update_status_path(
        Agenda::collection_name(),
        id,
    ));
    send_checked(transport, request).await?;
    Ok(())
}

/// Delete an agenda (`POST /admin/agendas/delete/:id`)
pub async fn delete_agenda(transport: &dyn Transport, id: RecordId) -> Result<(), ApiError> {
    delete_record::<Agenda>(transport, id).await
}
