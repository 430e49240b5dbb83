use contracts::system::http::{ApiRequest, ApiResponse};
use serde_json::json;

use super::{ack, new_id, now_iso};
use crate::fixtures;
use crate::registry::PathParams;

pub const LIST: &str = "/admin/news";
pub const ADD: &str = "/admin/news/add";
pub const DELETE: &str = "/admin/news/delete/:id";

/// `GET /admin/news`
pub fn list(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ApiResponse::json(200, &fixtures::NEWS)
}

/// `POST /admin/news/add`
pub fn add(request: &ApiRequest, _: &PathParams) -> ApiResponse {
    let content = request.body.field("content").unwrap_or_default();
    ApiResponse::json(
        200,
        &json!({
            "id": new_id(),
            "content": content,
            "created_at": now_iso(),
        }),
    )
}

/// `POST /admin/news/delete/:id`
pub fn delete(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ack()
}
