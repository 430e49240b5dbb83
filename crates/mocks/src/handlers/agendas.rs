use contracts::system::http::{ApiRequest, ApiResponse, FormPart};
use serde_json::json;

use super::{ack, new_id, now_iso};
use crate::fixtures;
use crate::registry::PathParams;

pub const LIST: &str = "/admin/agendas";
pub const ADD: &str = "/admin/agendas/add";
pub const UPDATE_STATUS: &str = "/admin/agendas/updateStatus/:id";
pub const DELETE: &str = "/admin/agendas/delete/:id";

/// `GET /admin/agendas`
pub fn list(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ApiResponse::json(200, &fixtures::AGENDAS)
}

/// `POST /admin/agendas/add`: echoes the submitted fields as a new pending agenda
pub fn add(request: &ApiRequest, _: &PathParams) -> ApiResponse {
    let field = |name: &str| request.body.field(name).unwrap_or_default().to_string();
    let image_url = match request.body.file("image") {
        Some(FormPart::File { file_name, .. }) => json!(format!("/static/uploads/{}", file_name)),
        _ => json!(null),
    };

    ApiResponse::json(
        200,
        &json!({
            "id": new_id(),
            "title": field("title"),
            "description": field("description"),
            "datetime": field("datetime"),
            "location": field("location"),
            "image_url": image_url,
            "status": false,
            "created_at": now_iso(),
        }),
    )
}

/// `POST /admin/agendas/updateStatus/:id`: approval acknowledgement
pub fn update_status(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ack()
}

/// `POST /admin/agendas/delete/:id`
pub fn delete(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ack()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_registry;
    use contracts::domain::a001_agenda::Agenda;
    use contracts::domain::common::Record;
    use serde_json::Value;

    #[test]
    fn test_list_normalizes_to_mixed_statuses() {
        let response = list(&ApiRequest::get(LIST), &PathParams::default());
        let raw: Value = response.parse_json().unwrap();
        let agendas = Agenda::normalize_list(&raw);
        let statuses: Vec<_> = agendas.iter().map(|a| (a.id.value(), a.status)).collect();
        assert_eq!(statuses, [(1, true), (2, false), (3, true), (4, false)]);
        assert_eq!(agendas[1].location, "Hall B");
        assert_eq!(agendas[1].image_url.as_deref(), Some("/static/showcase.jpg"));
    }

    #[test]
    fn test_add_echoes_multipart_fields() {
        let request = ApiRequest::post(ADD).with_multipart(vec![
            FormPart::text("title", "Expo"),
            FormPart::text("description", "Stalls"),
            FormPart::text("datetime", "2030-01-01T10:00"),
            FormPart::text("location", "Ground"),
            FormPart::File {
                name: "image".into(),
                file_name: "expo.png".into(),
                content_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            },
        ]);
        let response = add(&request, &PathParams::default());
        let raw: Value = response.parse_json().unwrap();
        let agenda = Agenda::normalize(&raw);

        assert_eq!(agenda.title, "Expo");
        assert_eq!(agenda.description, "Stalls");
        assert_eq!(agenda.datetime, "2030-01-01T10:00");
        assert_eq!(agenda.location, "Ground");
        assert_eq!(agenda.image_url.as_deref(), Some("/static/uploads/expo.png"));
        assert!(!agenda.status);
        assert!((0..10_000).contains(&agenda.id.value()));
        assert!(raw["created_at"].as_str().is_some());
    }

    #[test]
    fn test_add_parses_url_encoded_fields() {
        let request = ApiRequest::post(ADD).with_form(vec![("title".into(), "Quiz".into())]);
        let raw: Value = add(&request, &PathParams::default()).parse_json().unwrap();
        assert_eq!(raw["title"], "Quiz");
        assert_eq!(raw["location"], "");
        assert_eq!(raw["image_url"], Value::Null);
    }

    #[test]
    fn test_approve_and_delete_are_distinct_routes() {
        let registry = default_registry();
        assert_eq!(
            registry.matched_pattern(contracts::system::http::Method::Post, "/admin/agendas/updateStatus/7"),
            Some(UPDATE_STATUS)
        );
        assert_eq!(
            registry.matched_pattern(contracts::system::http::Method::Post, "/admin/agendas/delete/7"),
            Some(DELETE)
        );
    }

    #[test]
    fn test_mock_is_stateless() {
        let registry = default_registry();
        registry
            .handle(&ApiRequest::post("/admin/agendas/delete/1"))
            .unwrap();
        let response = registry.handle(&ApiRequest::get(LIST)).unwrap();
        let raw: Value = response.parse_json().unwrap();
        assert_eq!(raw.as_array().map(Vec::len), Some(4));
    }
}
