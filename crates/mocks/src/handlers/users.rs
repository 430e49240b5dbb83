use contracts::system::endpoints;
use contracts::system::http::{ApiRequest, ApiResponse};
use serde_json::json;

use super::new_id;
use crate::fixtures;
use crate::registry::PathParams;

pub const LIST: &str = "/admin/users";
pub const ADD: &str = "/admin/users/add";
pub const UPLOAD_CSV: &str = endpoints::USERS_UPLOAD_CSV;

/// `GET /admin/users`
pub fn list(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ApiResponse::json(200, &fixtures::USERS)
}

/// `POST /admin/users/add`
pub fn add(request: &ApiRequest, _: &PathParams) -> ApiResponse {
    let field = |name: &str| request.body.field(name).unwrap_or_default().to_string();
    ApiResponse::json(
        200,
        &json!({
            "id": new_id(),
            "pf_id": field("pf_id"),
            "name": field("name"),
            "department": field("department"),
            "location": field("location"),
            "mobile": field("mobile"),
            "registered": "Yes",
        }),
    )
}

/// `POST /admin/users/upload_csv`; the file itself is not inspected
pub fn upload_csv(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ApiResponse::json(
        200,
        &json!({ "ok": true, "message": "CSV processed (mock)", "imported": 3 }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_add_echoes_fields() {
        let request = ApiRequest::post(ADD).with_form(vec![
            ("pf_id".into(), "1234567".into()),
            ("name".into(), "Nithin".into()),
            ("mobile".into(), "9876543210".into()),
        ]);
        let raw: Value = add(&request, &PathParams::default()).parse_json().unwrap();
        assert_eq!(raw["pf_id"], "1234567");
        assert_eq!(raw["name"], "Nithin");
        assert_eq!(raw["department"], "");
        assert_eq!(raw["registered"], "Yes");
    }

    #[test]
    fn test_upload_csv_ack() {
        let raw: Value = upload_csv(&ApiRequest::post(UPLOAD_CSV), &PathParams::default())
            .parse_json()
            .unwrap();
        assert_eq!(raw["imported"], 3);
        assert_eq!(raw["message"], "CSV processed (mock)");
    }
}
