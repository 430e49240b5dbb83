//! Canned handlers, one module per admin resource

pub mod agendas;
pub mod auth;
pub mod news;
pub mod users;

use chrono::{SecondsFormat, Utc};
use contracts::system::http::{ApiResponse, Method};
use rand::Rng;
use serde_json::json;

use crate::registry::MockRegistry;

/// Register every canned handler on `registry`
pub fn register_all(registry: MockRegistry) -> MockRegistry {
    registry
        // auth
        .route(Method::Post, auth::LOGIN, auth::login)
        .route(Method::Post, auth::LOGOUT, auth::logout)
        // agendas
        .route(Method::Get, agendas::LIST, agendas::list)
        .route(Method::Post, agendas::ADD, agendas::add)
        .route(Method::Post, agendas::UPDATE_STATUS, agendas::update_status)
        .route(Method::Post, agendas::DELETE, agendas::delete)
        // news
        .route(Method::Get, news::LIST, news::list)
        .route(Method::Post, news::ADD, news::add)
        .route(Method::Post, news::DELETE, news::delete)
        // users
        .route(Method::Get, users::LIST, users::list)
        .route(Method::Post, users::ADD, users::add)
        .route(Method::Post, users::UPLOAD_CSV, users::upload_csv)
}

/// Random identifier for an echoed record (`0..10000`)
pub(crate) fn new_id() -> i64 {
    rand::thread_rng().gen_range(0..10_000)
}

/// Current time as an ISO-8601 UTC timestamp with milliseconds
pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `{"ok": true}` with status 200
pub(crate) fn ack() -> ApiResponse {
    ApiResponse::json(200, &json!({ "ok": true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::http::ApiRequest;

    #[test]
    fn test_default_table() {
        let registry = register_all(MockRegistry::new());
        assert_eq!(registry.len(), 12);
        assert!(registry
            .routes()
            .contains(&(Method::Post, "/admin/agendas/updateStatus/:id".to_string())));
    }

    #[test]
    fn test_unmatched_request_is_not_answered() {
        let registry = register_all(MockRegistry::new());
        assert!(registry.handle(&ApiRequest::get("/admin/videos")).is_none());
        assert!(registry.handle(&ApiRequest::get("/admin/agendas/add")).is_none());
    }

    #[test]
    fn test_helpers() {
        for _ in 0..100 {
            assert!((0..10_000).contains(&new_id()));
        }
        assert!(now_iso().ends_with('Z'));
        assert_eq!(ack().body, r#"{"ok":true}"#);
    }
}
