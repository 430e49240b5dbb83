use contracts::system::auth::LoginRequest;
use contracts::system::endpoints;
use contracts::system::http::{ApiRequest, ApiResponse};
use serde_json::json;

use crate::registry::PathParams;

pub const LOGIN: &str = endpoints::LOGIN;
pub const LOGOUT: &str = endpoints::LOGOUT;

/// The only credential pair the mock accepts
pub const MOCK_USERNAME: &str = "admin";
pub const MOCK_PASSWORD: &str = "admin";

/// Cookie set on successful login; the token marks a privileged session
pub const LOGIN_COOKIE: &str = "sessionid=mock-super; Path=/;";

/// Cookie set on logout; expires the session immediately
pub const LOGOUT_COOKIE: &str = "sessionid=; Expires=Thu, 01 Jan 1970 00:00:00 GMT";

fn credentials(request: &ApiRequest) -> Option<LoginRequest> {
    Some(LoginRequest {
        username: request.body.field("username")?.to_string(),
        password: request.body.field("password")?.to_string(),
    })
}

/// `POST /admin/login`
pub fn login(request: &ApiRequest, _: &PathParams) -> ApiResponse {
    match credentials(request) {
        Some(creds) if creds.username == MOCK_USERNAME && creds.password == MOCK_PASSWORD => {
            ApiResponse::json(200, &json!({ "message": "Login success" }))
                .with_set_cookie(LOGIN_COOKIE)
        }
        _ => ApiResponse::json(401, &json!({ "error": "Invalid credentials" })),
    }
}

/// `POST /admin/logout`
pub fn logout(_: &ApiRequest, _: &PathParams) -> ApiResponse {
    ApiResponse::json(200, &json!({ "ok": true })).with_set_cookie(LOGOUT_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;
    use contracts::system::http::{encode_form, parse_form};

    fn login_request(username: &str, password: &str) -> ApiRequest {
        let body = encode_form(&[
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ]);
        ApiRequest::post(LOGIN).with_form(parse_form(&body))
    }

    #[test]
    fn test_login_success_sets_privileged_cookie() {
        let response = login(&login_request("admin", "admin"), &PathParams::default());
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"message":"Login success"}"#);
        let cookie = response.set_cookie.expect("cookie");
        assert_eq!(Role::from_cookie_header(&cookie), Role::Super);
    }

    #[test]
    fn test_login_rejects_other_credentials() {
        for (username, password) in [("admin", "wrong"), ("root", "admin"), ("", ""), ("Admin", "admin")] {
            let response = login(&login_request(username, password), &PathParams::default());
            assert_eq!(response.status, 401);
            assert_eq!(response.error_text().as_deref(), Some("Invalid credentials"));
            assert!(response.set_cookie.is_none());
        }

        let response = login(&ApiRequest::post(LOGIN), &PathParams::default());
        assert_eq!(response.status, 401);
        assert!(response.set_cookie.is_none());
    }

    #[test]
    fn test_logout_expires_cookie() {
        let response = logout(&ApiRequest::post(LOGOUT), &PathParams::default());
        assert_eq!(response.status, 200);
        let cookie = response.set_cookie.expect("cookie");
        assert!(cookie.contains("Expires=Thu, 01 Jan 1970"));
        assert_eq!(Role::from_cookie_header(&cookie), Role::Unknown);
    }
}
