use contracts::system::auth::{LoginRequest, LoginResponse};
use contracts::system::endpoints;
use contracts::system::http::ApiRequest;

use super::session::Session;
use crate::shared::api_utils::send_checked;
use crate::shared::{ApiError, transport::Transport};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: Session,
    pub response: LoginResponse,
}

/// Login with username and password (`POST /admin/login`, url-encoded)
pub async fn login(
    transport: &dyn Transport,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response =
        send_checked(transport, ApiRequest::post(endpoints::LOGIN).with_form(request.to_form()))
            .await?;

    let session = response
        .set_cookie
        .as_deref()
        .map(Session::from_set_cookie)
        .unwrap_or_default();
    let body = response.parse_json::<LoginResponse>().unwrap_or_default();
    log::info!("Logged in as {} (role {})", username, session.role().as_str());

    Ok(LoginOutcome {
        session,
        response: body,
    })
}

/// Logout (`POST /admin/logout`)
pub async fn logout(transport: &dyn Transport) -> Result<(), ApiError> {
    send_checked(transport, ApiRequest::post(endpoints::LOGOUT)).await?;
    Ok(())
}
