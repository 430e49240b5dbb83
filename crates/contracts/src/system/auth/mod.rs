use serde::{Deserialize, Serialize};

/// Name of the cookie that carries the session token
pub const SESSION_COOKIE: &str = "sessionid";

/// Token fragment that marks a privileged session
pub const PRIVILEGED_TOKEN_MARKER: &str = "mock-super";

/// Token fragment that marks a standard session
pub const STANDARD_TOKEN_MARKER: &str = "mock-session-token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Url-encoded form pairs, as `/admin/login` expects them
    pub fn to_form(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
        ]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Coarse permission level of the current session.
///
/// Advisory only: it decides which controls are shown, the backend decides
/// what is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May approve and delete records
    Super,
    /// Read-only viewer
    User,
    /// No recognizable session; treated like `User`
    #[default]
    Unknown,
}

impl Role {
    /// Derive the role from a raw session token
    pub fn from_session_token(token: &str) -> Self {
        if token.contains(PRIVILEGED_TOKEN_MARKER) {
            Role::Super
        } else if token.contains(STANDARD_TOKEN_MARKER) {
            Role::User
        } else {
            Role::Unknown
        }
    }

    /// Derive the role from a `Cookie` or `Set-Cookie` header value
    pub fn from_cookie_header(header: &str) -> Self {
        session_token(header)
            .map(Self::from_session_token)
            .unwrap_or_default()
    }

    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Super)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Super => "super",
            Role::User => "user",
            Role::Unknown => "unknown",
        }
    }
}

/// Value of the `sessionid` cookie in a `Cookie` or `Set-Cookie` header.
///
/// An empty value (as sent when the cookie is expired) counts as absent.
pub fn session_token(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name.trim() == SESSION_COOKIE && !value.trim().is_empty()).then(|| value.trim())
    })
}
