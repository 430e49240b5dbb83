use contracts::system::auth::{session_token, Role, SESSION_COOKIE};

/// Current operator session, derived from the `sessionid` cookie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    role: Role,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_token(token: &str) -> Self {
        if token.is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(token.to_string()),
            role: Role::from_session_token(token),
        }
    }

    /// Session from a `Cookie` request header (`a=1; sessionid=...`)
    pub fn from_cookie_header(header: &str) -> Self {
        session_token(header)
            .map(Self::from_token)
            .unwrap_or_default()
    }

    /// Session from a `Set-Cookie` response header.
    ///
    /// Only the first `name=value` pair is the cookie; the rest are
    /// attributes. Anything other than `sessionid` yields an anonymous session.
    pub fn from_set_cookie(header: &str) -> Self {
        let pair = header.split(';').next().unwrap_or_default();
        match pair.split_once('=') {
            Some((name, value)) if name.trim() == SESSION_COOKIE => Self::from_token(value.trim()),
            _ => Self::anonymous(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
