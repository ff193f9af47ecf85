use serde::{Deserialize, Serialize};

/// The signed-in visitor as reported by `GET /api/user`.
///
/// The cookie backend uses the username as the user id, so bookmarks are
/// keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

impl SessionUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Identifier used as `user_id` in the bookmark table.
    pub fn id(&self) -> &str {
        &self.username
    }
}

/// The resolved identity (or absence) of the current visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// The "who am I" round trip has not finished. Treat as unknown.
    #[default]
    Loading,
    /// Resolved: nobody is signed in.
    Anonymous,
    /// Resolved: a user is signed in.
    Authenticated(SessionUser),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

impl From<Option<SessionUser>> for SessionState {
    fn from(user: Option<SessionUser>) -> Self {
        match user {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Anonymous,
        }
    }
}

/// Body of `POST /api/login` and `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
