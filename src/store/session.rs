//! Session store: login state and bearer token

/// Authenticated session
///
/// The token lives inside `Option<Session>` on the store, so "token present"
/// and "authenticated" cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
    pub role: Option<String>,
}

/// Login form and the busy flag for an outstanding attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    /// Username sent with the in-flight login request. While set, further
    /// attempts and edits to the credentials are ignored.
    pub pending: Option<String>,
    /// Last AuthFailure, shown inline on the login view
    pub error: Option<String>,
}

impl LoginState {
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reset after logout: keep the username for convenience, drop the rest
    pub fn reset(&mut self) {
        self.password.clear();
        self.pending = None;
        self.error = None;
    }
}
