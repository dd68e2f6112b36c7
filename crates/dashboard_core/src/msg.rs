use std::fmt;

/// Login form contents carried by [`Msg::LoginSubmitted`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// True when both fields carry something submittable: a non-blank
    /// username and a non-empty password.
    pub fn is_well_formed(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

// Hand-written so the password never reaches the dispatch logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the login form.
    LoginSubmitted(Credentials),
    /// Authentication service accepted the credentials.
    LoginSucceeded,
    /// Authentication service rejected the credentials or the request failed.
    LoginFailed { reason: String },
    /// User clicked Logout.
    LogoutClicked,
    /// A server call answered 401; the session is no longer valid.
    SessionExpired,
    /// User dismissed the error banner.
    ErrorDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
