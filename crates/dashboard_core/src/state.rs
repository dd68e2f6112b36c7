use crate::view_model::{AppViewModel, LoginViewModel};

/// Authentication subtree of the application state.
///
/// `logged_in` starts out unset and is resolved to a concrete value once the
/// authentication service has answered. An unset field reads as logged out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    logged_in: Option<bool>,
}

impl AuthState {
    /// Raw login flag. `None` means the service has not answered yet.
    pub fn logged_in(&self) -> Option<bool> {
        self.logged_in
    }

    /// Resolved login flag: an unset field counts as logged out.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in.unwrap_or(false)
    }

    pub(crate) fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = Some(logged_in);
    }
}

/// Transient request status surfaced to the UI next to the auth subtree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusState {
    login_pending: bool,
    last_error: Option<String>,
}

impl StatusState {
    /// True while a login request is in flight.
    pub fn login_pending(&self) -> bool {
        self.login_pending
    }

    /// The most recent error message, if one has not been dismissed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// The complete client-side state tree.
///
/// Owned by the shell; the pure core only ever reads it through `update`
/// and the view projections. The `auth` subtree is always present, so a
/// structurally malformed tree is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    auth: AuthState,
    status: StatusState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn status(&self) -> &StatusState {
        &self.status
    }

    /// Project the full state tree into the view model handed to subscribers.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            login: self.login_view(),
            dirty: self.dirty,
        }
    }

    /// Derive the props the login view needs.
    ///
    /// Pure projection: reads the auth and status subtrees, never mutates,
    /// never fails. The returned value is fresh and owned by the caller.
    pub fn login_view(&self) -> LoginViewModel {
        LoginViewModel {
            is_logged_in: self.auth.is_logged_in(),
            pending: self.status.login_pending,
            error: self.status.last_error.clone(),
        }
    }

    /// Returns the dirty flag and clears it. The shell uses this to coalesce
    /// renders: only a dirty state is worth pushing to subscribers.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn begin_login(&mut self) {
        self.status.login_pending = true;
        self.status.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn complete_login(&mut self) {
        self.auth.set_logged_in(true);
        self.status.login_pending = false;
        self.status.last_error = None;
        self.mark_dirty();
    }

    /// A login attempt failed. Leaves the auth subtree untouched: a rejected
    /// attempt does not change whether the user was logged in.
    pub(crate) fn fail_login(&mut self, reason: String) {
        self.status.login_pending = false;
        self.status.last_error = Some(reason);
        self.mark_dirty();
    }

    pub(crate) fn clear_session(&mut self) {
        self.auth.set_logged_in(false);
        self.status.login_pending = false;
        self.status.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn expire_session(&mut self, notice: String) {
        self.auth.set_logged_in(false);
        self.status.login_pending = false;
        self.status.last_error = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_error(&mut self) {
        self.status.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
