use serde::Serialize;

/// Props consumed by the login view. Serializes with camelCase keys to match
/// the wire shape the embedding web UI expects (`isLoggedIn`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginViewModel {
    pub is_logged_in: bool,
    pub pending: bool,
    pub error: Option<String>,
}

/// Full-tree projection handed to subscribers on each dirty update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppViewModel {
    pub login: LoginViewModel,
    /// Shell bookkeeping, not part of the serialized shape.
    #[serde(skip)]
    pub dirty: bool,
}
