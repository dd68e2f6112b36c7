use dashboard_core::Credentials;
use thiserror::Error;

/// Boundary to the server-side authentication collaborator.
///
/// Implementations live in the embedding application and talk to whatever
/// backend it uses; the store only sees the outcome. Calls are synchronous
/// from the store's point of view — an implementation that works against a
/// remote server should hand the request off and send the outcome back
/// through the store's message sender instead of blocking here.
pub trait AuthService: Send {
    /// Validate the credentials and establish a session.
    fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthServiceError>;

    /// Discard the server-side session.
    fn end_session(&mut self) -> Result<(), AuthServiceError>;
}

/// Failures reported by an [`AuthService`] implementation.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The server rejected the credentials.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// The service could not be reached or answered unexpectedly.
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}
