#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the submitted credentials to the authentication service.
    BeginLogin { credentials: crate::Credentials },
    /// Ask the authentication service to discard the server-side session.
    EndSession,
}
