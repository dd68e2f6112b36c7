//! Dashboard shell: store runtime and effect execution.
//!
//! The shell owns the state tree from `dashboard_core`, pumps messages
//! through the pure update function, executes the returned effects against
//! the embedding application's [`AuthService`], and pushes fresh view models
//! to subscribers whenever the state changed.
mod effects;
mod logging;
mod service;
mod store;

pub use effects::EffectRunner;
pub use logging::{initialize as initialize_logging, LogDestination};
pub use service::{AuthService, AuthServiceError};
pub use store::Store;
