use std::sync::mpsc;

use dashboard_core::{Effect, Msg};
use store_logging::{store_info, store_warn};

use crate::service::AuthService;

/// Executes core effects against the authentication service and reports
/// outcomes back into the message queue.
pub struct EffectRunner {
    service: Box<dyn AuthService>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(service: Box<dyn AuthService>, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { service, msg_tx }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::BeginLogin { credentials } => {
                    store_info!("BeginLogin user={}", credentials.username());
                    let msg = match self.service.authenticate(&credentials) {
                        Ok(()) => Msg::LoginSucceeded,
                        Err(err) => {
                            store_warn!("login rejected: {}", err);
                            Msg::LoginFailed {
                                reason: err.to_string(),
                            }
                        }
                    };
                    let _ = self.msg_tx.send(msg);
                }
                Effect::EndSession => {
                    // The client is already logged out locally; a failure to
                    // tear down the server-side session only gets logged.
                    if let Err(err) = self.service.end_session() {
                        store_warn!("end session failed: {}", err);
                    }
                }
            }
        }
    }
}
