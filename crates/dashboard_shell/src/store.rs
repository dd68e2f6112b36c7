use std::sync::mpsc;

use dashboard_core::{update, AppState, AppViewModel, LoginViewModel, Msg};
use store_logging::store_debug;

use crate::effects::EffectRunner;
use crate::service::AuthService;

type Subscriber = Box<dyn FnMut(&AppViewModel) + Send>;

/// Owns the application state and pumps messages through the pure core.
///
/// The state itself is confined to whichever thread drives the store;
/// background collaborators get a [`mpsc::Sender<Msg>`] via [`Store::sender`]
/// and feed the pump from wherever they run. Service replies queued by an
/// effect are picked up on the next [`Store::process_pending`] call, so the
/// embedding shell drives the store from its tick loop.
pub struct Store {
    state: AppState,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    runner: EffectRunner,
    subscribers: Vec<Subscriber>,
    dispatch_seq: u64,
}

impl Store {
    pub fn new(service: Box<dyn AuthService>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(service, msg_tx.clone());
        Self {
            state: AppState::new(),
            msg_tx,
            msg_rx,
            runner,
            subscribers: Vec::new(),
            dispatch_seq: 0,
        }
    }

    /// Sender half used by background collaborators to push messages in.
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Registers a callback invoked with a fresh view model after each
    /// update that actually changed the state.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppViewModel) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Read-side access for the initial render.
    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// The login view projection of the current state.
    pub fn login_view(&self) -> LoginViewModel {
        self.state.login_view()
    }

    /// Drains queued messages and runs each through the core.
    pub fn process_pending(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    /// Runs one message through the pure update and fans out its effects.
    pub fn dispatch(&mut self, msg: Msg) {
        self.dispatch_seq += 1;
        store_logging::set_dispatch_seq(self.dispatch_seq);
        store_debug!("dispatching {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        if !effects.is_empty() {
            self.runner.run(effects);
        }

        // View computed before the dirty flag is consumed, so subscribers
        // see the flag as the update left it.
        let view = self.state.view();
        if self.state.consume_dirty() {
            for subscriber in &mut self.subscribers {
                subscriber(&view);
            }
        }
    }
}
