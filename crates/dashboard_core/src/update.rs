use crate::{AppState, Credentials, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoginSubmitted(credentials) => {
            // A second submit while a request is in flight, or while already
            // logged in, is ignored rather than queued.
            if state.auth().is_logged_in() || state.status().login_pending() {
                return (state, Vec::new());
            }
            match normalize_credentials(credentials) {
                Some(credentials) => {
                    state.begin_login();
                    vec![Effect::BeginLogin { credentials }]
                }
                None => {
                    state.fail_login("username and password are required".to_string());
                    Vec::new()
                }
            }
        }
        Msg::LoginSucceeded => {
            if state.auth().is_logged_in() && !state.status().login_pending() {
                return (state, Vec::new());
            }
            state.complete_login();
            Vec::new()
        }
        Msg::LoginFailed { reason } => {
            // Only meaningful while a login is pending; a stale rejection
            // arriving after logout or expiry must not clobber the state.
            if !state.status().login_pending() {
                return (state, Vec::new());
            }
            state.fail_login(reason);
            Vec::new()
        }
        Msg::LogoutClicked => {
            if state.auth().is_logged_in() {
                state.clear_session();
                vec![Effect::EndSession]
            } else {
                Vec::new()
            }
        }
        Msg::SessionExpired => {
            if state.auth().is_logged_in() || state.status().login_pending() {
                state.expire_session("session expired, log in again".to_string());
            }
            Vec::new()
        }
        Msg::ErrorDismissed => {
            if state.status().last_error().is_some() {
                state.dismiss_error();
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Trims the username and rejects credentials that cannot be submitted.
fn normalize_credentials(credentials: Credentials) -> Option<Credentials> {
    if !credentials.is_well_formed() {
        return None;
    }
    let username = credentials.username().trim().to_owned();
    Some(Credentials::new(username, credentials.password()))
}
