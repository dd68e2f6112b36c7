use dashboard_core::{update, AppState, Credentials, Msg};
use serde_json::json;

fn init_logging() {
    store_logging::initialize_for_tests();
}

fn submit(state: AppState, username: &str, password: &str) -> AppState {
    let (state, _) = update(state, Msg::LoginSubmitted(Credentials::new(username, password)));
    state
}

fn logged_in_state() -> AppState {
    let state = submit(AppState::new(), "alice", "hunter2");
    let (state, _) = update(state, Msg::LoginSucceeded);
    state
}

#[test]
fn fresh_state_reads_as_logged_out() {
    init_logging();
    let state = AppState::new();

    assert_eq!(state.auth().logged_in(), None);
    assert!(!state.login_view().is_logged_in);
}

#[test]
fn login_success_reads_as_logged_in() {
    init_logging();
    let state = logged_in_state();

    assert_eq!(state.auth().logged_in(), Some(true));
    let view = state.login_view();
    assert!(view.is_logged_in);
    assert!(!view.pending);
    assert_eq!(view.error, None);
}

#[test]
fn explicit_logout_reads_like_a_fresh_state() {
    init_logging();
    let (state, _) = update(logged_in_state(), Msg::LogoutClicked);

    // The flag is now explicitly false rather than unset, but the login view
    // cannot tell the difference.
    assert_eq!(state.auth().logged_in(), Some(false));
    assert_eq!(state.login_view(), AppState::new().login_view());
}

#[test]
fn login_view_is_pure() {
    init_logging();
    let state = logged_in_state();
    let before = state.clone();

    let first = state.login_view();
    let second = state.login_view();

    assert_eq!(first, second);
    assert_eq!(state, before);
}

#[test]
fn app_view_carries_the_login_projection() {
    init_logging();
    let state = logged_in_state();

    assert_eq!(state.view().login, state.login_view());
}

#[test]
fn login_view_serializes_to_the_wire_shape() {
    init_logging();

    let logged_in = serde_json::to_value(logged_in_state().login_view()).unwrap();
    assert_eq!(
        logged_in,
        json!({ "isLoggedIn": true, "pending": false, "error": null })
    );

    let logged_out = serde_json::to_value(AppState::new().login_view()).unwrap();
    assert_eq!(
        logged_out,
        json!({ "isLoggedIn": false, "pending": false, "error": null })
    );
}

#[test]
fn pending_and_error_come_from_the_status_subtree() {
    init_logging();

    let pending = submit(AppState::new(), "alice", "hunter2");
    assert!(pending.status().login_pending());
    assert!(pending.login_view().pending);
    assert!(!pending.login_view().is_logged_in);

    let (failed, _) = update(
        pending,
        Msg::LoginFailed {
            reason: "invalid username or password".to_string(),
        },
    );
    let view = failed.login_view();
    assert!(!view.pending);
    assert_eq!(view.error.as_deref(), Some("invalid username or password"));
}
