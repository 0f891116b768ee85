mod common;

use common::{deferred, harness, Call, Reply};
use futures::poll;
use job_board_core::login::GENERIC_LOGIN_ERROR;
use job_board_core::{
    logout, AuthGuard, LoginController, LoginStatus, PortError, SessionStore, SessionToken,
};
use std::time::Duration;

#[tokio::test]
async fn successful_login_persists_token_and_replaces_history() {
    let h = harness("/login", None);
    h.api
        .script_login(Reply::Ready(Ok(SessionToken::new("abc123"))));
    let login = LoginController::new(h.ctx.clone());

    let status = login.submit("rahul", "rahul@2021").await;

    assert_eq!(status, LoginStatus::Idle);
    assert_eq!(h.session.get(), Some(SessionToken::new("abc123")));
    assert_eq!(h.history.entries(), vec!["/"], "login page is not kept in history");
    assert_eq!(
        h.api.calls(),
        vec![Call::Login("rahul".into(), "rahul@2021".into())]
    );
}

#[tokio::test]
async fn rejected_login_shows_server_message_and_keeps_fields() {
    let h = harness("/login", None);
    h.api.script_login(Reply::Ready(Err(PortError::Rejected(
        "Invalid credentials".into(),
    ))));
    let login = LoginController::new(h.ctx.clone());

    login.submit("rahul", "wrong").await;

    let form = login.form().await;
    assert_eq!(
        form.status,
        LoginStatus::Failed {
            message: "Invalid credentials".into()
        }
    );
    assert_eq!(form.username, "rahul");
    assert_eq!(form.password, "wrong");
    assert!(h.session.get().is_none());
    assert_eq!(h.history.current(), "/login");
}

#[tokio::test]
async fn transport_failure_uses_generic_message() {
    let h = harness("/login", None);
    h.api.script_login(Reply::Ready(Err(PortError::Transport(
        "connection refused".into(),
    ))));
    let login = LoginController::new(h.ctx.clone());

    let status = login.submit("rahul", "rahul@2021").await;

    assert_eq!(
        status,
        LoginStatus::Failed {
            message: GENERIC_LOGIN_ERROR.into()
        }
    );
}

#[tokio::test]
async fn status_is_submitting_while_request_is_outstanding() {
    let h = harness("/login", None);
    let (tx, reply) = deferred();
    h.api.script_login(reply);
    let login = LoginController::new(h.ctx.clone());

    let submit = login.submit("rahul", "rahul@2021");
    tokio::pin!(submit);
    assert!(poll!(&mut submit).is_pending());
    assert_eq!(login.status().await, LoginStatus::Submitting);

    tx.send(Ok(SessionToken::new("abc123"))).unwrap();
    assert_eq!(submit.await, LoginStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn login_that_never_answers_times_out() {
    let h = harness("/login", None);
    let (_tx, reply) = deferred();
    h.api.script_login(reply);
    let ctx = h.ctx.clone().with_request_timeout(Duration::from_secs(3));
    let login = LoginController::new(ctx);

    let status = login.submit("rahul", "rahul@2021").await;

    assert_eq!(
        status,
        LoginStatus::Failed {
            message: GENERIC_LOGIN_ERROR.into()
        }
    );
}

#[tokio::test]
async fn logout_clears_session_and_guard_sends_back_to_login() {
    let h = harness("/jobs", Some("abc123"));
    let guard = AuthGuard::new(h.session.clone());
    assert!(guard.enter("/jobs", h.history.as_ref()).is_some());

    logout(h.session.as_ref(), h.history.as_ref());

    assert!(h.session.get().is_none());
    assert_eq!(h.history.current(), "/login");
    assert!(guard.enter("/jobs", h.history.as_ref()).is_none());
    assert_eq!(h.history.current(), "/login");
}
