//! Behaviour of the session service across auth operations.

mod support;

use std::sync::Arc;

use support::{user, MockGateway};
use wellpulse_core::{SessionService, SessionState};
use wellpulse_domain::WellPulseError;

#[tokio::test]
async fn starts_loading_until_first_probe() {
    let service = SessionService::new(Arc::new(MockGateway::default()));
    assert!(service.is_loading().await);
    assert!(!service.is_authenticated().await);
}

#[tokio::test]
async fn bootstrap_with_active_session_is_authenticated() {
    let gateway = MockGateway::default();
    *gateway.me.lock().unwrap() = Some(user("u1", "ana@example.com"));
    let service = SessionService::new(Arc::new(gateway));

    let state = service.bootstrap().await;

    assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    assert!(service.is_authenticated().await);
    assert!(!service.is_loading().await);
}

#[tokio::test]
async fn bootstrap_without_session_is_anonymous_not_error() {
    let service = SessionService::new(Arc::new(MockGateway::default()));

    let state = service.bootstrap().await;

    assert_eq!(state, SessionState::Anonymous);
    assert!(service.current_user().await.is_none());
}

#[tokio::test]
async fn refresh_user_clears_an_expired_session() {
    let gateway = Arc::new(MockGateway::default());
    *gateway.me.lock().unwrap() = Some(user("u1", "ana@example.com"));
    let service = SessionService::new(gateway.clone());
    service.bootstrap().await;

    *gateway.me.lock().unwrap() = None;
    service.refresh_user().await;

    assert_eq!(service.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn login_stores_returned_user() {
    let gateway = MockGateway::default();
    *gateway.login_user.lock().unwrap() = Some(user("u7", "ana@example.com"));
    let service = SessionService::new(Arc::new(gateway));
    service.bootstrap().await;

    let signed_in = service.login("ana@example.com", "correct horse").await.unwrap();

    assert_eq!(signed_in.id, "u7");
    assert_eq!(service.current_user().await.unwrap().id, "u7");
}

#[tokio::test]
async fn failed_login_leaves_state_unchanged() {
    let service = SessionService::new(Arc::new(MockGateway::default()));
    service.bootstrap().await;

    let err = service.login("ana@example.com", "wrong").await.unwrap_err();

    assert!(matches!(err, WellPulseError::Auth(_)));
    assert_eq!(service.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn signup_sends_full_name_and_stores_user() {
    let gateway = Arc::new(MockGateway::default());
    let service = SessionService::new(gateway.clone());

    let created = service.signup("new@example.com", "longpassword", "New Person").await.unwrap();

    assert_eq!(created.full_name, "New Person");
    let sent = gateway.last_signup.lock().unwrap().clone().unwrap();
    assert_eq!(sent.full_name, "New Person");
    assert!(service.is_authenticated().await);
}

#[tokio::test]
async fn logout_clears_state_even_when_call_fails() {
    let gateway = MockGateway { logout_fails: true, ..Default::default() };
    *gateway.login_user.lock().unwrap() = Some(user("u1", "ana@example.com"));
    let gateway = Arc::new(gateway);
    let service = SessionService::new(gateway.clone());
    service.login("ana@example.com", "pw").await.unwrap();

    let result = service.logout().await;

    assert!(matches!(result, Err(WellPulseError::Network(_))));
    assert_eq!(gateway.logout_calls(), 1);
    assert_eq!(service.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn successful_logout_is_anonymous() {
    let gateway = MockGateway::default();
    *gateway.login_user.lock().unwrap() = Some(user("u1", "ana@example.com"));
    let service = SessionService::new(Arc::new(gateway));
    service.login("ana@example.com", "pw").await.unwrap();

    service.logout().await.unwrap();

    assert!(!service.is_authenticated().await);
}
