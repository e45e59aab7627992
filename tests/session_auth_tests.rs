// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle tests: restore, login, identity checks, and the
//! credential-invalidation policy.

mod common;

use common::MockGateway;
use internmatch::auth::{AccessDecision, CredentialStore, SessionStatus};
use internmatch::error::AppError;
use internmatch::models::Role;
use internmatch::services::{LoginInput, SignupInput};
use internmatch::Portal;
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_no_decision_before_restore() {
    let gateway = MockGateway::new();
    let portal = common::portal(&gateway);

    // Identity unresolved: the gate must not decide anything yet.
    assert_eq!(portal.session().decide(Some(Role::Student)), None);
    assert_eq!(portal.session().status(), SessionStatus::Unresolved);
}

#[test]
fn test_restore_from_persisted_credential() {
    let gateway = MockGateway::new();
    let store = Arc::new(CredentialStore::in_memory());
    store
        .set(&common::mint_token("u1", "ada@example.com", "STUDENT"))
        .unwrap();
    let portal = Portal::with_gateway(gateway, store);

    assert_eq!(portal.auth().restore(), SessionStatus::Authenticated);
    assert_eq!(
        portal.session().decide(Some(Role::Student)),
        Some(AccessDecision::Allow)
    );
    assert_eq!(
        portal.session().decide(Some(Role::Admin)),
        Some(AccessDecision::RedirectHome)
    );
    assert_eq!(portal.session().decide(None), Some(AccessDecision::Allow));
}

#[test]
fn test_restore_with_undecodable_credential_is_anonymous() {
    let gateway = MockGateway::new();
    let store = Arc::new(CredentialStore::in_memory());
    store.set("garbage-token").unwrap();
    let portal = Portal::with_gateway(gateway, store);

    assert_eq!(portal.auth().restore(), SessionStatus::Anonymous);
    assert_eq!(
        portal.session().decide(None),
        Some(AccessDecision::RedirectLogin)
    );
}

#[tokio::test]
async fn test_login_stores_credential_and_resolves_session() {
    let gateway = MockGateway::new();
    let token = common::mint_token("u1", "ada@example.com", "student");
    gateway.expect(
        "login",
        Ok(json!({
            "login": {
                "token": token,
                "user": common::user_json("u1", "ada@example.com", "student"),
            }
        })),
    );

    let store = Arc::new(CredentialStore::in_memory());
    let portal = Portal::with_gateway(gateway, Arc::clone(&store));

    let user = portal
        .auth()
        .login(LoginInput {
            email: "ada@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.role, Role::Student);
    assert!(store.get().is_some());
    assert_eq!(portal.session().status(), SessionStatus::Authenticated);
    assert_eq!(portal.session().claims().unwrap().sub, "u1");
}

#[tokio::test]
async fn test_login_with_invalid_email_never_reaches_gateway() {
    let gateway = MockGateway::new();
    let portal = common::portal(&gateway);

    let err = portal
        .auth()
        .login(LoginInput {
            email: "not-an-email".to_string(),
            password: "whatever".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_signup_password_mismatch_never_reaches_gateway() {
    let gateway = MockGateway::new();
    let portal = common::portal(&gateway);

    let err = portal
        .auth()
        .signup(SignupInput {
            email: "new@example.com".to_string(),
            password: "long-enough-1".to_string(),
            confirm_password: "long-enough-2".to_string(),
            role: Role::Company,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_rejected_credential_ends_the_session() {
    let gateway = MockGateway::new();
    gateway.expect("me", Err(AppError::Authorization));

    let store = Arc::new(CredentialStore::in_memory());
    store
        .set(&common::mint_token("u1", "ada@example.com", "student"))
        .unwrap();
    let portal = Portal::with_gateway(gateway, Arc::clone(&store));
    portal.auth().restore();
    assert_eq!(portal.session().status(), SessionStatus::Authenticated);

    let err = portal.auth().me().await.unwrap_err();
    assert!(err.is_authorization());

    // Credential gone, session anonymous, routes redirect to login.
    assert_eq!(store.get(), None);
    assert_eq!(portal.session().status(), SessionStatus::Anonymous);
    assert_eq!(
        portal.session().decide(Some(Role::Student)),
        Some(AccessDecision::RedirectLogin)
    );
}

#[tokio::test]
async fn test_me_confirms_identity_server_side() {
    let gateway = MockGateway::new();
    gateway.expect(
        "me",
        Ok(json!({ "me": common::user_json("u7", "c@example.com", "COMPANY") })),
    );

    let store = Arc::new(CredentialStore::in_memory());
    store
        .set(&common::mint_token("u7", "c@example.com", "company"))
        .unwrap();
    let portal = Portal::with_gateway(gateway, store);
    portal.auth().restore();

    let user = portal.auth().me().await.unwrap();
    assert_eq!(user.role, Role::Company);
    assert_eq!(portal.session().claims().unwrap().role, Role::Company);
}

#[test]
fn test_logout_clears_credential_and_session() {
    let gateway = MockGateway::new();
    let store = Arc::new(CredentialStore::in_memory());
    store
        .set(&common::mint_token("u1", "ada@example.com", "student"))
        .unwrap();
    let portal = Portal::with_gateway(gateway, Arc::clone(&store));
    portal.auth().restore();

    portal.auth().logout().unwrap();

    assert_eq!(store.get(), None);
    assert_eq!(portal.session().status(), SessionStatus::Anonymous);
    assert_eq!(
        portal.session().decide(None),
        Some(AccessDecision::RedirectLogin)
    );
}

#[tokio::test]
async fn test_password_reset_validation() {
    let gateway = MockGateway::new();
    let portal = common::portal(&gateway);

    let err = portal
        .auth()
        .request_password_reset("not-an-email")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(gateway.calls().is_empty());

    gateway.expect("requestPasswordReset", Ok(json!({ "requestPasswordReset": true })));
    let sent = portal
        .auth()
        .request_password_reset("ada@example.com")
        .await
        .unwrap();
    assert!(sent);
}
