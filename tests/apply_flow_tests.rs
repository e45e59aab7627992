// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application flow tests: applying, the duplicate-apply guard, and
//! review-status transitions.

mod common;

use common::MockGateway;
use internmatch::error::AppError;
use internmatch::models::{Application, ApplicationStatus, Job};
use serde_json::json;

fn job(status: &str) -> Job {
    serde_json::from_value(common::job_json("j1", "cp1", status)).unwrap()
}

fn application(id: &str, job_id: &str, status: &str) -> Application {
    serde_json::from_value(common::application_json(id, job_id, status, 0.42)).unwrap()
}

#[tokio::test]
async fn test_student_applies_to_open_job() {
    let gateway = MockGateway::new();
    gateway.expect("getAllApplications", Ok(json!({ "getAllApplications": [] })));
    gateway.expect(
        "createApplication",
        Ok(json!({
            "createApplication": common::application_json("a1", "j1", "applied", 0.42)
        })),
    );
    let portal = common::portal(&gateway);

    let created = portal
        .applications()
        .apply(&job("open"), None)
        .await
        .unwrap();

    assert_eq!(created.status, ApplicationStatus::Applied);
    assert!((0.0..=1.0).contains(&created.match_score));
    assert_eq!(gateway.calls_to("createApplication"), 1);
}

#[tokio::test]
async fn test_observed_duplicate_blocks_apply_without_gateway_call() {
    let gateway = MockGateway::new();
    gateway.expect(
        "getAllApplications",
        Ok(json!({
            "getAllApplications": [common::application_json("a1", "j1", "applied", 0.42)]
        })),
    );
    let portal = common::portal(&gateway);

    let err = portal
        .applications()
        .apply(&job("open"), None)
        .await
        .unwrap_err();

    match err {
        AppError::Validation(msg) => assert!(msg.contains("already applied"), "got {msg:?}"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(gateway.calls_to("createApplication"), 0);
}

#[tokio::test]
async fn test_server_side_duplicate_is_surfaced_verbatim() {
    let gateway = MockGateway::new();
    // Our cached view is empty, but the server knows better.
    gateway.expect("getAllApplications", Ok(json!({ "getAllApplications": [] })));
    gateway.expect(
        "createApplication",
        Err(AppError::DomainConflict(
            "You have already applied to this job".to_string(),
        )),
    );
    // The conflict drops the cached list; the next read goes out again.
    gateway.expect(
        "getAllApplications",
        Ok(json!({
            "getAllApplications": [common::application_json("a1", "j1", "applied", 0.42)]
        })),
    );
    let portal = common::portal(&gateway);

    let err = portal
        .applications()
        .apply(&job("open"), None)
        .await
        .unwrap_err();
    match err {
        AppError::DomainConflict(msg) => {
            assert_eq!(msg, "You have already applied to this job");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Re-fetched authoritative state now shows the existing application.
    assert!(portal.applications().has_applied("j1").await.unwrap());
    assert_eq!(gateway.calls_to("getAllApplications"), 2);
}

#[tokio::test]
async fn test_apply_to_closed_job_is_blocked_locally() {
    let gateway = MockGateway::new();
    let portal = common::portal(&gateway);

    let err = portal
        .applications()
        .apply(&job("closed"), None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_legal_status_transition_goes_through() {
    let gateway = MockGateway::new();
    gateway.expect(
        "updateApplicationStatus",
        Ok(json!({
            "updateApplicationStatus": common::application_json("a1", "j1", "accepted", 0.42)
        })),
    );
    let portal = common::portal(&gateway);

    let updated = portal
        .applications()
        .update_status(&application("a1", "j1", "applied"), ApplicationStatus::Accepted)
        .await
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Accepted);
}

#[tokio::test]
async fn test_terminal_application_offers_no_transition() {
    let gateway = MockGateway::new();
    let portal = common::portal(&gateway);

    for terminal in ["accepted", "rejected"] {
        let err = portal
            .applications()
            .update_status(&application("a1", "j1", terminal), ApplicationStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    // Neither illegal request left the client.
    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn test_refused_transition_drops_cached_state() {
    let gateway = MockGateway::new();
    gateway.expect(
        "getAllApplications",
        Ok(json!({
            "getAllApplications": [common::application_json("a1", "j1", "applied", 0.42)]
        })),
    );
    gateway.expect(
        "updateApplicationStatus",
        Err(AppError::DomainConflict(
            "Application was already decided".to_string(),
        )),
    );
    gateway.expect(
        "getAllApplications",
        Ok(json!({
            "getAllApplications": [common::application_json("a1", "j1", "rejected", 0.42)]
        })),
    );
    let portal = common::portal(&gateway);

    let listed = portal.applications().list().await.unwrap();
    let err = portal
        .applications()
        .update_status(&listed[0], ApplicationStatus::Accepted)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DomainConflict(_)));

    // The stale "applied" view is gone; the re-fetch shows the decision.
    let refreshed = portal.applications().list().await.unwrap();
    assert_eq!(refreshed[0].status, ApplicationStatus::Rejected);
    assert_eq!(gateway.calls_to("getAllApplications"), 2);
}
