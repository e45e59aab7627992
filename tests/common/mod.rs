// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test harness: a scripted gateway and portal construction.

use async_trait::async_trait;
use internmatch::auth::CredentialStore;
use internmatch::error::AppError;
use internmatch::gateway::GraphqlGateway;
use internmatch::Portal;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Scripted = Result<Value, AppError>;

/// Scripted gateway: responses are queued per operation name (FIFO) and
/// every call is recorded.
#[derive(Default, Clone)]
pub struct MockGateway {
    responses: Arc<Mutex<HashMap<String, Vec<Scripted>>>>,
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `operation`.
    #[allow(dead_code)]
    pub fn expect(&self, operation: &str, response: Scripted) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push(response);
    }

    /// All recorded calls, in order.
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made to `operation`.
    #[allow(dead_code)]
    pub fn calls_to(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == operation)
            .count()
    }
}

#[async_trait]
impl GraphqlGateway for MockGateway {
    async fn execute(
        &self,
        _document: &str,
        operation: &str,
        variables: Value,
    ) -> Result<Value, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), variables));

        let mut responses = self.responses.lock().unwrap();
        let queue = responses
            .get_mut(operation)
            .unwrap_or_else(|| panic!("unexpected gateway operation: {operation}"));
        assert!(
            !queue.is_empty(),
            "no scripted response left for {operation}"
        );
        queue.remove(0)
    }
}

/// Portal over a scripted gateway with an in-memory credential store.
#[allow(dead_code)]
pub fn portal(gateway: &MockGateway) -> Portal<MockGateway> {
    Portal::with_gateway(gateway.clone(), Arc::new(CredentialStore::in_memory()))
}

/// Mint a real HS256 token so decode paths see production-shaped input.
#[allow(dead_code)]
pub fn mint_token(sub: &str, email: &str, role: &str) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    #[derive(serde::Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        email: &'a str,
        role: &'a str,
        iat: usize,
        exp: usize,
    }

    encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub,
            email,
            role,
            iat: 1_700_000_000,
            exp: 1_700_086_400,
        },
        &EncodingKey::from_secret(b"test_signing_key_32_bytes_long!!"),
    )
    .expect("Failed to mint token")
}

// ─── Wire-shaped fixtures ────────────────────────────────────

#[allow(dead_code)]
pub fn user_json(id: &str, email: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "role": role,
        "createdAt": "2026-01-15T10:00:00Z"
    })
}

#[allow(dead_code)]
pub fn job_json(id: &str, company_profile_id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "companyProfileId": company_profile_id,
        "title": "Backend intern",
        "description": "Work on the matching service",
        "type": "intern",
        "requiredSkills": ["rust", "graphql"],
        "location": "Remote",
        "salaryRange": null,
        "status": status,
        "postedAt": "2026-02-01T09:00:00Z"
    })
}

#[allow(dead_code)]
pub fn application_json(id: &str, job_id: &str, status: &str, match_score: f64) -> Value {
    json!({
        "id": id,
        "jobId": job_id,
        "studentProfileId": "sp1",
        "status": status,
        "coverLetter": null,
        "matchScore": match_score,
        "appliedAt": "2026-02-02T12:00:00Z"
    })
}

#[allow(dead_code)]
pub fn company_json(id: &str, name: &str, is_verified: bool) -> Value {
    json!({
        "id": id,
        "companyName": name,
        "description": null,
        "industry": "Software",
        "location": "Berlin",
        "logoUrl": null,
        "website": null,
        "isVerified": is_verified,
        "updatedAt": "2026-01-20T08:00:00Z"
    })
}
