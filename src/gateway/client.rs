// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL gateway client.
//!
//! The gateway is the sole source of authoritative state; everything here
//! is plumbing. Send a document, attach the bearer credential, classify
//! failures into the client error taxonomy.

use crate::auth::CredentialStore;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Executes GraphQL operations. Injected everywhere so services can run
/// against a scripted gateway in tests.
#[async_trait]
pub trait GraphqlGateway: Send + Sync {
    /// Execute one operation and return the response `data` object.
    async fn execute(
        &self,
        document: &str,
        operation: &str,
        variables: Value,
    ) -> Result<Value, AppError>;
}

/// HTTP implementation speaking the standard POST envelope.
pub struct HttpGateway {
    http: reqwest::Client,
    endpoint: String,
    credentials: Arc<CredentialStore>,
}

impl HttpGateway {
    /// Create a gateway client for `endpoint`.
    ///
    /// The credential store is shared with the rest of the client so the
    /// current bearer token rides along on every request.
    pub fn new(
        endpoint: String,
        credentials: Arc<CredentialStore>,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }
}

/// Response envelope: `data` and/or `errors`.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// One entry of the response `errors` array.
#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(default)]
    extensions: Extensions,
}

#[derive(Debug, Default, Deserialize)]
struct Extensions {
    #[serde(default)]
    code: Option<String>,
}

/// Map the first gateway error to the client taxonomy.
///
/// Only a rejected credential counts as an authorization failure; a
/// role-based FORBIDDEN carries domain meaning and keeps its message.
fn classify(mut errors: Vec<GraphqlError>) -> AppError {
    let Some(first) = errors.drain(..).next() else {
        return AppError::Transport("gateway returned no data and no errors".to_string());
    };
    match first.extensions.code.as_deref() {
        Some("UNAUTHENTICATED") => AppError::Authorization,
        Some("BAD_USER_INPUT") => AppError::Validation(first.message),
        _ => AppError::DomainConflict(first.message),
    }
}

#[async_trait]
impl GraphqlGateway for HttpGateway {
    async fn execute(
        &self,
        document: &str,
        operation: &str,
        variables: Value,
    ) -> Result<Value, AppError> {
        let body = serde_json::json!({
            "operationName": operation,
            "query": document,
            "variables": variables,
        });

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = self.credentials.get() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if response.status().as_u16() == 401 {
            return Err(AppError::Authorization);
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Transport(format!("HTTP {}: {}", status, text)));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("invalid gateway response: {}", e)))?;

        if !envelope.errors.is_empty() {
            let err = classify(envelope.errors);
            if err.is_authorization() {
                tracing::warn!(operation, "gateway rejected credential");
            }
            return Err(err);
        }

        envelope
            .data
            .ok_or_else(|| AppError::Transport("gateway returned neither data nor errors".to_string()))
    }
}
