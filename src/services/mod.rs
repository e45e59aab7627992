// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Portal services - high-level operations over the gateway.

pub mod admin;
pub mod applications;
pub mod auth;
pub mod cache;
pub mod jobs;
pub mod profiles;

pub use admin::AdminService;
pub use applications::ApplicationService;
pub use auth::{AuthService, LoginInput, ResetPasswordInput, SignupInput};
pub use cache::QueryCache;
pub use jobs::{JobFilter, JobService};
pub use profiles::ProfileService;

use crate::auth::{CredentialStore, Session};
use crate::error::{AppError, Result};
use crate::gateway::{operations, GraphqlGateway};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Shared state behind every service: the gateway plus the only two
/// pieces of cross-component mutable state (credential and session).
pub struct ClientContext<G> {
    pub gateway: G,
    pub credentials: Arc<CredentialStore>,
    pub session: Arc<Session>,
    pub cache: QueryCache,
}

impl<G: GraphqlGateway> ClientContext<G> {
    pub fn new(gateway: G, credentials: Arc<CredentialStore>) -> Self {
        Self {
            gateway,
            credentials,
            session: Arc::new(Session::new()),
            cache: QueryCache::new(),
        }
    }

    /// Execute an operation, applying the credential-invalidation policy:
    /// an authorization failure from the gateway ends the local session.
    pub async fn execute(&self, document: &str, operation: &str, variables: Value) -> Result<Value> {
        match self.gateway.execute(document, operation, variables).await {
            Err(err @ AppError::Authorization) => {
                tracing::info!(operation, "credential rejected by gateway, ending session");
                self.credentials.clear()?;
                self.session.invalidate();
                self.cache.clear();
                Err(err)
            }
            other => other,
        }
    }

    /// Execute a query, serving and refreshing the cache.
    pub async fn query_cached<T>(
        &self,
        document: &str,
        operation: &str,
        variables: Value,
        field: &str,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let epoch = self.session.epoch();
        let key = QueryCache::key(operation, &variables);
        if let Some(hit) = self.cache.get_as::<T>(&key, epoch) {
            return Ok(hit);
        }

        let data = self.execute(document, operation, variables).await?;
        let value: T = operations::field_as(data, field)?;

        // A result that raced a logout belongs to a dead session.
        if epoch == self.session.epoch() {
            self.cache.put(key, epoch, &value);
        }
        Ok(value)
    }

    /// Execute a mutation and drop the cached lists it invalidates.
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        document: &str,
        operation: &str,
        variables: Value,
        field: &str,
        invalidates: &[&str],
    ) -> Result<T> {
        let data = self.execute(document, operation, variables).await?;
        for op in invalidates {
            self.cache.invalidate_operation(op);
        }
        operations::field_as(data, field)
    }
}
