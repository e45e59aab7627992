// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! InternMatch client core.
//!
//! Client-side session handling, role-based access decisions, and domain
//! state machines for the InternMatch portal. All authoritative state
//! lives behind the GraphQL gateway; this crate decides what a client
//! may sensibly offer and keeps its local view consistent.

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod services;

use auth::{CredentialStore, Session};
use config::Config;
use error::Result;
use gateway::{GraphqlGateway, HttpGateway};
use services::{
    AdminService, ApplicationService, AuthService, ClientContext, JobService, ProfileService,
};
use std::sync::Arc;
use std::time::Duration;

/// Entry point tying the services to one shared context.
pub struct Portal<G> {
    ctx: Arc<ClientContext<G>>,
}

impl Portal<HttpGateway> {
    /// Portal over an HTTP gateway, with the persistent credential store.
    pub fn connect(config: &Config) -> Result<Self> {
        let credentials = Arc::new(match &config.credential_path {
            Some(path) => CredentialStore::at_path(path.clone()),
            None => CredentialStore::persistent()?,
        });
        let gateway = HttpGateway::new(
            config.gateway_url.clone(),
            Arc::clone(&credentials),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self::with_gateway(gateway, credentials))
    }
}

impl<G: GraphqlGateway> Portal<G> {
    /// Portal over any gateway implementation; tests inject a scripted one.
    pub fn with_gateway(gateway: G, credentials: Arc<CredentialStore>) -> Self {
        Self {
            ctx: Arc::new(ClientContext::new(gateway, credentials)),
        }
    }

    pub fn context(&self) -> &Arc<ClientContext<G>> {
        &self.ctx
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.ctx.session
    }

    pub fn auth(&self) -> AuthService<G> {
        AuthService::new(Arc::clone(&self.ctx))
    }

    pub fn jobs(&self) -> JobService<G> {
        JobService::new(Arc::clone(&self.ctx))
    }

    pub fn applications(&self) -> ApplicationService<G> {
        ApplicationService::new(Arc::clone(&self.ctx))
    }

    pub fn profiles(&self) -> ProfileService<G> {
        ProfileService::new(Arc::clone(&self.ctx))
    }

    pub fn admin(&self) -> AdminService<G> {
        AdminService::new(Arc::clone(&self.ctx))
    }
}
