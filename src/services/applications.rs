// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Applications: applying to jobs and moving them through review.

use super::ClientContext;
use crate::error::{AppError, Result};
use crate::gateway::{operations, GraphqlGateway};
use crate::models::{Application, ApplicationStatus, Job, JobStatus};
use serde_json::json;
use std::sync::Arc;

/// Application operations.
pub struct ApplicationService<G> {
    ctx: Arc<ClientContext<G>>,
}

impl<G: GraphqlGateway> ApplicationService<G> {
    pub fn new(ctx: Arc<ClientContext<G>>) -> Self {
        Self { ctx }
    }

    /// List the applications visible to the current account.
    pub async fn list(&self) -> Result<Vec<Application>> {
        self.ctx
            .query_cached(
                operations::GET_ALL_APPLICATIONS,
                "getAllApplications",
                json!({}),
                "getAllApplications",
            )
            .await
    }

    /// Find one application by ID.
    pub async fn find(&self, application_id: &str) -> Result<Application> {
        self.list()
            .await?
            .into_iter()
            .find(|application| application.id == application_id)
            .ok_or_else(|| {
                AppError::Validation(format!("no application with ID {application_id}"))
            })
    }

    /// Whether an application for `job_id` is already on record.
    pub async fn has_applied(&self, job_id: &str) -> Result<bool> {
        Ok(self
            .list()
            .await?
            .iter()
            .any(|application| application.job_id == job_id))
    }

    /// Apply to an open job.
    ///
    /// An application already on record short-circuits without a gateway
    /// call. A duplicate the server catches first comes back as a domain
    /// conflict; the cached list is dropped so the existing application
    /// shows up on the next read.
    pub async fn apply(&self, job: &Job, cover_letter: Option<String>) -> Result<Application> {
        if job.status != JobStatus::Open {
            return Err(AppError::Validation(
                "this job is no longer accepting applications".to_string(),
            ));
        }
        if self.has_applied(&job.id).await? {
            return Err(AppError::Validation(
                "you have already applied to this job".to_string(),
            ));
        }

        match self
            .ctx
            .mutate::<Application>(
                operations::CREATE_APPLICATION,
                "createApplication",
                json!({ "jobId": job.id, "coverLetter": cover_letter }),
                "createApplication",
                &["getAllApplications"],
            )
            .await
        {
            Ok(application) => {
                tracing::info!(
                    application = %application.id,
                    job = %job.id,
                    score = application.match_score,
                    "application submitted"
                );
                Ok(application)
            }
            Err(err @ AppError::DomainConflict(_)) => {
                // The server saw an existing application we had not.
                self.ctx.cache.invalidate_operation("getAllApplications");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Request a status change.
    ///
    /// Illegal moves are refused locally so the UI never offers them. A
    /// server refusal drops cached state (the next read is authoritative)
    /// and propagates verbatim; nothing is retried.
    pub async fn update_status(
        &self,
        application: &Application,
        to: ApplicationStatus,
    ) -> Result<Application> {
        if !application.status.can_transition_to(to) {
            return Err(AppError::Validation(format!(
                "an application cannot move from {} to {}",
                application.status, to
            )));
        }

        match self
            .ctx
            .mutate::<Application>(
                operations::UPDATE_APPLICATION_STATUS,
                "updateApplicationStatus",
                json!({ "id": application.id, "status": to }),
                "updateApplicationStatus",
                &["getAllApplications"],
            )
            .await
        {
            Ok(updated) => {
                tracing::info!(application = %updated.id, status = %updated.status, "application status updated");
                Ok(updated)
            }
            Err(err @ AppError::DomainConflict(_)) => {
                self.ctx.cache.invalidate_operation("getAllApplications");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
