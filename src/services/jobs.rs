// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job listing and posting.

use super::ClientContext;
use crate::error::{AppError, Result};
use crate::gateway::{operations, GraphqlGateway};
use crate::models::{CompanyProfile, CreateJobInput, Job, JobStatus};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// Filters for listing jobs.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub company_profile_id: Option<String>,
}

/// Job operations.
pub struct JobService<G> {
    ctx: Arc<ClientContext<G>>,
}

impl<G: GraphqlGateway> JobService<G> {
    pub fn new(ctx: Arc<ClientContext<G>>) -> Self {
        Self { ctx }
    }

    /// List jobs, optionally filtered by status or posting company.
    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let variables = json!({
            "status": filter.status,
            "companyProfileId": filter.company_profile_id,
        });
        self.ctx
            .query_cached(operations::GET_ALL_JOBS, "getAllJobs", variables, "getAllJobs")
            .await
    }

    /// Find one job by ID.
    pub async fn find(&self, job_id: &str) -> Result<Job> {
        self.list(&JobFilter::default())
            .await?
            .into_iter()
            .find(|job| job.id == job_id)
            .ok_or_else(|| AppError::Validation(format!("no job with ID {job_id}")))
    }

    /// Post a new job.
    ///
    /// Blocked locally while the company is unverified; the gateway
    /// re-checks regardless.
    pub async fn create(&self, input: &CreateJobInput) -> Result<Job> {
        input.validate()?;

        let profile: Option<CompanyProfile> = self
            .ctx
            .query_cached(
                operations::GET_COMPANY_PROFILE,
                "getCompanyProfile",
                json!({}),
                "getCompanyProfile",
            )
            .await?;
        let profile = profile.ok_or_else(|| {
            AppError::Validation("create a company profile before posting jobs".to_string())
        })?;
        if !profile.can_post_jobs() {
            return Err(AppError::Validation(
                "your company registration is not verified yet; jobs can be posted once an administrator verifies it"
                    .to_string(),
            ));
        }

        let job: Job = self
            .ctx
            .mutate(
                operations::CREATE_JOB,
                "createJob",
                json!({ "input": input }),
                "createJob",
                &["getAllJobs"],
            )
            .await?;
        tracing::info!(job = %job.id, title = %job.title, "job posted");
        Ok(job)
    }

    /// Close an open posting. Closing is never offered once closed.
    ///
    /// On a server refusal the cached job lists are dropped so the next
    /// read is authoritative; the refusal itself propagates verbatim.
    pub async fn close(&self, job: &Job) -> Result<Job> {
        if !job.status.can_transition_to(JobStatus::Closed) {
            return Err(AppError::Validation(format!(
                "a {} job cannot be closed",
                job.status
            )));
        }

        match self
            .ctx
            .mutate::<Job>(
                operations::UPDATE_JOB_STATUS,
                "updateJobStatus",
                json!({ "id": job.id, "status": JobStatus::Closed }),
                "updateJobStatus",
                &["getAllJobs"],
            )
            .await
        {
            Ok(updated) => {
                tracing::info!(job = %updated.id, "job closed");
                Ok(updated)
            }
            Err(err @ AppError::DomainConflict(_)) => {
                // Our view of the job was behind the server's.
                self.ctx.cache.invalidate_operation("getAllJobs");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
