// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Student and company profile management.

use super::ClientContext;
use crate::error::Result;
use crate::gateway::{operations, GraphqlGateway};
use crate::models::{CompanyProfile, CompanyProfileInput, StudentProfile, StudentProfileInput};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// Profile operations for the current account.
pub struct ProfileService<G> {
    ctx: Arc<ClientContext<G>>,
}

impl<G: GraphqlGateway> ProfileService<G> {
    pub fn new(ctx: Arc<ClientContext<G>>) -> Self {
        Self { ctx }
    }

    // ─── Company ─────────────────────────────────────────────

    /// The current account's company profile, if one exists.
    pub async fn company(&self) -> Result<Option<CompanyProfile>> {
        self.ctx
            .query_cached(
                operations::GET_COMPANY_PROFILE,
                "getCompanyProfile",
                json!({}),
                "getCompanyProfile",
            )
            .await
    }

    pub async fn create_company(&self, input: &CompanyProfileInput) -> Result<CompanyProfile> {
        input.validate()?;
        let profile: CompanyProfile = self
            .ctx
            .mutate(
                operations::CREATE_COMPANY_PROFILE,
                "createCompanyProfile",
                json!({ "input": input }),
                "createCompanyProfile",
                &["getCompanyProfile", "getAllCompanyProfiles"],
            )
            .await?;
        tracing::info!(company = %profile.id, "company profile created");
        Ok(profile)
    }

    pub async fn update_company(&self, input: &CompanyProfileInput) -> Result<CompanyProfile> {
        input.validate()?;
        self.ctx
            .mutate(
                operations::UPDATE_COMPANY_PROFILE,
                "updateCompanyProfile",
                json!({ "input": input }),
                "updateCompanyProfile",
                &["getCompanyProfile", "getAllCompanyProfiles"],
            )
            .await
    }

    // ─── Student ─────────────────────────────────────────────

    /// The current account's student profile, if one exists.
    pub async fn student(&self) -> Result<Option<StudentProfile>> {
        self.ctx
            .query_cached(
                operations::GET_STUDENT_PROFILE,
                "getStudentProfile",
                json!({}),
                "getStudentProfile",
            )
            .await
    }

    pub async fn create_student(&self, input: &StudentProfileInput) -> Result<StudentProfile> {
        input.validate()?;
        let profile: StudentProfile = self
            .ctx
            .mutate(
                operations::CREATE_STUDENT_PROFILE,
                "createStudentProfile",
                json!({ "input": input }),
                "createStudentProfile",
                &["getStudentProfile", "getAllStudentProfiles"],
            )
            .await?;
        tracing::info!(student = %profile.id, "student profile created");
        Ok(profile)
    }

    pub async fn update_student(&self, input: &StudentProfileInput) -> Result<StudentProfile> {
        input.validate()?;
        self.ctx
            .mutate(
                operations::UPDATE_STUDENT_PROFILE,
                "updateStudentProfile",
                json!({ "input": input }),
                "updateStudentProfile",
                &["getStudentProfile", "getAllStudentProfiles"],
            )
            .await
    }
}
