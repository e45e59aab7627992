// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin directory operations and company verification.
//!
//! Rejecting a verification request is deliberately absent: the gateway
//! exposes no such operation and verification has no reverse edge.

use super::ClientContext;
use crate::error::Result;
use crate::gateway::{operations, GraphqlGateway};
use crate::models::{CompanyProfile, StudentProfile, User};
use serde_json::json;
use std::sync::Arc;

/// Operations available to admin-role accounts.
pub struct AdminService<G> {
    ctx: Arc<ClientContext<G>>,
}

impl<G: GraphqlGateway> AdminService<G> {
    pub fn new(ctx: Arc<ClientContext<G>>) -> Self {
        Self { ctx }
    }

    /// Every registered account.
    pub async fn users(&self) -> Result<Vec<User>> {
        self.ctx
            .query_cached(operations::GET_ALL_USERS, "getAllUsers", json!({}), "getAllUsers")
            .await
    }

    /// Delete an account and everything it owns.
    pub async fn delete_user(&self, user_id: &str) -> Result<bool> {
        let deleted: bool = self
            .ctx
            .mutate(
                operations::DELETE_USER,
                "deleteUser",
                json!({ "userId": user_id }),
                "deleteUser",
                &[
                    "getAllUsers",
                    "getAllStudentProfiles",
                    "getAllCompanyProfiles",
                    "getAllJobs",
                    "getAllApplications",
                ],
            )
            .await?;
        tracing::info!(user = %user_id, deleted, "user deletion requested");
        Ok(deleted)
    }

    /// Company directory, optionally restricted to verified companies.
    pub async fn company_profiles(&self, verified_only: bool) -> Result<Vec<CompanyProfile>> {
        self.ctx
            .query_cached(
                operations::GET_ALL_COMPANY_PROFILES,
                "getAllCompanyProfiles",
                json!({ "verifiedOnly": verified_only }),
                "getAllCompanyProfiles",
            )
            .await
    }

    /// Mark a company as verified.
    ///
    /// Verifying an already-verified profile is a no-op and does not hit
    /// the gateway; the profile comes back unchanged.
    pub async fn verify_company(&self, profile: &CompanyProfile) -> Result<CompanyProfile> {
        if profile.is_verified {
            return Ok(profile.clone());
        }

        let updated: CompanyProfile = self
            .ctx
            .mutate(
                operations::VERIFY_COMPANY,
                "verifyCompany",
                json!({ "companyProfileId": profile.id }),
                "verifyCompany",
                &["getAllCompanyProfiles", "getCompanyProfile"],
            )
            .await?;
        tracing::info!(company = %updated.id, "company verified");
        Ok(updated)
    }

    /// Student directory.
    pub async fn student_profiles(&self) -> Result<Vec<StudentProfile>> {
        self.ctx
            .query_cached(
                operations::GET_ALL_STUDENT_PROFILES,
                "getAllStudentProfiles",
                json!({}),
                "getAllStudentProfiles",
            )
            .await
    }
}
