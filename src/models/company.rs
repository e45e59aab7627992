// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Company profile model; verification is a one-way admin action.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Company profile owned by a company-role user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompanyProfile {
    pub id: String,
    pub company_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Set by an admin verify action; never observed going back to false.
    pub is_verified: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub updated_at: DateTime<Utc>,
}

impl CompanyProfile {
    /// Only verified companies may post jobs.
    pub fn can_post_jobs(&self) -> bool {
        self.is_verified
    }
}

/// Whether a verification flag change is a legal transition. The only
/// edge is false -> true; there is no exposed reverse edge.
pub fn verification_transition_allowed(from: bool, to: bool) -> bool {
    !from && to
}

/// Fields for creating or updating a company profile.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfileInput {
    #[validate(length(min = 1, message = "company name is required"))]
    pub company_name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    #[validate(url(message = "logo URL must be a valid URL"))]
    pub logo_url: Option<String>,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
}
