// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job posting model and its status machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Seniority band a job is posted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/", rename_all = "lowercase")
)]
pub enum JobType {
    Intern,
    Junior,
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intern" => Ok(JobType::Intern),
            "junior" => Ok(JobType::Junior),
            _ => Err(format!("unknown job type {s:?} (expected intern or junior)")),
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JobType::Intern => "intern",
            JobType::Junior => "junior",
        })
    }
}

/// Posting lifecycle. New jobs open implicitly; closing is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/", rename_all = "lowercase")
)]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    /// Status assigned by the gateway on creation.
    pub fn initial() -> Self {
        JobStatus::Open
    }

    /// Whether `self -> to` is a legal transition. The only edge is
    /// `open -> closed`; there is no way to reopen a posting.
    pub fn can_transition_to(self, to: JobStatus) -> bool {
        matches!((self, to), (JobStatus::Open, JobStatus::Closed))
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(format!("unknown job status {s:?} (expected open or closed)")),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
        })
    }
}

/// Job posting owned by a company profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Job {
    pub id: String,
    pub company_profile_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub status: JobStatus,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub posted_at: DateTime<Utc>,
}

/// Fields for posting a new job. The status is not part of the input;
/// the gateway opens the posting implicitly.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[validate(length(min = 1, message = "list at least one required skill"))]
    pub required_skills: Vec<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
}
