// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application model and its review-status machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Review pipeline status. `Accepted` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/", rename_all = "snake_case")
)]
pub enum ApplicationStatus {
    Applied,
    Reviewing,
    InterviewScheduled,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Reviewing,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// Status assigned by the gateway when a student applies.
    pub fn initial() -> Self {
        ApplicationStatus::Applied
    }

    /// Terminal statuses admit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, ApplicationStatus::Accepted | ApplicationStatus::Rejected)
    }

    /// Whether `self -> to` is a legal transition: one step forward along
    /// the review pipeline, or from any non-terminal status straight to a
    /// terminal one.
    pub fn can_transition_to(self, to: ApplicationStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self, to) {
            (ApplicationStatus::Applied, ApplicationStatus::Reviewing) => true,
            (ApplicationStatus::Reviewing, ApplicationStatus::InterviewScheduled) => true,
            (_, ApplicationStatus::Accepted) | (_, ApplicationStatus::Rejected) => true,
            _ => false,
        }
    }

    /// Statuses a reviewer may legally be offered from `self`.
    pub fn next_statuses(self) -> Vec<ApplicationStatus> {
        Self::ALL
            .into_iter()
            .filter(|to| self.can_transition_to(*to))
            .collect()
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "reviewing" => Ok(ApplicationStatus::Reviewing),
            "interview_scheduled" => Ok(ApplicationStatus::InterviewScheduled),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("unknown application status {s:?}")),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::InterviewScheduled => "interview_scheduled",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        })
    }
}

/// A student's application to a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub student_profile_id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub cover_letter: Option<String>,
    /// Server-computed fit score in [0, 1]; the client never recomputes it.
    pub match_score: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub applied_at: DateTime<Utc>,
}
