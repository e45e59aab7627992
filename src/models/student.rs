//! Student profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Experience band a student is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/", rename_all = "lowercase")
)]
pub enum ExperienceLevel {
    Intern,
    Junior,
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intern" => Ok(ExperienceLevel::Intern),
            "junior" => Ok(ExperienceLevel::Junior),
            _ => Err(format!(
                "unknown experience level {s:?} (expected intern or junior)"
            )),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExperienceLevel::Intern => "intern",
            ExperienceLevel::Junior => "junior",
        })
    }
}

/// One education entry on a student profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Education {
    pub school: String,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

/// Student profile, one-to-one with a student-role user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StudentProfile {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Skill names used only for server-side match scoring.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating or updating a student profile.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub skills: Vec<String>,
    #[validate(url(message = "CV URL must be a valid URL"))]
    pub cv_url: Option<String>,
    pub bio: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Vec<Education>,
}
