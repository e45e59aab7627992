// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL documents and response shells for every portal operation.

use crate::error::AppError;
use crate::models::User;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Pull `field` out of a response `data` object and deserialize it.
pub fn field_as<T: DeserializeOwned>(mut data: Value, field: &str) -> Result<T, AppError> {
    let value = data
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| AppError::Transport(format!("gateway response is missing `{field}`")))?;
    serde_json::from_value(value).map_err(|e| {
        AppError::Transport(format!(
            "gateway response for `{field}` did not match the expected shape: {e}"
        ))
    })
}

/// Token plus account returned by login and signup.
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

// ─── Session ─────────────────────────────────────────────────

pub const LOGIN: &str = r#"
    mutation login($email: String!, $password: String!) {
        login(email: $email, password: $password) {
            token
            user { id email role createdAt }
        }
    }
"#;

pub const SIGNUP: &str = r#"
    mutation signup($email: String!, $password: String!, $role: Role!) {
        signup(email: $email, password: $password, role: $role) {
            token
            user { id email role createdAt }
        }
    }
"#;

pub const ME: &str = r#"
    query me {
        me { id email role createdAt }
    }
"#;

pub const REQUEST_PASSWORD_RESET: &str = r#"
    mutation requestPasswordReset($email: String!) {
        requestPasswordReset(email: $email)
    }
"#;

pub const RESET_PASSWORD: &str = r#"
    mutation resetPassword($token: String!, $newPassword: String!) {
        resetPassword(token: $token, newPassword: $newPassword)
    }
"#;

// ─── Jobs ────────────────────────────────────────────────────

pub const GET_ALL_JOBS: &str = r#"
    query getAllJobs($status: JobStatus, $companyProfileId: ID) {
        getAllJobs(status: $status, companyProfileId: $companyProfileId) {
            id companyProfileId title description type requiredSkills
            location salaryRange status postedAt
        }
    }
"#;

pub const CREATE_JOB: &str = r#"
    mutation createJob($input: CreateJobInput!) {
        createJob(input: $input) {
            id companyProfileId title description type requiredSkills
            location salaryRange status postedAt
        }
    }
"#;

pub const UPDATE_JOB_STATUS: &str = r#"
    mutation updateJobStatus($id: ID!, $status: JobStatus!) {
        updateJobStatus(id: $id, status: $status) {
            id companyProfileId title description type requiredSkills
            location salaryRange status postedAt
        }
    }
"#;

// ─── Applications ────────────────────────────────────────────

pub const GET_ALL_APPLICATIONS: &str = r#"
    query getAllApplications {
        getAllApplications {
            id jobId studentProfileId status coverLetter matchScore appliedAt
        }
    }
"#;

pub const CREATE_APPLICATION: &str = r#"
    mutation createApplication($jobId: ID!, $coverLetter: String) {
        createApplication(jobId: $jobId, coverLetter: $coverLetter) {
            id jobId studentProfileId status coverLetter matchScore appliedAt
        }
    }
"#;

pub const UPDATE_APPLICATION_STATUS: &str = r#"
    mutation updateApplicationStatus($id: ID!, $status: ApplicationStatus!) {
        updateApplicationStatus(id: $id, status: $status) {
            id jobId studentProfileId status coverLetter matchScore appliedAt
        }
    }
"#;

// ─── Company profiles ────────────────────────────────────────

pub const GET_COMPANY_PROFILE: &str = r#"
    query getCompanyProfile {
        getCompanyProfile {
            id companyName description industry location logoUrl website
            isVerified updatedAt
        }
    }
"#;

pub const CREATE_COMPANY_PROFILE: &str = r#"
    mutation createCompanyProfile($input: CompanyProfileInput!) {
        createCompanyProfile(input: $input) {
            id companyName description industry location logoUrl website
            isVerified updatedAt
        }
    }
"#;

pub const UPDATE_COMPANY_PROFILE: &str = r#"
    mutation updateCompanyProfile($input: CompanyProfileInput!) {
        updateCompanyProfile(input: $input) {
            id companyName description industry location logoUrl website
            isVerified updatedAt
        }
    }
"#;

pub const GET_ALL_COMPANY_PROFILES: &str = r#"
    query getAllCompanyProfiles($verifiedOnly: Boolean) {
        getAllCompanyProfiles(verifiedOnly: $verifiedOnly) {
            id companyName description industry location logoUrl website
            isVerified updatedAt
        }
    }
"#;

pub const VERIFY_COMPANY: &str = r#"
    mutation verifyCompany($companyProfileId: ID!) {
        verifyCompany(companyProfileId: $companyProfileId) {
            id companyName description industry location logoUrl website
            isVerified updatedAt
        }
    }
"#;

// ─── Student profiles ────────────────────────────────────────

pub const GET_STUDENT_PROFILE: &str = r#"
    query getStudentProfile {
        getStudentProfile {
            id userId firstName lastName skills cvUrl bio experienceLevel
            education { school degree field startYear endYear }
            updatedAt
        }
    }
"#;

pub const CREATE_STUDENT_PROFILE: &str = r#"
    mutation createStudentProfile($input: StudentProfileInput!) {
        createStudentProfile(input: $input) {
            id userId firstName lastName skills cvUrl bio experienceLevel
            education { school degree field startYear endYear }
            updatedAt
        }
    }
"#;

pub const UPDATE_STUDENT_PROFILE: &str = r#"
    mutation updateStudentProfile($input: StudentProfileInput!) {
        updateStudentProfile(input: $input) {
            id userId firstName lastName skills cvUrl bio experienceLevel
            education { school degree field startYear endYear }
            updatedAt
        }
    }
"#;

pub const GET_ALL_STUDENT_PROFILES: &str = r#"
    query getAllStudentProfiles {
        getAllStudentProfiles {
            id userId firstName lastName skills cvUrl bio experienceLevel
            education { school degree field startYear endYear }
            updatedAt
        }
    }
"#;

// ─── Users (admin) ───────────────────────────────────────────

pub const GET_ALL_USERS: &str = r#"
    query getAllUsers {
        getAllUsers { id email role createdAt }
    }
"#;

pub const DELETE_USER: &str = r#"
    mutation deleteUser($userId: ID!) {
        deleteUser(userId: $userId)
    }
"#;
