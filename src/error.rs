// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error taxonomy with one recovery policy per class.

use crate::auth::DecodeError;

/// Errors surfaced by the portal client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed bearer token; recovered locally by treating the session
    /// as absent, never shown to the user.
    #[error("session token could not be decoded: {0}")]
    Decode(#[from] DecodeError),

    /// The gateway rejected the credential. The store is cleared and the
    /// caller redirects to login; there is no user-visible error text.
    #[error("authentication required")]
    Authorization,

    /// Input failed a client-side precondition; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The gateway rejected a legal-looking request because of domain
    /// state; the server message is surfaced verbatim.
    #[error("{0}")]
    DomainConflict(String),

    /// Network or server failure unrelated to authorization.
    #[error("gateway request failed: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Whether this error invalidates the stored credential.
    pub fn is_authorization(&self) -> bool {
        matches!(self, AppError::Authorization)
    }

    /// Message suitable for direct display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Decode(_) | AppError::Authorization => {
                "Please log in to continue.".to_string()
            }
            AppError::Validation(msg) | AppError::DomainConflict(msg) => msg.clone(),
            AppError::Transport(_) => {
                "Something went wrong talking to the server. Please try again.".to_string()
            }
            AppError::Internal(_) => "Unexpected error. Please try again.".to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_authorization_invalidates_credential() {
        assert!(AppError::Authorization.is_authorization());
        assert!(!AppError::Validation("x".to_string()).is_authorization());
        assert!(!AppError::DomainConflict("x".to_string()).is_authorization());
        assert!(!AppError::Transport("x".to_string()).is_authorization());
    }

    #[test]
    fn test_domain_conflict_message_is_verbatim() {
        let err = AppError::DomainConflict("You have already applied to this job".to_string());
        assert_eq!(err.user_message(), "You have already applied to this job");
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err = AppError::Transport("connection reset by peer".to_string());
        assert!(!err.user_message().contains("connection reset"));
    }
}
