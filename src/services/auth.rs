// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, signup, logout, and session resolution.

use super::ClientContext;
use crate::auth::{claims, SessionClaims, SessionStatus};
use crate::error::{AppError, Result};
use crate::gateway::{operations, GraphqlGateway};
use crate::models::{Role, User};
use serde_json::json;
use std::sync::Arc;
use validator::{Validate, ValidateEmail};

/// Credentials for login.
#[derive(Debug, Validate)]
pub struct LoginInput {
    #[validate(email(message = "enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Signup form.
#[derive(Debug, Validate)]
pub struct SignupInput {
    #[validate(email(message = "enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub confirm_password: String,
    pub role: Role,
}

/// New password form for a reset token.
#[derive(Debug, Validate)]
pub struct ResetPasswordInput {
    #[validate(length(min = 1, message = "reset token is required"))]
    pub token: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "passwords do not match"))]
    pub confirm_password: String,
}

/// Session lifecycle operations.
pub struct AuthService<G> {
    ctx: Arc<ClientContext<G>>,
}

impl<G: GraphqlGateway> AuthService<G> {
    pub fn new(ctx: Arc<ClientContext<G>>) -> Self {
        Self { ctx }
    }

    /// Restore the session from a persisted credential, if any.
    ///
    /// The decoded claims are advisory; `me()` confirms them against the
    /// gateway. A token that fails to decode is treated as no session.
    pub fn restore(&self) -> SessionStatus {
        let epoch = self.ctx.session.begin_resolution();
        let claims = self.ctx.credentials.get().and_then(|token| {
            match claims::decode_claims(&token) {
                Ok(claims) => Some(claims),
                Err(err) => {
                    tracing::debug!(error = %err, "stored credential not decodable, ignoring");
                    None
                }
            }
        });
        self.ctx.session.resolve(epoch, claims);
        self.ctx.session.status()
    }

    /// Log in and establish the session.
    pub async fn login(&self, input: LoginInput) -> Result<User> {
        input.validate()?;
        let data = self
            .ctx
            .execute(
                operations::LOGIN,
                "login",
                json!({ "email": input.email, "password": input.password }),
            )
            .await?;
        let payload: operations::AuthPayload = operations::field_as(data, "login")?;
        self.establish(payload)
    }

    /// Create an account and establish the session.
    pub async fn signup(&self, input: SignupInput) -> Result<User> {
        input.validate()?;
        let data = self
            .ctx
            .execute(
                operations::SIGNUP,
                "signup",
                json!({
                    "email": input.email,
                    "password": input.password,
                    "role": input.role,
                }),
            )
            .await?;
        let payload: operations::AuthPayload = operations::field_as(data, "signup")?;
        self.establish(payload)
    }

    fn establish(&self, payload: operations::AuthPayload) -> Result<User> {
        self.ctx.credentials.set(&payload.token)?;
        self.ctx.cache.clear();

        // Prefer the token's own claims; fall back to the returned user
        // if the payload segment is not decodable.
        let claims = claims::decode_claims(&payload.token)
            .unwrap_or_else(|_| SessionClaims::from_user(&payload.user));
        let epoch = self.ctx.session.begin_resolution();
        self.ctx.session.resolve(epoch, Some(claims));

        tracing::info!(user = %payload.user.id, role = %payload.user.role, "session established");
        Ok(payload.user)
    }

    /// Server-side identity check; re-evaluates the session on completion.
    pub async fn me(&self) -> Result<User> {
        let epoch = self.ctx.session.begin_resolution();
        let data = self.ctx.execute(operations::ME, "me", json!({})).await?;
        let user: User = operations::field_as(data, "me")?;
        if !self
            .ctx
            .session
            .resolve(epoch, Some(SessionClaims::from_user(&user)))
        {
            tracing::debug!("identity result arrived for an ended session, discarded");
        }
        Ok(user)
    }

    /// Drop the credential and end the session.
    pub fn logout(&self) -> Result<()> {
        self.ctx.credentials.clear()?;
        self.ctx.session.invalidate();
        self.ctx.cache.clear();
        tracing::info!("logged out");
        Ok(())
    }

    /// Ask the gateway to send a password reset email.
    pub async fn request_password_reset(&self, email: &str) -> Result<bool> {
        if !email.validate_email() {
            return Err(AppError::Validation(
                "enter a valid email address".to_string(),
            ));
        }
        let data = self
            .ctx
            .execute(
                operations::REQUEST_PASSWORD_RESET,
                "requestPasswordReset",
                json!({ "email": email }),
            )
            .await?;
        operations::field_as(data, "requestPasswordReset")
    }

    /// Set a new password using a reset token.
    pub async fn reset_password(&self, input: ResetPasswordInput) -> Result<bool> {
        input.validate()?;
        let data = self
            .ctx
            .execute(
                operations::RESET_PASSWORD,
                "resetPassword",
                json!({ "token": input.token, "newPassword": input.new_password }),
            )
            .await?;
        operations::field_as(data, "resetPassword")
    }
}
