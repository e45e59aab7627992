// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Advisory decoding of the bearer token's claims payload.
//!
//! The payload is read without checking the signature: the gateway is the
//! sole authority on whether a credential is actually valid. Decoding here
//! only answers "does someone look logged in" for routing purposes, so a
//! failure is never fatal; it just means "no session".

use crate::models::{Role, User};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;

/// Identity claims carried in the token payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    #[serde(alias = "id")]
    pub sub: String,
    /// Account email
    pub email: String,
    /// Account role, normalized to lowercase on decode
    pub role: Role,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration time (Unix timestamp)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl SessionClaims {
    /// Claims equivalent of a server-confirmed identity.
    pub fn from_user(user: &User) -> Self {
        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            iat: None,
            exp: None,
        }
    }
}

/// Why a token payload could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    Malformed,

    #[error("payload segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a valid claims object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims payload of a `header.payload.signature` token.
///
/// Only the middle segment is read; the signature is ignored entirely.
pub fn decode_claims(token: &str) -> Result<SessionClaims, DecodeError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(DecodeError::Malformed),
    };

    // Payloads show up both padded and unpadded in the wild.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}
