// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role-based access decisions for route rendering.

use super::claims::SessionClaims;
use crate::models::Role;

/// Outcome of an access check for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Render the route.
    Allow,
    /// No session; send the visitor to the login page.
    RedirectLogin,
    /// Session present but the role does not match; send home.
    RedirectHome,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Decide access for a route requiring `required` (`None` means any
/// authenticated session is enough).
///
/// Roles are compared as the canonical enum, so casing differences in the
/// raw claims never matter here.
pub fn evaluate(session: Option<&SessionClaims>, required: Option<Role>) -> AccessDecision {
    let Some(claims) = session else {
        return AccessDecision::RedirectLogin;
    };
    match required {
        None => AccessDecision::Allow,
        Some(role) if claims.role == role => AccessDecision::Allow,
        Some(_) => AccessDecision::RedirectHome,
    }
}
