// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resolved-session tracking with stale-update protection.

use super::claims::SessionClaims;
use super::gate::{self, AccessDecision};
use crate::models::Role;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Resolution state of the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Identity not yet resolved; make no access decision.
    Unresolved,
    /// No authenticated identity.
    Anonymous,
    /// Identity known.
    Authenticated,
}

struct Inner {
    status: SessionStatus,
    claims: Option<SessionClaims>,
}

/// Shared session handle.
///
/// Writers replace the whole claims value at once, and an epoch counter
/// tags each in-flight resolution so a completion that raced a logout is
/// discarded instead of resurrecting the old identity.
pub struct Session {
    inner: RwLock<Inner>,
    epoch: AtomicU64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                status: SessionStatus::Unresolved,
                claims: None,
            }),
            epoch: AtomicU64::new(0),
        }
    }

    /// Current epoch; advances whenever the session is invalidated.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Mark a resolution as started, returning the epoch it belongs to.
    pub fn begin_resolution(&self) -> u64 {
        self.epoch()
    }

    /// Complete a resolution started at `epoch`.
    ///
    /// Returns false (and changes nothing) when the session moved on while
    /// the resolution was in flight.
    pub fn resolve(&self, epoch: u64, claims: Option<SessionClaims>) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if epoch != self.epoch() {
            return false;
        }
        inner.status = if claims.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Anonymous
        };
        inner.claims = claims;
        true
    }

    /// Drop the identity and advance the epoch.
    pub fn invalidate(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        self.epoch.fetch_add(1, Ordering::SeqCst);
        inner.status = SessionStatus::Anonymous;
        inner.claims = None;
    }

    pub fn status(&self) -> SessionStatus {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status
    }

    pub fn claims(&self) -> Option<SessionClaims> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .claims
            .clone()
    }

    /// Gate decision for a route requiring `required`.
    ///
    /// Returns `None` while the identity is unresolved so callers render a
    /// holding state instead of flashing the wrong page.
    pub fn decide(&self, required: Option<Role>) -> Option<AccessDecision> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        match inner.status {
            SessionStatus::Unresolved => None,
            _ => Some(gate::evaluate(inner.claims.as_ref(), required)),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
