// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side session handling: credential storage, advisory claims
//! decoding, and role-based access decisions.
//!
//! Nothing in this module is a security boundary. The decoded claims and
//! the gate exist so the client can route and render sensibly; the
//! gateway re-checks authorization on every request.

pub mod claims;
pub mod gate;
pub mod session;
pub mod store;

pub use claims::{decode_claims, DecodeError, SessionClaims};
pub use gate::{evaluate, AccessDecision};
pub use session::{Session, SessionStatus};
pub use store::CredentialStore;
