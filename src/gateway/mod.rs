// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GraphQL gateway boundary: the transport client and the operation
//! documents the portal consumes.

pub mod client;
pub mod operations;

pub use client::{GraphqlGateway, HttpGateway};
