// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token decode tests against production-shaped (signed) tokens.
//!
//! The decoder never checks the signature, but these tests mint real
//! HS256 tokens so the segment and padding layout matches what a live
//! gateway hands out.

mod common;

use internmatch::auth::{decode_claims, evaluate, AccessDecision, DecodeError};
use internmatch::models::Role;

#[test]
fn test_signed_token_roundtrips_claims() {
    let token = common::mint_token("u42", "ada@example.com", "student");

    let claims = decode_claims(&token).expect("well-formed token must decode");
    assert_eq!(claims.sub, "u42");
    assert_eq!(claims.email, "ada@example.com");
    assert_eq!(claims.role, Role::Student);
    assert_eq!(claims.iat, Some(1_700_000_000));
    assert_eq!(claims.exp, Some(1_700_086_400));
}

#[test]
fn test_uppercase_role_claim_satisfies_lowercase_route() {
    let token = common::mint_token("u1", "root@example.com", "ADMIN");

    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(
        evaluate(Some(&claims), Some(Role::Admin)),
        AccessDecision::Allow
    );
}

#[test]
fn test_single_segment_token_yields_no_session() {
    // "abc" has no payload segment at all.
    let result = decode_claims("abc");
    assert!(matches!(result, Err(DecodeError::Malformed)));

    // With no claims, a student-only route redirects to login.
    assert_eq!(
        evaluate(None, Some(Role::Student)),
        AccessDecision::RedirectLogin
    );
}

#[test]
fn test_malformed_tokens_fail_without_panicking() {
    let cases = [
        "",
        ".",
        "..",
        "header-only",
        "h.$not-base64$.s",
        "h.bm90IGpzb24.s", // "not json"
    ];
    for token in cases {
        assert!(
            decode_claims(token).is_err(),
            "expected decode failure for {token:?}"
        );
    }
}

#[test]
fn test_decode_failure_is_not_an_authorization_error() {
    use internmatch::error::AppError;

    let err = AppError::from(decode_claims("abc").unwrap_err());
    assert!(!err.is_authorization());
}
