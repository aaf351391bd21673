// ABOUTME: CSRF (Cross-Site Request Forgery) token generation and comparison
// ABOUTME: Tokens are random per session and compared in constant time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSRF protection primitives
//!
//! Each session carries one synchronizer token. Pages embed it, and
//! state-changing requests echo it back in the `X-CSRF-Token` header or a
//! `csrf_token` form field.

use rand::Rng;
use recipe_core::constants::session::CSRF_TOKEN_LENGTH;
use subtle::ConstantTimeEq;

/// Generate a hex-encoded random token of `len` bytes
#[must_use]
pub fn generate_random_token(len: usize) -> String {
    let random_bytes: Vec<u8> = (0..len).map(|_| rand::thread_rng().gen()).collect();
    hex::encode(random_bytes)
}

/// Generate a new CSRF token (32 bytes = 256 bits)
#[must_use]
pub fn generate_csrf_token() -> String {
    generate_random_token(CSRF_TOKEN_LENGTH)
}

/// Compare a submitted token against the session token in constant time
#[must_use]
pub fn tokens_match(expected: &str, provided: &str) -> bool {
    expected.len() == provided.len() && bool::from(expected.as_bytes().ct_eq(provided.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_hex_and_unique() {
        let a = generate_csrf_token();
        let b = generate_csrf_token();
        assert_eq!(a.len(), CSRF_TOKEN_LENGTH * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_tokens_match() {
        let token = generate_csrf_token();
        assert!(tokens_match(&token, &token.clone()));
        assert!(!tokens_match(&token, "short"));
        assert!(!tokens_match(&token, &generate_csrf_token()));
    }
}
