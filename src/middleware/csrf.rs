// ABOUTME: CSRF validation for state-changing HTTP requests
// ABOUTME: Checks the X-CSRF-Token header or csrf_token form field against the session token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSRF validation
//!
//! Form bodies can only be read once, so validation runs inside the handler
//! after the form is extracted rather than as a tower layer.

use crate::errors::{AppError, AppResult};
use crate::security::csrf::tokens_match;
use crate::session::SessionContext;
use axum::http::{HeaderMap, Method};
use recipe_core::constants::session::CSRF_HEADER;

/// Validate the CSRF token for a state-changing request
///
/// The header wins over the form field when both are present.
///
/// # Errors
///
/// Returns `PermissionDenied` (HTTP 403) when the token is missing or does not
/// match the session token.
pub fn validate_csrf(
    session: &SessionContext,
    method: &Method,
    headers: &HeaderMap,
    form_token: Option<&str>,
) -> AppResult<()> {
    // GET, HEAD, OPTIONS, etc. don't need CSRF protection
    if !matches!(
        method,
        &Method::POST | &Method::PUT | &Method::DELETE | &Method::PATCH
    ) {
        return Ok(());
    }

    let provided = headers
        .get(CSRF_HEADER)
        .and_then(|h| h.to_str().ok())
        .or(form_token)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!(method = %method, "CSRF token missing from state-changing request");
            AppError::permission_denied("CSRF token is required for this request")
        })?;

    if !tokens_match(session.csrf_token(), provided) {
        tracing::warn!(method = %method, "CSRF token mismatch");
        return Err(AppError::permission_denied("Invalid CSRF token"));
    }

    Ok(())
}
