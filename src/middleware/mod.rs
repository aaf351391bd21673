// ABOUTME: HTTP middleware for session resolution, CSRF validation, and request tracing
// ABOUTME: Attaches SessionContext to requests and builds the tower-http tracing stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CSRF validation for state-changing requests
pub mod csrf;
/// Session cookie resolution
pub mod session;
/// Request id and HTTP span layers
pub mod tracing;

pub use csrf::validate_csrf;
pub use session::session_middleware;
pub use tracing::{make_request_span, REQUEST_ID_HEADER};
