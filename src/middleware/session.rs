// ABOUTME: Session middleware that resolves the session cookie into a SessionContext extension
// ABOUTME: Issues a Set-Cookie header when a new session is started
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::resources::ServerResources;
use crate::security::cookies::{get_cookie_value, session_cookie};
use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::warn;

/// Session middleware
///
/// Never rejects a request: a missing, unknown, or expired cookie simply
/// starts a new session. Handlers read the result with
/// `Extension<SessionContext>`.
pub async fn session_middleware(
    State(resources): State<Arc<ServerResources>>,
    mut req: Request,
    next: Next,
) -> Response {
    let session_config = &resources.config.session;
    let cookie = get_cookie_value(req.headers(), &session_config.cookie_name);
    let session = resources.sessions.load_or_create(cookie.as_deref()).await;

    let set_cookie = session.is_new().then(|| {
        session_cookie(
            &session_config.cookie_name,
            session.session_id(),
            session_config.secure_cookie,
        )
    });

    req.extensions_mut().insert(session);
    let mut response = next.run(req).await;

    if let Some(cookie) = set_cookie {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Failed to encode session cookie"),
        }
    }

    response
}
