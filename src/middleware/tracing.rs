// ABOUTME: Request tracing for correlation and structured logging
// ABOUTME: Builds per-request spans carrying the x-request-id set by tower-http
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::Body;
use axum::http::Request;
use tracing::Span;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the span for one HTTP request
///
/// Used as `TraceLayer::make_span_with`; the request id is already present
/// because `SetRequestIdLayer` runs first.
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
