// ABOUTME: Route module organization for Recipe Book HTTP endpoints
// ABOUTME: Assembles page, like, contact, and health routes behind session and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for Recipe Book
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the provider client, the database managers, and the renderer.

/// Contact form routes
pub mod contact;
/// Health check and readiness routes
pub mod health;
/// Like and unlike actions
pub mod likes;
/// Server-rendered recipe pages
pub mod pages;

pub use contact::ContactRoutes;
pub use health::HealthRoutes;
pub use likes::{ActionResponse, LikeRoutes};
pub use pages::PageRoutes;

use crate::middleware::{make_request_span, session_middleware};
use crate::resources::ServerResources;
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router
///
/// Layer order, outermost first: request id assignment, HTTP trace span,
/// request id propagation to the response, session resolution.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(PageRoutes::routes(resources.clone()))
        .merge(LikeRoutes::routes(resources.clone()))
        .merge(ContactRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes(resources.clone()))
        .layer(middleware::from_fn_with_state(resources, session_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
