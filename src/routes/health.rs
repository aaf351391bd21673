// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness without dependencies and readiness with a database round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::health::{HealthResponse, HealthStatus};
use crate::resources::ServerResources;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle GET /health - liveness probe
    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<HealthResponse> {
        Json(resources.health.basic_health())
    }

    /// Handle GET /ready - readiness probe including the database
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<HealthResponse>) {
        let report = resources
            .health
            .comprehensive_health(&resources.database)
            .await;
        let status = if report.status == HealthStatus::Healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(report))
    }
}
