// ABOUTME: Server health monitoring and database availability checks
// ABOUTME: Builds the JSON health report served by the health and readiness endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check reporting

use crate::config::Environment;
use crate::database::Database;
use recipe_core::constants::service_names;
use serde::{Deserialize, Serialize};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::error;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Everything works
    Healthy,
    /// Serving, with a failing component
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service information
    pub service: ServiceInfo,
    /// Individual component checks
    pub checks: Vec<ComponentHealth>,
    /// Response timestamp
    pub timestamp: u64,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Environment (development, testing, production)
    pub environment: String,
    /// Service uptime in seconds
    pub uptime_seconds: u64,
}

/// Individual component health status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component name
    pub name: String,
    /// Component status
    pub status: HealthStatus,
    /// Status description
    pub message: String,
    /// Check duration in milliseconds
    pub duration_ms: u64,
}

/// Health checker for the Recipe Book server
pub struct HealthChecker {
    start_time: Instant,
    environment: Environment,
}

impl HealthChecker {
    /// Create a new health checker; uptime counts from now
    #[must_use]
    pub fn new(environment: Environment) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
        }
    }

    fn service_info(&self) -> ServiceInfo {
        ServiceInfo {
            name: service_names::RECIPE_BOOK.into(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: self.environment.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Liveness report without touching dependencies
    #[must_use]
    pub fn basic_health(&self) -> HealthResponse {
        let start = Instant::now();
        let checks = vec![ComponentHealth {
            name: "service".into(),
            status: HealthStatus::Healthy,
            message: "Service is running".into(),
            duration_ms: 0,
        }];
        self.report(checks, start)
    }

    /// Readiness report including a database round trip
    pub async fn comprehensive_health(&self, database: &Database) -> HealthResponse {
        let start = Instant::now();
        let checks = vec![Self::check_database(database).await];
        self.report(checks, start)
    }

    async fn check_database(database: &Database) -> ComponentHealth {
        let start = Instant::now();
        let (status, message) = match database.ping().await {
            Ok(()) => (
                HealthStatus::Healthy,
                "Database is accessible and responsive".to_owned(),
            ),
            Err(e) => {
                error!("Database health check failed: {}", e);
                (HealthStatus::Unhealthy, format!("Database check failed: {e}"))
            }
        };

        ComponentHealth {
            name: "database".into(),
            status,
            message,
            duration_ms: elapsed_ms(start),
        }
    }

    fn report(&self, checks: Vec<ComponentHealth>, start: Instant) -> HealthResponse {
        let status = if checks.iter().any(|c| c.status == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Healthy
        };

        HealthResponse {
            status,
            service: self.service_info(),
            checks,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
            response_time_ms: elapsed_ms(start),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseUrl;

    #[test]
    fn test_basic_health_is_healthy() {
        let report = HealthChecker::new(Environment::Testing).basic_health();
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.service.environment, "testing");
    }

    #[tokio::test]
    async fn test_comprehensive_health_checks_database() {
        let database = Database::new(&DatabaseUrl::Memory).await.unwrap();
        let report = HealthChecker::new(Environment::Testing)
            .comprehensive_health(&database)
            .await;
        assert_eq!(report.status, HealthStatus::Healthy);
        assert_eq!(report.checks[0].name, "database");
    }
}
